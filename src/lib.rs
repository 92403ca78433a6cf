//! # math_drill_gen
//!
//! A fully offline, deterministic math mini-game question generator.
//!
//! This library generates randomised questions for a collection of ten math
//! mini-games, from four-function arithmetic drills through sequence puzzles
//! and sabotaged geometry up to one-variable calculus. Each problem carries a
//! typed descriptor with everything a UI needs: the prompt, the options, the
//! correct answer, and an explanation or hint where the game has one.
//!
//! ## How it works
//!
//! 1. Create a [`QuizRequest`] with a game, difficulty, and optional RNG seed.
//! 2. Call [`generate_quiz`]. The engine seeds an RNG, stamps a problem ID,
//!    and routes to the game's generator, which synthesises the question so
//!    the correct answer is valid by construction (divisions come out even,
//!    sequences really follow their stated rule, exactly one option is right).
//! 3. The returned [`QuizProblem`] wraps the game-specific payload in a
//!    [`ProblemBody`] variant, ready to display in any UI.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same problem every time, useful for tests and daily challenges.
//! - **Session accounting**: [`QuizSession`] tracks score and answer tallies
//!   with per-game point tables, and [`ScoreBoard`] keeps the append-only
//!   history behind the leaderboard.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{generate_quiz, Difficulty, GameKind, ProblemBody, QuizRequest};
//!
//! // Minimal: only the game is required (defaults: Medium, entropy seed):
//! let problem = generate_quiz(QuizRequest::new(GameKind::Arithmetic));
//! println!("Problem: {}", problem.problem_id);
//!
//! // Full control:
//! let problem = generate_quiz(QuizRequest {
//!     game: GameKind::Pattern,
//!     difficulty: Difficulty::Hard,
//!     rng_seed: Some(42),
//! });
//!
//! if let ProblemBody::Pattern(p) = &problem.body {
//!     println!("{:?} -> ?", p.sequence);
//! }
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `math_drill_gen::generate_quiz`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    generate_quiz, Difficulty, GameKind, Operator, ProblemBody, QuizProblem,
    QuizRequest, QuizSession, ScoreBoard, ScoreRecord, ScoreSaver, LEADERBOARD_SIZE,
};

#[cfg(test)]
mod tests;

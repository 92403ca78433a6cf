//! Core quiz engine: problem generation, scoring, sessions, and score
//! persistence.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: difficulty, operators, request/response structs |
//! | `helpers`   | Shared builder functions that eliminate boilerplate across games |
//! | `generator` | Single entry point `generate_quiz()`, dispatches to games |
//! | `games`     | 9 game generators, one module per family |
//! | `scoring`   | Point tables, timers, and award formulas per game and tier |
//! | `feedback`  | Sarcastic feedback line pools |
//! | `session`   | Running score and answer tally for one play-through |
//! | `scores`    | Append-only score history and its JSON save file |

pub mod feedback;
pub mod games;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod scores;
pub mod scoring;
pub mod session;

// Re-export the public API surface so callers can use
// `quiz_engine::generate_quiz` without reaching into sub-modules.
pub use generator::generate_quiz;
pub use models::{
    Difficulty, GameKind, Operator, ProblemBody, QuizProblem, QuizRequest,
};
pub use scores::{ScoreBoard, ScoreRecord, ScoreSaver, LEADERBOARD_SIZE};
pub use session::QuizSession;

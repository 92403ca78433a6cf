//! Full demo of all 10 mini-games.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `math_drill_gen` works end to end:
//!
//! 1. **Minimal API**: `QuizRequest::new(game)` with defaults (Medium
//!    difficulty, entropy seed).
//!
//! 2. **All 10 games**: one problem per game with fixed seeds, so the
//!    output is deterministic and reproducible.
//!
//! 3. **Session scoring**: a short Arithmetic play-through feeding the
//!    score board.

use math_drill_gen::{
    generate_quiz, Difficulty, GameKind, ProblemBody, QuizRequest, QuizSession, ScoreBoard,
    LEADERBOARD_SIZE,
};

/// Generate and pretty-print one problem.
fn print_problem(game: GameKind, seed: u64) {
    let problem = generate_quiz(QuizRequest {
        game,
        difficulty: Difficulty::Medium,
        rng_seed: Some(seed),
    });

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  ID: {}", problem.game, problem.problem_id);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    match &problem.body {
        ProblemBody::Arithmetic(p) => {
            println!("  Q: {}", p.prompt);
            println!("  Options: {:?}  (answer: {})", p.options, p.correct);
        }
        ProblemBody::Pattern(p) => {
            println!("  Q: {:?}, ?", p.sequence);
            println!("  Rule: {}  Next: {}", p.label, p.next);
        }
        ProblemBody::RuleSwitch(p) => {
            println!("  Rule: {}", p.label);
            println!("  Options: {:?}  (pick #{})", p.options, p.correct_index + 1);
        }
        ProblemBody::TrueFalse(p) => {
            println!("  Statement: {}", p.statement);
            println!("  True or false? {}  ({})", p.is_true, p.explanation);
        }
        ProblemBody::SymbolSwap(p) => {
            let blanks: Vec<String> = p.operands.iter().map(|n| n.to_string()).collect();
            println!("  Q: {} = {}  (fill in {} operators)",
                blanks.join(" _ "), p.result, p.operator_count());
            let ops: Vec<&str> = p.operators.iter().map(|o| o.symbol()).collect();
            println!("  Hidden: {}", ops.join(" "));
        }
        ProblemBody::NumberDetective(p) => {
            println!("  Sequence: {:?}", p.numbers);
            println!("  Corrupted positions: {:?}", p.corrupted);
            println!("  {}", p.explanation);
        }
        ProblemBody::RedundantRule(p) => {
            println!("  Q: {}", p.expression);
            for (i, rule) in p.rules.iter().enumerate() {
                let marker = if i == p.useless_rule_index { "✗" } else { " " };
                println!("  [{marker}] {rule}");
            }
            println!("  Answer: {}", p.answer);
        }
        ProblemBody::Geometry(p) => {
            println!("  {}: {}", p.shape, p.given);
            println!("  Q: {}  (broken: {})", p.question, p.broken_rule);
            println!("  Options: {:?}  (answer: {})", p.options, p.correct_answer);
        }
        ProblemBody::Calculus(p) => {
            println!("  Q: {}", p.question);
            println!("  Options: {:?}", p.options);
            println!("  Answer: {}  Hint: {}", p.answer, p.hint);
        }
    }
    println!();
}

fn main() {
    // ── Minimal API ────────────────────────────────────────────────────────
    // QuizRequest::new() only requires a game; everything else defaults.
    println!();
    println!("══ Minimal API: QuizRequest::new() ══");
    println!();
    let p = generate_quiz(QuizRequest::new(GameKind::Arithmetic));
    println!("  Game: {}  ID: {}", p.game, p.problem_id);
    println!();

    // ── All 10 games ───────────────────────────────────────────────────────
    // One problem per game, fixed seed for reproducible output.
    println!();
    println!("══ All 10 games (Medium difficulty) ══");
    println!();

    let games = [
        (GameKind::Arithmetic, 1001u64),
        (GameKind::Pattern, 2002),
        (GameKind::RuleSwitch, 3003),
        (GameKind::TrueFalse, 4004),
        (GameKind::SymbolSwap, 5005),
        (GameKind::NumberDetective, 6006),
        (GameKind::RedundantRule, 7007),
        (GameKind::Geometry, 8008),
        (GameKind::Derivatives, 9009),
        (GameKind::Integrals, 1010),
    ];

    for (game, seed) in games {
        print_problem(game, seed);
    }

    // ── Session scoring ────────────────────────────────────────────────────
    println!();
    println!("══ Session scoring: three answers in Arithmetic (Hard) ══");
    println!();

    let mut board = ScoreBoard::new();
    let mut session = QuizSession::new(GameKind::Arithmetic, Difficulty::Hard);
    session.record_correct();
    session.record_correct();
    session.record_wrong();
    println!(
        "  Answered {} ({} correct), score {}",
        session.questions_answered(),
        session.correct_answers(),
        session.score()
    );
    if let Some(record) = session.finish() {
        board.push(record);
    }
    for entry in board.top(LEADERBOARD_SIZE) {
        println!("  {}: {} pts", entry.game_name, entry.points);
    }
}

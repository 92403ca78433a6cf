//! Point tables and time budgets.
//!
//! Every table here is fixed by game design, not computed: the per-game
//! points per correct answer, the session countdown per difficulty, and the
//! two special scoring schemes (Symbol Swap's bonus/penalty system and
//! Calcnia's speed bonus).

use crate::quiz_engine::models::{Difficulty, GameKind};

/// Questions per Broken Geometry session.
pub const GEOMETRY_QUESTION_QUOTA: u32 = 10;

/// Per-question clock for Broken Geometry, in seconds.
pub const GEOMETRY_QUESTION_SECONDS: u32 = 60;

/// Questions per Calcnia session.
pub const CALC_QUESTION_QUOTA: u32 = 10;

/// Points awarded for one correct answer.
///
/// Symbol Swap and Calcnia have their own schemes ([`swap_award`] and
/// [`calc_speed_points`]); their entries here are the base values those
/// schemes start from.
pub fn base_points(game: GameKind, difficulty: Difficulty) -> i64 {
    use Difficulty::*;
    match game {
        GameKind::Arithmetic => match difficulty { Easy => 5,   Medium => 10,  Hard => 15 },
        GameKind::Pattern => match difficulty { Easy => 10,  Medium => 15,  Hard => 20 },
        GameKind::RuleSwitch => match difficulty { Easy => 8,   Medium => 12,  Hard => 16 },
        GameKind::TrueFalse => match difficulty { Easy => 8,   Medium => 10,  Hard => 15 },
        GameKind::SymbolSwap => match difficulty { Easy => 15,  Medium => 30,  Hard => 50 },
        GameKind::NumberDetective => match difficulty { Easy => 15,  Medium => 20,  Hard => 30 },
        GameKind::RedundantRule => match difficulty { Easy => 20,  Medium => 25,  Hard => 35 },
        GameKind::Geometry => match difficulty { Easy => 15,  Medium => 20,  Hard => 30 },
        GameKind::Derivatives | GameKind::Integrals => {
            match difficulty { Easy => 100, Medium => 200, Hard => 300 }
        }
    }
}

/// Session countdown in seconds.
///
/// Broken Geometry uses a per-question clock instead
/// ([`GEOMETRY_QUESTION_SECONDS`]); Calcnia has no countdown, only the
/// question quota.
pub fn session_seconds(game: GameKind, difficulty: Difficulty) -> u32 {
    use Difficulty::*;
    match game {
        GameKind::Arithmetic | GameKind::TrueFalse => {
            match difficulty { Easy => 90, Medium => 60, Hard => 45 }
        }
        GameKind::Pattern => match difficulty { Easy => 120, Medium => 90, Hard => 60 },
        GameKind::RuleSwitch | GameKind::SymbolSwap => {
            match difficulty { Easy => 90, Medium => 75, Hard => 60 }
        }
        GameKind::NumberDetective => match difficulty { Easy => 150, Medium => 120, Hard => 90 },
        GameKind::RedundantRule => match difficulty { Easy => 180, Medium => 150, Hard => 120 },
        GameKind::Geometry => GEOMETRY_QUESTION_SECONDS,
        GameKind::Derivatives | GameKind::Integrals => 0,
    }
}

/// Calcnia speed scoring: base points plus a bonus that decays 2 points per
/// second of thinking time.
pub fn calc_speed_points(difficulty: Difficulty, seconds_taken: u32) -> i64 {
    let base = base_points(GameKind::Derivatives, difficulty);
    let bonus = (50i64 - 2 * seconds_taken as i64).max(0);
    base + bonus
}

/// Symbol Swap award for a correct answer: base points, a time bonus of one
/// point per 5 seconds left (only when more than 5 remain), and a 50% base
/// forfeit if a hint was used. A correct answer never pays less than 5.
pub fn swap_award(difficulty: Difficulty, time_left: u32, used_hint: bool) -> i64 {
    let base = base_points(GameKind::SymbolSwap, difficulty);
    let time_bonus = if time_left > 5 { (time_left / 5) as i64 } else { 0 };
    let hint_penalty = if used_hint { base / 2 } else { 0 };
    (base + time_bonus - hint_penalty).max(5)
}

/// Score deduction for a wrong Symbol Swap answer.
pub fn swap_wrong_penalty(difficulty: Difficulty) -> i64 {
    match difficulty {
        Difficulty::Easy => 5,
        Difficulty::Medium => 12,
        Difficulty::Hard => 18,
    }
}

/// Up-front cost of asking for a Symbol Swap hint.
pub fn swap_hint_cost(difficulty: Difficulty) -> i64 {
    match difficulty {
        Difficulty::Easy => 3,
        Difficulty::Medium => 7,
        Difficulty::Hard => 12,
    }
}

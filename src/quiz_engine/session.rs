//! Per-game session accounting: running score, answer tally, and the final
//! score record handed to the board.

use crate::quiz_engine::models::{Difficulty, GameKind};
use crate::quiz_engine::scores::ScoreRecord;
use crate::quiz_engine::scoring;

/// Accumulates one play-through of a game at a fixed difficulty.
///
/// The session never goes negative: penalty-heavy games (Symbol Swap) clamp
/// at zero instead of carrying debt into the score board.
#[derive(Debug, Clone)]
pub struct QuizSession {
    game: GameKind,
    difficulty: Difficulty,
    score: i64,
    questions_answered: u32,
    correct: u32,
    finished: bool,
}

impl QuizSession {
    pub fn new(game: GameKind, difficulty: Difficulty) -> Self {
        QuizSession {
            game,
            difficulty,
            score: 0,
            questions_answered: 0,
            correct: 0,
            finished: false,
        }
    }

    pub fn game(&self) -> GameKind {
        self.game
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn questions_answered(&self) -> u32 {
        self.questions_answered
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct
    }

    /// Record a correct answer at the game's flat rate and return the points
    /// awarded. Games with bespoke awards (Symbol Swap, Calcnia) use
    /// [`QuizSession::add_points`] instead.
    pub fn record_correct(&mut self) -> i64 {
        let points = scoring::base_points(self.game, self.difficulty);
        self.questions_answered += 1;
        self.correct += 1;
        self.score += points;
        points
    }

    pub fn record_wrong(&mut self) {
        self.questions_answered += 1;
    }

    /// Apply a custom delta (award or penalty), clamping the total at zero.
    pub fn add_points(&mut self, delta: i64) {
        self.score = (self.score + delta).max(0);
    }

    /// Close the session. The first call yields the record for the score
    /// board; later calls yield nothing, so a session cannot be double
    /// counted.
    pub fn finish(&mut self) -> Option<ScoreRecord> {
        if self.finished {
            return None;
        }
        self.finished = true;
        Some(ScoreRecord {
            game_name: self.game.to_string(),
            points: self.score,
            timestamp: std::time::SystemTime::now(),
        })
    }
}

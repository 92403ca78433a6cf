//! Single binary-operation problems ("Arithmetic Game").
//!
//! The operator is uniform over `{+, -, ×, ÷}`; operand ranges scale with
//! difficulty. Subtraction keeps the result positive by drawing the
//! subtrahend below the minuend, and division is built in reverse (divisor ×
//! quotient = dividend) so the correct answer is always an integer.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    helpers,
    models::{Difficulty, Operator},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArithmeticProblem {
    /// Display form, e.g. `"37 × 4 = ?"`.
    pub prompt: String,
    pub operands: (i64, i64),
    pub operator: Operator,
    /// 4 unique positive values in shuffled order; contains `correct` once.
    pub options: Vec<i64>,
    /// Carried directly so consumers never infer correctness from position.
    pub correct: i64,
}

fn add_bounds(difficulty: Difficulty) -> (i64, i64) {
    match difficulty {
        Difficulty::Easy => (1, 100),
        Difficulty::Medium => (50, 200),
        Difficulty::Hard => (200, 1000),
    }
}

fn mul_max(difficulty: Difficulty) -> i64 {
    match difficulty {
        Difficulty::Easy => 20,
        Difficulty::Medium => 50,
        Difficulty::Hard => 100,
    }
}

fn divisor_max(difficulty: Difficulty) -> i64 {
    match difficulty {
        Difficulty::Easy => 11,
        Difficulty::Medium => 51,
        Difficulty::Hard => 101,
    }
}

fn quotient_max(difficulty: Difficulty) -> i64 {
    match difficulty {
        Difficulty::Easy => 10,
        Difficulty::Medium | Difficulty::Hard => 12,
    }
}

/// Width of the distractor offset window.
fn offset_window(difficulty: Difficulty) -> i64 {
    match difficulty {
        Difficulty::Easy => 10,
        Difficulty::Medium => 20,
        Difficulty::Hard => 30,
    }
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> ArithmeticProblem {
    let operator = *helpers::pick(rng, &Operator::ALL);
    let (lo, hi) = add_bounds(difficulty);

    let (a, b, correct) = match operator {
        Operator::Add => {
            let a = rng.gen_range(lo..=hi);
            let b = rng.gen_range(lo..=hi);
            (a, b, a + b)
        }
        Operator::Sub => {
            // Minuend floor keeps the subtrahend range non-degenerate.
            let floor = if difficulty == Difficulty::Easy { 10 } else { 20 };
            let a = rng.gen_range(lo..=hi) + floor;
            let b = rng.gen_range(1..a);
            (a, b, a - b)
        }
        Operator::Mul => {
            let m = mul_max(difficulty);
            let a = rng.gen_range(1..=m);
            let b = rng.gen_range(1..=m);
            (a, b, a * b)
        }
        Operator::Div => {
            let divisor = rng.gen_range(2..=divisor_max(difficulty));
            let quotient = rng.gen_range(1..=quotient_max(difficulty));
            (divisor * quotient, divisor, quotient)
        }
    };

    let options = helpers::four_options(rng, correct, offset_window(difficulty));

    ArithmeticProblem {
        prompt: format!("{a} {operator} {b} = ?"),
        operands: (a, b),
        operator,
        options,
        correct,
    }
}

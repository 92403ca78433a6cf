//! "What comes next?" sequences ("Pattern Whisperer").
//!
//! Each template is a closed-form rule that emits 4 seed values and the 5th
//! deterministically from randomly drawn parameters. No options are built;
//! the consumer collects a free-form integer and compares it to `next`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{helpers, models::Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternFamily {
    ArithmeticStep,
    Doubling,
    Squares,
    FibonacciLike,
    Alternating,
    Tripling,
    Cubes,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternProblem {
    pub sequence: [i64; 4],
    pub next: i64,
    pub family: PatternFamily,
    /// Human label for the hint text, e.g. `"Add 4"`.
    pub label: String,
}

fn arithmetic_step<R: Rng>(rng: &mut R, step_max: i64) -> PatternProblem {
    let start = rng.gen_range(1..=10);
    let step = rng.gen_range(2..=step_max);
    let sequence = [start, start + step, start + 2 * step, start + 3 * step];
    PatternProblem {
        sequence,
        next: sequence[3] + step,
        family: PatternFamily::ArithmeticStep,
        label: format!("Add {step}"),
    }
}

fn geometric<R: Rng>(rng: &mut R, ratio: i64, family: PatternFamily) -> PatternProblem {
    let start = rng.gen_range(2..=4);
    let sequence = [start, start * ratio, start * ratio * ratio, start * ratio * ratio * ratio];
    PatternProblem {
        sequence,
        next: sequence[3] * ratio,
        family,
        label: format!("Multiply by {ratio}"),
    }
}

fn squares<R: Rng>(rng: &mut R) -> PatternProblem {
    let start = rng.gen_range(2..=4);
    let sq = |n: i64| n * n;
    PatternProblem {
        sequence: [sq(start), sq(start + 1), sq(start + 2), sq(start + 3)],
        next: sq(start + 4),
        family: PatternFamily::Squares,
        label: "Squares".to_string(),
    }
}

fn fibonacci_like<R: Rng>(rng: &mut R) -> PatternProblem {
    let a = rng.gen_range(1..=5);
    let b = rng.gen_range(1..=5);
    let sequence = [a, b, a + b, a + 2 * b];
    PatternProblem {
        sequence,
        next: sequence[2] + sequence[3],
        family: PatternFamily::FibonacciLike,
        label: "Add previous two".to_string(),
    }
}

fn alternating<R: Rng>(rng: &mut R) -> PatternProblem {
    let start = rng.gen_range(10..=29);
    let add = rng.gen_range(5..=12);
    let sub = rng.gen_range(2..=6);
    let sequence = [start, start + add, start + add - sub, start + 2 * add - sub];
    PatternProblem {
        sequence,
        next: sequence[3] - sub,
        family: PatternFamily::Alternating,
        label: "Alternating".to_string(),
    }
}

fn cubes<R: Rng>(rng: &mut R) -> PatternProblem {
    let start = rng.gen_range(2..=3);
    let cube = |n: i64| n * n * n;
    PatternProblem {
        sequence: [cube(start), cube(start + 1), cube(start + 2), cube(start + 3)],
        next: cube(start + 4),
        family: PatternFamily::Cubes,
        label: "Cubes".to_string(),
    }
}

/// Template pool per tier; harder tiers add families rather than replacing.
pub fn families_for(difficulty: Difficulty) -> &'static [PatternFamily] {
    match difficulty {
        Difficulty::Easy => &[PatternFamily::ArithmeticStep, PatternFamily::Doubling],
        Difficulty::Medium => &[
            PatternFamily::ArithmeticStep,
            PatternFamily::Squares,
            PatternFamily::FibonacciLike,
        ],
        Difficulty::Hard => &[
            PatternFamily::ArithmeticStep,
            PatternFamily::Squares,
            PatternFamily::FibonacciLike,
            PatternFamily::Alternating,
            PatternFamily::Tripling,
            PatternFamily::Cubes,
        ],
    }
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> PatternProblem {
    let family = *helpers::pick(rng, families_for(difficulty));
    let step_max = if difficulty == Difficulty::Easy { 4 } else { 6 };
    match family {
        PatternFamily::ArithmeticStep => arithmetic_step(rng, step_max),
        PatternFamily::Doubling => geometric(rng, 2, PatternFamily::Doubling),
        PatternFamily::Tripling => geometric(rng, 3, PatternFamily::Tripling),
        PatternFamily::Squares => squares(rng),
        PatternFamily::FibonacciLike => fibonacci_like(rng),
        PatternFamily::Alternating => alternating(rng),
        PatternFamily::Cubes => cubes(rng),
    }
}

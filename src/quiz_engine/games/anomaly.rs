//! Corrupted-sequence spotting ("Number Detective").
//!
//! A well-formed sequence is built, then one value (two on hard, some of the
//! time) is nudged off-pattern. The player submits the set of positions they
//! believe are corrupted; grading is set-based so selection order never
//! matters.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::models::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceFamily {
    Arithmetic,
    Geometric,
    Squares,
    Primes,
    FibonacciLike,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyProblem {
    pub numbers: Vec<i64>,
    /// Corrupted positions, sorted ascending. Always non-empty.
    pub corrupted: Vec<usize>,
    pub family: SequenceFamily,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Selected set equals the corrupted set.
    Correct,
    /// At least one corrupted position selected, but the sets differ.
    Partial,
    Miss,
}

/// Grade a selection against the corrupted set. Duplicates in the selection
/// are ignored.
pub fn classify(selected: &[usize], corrupted: &[usize]) -> Verdict {
    let mut unique: Vec<usize> = selected.to_vec();
    unique.sort_unstable();
    unique.dedup();

    let hits = unique.iter().filter(|i| corrupted.contains(i)).count();
    if hits == corrupted.len() && unique.len() == corrupted.len() {
        Verdict::Correct
    } else if hits > 0 {
        Verdict::Partial
    } else {
        Verdict::Miss
    }
}

const PRIMES: [i64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

fn arithmetic<R: Rng>(rng: &mut R, difficulty: Difficulty) -> AnomalyProblem {
    let start = rng.gen_range(5..=14);
    let diff = rng.gen_range(2..=5);
    let len = match difficulty {
        Difficulty::Easy => 6,
        Difficulty::Medium => 7,
        Difficulty::Hard => 8,
    };
    let mut numbers: Vec<i64> = (0..len).map(|i| start + i as i64 * diff).collect();
    let err = rng.gen_range(1..len);
    numbers[err] += rng.gen_range(1..=5);
    AnomalyProblem {
        numbers,
        corrupted: vec![err],
        family: SequenceFamily::Arithmetic,
        explanation: format!(
            "Arithmetic sequence with difference {diff}. Position {} was incorrect.",
            err + 1
        ),
    }
}

fn geometric<R: Rng>(rng: &mut R, difficulty: Difficulty) -> AnomalyProblem {
    let start = rng.gen_range(2..=4);
    let ratio = 2i64;
    let len = match difficulty {
        Difficulty::Easy => 5,
        Difficulty::Medium => 6,
        Difficulty::Hard => 7,
    };
    let mut numbers: Vec<i64> = (0..len).map(|i| start * ratio.pow(i as u32)).collect();
    let err = rng.gen_range(1..=len - 2);
    numbers[err] += rng.gen_range(2..=4);
    AnomalyProblem {
        numbers,
        corrupted: vec![err],
        family: SequenceFamily::Geometric,
        explanation: format!(
            "Geometric sequence multiplying by {ratio}. Position {} was incorrect.",
            err + 1
        ),
    }
}

fn squares<R: Rng>(rng: &mut R, difficulty: Difficulty) -> AnomalyProblem {
    let start = rng.gen_range(2..=4i64);
    let len = match difficulty {
        Difficulty::Easy => 5,
        _ => 6,
    };
    let mut numbers: Vec<i64> = (0..len).map(|i| (start + i as i64).pow(2)).collect();
    let err = rng.gen_range(1..len);
    numbers[err] += rng.gen_range(3..=9);
    AnomalyProblem {
        numbers,
        corrupted: vec![err],
        family: SequenceFamily::Squares,
        explanation: format!(
            "Perfect squares starting from {start}². Position {} was incorrect.",
            err + 1
        ),
    }
}

fn primes<R: Rng>(rng: &mut R, difficulty: Difficulty) -> AnomalyProblem {
    let len = match difficulty {
        Difficulty::Easy => 5,
        Difficulty::Medium => 6,
        Difficulty::Hard => 7,
    };
    let start = rng.gen_range(0..PRIMES.len() - len);
    let mut numbers: Vec<i64> = PRIMES[start..start + len].to_vec();
    let err = rng.gen_range(1..len);
    // Any listed prime past position 0 is odd, so +1 always lands on an
    // even composite.
    numbers[err] += 1;
    AnomalyProblem {
        numbers,
        corrupted: vec![err],
        family: SequenceFamily::Primes,
        explanation: format!("Prime number sequence. Position {} was not prime.", err + 1),
    }
}

fn fibonacci_like<R: Rng>(rng: &mut R, difficulty: Difficulty) -> AnomalyProblem {
    let a = rng.gen_range(1..=3);
    let b = rng.gen_range(2..=4);
    let len = match difficulty {
        Difficulty::Easy => 6,
        Difficulty::Medium => 7,
        Difficulty::Hard => 8,
    };
    let mut numbers = vec![a, b];
    for i in 2..len {
        numbers.push(numbers[i - 1] + numbers[i - 2]);
    }
    let err = rng.gen_range(2..=len - 2);
    numbers[err] += rng.gen_range(2..=6);
    AnomalyProblem {
        numbers,
        corrupted: vec![err],
        family: SequenceFamily::FibonacciLike,
        explanation: format!("Fibonacci-like sequence. Position {} was incorrect.", err + 1),
    }
}

fn double_corruption<R: Rng>(rng: &mut R) -> AnomalyProblem {
    let start = rng.gen_range(5..=14);
    let diff = rng.gen_range(2..=5);
    let len = 8usize;
    let mut numbers: Vec<i64> = (0..len).map(|i| start + i as i64 * diff).collect();
    let e1 = rng.gen_range(1..=len - 3);
    // second slot as a wrapped offset from the first, so it lands in the
    // same 1..=len-3 band and is distinct without a redraw
    let e2 = 1 + (e1 - 1 + rng.gen_range(1..=len - 4)) % (len - 3);
    numbers[e1] += rng.gen_range(2..=5);
    numbers[e2] -= rng.gen_range(2..=5);
    let mut corrupted = vec![e1, e2];
    corrupted.sort_unstable();
    AnomalyProblem {
        numbers,
        corrupted: corrupted.clone(),
        family: SequenceFamily::Arithmetic,
        explanation: format!(
            "Arithmetic sequence with difference {diff}. Positions {} and {} were incorrect.",
            corrupted[0] + 1,
            corrupted[1] + 1
        ),
    }
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> AnomalyProblem {
    if difficulty == Difficulty::Hard && rng.gen::<f64>() < 0.4 {
        return double_corruption(rng);
    }
    match rng.gen_range(0..5) {
        0 => arithmetic(rng, difficulty),
        1 => geometric(rng, difficulty),
        2 => squares(rng, difficulty),
        3 => primes(rng, difficulty),
        _ => fibonacci_like(rng, difficulty),
    }
}

//! Two-phase puzzles with one decoy constraint ("One Rule Too Many").
//!
//! Every puzzle ships three rules of which exactly one is useless. Phase one
//! asks which rule to discard; only a correct discard unlocks phase two,
//! where the puzzle itself is solved.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::models::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleKind {
    ArithmeticSequence,
    AdditionEquation,
    DoublingSequence,
    MissingDivisor,
    SquareSequence,
    MultiplicationEquation,
    ThreeTermSequence,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulePuzzle {
    pub expression: String,
    pub rules: [String; 3],
    pub useless_rule_index: usize,
    pub answer: i64,
    pub explanation: String,
    pub kind: PuzzleKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// The useless rule was removed; phase two begins.
    Unlocked,
    /// A load-bearing rule was removed; the puzzle is lost.
    Forfeited,
}

/// Resolve phase one: removing anything but the useless rule forfeits the
/// puzzle.
pub fn phase_outcome(puzzle: &RulePuzzle, removed_index: usize) -> PhaseOutcome {
    if removed_index == puzzle.useless_rule_index {
        PhaseOutcome::Unlocked
    } else {
        PhaseOutcome::Forfeited
    }
}

fn arithmetic_sequence<R: Rng>(rng: &mut R) -> RulePuzzle {
    let start = rng.gen_range(5..=14);
    let diff = rng.gen_range(2..=5);
    let sequence: Vec<i64> = (0..4).map(|i| start + i * diff).collect();
    let answer = sequence[3] + diff;
    let terms: Vec<String> = sequence.iter().map(|n| n.to_string()).collect();
    RulePuzzle {
        expression: format!("{}, ?", terms.join(", ")),
        rules: [
            format!("Each number increases by {diff}"),
            "All numbers must be positive".to_string(),
            "The sequence continues the same pattern".to_string(),
        ],
        useless_rule_index: 1,
        answer,
        explanation: format!(
            "The sequence increases by {diff}. \"All numbers must be positive\" was irrelevant."
        ),
        kind: PuzzleKind::ArithmeticSequence,
    }
}

fn addition_equation<R: Rng>(rng: &mut R) -> RulePuzzle {
    let a = rng.gen_range(5..=14);
    let b = rng.gen_range(5..=14);
    let total = a + b;
    RulePuzzle {
        expression: format!("x + {b} = {total}"),
        rules: [
            "Solve for x".to_string(),
            "x must be a whole number".to_string(),
            format!("Subtract {b} from both sides"),
        ],
        useless_rule_index: 1,
        answer: a,
        explanation: format!("x = {a}. The rule \"x must be a whole number\" was redundant."),
        kind: PuzzleKind::AdditionEquation,
    }
}

fn doubling_sequence<R: Rng>(rng: &mut R) -> RulePuzzle {
    let base = rng.gen_range(2..=4i64);
    let sequence: Vec<i64> = (0..4u32).map(|i| base * 2i64.pow(i)).collect();
    let answer = sequence[3] * 2;
    let terms: Vec<String> = sequence.iter().map(|n| n.to_string()).collect();
    RulePuzzle {
        expression: format!("{}, ?", terms.join(", ")),
        rules: [
            "Each number is double the previous".to_string(),
            "Numbers are in ascending order".to_string(),
            "Continue the pattern".to_string(),
        ],
        useless_rule_index: 1,
        answer,
        explanation: "The sequence doubles each time. \"Numbers are in ascending order\" was unnecessary."
            .to_string(),
        kind: PuzzleKind::DoublingSequence,
    }
}

fn missing_divisor<R: Rng>(rng: &mut R) -> RulePuzzle {
    let divisor = rng.gen_range(3..=7);
    let result = rng.gen_range(5..=14);
    let dividend = divisor * result;
    RulePuzzle {
        expression: format!("{dividend} ÷ ? = {result}"),
        rules: [
            "Find the missing divisor".to_string(),
            "The answer must be an integer".to_string(),
            format!("Divide {dividend} by {result} to check"),
        ],
        useless_rule_index: 1,
        answer: divisor,
        explanation: format!(
            "The divisor is {divisor}. \"The answer must be an integer\" was obvious."
        ),
        kind: PuzzleKind::MissingDivisor,
    }
}

fn square_sequence<R: Rng>(rng: &mut R) -> RulePuzzle {
    let start = rng.gen_range(2..=4i64);
    let sequence: Vec<i64> = (0..3).map(|i| (start + i).pow(2)).collect();
    let answer = (start + 3).pow(2);
    let terms: Vec<String> = sequence.iter().map(|n| n.to_string()).collect();
    RulePuzzle {
        expression: format!("{}, ?", terms.join(", ")),
        rules: [
            "Each number is a perfect square".to_string(),
            "Numbers increase from left to right".to_string(),
            "The pattern is consecutive squares".to_string(),
        ],
        useless_rule_index: 1,
        answer,
        explanation: "The sequence is consecutive perfect squares. \"Numbers increase\" was redundant."
            .to_string(),
        kind: PuzzleKind::SquareSequence,
    }
}

fn multiplication_equation<R: Rng>(rng: &mut R) -> RulePuzzle {
    let a = rng.gen_range(3..=10);
    let b = rng.gen_range(3..=10);
    let product = a * b;
    RulePuzzle {
        expression: format!("x × {b} = {product}"),
        rules: [
            format!("Solve for x by dividing both sides by {b}"),
            format!("x is less than {product}"),
            "The equation must balance".to_string(),
        ],
        useless_rule_index: 2,
        answer: a,
        explanation: format!("x = {a}. \"The equation must balance\" is always true and thus useless."),
        kind: PuzzleKind::MultiplicationEquation,
    }
}

fn three_term_sequence<R: Rng>(rng: &mut R) -> RulePuzzle {
    let start = rng.gen_range(10..=14);
    let diff = rng.gen_range(4..=9);
    let sequence = [start, start + diff, start + diff * 2];
    let answer = start + diff * 3;
    let terms: Vec<String> = sequence.iter().map(|n| n.to_string()).collect();
    RulePuzzle {
        expression: format!("{}, ?", terms.join(", ")),
        rules: [
            format!("The difference between consecutive terms is {diff}"),
            "All terms are greater than 0".to_string(),
            format!("Add {diff} to the last term"),
        ],
        useless_rule_index: 1,
        answer,
        explanation: format!(
            "The arithmetic sequence adds {diff} each time. \"Greater than 0\" was unnecessary."
        ),
        kind: PuzzleKind::ThreeTermSequence,
    }
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> RulePuzzle {
    let pool_size = if difficulty == Difficulty::Hard { 7 } else { 5 };
    match rng.gen_range(0..pool_size) {
        0 => arithmetic_sequence(rng),
        1 => addition_equation(rng),
        2 => doubling_sequence(rng),
        3 => missing_divisor(rng),
        4 => square_sequence(rng),
        5 => multiplication_equation(rng),
        _ => three_term_sequence(rng),
    }
}

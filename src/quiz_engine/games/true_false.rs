//! True/false math statements ("Trust Issue").
//!
//! The statement bank is fixed; tiers are nested prefixes of one ordered
//! list, so every easy statement also appears in medium and hard. Easy is
//! all true statements, the harder tiers mix in the lies.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{helpers, models::Difficulty};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub statement: String,
    pub is_true: bool,
    pub explanation: String,
}

struct Fact {
    statement: &'static str,
    is_true: bool,
    explanation: &'static str,
}

const EASY_COUNT: usize = 5;
const MEDIUM_COUNT: usize = 9;

/// Ordered so that `FACTS[..EASY_COUNT]` is the easy bank and
/// `FACTS[..MEDIUM_COUNT]` the medium one.
const FACTS: [Fact; 15] = [
    Fact {
        statement: "The sum of any two even numbers is always even",
        is_true: true,
        explanation: "Even + Even = Even. Basic stuff.",
    },
    Fact {
        statement: "Zero is neither positive nor negative",
        is_true: true,
        explanation: "Zero is special like that.",
    },
    Fact {
        statement: "A square is always a rectangle",
        is_true: true,
        explanation: "All squares are rectangles, but not all rectangles are squares.",
    },
    Fact {
        statement: "The product of any number and zero is zero",
        is_true: true,
        explanation: "Anything times zero equals zero. Math 101.",
    },
    Fact {
        statement: "An obtuse angle is greater than 90 degrees",
        is_true: true,
        explanation: "Obtuse angles are between 90° and 180°.",
    },
    Fact {
        statement: "All prime numbers are odd",
        is_true: false,
        explanation: "2 is prime and even. Nice try though.",
    },
    Fact {
        statement: "Pi equals exactly 22/7",
        is_true: false,
        explanation: "22/7 is just an approximation. Pi is irrational.",
    },
    Fact {
        statement: "A negative number multiplied by a negative number gives a negative result",
        is_true: false,
        explanation: "Negative × Negative = Positive. Two wrongs DO make a right in math.",
    },
    Fact {
        statement: "All rhombuses are squares",
        is_true: false,
        explanation: "All squares are rhombuses, but rhombuses don't need right angles.",
    },
    Fact {
        statement: "All triangles have at least two acute angles",
        is_true: true,
        explanation: "The angles in a triangle sum to 180°, so at least two must be acute.",
    },
    Fact {
        statement: "Every integer is a rational number",
        is_true: true,
        explanation: "Integers can be expressed as fractions (n/1), making them rational.",
    },
    Fact {
        statement: "The square root of 16 is always 4",
        is_true: false,
        explanation: "It could be -4 too. Both work when squared.",
    },
    Fact {
        statement: "A parallelogram always has four right angles",
        is_true: false,
        explanation: "That would be a rectangle. Not all parallelograms are rectangles.",
    },
    Fact {
        statement: "The number 1 is considered a prime number",
        is_true: false,
        explanation: "1 is not prime. Prime numbers must have exactly two distinct divisors.",
    },
    Fact {
        statement: "The sum of angles in any quadrilateral is 360 degrees",
        is_true: true,
        explanation: "Any four-sided shape has angles that sum to 360°.",
    },
];

fn bank(difficulty: Difficulty) -> &'static [Fact] {
    match difficulty {
        Difficulty::Easy => &FACTS[..EASY_COUNT],
        Difficulty::Medium => &FACTS[..MEDIUM_COUNT],
        Difficulty::Hard => &FACTS,
    }
}

/// How many distinct statements a tier can serve.
pub fn bank_size(difficulty: Difficulty) -> usize {
    bank(difficulty).len()
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Statement {
    let fact = helpers::pick(rng, bank(difficulty));
    Statement {
        statement: fact.statement.to_string(),
        is_true: fact.is_true,
        explanation: fact.explanation.to_string(),
    }
}

//! Fill-in-the-operator equations ("Symbol Swap").
//!
//! The player sees operands and a result and must recover the hidden
//! operators. Easy equations carry one operator; medium and hard carry two
//! and are evaluated with standard precedence, so `10 _ 5 _ 3 = 25` has the
//! unique answer `+ ×`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    helpers,
    models::{Difficulty, Operator},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equation {
    pub operands: Vec<i64>,
    pub operators: Vec<Operator>,
    pub result: i64,
}

impl Equation {
    pub fn operator_count(&self) -> usize {
        self.operators.len()
    }
}

fn is_tight(op: Operator) -> bool {
    matches!(op, Operator::Mul | Operator::Div)
}

/// Evaluate `a op1 b op2 c` with multiplication and division binding before
/// addition and subtraction. Returns `None` on division that does not come
/// out even, division by zero, or overflow.
pub fn evaluate(a: i64, op1: Operator, b: i64, op2: Operator, c: i64) -> Option<i64> {
    if is_tight(op1) {
        // Left group binds first regardless of op2.
        let t = op1.apply(a, b)?;
        op2.apply(t, c)
    } else if is_tight(op2) {
        let t = op2.apply(b, c)?;
        op1.apply(a, t)
    } else {
        let t = op1.apply(a, b)?;
        op2.apply(t, c)
    }
}

/// Exact positional match of the hidden operators.
pub fn check(equation: &Equation, supplied: &[Operator]) -> bool {
    equation.operators.as_slice() == supplied
}

fn generate_single<R: Rng>(rng: &mut R) -> Equation {
    let op = *helpers::pick(rng, &Operator::ALL);
    let (a, b) = match op {
        Operator::Add => (rng.gen_range(10..=49), rng.gen_range(10..=49)),
        Operator::Sub => {
            let a = rng.gen_range(30..=79);
            let b = rng.gen_range(5..a - 5);
            (a, b)
        }
        Operator::Mul => (rng.gen_range(3..=15), rng.gen_range(3..=15)),
        Operator::Div => {
            let divisor = rng.gen_range(3..=12);
            let quotient = rng.gen_range(3..=12);
            (divisor * quotient, divisor)
        }
    };
    // Exact by construction for every branch.
    let result = op.apply(a, b).unwrap_or_default();
    Equation {
        operands: vec![a, b],
        operators: vec![op],
        result,
    }
}

fn generate_double<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Equation {
    let op1 = *helpers::pick(rng, &Operator::ALL);
    let op2 = *helpers::pick(rng, &Operator::ALL);
    let (lo, hi) = match difficulty {
        Difficulty::Medium => (5, 24),
        _ => (10, 39),
    };

    for _ in 0..50 {
        let mut a = rng.gen_range(lo..=hi);
        let mut b = rng.gen_range(lo..=hi);
        let c = rng.gen_range(lo..=hi);
        // Rig divisions so they come out even.
        if op1 == Operator::Div {
            a = b * rng.gen_range(2..=11);
        }
        if op2 == Operator::Div {
            b = c * rng.gen_range(2..=11);
        }
        if let Some(result) = evaluate(a, op1, b, op2, c) {
            if (0..=1000).contains(&result) {
                return Equation {
                    operands: vec![a, b, c],
                    operators: vec![op1, op2],
                    result,
                };
            }
        }
    }

    // Retry budget exhausted; fall back to a known-good equation.
    Equation {
        operands: vec![10, 5, 3],
        operators: vec![Operator::Mul, Operator::Add],
        result: 53,
    }
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Equation {
    match difficulty {
        Difficulty::Easy => generate_single(rng),
        _ => generate_double(rng, difficulty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn precedence_vectors() {
        use Operator::*;
        assert_eq!(evaluate(10, Mul, 5, Add, 3), Some(53));
        assert_eq!(evaluate(10, Add, 5, Mul, 3), Some(25));
        assert_eq!(evaluate(10, Sub, 6, Div, 3), Some(8));
        assert_eq!(evaluate(20, Div, 4, Mul, 3), Some(15));
        assert_eq!(evaluate(10, Sub, 5, Add, 3), Some(8));
        // 5 / 3 is inexact
        assert_eq!(evaluate(10, Add, 5, Div, 3), None);
    }

    #[test]
    fn generated_equations_are_consistent() {
        let mut rng = StdRng::seed_from_u64(17);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for _ in 0..500 {
                let eq = generate(&mut rng, difficulty);
                match eq.operator_count() {
                    1 => {
                        assert_eq!(eq.operands.len(), 2);
                        assert_eq!(
                            eq.operators[0].apply(eq.operands[0], eq.operands[1]),
                            Some(eq.result)
                        );
                    }
                    2 => {
                        assert_eq!(eq.operands.len(), 3);
                        assert_eq!(
                            evaluate(
                                eq.operands[0],
                                eq.operators[0],
                                eq.operands[1],
                                eq.operators[1],
                                eq.operands[2],
                            ),
                            Some(eq.result)
                        );
                        assert!((0..=1000).contains(&eq.result));
                    }
                    n => panic!("unexpected operator count {n}"),
                }
            }
        }
    }

    #[test]
    fn check_is_positional() {
        use Operator::*;
        let eq = Equation {
            operands: vec![10, 5, 3],
            operators: vec![Mul, Add],
            result: 53,
        };
        assert!(check(&eq, &[Mul, Add]));
        assert!(!check(&eq, &[Add, Mul]));
        assert!(!check(&eq, &[Mul]));
    }
}

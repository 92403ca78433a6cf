//! Derivative and integral drills ("Calcnia").
//!
//! Answers are symbolic strings, so each template carries its own distractor
//! set built from the classic mistakes for that rule (dropped coefficient,
//! forgotten chain factor, sign flips). Tier banks are separate per kind, not
//! nested. Scoring is per question with a speed bonus rather than a session
//! timer.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{helpers, models::Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcKind {
    Derivative,
    Integral,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcProblem {
    pub kind: CalcKind,
    pub question: String,
    pub answer: String,
    pub options: Vec<String>,
    pub hint: String,
}

fn assemble<R: Rng>(
    rng: &mut R,
    kind: CalcKind,
    question: String,
    answer: String,
    distractors: [String; 3],
    hint: &str,
) -> CalcProblem {
    let mut options = vec![
        answer.clone(),
        distractors[0].clone(),
        distractors[1].clone(),
        distractors[2].clone(),
    ];
    helpers::shuffle(rng, &mut options);
    CalcProblem {
        kind,
        question,
        answer,
        options,
        hint: hint.to_string(),
    }
}

fn easy_derivative<R: Rng>(rng: &mut R) -> CalcProblem {
    match rng.gen_range(0..4) {
        0 => {
            let n = rng.gen_range(2..=6);
            assemble(
                rng,
                CalcKind::Derivative,
                format!("d/dx(x^{n})"),
                format!("{n}x^{}", n - 1),
                [
                    format!("x^{}", n - 1),
                    format!("{n}x^{n}"),
                    format!("{}x^{}", n - 1, n - 2),
                ],
                "Power rule: d/dx(x^n) = nx^(n-1)",
            )
        }
        1 => {
            // c == 1 collides with the standing "1" distractor
            let c = rng.gen_range(2..=20);
            assemble(
                rng,
                CalcKind::Derivative,
                format!("d/dx({c})"),
                "0".to_string(),
                ["1".to_string(), format!("{c}"), format!("{c}x")],
                "The derivative of a constant is always 0",
            )
        }
        2 => {
            let a = rng.gen_range(2..=11);
            assemble(
                rng,
                CalcKind::Derivative,
                format!("d/dx({a}x)"),
                format!("{a}"),
                [format!("{a}x"), "1".to_string(), "x".to_string()],
                "The derivative of ax is just a",
            )
        }
        _ => assemble(
            rng,
            CalcKind::Derivative,
            "d/dx(x²)".to_string(),
            "2x".to_string(),
            ["x".to_string(), "x²".to_string(), "2".to_string()],
            "Power rule: bring down the exponent and reduce it by 1",
        ),
    }
}

fn medium_derivative<R: Rng>(rng: &mut R) -> CalcProblem {
    match rng.gen_range(0..4) {
        0 => {
            let a = rng.gen_range(2..=6);
            let b = rng.gen_range(1..=10);
            assemble(
                rng,
                CalcKind::Derivative,
                format!("d/dx(x^{a} + {b}x)"),
                format!("{a}x^{} + {b}", a - 1),
                [
                    format!("x^{} + {b}", a - 1),
                    format!("{a}x^{a} + {b}x"),
                    format!("{a}x^{} + {b}x", a - 1),
                ],
                "Take the derivative of each term separately",
            )
        }
        1 => {
            let n = rng.gen_range(2..=5);
            // a must differ from n or two distractors collapse into one;
            // draw from the 2..=5 band and step over n in a single pass
            let a = rng.gen_range(2..=5);
            let a = if a >= n { a + 1 } else { a };
            assemble(
                rng,
                CalcKind::Derivative,
                format!("d/dx({a}x^{n})"),
                format!("{}x^{}", a * n, n - 1),
                [
                    format!("{a}x^{}", n - 1),
                    format!("{n}x^{}", n - 1),
                    format!("{}x^{n}", a * n),
                ],
                "Multiply the coefficient by the exponent, then reduce exponent by 1",
            )
        }
        2 => assemble(
            rng,
            CalcKind::Derivative,
            "d/dx(sin(x))".to_string(),
            "cos(x)".to_string(),
            ["-cos(x)".to_string(), "sin(x)".to_string(), "-sin(x)".to_string()],
            "The derivative of sin(x) is cos(x)",
        ),
        _ => assemble(
            rng,
            CalcKind::Derivative,
            "d/dx(e^x)".to_string(),
            "e^x".to_string(),
            ["xe^(x-1)".to_string(), "e".to_string(), "ln(x)".to_string()],
            "e^x is special, it's its own derivative!",
        ),
    }
}

fn hard_derivative<R: Rng>(rng: &mut R) -> CalcProblem {
    match rng.gen_range(0..5) {
        0 => {
            let n = rng.gen_range(2..=5);
            let a = rng.gen_range(2..=6);
            assemble(
                rng,
                CalcKind::Derivative,
                format!("d/dx(({a}x)^{n})"),
                format!("{}({a}x)^{}", n * a, n - 1),
                [
                    format!("{n}({a}x)^{}", n - 1),
                    format!("{}x^{}", a * n, n - 1),
                    format!("{a}x^{}", n - 1),
                ],
                "Chain rule: derivative of outer × derivative of inner",
            )
        }
        1 => {
            let a = rng.gen_range(2..=4);
            // a + b == a * b only at a == b == 2, which merges the top two options
            let b = if a == 2 { rng.gen_range(3..=4) } else { rng.gen_range(2..=4) };
            assemble(
                rng,
                CalcKind::Derivative,
                format!("d/dx(x^{a} · x^{b})"),
                format!("{}x^{}", a + b, a + b - 1),
                [
                    format!("{}x^{}", a * b, a + b - 1),
                    format!("x^{}", a + b - 1),
                    format!("{}x^{}", a + b, a * b - 1),
                ],
                "Simplify first: x^a · x^b = x^(a+b), then differentiate",
            )
        }
        2 => assemble(
            rng,
            CalcKind::Derivative,
            "d/dx(cos(x))".to_string(),
            "-sin(x)".to_string(),
            ["sin(x)".to_string(), "-cos(x)".to_string(), "cos(x)".to_string()],
            "The derivative of cos(x) is -sin(x)",
        ),
        3 => assemble(
            rng,
            CalcKind::Derivative,
            "d/dx(ln(x))".to_string(),
            "1/x".to_string(),
            ["x".to_string(), "1".to_string(), "ln(x)".to_string()],
            "The derivative of ln(x) is 1/x",
        ),
        _ => {
            let a = rng.gen_range(2..=6);
            assemble(
                rng,
                CalcKind::Derivative,
                format!("d/dx(x^{a} + sin(x))"),
                format!("{a}x^{} + cos(x)", a - 1),
                [
                    format!("{a}x^{} + sin(x)", a - 1),
                    format!("x^{} + cos(x)", a - 1),
                    format!("{a}x^{a} + cos(x)"),
                ],
                "Take derivative of each term separately",
            )
        }
    }
}

fn easy_integral<R: Rng>(rng: &mut R) -> CalcProblem {
    match rng.gen_range(0..4) {
        0 => {
            let n = rng.gen_range(1..=5);
            assemble(
                rng,
                CalcKind::Integral,
                format!("∫ x^{n} dx"),
                format!("x^{}/{} + C", n + 1, n + 1),
                [
                    format!("x^{} + C", n + 1),
                    format!("{n}x^{} + C", n - 1),
                    format!("x^{n}/{n} + C"),
                ],
                "Power rule for integrals: ∫ x^n dx = x^(n+1)/(n+1) + C",
            )
        }
        1 => {
            // c == 1 makes the answer "1x + C", which the "x + C" distractor also spells
            let c = rng.gen_range(2..=10);
            assemble(
                rng,
                CalcKind::Integral,
                format!("∫ {c} dx"),
                format!("{c}x + C"),
                [format!("{c} + C"), "x + C".to_string(), "0".to_string()],
                "∫ c dx = cx + C (don't forget +C!)",
            )
        }
        2 => assemble(
            rng,
            CalcKind::Integral,
            "∫ x dx".to_string(),
            "x²/2 + C".to_string(),
            ["x² + C".to_string(), "x/2 + C".to_string(), "2x + C".to_string()],
            "∫ x dx = x²/2 + C",
        ),
        _ => {
            let a = rng.gen_range(2..=9);
            assemble(
                rng,
                CalcKind::Integral,
                format!("∫ {a}x dx"),
                format!("{a}x²/2 + C"),
                [format!("{a}x + C"), "x²/2 + C".to_string(), format!("{a}x² + C")],
                "Pull the constant out, then integrate x",
            )
        }
    }
}

fn medium_integral<R: Rng>(rng: &mut R) -> CalcProblem {
    match rng.gen_range(0..4) {
        0 => {
            let n = rng.gen_range(2..=4);
            assemble(
                rng,
                CalcKind::Integral,
                format!("∫ (x^{n} + x) dx"),
                format!("x^{}/{} + x²/2 + C", n + 1, n + 1),
                [
                    format!("x^{} + x² + C", n + 1),
                    format!("{n}x^{} + x + C", n - 1),
                    format!("x^{n} + x²/2 + C"),
                ],
                "Integrate each term separately",
            )
        }
        1 => {
            let a = rng.gen_range(2..=6);
            let n = rng.gen_range(2..=5);
            assemble(
                rng,
                CalcKind::Integral,
                format!("∫ {a}x^{n} dx"),
                format!("{a}x^{}/{} + C", n + 1, n + 1),
                [
                    format!("{a}x^{} + C", n + 1),
                    format!("x^{}/{} + C", n + 1, n + 1),
                    format!("{}x^{n} + C", a * n),
                ],
                "Pull constant out, use power rule for integrals",
            )
        }
        2 => assemble(
            rng,
            CalcKind::Integral,
            "∫ cos(x) dx".to_string(),
            "sin(x) + C".to_string(),
            [
                "-sin(x) + C".to_string(),
                "cos(x) + C".to_string(),
                "-cos(x) + C".to_string(),
            ],
            "∫ cos(x) dx = sin(x) + C",
        ),
        _ => assemble(
            rng,
            CalcKind::Integral,
            "∫ e^x dx".to_string(),
            "e^x + C".to_string(),
            [
                "xe^x + C".to_string(),
                "e^x/x + C".to_string(),
                "ln(x) + C".to_string(),
            ],
            "e^x integrates to itself!",
        ),
    }
}

fn hard_integral<R: Rng>(rng: &mut R) -> CalcProblem {
    match rng.gen_range(0..5) {
        0 => assemble(
            rng,
            CalcKind::Integral,
            "∫ sin(x) dx".to_string(),
            "-cos(x) + C".to_string(),
            [
                "cos(x) + C".to_string(),
                "-sin(x) + C".to_string(),
                "sin(x) + C".to_string(),
            ],
            "∫ sin(x) dx = -cos(x) + C",
        ),
        1 => assemble(
            rng,
            CalcKind::Integral,
            "∫ (1/x) dx".to_string(),
            "ln|x| + C".to_string(),
            [
                "1/x² + C".to_string(),
                "x + C".to_string(),
                "-1/x² + C".to_string(),
            ],
            "∫ (1/x) dx = ln|x| + C",
        ),
        2 => {
            let a = rng.gen_range(2..=5);
            let b = rng.gen_range(1..=6);
            assemble(
                rng,
                CalcKind::Integral,
                format!("∫ (x^{a} + {b}) dx"),
                format!("x^{}/{} + {b}x + C", a + 1, a + 1),
                [
                    format!("x^{} + {b}x + C", a + 1),
                    format!("{a}x^{} + {b}x + C", a - 1),
                    format!("x^{a} + {b}x + C"),
                ],
                "Integrate each term separately",
            )
        }
        3 => {
            let n = rng.gen_range(2..=4);
            assemble(
                rng,
                CalcKind::Integral,
                format!("∫ (x^{n} + cos(x)) dx"),
                format!("x^{}/{} + sin(x) + C", n + 1, n + 1),
                [
                    format!("x^{} + sin(x) + C", n + 1),
                    format!("{n}x^{} + sin(x) + C", n - 1),
                    format!("x^{}/{} + cos(x) + C", n + 1, n + 1),
                ],
                "Integrate polynomial and trig separately",
            )
        }
        _ => assemble(
            rng,
            CalcKind::Integral,
            "∫ sec²(x) dx".to_string(),
            "tan(x) + C".to_string(),
            [
                "sec(x) + C".to_string(),
                "-tan(x) + C".to_string(),
                "cot(x) + C".to_string(),
            ],
            "This is a trig integral: ∫ sec²(x) dx = tan(x) + C",
        ),
    }
}

pub fn generate<R: Rng>(rng: &mut R, kind: CalcKind, difficulty: Difficulty) -> CalcProblem {
    match (kind, difficulty) {
        (CalcKind::Derivative, Difficulty::Easy) => easy_derivative(rng),
        (CalcKind::Derivative, Difficulty::Medium) => medium_derivative(rng),
        (CalcKind::Derivative, Difficulty::Hard) => hard_derivative(rng),
        (CalcKind::Integral, Difficulty::Easy) => easy_integral(rng),
        (CalcKind::Integral, Difficulty::Medium) => medium_integral(rng),
        (CalcKind::Integral, Difficulty::Hard) => hard_integral(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn options_are_unique_and_contain_the_answer_once() {
        let mut rng = StdRng::seed_from_u64(53);
        for kind in [CalcKind::Derivative, CalcKind::Integral] {
            for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
                for _ in 0..300 {
                    let p = generate(&mut rng, kind, difficulty);
                    assert_eq!(p.options.len(), 4);
                    assert_eq!(
                        p.options.iter().filter(|o| **o == p.answer).count(),
                        1,
                        "answer count off for {}",
                        p.question
                    );
                    for (i, o) in p.options.iter().enumerate() {
                        assert!(!p.options[..i].contains(o), "duplicate option for {}", p.question);
                    }
                }
            }
        }
    }

    #[test]
    fn constant_templates_skip_coefficient_one() {
        let mut rng = StdRng::seed_from_u64(67);
        for _ in 0..600 {
            let d = generate(&mut rng, CalcKind::Derivative, Difficulty::Easy);
            assert_ne!(d.question, "d/dx(1)", "unit constant duplicates the 1 distractor");
            let i = generate(&mut rng, CalcKind::Integral, Difficulty::Easy);
            assert_ne!(i.question, "∫ 1 dx");
            assert!(
                !i.options.iter().any(|o| o == "1x + C"),
                "1x + C is indistinguishable from the x + C distractor in {}",
                i.question
            );
        }
    }

    #[test]
    fn integrals_end_with_constant_of_integration() {
        let mut rng = StdRng::seed_from_u64(59);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for _ in 0..200 {
                let p = generate(&mut rng, CalcKind::Integral, difficulty);
                assert!(p.answer.ends_with("+ C"), "missing +C in {}", p.answer);
            }
        }
    }

    #[test]
    fn every_problem_has_a_hint() {
        let mut rng = StdRng::seed_from_u64(61);
        for kind in [CalcKind::Derivative, CalcKind::Integral] {
            let p = generate(&mut rng, kind, Difficulty::Medium);
            assert!(!p.hint.is_empty());
        }
    }
}

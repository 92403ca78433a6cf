use std::fmt;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::games::{
    anomaly::AnomalyProblem, arithmetic::ArithmeticProblem, calculus::CalcProblem,
    geometry::GeometryProblem, operator_recovery::Equation, pattern::PatternProblem,
    redundant_rule::RulePuzzle, rule_switch::RuleProblem, true_false::Statement,
};

// ---------------------------------------------------------------------------
// Shared primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "×",
            Operator::Div => "÷",
        }
    }

    /// Apply the operator under exact integer arithmetic.
    ///
    /// Division returns `None` unless the quotient is an integer; all
    /// generators are built so their correct answers never hit `None`.
    pub fn apply(self, a: i64, b: i64) -> Option<i64> {
        match self {
            Operator::Add => a.checked_add(b),
            Operator::Sub => a.checked_sub(b),
            Operator::Mul => a.checked_mul(b),
            Operator::Div => {
                if b != 0 && a % b == 0 {
                    Some(a / b)
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ---------------------------------------------------------------------------
// Quiz request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    Arithmetic,
    Pattern,
    RuleSwitch,
    TrueFalse,
    SymbolSwap,
    NumberDetective,
    RedundantRule,
    Geometry,
    Derivatives,
    Integrals,
}

impl GameKind {
    pub const ALL: [GameKind; 10] = [
        GameKind::Arithmetic,
        GameKind::Pattern,
        GameKind::RuleSwitch,
        GameKind::TrueFalse,
        GameKind::SymbolSwap,
        GameKind::NumberDetective,
        GameKind::RedundantRule,
        GameKind::Geometry,
        GameKind::Derivatives,
        GameKind::Integrals,
    ];

    /// Two-letter prefix used in problem IDs.
    pub fn id_prefix(self) -> &'static str {
        match self {
            GameKind::Arithmetic      => "AR",
            GameKind::Pattern         => "PT",
            GameKind::RuleSwitch      => "RS",
            GameKind::TrueFalse       => "TF",
            GameKind::SymbolSwap      => "SY",
            GameKind::NumberDetective => "ND",
            GameKind::RedundantRule   => "RR",
            GameKind::Geometry        => "GE",
            GameKind::Derivatives     => "CD",
            GameKind::Integrals       => "CI",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameKind::Arithmetic      => "Arithmetic Game",
            GameKind::Pattern         => "Pattern Whisperer",
            GameKind::RuleSwitch      => "Brain Meltdown",
            GameKind::TrueFalse       => "Trust Issue",
            GameKind::SymbolSwap      => "Symbol Swap",
            GameKind::NumberDetective => "Number Detective",
            GameKind::RedundantRule   => "One Rule Too Many",
            GameKind::Geometry        => "Broken Geometry",
            GameKind::Derivatives     => "Calcnia (Derivatives)",
            GameKind::Integrals       => "Calcnia (Integrals)",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub game: GameKind,
    pub difficulty: Difficulty,
    pub rng_seed: Option<u64>,
}

impl QuizRequest {
    /// Minimal constructor. Defaults: Medium difficulty, entropy seed.
    pub fn new(game: GameKind) -> Self {
        QuizRequest {
            game,
            difficulty: Difficulty::Medium,
            rng_seed: None,
        }
    }
}

/// The per-family payload of a generated problem.
///
/// Each variant wraps the typed descriptor its game module produces; consumers
/// match on the variant they asked for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProblemBody {
    Arithmetic(ArithmeticProblem),
    Pattern(PatternProblem),
    RuleSwitch(RuleProblem),
    TrueFalse(Statement),
    SymbolSwap(Equation),
    NumberDetective(AnomalyProblem),
    RedundantRule(RulePuzzle),
    Geometry(GeometryProblem),
    Calculus(CalcProblem),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizProblem {
    pub problem_id: String,
    pub game: GameKind,
    pub body: ProblemBody,
}

//! Rule-classification questions with mid-game rule changes ("Brain Meltdown").
//!
//! Each rule knows how to synthesize one candidate that satisfies it and
//! three that fail it; extremum rules (largest/smallest) instead draw four
//! distinct values and locate the extremum afterwards. [`RuleSession`] owns
//! the rule-change state machine: a weighted coin decides whether the active
//! rule survives each answer, and a flagged change always presents a rule
//! different from the current one.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{helpers, models::Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleId {
    Even,
    Odd,
    Largest,
    Smallest,
    EndsInFive,
    DivisibleBy3,
    DivisibleBy4,
    TwoDigit,
    DigitSumOver10,
    Prime,
    DivisibleBy5,
    PerfectSquare,
    Palindrome,
    Fibonacci,
    MultipleOf7,
}

const EASY_RULES: [RuleId; 5] = [
    RuleId::Even,
    RuleId::Odd,
    RuleId::Largest,
    RuleId::Smallest,
    RuleId::EndsInFive,
];

const MEDIUM_RULES: [RuleId; 9] = [
    RuleId::Even,
    RuleId::Odd,
    RuleId::Largest,
    RuleId::Smallest,
    RuleId::EndsInFive,
    RuleId::DivisibleBy3,
    RuleId::DivisibleBy4,
    RuleId::TwoDigit,
    RuleId::DigitSumOver10,
];

const HARD_RULES: [RuleId; 15] = [
    RuleId::Even,
    RuleId::Odd,
    RuleId::Largest,
    RuleId::Smallest,
    RuleId::EndsInFive,
    RuleId::DivisibleBy3,
    RuleId::DivisibleBy4,
    RuleId::TwoDigit,
    RuleId::DigitSumOver10,
    RuleId::Prime,
    RuleId::DivisibleBy5,
    RuleId::PerfectSquare,
    RuleId::Palindrome,
    RuleId::Fibonacci,
    RuleId::MultipleOf7,
];

const SQUARES: [i64; 9] = [4, 9, 16, 25, 36, 49, 64, 81, 100];
const PALINDROMES: [i64; 15] = [11, 22, 33, 44, 55, 66, 77, 88, 99, 101, 111, 121, 131, 141, 151];
const FIBS: [i64; 10] = [1, 2, 3, 5, 8, 13, 21, 34, 55, 89];
const PRIMES: [i64; 20] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71];

pub fn digit_sum(mut n: i64) -> i64 {
    let mut sum = 0;
    n = n.abs();
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

pub fn is_perfect_square(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let r = (n as f64).sqrt().round() as i64;
    r * r == n
}

pub fn is_palindrome(n: i64) -> bool {
    let s = n.to_string();
    s.chars().eq(s.chars().rev())
}

pub fn is_fibonacci(n: i64) -> bool {
    let (mut a, mut b) = (1i64, 1i64);
    while b < n {
        let next = a + b;
        a = b;
        b = next;
    }
    b == n
}

impl RuleId {
    pub fn label(self) -> &'static str {
        match self {
            RuleId::Even           => "Pick the EVEN number",
            RuleId::Odd            => "Pick the ODD number",
            RuleId::Largest        => "Pick the LARGEST number",
            RuleId::Smallest       => "Pick the SMALLEST number",
            RuleId::EndsInFive     => "Pick number ending with 5",
            RuleId::DivisibleBy3   => "Pick a number divisible by 3",
            RuleId::DivisibleBy4   => "Pick a number divisible by 4",
            RuleId::TwoDigit       => "Pick the TWO-DIGIT number",
            RuleId::DigitSumOver10 => "Pick number with digit sum > 10",
            RuleId::Prime          => "Pick the PRIME number",
            RuleId::DivisibleBy5   => "Pick a number divisible by 5",
            RuleId::PerfectSquare  => "Pick the PERFECT SQUARE",
            RuleId::Palindrome     => "Pick the PALINDROME number",
            RuleId::Fibonacci      => "Pick the FIBONACCI number",
            RuleId::MultipleOf7    => "Pick a MULTIPLE of 7",
        }
    }

    /// Pointwise membership test. Largest/Smallest are relative to the
    /// candidate set and always report `true` here; use [`RuleId::verify`]
    /// to check a full option set.
    pub fn satisfies(self, v: i64) -> bool {
        match self {
            RuleId::Even           => v % 2 == 0,
            RuleId::Odd            => v % 2 != 0,
            RuleId::Largest | RuleId::Smallest => true,
            RuleId::EndsInFive     => v % 10 == 5,
            RuleId::DivisibleBy3   => v % 3 == 0,
            RuleId::DivisibleBy4   => v % 4 == 0,
            RuleId::TwoDigit       => (10..=99).contains(&v),
            RuleId::DigitSumOver10 => digit_sum(v) > 10,
            RuleId::Prime          => is_prime(v),
            RuleId::DivisibleBy5   => v % 5 == 0,
            RuleId::PerfectSquare  => is_perfect_square(v),
            RuleId::Palindrome     => is_palindrome(v),
            RuleId::Fibonacci      => is_fibonacci(v),
            RuleId::MultipleOf7    => v % 7 == 0,
        }
    }

    /// True iff `options[index]` is the unique correct pick under this rule.
    pub fn verify(self, options: &[i64; 4], index: usize) -> bool {
        let v = options[index];
        match self {
            RuleId::Largest => options.iter().enumerate().all(|(i, &o)| i == index || o < v),
            RuleId::Smallest => options.iter().enumerate().all(|(i, &o)| i == index || o > v),
            _ => {
                self.satisfies(v)
                    && options
                        .iter()
                        .enumerate()
                        .all(|(i, &o)| i == index || !self.satisfies(o))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleProblem {
    pub rule: RuleId,
    pub label: String,
    pub options: [i64; 4],
    pub correct_index: usize,
}

pub fn rules_for(difficulty: Difficulty) -> &'static [RuleId] {
    match difficulty {
        Difficulty::Easy => &EASY_RULES,
        Difficulty::Medium => &MEDIUM_RULES,
        Difficulty::Hard => &HARD_RULES,
    }
}

/// Synthesize one value satisfying `rule`.
fn synth_correct<R: Rng>(rng: &mut R, rule: RuleId) -> i64 {
    match rule {
        RuleId::Even => rng.gen_range(1..=15) * 2,
        RuleId::Odd => rng.gen_range(0..=14) * 2 + 1,
        RuleId::EndsInFive => rng.gen_range(0..=8) * 10 + 5,
        RuleId::DivisibleBy3 => rng.gen_range(1..=20) * 3,
        RuleId::DivisibleBy4 => rng.gen_range(1..=15) * 4,
        RuleId::TwoDigit => rng.gen_range(10..=99),
        RuleId::DigitSumOver10 => {
            // 29..=68 contains round values (30, 40, ...) whose digit sum is
            // small; redraw until the sum clears 10.
            let mut v = rng.gen_range(29..=68);
            let mut attempts = 0;
            while digit_sum(v) <= 10 && attempts < 50 {
                v = rng.gen_range(29..=68);
                attempts += 1;
            }
            if digit_sum(v) > 10 { v } else { 29 }
        }
        RuleId::Prime => *helpers::pick(rng, &PRIMES),
        RuleId::DivisibleBy5 => rng.gen_range(1..=15) * 5,
        RuleId::PerfectSquare => *helpers::pick(rng, &SQUARES),
        RuleId::Palindrome => *helpers::pick(rng, &PALINDROMES),
        RuleId::Fibonacci => *helpers::pick(rng, &FIBS),
        RuleId::MultipleOf7 => rng.gen_range(1..=12) * 7,
        // Extremum rules have no pointwise correct value.
        RuleId::Largest | RuleId::Smallest => 0,
    }
}

/// Distractor draw range per rule.
fn distractor_range(rule: RuleId) -> (i64, i64) {
    match rule {
        RuleId::Even | RuleId::Odd => (1, 30),
        RuleId::EndsInFive => (1, 90),
        RuleId::DivisibleBy3 | RuleId::DivisibleBy4 => (1, 60),
        RuleId::TwoDigit => (1, 999),
        RuleId::DigitSumOver10 => (1, 50),
        RuleId::Prime => (2, 90),
        RuleId::DivisibleBy5 => (1, 80),
        RuleId::PerfectSquare => (2, 100),
        RuleId::Palindrome => (10, 159),
        RuleId::Fibonacci => (4, 90),
        RuleId::MultipleOf7 => (1, 84),
        RuleId::Largest | RuleId::Smallest => (1, 50),
    }
}

/// Build a fresh candidate set for a known rule.
pub fn build<R: Rng>(rng: &mut R, rule: RuleId) -> RuleProblem {
    let (options, correct_index) = match rule {
        RuleId::Largest | RuleId::Smallest => {
            let values = helpers::draw_unique(rng, &[], 4, |r| r.gen_range(1..=50), |_| true);
            let options = [values[0], values[1], values[2], values[3]];
            let mut correct_index = 0;
            for (i, &v) in options.iter().enumerate() {
                let better = if rule == RuleId::Largest {
                    v > options[correct_index]
                } else {
                    v < options[correct_index]
                };
                if better {
                    correct_index = i;
                }
            }
            (options, correct_index)
        }
        _ => {
            let correct = synth_correct(rng, rule);
            let (lo, hi) = distractor_range(rule);
            let distractors = helpers::draw_unique(
                rng,
                &[correct],
                3,
                |r| r.gen_range(lo..=hi),
                |v| !rule.satisfies(v),
            );
            helpers::options_with_index(rng, correct, [distractors[0], distractors[1], distractors[2]])
        }
    };

    RuleProblem {
        rule,
        label: rule.label().to_string(),
        options,
        correct_index,
    }
}

/// Pick a rule from the tier pool (minus `exclude`, falling back to the full
/// pool if the filter empties it) and build its candidates.
pub fn generate<R: Rng>(rng: &mut R, exclude: Option<RuleId>, difficulty: Difficulty) -> RuleProblem {
    let pool = rules_for(difficulty);
    let filtered: Vec<RuleId> = pool.iter().copied().filter(|r| Some(*r) != exclude).collect();
    let rule = if filtered.is_empty() {
        *helpers::pick(rng, pool)
    } else {
        *helpers::pick(rng, &filtered)
    };
    build(rng, rule)
}

// ---------------------------------------------------------------------------
// Session state machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTransition {
    /// The active rule survived the coin flip.
    Kept,
    /// A different rule is now active; the UI shows the change interstitial.
    Changed,
}

/// Probability that the active rule is kept for the next question.
/// Harder tiers change rules more often.
pub fn keep_probability(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 0.6,
        Difficulty::Medium => 0.4,
        Difficulty::Hard => 0.25,
    }
}

/// Tracks the active rule across a Brain Meltdown session.
///
/// The flip happens first; only a "change" outcome redraws the rule, and the
/// redraw excludes the current rule, so [`RuleTransition::Changed`] always
/// means a genuinely different rule.
#[derive(Debug, Clone)]
pub struct RuleSession {
    difficulty: Difficulty,
    problem: RuleProblem,
}

impl RuleSession {
    pub fn start<R: Rng>(rng: &mut R, difficulty: Difficulty) -> Self {
        let problem = generate(rng, None, difficulty);
        RuleSession { difficulty, problem }
    }

    pub fn problem(&self) -> &RuleProblem {
        &self.problem
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Move to the next question, possibly switching the active rule.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> RuleTransition {
        if rng.gen::<f64>() < keep_probability(self.difficulty) {
            self.problem = build(rng, self.problem.rule);
            RuleTransition::Kept
        } else {
            self.problem = generate(rng, Some(self.problem.rule), self.difficulty);
            RuleTransition::Changed
        }
    }
}

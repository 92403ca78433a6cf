//! One module per game family. Each exposes a `generate` function taking a
//! caller-supplied RNG so the dispatcher stays in charge of seeding.

pub mod anomaly;
pub mod arithmetic;
pub mod calculus;
pub mod geometry;
pub mod operator_recovery;
pub mod pattern;
pub mod redundant_rule;
pub mod rule_switch;
pub mod true_false;

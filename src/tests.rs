//! Unit tests for the `math_drill_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical problem; different seeds → varied output |
//! | Structural | ID prefixes; body variant matches the requested game |
//! | Arithmetic | 4 unique positive options; correct appears once; operator consistency |
//! | Pattern | `next` recomputed from the sequence for every family |
//! | Rule switch | Unique correct option; pool exclusion; session keep/change semantics |
//! | Difficulty | All three tiers produce valid problems for every game |
//! | Entropy | `rng_seed: None` produces a valid problem (smoke test) |
//! | Scoring | Point tables, timers, speed bonus, and Symbol Swap award math |
//! | Sessions | Flat-rate scoring end to end; score board integration |

use crate::quiz_engine::games::pattern::PatternFamily;
use crate::quiz_engine::games::rule_switch::{self, RuleTransition};
use crate::quiz_engine::models::{
    Difficulty, GameKind, ProblemBody, QuizRequest,
};
use crate::quiz_engine::{feedback, generate_quiz, scoring};
use crate::quiz_engine::scores::ScoreBoard;
use crate::quiz_engine::session::QuizSession;

use rand::rngs::StdRng;
use rand::SeedableRng;

// ── helpers ──────────────────────────────────────────────────────────────────

/// Build a deterministic `QuizRequest` at Medium difficulty.
fn req(game: GameKind, seed: u64) -> QuizRequest {
    QuizRequest {
        game,
        difficulty: Difficulty::Medium,
        rng_seed: Some(seed),
    }
}

const TIERS: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_problem() {
    for game in GameKind::ALL {
        for seed in SEEDS {
            let a = generate_quiz(req(game, seed));
            let b = generate_quiz(req(game, seed));
            assert_eq!(a.problem_id, b.problem_id, "problem_id mismatch for {game:?}");
            assert_eq!(
                serde_json::to_value(&a.body).unwrap(),
                serde_json::to_value(&b.body).unwrap(),
                "body mismatch for {game:?} seed {seed}"
            );
        }
    }
}

#[test]
fn different_seeds_produce_varied_problems() {
    // Not a hard guarantee (collisions are theoretically possible) but holds
    // in practice for all reasonable seed ranges.
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = generate_quiz(req(GameKind::Arithmetic, seed));
        let b = generate_quiz(req(GameKind::Arithmetic, seed + 500));
        let (a, b) = match (&a.body, &b.body) {
            (ProblemBody::Arithmetic(x), ProblemBody::Arithmetic(y)) => {
                (x.prompt.clone(), y.prompt.clone())
            }
            _ => unreachable!(),
        };
        if a == b {
            same_count += 1;
        }
    }
    assert!(
        same_count < pairs as usize / 4,
        "Too many identical prompts across different seeds ({same_count}/{pairs})"
    );
}

#[test]
fn entropy_seed_produces_a_valid_problem() {
    // Smoke test: rng_seed: None must not panic and must satisfy invariants.
    let p = generate_quiz(QuizRequest::new(GameKind::Arithmetic));
    assert!(!p.problem_id.is_empty());
    match p.body {
        ProblemBody::Arithmetic(a) => {
            assert_eq!(a.options.len(), 4);
            assert!(a.options.contains(&a.correct));
        }
        _ => panic!("wrong body variant for Arithmetic"),
    }
}

// ── structural invariants ────────────────────────────────────────────────────

#[test]
fn problem_ids_use_the_game_prefix() {
    for game in GameKind::ALL {
        let p = generate_quiz(req(game, 77));
        let expected = format!("{}-", game.id_prefix());
        assert!(
            p.problem_id.starts_with(&expected),
            "{game:?} produced id {}",
            p.problem_id
        );
        // prefix, dash, 8 hex digits
        assert_eq!(p.problem_id.len(), game.id_prefix().len() + 9);
    }
}

#[test]
fn body_variant_matches_requested_game() {
    for game in GameKind::ALL {
        let p = generate_quiz(req(game, 3));
        let ok = matches!(
            (game, &p.body),
            (GameKind::Arithmetic, ProblemBody::Arithmetic(_))
                | (GameKind::Pattern, ProblemBody::Pattern(_))
                | (GameKind::RuleSwitch, ProblemBody::RuleSwitch(_))
                | (GameKind::TrueFalse, ProblemBody::TrueFalse(_))
                | (GameKind::SymbolSwap, ProblemBody::SymbolSwap(_))
                | (GameKind::NumberDetective, ProblemBody::NumberDetective(_))
                | (GameKind::RedundantRule, ProblemBody::RedundantRule(_))
                | (GameKind::Geometry, ProblemBody::Geometry(_))
                | (GameKind::Derivatives, ProblemBody::Calculus(_))
                | (GameKind::Integrals, ProblemBody::Calculus(_))
        );
        assert!(ok, "body variant mismatch for {game:?}");
    }
}

// ── arithmetic properties ────────────────────────────────────────────────────

#[test]
fn arithmetic_problems_hold_their_invariants() {
    let mut rng = StdRng::seed_from_u64(4242);
    for difficulty in TIERS {
        for _ in 0..3500 {
            let p = crate::quiz_engine::games::arithmetic::generate(&mut rng, difficulty);
            assert_eq!(p.options.len(), 4, "option count for {}", p.prompt);
            assert_eq!(
                p.options.iter().filter(|&&v| v == p.correct).count(),
                1,
                "correct must appear exactly once in {}",
                p.prompt
            );
            for (i, &v) in p.options.iter().enumerate() {
                assert!(v > 0, "non-positive option {v} in {}", p.prompt);
                assert!(!p.options[..i].contains(&v), "duplicate option in {}", p.prompt);
            }
            let (a, b) = p.operands;
            assert_eq!(
                p.operator.apply(a, b),
                Some(p.correct),
                "operator inconsistent with correct answer in {}",
                p.prompt
            );
        }
    }
}

// ── pattern properties ───────────────────────────────────────────────────────

/// Recompute `next` purely from the emitted sequence.
fn expected_next(family: PatternFamily, s: &[i64; 4]) -> i64 {
    match family {
        PatternFamily::ArithmeticStep => {
            let step = s[1] - s[0];
            assert_eq!(s[2] - s[1], step);
            assert_eq!(s[3] - s[2], step);
            s[3] + step
        }
        PatternFamily::Doubling => {
            assert_eq!(s[1], s[0] * 2);
            s[3] * 2
        }
        PatternFamily::Tripling => {
            assert_eq!(s[1], s[0] * 3);
            s[3] * 3
        }
        PatternFamily::Squares => {
            let root = (s[0] as f64).sqrt().round() as i64;
            for (i, &v) in s.iter().enumerate() {
                assert_eq!((root + i as i64).pow(2), v);
            }
            (root + 4).pow(2)
        }
        PatternFamily::FibonacciLike => {
            assert_eq!(s[2], s[0] + s[1]);
            assert_eq!(s[3], s[1] + s[2]);
            s[2] + s[3]
        }
        PatternFamily::Alternating => {
            let add = s[1] - s[0];
            let sub = s[1] - s[2];
            assert_eq!(s[3] - s[2], add);
            s[3] - sub
        }
        PatternFamily::Cubes => {
            let root = (s[0] as f64).cbrt().round() as i64;
            for (i, &v) in s.iter().enumerate() {
                assert_eq!((root + i as i64).pow(3), v);
            }
            (root + 4).pow(3)
        }
    }
}

#[test]
fn pattern_next_follows_the_stated_rule() {
    let mut rng = StdRng::seed_from_u64(99);
    for difficulty in TIERS {
        for _ in 0..2000 {
            let p = crate::quiz_engine::games::pattern::generate(&mut rng, difficulty);
            assert_eq!(
                p.next,
                expected_next(p.family, &p.sequence),
                "wrong continuation for {:?} {:?}",
                p.family,
                p.sequence
            );
            assert!(!p.label.is_empty());
        }
    }
}

#[test]
fn pattern_tiers_only_add_families() {
    use crate::quiz_engine::games::pattern::families_for;
    let medium = families_for(Difficulty::Medium);
    let hard = families_for(Difficulty::Hard);
    for f in medium {
        assert!(hard.contains(f), "{f:?} dropped from the hard pool");
    }
}

// ── rule switch ──────────────────────────────────────────────────────────────

#[test]
fn rule_switch_has_a_unique_correct_option() {
    let mut rng = StdRng::seed_from_u64(1234);
    for difficulty in TIERS {
        for _ in 0..2000 {
            let p = rule_switch::generate(&mut rng, None, difficulty);
            assert!(
                p.rule.verify(&p.options, p.correct_index),
                "ambiguous candidate set {:?} for {:?}",
                p.options,
                p.rule
            );
            assert!(rule_switch::rules_for(difficulty).contains(&p.rule));
        }
    }
}

#[test]
fn rule_switch_honors_exclusion() {
    let mut rng = StdRng::seed_from_u64(55);
    for difficulty in TIERS {
        for rule in rule_switch::rules_for(difficulty) {
            for _ in 0..50 {
                let p = rule_switch::generate(&mut rng, Some(*rule), difficulty);
                assert_ne!(p.rule, *rule, "excluded rule came back");
            }
        }
    }
}

#[test]
fn rule_session_changes_mean_a_different_rule() {
    let mut rng = StdRng::seed_from_u64(777);
    for difficulty in TIERS {
        let mut session = rule_switch::RuleSession::start(&mut rng, difficulty);
        let mut kept = 0u32;
        let mut changed = 0u32;
        for _ in 0..300 {
            let before = session.problem().rule;
            match session.advance(&mut rng) {
                RuleTransition::Kept => {
                    kept += 1;
                    assert_eq!(session.problem().rule, before);
                }
                RuleTransition::Changed => {
                    changed += 1;
                    assert_ne!(session.problem().rule, before);
                }
            }
        }
        // Both outcomes must occur; exact counts depend on the RNG.
        assert!(kept > 0, "no keeps at {difficulty:?}");
        assert!(changed > 0, "no changes at {difficulty:?}");
    }
}

// ── scoring tables ───────────────────────────────────────────────────────────

#[test]
fn point_tables_match_game_design() {
    use Difficulty::*;
    assert_eq!(scoring::base_points(GameKind::Arithmetic, Easy), 5);
    assert_eq!(scoring::base_points(GameKind::Arithmetic, Hard), 15);
    assert_eq!(scoring::base_points(GameKind::Pattern, Medium), 15);
    assert_eq!(scoring::base_points(GameKind::RuleSwitch, Hard), 16);
    assert_eq!(scoring::base_points(GameKind::TrueFalse, Medium), 10);
    assert_eq!(scoring::base_points(GameKind::NumberDetective, Hard), 30);
    assert_eq!(scoring::base_points(GameKind::RedundantRule, Easy), 20);
    assert_eq!(scoring::base_points(GameKind::Geometry, Medium), 20);
    assert_eq!(scoring::base_points(GameKind::Derivatives, Hard), 300);
    assert_eq!(scoring::base_points(GameKind::Integrals, Easy), 100);
}

#[test]
fn session_timers_match_game_design() {
    use Difficulty::*;
    assert_eq!(scoring::session_seconds(GameKind::Arithmetic, Easy), 90);
    assert_eq!(scoring::session_seconds(GameKind::TrueFalse, Hard), 45);
    assert_eq!(scoring::session_seconds(GameKind::Pattern, Medium), 90);
    assert_eq!(scoring::session_seconds(GameKind::SymbolSwap, Medium), 75);
    assert_eq!(scoring::session_seconds(GameKind::NumberDetective, Easy), 150);
    assert_eq!(scoring::session_seconds(GameKind::RedundantRule, Hard), 120);
    // Broken Geometry's clock is per question and tier-independent.
    for tier in TIERS {
        assert_eq!(scoring::session_seconds(GameKind::Geometry, tier), 60);
        assert_eq!(scoring::session_seconds(GameKind::Derivatives, tier), 0);
    }
}

#[test]
fn calc_speed_bonus_decays_to_base() {
    assert_eq!(scoring::calc_speed_points(Difficulty::Easy, 0), 150);
    assert_eq!(scoring::calc_speed_points(Difficulty::Easy, 10), 130);
    assert_eq!(scoring::calc_speed_points(Difficulty::Easy, 25), 100);
    assert_eq!(scoring::calc_speed_points(Difficulty::Easy, 60), 100);
    assert_eq!(scoring::calc_speed_points(Difficulty::Hard, 5), 340);
}

#[test]
fn swap_award_math() {
    // medium base 30, 30s left: 30 + 6
    assert_eq!(scoring::swap_award(Difficulty::Medium, 30, false), 36);
    // hint forfeits half the base
    assert_eq!(scoring::swap_award(Difficulty::Medium, 30, true), 21);
    // 5 seconds or less pays no time bonus
    assert_eq!(scoring::swap_award(Difficulty::Easy, 5, false), 15);
    // floor at 5
    assert!(scoring::swap_award(Difficulty::Easy, 0, true) >= 5);
    assert_eq!(scoring::swap_wrong_penalty(Difficulty::Hard), 18);
    assert_eq!(scoring::swap_hint_cost(Difficulty::Medium), 7);
}

// ── sessions and score board ─────────────────────────────────────────────────

#[test]
fn arithmetic_session_scores_at_the_flat_rate() {
    for (difficulty, points) in [
        (Difficulty::Easy, 5i64),
        (Difficulty::Medium, 10),
        (Difficulty::Hard, 15),
    ] {
        let mut session = QuizSession::new(GameKind::Arithmetic, difficulty);
        assert_eq!(session.record_correct(), points);
        session.record_wrong();
        assert_eq!(session.record_correct(), points);
        assert_eq!(session.score(), 2 * points);
    }
}

#[test]
fn finished_sessions_feed_the_score_board() {
    let mut board = ScoreBoard::new();

    let mut first = QuizSession::new(GameKind::Geometry, Difficulty::Hard);
    first.record_correct();
    first.record_correct();
    board.push(first.finish().unwrap());

    let mut second = QuizSession::new(GameKind::TrueFalse, Difficulty::Easy);
    second.record_correct();
    board.push(second.finish().unwrap());

    assert_eq!(board.len(), 2);
    assert_eq!(board.best(), Some(60));
    let top = board.top(1);
    assert_eq!(top[0].game_name, "Broken Geometry");
    assert_eq!(board.total(), 68);
}

// ── feedback ─────────────────────────────────────────────────────────────────

#[test]
fn feedback_pools_always_produce_a_line() {
    use feedback::FeedbackKind::*;
    let mut rng = StdRng::seed_from_u64(8);
    for kind in [Correct, Wrong, Hint, RuleChange, Partial] {
        for _ in 0..20 {
            assert!(!feedback::line(&mut rng, kind).is_empty());
        }
    }
}

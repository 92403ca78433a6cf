use rand::RngCore;
use rand::{rngs::StdRng, SeedableRng};

use crate::quiz_engine::{
    games,
    games::calculus::CalcKind,
    models::{GameKind, ProblemBody, QuizProblem, QuizRequest},
};

/// Generate a unique problem ID from game + seed.
fn make_problem_id(game: GameKind, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", game.id_prefix(), rng.next_u32())
}

/// Core dispatch: routes to the correct game module.
pub fn generate_quiz(request: QuizRequest) -> QuizProblem {
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let problem_id = make_problem_id(request.game, &mut rng);
    let difficulty = request.difficulty;

    let body = match request.game {
        GameKind::Arithmetic =>
            ProblemBody::Arithmetic(games::arithmetic::generate(&mut rng, difficulty)),

        GameKind::Pattern =>
            ProblemBody::Pattern(games::pattern::generate(&mut rng, difficulty)),

        GameKind::RuleSwitch =>
            ProblemBody::RuleSwitch(games::rule_switch::generate(&mut rng, None, difficulty)),

        GameKind::TrueFalse =>
            ProblemBody::TrueFalse(games::true_false::generate(&mut rng, difficulty)),

        GameKind::SymbolSwap =>
            ProblemBody::SymbolSwap(games::operator_recovery::generate(&mut rng, difficulty)),

        GameKind::NumberDetective =>
            ProblemBody::NumberDetective(games::anomaly::generate(&mut rng, difficulty)),

        GameKind::RedundantRule =>
            ProblemBody::RedundantRule(games::redundant_rule::generate(&mut rng, difficulty)),

        GameKind::Geometry =>
            ProblemBody::Geometry(games::geometry::generate(&mut rng, difficulty)),

        GameKind::Derivatives =>
            ProblemBody::Calculus(games::calculus::generate(&mut rng, CalcKind::Derivative, difficulty)),

        GameKind::Integrals =>
            ProblemBody::Calculus(games::calculus::generate(&mut rng, CalcKind::Integral, difficulty)),
    };

    QuizProblem {
        problem_id,
        game: request.game,
        body,
    }
}

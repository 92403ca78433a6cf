//! Sarcastic feedback lines shown after each answer.
//!
//! Selection is uniform within a pool; there is no uniqueness guarantee
//! across draws. The lines carry no game state, so one pool per outcome kind
//! serves every game.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    /// Fully correct answer.
    Correct,
    /// Fully wrong answer.
    Wrong,
    /// Player asked for a hint.
    Hint,
    /// The active rule changed between questions (Brain Meltdown).
    RuleChange,
    /// Some but not all anomalies were found (Number Detective).
    Partial,
}

const CORRECT: [&str; 8] = [
    "Oh wow, you got it right. Stop the presses!",
    "Correct! I'm shaking with excitement over your math skills.",
    "You nailed it! I guess miracles do happen.",
    "Right answer! Should I alert the Nobel committee?",
    "Correct! You found the pattern. Everyone give a slow clap.",
    "Right! Looks like that one brain cell is working today.",
    "Correct! Against all odds, you didn't panic. Color me impressed.",
    "Right! Somewhere, a geometry teacher is mildly impressed.",
];

const WRONG: [&str; 8] = [
    "Wrong. Did you even try, or was that interpretive math?",
    "Incorrect. Don't worry, math hates you too.",
    "Nope. You might have better luck guessing lottery numbers.",
    "Wrong. The pattern was waving at you. Literally.",
    "Nope. Maybe patterns and you are sworn enemies?",
    "Incorrect. Reading instructions is apparently optional for you.",
    "Wrong. Even random guessing should work 25% of the time.",
    "Nope. That was painful to watch. Truly painful.",
];

const HINT: [&str; 6] = [
    "Hint: Try using your brain… if it's charged.",
    "Hint: The answer is hiding somewhere in plain sight. Good luck!",
    "Hint: Think. Not too hard, don't strain yourself.",
    "Hint: Do the math in your head first. Groundbreaking concept, I know.",
    "Hint: Order of operations matters. PEMDAS called, it's disappointed in you.",
    "Hint: One of these numbers is lying to you. Find the liar.",
];

const RULE_CHANGE: [&str; 5] = [
    "Plot twist! Rules changed mid-game. Shocker.",
    "Surprise! New rule. Because who needs predictability anyway?",
    "Rule change! Mid-game chaos is fun… if you like existential dread.",
    "New rule alert! Try not to cry, okay?",
    "The rules have changed. Life lesson: nothing is fair, ever.",
];

const PARTIAL: [&str; 4] = [
    "Partially correct. Some anomalies remain… like your attention span.",
    "Incomplete analysis. You skipped some parts, didn't you?",
    "Some errors found, but not all. Close… but not really.",
    "Partial identification. Insufficient. Try harder, if you can.",
];

/// Pick one feedback line for the given outcome.
pub fn line<R: Rng>(rng: &mut R, kind: FeedbackKind) -> &'static str {
    let pool: &[&'static str] = match kind {
        FeedbackKind::Correct => &CORRECT,
        FeedbackKind::Wrong => &WRONG,
        FeedbackKind::Hint => &HINT,
        FeedbackKind::RuleChange => &RULE_CHANGE,
        FeedbackKind::Partial => &PARTIAL,
    };
    pool[rng.gen_range(0..pool.len())]
}

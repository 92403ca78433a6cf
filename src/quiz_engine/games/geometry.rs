//! Deliberately impossible figures ("Broken Geometry").
//!
//! Each template renders a figure that violates one geometric rule and asks
//! for the value the rule would force if the figure were honest. The broken
//! reading always appears among the options as the lure, even when it is
//! mathematically impossible (the pentagon lure is negative on purpose).

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{helpers, models::Difficulty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryKind {
    TriangleAngles,
    SquareSides,
    CircleArea,
    RectanglePerimeter,
    ParallelLines,
    PentagonAngles,
    CompositeArea,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryProblem {
    pub kind: GeometryKind,
    pub shape: String,
    pub given: String,
    pub broken_rule: String,
    pub question: String,
    pub options: Vec<i64>,
    pub correct_answer: i64,
    pub explanation: String,
}

/// Nudge duplicate options upward so every option is distinct, then shuffle.
/// The correct answer is never moved.
fn finish_options<R: Rng>(rng: &mut R, correct: i64, raw: [i64; 4]) -> Vec<i64> {
    let mut options: Vec<i64> = Vec::with_capacity(4);
    for &v in &raw {
        let mut v = v;
        while options.contains(&v) {
            v += 1;
            if v == correct {
                v += 1;
            }
        }
        options.push(v);
    }
    helpers::shuffle(rng, &mut options);
    options
}

fn triangle_angles<R: Rng>(rng: &mut R) -> GeometryProblem {
    let a1 = rng.gen_range(30..=69);
    let a2 = rng.gen_range(40..=79);
    let broken = rng.gen_range(70..=119);
    let correct = 180 - a1 - a2;
    GeometryProblem {
        kind: GeometryKind::TriangleAngles,
        shape: "Triangle".to_string(),
        given: format!("Angles: {a1}°, {a2}°, ?"),
        broken_rule: "Triangle angles don't sum to 180°".to_string(),
        question: "What is the third angle?".to_string(),
        options: finish_options(rng, correct, [correct, broken, a1 + 10, a2 + 15]),
        correct_answer: correct,
        explanation: format!(
            "In a normal triangle, angles sum to 180°. The correct angle is {correct}°, not {broken}°."
        ),
    }
}

fn square_sides<R: Rng>(rng: &mut R) -> GeometryProblem {
    let side = rng.gen_range(5..=14);
    let broken = side + rng.gen_range(1..=3);
    GeometryProblem {
        kind: GeometryKind::SquareSides,
        shape: "Square".to_string(),
        given: format!("Three sides: {side}, {side}, {side}"),
        broken_rule: "Not all sides are equal".to_string(),
        question: "What is the fourth side?".to_string(),
        options: finish_options(rng, side, [side, broken, side * 2, side - 1]),
        correct_answer: side,
        explanation: format!(
            "A square must have all equal sides. The fourth side should be {side}, even though the shape might suggest otherwise."
        ),
    }
}

fn circle_area<R: Rng>(rng: &mut R) -> GeometryProblem {
    let r = rng.gen_range(3..=7i64);
    let correct = (std::f64::consts::PI * (r * r) as f64).round() as i64;
    let broken = (2.0 * std::f64::consts::PI * r as f64).round() as i64;
    let pi_r = (std::f64::consts::PI * r as f64).round() as i64;
    GeometryProblem {
        kind: GeometryKind::CircleArea,
        shape: "Circle".to_string(),
        given: format!("Radius: {r}"),
        broken_rule: "Area formula is actually circumference".to_string(),
        question: "What is the area?".to_string(),
        options: finish_options(rng, correct, [correct, broken, r * r, pi_r]),
        correct_answer: correct,
        explanation: format!(
            "The correct area formula is πr². Area = {correct}, not {broken} (which is circumference)."
        ),
    }
}

fn rectangle_perimeter<R: Rng>(rng: &mut R) -> GeometryProblem {
    let length = rng.gen_range(6..=13);
    let width = rng.gen_range(3..=7);
    let correct = 2 * (length + width);
    let broken = length + width;
    GeometryProblem {
        kind: GeometryKind::RectanglePerimeter,
        shape: "Rectangle".to_string(),
        given: format!("Length: {length}, Width: {width}"),
        broken_rule: "Perimeter formula is missing multiplication".to_string(),
        question: "What is the perimeter?".to_string(),
        options: finish_options(
            rng,
            correct,
            [correct, broken, length * width, length + width + 10],
        ),
        correct_answer: correct,
        explanation: format!("Perimeter = 2(l + w) = {correct}, not just {broken}."),
    }
}

fn parallel_lines<R: Rng>(rng: &mut R) -> GeometryProblem {
    let a1 = rng.gen_range(50..=79);
    let broken = a1 + rng.gen_range(5..=19);
    GeometryProblem {
        kind: GeometryKind::ParallelLines,
        shape: "Parallel Lines".to_string(),
        given: format!("Angle 1: {a1}°"),
        broken_rule: "Corresponding angles are not equal".to_string(),
        question: "What should Angle 2 be if lines are parallel?".to_string(),
        options: finish_options(rng, a1, [a1, broken, 180 - a1, 90]),
        correct_answer: a1,
        explanation: format!("If lines are truly parallel, corresponding angles must be equal: {a1}°."),
    }
}

fn pentagon_angles<R: Rng>(rng: &mut R) -> GeometryProblem {
    let known = [108i64, 110, 105, 112];
    let sum: i64 = known.iter().sum();
    let correct = 540 - sum;
    let broken = 360 - sum;
    GeometryProblem {
        kind: GeometryKind::PentagonAngles,
        shape: "Pentagon".to_string(),
        given: format!("Four angles: {}°, {}°, {}°, {}°", known[0], known[1], known[2], known[3]),
        broken_rule: "Using wrong angle sum (360° instead of 540°)".to_string(),
        question: "What is the fifth angle?".to_string(),
        options: finish_options(rng, correct, [correct, broken, 108, 72]),
        correct_answer: correct,
        explanation: format!(
            "Pentagon angles sum to 540°. The fifth angle is {correct}°, not {broken}°."
        ),
    }
}

fn composite_area<R: Rng>(rng: &mut R) -> GeometryProblem {
    let (rect_w, rect_h) = (10i64, 6i64);
    let (tri_base, tri_height) = (10i64, 4i64);
    let correct = rect_w * rect_h + tri_base * tri_height / 2;
    let broken = rect_w * rect_h;
    GeometryProblem {
        kind: GeometryKind::CompositeArea,
        shape: "Composite Shape".to_string(),
        given: format!("Rectangle: {rect_w}×{rect_h}, Triangle: base {tri_base}, height {tri_height}"),
        broken_rule: "Missing triangle area in composite".to_string(),
        question: "What is the total area?".to_string(),
        options: finish_options(
            rng,
            correct,
            [correct, broken, rect_w * rect_h + tri_base * tri_height, 100],
        ),
        correct_answer: correct,
        explanation: format!(
            "Total area = rectangle + triangle = {broken} + {} = {correct}.",
            tri_base * tri_height / 2
        ),
    }
}

pub fn generate<R: Rng>(rng: &mut R, difficulty: Difficulty) -> GeometryProblem {
    let pool_size = if difficulty == Difficulty::Hard { 7 } else { 6 };
    match rng.gen_range(0..pool_size) {
        0 => triangle_angles(rng),
        1 => square_sides(rng),
        2 => circle_area(rng),
        3 => rectangle_perimeter(rng),
        4 => parallel_lines(rng),
        5 => pentagon_angles(rng),
        _ => composite_area(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn options_are_unique_and_contain_the_answer() {
        let mut rng = StdRng::seed_from_u64(19);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for _ in 0..400 {
                let p = generate(&mut rng, difficulty);
                assert_eq!(p.options.len(), 4);
                assert!(p.options.contains(&p.correct_answer));
                for (i, v) in p.options.iter().enumerate() {
                    assert!(!p.options[..i].contains(v), "duplicate option in {:?}", p.kind);
                }
            }
        }
    }

    #[test]
    fn fixed_templates_have_known_answers() {
        let mut rng = StdRng::seed_from_u64(29);
        let pentagon = pentagon_angles(&mut rng);
        assert_eq!(pentagon.correct_answer, 105);
        assert!(pentagon.options.contains(&-75), "missing angle-sum lure");

        let composite = composite_area(&mut rng);
        assert_eq!(composite.correct_answer, 80);
    }

    #[test]
    fn composite_template_is_hard_only() {
        let mut rng = StdRng::seed_from_u64(37);
        for difficulty in [Difficulty::Easy, Difficulty::Medium] {
            for _ in 0..300 {
                let p = generate(&mut rng, difficulty);
                assert_ne!(p.kind, GeometryKind::CompositeArea);
            }
        }
    }

    #[test]
    fn triangle_answer_completes_180() {
        let mut rng = StdRng::seed_from_u64(41);
        for _ in 0..200 {
            let p = triangle_angles(&mut rng);
            // given string carries the two known angles
            let parts: Vec<i64> = p
                .given
                .trim_start_matches("Angles: ")
                .trim_end_matches(", ?")
                .split("°, ")
                .map(|s| s.trim_end_matches('°').parse().unwrap())
                .collect();
            assert_eq!(parts.len(), 2);
            assert_eq!(parts[0] + parts[1] + p.correct_answer, 180);
        }
    }
}

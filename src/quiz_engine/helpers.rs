//! Shared builder functions that eliminate boilerplate across game generators.
//!
//! Every numeric multiple-choice game assembles the same pieces: draw a
//! correct value, surround it with unique plausible distractors, and shuffle
//! the option order. These helpers centralise that work so game files focus
//! on the math itself.

use rand::Rng;

/// Retry budget for one distractor window before it is widened.
const MAX_ATTEMPTS: usize = 50;

/// How many times the window is widened before giving up on randomness and
/// filling the remaining slots deterministically.
const MAX_WIDENINGS: usize = 3;

/// Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Uniform pick from a non-empty slice.
pub fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Build `count` unique positive distractors by adding nonzero offsets from
/// `[-window, window]` to `correct`.
///
/// The retry loop is bounded: after [`MAX_ATTEMPTS`] rejected draws the
/// window doubles, and after [`MAX_WIDENINGS`] widenings the remaining slots
/// are filled with the first unused values above `correct`, so the function
/// terminates for every input.
pub fn offset_distractors<R: Rng>(rng: &mut R, correct: i64, window: i64, count: usize) -> Vec<i64> {
    let mut out: Vec<i64> = Vec::with_capacity(count);
    let mut window = window.max(2);
    let mut attempts = 0usize;
    let mut widenings = 0usize;

    while out.len() < count {
        let offset = rng.gen_range(-window..=window);
        let candidate = correct + offset;
        if offset != 0 && candidate > 0 && !out.contains(&candidate) {
            out.push(candidate);
            continue;
        }
        attempts += 1;
        if attempts >= MAX_ATTEMPTS {
            attempts = 0;
            widenings += 1;
            if widenings > MAX_WIDENINGS {
                let mut next = correct + 1;
                while out.len() < count {
                    if !out.contains(&next) {
                        out.push(next);
                    }
                    next += 1;
                }
                break;
            }
            window *= 2;
        }
    }
    out
}

/// Standard 4-option set: the correct value plus 3 unique positive
/// distractors from a difficulty-scaled offset window, shuffled.
pub fn four_options<R: Rng>(rng: &mut R, correct: i64, window: i64) -> Vec<i64> {
    let mut options = offset_distractors(rng, correct, window, 3);
    options.push(correct);
    shuffle(rng, &mut options);
    options
}

/// Collect `count` unique values from `draw` that pass `accept`, skipping
/// anything already in `taken`.
///
/// Used by rule-based games where distractors must *fail* a predicate rather
/// than sit near the correct value. Bounded like [`offset_distractors`]: after
/// the retry budget runs out, a linear scan from 1 upward fills the rest.
pub fn draw_unique<R, D, A>(
    rng: &mut R,
    taken: &[i64],
    count: usize,
    mut draw: D,
    accept: A,
) -> Vec<i64>
where
    R: Rng,
    D: FnMut(&mut R) -> i64,
    A: Fn(i64) -> bool,
{
    let mut out: Vec<i64> = Vec::with_capacity(count);
    let mut attempts = 0usize;
    while out.len() < count {
        if attempts < MAX_ATTEMPTS * (MAX_WIDENINGS + 1) {
            let candidate = draw(rng);
            attempts += 1;
            if accept(candidate) && !taken.contains(&candidate) && !out.contains(&candidate) {
                out.push(candidate);
            }
        } else {
            let mut next = 1i64;
            while out.len() < count {
                if accept(next) && !taken.contains(&next) && !out.contains(&next) {
                    out.push(next);
                }
                next += 1;
            }
        }
    }
    out
}

/// Place `correct` among `distractors` at a random position and return the
/// shuffled option array plus the index of the correct value.
pub fn options_with_index<R: Rng>(rng: &mut R, correct: i64, distractors: [i64; 3]) -> ([i64; 4], usize) {
    let mut options = [correct, distractors[0], distractors[1], distractors[2]];
    shuffle(rng, &mut options);
    let correct_index = options
        .iter()
        .position(|&v| v == correct)
        .unwrap_or_default();
    (options, correct_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn distractors_are_unique_positive_and_nonzero_offset() {
        let mut rng = StdRng::seed_from_u64(7);
        for correct in [1i64, 2, 5, 50, 999] {
            let d = offset_distractors(&mut rng, correct, 10, 3);
            assert_eq!(d.len(), 3);
            for (i, &v) in d.iter().enumerate() {
                assert!(v > 0, "non-positive distractor {v} for correct={correct}");
                assert_ne!(v, correct, "distractor equals correct value");
                assert!(!d[..i].contains(&v), "duplicate distractor {v}");
            }
        }
    }

    #[test]
    fn narrow_window_still_terminates() {
        // window 2 around correct=1 only admits {2, 3}; the widening
        // fallback must supply the third value.
        let mut rng = StdRng::seed_from_u64(3);
        let d = offset_distractors(&mut rng, 1, 2, 3);
        assert_eq!(d.len(), 3);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut items = [1, 2, 3, 4, 5, 6];
        shuffle(&mut rng, &mut items);
        let mut sorted = items;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6]);
    }
}

//! Random colors and option sets.
//!
//! Option sets are built by rejection sampling: draw a color, keep it only if
//! it isn't already in the set. With 16.7M colors collisions are vanishingly
//! rare, and the loop has no iteration cap, so the requested size is always
//! reached. Requested sizes are clamped into `1..=MAX_OPTION_COUNT`.

use rustc_hash::FxHashSet;
use std::ops::RangeInclusive;
use tracing::trace;

use crate::core::{Color, Options, RandomSource, MAX_OPTION_COUNT};

/// Draw a color with each channel uniform over 0-255.
pub fn generate_color<R: RandomSource + ?Sized>(rng: &mut R) -> Color {
    let r = rng.next_channel();
    let g = rng.next_channel();
    let b = rng.next_channel();
    Color::new(r, g, b)
}

/// Build a shuffled, duplicate-free option set containing `target` once.
///
/// The size is drawn uniformly from `counts` after clamping it into
/// `1..=MAX_OPTION_COUNT`; an inverted range collapses to its start.
pub fn generate_options<R: RandomSource + ?Sized>(
    rng: &mut R,
    target: Color,
    counts: RangeInclusive<usize>,
) -> Options {
    let n = rng.pick_count(clamp_counts(counts));
    let mut options = Options::with_capacity(n);
    let mut seen = FxHashSet::default();

    options.push(target);
    seen.insert(target);

    while options.len() < n {
        let candidate = generate_color(rng);
        if seen.insert(candidate) {
            options.push(candidate);
        } else {
            trace!(%candidate, "rejected duplicate option");
        }
    }

    rng.shuffle(&mut options);
    options
}

fn clamp_counts(counts: RangeInclusive<usize>) -> RangeInclusive<usize> {
    let (start, end) = counts.into_inner();
    let start = start.clamp(1, MAX_OPTION_COUNT);
    let end = end.clamp(start, MAX_OPTION_COUNT);
    start..=end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use std::collections::VecDeque;

    /// Replays a fixed channel script; shuffle is the identity.
    struct Scripted {
        channels: VecDeque<u8>,
        count: usize,
    }

    impl Scripted {
        fn new(count: usize, colors: &[Color]) -> Self {
            Self {
                channels: colors.iter().flat_map(|c| [c.r, c.g, c.b]).collect(),
                count,
            }
        }
    }

    impl RandomSource for Scripted {
        fn next_channel(&mut self) -> u8 {
            self.channels.pop_front().expect("script exhausted")
        }

        fn pick_count(&mut self, range: RangeInclusive<usize>) -> usize {
            assert!(range.contains(&self.count));
            self.count
        }

        fn shuffle(&mut self, _colors: &mut [Color]) {}
    }

    #[test]
    fn test_generate_color_uses_three_channels_in_order() {
        let mut rng = Scripted::new(3, &[Color::new(1, 2, 3)]);
        assert_eq!(generate_color(&mut rng), Color::new(1, 2, 3));
        assert!(rng.channels.is_empty());
    }

    #[test]
    fn test_rejects_duplicates_of_target_and_options() {
        let target = Color::new(10, 20, 30);
        let a = Color::new(1, 1, 1);
        let b = Color::new(2, 2, 2);

        // target and `a` each come up again before `b` does
        let mut rng = Scripted::new(3, &[target, a, a, target, target, b]);
        let options = generate_options(&mut rng, target, 3..=6);

        assert_eq!(options.as_slice(), &[target, a, b]);
        assert!(rng.channels.is_empty());
    }

    #[test]
    fn test_tolerates_long_collision_runs() {
        let target = Color::BLACK;
        let mut script = vec![target; 10_000];
        script.push(Color::WHITE);

        let mut rng = Scripted::new(2, &script);
        let options = generate_options(&mut rng, target, 1..=2);

        assert_eq!(options.as_slice(), &[target, Color::WHITE]);
    }

    #[test]
    fn test_single_option_is_target() {
        let mut rng = Scripted::new(1, &[]);
        let options = generate_options(&mut rng, Color::RED, 1..=1);
        assert_eq!(options.as_slice(), &[Color::RED]);
    }

    #[test]
    fn test_clamp_counts() {
        assert_eq!(clamp_counts(3..=6), 3..=6);
        assert_eq!(clamp_counts(0..=0), 1..=1);
        assert_eq!(clamp_counts(5..=3), 5..=5);
        assert_eq!(clamp_counts(2..=usize::MAX), 2..=MAX_OPTION_COUNT);
        assert_eq!(clamp_counts(40..=50), MAX_OPTION_COUNT..=MAX_OPTION_COUNT);
    }

    #[test]
    fn test_out_of_range_counts_do_not_panic() {
        let mut rng = GameRng::new(1);

        let inverted = generate_options(&mut rng, Color::RED, 5..=3);
        assert_eq!(inverted.len(), 5);

        let empty = generate_options(&mut rng, Color::RED, 0..=0);
        assert_eq!(empty.as_slice(), &[Color::RED]);

        let huge = generate_options(&mut rng, Color::RED, usize::MAX..=usize::MAX);
        assert_eq!(huge.len(), MAX_OPTION_COUNT);
    }

    #[test]
    fn test_seeded_options_hold_invariants() {
        let mut rng = GameRng::new(42);

        for _ in 0..500 {
            let target = generate_color(&mut rng);
            let options = generate_options(&mut rng, target, 3..=6);

            assert!((3..=6).contains(&options.len()));
            assert_eq!(options.iter().filter(|&&c| c == target).count(), 1);

            let distinct: FxHashSet<_> = options.iter().copied().collect();
            assert_eq!(distinct.len(), options.len());
        }
    }

    #[test]
    fn test_target_position_varies() {
        let mut rng = GameRng::new(11);
        let mut positions = FxHashSet::default();

        for _ in 0..200 {
            let target = generate_color(&mut rng);
            let options = generate_options(&mut rng, target, 6..=6);
            let pos = options.iter().position(|&c| c == target).unwrap();
            positions.insert(pos);
        }

        assert_eq!(positions.len(), 6);
    }
}

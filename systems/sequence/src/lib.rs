#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Seeded deterministic draw sequence backing all synthesis randomness.
//!
//! A [`DrawSequence`] is initialized from an arbitrary string seed and then
//! produces a reproducible stream of floats in `[0, 1)`. The same seed always
//! yields the byte-identical stream: there is no wall-clock, environment, or
//! shared-state dependency, and two sequences built from one seed advance
//! independently while producing identical values. Draw order is part of
//! every caller's contract: skipping or reordering a single draw changes
//! every subsequent value.

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;
const STATE_SPAN: f64 = 4_294_967_296.0;

/// Deterministic pseudo-random stream derived from a string seed.
///
/// Seeding hashes the seed's UTF-8 bytes with FNV-1a into a 32-bit state;
/// each draw advances that state through a fixed xorshift-style schedule.
/// All arithmetic wraps modulo `2^32`.
#[derive(Clone, Debug)]
pub struct DrawSequence {
    state: u32,
}

impl DrawSequence {
    /// Creates a sequence from the provided seed.
    ///
    /// Every string is a valid seed, including the empty string.
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        let mut state = FNV_OFFSET_BASIS;
        for byte in seed.bytes() {
            state = (state ^ u32::from(byte)).wrapping_mul(FNV_PRIME);
        }
        Self { state }
    }

    /// Advances the stream and returns the next float in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.state = self.state.wrapping_add(self.state << 13);
        self.state ^= self.state >> 7;
        self.state = self.state.wrapping_add(self.state << 3);
        self.state ^= self.state >> 17;
        f64::from(self.state) / STATE_SPAN
    }

    /// Draws an integer from `[min, max]`, inclusive on both ends.
    ///
    /// # Panics
    ///
    /// Panics when `max < min`; silently swapping or defaulting the bounds
    /// would corrupt the determinism contract invisibly.
    pub fn int_in_range(&mut self, min: i32, max: i32) -> i32 {
        assert!(
            max >= min,
            "int_in_range requires max >= min, got [{min}, {max}]"
        );
        let span = i64::from(max) - i64::from(min) + 1;
        let offset = (self.next_unit() * span as f64) as i64;
        let value = i64::from(min) + offset;
        value as i32
    }

    /// Draws one element of the provided slice, uniformly.
    ///
    /// # Panics
    ///
    /// Panics on an empty slice; there is no value to substitute without
    /// breaking determinism.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        assert!(!items.is_empty(), "pick requires a non-empty slice");
        let index = (self.next_unit() * items.len() as f64) as usize;
        &items[index]
    }
}

#[cfg(test)]
mod tests {
    use super::{DrawSequence, STATE_SPAN};

    /// Recovers the internal 32-bit state from a drawn unit value. The unit
    /// is an exact multiple of `2^-32`, so the multiplication is lossless.
    fn state_of(draw: f64) -> u32 {
        (draw * STATE_SPAN) as u32
    }

    #[test]
    fn known_seed_produces_recorded_states() {
        let mut sequence = DrawSequence::from_seed("2024-01-15-run-x");
        let states: Vec<u32> = (0..8).map(|_| state_of(sequence.next_unit())).collect();
        assert_eq!(
            states,
            vec![
                4_173_552_934,
                2_309_452_079,
                809_058_281,
                481_804_381,
                3_158_459_812,
                754_483_163,
                551_283_689,
                2_593_375_399,
            ],
        );
    }

    #[test]
    fn empty_seed_is_valid_and_deterministic() {
        let mut sequence = DrawSequence::from_seed("");
        let states: Vec<u32> = (0..4).map(|_| state_of(sequence.next_unit())).collect();
        assert_eq!(
            states,
            vec![3_168_865_246, 3_739_511_779, 3_531_093_800, 2_691_409_731],
        );
    }

    #[test]
    fn identical_seeds_agree_for_ten_thousand_draws() {
        let mut first = DrawSequence::from_seed("determinism-probe");
        let mut second = DrawSequence::from_seed("determinism-probe");
        for index in 0..10_000 {
            let a = first.next_unit();
            let b = second.next_unit();
            assert!(
                a.to_bits() == b.to_bits(),
                "draw {index} diverged: {a} vs {b}"
            );
        }
    }

    #[test]
    fn distinct_seeds_diverge() {
        let mut a = DrawSequence::from_seed("run-a");
        let mut b = DrawSequence::from_seed("run-b");
        assert_ne!(state_of(a.next_unit()), state_of(b.next_unit()));
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut sequence = DrawSequence::from_seed("range-probe");
        for _ in 0..10_000 {
            let draw = sequence.next_unit();
            assert!((0.0..1.0).contains(&draw), "draw {draw} escaped [0, 1)");
        }
    }

    #[test]
    fn int_in_range_is_inclusive_on_both_ends() {
        let mut sequence = DrawSequence::from_seed("bounds-probe");
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..10_000 {
            let value = sequence.int_in_range(3, 7);
            assert!((3..=7).contains(&value), "value {value} escaped [3, 7]");
            seen_min |= value == 3;
            seen_max |= value == 7;
        }
        assert!(seen_min, "lower bound never drawn");
        assert!(seen_max, "upper bound never drawn");
    }

    #[test]
    fn int_in_range_handles_negative_bounds() {
        let mut sequence = DrawSequence::from_seed("negative-probe");
        for _ in 0..10_000 {
            let value = sequence.int_in_range(-15, 15);
            assert!((-15..=15).contains(&value), "value {value} escaped range");
        }
    }

    #[test]
    fn int_in_range_with_equal_bounds_is_constant() {
        let mut sequence = DrawSequence::from_seed("constant-probe");
        for _ in 0..32 {
            assert_eq!(sequence.int_in_range(42, 42), 42);
        }
    }

    #[test]
    fn pick_covers_every_element() {
        let items = ["alpha", "beta", "gamma", "delta"];
        let mut sequence = DrawSequence::from_seed("coverage-probe");
        let mut seen = [false; 4];
        for _ in 0..10_000 {
            let picked = sequence.pick(&items);
            let index = items
                .iter()
                .position(|item| item == picked)
                .expect("picked element must come from the slice");
            seen[index] = true;
        }
        assert!(seen.iter().all(|seen| *seen), "some element never picked");
    }

    #[test]
    fn independent_instances_do_not_share_state() {
        let mut a = DrawSequence::from_seed("isolation-probe");
        let mut b = DrawSequence::from_seed("isolation-probe");
        let _ = a.next_unit();
        let _ = a.next_unit();
        let from_a = a.next_unit();
        let _ = b.next_unit();
        let _ = b.next_unit();
        let from_b = b.next_unit();
        assert_eq!(from_a.to_bits(), from_b.to_bits());
    }

    #[test]
    #[should_panic(expected = "int_in_range requires max >= min")]
    fn inverted_bounds_panic() {
        let mut sequence = DrawSequence::from_seed("panic-probe");
        let _ = sequence.int_in_range(5, 4);
    }

    #[test]
    #[should_panic(expected = "pick requires a non-empty slice")]
    fn empty_pick_slice_panics() {
        let mut sequence = DrawSequence::from_seed("panic-probe");
        let _: &str = *sequence.pick::<&str>(&[]);
    }
}

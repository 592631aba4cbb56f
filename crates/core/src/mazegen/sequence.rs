//! Deterministic pseudo-random sequence used by maze carving.

/// Linear congruential generator with a power-of-two modulus.
///
/// The generator is an explicit value: every carving run owns its own
/// instance, so two runs seeded identically are guaranteed to draw
/// identical sequences. Never reseed one mid-carve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LcgSequence {
    seed: u64,
}

const MULTIPLIER: u64 = 1_664_525;
const INCREMENT: u64 = 1_013_904_223;
const MODULUS_MASK: u64 = (1 << 32) - 1;

impl LcgSequence {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Advances the internal state and returns the new 32-bit value.
    pub fn next(&mut self) -> u64 {
        self.seed = MULTIPLIER.wrapping_mul(self.seed).wrapping_add(INCREMENT) & MODULUS_MASK;
        self.seed
    }

    /// Draws an index strictly inside `[0, len)`.
    pub fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot draw an index from an empty candidate set");
        (self.next() % len as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_seeds_draw_identical_sequences() {
        let mut left = LcgSequence::new(1_235_312_312);
        let mut right = LcgSequence::new(1_235_312_312);
        for _ in 0..64 {
            assert_eq!(left.next(), right.next());
        }
    }

    #[test]
    fn values_stay_below_the_modulus() {
        let mut sequence = LcgSequence::new(u64::MAX);
        for _ in 0..256 {
            assert!(sequence.next() <= MODULUS_MASK);
        }
    }

    #[test]
    fn picked_indices_stay_strictly_inside_the_range() {
        let mut sequence = LcgSequence::new(42);
        for len in 1..=9 {
            for _ in 0..64 {
                assert!(sequence.pick_index(len) < len);
            }
        }
    }

    #[test]
    fn first_value_matches_the_recurrence() {
        let mut sequence = LcgSequence::new(7);
        let expected = (MULTIPLIER * 7 + INCREMENT) & MODULUS_MASK;
        assert_eq!(sequence.next(), expected);
    }
}

//! RNG module - deterministic dot-kind generation
//!
//! A small LCG is all the board needs: dot kinds are drawn uniformly from
//! the configured palette at creation time, and seeding the generator makes
//! whole board populations reproducible for tests and replays.

/// 32-bit linear congruential generator.
///
/// Multiplier and increment are the Numerical Recipes pair, so the state
/// walks the full `u32` cycle. The stream is part of the board's observable
/// behavior: replays depend on it never changing.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed the generator; a zero seed is treated as 1.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Advance the state and return it.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Next value in `[0, max)`; `max` must be nonzero.
    ///
    /// Reduction multiplies into the high bits. An LCG's low bits have
    /// short periods (bit 0 alternates every step), so a modulo here would
    /// deal degenerate streams for small ranges.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "next_range needs a nonzero range");
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_replays_the_stream() {
        let mut a = SimpleRng::new(977);
        let mut b = SimpleRng::new(977);
        for _ in 0..64 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SimpleRng::new(12345);
        let mut b = SimpleRng::new(54321);
        let first: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let second: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(5) < 5);
        }
        for _ in 0..100 {
            assert_eq!(rng.next_range(1), 0);
        }
    }

    #[test]
    fn test_small_ranges_draw_on_the_high_bits() {
        // Bit 0 of the raw stream flips on every step. Range reduction must
        // not inherit that alternation, or two-kind boards would tile as
        // perfect checkerboards.
        for seed in [1, 7, 42, 99, 12345, 0xDEAD_BEEF] {
            let mut rng = SimpleRng::new(seed);
            let draws: Vec<u32> = (0..32).map(|_| rng.next_range(2)).collect();
            assert!(
                draws.windows(2).any(|pair| pair[0] == pair[1]),
                "seed {} dealt a strict alternation: {:?}",
                seed,
                draws
            );
            assert!(draws.contains(&0) && draws.contains(&1));
        }
    }
}

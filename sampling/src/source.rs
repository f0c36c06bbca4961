use std::ops::Range;

use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

/// Deterministic stream of indices, seeded so that test and bench inputs
/// are reproducible across runs.
pub struct Source {
    source: ChaCha8Rng,
}

impl Source {
    pub fn new(seed: [u8; 32]) -> Source {
        Source {
            source: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn new_seed(&mut self) -> [u8; 32] {
        let mut seed: [u8; 32] = [0u8; 32];
        self.source.fill_bytes(&mut seed);
        seed
    }

    pub fn branch(&mut self) -> Self {
        Source::new(self.new_seed())
    }

    /// Uniform value in [0, max) by rejection on the low bits selected by `mask`.
    #[inline(always)]
    pub fn next_u64n(&mut self, max: u64, mask: u64) -> u64 {
        let mut x: u64 = self.next_u64() & mask;
        while x >= max {
            x = self.next_u64() & mask;
        }
        x
    }

    /// Uniform value in `range`.
    pub fn next_in(&mut self, range: Range<u64>) -> u64 {
        assert!(range.start < range.end, "empty range {:?}", range);
        let width: u64 = range.end - range.start;
        let mask: u64 = u64::MAX >> (width - 1).leading_zeros().min(63);
        range.start + self.next_u64n(width, mask)
    }

    /// `count` sorted, possibly repeated, indices drawn uniformly from `range`.
    pub fn sample_indices(&mut self, range: Range<u64>, count: usize) -> Vec<u64> {
        let mut out: Vec<u64> = (0..count).map(|_| self.next_in(range.clone())).collect();
        out.sort_unstable();
        out
    }
}

impl RngCore for Source {
    #[inline(always)]
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    #[inline(always)]
    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    #[inline(always)]
    fn fill_bytes(&mut self, bytes: &mut [u8]) {
        self.source.fill_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::Source;

    #[test]
    fn next_in_stays_in_range() {
        let mut source: Source = Source::new([7u8; 32]);
        (0..1000).for_each(|_| {
            let x: u64 = source.next_in(2000..10_000);
            assert!((2000..10_000).contains(&x), "x={}", x);
        });
        assert_eq!(source.next_in(5..6), 5);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a: Source = Source::new([1u8; 32]);
        let mut b: Source = Source::new([1u8; 32]);
        assert_eq!(a.sample_indices(0..1 << 40, 64), b.sample_indices(0..1 << 40, 64));
    }
}

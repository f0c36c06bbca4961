use std::num::Wrapping;

use itertools::izip;

use crate::lookup::PARTITIONS_LOOKUP;
use crate::thresholds::NUMBER_OF_SMALL_PARTITIONS;

/// Returns p(k) mod 2^64 for k in 0..len.
pub(crate) fn partitions_mod_word(len: usize) -> Vec<u64> {
    let mut v: Vec<u64> = vec![0u64; len];
    partitions_mod_word_into(&mut v);
    v
}

/// Fills `v[k]` with p(k) mod 2^64 using Euler's pentagonal number
/// recurrence. Entries below [`NUMBER_OF_SMALL_PARTITIONS`] are copied from
/// the table.
pub(crate) fn partitions_mod_word_into(v: &mut [u64]) {
    let seeded: usize = v.len().min(NUMBER_OF_SMALL_PARTITIONS);
    izip!(v[..seeded].iter_mut(), PARTITIONS_LOOKUP.iter()).for_each(|(x, p)| *x = *p as u64);
    (NUMBER_OF_SMALL_PARTITIONS..v.len()).for_each(|n| {
        v[n] = pentagonal_step(&v[..n]);
    });
}

/// p(n) mod 2^64 from `prev[k]` = p(k) mod 2^64, k < n = prev.len().
///
/// p(n) = sum_{k >= 1} (-1)^(k+1) [p(n - k(3k-1)/2) + p(n - k(3k+1)/2)],
/// with terms of negative index dropped. Arithmetic wraps modulo 2^64.
#[inline]
fn pentagonal_step(prev: &[u64]) -> u64 {
    let n: usize = prev.len();
    let mut acc: Wrapping<u64> = Wrapping(0);
    let mut k: usize = 1;
    let mut g: usize = 1; // k(3k-1)/2
    while g <= n {
        let mut pair: Wrapping<u64> = Wrapping(prev[n - g]);
        if g + k <= n {
            pair += Wrapping(prev[n - g - k]);
        }
        if k & 1 == 1 {
            acc += pair;
        } else {
            acc -= pair;
        }
        g += 3 * k + 1;
        k += 1;
    }
    acc.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_short_vectors_from_table() {
        assert!(partitions_mod_word(0).is_empty());
        assert_eq!(partitions_mod_word(6), vec![1, 1, 2, 3, 5, 7]);
        let v: Vec<u64> = partitions_mod_word(NUMBER_OF_SMALL_PARTITIONS);
        assert_eq!(v[NUMBER_OF_SMALL_PARTITIONS - 1], 3913864295);
    }

    #[test]
    fn step_agrees_with_table() {
        // The recurrence must reproduce the table it is seeded from.
        let v: Vec<u64> = partitions_mod_word(NUMBER_OF_SMALL_PARTITIONS);
        (1..NUMBER_OF_SMALL_PARTITIONS).for_each(|n| {
            assert_eq!(pentagonal_step(&v[..n]), v[n], "n={}", n);
        });
    }

    #[test]
    fn known_values() {
        let v: Vec<u64> = partitions_mod_word(417);
        assert_eq!(v[200], 3972999029388);
        // p(416) is the last value below 2^64.
        assert_eq!(v[416], 17_873_792_969_689_876_004);
    }
}

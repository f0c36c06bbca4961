//! Regime boundaries of the evaluation engine.
//!
//! These are measured crossovers tied to the guard-bit heuristic of
//! [`hybrid_precision`]; they are not derived analytically and must move
//! together with it.

/// Size of the precomputed table of p(n).
pub const NUMBER_OF_SMALL_PARTITIONS: usize = 128;

/// p(n) < 2^64 for every n below this, so the recurrence residue is p(n).
pub const WORD_RESULT_LIMIT: u64 = 417;

/// Upper end of the floor+residue window when the caller accepts the
/// f64-accelerated series (the full series wins beyond it).
pub const HYBRID_DOUBLES_LIMIT: u64 = 500;

/// Upper end of the floor+residue window otherwise.
pub const HYBRID_LIMIT: u64 = 1200;

/// floor(p(n) / 2^64) == floor(T(n) / 2^64), T the leading Rademacher term,
/// holds for every n up to and including this value and fails at n = 1499.
pub const HYBRID_VALIDITY_LIMIT: u64 = 1498;

/// Below this the argument is handled as a machine word.
pub const FAST_PATH_LIMIT: u64 = 2000;

/// The floor+residue method reads the residue from a 64-bit word.
pub const WORD_IS_64: bool = usize::BITS == 64;

/// Target for the Rademacher remainder bound when choosing the term count.
pub const TAIL_TARGET: f64 = 0.25;

/// With `use_doubles`, terms whose magnitude is below 2^this are summed in f64.
pub const DOUBLES_LOG2_CUTOFF: f64 = 10.0;

/// Radius of an f64 term, as a power of two relative to its magnitude bound.
pub const DOUBLES_LOG2_RELATIVE_ERROR: i32 = -36;

/// Working precision of the leading term in the floor+residue method:
/// 4*sqrt(n) - 50 bits, truncated toward zero.
///
/// The expression is positive from n = 157; the truncated value is a usable
/// precision (at least one bit) from n = 163 on. The engine only asks for it
/// from [`WORD_RESULT_LIMIT`] on, where it is at least 31.
#[inline]
pub fn hybrid_precision(n: u64) -> i64 {
    (4.0 * (n as f64).sqrt() - 50.0) as i64
}

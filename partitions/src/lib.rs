//! Exact values of the partition function p(n) for arbitrary n.
//!
//! Small arguments come from a table, arguments up to a few thousand from
//! the pentagonal recurrence modulo 2^64 combined with the leading term of
//! the Rademacher series, and everything else from the full series summed
//! in ball arithmetic and rounded to the unique integer it encloses.

pub mod dispatch;
pub mod error;
pub mod hrr;
pub(crate) mod lookup;
pub(crate) mod pentagonal;
#[cfg(test)]
mod test;
pub mod thresholds;

pub use dispatch::Partitions;
pub use error::PartitionError;
pub use hrr::{Rademacher, SeriesEvaluator};

use rug::Integer;

/// p(n), exact. Negative n yield 0.
///
/// `use_doubles` lets the series evaluate its small terms in f64; it trades
/// radius for speed and never affects the returned value.
///
/// ```
/// use partitions::compute_partitions;
/// use rug::Integer;
///
/// let p = compute_partitions(&Integer::from(100), false).unwrap();
/// assert_eq!(p, 190569292);
/// ```
pub fn compute_partitions(n: &Integer, use_doubles: bool) -> Result<Integer, PartitionError> {
    Partitions::new().compute(n, use_doubles)
}

/// p(n) for a machine-word argument, without f64 acceleration.
pub fn partitions_u64(n: u64) -> Result<Integer, PartitionError> {
    Partitions::new().compute_u64(n, false)
}

//! Hardy-Ramanujan-Rademacher series for p(n).
//!
//! With m = 24n - 1 and z_k = pi * sqrt(m) / (6k),
//!
//! p(n) = (4/m) * sum_{k >= 1} S_k(n) * (cosh(z_k) - sinh(z_k) / z_k)
//!
//! where S_k(n) is the Selberg form of the Kloosterman sum A_k(n) / sqrt(k/3)
//! (see [`selberg`]).

pub mod bound;
pub(crate) mod selberg;
pub(crate) mod series;

use backend::Ball;
use rug::Integer;

pub use bound::{needed_terms, tail_bound};

/// Numerical side of the asymptotic path. The dispatcher only ever sees
/// enclosures; rigour of the returned balls is the implementor's contract.
pub trait SeriesEvaluator {
    /// Encloses the sum of the first `terms` terms of the series. The
    /// omitted tail is not accounted for. With `use_doubles`, small terms
    /// may be evaluated in f64 with a correspondingly wider radius.
    fn sum_series(&self, n: &Integer, terms: u64, use_doubles: bool) -> Ball;

    /// Encloses the k = 1 term, evaluated at working precision `prec`.
    fn leading_term(&self, n: &Integer, prec: u32) -> Ball;
}

/// The production evaluator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rademacher;

impl SeriesEvaluator for Rademacher {
    fn sum_series(&self, n: &Integer, terms: u64, use_doubles: bool) -> Ball {
        series::hrr_sum(n, terms, use_doubles)
    }

    fn leading_term(&self, n: &Integer, prec: u32) -> Ball {
        series::hrr_leading(n, prec)
    }
}

use std::cmp::Ordering;

use backend::Ball;
use rug::Integer;
use tracing::{debug, error, warn};

use crate::error::PartitionError;
use crate::hrr::{Rademacher, SeriesEvaluator, needed_terms, tail_bound};
use crate::lookup::lookup;
use crate::pentagonal::partitions_mod_word;
use crate::thresholds::{
    FAST_PATH_LIMIT, HYBRID_DOUBLES_LIMIT, HYBRID_LIMIT, HYBRID_VALIDITY_LIMIT, NUMBER_OF_SMALL_PARTITIONS,
    WORD_IS_64, WORD_RESULT_LIMIT, hybrid_precision,
};

/// Decimal digits of a failing enclosure carried by [`PartitionError`].
const DIAGNOSTIC_DIGITS: usize = 50;

/// Strategy dispatcher for p(n).
///
/// Stateless apart from the series evaluator; a single instance may serve
/// any number of calls.
#[derive(Clone, Debug, Default)]
pub struct Partitions<E = Rademacher> {
    evaluator: E,
}

impl Partitions<Rademacher> {
    pub fn new() -> Self {
        Self { evaluator: Rademacher }
    }
}

impl<E: SeriesEvaluator> Partitions<E> {
    pub fn with_evaluator(evaluator: E) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// p(n). Negative n yield 0.
    pub fn compute(&self, n: &Integer, use_doubles: bool) -> Result<Integer, PartitionError> {
        if *n >= FAST_PATH_LIMIT {
            return self.hrr(n, use_doubles);
        }
        match n.cmp0() {
            Ordering::Less => Ok(Integer::new()),
            // 0 <= n < FAST_PATH_LIMIT
            _ => self.compute_u64(n.to_u64_wrapping(), use_doubles),
        }
    }

    /// p(n) for a machine-word argument.
    pub fn compute_u64(&self, n: u64, use_doubles: bool) -> Result<Integer, PartitionError> {
        if n < NUMBER_OF_SMALL_PARTITIONS as u64 {
            return Ok(Integer::from(lookup(n as usize)));
        }
        if WORD_IS_64 && (n < HYBRID_DOUBLES_LIMIT || (!use_doubles && n < HYBRID_LIMIT)) {
            return self.hybrid(n, use_doubles);
        }
        self.hrr(&Integer::from(n), use_doubles)
    }

    /// p(n) = floor(p(n) / 2^64) * 2^64 + (p(n) mod 2^64), the high part
    /// from the leading Rademacher term and the low part from the
    /// pentagonal recurrence.
    fn hybrid(&self, n: u64, use_doubles: bool) -> Result<Integer, PartitionError> {
        #[cfg(debug_assertions)]
        {
            assert!(
                (NUMBER_OF_SMALL_PARTITIONS as u64..=HYBRID_VALIDITY_LIMIT).contains(&n),
                "invalid argument n={}: outside the floor+residue window",
                n
            );
        }

        if n < WORD_RESULT_LIMIT {
            debug!(n, "p(n) from the pentagonal recurrence");
            return Ok(Integer::from(low_word(n)));
        }

        let Ok(prec @ 1..) = u32::try_from(hybrid_precision(n)) else {
            return self.hrr(&Integer::from(n), use_doubles);
        };
        debug!(n, prec, "p(n) from the leading term and the pentagonal recurrence");

        let mut x: Ball = self.evaluator.leading_term(&Integer::from(n), prec);
        x.mul_2exp(-64);
        match x.floor(prec).unique_integer() {
            Some(mut res) => {
                res <<= 64u32;
                res += low_word(n);
                Ok(res)
            }
            None => {
                warn!(n, prec, "leading term not precise enough, falling back to the full series");
                self.hrr(&Integer::from(n), use_doubles)
            }
        }
    }

    /// p(n) from the Rademacher series with enough terms for the remainder
    /// bound to fall below 1/4. Requires n >= 2.
    pub fn hrr(&self, n: &Integer, use_doubles: bool) -> Result<Integer, PartitionError> {
        let terms: u64 = needed_terms(n.to_f64());
        debug!(%n, terms, use_doubles, "p(n) from the Rademacher series");

        let mut x: Ball = self.evaluator.sum_series(n, terms, use_doubles);
        x.add_error(&tail_bound(n, terms));

        x.unique_integer().ok_or_else(|| {
            let enclosure: String = x.to_decimal_string(DIAGNOSTIC_DIGITS);
            error!(%n, terms, %enclosure, "series enclosure does not isolate an integer");
            PartitionError::NotUnique {
                n: n.clone(),
                enclosure,
            }
        })
    }
}

/// p(n) mod 2^64.
fn low_word(n: u64) -> u64 {
    let residues: Vec<u64> = partitions_mod_word(n as usize + 1);
    residues[n as usize]
}

use std::f64::consts::{LN_2, PI};

use backend::Ball;
use rug::Integer;

use crate::hrr::selberg::{selberg_indices, selberg_sum, selberg_sum_f64};
use crate::thresholds::{DOUBLES_LOG2_CUTOFF, DOUBLES_LOG2_RELATIVE_ERROR};

/// Floor on every working precision, in bits.
const MIN_PREC: u32 = 64;

/// Guard bits on top of the magnitude of a term, before the contribution
/// of the term count.
const GUARD_BITS: u32 = 40;

/// m = 24n - 1.
pub(crate) fn hrr_modulus(n: &Integer) -> Integer {
    Integer::from(n * 24u32) - 1u32
}

/// log2 of (4/m) * 2k * e^(z_k), an upper bound on |term k|.
pub(crate) fn term_log2_bound(m: f64, k: u64) -> f64 {
    let z: f64 = PI * m.sqrt() / (6 * k) as f64;
    (8.0 * k as f64 / m).log2() + z / LN_2
}

fn term_precision(log2_bound: f64, guard: u32) -> u32 {
    (log2_bound.max(0.0).ceil() as u32).saturating_add(guard).max(MIN_PREC)
}

/// pi * sqrt(m).
fn pi_sqrt_m(m: &Integer, prec: u32) -> Option<Ball> {
    let sqrt_m: Ball = Ball::from_integer(prec, m).sqrt(prec)?;
    Some(Ball::pi(prec).mul(&sqrt_m, prec))
}

/// cosh(z) - sinh(z)/z, i.e. sqrt(pi z / 2) * I_{3/2}(z).
fn bessel_shape(z: &Ball, prec: u32) -> Option<Ball> {
    let (cosh, sinh) = z.cosh_sinh(prec)?;
    Some(cosh.sub(&sinh.div(z, prec)?, prec))
}

fn term_ball(m: &Ball, pi_sqrt_m: &Ball, r: u64, k: u64, prec: u32) -> Option<Ball> {
    let s: Ball = selberg_sum(r, k, &Ball::pi(prec), prec)?;
    let z: Ball = pi_sqrt_m.div_u64(6 * k, prec)?;
    bessel_shape(&z, prec)?.mul(&s, prec).mul_u64(4, prec).div(m, prec)
}

/// Term k in f64. The radius is 2^DOUBLES_LOG2_RELATIVE_ERROR times the
/// magnitude bound, far above the accumulated f64 rounding of the at most
/// 2k cosines and the hyperbolic functions.
fn term_f64(m: f64, r: u64, k: u64, log2_bound: f64) -> Ball {
    let z: f64 = PI * m.sqrt() / (6 * k) as f64;
    let s: f64 = selberg_sum_f64(r, k);
    let value: f64 = 4.0 / m * s * (z.cosh() - z.sinh() / z);
    let err: f64 = (log2_bound + DOUBLES_LOG2_RELATIVE_ERROR as f64).exp2();
    Ball::from_f64_with_error(value, err)
}

pub(crate) fn hrr_sum(n: &Integer, terms: u64, use_doubles: bool) -> Ball {
    let m: Integer = hrr_modulus(n);
    let m_f64: f64 = m.to_f64();
    let guard: u32 = GUARD_BITS + 2 * (u64::BITS - terms.leading_zeros());
    let prec_top: u32 = term_precision(term_log2_bound(m_f64, 1), guard);

    let (m_ball, scale): (Ball, Ball) = match pi_sqrt_m(&m, prec_top) {
        Some(scale) => (Ball::from_integer(prec_top, &m), scale),
        None => return Ball::indeterminate(prec_top),
    };

    let mut sum: Ball = Ball::zero(prec_top);
    for k in 1..=terms {
        let r: u64 = Integer::from(n % k).to_u64_wrapping();
        if selberg_indices(r, k).next().is_none() {
            continue;
        }
        let log2_bound: f64 = term_log2_bound(m_f64, k);
        let term: Ball = if use_doubles && log2_bound < DOUBLES_LOG2_CUTOFF {
            term_f64(m_f64, r, k, log2_bound)
        } else {
            match term_ball(&m_ball, &scale, r, k, term_precision(log2_bound, guard)) {
                Some(term) => term,
                None => return Ball::indeterminate(prec_top),
            }
        };
        sum = sum.add(&term, prec_top);
    }
    sum
}

pub(crate) fn hrr_leading(n: &Integer, prec: u32) -> Ball {
    leading(n, prec).unwrap_or_else(|| Ball::indeterminate(prec))
}

/// (4 * sqrt(3) / m) * (cosh(z_1) - sinh(z_1) / z_1), since S_1 = sqrt(3).
fn leading(n: &Integer, prec: u32) -> Option<Ball> {
    let m: Integer = hrr_modulus(n);
    let z: Ball = pi_sqrt_m(&m, prec)?.div_u64(6, prec)?;
    let sqrt3: Ball = Ball::from_u64(3).sqrt(prec)?;
    bessel_shape(&z, prec)?
        .mul(&sqrt3, prec)
        .mul_u64(4, prec)
        .div(&Ball::from_integer(prec, &m), prec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rug::Float;

    #[test]
    fn modulus() {
        assert_eq!(hrr_modulus(&Integer::from(1)), 23);
        assert_eq!(hrr_modulus(&Integer::from(2000)), 47999);
    }

    #[test]
    fn magnitude_bound_dominates_terms() {
        let n: Integer = Integer::from(3000);
        let m: f64 = hrr_modulus(&n).to_f64();
        (1..60u64).for_each(|k| {
            let t: Ball = hrr_sum_single(&n, k);
            let bound: Float = Float::with_val(64, term_log2_bound(m, k)).exp2();
            assert!(t.upper().abs() <= bound && t.lower().abs() <= bound, "k={} term={} bound={}", k, t, bound);
        });
    }

    fn hrr_sum_single(n: &Integer, k: u64) -> Ball {
        let m: Integer = hrr_modulus(n);
        let prec: u32 = 256;
        let r: u64 = Integer::from(n % k).to_u64_wrapping();
        term_ball(&Ball::from_integer(prec, &m), &pi_sqrt_m(&m, prec).unwrap(), r, k, prec).unwrap()
    }

    #[test]
    fn f64_terms_enclose_ball_terms() {
        let n: Integer = Integer::from(5000);
        let m: f64 = hrr_modulus(&n).to_f64();
        (20..80u64).for_each(|k| {
            let r: u64 = Integer::from(&n % k).to_u64_wrapping();
            let exact: Ball = hrr_sum_single(&n, k);
            let approx: Ball = term_f64(m, r, k, term_log2_bound(m, k));
            assert!(
                approx.lower() <= exact.upper() && exact.lower() <= approx.upper(),
                "k={} exact={} approx={}",
                k,
                exact,
                approx
            );
        });
    }

    #[test]
    fn leading_term_of_small_arguments() {
        // T(1) = 1.13355844..., T(100) = 190568944.78333841...
        let t1: Ball = hrr_leading(&Integer::from(1), 64);
        assert!((t1.mid().to_f64() - 1.1335584472858807).abs() < 1e-12, "{}", t1);
        let t100: Ball = hrr_leading(&Integer::from(100), 64);
        assert!((t100.mid().to_f64() - 190568944.78333841).abs() < 1e-6, "{}", t100);
        assert!(!hrr_leading(&Integer::from(0), 64).is_finite());
        assert!(!hrr_leading(&Integer::from(-3), 64).is_finite());
    }
}

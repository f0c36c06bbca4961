//! Rademacher's bound on the series remainder after N terms:
//!
//! R(n, N) < 44 pi^2 / (225 sqrt(3)) * N^(-1/2)
//!         + pi sqrt(2) / 75 * (N / (n - 1))^(1/2) * sinh(pi / N * sqrt(2n / 3))

use std::f64::consts::PI;

use rug::float::{Constant, Round, Special};
use rug::ops::{AddAssignRound, DivAssignRound, MulAssignRound};
use rug::{Float, Integer};

use crate::thresholds::TAIL_TARGET;

const BOUND_PREC: u32 = 64;

fn small(x: u32) -> Float {
    Float::with_val(BOUND_PREC, x)
}

/// Upper bound on the magnitude of every term past the first `terms`.
///
/// Each operation is rounded in the direction that keeps the result an
/// upper bound. The bound is undefined for n < 2 and `terms` = 0, where
/// +inf is returned.
pub fn tail_bound(n: &Integer, terms: u64) -> Float {
    if *n < 2 || terms == 0 {
        return Float::with_val(BOUND_PREC, Special::Infinity);
    }
    let (up, down): (Round, Round) = (Round::Up, Round::Down);

    let pi_up: Float = Float::with_val_round(BOUND_PREC, Constant::Pi, up).0;
    let big_n: Float = Float::with_val(BOUND_PREC, terms);

    // 44 pi^2 / (225 sqrt(3) sqrt(N))
    let mut first: Float = Float::with_val_round(BOUND_PREC, pi_up.square_ref(), up).0;
    first.mul_assign_round(&small(44), up);
    let mut den: Float = small(3);
    den.sqrt_round(down);
    den.mul_assign_round(&small(225), down);
    let mut sqrt_n: Float = big_n.clone();
    sqrt_n.sqrt_round(down);
    den.mul_assign_round(&sqrt_n, down);
    first.div_assign_round(&den, up);

    // pi sqrt(2) / 75
    let mut second: Float = small(2);
    second.sqrt_round(up);
    second.mul_assign_round(&pi_up, up);
    second.div_assign_round(&small(75), up);

    // sqrt(N / (n - 1))
    let n_minus_one: Float = Float::with_val_round(BOUND_PREC, &Integer::from(n - 1u32), down).0;
    let mut ratio: Float = big_n.clone();
    ratio.div_assign_round(&n_minus_one, up);
    ratio.sqrt_round(up);
    second.mul_assign_round(&ratio, up);

    // sinh(pi sqrt(2n/3) / N), sinh increasing.
    let mut arg: Float = Float::with_val_round(BOUND_PREC, n, up).0;
    arg.mul_assign_round(&small(2), up);
    arg.div_assign_round(&small(3), up);
    arg.sqrt_round(up);
    arg.mul_assign_round(&pi_up, up);
    arg.div_assign_round(&big_n, up);
    arg.sinh_round(up);
    second.mul_assign_round(&arg, up);

    first.add_assign_round(&second, up);
    first
}

/// f64 evaluation of the same bound, +inf where sinh overflows.
fn tail_bound_estimate(n: f64, terms: f64) -> f64 {
    let first: f64 = 44.0 * PI * PI / (225.0 * 3f64.sqrt()) / terms.sqrt();
    let arg: f64 = PI / terms * (2.0 * n / 3.0).sqrt();
    let second: f64 = PI * 2f64.sqrt() / 75.0 * (terms / (n - 1.0)).sqrt() * arg.sinh();
    first + second
}

/// Below this the raw count dips slightly (the 1/sqrt(n - 1) factor) before
/// recovering, so it is held at its value for n = 2, the maximum on [2, 240).
const FLAT_BELOW: f64 = 240.0;

/// Number of terms after which the remainder bound drops below
/// [`TAIL_TARGET`]. Non-decreasing in n. Returns 1 for n < 2, where the
/// bound does not apply.
pub fn needed_terms(n: f64) -> u64 {
    if !(n >= 2.0) {
        return 1;
    }
    let n: f64 = if n < FLAT_BELOW { 2.0 } else { n };
    // sinh overflows f64 past ~710, no smaller term count can qualify.
    let mut terms: u64 = ((PI * (2.0 * n / 3.0).sqrt() / 710.0).floor() as u64).max(1);
    while !(tail_bound_estimate(n, terms as f64) < TAIL_TARGET) {
        terms += 1;
    }
    terms
}

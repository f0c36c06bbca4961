use std::cmp::Ordering;
use std::fmt;

use rug::float::{Constant, Round, Special};
use rug::ops::AddAssignRound;
use rug::{Float, Integer};

/// Precision in bits of every radius. Radii are only ever rounded up.
pub const RAD_PREC: u32 = 32;

/// A real number enclosure: the true value lies in \[mid - rad, mid + rad\].
///
/// Every operation takes the working precision `prec` of the resulting
/// midpoint. Midpoints are correctly rounded by MPFR and, whenever the
/// rounding is inexact, one ulp of the result is folded into the radius.
#[derive(Clone, Debug)]
pub struct Ball {
    pub(crate) mid: Float,
    pub(crate) rad: Float,
}

/// Upper bound on |x| at radius precision.
pub(crate) fn mag_up(x: &Float) -> Float {
    Float::with_val_round(RAD_PREC, x.abs_ref(), Round::Up).0
}

/// Lower bound on |x| at radius precision.
pub(crate) fn mag_down(x: &Float) -> Float {
    Float::with_val_round(RAD_PREC, x.abs_ref(), Round::Down).0
}

fn rad_zero() -> Float {
    Float::new(RAD_PREC)
}

fn rad_inf() -> Float {
    Float::with_val(RAD_PREC, Special::Infinity)
}

/// One ulp of `x` at its own precision.
fn ulp(x: &Float) -> Float {
    if !x.is_finite() {
        return rad_inf();
    }
    match x.get_exp() {
        Some(e) => {
            let mut u: Float = Float::with_val(RAD_PREC, 1);
            u <<= e - x.prec() as i32;
            u
        }
        None => rad_zero(),
    }
}

fn rad_add(a: &Float, b: &Float) -> Float {
    Float::with_val_round(RAD_PREC, a + b, Round::Up).0
}

fn rad_mul(a: &Float, b: &Float) -> Float {
    Float::with_val_round(RAD_PREC, a * b, Round::Up).0
}

impl Ball {
    /// Assembles a ball from a rounded midpoint and the propagated radius.
    fn rounded(mid: (Float, Ordering), mut rad: Float) -> Ball {
        let (mid, ord) = mid;
        if ord != Ordering::Equal {
            rad.add_assign_round(ulp(&mid), Round::Up);
        }
        Ball { mid, rad }
    }

    pub fn zero(prec: u32) -> Ball {
        Ball {
            mid: Float::new(prec),
            rad: rad_zero(),
        }
    }

    /// Ball containing every real number. Any rounding applied to it fails.
    pub fn indeterminate(prec: u32) -> Ball {
        Ball {
            mid: Float::new(prec),
            rad: rad_inf(),
        }
    }

    pub fn from_integer(prec: u32, x: &Integer) -> Ball {
        Ball::rounded(Float::with_val_round(prec, x, Round::Nearest), rad_zero())
    }

    /// Exact ball around a machine word.
    pub fn from_u64(x: u64) -> Ball {
        Ball {
            mid: Float::with_val(u64::BITS, x),
            rad: rad_zero(),
        }
    }

    /// Ball centered at `x` with radius at least `err`. Non-finite inputs
    /// give an indeterminate ball.
    pub fn from_f64_with_error(x: f64, err: f64) -> Ball {
        if !x.is_finite() || !err.is_finite() {
            return Ball::indeterminate(f64::MANTISSA_DIGITS);
        }
        Ball {
            mid: Float::with_val(f64::MANTISSA_DIGITS, x),
            rad: Float::with_val_round(RAD_PREC, err.abs(), Round::Up).0,
        }
    }

    pub fn pi(prec: u32) -> Ball {
        Ball::rounded(Float::with_val_round(prec, Constant::Pi, Round::Nearest), rad_zero())
    }

    pub fn mid(&self) -> &Float {
        &self.mid
    }

    pub fn rad(&self) -> &Float {
        &self.rad
    }

    pub fn is_finite(&self) -> bool {
        self.mid.is_finite() && self.rad.is_finite()
    }

    pub fn is_exact(&self) -> bool {
        self.rad.is_zero()
    }

    /// Widens the radius by the non-negative bound `err`.
    pub fn add_error(&mut self, err: &Float) {
        debug_assert!(!err.is_sign_negative(), "negative error bound {}", err);
        self.rad.add_assign_round(err, Round::Up);
    }

    pub fn add(&self, other: &Ball, prec: u32) -> Ball {
        Ball::rounded(
            Float::with_val_round(prec, &self.mid + &other.mid, Round::Nearest),
            rad_add(&self.rad, &other.rad),
        )
    }

    pub fn sub(&self, other: &Ball, prec: u32) -> Ball {
        Ball::rounded(
            Float::with_val_round(prec, &self.mid - &other.mid, Round::Nearest),
            rad_add(&self.rad, &other.rad),
        )
    }

    pub fn neg(&self) -> Ball {
        Ball {
            mid: -self.mid.clone(),
            rad: self.rad.clone(),
        }
    }

    pub fn mul(&self, other: &Ball, prec: u32) -> Ball {
        // |a|*rb + |b|*ra + ra*rb
        let mut rad: Float = rad_mul(&mag_up(&self.mid), &other.rad);
        rad.add_assign_round(rad_mul(&mag_up(&other.mid), &self.rad), Round::Up);
        rad.add_assign_round(rad_mul(&self.rad, &other.rad), Round::Up);
        Ball::rounded(
            Float::with_val_round(prec, &self.mid * &other.mid, Round::Nearest),
            rad,
        )
    }

    pub fn mul_u64(&self, x: u64, prec: u32) -> Ball {
        self.mul(&Ball::from_u64(x), prec)
    }

    /// Quotient, or `None` when `other` contains zero.
    pub fn div(&self, other: &Ball, prec: u32) -> Option<Ball> {
        let b_down: Float = mag_down(&other.mid);
        let gap: Float = Float::with_val_round(RAD_PREC, &b_down - &other.rad, Round::Down).0;
        if gap <= 0 || !gap.is_finite() {
            return None;
        }
        // (|a|*rb + |b|*ra) / (|b| * (|b| - rb))
        let mut num: Float = rad_mul(&mag_up(&self.mid), &other.rad);
        num.add_assign_round(rad_mul(&mag_up(&other.mid), &self.rad), Round::Up);
        let den: Float = Float::with_val_round(RAD_PREC, &b_down * &gap, Round::Down).0;
        let rad: Float = Float::with_val_round(RAD_PREC, &num / &den, Round::Up).0;
        Some(Ball::rounded(
            Float::with_val_round(prec, &self.mid / &other.mid, Round::Nearest),
            rad,
        ))
    }

    pub fn div_u64(&self, x: u64, prec: u32) -> Option<Ball> {
        self.div(&Ball::from_u64(x), prec)
    }

    /// Multiplies by 2^k in place. Exact.
    pub fn mul_2exp(&mut self, k: i32) {
        self.mid <<= k;
        self.rad <<= k;
    }

    /// Square root, or `None` unless the ball is strictly positive.
    pub fn sqrt(&self, prec: u32) -> Option<Ball> {
        let mut lo: Float = Float::with_val_round(RAD_PREC, &self.mid - &self.rad, Round::Down).0;
        if lo <= 0 || !lo.is_finite() {
            return None;
        }
        // r / (2 * sqrt(m - r))
        lo.sqrt_round(Round::Down);
        lo <<= 1;
        let rad: Float = Float::with_val_round(RAD_PREC, &self.rad / &lo, Round::Up).0;
        Some(Ball::rounded(
            Float::with_val_round(prec, self.mid.sqrt_ref(), Round::Nearest),
            rad,
        ))
    }

    pub fn exp(&self, prec: u32) -> Ball {
        // e^m * (e^r - 1)
        let scale: Float = Float::with_val_round(RAD_PREC, self.mid.exp_ref(), Round::Up).0;
        let growth: Float = Float::with_val_round(RAD_PREC, self.rad.exp_m1_ref(), Round::Up).0;
        Ball::rounded(
            Float::with_val_round(prec, self.mid.exp_ref(), Round::Nearest),
            rad_mul(&scale, &growth),
        )
    }

    /// Returns (cosh x, sinh x), or `None` if e^x cannot be inverted.
    pub fn cosh_sinh(&self, prec: u32) -> Option<(Ball, Ball)> {
        let e: Ball = self.exp(prec);
        let e_inv: Ball = Ball::from_u64(1).div(&e, prec)?;
        let mut cosh: Ball = e.add(&e_inv, prec);
        let mut sinh: Ball = e.sub(&e_inv, prec);
        cosh.mul_2exp(-1);
        sinh.mul_2exp(-1);
        Some((cosh, sinh))
    }

    pub fn cos(&self, prec: u32) -> Ball {
        // cos is 1-Lipschitz.
        Ball::rounded(
            Float::with_val_round(prec, self.mid.cos_ref(), Round::Nearest),
            self.rad.clone(),
        )
    }

    /// Decimal rendering with `digits` significant digits of the midpoint.
    pub fn to_decimal_string(&self, digits: usize) -> String {
        format!(
            "[{} +/- {}]",
            self.mid.to_string_radix(10, Some(digits)),
            self.rad.to_string_radix(10, Some(3))
        )
    }
}

impl fmt::Display for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal_string(20))
    }
}

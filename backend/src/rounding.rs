use rug::float::Round;
use rug::{Float, Integer};

use crate::ball::{Ball, RAD_PREC};

impl Ball {
    /// Lower endpoint, rounded toward -inf.
    pub fn lower(&self) -> Float {
        let prec: u32 = self.mid.prec().max(RAD_PREC);
        Float::with_val_round(prec, &self.mid - &self.rad, Round::Down).0
    }

    /// Upper endpoint, rounded toward +inf.
    pub fn upper(&self) -> Float {
        let prec: u32 = self.mid.prec().max(RAD_PREC);
        Float::with_val_round(prec, &self.mid + &self.rad, Round::Up).0
    }

    /// Returns the only integer contained in the ball, or `None` if the ball
    /// contains no integer or more than one.
    pub fn unique_integer(&self) -> Option<Integer> {
        if !self.is_finite() {
            return None;
        }
        let lo: Integer = self.lower().ceil().to_integer()?;
        let hi: Integer = self.upper().floor().to_integer()?;
        if lo == hi { Some(lo) } else { None }
    }

    /// Rigorous floor. The result is an exact integer when both endpoints
    /// share a floor, and otherwise encloses every candidate floor so that
    /// [`Ball::unique_integer`] on it fails.
    pub fn floor(&self, prec: u32) -> Ball {
        if !self.is_finite() {
            return Ball::indeterminate(prec);
        }
        let (lo, hi): (Integer, Integer) = match (self.lower().floor().to_integer(), self.upper().floor().to_integer()) {
            (Some(lo), Some(hi)) => (lo, hi),
            _ => return Ball::indeterminate(prec),
        };

        if lo == hi {
            let bits: u32 = lo.signed_bits().max(prec).max(2);
            return Ball {
                mid: Float::with_val(bits, &lo),
                rad: Float::new(RAD_PREC),
            };
        }

        // [lo, hi] = (lo + hi)/2 +/- (hi - lo)/2, both halvings exact.
        let sum: Integer = Integer::from(&lo + &hi);
        let width: Integer = Integer::from(&hi - &lo);
        let bits: u32 = sum.signed_bits().max(prec).max(2);
        let mut mid: Float = Float::with_val(bits, &sum);
        mid <<= -1;
        let mut rad: Float = Float::with_val_round(RAD_PREC, &width, Round::Up).0;
        rad <<= -1;
        Ball { mid, rad }
    }
}

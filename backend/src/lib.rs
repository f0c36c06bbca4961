//! Rigorous real enclosures over MPFR floats and the integer extraction
//! routines built on them.

pub mod ball;
pub mod rounding;

pub use ball::{Ball, RAD_PREC};

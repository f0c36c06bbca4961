//! S_k(n) = sum (-1)^l cos((6l + 1) pi / (6k)) over 0 <= l < 2k with
//! (3l^2 + l)/2 = -n (mod k). A_k(n) = sqrt(k/3) * S_k(n).

use std::f64::consts::PI;

use backend::Ball;

/// Indices contributing to S_k(n), given `r` = n mod k.
pub(crate) fn selberg_indices(r: u64, k: u64) -> impl Iterator<Item = u64> {
    let (r, k128): (u128, u128) = (r as u128, k as u128);
    (0..2 * k).filter(move |&l| {
        let l: u128 = l as u128;
        ((3 * l * l + l) / 2 + r) % k128 == 0
    })
}

/// S_k(n) enclosed at precision `prec`, `pi` an enclosure of pi.
pub(crate) fn selberg_sum(r: u64, k: u64, pi: &Ball, prec: u32) -> Option<Ball> {
    let mut acc: Ball = Ball::zero(prec);
    for l in selberg_indices(r, k) {
        let c: Ball = pi.mul_u64(6 * l + 1, prec).div_u64(6 * k, prec)?.cos(prec);
        acc = if l & 1 == 0 { acc.add(&c, prec) } else { acc.sub(&c, prec) };
    }
    Some(acc)
}

pub(crate) fn selberg_sum_f64(r: u64, k: u64) -> f64 {
    let d: f64 = (6 * k) as f64;
    selberg_indices(r, k)
        .map(|l| {
            let c: f64 = ((6 * l + 1) as f64 * PI / d).cos();
            if l & 1 == 0 { c } else { -c }
        })
        .sum()
}

use std::sync::OnceLock;

use rug::Integer;

/// Largest argument covered by [`reference`].
pub(crate) const REFERENCE_LIMIT: usize = 10_000;

/// p(k) for k in 0..=REFERENCE_LIMIT, from Euler's recurrence in exact
/// integer arithmetic. Shares no code with the engine.
pub(crate) fn reference() -> &'static [Integer] {
    static TABLE: OnceLock<Vec<Integer>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut p: Vec<Integer> = Vec::with_capacity(REFERENCE_LIMIT + 1);
        p.push(Integer::from(1));
        (1..=REFERENCE_LIMIT).for_each(|n| {
            let mut acc: Integer = Integer::new();
            let mut k: usize = 1;
            loop {
                let g1: usize = k * (3 * k - 1) / 2;
                if g1 > n {
                    break;
                }
                let g2: usize = g1 + k;
                let mut pair: Integer = p[n - g1].clone();
                if g2 <= n {
                    pair += &p[n - g2];
                }
                if k % 2 == 1 {
                    acc += pair;
                } else {
                    acc -= pair;
                }
                k += 1;
            }
            p.push(acc);
        });
        p
    })
}

#[test]
fn reference_table_known_values() {
    let p: &[Integer] = reference();
    assert_eq!(p[0], 1);
    assert_eq!(p[5], 7);
    assert_eq!(p[100], 190569292);
    assert_eq!(p[1000], "24061467864032622473692149727991".parse::<Integer>().unwrap());
}

use std::ops::Range;

use rug::Integer;
use sampling::source::Source;

use crate::dispatch::Partitions;
use crate::hrr::SeriesEvaluator;
use crate::test::reference::{REFERENCE_LIMIT, reference};

/// Every n in `range` against the exact reference.
pub(crate) fn test_exact_range<E: SeriesEvaluator>(engine: &Partitions<E>, range: Range<u64>, use_doubles: bool) {
    let p: &[Integer] = reference();
    assert!((range.end as usize) <= REFERENCE_LIMIT + 1);
    range.for_each(|n| {
        let have: Integer = engine.compute_u64(n, use_doubles).unwrap();
        assert_eq!(have, p[n as usize], "n={} use_doubles={}", n, use_doubles);
    });
}

/// `count` arguments drawn from `range` against the exact reference, through
/// the arbitrary-size entry point.
pub(crate) fn test_sampled_range<E: SeriesEvaluator>(
    engine: &Partitions<E>,
    source: &mut Source,
    range: Range<u64>,
    count: usize,
    use_doubles: bool,
) {
    let p: &[Integer] = reference();
    source.sample_indices(range, count).into_iter().for_each(|n| {
        let have: Integer = engine.compute(&Integer::from(n), use_doubles).unwrap();
        assert_eq!(have, p[n as usize], "n={} use_doubles={}", n, use_doubles);
    });
}

pub(crate) fn test_negative_arguments<E: SeriesEvaluator>(engine: &Partitions<E>) {
    let huge: Integer = -(Integer::from(1) << 200u32);
    [Integer::from(-1), Integer::from(-2000), Integer::from(i64::MIN), huge]
        .iter()
        .for_each(|n| {
            [false, true].iter().for_each(|&use_doubles| {
                assert_eq!(engine.compute(n, use_doubles).unwrap(), 0, "n={}", n);
            });
        });
}

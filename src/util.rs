//! Small numeric helpers shared by the spline queries.

/// Binary search over a monotonic predicate.
///
/// `good` must be false on some (possibly empty) prefix of `0..high` and true
/// on the rest. Returns the first index for which `good` holds, or `high` if
/// there is none.
pub fn search(high: usize, mut good: impl FnMut(usize) -> bool) -> usize {
    let mut lo = 0;
    let mut hi = high;
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if good(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Index of the first element of `v` that is `>= target`.
///
/// `v` must be sorted ascending. This is `v.len()` if all elements are smaller.
pub fn lower_bound(v: &[f64], target: f64) -> usize {
    search(v.len(), |i| v[i] >= target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_finds_first_true() {
        for high in 0..20 {
            for split in 0..=high {
                assert_eq!(search(high, |i| i >= split), split);
            }
        }
    }

    #[test]
    fn search_all_false_returns_high() {
        assert_eq!(search(7, |_| false), 7);
        assert_eq!(search(0, |_| true), 0);
    }

    #[test]
    fn search_is_logarithmic() {
        let mut calls = 0;
        let i = search(1 << 20, |i| {
            calls += 1;
            i >= 12345
        });
        assert_eq!(i, 12345);
        assert!(calls <= 21, "{} predicate calls", calls);
    }

    #[test]
    fn lower_bound_matches_sorted_position() {
        let v = [0.0, 1.0, 3.0, 7.0, 9.0];
        assert_eq!(lower_bound(&v, -1.0), 0);
        assert_eq!(lower_bound(&v, 0.0), 0);
        assert_eq!(lower_bound(&v, 0.5), 1);
        assert_eq!(lower_bound(&v, 3.0), 2);
        assert_eq!(lower_bound(&v, 8.0), 4);
        assert_eq!(lower_bound(&v, 9.5), 5);
    }
}

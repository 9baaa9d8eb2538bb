//! Destructive order statistics over raw coordinate slices.
//!
//! Both functions rearrange their input in place via quickselect
//! (`select_nth_unstable_by`), which is O(n) average case and leaves the
//! slice partially ordered: everything before the target index is <= the
//! returned value, everything after is >= it. Repeated calls on the same
//! slice stay correct — quickselect's placement guarantee does not depend
//! on the starting order.

/// Returns the value a full sort would place at index `floor(p * (n - 1))`.
///
/// `p` is clamped to `[0, 1]`, so `0.0` is the minimum, `1.0` the maximum.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn select_rank(values: &mut [f64], p: f64) -> f64 {
    assert!(!values.is_empty(), "select_rank on empty slice");

    let p = p.clamp(0.0, 1.0);
    let idx = (p * (values.len() - 1) as f64) as usize;

    let (_, nth, _) = values.select_nth_unstable_by(idx, f64::total_cmp);
    *nth
}

/// Returns the value a full sort would place at index `n / 2`.
///
/// For even-length slices this is one of the two central candidates, not
/// their average. That convention is adequate for geometric centering but
/// is not the textbook median; do not reuse this for statistical reporting.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn median(values: &mut [f64]) -> f64 {
    assert!(!values.is_empty(), "median on empty slice");

    let idx = values.len() / 2;
    let (_, nth, _) = values.select_nth_unstable_by(idx, f64::total_cmp);
    *nth
}

#[cfg(test)]
mod tests {
    use super::{median, select_rank};
    use proptest::prelude::*;

    fn sorted_copy(values: &[f64]) -> Vec<f64> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    #[test]
    fn select_rank_quartiles() {
        let mut values = vec![5.0, 1.0, 4.0, 2.0, 3.0];
        assert_eq!(select_rank(&mut values, 0.0), 1.0);
        assert_eq!(select_rank(&mut values, 0.25), 2.0);
        assert_eq!(select_rank(&mut values, 0.5), 3.0);
        assert_eq!(select_rank(&mut values, 0.75), 4.0);
        assert_eq!(select_rank(&mut values, 1.0), 5.0);
    }

    #[test]
    fn select_rank_uses_floor_indexing() {
        // n = 4: 0.5 * 3 = 1.5, floor -> index 1
        let mut values = vec![4.0, 1.0, 3.0, 2.0];
        assert_eq!(select_rank(&mut values, 0.5), 2.0);
    }

    #[test]
    fn median_odd() {
        let mut values = vec![3.0, 1.0, 5.0, 2.0, 4.0];
        assert_eq!(median(&mut values), 3.0);
    }

    #[test]
    fn median_even_takes_single_central_candidate() {
        // n = 4: index n/2 = 2 in sorted [1,2,3,4], never the average 2.5
        let mut values = vec![4.0, 1.0, 3.0, 2.0];
        assert_eq!(median(&mut values), 3.0);
    }

    #[test]
    fn median_differs_from_half_rank_for_even_n() {
        // floor(0.5 * (n-1)) and n/2 disagree for even n; both entry points
        // must keep their own convention.
        let mut a = vec![4.0, 1.0, 3.0, 2.0];
        let mut b = a.clone();
        assert_eq!(select_rank(&mut a, 0.5), 2.0);
        assert_eq!(median(&mut b), 3.0);
    }

    #[test]
    fn single_element() {
        let mut values = vec![7.5];
        assert_eq!(median(&mut values), 7.5);
        assert_eq!(select_rank(&mut values, 0.0), 7.5);
        assert_eq!(select_rank(&mut values, 1.0), 7.5);
    }

    #[test]
    fn out_of_range_p_is_clamped() {
        let mut values = vec![2.0, 1.0, 3.0];
        assert_eq!(select_rank(&mut values, -0.5), 1.0);
        assert_eq!(select_rank(&mut values, 1.5), 3.0);
    }

    #[test]
    #[should_panic]
    fn select_rank_panics_on_empty() {
        let _ = select_rank(&mut [], 0.5);
    }

    #[test]
    #[should_panic]
    fn median_panics_on_empty() {
        let _ = median(&mut []);
    }

    proptest! {
        #[test]
        fn select_rank_matches_full_sort(
            values in prop::collection::vec(-1e6f64..1e6f64, 1..500),
            p in 0.0f64..=1.0f64,
        ) {
            let sorted = sorted_copy(&values);
            let idx = (p * (values.len() - 1) as f64) as usize;
            let mut scratch = values;
            prop_assert_eq!(select_rank(&mut scratch, p), sorted[idx]);
        }

        #[test]
        fn median_matches_full_sort(
            values in prop::collection::vec(-1e6f64..1e6f64, 1..500),
        ) {
            let sorted = sorted_copy(&values);
            let mut scratch = values;
            prop_assert_eq!(median(&mut scratch), sorted[scratch.len() / 2]);
        }

        #[test]
        fn prior_destructive_calls_do_not_change_results(
            values in prop::collection::vec(-1e3f64..1e3f64, 1..300),
            probes in prop::collection::vec(0.0f64..=1.0f64, 1..6),
        ) {
            // Run a chain of queries on one slice; every answer must match
            // what a fresh fully-sorted copy would give.
            let sorted = sorted_copy(&values);
            let n = values.len();
            let mut scratch = values;

            let from_chain = median(&mut scratch);
            prop_assert_eq!(from_chain, sorted[n / 2]);

            for p in probes {
                let idx = (p * (n - 1) as f64) as usize;
                prop_assert_eq!(select_rank(&mut scratch, p), sorted[idx]);
            }
        }

        #[test]
        fn partial_ordering_invariant_holds(
            values in prop::collection::vec(-1e3f64..1e3f64, 1..300),
            p in 0.0f64..=1.0f64,
        ) {
            let idx = (p * (values.len() - 1) as f64) as usize;
            let mut scratch = values;
            let pivot = select_rank(&mut scratch, p);
            for (i, v) in scratch.iter().enumerate() {
                if i < idx {
                    prop_assert!(*v <= pivot);
                } else if i > idx {
                    prop_assert!(*v >= pivot);
                }
            }
        }
    }
}

use std::io;

use rustc_hash::FxHashMap;

use crate::selector::events::{BoundaryKind, Value, build_event_sequence};

/// Counts how many elements across all lists, with multiplicity, fall inside
/// the k-smallest selection window.
///
/// Algorithm:
/// 1. Sort every list ascending and record its min and max as two boundary
///    events; sort the 2n events ascending by value (mins first on ties).
/// 2. Scan the events, tracking `active` (min seen, max not yet) and `done`
///    (lists fully retired). `done + |active|` always equals the number of
///    min events seen so far.
/// 3. A min event seen while `done + |active| < k - 1` activates its list
///    with the end-of-list sentinel cursor: nothing can qualify yet. The
///    min event that makes `done + |active| == k - 1` carries the first
///    value that can qualify, so every active cursor is rebound to the
///    first element >= that value.
/// 4. A max event retires its list, keeping everything from the cursor on.
///    Once k lists are retired, the remaining active lists keep their
///    elements up to and including the retiring value, and the scan halts.
///
/// Sorting the lists dominates: O(total_elements * log(max_list_size)).
/// The scan adds O(n * log(max_list_size)) for the cursor rebinds.
///
/// Degenerate k (zero, or larger than the number of lists) is not an error
/// and counts zero. An empty individual list has no boundaries and is
/// rejected with `ErrorKind::InvalidInput`.
pub fn count_k_smallest(lists: Vec<Vec<Value>>, k: usize) -> io::Result<usize> {
    let (result, _) = scan_instance(lists, k)?;
    Ok(result.len())
}

pub(crate) struct ScanStats {
    pub cursor_resets: u32,
}

fn scan_instance(mut lists: Vec<Vec<Value>>, k: usize) -> io::Result<(Vec<Value>, ScanStats)> {
    let mut stats = ScanStats { cursor_resets: 0 };
    if k == 0 || k > lists.len() {
        return Ok((Vec::new(), stats));
    }

    for list in &mut lists {
        list.sort_unstable();
    }
    let events = build_event_sequence(&lists)?;

    // list index -> position from which elements might still qualify
    let mut active: FxHashMap<usize, usize> = FxHashMap::default();
    let mut result: Vec<Value> = Vec::new();
    let mut done = 0usize;

    for event in &events {
        match event.kind {
            BoundaryKind::Min => {
                let list = &lists[event.list];
                let mut start = 0;
                if done + active.len() < k - 1 {
                    // too few ranges opened so far, park the cursor at the end
                    start = list.len();
                } else if done + active.len() == k - 1 {
                    reset_active_cursors(&lists, &mut active, event.value);
                    stats.cursor_resets += 1;
                }
                active.insert(event.list, start);
            }
            BoundaryKind::Max => {
                // the matching min event was processed earlier in the scan
                let start = active.remove(&event.list).unwrap();
                result.extend_from_slice(&lists[event.list][start..]);
                done += 1;

                if done >= k {
                    // k ranges retired, nothing past this value can qualify
                    for (&index, &start) in active.iter() {
                        let list = &lists[index];
                        let end = list.partition_point(|&v| v <= event.value);
                        if start < end {
                            result.extend_from_slice(&list[start..end]);
                        }
                    }
                    break;
                }
            }
        }
    }

    Ok((result, stats))
}

/// Rebinds every active list's cursor to the first element >= `threshold`.
/// Runs exactly once per non-degenerate instance, on the k-th min event.
fn reset_active_cursors(
    lists: &[Vec<Value>],
    active: &mut FxHashMap<usize, usize>,
    threshold: Value,
) {
    for (&index, cursor) in active.iter_mut() {
        *cursor = lists[index].partition_point(|&v| v < threshold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::io::ErrorKind;

    /// Full-merge reference: an element qualifies exactly when it is not
    /// below the k-th smallest list-minimum and not above the k-th smallest
    /// list-maximum. Walking the merged order, the lower bound is where the
    /// k-th list's range opens and the upper bound is where the k-th list's
    /// range closes.
    fn reference_count(lists: &[Vec<Value>], k: usize) -> usize {
        if k == 0 || k > lists.len() {
            return 0;
        }
        let mut mins: Vec<Value> = lists.iter().map(|l| *l.iter().min().unwrap()).collect();
        let mut maxes: Vec<Value> = lists.iter().map(|l| *l.iter().max().unwrap()).collect();
        mins.sort_unstable();
        maxes.sort_unstable();
        let lo = mins[k - 1];
        let hi = maxes[k - 1];
        lists
            .iter()
            .flatten()
            .filter(|&&v| v >= lo && v <= hi)
            .count()
    }

    #[test]
    fn test_degenerate_k_returns_zero() {
        let lists = vec![vec![1, 2], vec![3, 4]];
        assert_eq!(count_k_smallest(lists.clone(), 0).unwrap(), 0);
        assert_eq!(count_k_smallest(lists, 3).unwrap(), 0);
    }

    #[test]
    fn test_degenerate_k_skips_boundary_checks() {
        // k is validated before min/max retrieval, so an empty list is
        // tolerated when the result is degenerate anyway.
        let lists = vec![Vec::new(), vec![1]];
        assert_eq!(count_k_smallest(lists, 0).unwrap(), 0);
    }

    #[test]
    fn test_empty_list_is_invalid_input() {
        let lists = vec![vec![1, 2], Vec::new()];
        let err = count_k_smallest(lists, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_single_list_counts_its_full_length() {
        let lists = vec![vec![9, 4, 7, 1]];
        assert_eq!(count_k_smallest(lists, 1).unwrap(), 4);
    }

    #[test]
    fn test_concrete_scenario() {
        let lists = vec![vec![1, 5, 9], vec![2, 3], vec![10, 20, 30, 40]];
        let expected = reference_count(&lists, 2);
        // second-smallest min is 2, second-smallest max is 9: {2, 3, 5, 9}
        assert_eq!(expected, 4);
        assert_eq!(count_k_smallest(lists, 2).unwrap(), expected);
    }

    #[test]
    fn test_early_retired_list_contributes_nothing() {
        // At k=1 the whole first list qualifies; at k=2 its range closes
        // before a second range ever opens, so only the 10 qualifies.
        let lists = vec![vec![1, 2, 3], vec![10]];
        assert_eq!(count_k_smallest(lists.clone(), 1).unwrap(), 3);
        assert_eq!(count_k_smallest(lists.clone(), 2).unwrap(), 1);
        assert_eq!(reference_count(&lists, 1), 3);
        assert_eq!(reference_count(&lists, 2), 1);
    }

    #[test]
    fn test_final_cleanup_copies_partial_active_list() {
        // List 2 is still active when the second max retires at 10 and must
        // contribute only its 5, not the 20.
        let lists = vec![vec![1, 10], vec![2, 3], vec![5, 20]];
        assert_eq!(count_k_smallest(lists.clone(), 2).unwrap(), 4);
        assert_eq!(reference_count(&lists, 2), 4);
    }

    #[test]
    fn test_identical_singletons_match_reference() {
        // All boundaries collide; min-before-max ordering keeps the scan
        // aligned with the reference window, which spans every copy.
        let lists = vec![vec![5], vec![5], vec![5]];
        for k in 1..=3 {
            assert_eq!(
                count_k_smallest(lists.clone(), k).unwrap(),
                reference_count(&lists, k),
                "k = {}",
                k
            );
            assert_eq!(count_k_smallest(lists.clone(), k).unwrap(), 3);
        }
    }

    #[test]
    fn test_touching_ranges_share_the_boundary_value() {
        // List 1 opens exactly where list 0 closes.
        let lists = vec![vec![1, 4], vec![4, 8]];
        assert_eq!(
            count_k_smallest(lists.clone(), 2).unwrap(),
            reference_count(&lists, 2)
        );
    }

    #[test]
    fn test_cursor_reset_happens_exactly_once() {
        let cases = vec![
            (vec![vec![1, 5, 9], vec![2, 3], vec![10, 20, 30, 40]], 2),
            (vec![vec![1, 2, 3], vec![10]], 2),
            (vec![vec![7]], 1),
            (vec![vec![5], vec![5], vec![5]], 3),
        ];
        for (lists, k) in cases {
            let (_, stats) = scan_instance(lists, k).unwrap();
            assert_eq!(stats.cursor_resets, 1);
        }
    }

    #[test]
    fn test_no_cursor_reset_for_degenerate_k() {
        let (_, stats) = scan_instance(vec![vec![1], vec![2]], 0).unwrap();
        assert_eq!(stats.cursor_resets, 0);
        let (_, stats) = scan_instance(vec![vec![1], vec![2]], 5).unwrap();
        assert_eq!(stats.cursor_resets, 0);
    }

    #[test]
    fn test_randomized_instances_match_reference() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..300 {
            let n = rng.gen_range(1..=8);
            let lists: Vec<Vec<Value>> = (0..n)
                .map(|_| {
                    let len = rng.gen_range(1..=12);
                    (0..len).map(|_| rng.gen_range(0..1000)).collect()
                })
                .collect();
            for k in 0..=n + 1 {
                assert_eq!(
                    count_k_smallest(lists.clone(), k).unwrap(),
                    reference_count(&lists, k),
                    "n = {}, k = {}, lists = {:?}",
                    n,
                    k,
                    lists
                );
            }
        }
    }

    #[test]
    fn test_randomized_instances_with_heavy_duplicates() {
        // Values drawn from a tiny range so boundary collisions across
        // lists are the norm rather than the exception.
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let n = rng.gen_range(1..=6);
            let lists: Vec<Vec<Value>> = (0..n)
                .map(|_| {
                    let len = rng.gen_range(1..=10);
                    (0..len).map(|_| rng.gen_range(0..8)).collect()
                })
                .collect();
            for k in 1..=n {
                assert_eq!(
                    count_k_smallest(lists.clone(), k).unwrap(),
                    reference_count(&lists, k),
                    "n = {}, k = {}, lists = {:?}",
                    n,
                    k,
                    lists
                );
            }
        }
    }
}

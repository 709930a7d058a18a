//! Accuracy-oriented strategies for summing positive doubles. The naive
//! left-to-right fold is the baseline; the others repeatedly add the two
//! smallest remaining values so small terms are never swallowed by a large
//! partial sum. The four smallest-pair strategies differ only in how they
//! find the two minima and produce identical sums.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummationAlgorithm {
    Naive,
    Sorted,
    Partial,
    Tree,
    Heap,
}

impl SummationAlgorithm {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "naive" => Some(SummationAlgorithm::Naive),
            "sorted" => Some(SummationAlgorithm::Sorted),
            "partial" => Some(SummationAlgorithm::Partial),
            "tree" => Some(SummationAlgorithm::Tree),
            "heap" => Some(SummationAlgorithm::Heap),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SummationAlgorithm::Naive => "naive",
            SummationAlgorithm::Sorted => "sorted",
            SummationAlgorithm::Partial => "partial",
            SummationAlgorithm::Tree => "tree",
            SummationAlgorithm::Heap => "heap",
        }
    }
}

/// f64 with the total order, usable as a map key or heap entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalF64(pub f64);

impl Eq for TotalF64 {}

impl Ord for TotalF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for TotalF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Plain left-to-right fold, O(n).
pub fn sum_naive(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Re-sorts the whole tail before every pairing, O(n^2 log n).
pub fn sum_sorted(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let last = values.len() - 1;
    for i in 0..last {
        values[i..].sort_by(|a, b| a.total_cmp(b));
        values[i + 1] += values[i];
    }
    values[last]
}

/// Selects only the two smallest of the tail before every pairing, O(n^2).
pub fn sum_partial(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let last = values.len() - 1;
    for i in 0..last {
        values[i..].select_nth_unstable_by(1, |a, b| a.total_cmp(b));
        values[i + 1] += values[i];
    }
    values[last]
}

/// Ordered multiset: pop the two smallest, insert their sum, O(n log n).
pub fn sum_tree(values: &[f64]) -> f64 {
    let mut set: BTreeMap<TotalF64, usize> = BTreeMap::new();
    for &value in values {
        *set.entry(TotalF64(value)).or_insert(0) += 1;
    }
    let mut remaining = values.len();
    while remaining > 1 {
        let sum = pop_min(&mut set) + pop_min(&mut set);
        *set.entry(TotalF64(sum)).or_insert(0) += 1;
        remaining -= 1;
    }
    set.first_key_value().map_or(0.0, |(key, _)| key.0)
}

fn pop_min(set: &mut BTreeMap<TotalF64, usize>) -> f64 {
    // caller guarantees the set is non-empty
    let (&key, &count) = set.first_key_value().unwrap();
    if count > 1 {
        set.insert(key, count - 1);
    } else {
        set.remove(&key);
    }
    key.0
}

/// Min-heap: pop the two smallest, push their sum, O(n log n) and faster
/// than the tree in practice.
pub fn sum_heap(values: &[f64]) -> f64 {
    let mut heap: BinaryHeap<Reverse<TotalF64>> =
        values.iter().map(|&v| Reverse(TotalF64(v))).collect();
    while heap.len() > 1 {
        let Reverse(TotalF64(a)) = heap.pop().unwrap();
        let Reverse(TotalF64(b)) = heap.pop().unwrap();
        heap.push(Reverse(TotalF64(a + b)));
    }
    heap.pop().map_or(0.0, |Reverse(TotalF64(v))| v)
}

pub fn sum_with(algorithm: SummationAlgorithm, values: &[f64]) -> f64 {
    match algorithm {
        SummationAlgorithm::Naive => sum_naive(values),
        SummationAlgorithm::Sorted => sum_sorted(values.to_vec()),
        SummationAlgorithm::Partial => sum_partial(values.to_vec()),
        SummationAlgorithm::Tree => sum_tree(values),
        SummationAlgorithm::Heap => sum_heap(values),
    }
}

/// Random positive doubles drawn as raw bit patterns, rejecting anything
/// negative, NaN, or large enough to overflow a whole array's sum.
pub fn generate_values(count: usize, rng: &mut impl Rng) -> Vec<f64> {
    (0..count).map(|_| random_positive(rng)).collect()
}

fn random_positive(rng: &mut impl Rng) -> f64 {
    loop {
        let value = f64::from_bits(rng.r#gen::<u64>());
        if value >= 0.0 && value < 1e200 {
            return value;
        }
    }
}

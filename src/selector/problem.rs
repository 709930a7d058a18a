use std::io;

use crate::selector::events::Value;
use crate::selector::range_scan::count_k_smallest;

/// One selection query: n lists of unsigned values and the target count k.
/// Built fresh per query and consumed by solving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemInstance {
    pub n: usize,
    pub k: usize,
    pub lists: Vec<Vec<Value>>,
}

impl ProblemInstance {
    pub fn new(lists: Vec<Vec<Value>>, k: usize) -> Self {
        Self {
            n: lists.len(),
            k,
            lists,
        }
    }

    pub fn solve(self) -> io::Result<usize> {
        count_k_smallest(self.lists, self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_records_list_count() {
        let instance = ProblemInstance::new(vec![vec![1], vec![2, 3]], 1);
        assert_eq!(instance.n, 2);
        assert_eq!(instance.k, 1);
    }

    #[test]
    fn test_solve_delegates_to_selector() {
        let instance = ProblemInstance::new(vec![vec![3, 1, 2]], 1);
        assert_eq!(instance.solve().unwrap(), 3);
    }
}

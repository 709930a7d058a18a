use std::io::{self, Error, ErrorKind};

pub type Value = u32;

/// Whether a boundary event exposes a list's smallest or largest element.
/// `Min` orders before `Max` so that at equal values every list whose range
/// begins at that value is activated before any list's range is retired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BoundaryKind {
    Min,
    Max,
}

/// A (list index, extreme value) marker. Lists are identified by their index
/// into the problem's list collection, never by address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryEvent {
    pub list: usize,
    pub value: Value,
    pub kind: BoundaryKind,
}

/// Builds the event sequence: two boundary events per list, sorted ascending
/// by value with min events before max events at equal values.
///
/// Every list must already be sorted ascending. An empty list has no min/max
/// to expose and is rejected as invalid input.
pub fn build_event_sequence(lists: &[Vec<Value>]) -> io::Result<Vec<BoundaryEvent>> {
    let mut events = Vec::with_capacity(lists.len() * 2);
    for (index, list) in lists.iter().enumerate() {
        let (Some(&min), Some(&max)) = (list.first(), list.last()) else {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("list {} is empty and has no min/max boundary", index),
            ));
        };
        events.push(BoundaryEvent {
            list: index,
            value: min,
            kind: BoundaryKind::Min,
        });
        events.push(BoundaryEvent {
            list: index,
            value: max,
            kind: BoundaryKind::Max,
        });
    }
    events.sort_by(|a, b| a.value.cmp(&b.value).then(a.kind.cmp(&b.kind)));
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_sequence_is_sorted_by_value() {
        let lists = vec![vec![5, 9], vec![1, 3], vec![2, 7]];
        let events = build_event_sequence(&lists).unwrap();

        assert_eq!(events.len(), 6);
        let values: Vec<Value> = events.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![1, 2, 3, 5, 7, 9]);
    }

    #[test]
    fn test_min_sorts_before_max_at_equal_values() {
        // One list ends at 4 where another begins.
        let lists = vec![vec![1, 4], vec![4, 8]];
        let events = build_event_sequence(&lists).unwrap();

        assert_eq!(events[1].value, 4);
        assert_eq!(events[1].kind, BoundaryKind::Min);
        assert_eq!(events[1].list, 1);
        assert_eq!(events[2].value, 4);
        assert_eq!(events[2].kind, BoundaryKind::Max);
        assert_eq!(events[2].list, 0);
    }

    #[test]
    fn test_singleton_list_min_precedes_its_max() {
        let lists = vec![vec![7]];
        let events = build_event_sequence(&lists).unwrap();

        assert_eq!(events[0].kind, BoundaryKind::Min);
        assert_eq!(events[1].kind, BoundaryKind::Max);
        assert_eq!(events[0].value, 7);
        assert_eq!(events[1].value, 7);
    }

    #[test]
    fn test_empty_list_is_invalid_input() {
        let lists = vec![vec![1, 2], vec![]];
        let err = build_event_sequence(&lists).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

use std::collections::BTreeMap;

use crate::core::RowPolicy;

/// Closed-interval overlap test.
///
/// `(s1, e1)` and `(s2, e2)` overlap unless `e1 < s2` or `s1 > e2`, so bounds
/// that touch (`e1 == s2`) count as overlapping.
#[must_use]
pub fn spans_overlap(first: (f64, f64), second: (f64, f64)) -> bool {
    let (s1, e1) = first;
    let (s2, e2) = second;
    !(e1 < s2 || s1 > e2)
}

/// Lane occupancy for a single normalization pass.
///
/// A context is created fresh for every pass and dropped with it, so no
/// occupancy leaks between passes. First-fit lanes are stored sparsely: a row
/// nobody occupies is an empty lane, whatever its number.
#[derive(Debug, Clone)]
pub struct LayoutContext {
    policy: RowPolicy,
    next_cyclic_row: usize,
    lanes: BTreeMap<usize, Vec<(f64, f64)>>,
    max_row: Option<usize>,
}

impl LayoutContext {
    #[must_use]
    pub fn new(policy: RowPolicy) -> Self {
        Self {
            policy,
            next_cyclic_row: 0,
            lanes: BTreeMap::new(),
            max_row: None,
        }
    }

    /// Resolves the row of the next extent in input order.
    ///
    /// `pinned` is the caller-forced row, if any.
    pub fn assign(&mut self, span: (f64, f64), pinned: Option<usize>) -> usize {
        let row = match self.policy {
            RowPolicy::Cyclic(count) => {
                let row = pinned.unwrap_or(self.next_cyclic_row);
                self.next_cyclic_row = (row % count.get() + 1) % count.get();
                row
            }
            RowPolicy::FirstFit => match pinned {
                Some(row) => {
                    self.occupy(row, span);
                    row
                }
                None => self.first_fit(span),
            },
        };
        self.max_row = Some(self.max_row.map_or(row, |max| max.max(row)));
        row
    }

    /// Rows referenced so far (highest assigned row + 1).
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.max_row.map_or(0, |max| max.saturating_add(1))
    }

    /// Spans currently recorded in a first-fit lane.
    #[must_use]
    pub fn lane(&self, row: usize) -> &[(f64, f64)] {
        self.lanes.get(&row).map_or(&[], Vec::as_slice)
    }

    fn first_fit(&mut self, span: (f64, f64)) -> usize {
        let mut row = 0;
        for (&lane, occupants) in &self.lanes {
            if lane > row
                || occupants
                    .iter()
                    .all(|&occupant| !spans_overlap(occupant, span))
            {
                break;
            }
            row = lane.saturating_add(1);
        }
        self.occupy(row, span);
        row
    }

    fn occupy(&mut self, row: usize, span: (f64, f64)) {
        self.lanes.entry(row).or_default().push(span);
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::{LayoutContext, spans_overlap};
    use crate::core::RowPolicy;

    fn cyclic(count: usize) -> RowPolicy {
        RowPolicy::Cyclic(NonZeroUsize::new(count).expect("non-zero"))
    }

    #[test]
    fn touching_bounds_overlap() {
        assert!(spans_overlap((10.0, 10.0), (10.0, 20.0)));
        assert!(spans_overlap((0.0, 10.0), (10.0, 20.0)));
        assert!(!spans_overlap((0.0, 10.0), (20.0, 30.0)));
        assert!(!spans_overlap((20.0, 30.0), (0.0, 10.0)));
    }

    #[test]
    fn first_fit_takes_lowest_free_row() {
        let mut context = LayoutContext::new(RowPolicy::FirstFit);
        assert_eq!(context.assign((0.0, 10.0), None), 0);
        assert_eq!(context.assign((5.0, 15.0), None), 1);
        assert_eq!(context.assign((20.0, 30.0), None), 0);
        assert_eq!(context.assign((12.0, 18.0), None), 2);
        assert_eq!(context.row_count(), 3);
    }

    #[test]
    fn pinned_rows_skip_the_overlap_check_but_occupy_the_lane() {
        let mut context = LayoutContext::new(RowPolicy::FirstFit);
        assert_eq!(context.assign((0.0, 10.0), Some(2)), 2);
        assert_eq!(context.assign((0.0, 10.0), Some(2)), 2);
        assert_eq!(context.lane(2).len(), 2);
        // Rows 0 and 1 are unoccupied, so they fit anything.
        assert_eq!(context.assign((0.0, 10.0), None), 0);
        assert_eq!(context.assign((5.0, 6.0), None), 1);
        assert_eq!(context.assign((5.0, 6.0), None), 3);
    }

    #[test]
    fn cyclic_rows_continue_after_pinned_row() {
        let mut context = LayoutContext::new(cyclic(3));
        assert_eq!(context.assign((0.0, 1.0), None), 0);
        assert_eq!(context.assign((0.0, 1.0), Some(2)), 2);
        assert_eq!(context.assign((0.0, 1.0), None), 0);
        assert_eq!(context.assign((0.0, 1.0), None), 1);
        assert_eq!(context.assign((0.0, 1.0), Some(7)), 7);
        assert_eq!(context.assign((0.0, 1.0), None), 2);
        assert_eq!(context.row_count(), 8);
    }

    #[test]
    fn huge_pinned_rows_do_not_allocate_intermediate_lanes() {
        let mut context = LayoutContext::new(RowPolicy::FirstFit);
        assert_eq!(context.assign((0.0, 10.0), Some(usize::MAX)), usize::MAX);
        assert_eq!(context.assign((0.0, 10.0), None), 0);
        assert_eq!(context.lane(usize::MAX).len(), 1);
        assert!(context.lane(1).is_empty());
        assert_eq!(context.row_count(), usize::MAX);
    }

    #[test]
    fn huge_pinned_row_keeps_the_cycle_in_range() {
        let mut context = LayoutContext::new(cyclic(3));
        assert_eq!(context.assign((0.0, 1.0), Some(usize::MAX)), usize::MAX);
        // usize::MAX + 1 is 2^64, which is 1 modulo 3.
        assert_eq!(context.assign((0.0, 1.0), None), 1);
        assert_eq!(context.assign((0.0, 1.0), None), 2);
        assert_eq!(context.row_count(), usize::MAX);
    }
}

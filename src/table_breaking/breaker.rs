//! The column partitioning algorithm.

use std::ops::Range;

use tracing::debug;

use super::PageGroup;
use crate::error::{PaginationError, Result};

/// Plans how a table's columns are distributed over horizontal pages.
///
/// The breaker partitions the columns into at most the requested number of
/// contiguous groups, keeping column order, so that the widest group is as
/// narrow as possible. Requesting more pages than can help is fine: when a
/// smaller number of groups already reaches the optimal width, the extra
/// pages are simply not used.
///
/// Among partitions that reach the optimal width, the breaker prefers the
/// fewest groups, and among those the one whose group sizes are smallest
/// from the left. The result is fully determined by the inputs.
///
/// # Example
///
/// ```rust
/// use pagewise::ColumnBreaker;
///
/// # fn main() -> pagewise::Result<()> {
/// let groups = ColumnBreaker::new(vec![100.0, 1.0, 500.0])
///     .page_count(3)
///     .split()?;
///
/// // Two pages suffice: [100, 1] and [500].
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].columns(), 0..2);
/// assert_eq!(groups[1].width(), 500.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ColumnBreaker {
    column_widths: Vec<f64>,
    page_count: usize,
}

impl ColumnBreaker {
    /// Create a breaker for the given column widths, targeting one page.
    pub fn new(column_widths: Vec<f64>) -> Self {
        Self {
            column_widths,
            page_count: 1,
        }
    }

    /// Set the number of horizontal pages the columns may spread over.
    pub fn page_count(mut self, page_count: usize) -> Self {
        self.page_count = page_count;
        self
    }

    /// Partition the columns into page groups.
    ///
    /// Returns [`PaginationError::InvalidColumnWidth`] when any width is
    /// negative, NaN or infinite. No columns, or a page count of zero,
    /// yields an empty partition.
    pub fn split(&self) -> Result<Vec<PageGroup>> {
        for (index, &width) in self.column_widths.iter().enumerate() {
            if width < 0.0 || !width.is_finite() {
                return Err(PaginationError::InvalidColumnWidth(index, width));
            }
        }
        if self.column_widths.is_empty() || self.page_count == 0 {
            return Ok(Vec::new());
        }

        let columns = self.column_widths.len();
        let max_groups = self.page_count.min(columns);
        let prefix = self.prefix_sums();

        let capacity = self.optimal_capacity(&prefix, max_groups);
        let group_count = groups_needed(&prefix, 0, capacity);

        let mut groups = Vec::with_capacity(group_count);
        let mut start = 0;
        for remaining in (1..=group_count).rev() {
            let end = if remaining == 1 {
                columns
            } else {
                self.smallest_feasible_end(&prefix, start, remaining, capacity)
            };
            groups.push(self.group(start..end));
            start = end;
        }

        debug!(
            columns,
            page_count = self.page_count,
            group_count,
            capacity,
            "broke table columns into page groups"
        );
        Ok(groups)
    }

    /// Running totals of the column widths; `prefix[j] - prefix[i]` is the
    /// width of the run `i..j`.
    ///
    /// Every width the search compares is taken from these same totals, so
    /// a run's width is one bit pattern throughout and float rounding
    /// cannot make the feasibility scan disagree with the capacity it was
    /// given.
    fn prefix_sums(&self) -> Vec<f64> {
        let mut prefix = Vec::with_capacity(self.column_widths.len() + 1);
        let mut total = 0.0;
        prefix.push(total);
        for &width in &self.column_widths {
            total += width;
            prefix.push(total);
        }
        prefix
    }

    /// The smallest achievable maximum group width for at most
    /// `max_groups` contiguous groups.
    ///
    /// The optimum is always the width of some contiguous run, so the
    /// search space is the sorted run widths. Runs narrower than the
    /// widest single column are discarded up front: no partition can avoid
    /// placing that column somewhere, so such capacities are never
    /// achievable and would let the greedy scan undercount by splitting
    /// around forced oversize groups.
    fn optimal_capacity(&self, prefix: &[f64], max_groups: usize) -> f64 {
        let columns = self.column_widths.len();
        let widest = (0..columns)
            .map(|i| run_width(prefix, i, i + 1))
            .fold(0.0_f64, f64::max);

        let mut candidates = Vec::with_capacity(columns * (columns + 1) / 2);
        for start in 0..columns {
            for end in start + 1..=columns {
                let width = run_width(prefix, start, end);
                if width >= widest {
                    candidates.push(width);
                }
            }
        }
        candidates.sort_by(f64::total_cmp);
        candidates.dedup();

        // The full run is always a candidate and fits in one group, so the
        // partition point lands on a real entry.
        let index = candidates.partition_point(|&c| groups_needed(prefix, 0, c) > max_groups);
        match candidates.get(index) {
            Some(&capacity) => capacity,
            None => unreachable!("the total width always fits within the page budget"),
        }
    }

    /// The smallest cut position after `start` that keeps the partition
    /// completable: the run stays within `capacity`, every later group can
    /// still get a column, and the suffix still fits in the groups left.
    fn smallest_feasible_end(
        &self,
        prefix: &[f64],
        start: usize,
        remaining: usize,
        capacity: f64,
    ) -> usize {
        let columns = self.column_widths.len();
        for end in start + 1..=columns - (remaining - 1) {
            if run_width(prefix, start, end) <= capacity
                && groups_needed(prefix, end, capacity) <= remaining - 1
            {
                return end;
            }
        }
        unreachable!("a feasible cut always exists at the optimal capacity")
    }

    /// Build the reported group for `columns`, summing the member widths
    /// directly so callers see the plain total of what they passed in.
    fn group(&self, columns: Range<usize>) -> PageGroup {
        let width = self.column_widths[columns.clone()].iter().sum();
        PageGroup::new(columns, width)
    }
}

/// Width of the column run `start..end` from the running totals.
fn run_width(prefix: &[f64], start: usize, end: usize) -> f64 {
    prefix[end] - prefix[start]
}

/// Fewest groups that cover the columns from `start` on without any group
/// exceeding `capacity`, by greedily packing each group full.
///
/// The first column of a group is taken unconditionally; for the
/// capacities the search probes this never overflows, since they are at
/// least the widest single column.
fn groups_needed(prefix: &[f64], mut start: usize, capacity: f64) -> usize {
    let columns = prefix.len() - 1;
    let mut groups = 0;
    while start < columns {
        let mut end = start + 1;
        while end < columns && run_width(prefix, start, end + 1) <= capacity {
            end += 1;
        }
        groups += 1;
        start = end;
    }
    groups
}

/// Partition `widths` into at most `page_count` contiguous page groups.
///
/// Convenience wrapper around [`ColumnBreaker`] for one-off splits.
///
/// # Example
///
/// ```rust
/// use pagewise::split_columns;
///
/// # fn main() -> pagewise::Result<()> {
/// let groups = split_columns(&[20.0, 30.0, 5.0, 50.0, 20.0], 3)?;
/// let widths: Vec<f64> = groups.iter().map(|g| g.width()).collect();
/// assert_eq!(widths, vec![50.0, 55.0, 20.0]);
/// # Ok(())
/// # }
/// ```
pub fn split_columns(widths: &[f64], page_count: usize) -> Result<Vec<PageGroup>> {
    ColumnBreaker::new(widths.to_vec())
        .page_count(page_count)
        .split()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(groups: &[PageGroup]) -> Vec<usize> {
        groups.iter().map(PageGroup::column_count).collect()
    }

    fn widths(groups: &[PageGroup]) -> Vec<f64> {
        groups.iter().map(PageGroup::width).collect()
    }

    #[test]
    fn test_single_column_single_page() {
        let groups = split_columns(&[100.0], 1).unwrap();
        assert_eq!(sizes(&groups), vec![1]);
        assert_eq!(widths(&groups), vec![100.0]);
        assert_eq!(groups[0].columns(), 0..1);
    }

    #[test]
    fn test_more_pages_than_columns() {
        let groups = split_columns(&[100.0, 100.0], 3).unwrap();
        assert_eq!(sizes(&groups), vec![1, 1]);
        assert_eq!(widths(&groups), vec![100.0, 100.0]);
    }

    #[test]
    fn test_dominant_column_absorbs_narrow_neighbor() {
        // Splitting [100, 1] off beats any partition that isolates the 500
        // column later, and two pages already reach the optimum.
        let groups = split_columns(&[100.0, 1.0, 500.0], 3).unwrap();
        assert_eq!(sizes(&groups), vec![2, 1]);
        assert_eq!(widths(&groups), vec![101.0, 500.0]);
    }

    #[test]
    fn test_leftmost_groups_kept_small_on_ties() {
        let groups = split_columns(&[20.0, 30.0, 5.0, 50.0, 20.0], 3).unwrap();
        assert_eq!(sizes(&groups), vec![2, 2, 1]);
        assert_eq!(widths(&groups), vec![50.0, 55.0, 20.0]);
    }

    #[test]
    fn test_even_spread_over_three_pages() {
        let groups = split_columns(
            &[20.0, 10.0, 10.0, 10.0, 15.0, 10.0, 15.0, 10.0, 10.0],
            3,
        )
        .unwrap();
        assert_eq!(sizes(&groups), vec![3, 3, 3]);
        assert_eq!(widths(&groups), vec![40.0, 35.0, 35.0]);
    }

    #[test]
    fn test_groups_partition_all_columns() {
        let input = [20.0, 30.0, 5.0, 50.0, 20.0];
        let groups = split_columns(&input, 3).unwrap();
        let mut next = 0;
        for group in &groups {
            assert_eq!(group.columns().start, next);
            next = group.columns().end;
        }
        assert_eq!(next, input.len());
    }

    #[test]
    fn test_empty_inputs_yield_empty_partition() {
        assert!(split_columns(&[], 0).unwrap().is_empty());
        assert!(split_columns(&[], 4).unwrap().is_empty());
        assert!(split_columns(&[10.0, 20.0], 0).unwrap().is_empty());
    }

    #[test]
    fn test_zero_width_columns_are_allowed() {
        let groups = split_columns(&[0.0, 0.0, 0.0], 2).unwrap();
        let total_columns: usize = groups.iter().map(PageGroup::column_count).sum();
        assert_eq!(total_columns, 3);
        assert!(groups.iter().all(|g| g.width() == 0.0));
    }

    #[test]
    fn test_negative_width_is_rejected() {
        let err = split_columns(&[10.0, -3.0, 5.0], 2).unwrap_err();
        assert!(matches!(
            err,
            PaginationError::InvalidColumnWidth(1, w) if w == -3.0
        ));
    }

    #[test]
    fn test_nan_and_infinite_widths_are_rejected() {
        let err = split_columns(&[f64::NAN], 1).unwrap_err();
        assert!(matches!(err, PaginationError::InvalidColumnWidth(0, _)));

        let err = split_columns(&[5.0, f64::INFINITY], 2).unwrap_err();
        assert!(matches!(err, PaginationError::InvalidColumnWidth(1, _)));
    }

    #[test]
    fn test_builder_defaults_to_one_page() {
        let groups = ColumnBreaker::new(vec![10.0, 20.0, 30.0]).split().unwrap();
        assert_eq!(sizes(&groups), vec![3]);
        assert_eq!(widths(&groups), vec![60.0]);
    }

    #[test]
    fn test_greedy_group_count_is_minimal_for_capacity() {
        let breaker = ColumnBreaker::new(vec![20.0, 30.0, 5.0, 50.0, 20.0]);
        let prefix = breaker.prefix_sums();
        assert_eq!(groups_needed(&prefix, 0, 125.0), 1);
        assert_eq!(groups_needed(&prefix, 0, 55.0), 3);
        assert_eq!(groups_needed(&prefix, 0, 50.0), 4);
    }
}

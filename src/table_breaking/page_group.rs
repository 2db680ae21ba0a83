//! A contiguous run of table columns assigned to one horizontal page.

use std::ops::Range;

/// One horizontal page of a broken table: a contiguous range of column
/// indices and the summed width of those columns.
///
/// Produced by [`ColumnBreaker::split`](crate::ColumnBreaker::split); the
/// groups partition `0..column_count` from left to right without gaps.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageGroup {
    columns: Range<usize>,
    width: f64,
}

impl PageGroup {
    pub(crate) fn new(columns: Range<usize>, width: f64) -> Self {
        Self { columns, width }
    }

    /// The half-open range of column indices on this page.
    pub fn columns(&self) -> Range<usize> {
        self.columns.clone()
    }

    /// Number of columns on this page.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total width of the columns on this page, in the caller's units.
    pub fn width(&self) -> f64 {
        self.width
    }
}

/// The uniform scale factor that makes every group fit into
/// `usable_width`.
///
/// Returns `1.0` when nothing overflows; otherwise the smallest ratio
/// `usable_width / group.width()` over the overflowing groups, so that
/// after scaling the widest page exactly fills the paper. Shrinking is the
/// only direction taken: content narrower than the page is left at full
/// size. A non-positive `usable_width` with overflowing content yields
/// `0.0`.
pub fn scaling_to_fit(groups: &[PageGroup], usable_width: f64) -> f64 {
    let mut factor = 1.0_f64;
    for group in groups {
        if group.width() > usable_width && group.width() > 0.0 {
            if usable_width <= 0.0 {
                return 0.0;
            }
            factor = factor.min(usable_width / group.width());
        }
    }
    factor
}

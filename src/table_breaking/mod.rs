//! Column-to-page partitioning for tables wider than one page.
//!
//! When a spreadsheet-style table cannot fit on a single page, its columns
//! are distributed over several pages side by side. This module decides
//! where to cut: [`ColumnBreaker`] takes the measured column widths and a
//! page budget and returns contiguous [`PageGroup`]s, one per horizontal
//! page, chosen so the widest page is as narrow as possible.
//!
//! The breaker only plans the horizontal axis. Vertical pagination (rows
//! per page) is measured by the layout engine; [`PageOrder`] then says in
//! which order the resulting page grid is emitted. For the case where even
//! the best break leaves a page wider than the paper,
//! [`scaling_to_fit`] computes the font scale factor that makes everything
//! fit.
//!
//! # Example
//!
//! ```rust
//! use pagewise::table_breaking::split_columns;
//!
//! # fn main() -> pagewise::Result<()> {
//! let groups = split_columns(&[20.0, 30.0, 5.0, 50.0, 20.0], 3)?;
//!
//! let widths: Vec<f64> = groups.iter().map(|g| g.width()).collect();
//! assert_eq!(widths, vec![50.0, 55.0, 20.0]);
//! # Ok(())
//! # }
//! ```

mod breaker;
mod page_group;

pub use breaker::{split_columns, ColumnBreaker};
pub use page_group::{scaling_to_fit, PageGroup};

/// Order in which the pages of a broken table are emitted.
///
/// Breaking a table produces a grid of pages: one column of pages per
/// [`PageGroup`] and one row of pages per vertical break. The grid itself
/// is fixed; this only chooses the traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageOrder {
    /// Emit all vertical pages of the first column group, then move right.
    #[default]
    DownThenRight,
    /// Emit the first vertical slice across all column groups, then move
    /// down.
    RightThenDown,
}

impl PageOrder {
    /// The `(horizontal, vertical)` page indices of a
    /// `horizontal_pages x vertical_pages` grid in emission order.
    pub fn page_sequence(
        self,
        horizontal_pages: usize,
        vertical_pages: usize,
    ) -> Vec<(usize, usize)> {
        let mut sequence = Vec::with_capacity(horizontal_pages * vertical_pages);
        match self {
            PageOrder::DownThenRight => {
                for h in 0..horizontal_pages {
                    for v in 0..vertical_pages {
                        sequence.push((h, v));
                    }
                }
            }
            PageOrder::RightThenDown => {
                for v in 0..vertical_pages {
                    for h in 0..horizontal_pages {
                        sequence.push((h, v));
                    }
                }
            }
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_is_down_then_right() {
        assert_eq!(PageOrder::default(), PageOrder::DownThenRight);
    }

    #[test]
    fn test_down_then_right_sequence() {
        let sequence = PageOrder::DownThenRight.page_sequence(2, 3);
        assert_eq!(
            sequence,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn test_right_then_down_sequence() {
        let sequence = PageOrder::RightThenDown.page_sequence(2, 3);
        assert_eq!(
            sequence,
            vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]
        );
    }

    #[test]
    fn test_degenerate_grids() {
        assert_eq!(PageOrder::DownThenRight.page_sequence(1, 1), vec![(0, 0)]);
        assert!(PageOrder::RightThenDown.page_sequence(0, 5).is_empty());
        assert!(PageOrder::DownThenRight.page_sequence(5, 0).is_empty());
    }
}

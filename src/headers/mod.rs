//! Header and footer scheduling for paginated reports.
//!
//! A report may register different header (or footer) content for the
//! first page, the last page, even pages, odd pages, or all pages. While
//! painting, the layout driver asks once per page which of the registered
//! contents applies. This module owns that decision: [`HeaderRegistry`]
//! stores the contents keyed by [`HeaderScope`], and
//! [`HeaderRegistry::resolve`] picks the one for a given [`PageContext`].
//!
//! Headers and footers follow the same rules; a report simply keeps one
//! registry for each.
//!
//! # Example
//!
//! ```rust
//! use pagewise::{HeaderRegistry, HeaderScope, PageContext};
//!
//! # fn main() -> pagewise::Result<()> {
//! let mut headers = HeaderRegistry::new();
//! headers.set(HeaderScope::FirstPage, "title banner");
//! headers.set(HeaderScope::AllPages, "running head");
//!
//! assert_eq!(
//!     headers.resolve(PageContext::new(1, 9)?),
//!     Some(&"title banner")
//! );
//! assert_eq!(
//!     headers.resolve(PageContext::new(5, 9)?),
//!     Some(&"running head")
//! );
//! # Ok(())
//! # }
//! ```

mod registry;
mod scope;

pub use registry::HeaderRegistry;
pub use scope::HeaderScope;

use crate::error::{PaginationError, Result};

/// A page's position within its document: the 1-based page number together
/// with the document's total page count.
///
/// Construction validates `1 <= page_number <= total_pages`, so resolution
/// over a `PageContext` is total; the out-of-range case is caught once, at
/// the boundary where the layout driver hands the numbers over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContext {
    page_number: u32,
    total_pages: u32,
}

impl PageContext {
    /// Create a page context for `page_number` of `total_pages`.
    ///
    /// Returns [`PaginationError::PageOutOfRange`] when `page_number` is
    /// outside `[1, total_pages]`; a page number of zero and a total of
    /// zero are both rejected.
    pub fn new(page_number: u32, total_pages: u32) -> Result<Self> {
        if page_number == 0 || page_number > total_pages {
            return Err(PaginationError::PageOutOfRange(page_number, total_pages));
        }
        Ok(Self {
            page_number,
            total_pages,
        })
    }

    /// The 1-based page number.
    pub fn page_number(self) -> u32 {
        self.page_number
    }

    /// The document's total page count.
    pub fn total_pages(self) -> u32 {
        self.total_pages
    }

    /// Whether this is the first page of the document.
    pub fn is_first(self) -> bool {
        self.page_number == 1
    }

    /// Whether this is the last page of the document.
    pub fn is_last(self) -> bool {
        self.page_number == self.total_pages
    }

    /// Whether the page number is even.
    pub fn is_even(self) -> bool {
        self.page_number % 2 == 0
    }
}

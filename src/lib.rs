//! # pagewise
//!
//! Pure pagination decisions for report generators: which header belongs on
//! which page, and where a too-wide table breaks into column pages.
//!
//! ## Features
//!
//! - **Header Scheduling**: Register header/footer content per page scope
//!   (first, last, even, odd, all) and resolve the one that applies to a page
//! - **Table Breaking**: Partition column widths into contiguous page groups
//!   that minimize the widest page
//! - **Page Ordering**: Emit a broken table's page grid down-then-right or
//!   right-then-down
//! - **Fit Scaling**: Compute the font scale that squeezes overflowing
//!   groups onto the paper
//! - **Deterministic**: Every decision is a pure function of its inputs, so
//!   layouts reproduce exactly across runs
//!
//! ## Quick Start
//!
//! ### Scheduling headers
//!
//! ```rust
//! use pagewise::{HeaderRegistry, HeaderScope, PageContext, Result};
//!
//! # fn main() -> Result<()> {
//! let mut headers = HeaderRegistry::new();
//! headers.set(HeaderScope::FirstPage, "Title Page");
//! headers.set(HeaderScope::AllPages, "Confidential");
//!
//! // Page 1 gets the dedicated first-page header.
//! assert_eq!(headers.resolve(PageContext::new(1, 9)?), Some(&"Title Page"));
//! // Every other page falls back to the all-pages one.
//! assert_eq!(headers.resolve(PageContext::new(5, 9)?), Some(&"Confidential"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Breaking a wide table
//!
//! ```rust
//! use pagewise::{split_columns, Result};
//!
//! # fn main() -> Result<()> {
//! let groups = split_columns(&[20.0, 30.0, 5.0, 50.0, 20.0], 3)?;
//!
//! let widths: Vec<f64> = groups.iter().map(|g| g.width()).collect();
//! assert_eq!(widths, vec![50.0, 55.0, 20.0]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`headers`] - Header/footer scopes, the registry, and per-page
//!   resolution
//! - [`table_breaking`] - Column partitioning, page ordering, and fit
//!   scaling
//! - [`error`] - Error types shared across the crate

pub mod error;
pub mod headers;
pub mod table_breaking;

// Re-export header scheduling types
pub use error::{PaginationError, Result};
pub use headers::{HeaderRegistry, HeaderScope, PageContext};

// Re-export table breaking types
pub use table_breaking::{scaling_to_fit, split_columns, ColumnBreaker, PageGroup, PageOrder};

/// Current version of pagewise
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports_compose() {
        let mut headers = HeaderRegistry::new();
        headers.set(HeaderScope::AllPages, "band");

        let groups = split_columns(&[10.0, 20.0], 2).unwrap();
        let pages = groups.len() as u32;

        for page in 1..=pages {
            let ctx = PageContext::new(page, pages).unwrap();
            assert_eq!(headers.resolve(ctx), Some(&"band"));
        }
    }
}

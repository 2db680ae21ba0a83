use thiserror::Error;

/// Errors reported by the pagination decision core.
///
/// Both decision functions are total over well-formed input, so every
/// variant here signals a caller contract violation, never a transient
/// condition. There is nothing to retry.
#[derive(Error, Debug)]
pub enum PaginationError {
    /// Page number outside `[1, total_pages]`
    #[error("Page number {0} out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),

    /// Column width that is negative, NaN or infinite
    #[error("Invalid column width at index {0}: {1} (widths must be non-negative and finite)")]
    InvalidColumnWidth(usize, f64),
}

pub type Result<T> = std::result::Result<T, PaginationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = PaginationError::PageOutOfRange(3, 2);
        assert_eq!(
            error.to_string(),
            "Page number 3 out of range (document has 2 pages)"
        );

        let error = PaginationError::InvalidColumnWidth(4, -12.5);
        assert_eq!(
            error.to_string(),
            "Invalid column width at index 4: -12.5 (widths must be non-negative and finite)"
        );
    }

    #[test]
    fn test_error_debug() {
        let error = PaginationError::PageOutOfRange(0, 1);
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("PageOutOfRange"));
    }

    #[test]
    fn test_types_send_sync() {
        // Ensure the error and public value types implement Send + Sync
        // for thread safety (the registry whenever its content does)
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PaginationError>();
        assert_send_sync::<crate::headers::HeaderRegistry<&'static str>>();
        assert_send_sync::<crate::headers::PageContext>();
        assert_send_sync::<crate::headers::HeaderScope>();
        assert_send_sync::<crate::table_breaking::PageGroup>();
        assert_send_sync::<crate::table_breaking::PageOrder>();
    }

    #[test]
    fn test_result_type() {
        let ok: Result<u32> = Ok(7);
        assert!(ok.is_ok());

        let err: Result<u32> = Err(PaginationError::PageOutOfRange(2, 1));
        assert!(err.is_err());
    }
}

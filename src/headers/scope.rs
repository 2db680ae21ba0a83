//! Header/footer scope definitions.

use std::fmt;

/// The set of pages a registered header or footer applies to.
///
/// Scopes form a closed set. When several scopes could match the same page
/// (page 1 of a one-page document is first, last and odd all at once), the
/// resolver in [`HeaderRegistry`](crate::headers::HeaderRegistry) weighs
/// them in a fixed precedence order (first page, then last page, then page
/// parity, then all pages) so a page never receives more than one content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderScope {
    /// Every page not claimed by a more specific scope
    AllPages,
    /// The first page of the document
    FirstPage,
    /// The last page of the document
    LastPage,
    /// The even pages: 2, 4, 6, ...
    EvenPages,
    /// The odd pages: 1 (unless a first-page content exists), 3, 5, ...
    OddPages,
}

impl HeaderScope {
    /// All scopes, in registry storage order.
    pub const ALL: [HeaderScope; 5] = [
        HeaderScope::AllPages,
        HeaderScope::FirstPage,
        HeaderScope::LastPage,
        HeaderScope::EvenPages,
        HeaderScope::OddPages,
    ];

    /// Storage slot for this scope inside a registry.
    pub(crate) fn slot(self) -> usize {
        match self {
            HeaderScope::AllPages => 0,
            HeaderScope::FirstPage => 1,
            HeaderScope::LastPage => 2,
            HeaderScope::EvenPages => 3,
            HeaderScope::OddPages => 4,
        }
    }
}

impl fmt::Display for HeaderScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeaderScope::AllPages => "all pages",
            HeaderScope::FirstPage => "first page",
            HeaderScope::LastPage => "last page",
            HeaderScope::EvenPages => "even pages",
            HeaderScope::OddPages => "odd pages",
        };
        f.write_str(name)
    }
}

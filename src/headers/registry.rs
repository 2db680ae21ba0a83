//! Registered header/footer contents and per-page resolution.

use tracing::trace;

use super::{HeaderScope, PageContext};
use crate::error::Result;

/// The header (or footer) contents a document has registered, keyed by
/// [`HeaderScope`].
///
/// The registry is a plain value object: the report builder fills it in
/// while the document is being described, hands it by shared reference to
/// the layout driver, and the driver queries it once per painted page. The
/// content type is opaque to the resolution logic; any handle the
/// surrounding engine uses for a laid-out band works.
///
/// Not every scope needs an entry. A page whose matching scopes are all
/// unregistered simply gets no header, which is a normal outcome, not an
/// error.
///
/// # Example
///
/// ```rust
/// use pagewise::{HeaderRegistry, HeaderScope, PageContext};
///
/// # fn main() -> pagewise::Result<()> {
/// let mut footers = HeaderRegistry::new();
/// footers.set(HeaderScope::EvenPages, "even footer");
/// footers.set(HeaderScope::OddPages, "odd footer");
///
/// assert_eq!(
///     footers.resolve(PageContext::new(2, 2)?),
///     Some(&"even footer")
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HeaderRegistry<C> {
    slots: [Option<C>; 5],
}

impl<C> HeaderRegistry<C> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: [None, None, None, None, None],
        }
    }

    /// Register `content` for `scope`, returning the content previously
    /// registered there, if any.
    pub fn set(&mut self, scope: HeaderScope, content: C) -> Option<C> {
        self.slots[scope.slot()].replace(content)
    }

    /// The content registered for exactly `scope`, if any.
    ///
    /// This is a plain lookup; it does not apply the per-page precedence
    /// rules. Use [`resolve`](Self::resolve) for those.
    pub fn get(&self, scope: HeaderScope) -> Option<&C> {
        self.slots[scope.slot()].as_ref()
    }

    /// Mutable access to the content registered for `scope`, if any.
    pub fn get_mut(&mut self, scope: HeaderScope) -> Option<&mut C> {
        self.slots[scope.slot()].as_mut()
    }

    /// The content registered for `scope`, inserting one first when the
    /// scope is still empty.
    ///
    /// This mirrors how a report builder typically works: asking for the
    /// first-page header creates it on first use, and later calls return
    /// the same instance for further additions.
    pub fn get_or_insert_with(
        &mut self,
        scope: HeaderScope,
        default: impl FnOnce() -> C,
    ) -> &mut C {
        self.slots[scope.slot()].get_or_insert_with(default)
    }

    /// Unregister and return the content for `scope`, if any.
    pub fn remove(&mut self, scope: HeaderScope) -> Option<C> {
        self.slots[scope.slot()].take()
    }

    /// Whether no scope has content registered.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of scopes with content registered.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// The scopes with content registered, in storage order.
    pub fn scopes(&self) -> impl Iterator<Item = HeaderScope> + '_ {
        self.iter().map(|(scope, _)| scope)
    }

    /// Registered `(scope, content)` pairs, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (HeaderScope, &C)> {
        HeaderScope::ALL
            .into_iter()
            .filter_map(|scope| self.get(scope).map(|content| (scope, content)))
    }

    /// The scope whose registered content applies to the page described by
    /// `ctx`, or `None` when no registered scope matches.
    ///
    /// Precedence, first match wins:
    /// 1. [`FirstPage`](HeaderScope::FirstPage) on page 1, even when page
    ///    1 is also the last page and even though page 1 is odd.
    /// 2. [`LastPage`](HeaderScope::LastPage) on the final page, even
    ///    when that page is even.
    /// 3. [`EvenPages`](HeaderScope::EvenPages) or
    ///    [`OddPages`](HeaderScope::OddPages), by page-number parity.
    /// 4. [`AllPages`](HeaderScope::AllPages) as the fallback.
    ///
    /// A scope only participates while content is registered for it: a
    /// missing first-page entry lets page 1 fall through to its parity
    /// scope, and a missing parity entry falls through to the all-pages
    /// one.
    pub fn resolve_scope(&self, ctx: PageContext) -> Option<HeaderScope> {
        if ctx.is_first() && self.get(HeaderScope::FirstPage).is_some() {
            return Some(HeaderScope::FirstPage);
        }
        if ctx.is_last() && self.get(HeaderScope::LastPage).is_some() {
            return Some(HeaderScope::LastPage);
        }
        let parity = if ctx.is_even() {
            HeaderScope::EvenPages
        } else {
            HeaderScope::OddPages
        };
        if self.get(parity).is_some() {
            return Some(parity);
        }
        if self.get(HeaderScope::AllPages).is_some() {
            return Some(HeaderScope::AllPages);
        }
        None
    }

    /// The content that applies to the page described by `ctx`, or `None`
    /// when no registered scope matches.
    ///
    /// See [`resolve_scope`](Self::resolve_scope) for the precedence
    /// rules. Resolution is a pure function of the registry state and the
    /// context: identical inputs always yield the identical entry.
    pub fn resolve(&self, ctx: PageContext) -> Option<&C> {
        let scope = self.resolve_scope(ctx);
        trace!(
            page = ctx.page_number(),
            total = ctx.total_pages(),
            scope = ?scope,
            "resolved header scope"
        );
        scope.and_then(|scope| self.get(scope))
    }

    /// [`resolve`](Self::resolve) for a raw `(page_number, total_pages)`
    /// pair, validating the pair first.
    ///
    /// Returns [`PaginationError::PageOutOfRange`] when `page_number` lies
    /// outside `[1, total_pages]`.
    ///
    /// [`PaginationError::PageOutOfRange`]: crate::PaginationError::PageOutOfRange
    pub fn resolve_for_page(&self, page_number: u32, total_pages: u32) -> Result<Option<&C>> {
        let ctx = PageContext::new(page_number, total_pages)?;
        Ok(self.resolve(ctx))
    }
}

impl<C: PartialEq> HeaderRegistry<C> {
    /// The scope `content` is registered under, if any.
    ///
    /// The reverse of [`get`](Self::get); report builders use it to move
    /// an existing header to a different scope.
    pub fn scope_of(&self, content: &C) -> Option<HeaderScope> {
        self.iter()
            .find(|(_, registered)| *registered == content)
            .map(|(scope, _)| scope)
    }
}

impl<C> Default for HeaderRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

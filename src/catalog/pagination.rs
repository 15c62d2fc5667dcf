//! Fixed-size pagination over an ordered collection.
//!
//! Pages are 1-indexed. An empty collection has zero pages while the current
//! page stays at 1, so the pager renders no buttons and nothing panics.

/// Page size observed in the catalog list.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 7;

/// One page of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

/// Number of pages needed for `len` items (`0` when `len` is `0`).
///
/// A zero page size yields zero pages.
#[must_use]
pub const fn total_pages(len: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    len.div_ceil(items_per_page)
}

/// Slices `items[(page-1)*ipp .. page*ipp]`, clipped to the collection.
///
/// Page `0` is treated as page `1`. Pages past the end produce an empty slice.
///
/// # Examples
///
/// ```
/// use canplayit::catalog::paginate;
///
/// let items: Vec<u32> = (0..20).collect();
/// let page = paginate(&items, 3, 7);
/// assert_eq!(page.items, &items[14..20]);
/// assert_eq!(page.total_pages, 3);
/// ```
#[must_use]
pub fn paginate<T>(items: &[T], current_page: usize, items_per_page: usize) -> Page<'_, T> {
    let total = total_pages(items.len(), items_per_page);
    let page = current_page.max(1);
    let start = (page - 1).saturating_mul(items_per_page).min(items.len());
    let end = page.saturating_mul(items_per_page).min(items.len());

    Page {
        items: &items[start..end],
        total_pages: total,
    }
}

/// Current page and page size of a paginated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    current_page: usize,
    items_per_page: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl PaginationState {
    /// Creates state positioned on page 1.
    ///
    /// A zero page size is bumped to 1; configuration rejects it earlier.
    #[must_use]
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    #[must_use]
    pub fn page<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        paginate(items, self.current_page, self.items_per_page)
    }

    /// Moves to `page`. Returns `false` when nothing changed.
    ///
    /// Selecting the active page, or a page outside `[1, total_pages]`, is a
    /// no-op.
    pub fn select_page(&mut self, page: usize, len: usize) -> bool {
        let total = total_pages(len, self.items_per_page);
        if page == self.current_page || page == 0 || page > total {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self, len: usize) -> bool {
        self.select_page(self.current_page + 1, len)
    }

    pub fn previous_page(&mut self, len: usize) -> bool {
        self.select_page(self.current_page.saturating_sub(1), len)
    }

    /// Keeps the current page inside `[1, max(total_pages, 1)]` after the
    /// underlying collection changed. Returns `true` when the page moved.
    pub fn clamp_to(&mut self, len: usize) -> bool {
        let last = total_pages(len, self.items_per_page).max(1);
        let clamped = self.current_page.clamp(1, last);
        let moved = clamped != self.current_page;
        if moved {
            tracing::debug!(from = self.current_page, to = clamped, len, "current page clamped");
        }
        self.current_page = clamped;
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_follow_ceiling_division() {
        for n in 0..50 {
            assert_eq!(total_pages(n, 7), (n + 6) / 7, "n = {n}");
        }
        assert_eq!(total_pages(10, 0), 0);
    }

    #[test]
    fn twenty_items_split_into_three_pages() {
        let items: Vec<usize> = (0..20).collect();
        assert_eq!(paginate(&items, 1, 7).items, &items[0..7]);
        assert_eq!(paginate(&items, 2, 7).items, &items[7..14]);

        let last = paginate(&items, 3, 7);
        assert_eq!(last.items, &items[14..20]);
        assert_eq!(last.items.len(), 6);
        assert_eq!(last.total_pages, 3);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let items: Vec<usize> = vec![];
        let state = PaginationState::default();
        let page = state.page(&items);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn out_of_range_page_is_empty_slice() {
        let items: Vec<usize> = (0..5).collect();
        assert!(paginate(&items, 4, 7).items.is_empty());
        assert_eq!(paginate(&items, 0, 7).items, &items[..]);
    }

    #[test]
    fn selecting_active_page_is_noop() {
        let mut state = PaginationState::new(7);
        assert!(!state.select_page(1, 20));
        assert!(state.select_page(3, 20));
        assert!(!state.select_page(3, 20));
        assert!(!state.select_page(4, 20));
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn next_and_previous_stay_in_bounds() {
        let mut state = PaginationState::new(7);
        assert!(!state.previous_page(20));
        assert!(state.next_page(20));
        assert!(state.next_page(20));
        assert!(!state.next_page(20));
        assert_eq!(state.current_page(), 3);
        assert!(state.previous_page(20));
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn clamp_after_collection_shrinks() {
        let mut state = PaginationState::new(7);
        state.select_page(3, 20);
        assert!(state.clamp_to(8));
        assert_eq!(state.current_page(), 2);
        assert!(state.clamp_to(0));
        assert_eq!(state.current_page(), 1);
        assert!(!state.clamp_to(0));
    }
}

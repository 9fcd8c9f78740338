//! Client-side pagination over a caller-owned slice.
//!
//! The paginator only borrows the collection. List views hand it a new
//! slice through [`Paginator::set_items`] whenever their data changes; a
//! change in length sends the view back to page 1.

use serde::Serialize;
use tracing::debug;

use crate::config::{PaginationConfig, DEFAULT_ITEMS_PER_PAGE};
use crate::support::{DomainError, DomainResult};

#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    items: &'a [T],
    current_page: usize,
    items_per_page: usize,
}

/// Snapshot of the current page, ready for a list view to render
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub items_per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
    pub display_start: usize,
    pub display_end: usize,
}

impl<'a, T> Paginator<'a, T> {
    pub fn new(items: &'a [T], items_per_page: usize) -> DomainResult<Self> {
        if items_per_page == 0 {
            return Err(DomainError::InvalidConfiguration(
                "items_per_page must be >= 1".to_string(),
            ));
        }
        Ok(Self {
            items,
            current_page: 1,
            items_per_page,
        })
    }

    pub fn with_default_page_size(items: &'a [T]) -> Self {
        Self {
            items,
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }

    pub fn from_config(items: &'a [T], config: &PaginationConfig) -> DomainResult<Self> {
        Self::new(items, config.items_per_page)
    }

    /// Swap in the latest collection. Returns `true` when the page was reset.
    ///
    /// Only the length is compared: a same-length replacement keeps the
    /// current page even if every item differs.
    pub fn set_items(&mut self, items: &'a [T]) -> bool {
        let reset = items.len() != self.items.len();
        self.items = items;
        if reset {
            debug!(
                total_items = items.len(),
                "collection length changed, back to page 1"
            );
            self.current_page = 1;
        }
        reset
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.items_per_page)
    }

    /// Items on the current page, in collection order.
    pub fn current_page_items(&self) -> &'a [T] {
        let start = (self.current_page - 1) * self.items_per_page;
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.items_per_page).min(self.items.len());
        &self.items[start..end]
    }

    /// Jump to `page`. Pages outside `1..=total_pages` are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            debug!(
                page,
                total_pages = self.total_pages(),
                "ignoring out-of-range page"
            );
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn go_to_next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn go_to_prev_page(&mut self) -> bool {
        // current_page >= 1, so 0 is the natural no-op target on page 1
        self.go_to_page(self.current_page - 1)
    }

    pub fn go_to_first_page(&mut self) -> bool {
        self.go_to_page(1)
    }

    pub fn go_to_last_page(&mut self) -> bool {
        self.go_to_page(self.total_pages())
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 1
    }

    /// An empty collection counts as being on its last page.
    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages()
    }

    /// 1-based position of the first visible item, 0 when nothing is visible.
    pub fn display_start_index(&self) -> usize {
        if self.current_page_items().is_empty() {
            return 0;
        }
        (self.current_page - 1) * self.items_per_page + 1
    }

    /// 1-based position of the last visible item, clamped to the collection size.
    pub fn display_end_index(&self) -> usize {
        (self.current_page * self.items_per_page).min(self.items.len())
    }

    pub fn page(&self) -> PageView<'a, T> {
        PageView {
            items: self.current_page_items(),
            page: self.current_page,
            items_per_page: self.items_per_page,
            total_items: self.total_items(),
            total_pages: self.total_pages(),
            has_next: self.has_next_page(),
            has_prev: self.has_prev_page(),
            display_start: self.display_start_index(),
            display_end: self.display_end_index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_to(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    #[test]
    fn walks_twelve_items_in_pages_of_five() {
        let data = one_to(12);
        let mut p = Paginator::new(&data, 5).unwrap();

        assert_eq!(p.current_page_items(), &[1, 2, 3, 4, 5]);
        assert!(p.go_to_next_page());
        assert_eq!(p.current_page_items(), &[6, 7, 8, 9, 10]);
        assert!(p.go_to_next_page());
        assert_eq!(p.current_page_items(), &[11, 12]);
        assert!(p.go_to_prev_page());
        assert_eq!(p.current_page_items(), &[6, 7, 8, 9, 10]);
    }

    #[test]
    fn zero_page_size_is_invalid_configuration() {
        let data = one_to(3);
        let err = Paginator::new(&data, 0).unwrap_err();
        assert!(matches!(err, DomainError::InvalidConfiguration(_)));
    }

    #[test]
    fn default_page_size_is_ten() {
        let data = one_to(25);
        let p = Paginator::with_default_page_size(&data);
        assert_eq!(p.items_per_page(), 10);
        assert_eq!(p.total_pages(), 3);
    }

    #[test]
    fn pages_cover_collection_exactly_once() {
        for len in 0..=23u32 {
            for per_page in 1..=7usize {
                let data = one_to(len);
                let mut p = Paginator::new(&data, per_page).unwrap();
                assert_eq!(p.total_pages(), (len as usize).div_ceil(per_page));

                let mut seen = Vec::new();
                for page in 1..=p.total_pages() {
                    assert!(p.go_to_page(page));
                    seen.extend_from_slice(p.current_page_items());
                }
                assert_eq!(seen, data, "len={len} per_page={per_page}");
            }
        }
    }

    #[test]
    fn out_of_range_pages_are_ignored() {
        let data = one_to(12);
        let mut p = Paginator::new(&data, 5).unwrap();
        assert!(p.go_to_page(2));

        assert!(!p.go_to_page(0));
        assert_eq!(p.current_page(), 2);
        assert!(!p.go_to_page(4));
        assert_eq!(p.current_page(), 2);

        assert!(p.go_to_page(2));
        assert!(p.go_to_page(2));
        assert_eq!(p.current_page(), 2);
    }

    #[test]
    fn boundary_navigation_is_a_no_op() {
        let data = one_to(12);
        let mut p = Paginator::new(&data, 5).unwrap();
        assert!(!p.go_to_prev_page());
        assert_eq!(p.current_page(), 1);

        assert!(p.go_to_last_page());
        assert_eq!(p.current_page(), 3);
        assert!(!p.go_to_next_page());
        assert_eq!(p.current_page(), 3);

        assert!(p.go_to_first_page());
        assert_eq!(p.current_page(), 1);
    }

    #[test]
    fn derived_flags_and_display_range() {
        let data = one_to(12);
        let mut p = Paginator::new(&data, 5).unwrap();
        assert!(p.is_first_page());
        assert!(!p.is_last_page());
        assert!(p.has_next_page());
        assert!(!p.has_prev_page());
        assert_eq!((p.display_start_index(), p.display_end_index()), (1, 5));

        p.go_to_last_page();
        assert!(p.is_last_page());
        assert!(!p.has_next_page());
        assert!(p.has_prev_page());
        assert_eq!((p.display_start_index(), p.display_end_index()), (11, 12));
    }

    #[test]
    fn empty_collection() {
        let data: Vec<u32> = Vec::new();
        let mut p = Paginator::new(&data, 5).unwrap();
        assert_eq!(p.total_pages(), 0);
        assert_eq!(p.current_page(), 1);
        assert!(p.current_page_items().is_empty());
        assert!(!p.go_to_last_page());
        assert!(!p.go_to_page(1));
        assert_eq!(p.current_page(), 1);
        assert!(!p.has_next_page());
        assert!(p.is_last_page());
        assert_eq!((p.display_start_index(), p.display_end_index()), (0, 0));
    }

    #[test]
    fn length_change_resets_to_first_page() {
        let first = one_to(12);
        let grown = one_to(13);
        let shrunk = one_to(11);
        let mut p = Paginator::new(&first, 5).unwrap();
        p.go_to_last_page();

        assert!(p.set_items(&grown));
        assert_eq!(p.current_page(), 1);

        p.go_to_page(3);
        assert!(p.set_items(&shrunk));
        assert_eq!(p.current_page(), 1);
        assert_eq!(p.total_items(), 11);
    }

    #[test]
    fn same_length_replacement_keeps_page() {
        // Known gap: only the length is compared, so different content of
        // equal size stays on the current page.
        let first = one_to(12);
        let replaced: Vec<u32> = (101..=112).collect();
        let mut p = Paginator::new(&first, 5).unwrap();
        p.go_to_page(2);

        assert!(!p.set_items(&replaced));
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.current_page_items(), &[106, 107, 108, 109, 110]);
    }

    #[test]
    fn page_view_serializes_for_list_views() {
        let data = one_to(7);
        let mut p = Paginator::new(&data, 3).unwrap();
        p.go_to_next_page();

        let json = serde_json::to_value(p.page()).unwrap();
        assert_eq!(json["items"], serde_json::json!([4, 5, 6]));
        assert_eq!(json["page"], 2);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["hasNext"], true);
        assert_eq!(json["displayStart"], 4);
        assert_eq!(json["displayEnd"], 6);
    }

    #[test]
    fn from_config_uses_configured_page_size() {
        let data = one_to(30);
        let cfg = PaginationConfig { items_per_page: 4 };
        let p = Paginator::from_config(&data, &cfg).unwrap();
        assert_eq!(p.total_pages(), 8);
    }
}

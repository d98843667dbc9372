use crate::error::{AppError, DisplayError};

/// Rows per page used by record tables unless a screen overrides it
pub const DEFAULT_ITEMS_PER_PAGE: usize = 5;

/// Pages on each side of the current page that are always rendered
pub const PAGE_WINDOW_RADIUS: usize = 1;

/// One entry of the page selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Result of laying out one page of a collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// Current page after clamping into `1..=total_pages` (1-based)
    pub current_page: usize,
    pub total_pages: usize,
    /// Index of the first item on the page
    pub window_start: usize,
    /// One past the last item index; may exceed the collection length
    pub window_end: usize,
    pub markers: Vec<PageMarker>,
}

impl PageLayout {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Get data slice for display, clamped to the collection
    pub fn slice<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        let start = self.window_start.min(data.len());
        let end = self.window_end.min(data.len());
        &data[start..end]
    }
}

/// Number of pages needed for `total_items`; an empty collection still has one page.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1)).max(1)
}

/// Lay out `current_page` (1-based) of a collection with `total_items` entries.
///
/// Out-of-range pages are clamped, so a collection that shrank after filtering
/// lands on its last page instead of an empty one. A page size of zero is
/// treated as one.
pub fn paginate(total_items: usize, items_per_page: usize, current_page: usize) -> PageLayout {
    let items_per_page = items_per_page.max(1);
    let total_pages = total_pages(total_items, items_per_page);
    let current_page = current_page.clamp(1, total_pages);
    let window_start = (current_page - 1) * items_per_page;

    PageLayout {
        current_page,
        total_pages,
        window_start,
        window_end: window_start + items_per_page,
        markers: page_markers(current_page, total_pages),
    }
}

/// Build the page selector: first and last page, pages next to the current
/// one, and an ellipsis two pages away from the current page when that spot
/// lies strictly between the first and last page.
///
/// `total = 12, current = 6` gives `1 … 5 6 7 … 12`.
pub fn page_markers(current_page: usize, total_pages: usize) -> Vec<PageMarker> {
    let ellipsis_distance = PAGE_WINDOW_RADIUS + 1;
    let low = current_page.saturating_sub(ellipsis_distance).max(1);
    let high = (current_page + ellipsis_distance).min(total_pages);

    let mut candidates: Vec<usize> = (low..=high).collect();
    candidates.push(1);
    candidates.push(total_pages);
    candidates.sort_unstable();
    candidates.dedup();

    candidates
        .into_iter()
        .filter_map(|page| {
            let is_near = page.abs_diff(current_page) <= PAGE_WINDOW_RADIUS;
            if is_near || page == 1 || page == total_pages {
                Some(PageMarker::Page(page))
            } else if page.abs_diff(current_page) == ellipsis_distance
                && page > 1
                && page < total_pages
            {
                Some(PageMarker::Ellipsis)
            } else {
                None
            }
        })
        .collect()
}

/// Pagination cursor of one record table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
}

impl Pagination {
    /// Create a cursor on page 1
    pub fn new(items_per_page: usize, total_items: usize) -> Result<Self, AppError> {
        if items_per_page == 0 {
            return Err(AppError::Display(DisplayError::Pagination(
                "Page size must be greater than 0".to_string(),
            )));
        }

        Ok(Self {
            current_page: 1,
            items_per_page,
            total_items,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }

    /// Update the collection size, pulling the cursor back onto the last page if needed
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = self.current_page.min(self.total_pages());
    }

    /// Jump to `page`, clamped into range. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = page.clamp(1, self.total_pages());
        let changed = target != self.current_page;
        self.current_page = target;
        changed
    }

    /// Move to next page
    pub fn next_page(&mut self) -> bool {
        if self.current_page >= self.total_pages() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Move to previous page
    pub fn previous_page(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn layout(&self) -> PageLayout {
        paginate(self.total_items, self.items_per_page, self.current_page)
    }

    /// Generate pagination information string
    pub fn info(&self) -> String {
        if self.total_items == 0 {
            return "No records found".to_string();
        }

        let layout = self.layout();
        let end_item = layout.window_end.min(self.total_items);
        format!(
            "Showing {}-{} of {} records (Page {} of {})",
            layout.window_start + 1,
            end_item,
            self.total_items,
            layout.current_page,
            layout.total_pages
        )
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            total_items: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    #[test]
    fn test_total_pages_formula() {
        for per_page in 1..=7 {
            for total in 0..=40 {
                let expected = if total == 0 {
                    1
                } else {
                    (total + per_page - 1) / per_page
                };
                assert_eq!(total_pages(total, per_page), expected, "{total}/{per_page}");
            }
        }
    }

    #[test]
    fn test_visible_row_count_per_page() {
        let data: Vec<usize> = (0..23).collect();
        let per_page = 5;
        let pages = total_pages(data.len(), per_page);
        for page in 1..=pages {
            let layout = paginate(data.len(), per_page, page);
            let expected = per_page.min(data.len() - (page - 1) * per_page);
            assert_eq!(layout.slice(&data).len(), expected);
            assert!(!layout.slice(&data).is_empty());
        }

        let empty: Vec<usize> = Vec::new();
        assert!(paginate(0, per_page, 1).slice(&empty).is_empty());
    }

    #[test]
    fn test_page_window_with_ellipsis() {
        let layout = paginate(60, 5, 6);
        assert_eq!(layout.total_pages, 12);
        assert_eq!(
            layout.markers,
            vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(12)]
        );
    }

    #[test]
    fn test_page_window_edges() {
        assert_eq!(page_markers(1, 12), vec![Page(1), Page(2), Ellipsis, Page(12)]);
        assert_eq!(
            page_markers(12, 12),
            vec![Page(1), Ellipsis, Page(11), Page(12)]
        );
        assert_eq!(
            page_markers(3, 12),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(12)]
        );
        // A single skipped page is shown as an ellipsis, not as its number
        assert_eq!(
            page_markers(4, 12),
            vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Ellipsis, Page(12)]
        );
        assert_eq!(page_markers(1, 1), vec![Page(1)]);
        assert_eq!(page_markers(2, 3), vec![Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_empty_collection_has_one_disabled_page() {
        let layout = paginate(0, 5, 1);
        assert_eq!(layout.total_pages, 1);
        assert_eq!(layout.markers, vec![Page(1)]);
        assert!(!layout.has_previous());
        assert!(!layout.has_next());
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let layout = paginate(7, 5, 9);
        assert_eq!(layout.current_page, 2);
        assert_eq!(layout.window_start, 5);

        let layout = paginate(7, 5, 0);
        assert_eq!(layout.current_page, 1);
    }

    #[test]
    fn test_pagination_navigation() {
        let mut pagination = Pagination::new(5, 12).expect("valid page size");
        assert_eq!(pagination.total_pages(), 3);
        assert!(!pagination.previous_page());
        assert!(pagination.next_page());
        assert!(pagination.next_page());
        assert!(!pagination.next_page());
        assert_eq!(pagination.current_page(), 3);
        assert_eq!(pagination.info(), "Showing 11-12 of 12 records (Page 3 of 3)");

        assert!(pagination.go_to(1));
        assert!(!pagination.go_to(1));
        assert!(pagination.go_to(99));
        assert_eq!(pagination.current_page(), 3);
    }

    #[test]
    fn test_shrinking_collection_clamps_cursor() {
        let mut pagination = Pagination::new(5, 30).expect("valid page size");
        pagination.go_to(6);
        pagination.set_total_items(4);
        assert_eq!(pagination.current_page(), 1);
        assert_eq!(pagination.info(), "Showing 1-4 of 4 records (Page 1 of 1)");

        pagination.set_total_items(0);
        assert_eq!(pagination.info(), "No records found");
    }

    #[test]
    fn test_invalid_page_size() {
        assert!(Pagination::new(0, 100).is_err());
    }
}

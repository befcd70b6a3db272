//! History pagination.

use serde::Serialize;

/// Page cursor over the prediction history. Pages are 1-based and the
/// current page always lies within `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    current_page: u32,
    total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl Pagination {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        let mut pagination = Self::default();
        pagination.set_total_pages(total_pages);
        pagination.go_to(current_page);
        pagination
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Jumps to `page`, clamped into range.
    pub fn go_to(&mut self, page: u32) {
        self.current_page = page.clamp(1, self.total_pages);
    }

    pub fn next(&mut self) {
        self.go_to(self.current_page.saturating_add(1));
    }

    pub fn previous(&mut self) {
        self.go_to(self.current_page.saturating_sub(1));
    }

    /// Updates the page count reported by the server. Zero is treated as one.
    pub fn set_total_pages(&mut self, total_pages: u32) {
        self.total_pages = total_pages.max(1);
        self.go_to(self.current_page);
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}

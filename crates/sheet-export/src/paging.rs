// File: crates/sheet-export/src/paging.rs
// Summary: Page cursor for the project list.

pub const PAGE_SIZE: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self { page: 1, page_size: PAGE_SIZE, total: 0 }
    }
}

impl Pager {
    /// Always at least one page, even when `total` is zero.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size.max(1)).max(1)
    }

    pub fn has_prev(&self) -> bool { self.page > 1 }
    pub fn has_next(&self) -> bool { self.page < self.total_pages() }

    /// Step forward; returns whether the page changed.
    pub fn next(&mut self) -> bool {
        if !self.has_next() { return false; }
        self.page += 1;
        true
    }

    pub fn prev(&mut self) -> bool {
        if !self.has_prev() { return false; }
        self.page -= 1;
        true
    }

    pub fn reset(&mut self) { self.page = 1; }

    /// Adopt the paging fields echoed by the list endpoint; zero means "keep".
    pub fn update(&mut self, total: usize, page: usize, page_size: usize) {
        self.total = total;
        if page > 0 { self.page = page; }
        self.page_size = if page_size > 0 { page_size } else { PAGE_SIZE };
    }
}

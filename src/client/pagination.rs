use crate::constants::RESULTS_PAGE_SIZE;

/// Client-side paging over a result list. Pages are 1-indexed.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    page: usize,
}

impl<T> Paginator<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self::with_page_size(items, RESULTS_PAGE_SIZE)
    }

    pub fn with_page_size(items: Vec<T>, page_size: usize) -> Self {
        Paginator {
            items,
            page_size: page_size.max(1),
            page: 1,
        }
    }

    /// Swap in a new result set and go back to the first page.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.page = 1;
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    /// `ceil(total / size)`, never less than 1.
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Move to `page`, clamped into `1..=total_pages`. Returns the page landed on.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.total_pages());
        self.page
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.page + 1)
    }

    pub fn prev_page(&mut self) -> usize {
        self.set_page(self.page.saturating_sub(1))
    }

    /// Items `[(page-1)*size, page*size)`, cut short at the end of the list.
    pub fn current(&self) -> &[T] {
        let start = ((self.page - 1) * self.page_size).min(self.items.len());
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Zero-based index of the first item on the current page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }
}

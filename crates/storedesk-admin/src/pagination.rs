//! Pagination for list views.
//!
//! [`Paginator`] borrows a slice of rows and splits it into 1-indexed
//! [`Page`]s. [`Paginator::get_page`] never fails: out-of-range numbers are
//! clamped, which is what a list view wants for a user-supplied `--page`.
//!
//! ```
//! use storedesk_admin::pagination::Paginator;
//!
//! let rows: Vec<u32> = (1..=23).collect();
//! let paginator = Paginator::new(&rows, 10);
//! assert_eq!(paginator.num_pages(), 3);
//!
//! let last = paginator.get_page(99);
//! assert_eq!(last.number(), 3);
//! assert_eq!(last.rows(), &[21, 22, 23]);
//! ```

use thiserror::Error;

/// Errors from strict page lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The page is past the last page.
    #[error("page {0} contains no results")]
    EmptyPage(usize),
    /// Page numbers start at 1.
    #[error("invalid page: page numbers start at 1")]
    InvalidPage,
}

/// One entry of an elided page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// A page number.
    Number(usize),
    /// A gap between page numbers.
    Ellipsis,
}

/// Splits borrowed rows into pages.
#[derive(Debug, Clone)]
pub struct Paginator<'a, T> {
    rows: &'a [T],
    per_page: usize,
}

impl<'a, T> Paginator<'a, T> {
    /// Creates a paginator. A `per_page` of zero is treated as one.
    pub fn new(rows: &'a [T], per_page: usize) -> Self {
        Self {
            rows,
            per_page: per_page.max(1),
        }
    }

    /// Returns the total number of rows.
    pub const fn count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the rows per page.
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    /// Returns the number of pages. An empty row set still has one page.
    pub const fn num_pages(&self) -> usize {
        if self.rows.is_empty() {
            return 1;
        }
        self.rows.len().div_ceil(self.per_page)
    }

    /// Returns page `number`.
    ///
    /// # Errors
    ///
    /// [`PaginationError::InvalidPage`] for zero and
    /// [`PaginationError::EmptyPage`] past the last page.
    pub fn page(&self, number: usize) -> Result<Page<'a, T>, PaginationError> {
        if number == 0 {
            return Err(PaginationError::InvalidPage);
        }
        let num_pages = self.num_pages();
        if number > num_pages {
            return Err(PaginationError::EmptyPage(number));
        }
        let start = (number - 1) * self.per_page;
        let end = (start + self.per_page).min(self.count());
        Ok(Page {
            rows: &self.rows[start..end],
            number,
            num_pages,
            per_page: self.per_page,
        })
    }

    /// Returns page `number`, clamped into `1..=num_pages`.
    pub fn get_page(&self, number: usize) -> Page<'a, T> {
        let target = number.clamp(1, self.num_pages().max(1));
        self.page(target).unwrap_or(Page {
            rows: &[],
            number: target,
            num_pages: self.num_pages(),
            per_page: self.per_page,
        })
    }

    /// Returns page links around `number` with gaps elided.
    ///
    /// Keeps `on_each_side` pages around the current one and `on_ends` pages
    /// at each end.
    pub fn elided_page_range(&self, number: usize, on_each_side: usize, on_ends: usize) -> Vec<PageLink> {
        let num_pages = self.num_pages().max(1);
        if num_pages <= 2 * (on_each_side + on_ends) + 2 {
            return (1..=num_pages).map(PageLink::Number).collect();
        }
        let number = number.clamp(1, num_pages);
        let window_start = number.saturating_sub(on_each_side).max(1);
        let window_end = (number + on_each_side).min(num_pages);
        let tail_start = num_pages - on_ends + 1;

        let mut links = Vec::new();
        let mut last = 0;
        let keep = (1..=on_ends)
            .chain(window_start..=window_end)
            .chain(tail_start..=num_pages);
        for page in keep {
            if page <= last {
                continue;
            }
            if page > last + 1 {
                links.push(PageLink::Ellipsis);
            }
            links.push(PageLink::Number(page));
            last = page;
        }
        links
    }
}

/// One page of rows.
#[derive(Debug, Clone)]
pub struct Page<'a, T> {
    rows: &'a [T],
    number: usize,
    num_pages: usize,
    per_page: usize,
}

impl<'a, T> Page<'a, T> {
    /// Returns the rows on this page.
    pub const fn rows(&self) -> &'a [T] {
        self.rows
    }

    /// Returns the 1-based page number.
    pub const fn number(&self) -> usize {
        self.number
    }

    /// Returns the total number of pages.
    pub const fn num_pages(&self) -> usize {
        self.num_pages
    }

    /// Returns `true` if a later page exists.
    pub const fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    /// Returns `true` if an earlier page exists.
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Returns the 1-based index of the first row, or 0 for an empty page.
    pub const fn start_index(&self) -> usize {
        if self.rows.is_empty() {
            return 0;
        }
        (self.number - 1) * self.per_page + 1
    }

    /// Returns the 1-based index of the last row, or 0 for an empty page.
    pub const fn end_index(&self) -> usize {
        if self.rows.is_empty() {
            return 0;
        }
        self.start_index() + self.rows.len() - 1
    }
}

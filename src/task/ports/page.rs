//! Offset pagination shared by the repository and the REST resource.

/// Zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u32,
    /// Maximum number of items per page.
    pub size: u32,
}

impl PageRequest {
    /// Creates a page request.
    #[must_use]
    pub const fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    /// Returns the number of items preceding this page.
    #[must_use]
    pub fn offset(self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// One page of results together with the total item count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// The request that produced the page.
    pub request: PageRequest,
    /// Number of items across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Creates a page.
    #[must_use]
    pub const fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            request,
            total,
        }
    }

    /// Returns the total number of pages; an empty result still has one.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.request.size == 0 {
            return 1;
        }
        self.total.div_ceil(u64::from(self.request.size)).max(1)
    }

    /// Returns `true` when a later page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.request.page) + 1 < self.total_pages()
    }

    /// Returns `true` when an earlier page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.request.page > 0
    }

    /// Maps the items, keeping the paging metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            request: self.request,
            total: self.total,
        }
    }
}

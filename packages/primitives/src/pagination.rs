use std::ops::Range;

use derive_more::Constructor;

/// A struct to keep information about the page when results are being paginated
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Constructor)]
pub struct Pagination {
    /// The number of leading items to skip. Starts at 0.
    pub offset: usize,
    /// Page size. The maximum number of results per page. Without a limit
    /// the page runs to the end of the collection.
    pub limit: Option<usize>,
}

impl Pagination {
    /// The positions this page selects in a collection of `total` items.
    ///
    /// An offset past the end yields an empty range anchored at `total`.
    #[must_use]
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = self.offset.min(total);

        let end = match self.limit {
            Some(limit) => start.saturating_add(limit).min(total),
            None => total,
        };

        start..end
    }

    /// The page right before this one, if the current page does not start at
    /// the beginning of the collection.
    ///
    /// The previous offset is `max(0, offset - limit)`, or `0` when there is
    /// no limit.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        if self.offset == 0 {
            return None;
        }

        let offset = match self.limit {
            Some(limit) => self.offset.saturating_sub(limit),
            None => 0,
        };

        Some(Self {
            offset,
            limit: self.limit,
        })
    }

    /// The page right after this one, given that this page returned
    /// `returned` items out of `total`.
    ///
    /// It starts where the returned items end, which is `offset + limit`
    /// whenever a following page exists.
    #[must_use]
    pub fn next(&self, returned: usize, total: usize) -> Option<Self> {
        let end = self.offset.saturating_add(returned);

        if end >= total {
            return None;
        }

        Some(Self {
            offset: end,
            limit: self.limit,
        })
    }
}

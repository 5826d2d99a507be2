//! Page envelope returned by paginated listings.

use serde::Serialize;

use crate::listing::PageRequest;

/// One page of results plus the numbers a client needs to render pagination
/// controls.
///
/// `from` / `to` are the 1-based positions of the first and last item on
/// this page within the whole result set; both are `None` for an empty page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub per_page: i64,
    pub current_page: i64,
    pub last_page: i64,
    pub from: Option<i64>,
    pub to: Option<i64>,
}

impl<T> Page<T> {
    /// Assemble a page from the rows fetched for `request` and the total
    /// number of matching rows.
    pub fn new(data: Vec<T>, total: i64, request: &PageRequest) -> Self {
        let per_page = request.per_page();
        let total = total.max(0);
        let last_page = last_page(total, per_page);

        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            let first = request.offset().saturating_add(1);
            let last = request.offset().saturating_add(data.len() as i64);
            (Some(first), Some(last))
        };

        Self {
            data,
            total,
            per_page,
            current_page: request.page(),
            last_page,
            from,
            to,
        }
    }

    /// Transform every item while keeping the pagination numbers.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            per_page: self.per_page,
            current_page: self.current_page,
            last_page: self.last_page,
            from: self.from,
            to: self.to,
        }
    }
}

/// Index of the last page; an empty result set still has one (empty) page.
pub fn last_page(total: i64, per_page: i64) -> i64 {
    if total <= 0 || per_page <= 0 {
        return 1;
    }
    (total + per_page - 1) / per_page
}

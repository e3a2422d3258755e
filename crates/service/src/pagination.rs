//! Pagination utilities for list endpoints
//!
//! Every paginated list counts all matches first. An empty match set is a
//! not-found condition; a page past the end is an empty `data` with the real
//! `total`.

use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, QuerySelect, Select};
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

pub const DEFAULT_LIMIT: u64 = 100;

/// OFFSET/LIMIT are bound as signed 64-bit integers.
pub const MAX_ROWS: u64 = i64::MAX as u64;

/// Offset-based pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// matching rows to omit from the front
    pub skip: u64,
    /// maximum rows returned
    pub limit: u64,
}

impl Pagination {
    pub fn new(skip: Option<u64>, limit: Option<u64>) -> Self {
        Self { skip: skip.unwrap_or(0), limit: limit.unwrap_or(DEFAULT_LIMIT) }.clamped()
    }

    /// Both values capped at `MAX_ROWS`; a larger skip is past the end anyway.
    pub fn clamped(self) -> Self {
        Self { skip: self.skip.min(MAX_ROWS), limit: self.limit.min(MAX_ROWS) }
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}

/// `{total, data}` list envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub total: u64,
    pub data: Vec<T>,
}

impl<T> Page<T> {
    pub fn with_data<U>(self, data: Vec<U>) -> Page<U> {
        Page { total: self.total, data }
    }
}

/// Count `select`, then fetch one page of it.
pub async fn fetch_page<C, E, F>(
    db: &C,
    select: Select<E>,
    opts: Pagination,
    not_found: F,
) -> Result<Page<E::Model>, ServiceError>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Send + Sync + 'static,
    F: FnOnce() -> ServiceError,
{
    let total = select.clone().count(db).await?;
    if total == 0 {
        return Err(not_found());
    }
    let opts = opts.clamped();
    let data = select.offset(opts.skip).limit(opts.limit).all(db).await?;
    Ok(Page { total, data })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_use_defaults() {
        let p = Pagination::new(None, None);
        assert_eq!(p, Pagination { skip: 0, limit: 100 });
        assert_eq!(p, Pagination::default());
    }

    #[test]
    fn explicit_values_are_kept() {
        let p = Pagination::new(Some(20), Some(5));
        assert_eq!(p.skip, 20);
        assert_eq!(p.limit, 5);
    }

    #[test]
    fn oversized_values_are_capped() {
        let p = Pagination::new(Some(u64::MAX), Some(u64::MAX));
        assert_eq!(p, Pagination { skip: MAX_ROWS, limit: MAX_ROWS });

        let raw = Pagination { skip: u64::MAX, limit: 5 };
        assert_eq!(raw.clamped(), Pagination { skip: MAX_ROWS, limit: 5 });
    }

    #[test]
    fn with_data_keeps_total() {
        let page = Page { total: 7, data: vec![1, 2] };
        let mapped = page.with_data(vec!["a", "b"]);
        assert_eq!(mapped.total, 7);
        assert_eq!(mapped.data, vec!["a", "b"]);
    }
}

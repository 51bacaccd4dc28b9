// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Page number used when the client supplies none or an invalid one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the client supplies none or an invalid one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size served. Larger requests are clamped to it.
pub const MAX_LIMIT: u32 = 1000;

/// A normalized pagination request.
///
/// Both values are always at least 1 and `limit` never exceeds
/// [`MAX_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Creates a page request, replacing missing or non-positive values
    /// with the defaults and clamping the page size to [`MAX_LIMIT`].
    #[must_use]
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let normalize = |value: Option<i64>, default: u32| -> u32 {
            value
                .filter(|v| *v > 0)
                .and_then(|v| v.to_u32())
                .unwrap_or(default)
        };

        Self {
            page: normalize(page, DEFAULT_PAGE),
            limit: normalize(limit, DEFAULT_LIMIT).min(MAX_LIMIT),
        }
    }

    /// Creates a page request from raw query-string values.
    ///
    /// Unparsable values fall back to the defaults.
    #[must_use]
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |value: Option<&str>| value.and_then(|v| v.trim().parse::<i64>().ok());
        Self::new(parse(page), parse(limit))
    }

    /// The 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// The maximum number of rows on a page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// The number of rows to skip before this page.
    ///
    /// Saturates instead of overflowing for absurd page numbers; such a
    /// page is simply empty.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1).saturating_mul(i64::from(self.limit))
    }

    /// The number of the last page for a result set of `total` rows.
    ///
    /// An empty result set has a last page of 0.
    #[must_use]
    pub fn last_page(&self, total: i64) -> u64 {
        total.to_u64().unwrap_or(0).div_ceil(u64::from(self.limit))
    }
}

/// One page of a listing, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The rows on this page.
    pub data: Vec<T>,
    /// The number of rows across all pages.
    pub total: i64,
    /// The 1-based page number.
    pub page: u32,
    /// The number of the last page.
    pub last_page: u64,
}

impl<T> Page<T> {
    /// Assembles a page from a query result.
    #[must_use]
    pub fn new(data: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            data,
            total,
            page: request.page(),
            last_page: request.last_page(total),
        }
    }

    /// Converts every row on the page, keeping the page metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            last_page: self.last_page,
        }
    }
}

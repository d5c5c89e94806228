//! Client-side search and pagination over already-fetched lists.
//!
//! The remote bookkeeping API returns whole collections; filtering is a
//! synchronous in-memory pass (no debouncing, no server-side search), and
//! pagination is a window over the filtered result.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: i32 = 25;
pub const MAX_PAGE_SIZE: i32 = 100;

/// A resource that can be matched against a free-text search needle.
pub trait Searchable {
    /// Case-insensitive substring match; `needle` is already lowercased.
    fn matches(&self, needle: &str) -> bool;
}

/// Query parameters shared by every list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub page: Option<i32>,
    pub page_size: Option<i32>,
}

/// Paginated response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i32,
    pub page_size: i32,
    pub total_pages: i32,
}

/// Filter `items` by `params.q`, then window to the requested page.
///
/// Pages are 1-based; out-of-range pages return an empty item list with the
/// correct totals rather than an error.
pub fn filter_and_paginate<T: Searchable>(items: Vec<T>, params: &ListParams) -> Page<T> {
    let filtered: Vec<T> = match params.q.as_deref().map(str::trim) {
        Some(q) if !q.is_empty() => {
            let needle = q.to_lowercase();
            items.into_iter().filter(|i| i.matches(&needle)).collect()
        }
        _ => items,
    };

    let page_size = params
        .page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);
    let page = params.page.unwrap_or(1).max(1);

    let total = filtered.len() as i64;
    let total_pages = ((total + page_size as i64 - 1) / page_size as i64) as i32;

    let offset = (page as usize - 1).saturating_mul(page_size as usize);
    let items: Vec<T> = filtered
        .into_iter()
        .skip(offset)
        .take(page_size as usize)
        .collect();

    Page {
        items,
        total,
        page,
        page_size,
        total_pages,
    }
}

/// Case-insensitive substring check over a set of candidate fields.
///
/// Empty/absent optional fields never match.
pub fn fields_match(needle: &str, fields: &[Option<&str>]) -> bool {
    fields
        .iter()
        .flatten()
        .any(|f| f.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str);

    impl Searchable for Row {
        fn matches(&self, needle: &str) -> bool {
            self.0.to_lowercase().contains(needle)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row("Acme Trading"),
            Row("Globex"),
            Row("Acme Supplies"),
            Row("Initech"),
        ]
    }

    #[test]
    fn search_is_case_insensitive() {
        let page = filter_and_paginate(
            rows(),
            &ListParams {
                q: Some("ACME".into()),
                ..Default::default()
            },
        );
        assert_eq!(page.total, 2);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn blank_query_returns_everything() {
        let page = filter_and_paginate(
            rows(),
            &ListParams {
                q: Some("   ".into()),
                ..Default::default()
            },
        );
        assert_eq!(page.total, 4);
    }

    #[test]
    fn pagination_windows_the_filtered_list() {
        let page = filter_and_paginate(
            rows(),
            &ListParams {
                q: None,
                page: Some(2),
                page_size: Some(3),
            },
        );
        assert_eq!(page.total, 4);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].0, "Initech");
    }

    #[test]
    fn out_of_range_page_is_empty_not_an_error() {
        let page = filter_and_paginate(
            rows(),
            &ListParams {
                q: None,
                page: Some(9),
                page_size: Some(10),
            },
        );
        assert_eq!(page.total, 4);
        assert!(page.items.is_empty());
    }

    #[test]
    fn page_size_is_clamped() {
        let page = filter_and_paginate(
            rows(),
            &ListParams {
                q: None,
                page: Some(1),
                page_size: Some(10_000),
            },
        );
        assert_eq!(page.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn fields_match_skips_none() {
        assert!(fields_match("acme", &[None, Some("ACME Trading")]));
        assert!(!fields_match("acme", &[None, None]));
    }
}

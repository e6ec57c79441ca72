//! Page-window computation and navigation URL builders for the index page.

use serde::Serialize;

/// Page size requested from the catalog API and echoed in sort links.
pub const DEFAULT_CARS_PER_PAGE: usize = 12;

/// Ordered window of page numbers around `current_page`.
///
/// `None` marks a skipped range rendered as an ellipsis. The window spans
/// two pages on each side of the current one and always keeps the first
/// and last page reachable.
pub fn page_numbers(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return Vec::new();
    }

    let start = current_page.saturating_sub(2).max(1);
    let end = current_page.saturating_add(2).min(total_pages);

    let mut pages = Vec::new();

    if start > 1 {
        pages.push(Some(1));
        if start > 2 {
            pages.push(None);
        }
    }

    pages.extend((start..=end).map(Some));

    if end < total_pages {
        if end < total_pages - 1 {
            pages.push(None);
        }
        pages.push(Some(total_pages));
    }

    pages
}

#[derive(Serialize)]
struct PageQuery<'a> {
    #[serde(rename = "_page")]
    page: usize,
    #[serde(rename = "_sort", skip_serializing_if = "Option::is_none")]
    sort: Option<&'a str>,
    #[serde(rename = "_order", skip_serializing_if = "Option::is_none")]
    order: Option<&'a str>,
}

#[derive(Serialize)]
struct SortQuery<'a> {
    #[serde(rename = "_limit")]
    limit: usize,
    #[serde(rename = "_page")]
    page: usize,
    #[serde(rename = "_sort", skip_serializing_if = "Option::is_none")]
    sort: Option<&'a str>,
    #[serde(rename = "_order", skip_serializing_if = "Option::is_none")]
    order: Option<&'a str>,
}

fn query_url<T: Serialize>(query: &T) -> String {
    serde_html_form::to_string(query)
        .map(|qs| format!("/?{qs}"))
        .unwrap_or_else(|_| "/".to_string())
}

/// Link to `page`, preserving the active sort when one is set.
pub fn page_url(page: usize, sort: Option<(&str, &str)>) -> String {
    let (sort, order) = match sort {
        Some((field, order)) => (Some(field), Some(order)),
        None => (None, None),
    };
    query_url(&PageQuery { page, sort, order })
}

/// Link activating a sort. Always resets to the first page.
pub fn sort_url(field: &str, order: &str) -> String {
    query_url(&SortQuery {
        limit: DEFAULT_CARS_PER_PAGE,
        page: 1,
        sort: Some(field),
        order: Some(order),
    })
}

/// Link dropping the active sort while staying on `page`.
pub fn clear_sort_url(page: usize) -> String {
    query_url(&SortQuery {
        limit: DEFAULT_CARS_PER_PAGE,
        page,
        sort: None,
        order: None,
    })
}

/// A single clickable page number in the pagination bar.
#[derive(Clone, Debug, Serialize)]
pub struct PageLink {
    pub number: usize,
    pub url: String,
    pub current: bool,
}

/// Everything the template needs to render the pagination bar.
#[derive(Clone, Debug, Serialize)]
pub struct Paginated {
    /// Window tokens in display order; `None` is an ellipsis.
    pub pages: Vec<Option<PageLink>>,
    pub page: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_url: Option<String>,
    pub next_url: Option<String>,
}

impl Paginated {
    pub fn new(current_page: usize, total_pages: usize, sort: Option<(&str, &str)>) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = page_numbers(total_pages, current_page)
            .into_iter()
            .map(|token| {
                token.map(|number| PageLink {
                    number,
                    url: page_url(number, sort),
                    current: number == current_page,
                })
            })
            .collect();

        let has_previous = current_page > 1;
        let has_next = current_page < total_pages;

        Self {
            pages,
            page: current_page,
            total_pages,
            has_previous,
            has_next,
            previous_url: has_previous.then(|| page_url(current_page - 1, sort)),
            next_url: has_next.then(|| page_url(current_page.saturating_add(1), sort)),
        }
    }
}

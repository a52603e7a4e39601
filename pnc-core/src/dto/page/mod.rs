//! Paging DTOs

use serde::{Deserialize, Serialize};

/// One page of a collection endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub page_index: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_hits: u64,
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
}

impl<T> Page<T> {
    /// Whether another page follows the one requested at `page_index`
    ///
    /// The echoed `pageIndex` is ignored; an empty page always ends the walk.
    pub fn has_next(&self, page_index: u32) -> bool {
        !self.content.is_empty() && page_index + 1 < self.total_pages
    }
}

/// Sorting and filtering shared by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Sort expression, e.g. `=asc=name`
    pub sort: Option<String>,
    /// RSQL filter, e.g. `description=LIKE=*Foo*`
    pub query: Option<String>,
}

impl ListQuery {
    pub fn new(sort: Option<String>, query: Option<String>) -> Self {
        Self { sort, query }
    }

    /// Query parameters for the given page
    pub fn to_params(&self, page_index: u32, page_size: u32) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("pageIndex", page_index.to_string()),
            ("pageSize", page_size.to_string()),
        ];
        if let Some(sort) = &self.sort {
            params.push(("sort", sort.clone()));
        }
        if let Some(query) = &self.query {
            params.push(("q", query.clone()));
        }
        params
    }
}

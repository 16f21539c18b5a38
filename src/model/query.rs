use crate::constants::DEFAULT_PAGE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query parameters of list operations
///
/// `page` and `per_page` are passed through to the API untouched; when they are
/// absent the client fills in page 1 and the configured page size. Filters are
/// extra string parameters such as `tag_name` or `type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Page number, 1-based
    pub page: Option<u32>,
    /// Items per page
    pub per_page: Option<u32>,
    /// Additional query parameters
    pub filters: BTreeMap<String, String>,
}

impl ListQuery {
    /// Empty query: first page with the configured page size
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Add a filter
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    /// Flattens the query into string pairs, without paging defaults
    pub fn to_params(&self) -> BTreeMap<String, String> {
        let mut params = self.filters.clone();
        if let Some(page) = self.page {
            params.insert("page".to_string(), page.to_string());
        }
        if let Some(per_page) = self.per_page {
            params.insert("per_page".to_string(), per_page.to_string());
        }
        params
    }
}

/// Fills in `page` and `per_page` when the caller did not provide them
pub fn merge_paging(query: &mut BTreeMap<String, String>, page_size: u32) {
    query
        .entry("page".to_string())
        .or_insert_with(|| DEFAULT_PAGE.to_string());
    query
        .entry("per_page".to_string())
        .or_insert_with(|| page_size.to_string());
}

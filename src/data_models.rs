use serde::{Deserialize, Serialize};

use crate::config::Config;

pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// One search call's worth of request state. Built once, never mutated.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Resource path of the serving config handling this query.
    pub placement: String,
    pub query: String,
    /// Opaque session/analytics identifier chosen by the caller.
    pub visitor_id: String,
    pub page_size: i32,
}

impl SearchRequest {
    pub fn new(config: &Config, query: &str, visitor_id: &str) -> SearchRequest {
        SearchRequest {
            placement: config.default_search_placement(),
            query: query.to_string(),
            visitor_id: visitor_id.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: i32) -> SearchRequest {
        self.page_size = page_size;
        self
    }
}

/// The response shape is owned by the service; fields it omits fall back to
/// their defaults on deserialize.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub total_size: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResult {
    pub id: String,
    pub product: Product,
}

/// Summary of a catalog item as it appears inside a search result.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub name: String,
    pub title: String,
}

//! The response envelope shared by every endpoint. Useful with
//! [`Client::call_as`](crate::Client::call_as).

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pagination {
    pub count: i64,
    pub per_page: i64,
    pub current_page: i64,
    pub next_page: Option<String>,
    pub has_more: bool,
}

/// `data` plus the metadata the API attaches to it. List endpoints include
/// `pagination`; single-resource endpoints omit it.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Response<T> {
    pub data: T,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub timezone: Option<String>,
}

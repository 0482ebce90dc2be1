//! Subset of the `action=query` response of a wikimedia api.
//!
//! Every field missing from the response is left to its default value,
//! unknown fields are ignored.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// `null` is decoded like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApiResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub query: Query,
    #[serde(rename = "query-continue", deserialize_with = "null_as_default")]
    pub query_continue: QueryContinue,
    #[serde(rename = "continue", skip_serializing_if = "Option::is_none")]
    pub continuation: Option<Continue>,
    /// error reported by the api, it is not turned into an `Err`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorInfo>,
}

impl ApiResponse {
    /// Offset to give as `sroffset` to get the next search results, if any.
    ///
    /// Recent wikis use a `continue` object, older ones a `query-continue` one.
    pub fn next_search_offset(&self) -> Option<u64> {
        self.continuation
            .as_ref()
            .and_then(|c| c.sroffset)
            .or_else(|| match self.query_continue.search.sroffset {
                0 => None,
                offset => Some(offset),
            })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Query {
    /// pages indexed by their page id
    #[serde(deserialize_with = "null_as_default")]
    pub pages: HashMap<String, Page>,
    #[serde(deserialize_with = "null_as_default")]
    pub search: Vec<Search>,
    #[serde(deserialize_with = "null_as_default")]
    pub searchinfo: SearchInfo,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Page {
    pub pageid: i64,
    pub ns: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub extract: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: Image,
    #[serde(deserialize_with = "null_as_default")]
    pub original: Image,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Image {
    pub source: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Search {
    pub ns: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub pageid: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub snippet: String,
    pub size: u64,
    pub wordcount: u64,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SearchInfo {
    pub totalhits: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct QueryContinue {
    #[serde(deserialize_with = "null_as_default")]
    pub search: QueryContinueSearch,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct QueryContinueSearch {
    pub sroffset: u64,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Continue {
    pub sroffset: Option<u64>,
    #[serde(rename = "continue")]
    pub token: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApiErrorInfo {
    pub code: String,
    pub info: String,
}

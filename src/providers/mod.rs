pub mod azure;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;
use url::Url;

use crate::error::Result;

/// Source of JSON documents fetched over HTTP.
///
/// Implementations must surface transport failures, non-success statuses and
/// undecodable bodies as errors.
#[async_trait]
pub trait HttpClient {
    async fn fetch(&self, url: &Url, headers: &HeaderMap) -> Result<Value>;
}

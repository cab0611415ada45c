use indexmap::IndexMap;
use log::{debug, info, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use url::Url;

use super::aggregate::{aggregate_by_date, DateAggregate};
use super::normalize::normalize_entry;
use super::summary::summary_table;
use super::types::BuildRecord;
use crate::auth::Token;
use crate::constants::BUILD_VALUE_KEY;
use crate::error::{BuildStatsError, Result};
use crate::insights::SummaryTable;
use crate::providers::HttpClient;

/// Fetches the build list and derives per-date metrics from it.
///
/// Every public operation issues its own request; nothing is cached between
/// calls.
pub struct BuildsCollector<C> {
    client: C,
    build_url: Url,
    headers: HeaderMap,
}

impl<C: HttpClient> BuildsCollector<C> {
    pub fn new(client: C, build_url: Url, token: &Token) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&token.basic_header())
            .map_err(|e| BuildStatsError::Config(format!("Invalid auth token: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        Ok(Self {
            client,
            build_url,
            headers,
        })
    }

    pub fn build_url(&self) -> &Url {
        &self.build_url
    }

    /// One slot per raw entry; entries that are not JSON objects yield `None`.
    pub async fn fetch_build_metrics(&self) -> Result<Vec<Option<BuildRecord>>> {
        info!("Fetching builds from {}", self.build_url);

        let body = self.client.fetch(&self.build_url, &self.headers).await?;
        let entries = build_entries(&body)?;

        let records: Vec<_> = entries.iter().map(normalize_entry).collect();

        let skipped = records.iter().filter(|r| r.is_none()).count();
        if skipped > 0 {
            warn!("{skipped} of {} build entries could not be read", records.len());
        }
        info!("Fetched {} build entries", records.len());

        Ok(records)
    }

    pub async fn aggregate(&self) -> Result<IndexMap<String, DateAggregate>> {
        let records: Vec<BuildRecord> = self
            .fetch_build_metrics()
            .await?
            .into_iter()
            .flatten()
            .collect();

        let buckets = aggregate_by_date(&records);
        debug!("Aggregated {} builds into {} dates", records.len(), buckets.len());

        Ok(buckets)
    }

    pub async fn summary_table(&self) -> Result<SummaryTable> {
        let buckets = self.aggregate().await?;
        Ok(summary_table(&buckets))
    }
}

fn build_entries(body: &Value) -> Result<&[Value]> {
    let object = body
        .as_object()
        .ok_or_else(|| BuildStatsError::Api("Build list response is not a JSON object".into()))?;

    match object.get(BUILD_VALUE_KEY) {
        None => {
            warn!("Build list response has no '{BUILD_VALUE_KEY}' array");
            Ok(&[][..])
        }
        Some(Value::Array(entries)) => Ok(entries),
        Some(_) => Err(BuildStatsError::Api(format!(
            "Build list field '{BUILD_VALUE_KEY}' is not an array"
        ))),
    }
}

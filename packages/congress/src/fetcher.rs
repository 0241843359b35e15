//! Bill lookup against the Congress.gov API.
//!
//! A lookup is a chain of up to three GET requests:
//!
//! 1. bill metadata (`/bill/{congress}/{type}/{number}`)
//! 2. the text-versions index referenced by the metadata
//! 3. the content URL of the first (latest) text version
//!
//! Only the first request is required. Failures in steps 2 and 3 degrade
//! the result to [`TEXT_NOT_AVAILABLE`] instead of failing the lookup.

use reqwest::Client;
use serde_json::Value;

use crate::bill_id::BillReference;
use crate::config::{CongressConfig, TEXT_NOT_AVAILABLE};
use crate::error::{CongressError, Result};
use crate::http::{create_client, get_json};
use crate::types::{LawDetails, TextContentResponse, TextVersion, TextVersionsResponse};

/// Client for the Congress.gov bill endpoints.
///
/// NOTE: Do NOT derive `Debug` on this struct: `api_key` would be exposed.
pub struct CongressClient {
    http: Client,
    api_key: String,
    api_base_url: String,
}

impl CongressClient {
    pub fn new(config: &CongressConfig) -> Result<Self> {
        Ok(Self {
            http: create_client(config.timeout_secs)?,
            api_key: config.api_key.clone(),
            api_base_url: config.api_base_url.clone(),
        })
    }

    /// Metadata URL for a bill. The bill type is lowercased.
    pub fn bill_url(&self, bill: &BillReference) -> String {
        format!(
            "{}/bill/{}/{}/{}?format=json",
            self.api_base_url,
            bill.congress,
            bill.bill_type.to_lowercase(),
            bill.bill_number
        )
    }

    /// Fetch bill metadata and resolve its latest text.
    pub async fn fetch_law_details(&self, bill: &BillReference) -> Result<LawDetails> {
        tracing::info!(bill = %bill, "fetching law details");

        let mut details = self.fetch_bill(bill).await?;

        let text_content = match details.text_versions_url() {
            Some(url) => match self.fetch_text_content(url).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(bill = %bill, error = %e, "failed to fetch bill text");
                    TEXT_NOT_AVAILABLE.to_string()
                }
            },
            None => {
                tracing::debug!(bill = %bill, "bill has no text versions");
                String::new()
            }
        };
        details.text_content = text_content;

        Ok(details)
    }

    /// Step 1: bill metadata.
    async fn fetch_bill(&self, bill: &BillReference) -> Result<LawDetails> {
        let mut body: Value =
            get_json(&self.http, &self.bill_url(bill), &self.api_key, "bill metadata").await?;

        let bill_data = body
            .get_mut("bill")
            .filter(|data| data.is_object())
            .map(Value::take)
            .ok_or(CongressError::MissingBill)?;

        serde_json::from_value(bill_data).map_err(|e| CongressError::Decode {
            context: "bill metadata".to_string(),
            message: e.to_string(),
        })
    }

    /// Steps 2 and 3: text-versions index, then the latest version's text.
    ///
    /// Returns `""` when there is no version or the version has no URL.
    async fn fetch_text_content(&self, text_versions_url: &str) -> Result<String> {
        let index: TextVersionsResponse =
            get_json(&self.http, text_versions_url, &self.api_key, "text versions").await?;

        let Some(latest) = select_latest(index.versions()) else {
            return Ok(String::new());
        };

        let Some(content_url) = latest.content_url() else {
            return Ok(String::new());
        };

        let content: TextContentResponse =
            get_json(&self.http, content_url, &self.api_key, "text content").await?;

        Ok(content.into_text())
    }
}

/// Pick the latest text version.
///
/// Congress.gov lists the most recent version first, so the first entry is
/// taken as-is. A later entry with a newer date is logged rather than used.
pub fn select_latest(versions: &[TextVersion]) -> Option<&TextVersion> {
    let first = versions.first()?;

    if let Some(first_date) = first.date.as_deref() {
        let newer = versions[1..]
            .iter()
            .filter_map(|v| v.date.as_deref())
            .filter(|date| *date > first_date)
            .max();
        if let Some(newer) = newer {
            tracing::warn!(
                selected = first_date,
                newer,
                "text versions are not ordered newest first"
            );
        }
    }

    Some(first)
}

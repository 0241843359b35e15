//! Core data types for Congress.gov bill data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Aggregated bill metadata plus the resolved bill text.
///
/// Field names follow the Congress.gov API (camelCase). Nested structures
/// the API returns (sponsors, actions, committees, ...) are passed through
/// as raw JSON. Scalars are raw JSON too, so an upstream `null` or a
/// non-string value passes through instead of failing the lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LawDetails {
    pub title: Value,
    pub number: Value,
    #[serde(rename = "type")]
    pub bill_type: Value,
    /// Upstream sends a number; kept as raw JSON.
    pub congress: Value,
    pub introduced_date: Value,
    pub latest_action: Value,
    pub policy_area: Value,
    pub legislation_url: Value,
    pub sponsors: Value,
    pub subjects: Value,
    pub text_versions: Value,
    pub summaries: Value,
    pub actions: Value,
    pub committees: Value,
    pub cosponsors: Value,
    pub laws: Value,
    /// Bill text, `""` when the bill has no text, or
    /// [`TEXT_NOT_AVAILABLE`](crate::config::TEXT_NOT_AVAILABLE) when
    /// fetching it failed.
    pub text_content: String,
}

impl Default for LawDetails {
    fn default() -> Self {
        let object = || Value::Object(Map::new());
        let empty = || Value::String(String::new());
        Self {
            title: empty(),
            number: empty(),
            bill_type: empty(),
            congress: empty(),
            introduced_date: empty(),
            latest_action: object(),
            policy_area: object(),
            legislation_url: empty(),
            sponsors: Value::Array(Vec::new()),
            subjects: object(),
            text_versions: object(),
            summaries: object(),
            actions: object(),
            committees: object(),
            cosponsors: object(),
            laws: Value::Array(Vec::new()),
            text_content: String::new(),
        }
    }
}

impl LawDetails {
    /// URL of the text-versions index, if the bill references one.
    pub fn text_versions_url(&self) -> Option<&str> {
        self.text_versions
            .get("url")
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
    }
}

/// A single entry of a bill's text-versions index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextVersion {
    /// Publication date, ISO-8601 when present.
    pub date: Option<String>,
    /// Version label, e.g. "Introduced in House".
    #[serde(rename = "type")]
    pub version_type: Option<String>,
    pub url: Option<String>,
}

impl TextVersion {
    pub fn content_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Response body of a text-versions index request.
///
/// A missing or `null` list means the bill has no published text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextVersionsResponse {
    pub text_versions: Option<Vec<TextVersion>>,
}

impl TextVersionsResponse {
    pub fn versions(&self) -> &[TextVersion] {
        self.text_versions.as_deref().unwrap_or_default()
    }
}

/// Response body of a text content request.
///
/// Text is read from the top-level `text` field, falling back to the first
/// entry of `textVersions`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextContentResponse {
    pub text: Option<String>,
    pub text_versions: Option<Vec<TextContentVersion>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextContentVersion {
    pub text: Option<String>,
}

impl TextContentResponse {
    pub fn into_text(self) -> String {
        if let Some(text) = self.text {
            return text;
        }
        self.text_versions
            .into_iter()
            .flatten()
            .next()
            .and_then(|version| version.text)
            .unwrap_or_default()
    }
}

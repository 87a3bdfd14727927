//! World Bank Indicators API client.
//!
//! One templated GET per lookup:
//!
//! ```text
//! {base}/country/{COUNTRY}/indicator/{CODE}?date=2000:2022&format=json
//! ```
//!
//! The provider answers with a two-element envelope `[metadata, records]`.
//! Only `records` is consumed. A parseable body that does not carry a
//! records array — the provider returns a one-element error envelope for
//! unknown country codes, for example — is treated as "no data", not as a
//! failure; the distinction clients care about is "the provider answered"
//! versus "we could not ask".
//!
//! No timeout, retry, or backoff is configured: the front end polls, and a
//! failed poll simply surfaces as a 500 it will retry on its own schedule.

use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;
use crate::indicator::Indicator;
use crate::shape::{self, DataPoint};

const BASE_URL: &str = "https://api.worldbank.org/v2";

/// Years requested from the provider. Annual series only, so a year range
/// is the whole date vocabulary needed.
const DATE_RANGE: &str = "2000:2022";

/// Client for the World Bank Indicators API.
pub struct WorldBank {
    http: reqwest::Client,
    base_url: String,
}

impl WorldBank {
    /// Client against the public API endpoint.
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Client against an alternate endpoint. Tests point this at a local
    /// canned server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into() }
    }

    /// Fetches one indicator series for one country and shapes it into
    /// `{date, value}` points.
    ///
    /// `country` must already be uppercased; it is substituted into the URL
    /// unmodified, exactly as the provider expects it.
    pub async fn fetch(
        &self,
        country: &str,
        indicator: Indicator,
    ) -> Result<Vec<DataPoint>, FetchError> {
        let url = format!(
            "{}/country/{}/indicator/{}?date={}&format=json",
            self.base_url,
            country,
            indicator.code(),
            DATE_RANGE,
        );

        debug!(%country, %indicator, "fetching indicator series");

        let body = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Request)?
            .text()
            .await
            .map_err(FetchError::Request)?;

        let envelope: Value = serde_json::from_str(&body).map_err(FetchError::Decode)?;
        Ok(shape::shape(records(&envelope)))
    }
}

impl Default for WorldBank {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the records array from the provider envelope. Anything other
/// than `[metadata, [record, ...]]` yields an empty slice.
fn records(envelope: &Value) -> &[Value] {
    envelope
        .get(1)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn records_reads_the_second_envelope_element() {
        let envelope = json!([{"page": 1}, [{"date": "2021", "value": 1.0}]]);
        assert_eq!(records(&envelope).len(), 1);
    }

    #[test]
    fn short_or_malformed_envelopes_are_empty() {
        // One-element error envelope, as sent for unknown country codes.
        assert!(records(&json!([{"message": [{"id": "120"}]}])).is_empty());
        assert!(records(&json!({"not": "an array"})).is_empty());
        assert!(records(&json!([{"page": 1}, null])).is_empty());
        assert!(records(&json!([])).is_empty());
    }
}

//! HTTP handlers: the resolve → fetch → shape → emit pipeline.
//!
//! Status mapping:
//!
//! | Outcome | Status | Body |
//! |---|---|---|
//! | unknown indicator name | 400 | `{"error": "Invalid indicator"}` |
//! | upstream request/parse failure | 500 | `{"error": "Failed to fetch data: …"}` |
//! | everything else, including no data | 200 | JSON array of `{date, value}` |
//!
//! The 500 body carries the [`FetchError`](crate::FetchError) category
//! message, never transport or parser detail — that stays in the logs.

use std::sync::Arc;

use http::StatusCode;
use serde_json::json;
use tracing::{info, warn};

use crate::indicator::Indicator;
use crate::request::Request;
use crate::response::Response;
use crate::worldbank::WorldBank;

/// `GET /` — plain-text status string.
pub async fn home(_req: Request) -> Response {
    Response::text("tally is running")
}

/// `GET /healthz` — liveness probe. If the process can respond to HTTP at
/// all, it is alive; this handler intentionally has no dependencies.
pub async fn health(_req: Request) -> Response {
    Response::text("ok")
}

/// `GET /api/data/{indicator}/{country_code}` — one indicator series for one
/// country, shaped to `{date, value}` points.
///
/// The indicator name is lowercased before lookup and the country code
/// uppercased before URL substitution, so `/api/data/GDP/usa` and
/// `/api/data/gdp/USA` behave identically.
pub async fn indicator_data(wb: Arc<WorldBank>, req: Request) -> Response {
    let name = req.param("indicator").unwrap_or_default().to_ascii_lowercase();
    let Ok(indicator) = name.parse::<Indicator>() else {
        return error_response(StatusCode::BAD_REQUEST, "Invalid indicator");
    };
    let country = req.param("country_code").unwrap_or_default().to_ascii_uppercase();

    match wb.fetch(&country, indicator).await {
        Ok(points) => {
            info!(%country, %indicator, points = points.len(), "indicator data served");
            match serde_json::to_vec(&points) {
                Ok(body) => Response::json(body),
                Err(e) => {
                    warn!(error = %e, "shaped data failed to serialize");
                    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to serialize data")
                }
            }
        }
        Err(e) => {
            warn!(%country, %indicator, error = %e, "indicator fetch failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Failed to fetch data: {e}"),
            )
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let body = json!({ "error": message }).to_string().into_bytes();
    Response::builder().status(status).json(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::Value;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;

    fn data_request(indicator: &str, country: &str) -> Request {
        let (parts, ()) = http::Request::builder()
            .uri(format!("/api/data/{indicator}/{country}"))
            .body(())
            .unwrap()
            .into_parts();
        let params = [
            ("indicator".to_owned(), indicator.to_owned()),
            ("country_code".to_owned(), country.to_owned()),
        ]
        .into_iter()
        .collect();
        Request::new(parts, params)
    }

    /// Canned upstream: answers every request with `body` and forwards each
    /// received request head through the returned channel.
    async fn upstream(body: &'static str) -> (String, mpsc::UnboundedReceiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = vec![0u8; 2048];
                let n = stream.read(&mut buf).await.unwrap_or(0);
                let _ = tx.send(String::from_utf8_lossy(&buf[..n]).into_owned());

                let resp = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
                     content-length: {}\r\nconnection: close\r\n\r\n{}",
                    body.len(),
                    body,
                );
                let _ = stream.write_all(resp.as_bytes()).await;
            }
        });

        (format!("http://{addr}"), rx)
    }

    fn body_json(resp: &Response) -> Value {
        serde_json::from_slice(resp.body()).unwrap()
    }

    #[tokio::test]
    async fn unknown_indicator_is_400_without_touching_upstream() {
        // Unroutable base URL: a fetch attempt would fail loudly, but the
        // resolver must reject first.
        let wb = Arc::new(WorldBank::with_base_url("http://127.0.0.1:1"));
        let resp = indicator_data(wb, data_request("bogus", "usa")).await;

        assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(&resp), serde_json::json!({"error": "Invalid indicator"}));
    }

    #[tokio::test]
    async fn well_formed_envelope_is_shaped_and_served() {
        let (base, _rx) =
            upstream(r#"[{"page":1},[{"date":"2021","value":"100"},{"date":"2020","value":null}]]"#)
                .await;
        let wb = Arc::new(WorldBank::with_base_url(base));
        let resp = indicator_data(wb, data_request("gdp", "usa")).await;

        assert_eq!(resp.status_code(), StatusCode::OK);
        assert_eq!(
            String::from_utf8_lossy(resp.body()),
            r#"[{"date":"2021","value":"100"}]"#
        );
    }

    #[tokio::test]
    async fn path_params_are_normalized_into_the_upstream_url() {
        let (base, mut rx) = upstream(r#"[{"page":1},[]]"#).await;
        let wb = Arc::new(WorldBank::with_base_url(base));
        let resp = indicator_data(wb, data_request("GDP", "usa")).await;

        assert_eq!(resp.status_code(), StatusCode::OK);
        let head = rx.recv().await.unwrap();
        assert!(
            head.starts_with("GET /country/USA/indicator/NY.GDP.MKTP.CD?date=2000:2022&format=json"),
            "unexpected upstream request: {head}"
        );
    }

    #[tokio::test]
    async fn error_envelope_is_empty_data_not_failure() {
        // One-element envelope, as the provider sends for unknown countries.
        let (base, _rx) = upstream(r#"[{"message":[{"id":"120"}]}]"#).await;
        let wb = Arc::new(WorldBank::with_base_url(base));
        let resp = indicator_data(wb, data_request("inflation", "zz")).await;

        assert_eq!(resp.status_code(), StatusCode::OK);
        assert_eq!(body_json(&resp), serde_json::json!([]));
    }

    #[tokio::test]
    async fn non_json_upstream_body_is_500_with_generic_message() {
        let (base, _rx) = upstream("<html>Service Unavailable</html>").await;
        let wb = Arc::new(WorldBank::with_base_url(base));
        let resp = indicator_data(wb, data_request("unemployment", "deu")).await;

        assert_eq!(resp.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(&resp);
        assert_eq!(
            body["error"],
            serde_json::json!("Failed to fetch data: upstream returned invalid JSON")
        );
    }

    #[tokio::test]
    async fn unreachable_upstream_is_500_with_generic_message() {
        // Bind a listener to reserve a port, then drop it so connects fail.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let wb = Arc::new(WorldBank::with_base_url(base));
        let resp = indicator_data(wb, data_request("gdp", "usa")).await;

        assert_eq!(resp.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(&resp)["error"],
            serde_json::json!("Failed to fetch data: upstream request failed")
        );
    }

    #[tokio::test]
    async fn repeated_requests_yield_identical_output() {
        let (base, _rx) =
            upstream(r#"[{"page":1},[{"date":"2021","value":3176.0},{"date":"2020","value":2674.0}]]"#)
                .await;
        let wb = Arc::new(WorldBank::with_base_url(base));

        let first = indicator_data(Arc::clone(&wb), data_request("gdp", "ind")).await;
        let second = indicator_data(wb, data_request("gdp", "ind")).await;

        assert_eq!(first.status_code(), StatusCode::OK);
        assert_eq!(first.body(), second.body());
    }
}

//! # tally
//!
//! A minimal HTTP API that proxies and reshapes economic-indicator data from
//! the World Bank Indicators API into JSON a front end can chart directly.
//!
//! ## The contract
//!
//! The World Bank owns the data. tally does not cache it, store it, or
//! interpret it — it resolves a short indicator name to the provider's code,
//! fetches one series, keeps the `date` and `value` columns, drops empty
//! observations, and hands the rest back as a flat JSON array. Every request
//! is an independent resolve → fetch → shape → emit pipeline; nothing
//! outlives a single request/response cycle.
//!
//! ## HTTP surface
//!
//! - `GET /` — plain-text status string
//! - `GET /healthz` — liveness probe
//! - `GET /api/data/{indicator}/{country_code}` —
//!   - `200` JSON array of `{date, value}` objects (possibly empty)
//!   - `400` `{"error": "Invalid indicator"}` for unknown indicator names
//!   - `500` `{"error": "Failed to fetch data: …"}` on upstream failure
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use http::Method;
//! use tally::{Router, Server, WorldBank, api};
//!
//! #[tokio::main]
//! async fn main() {
//!     let wb = Arc::new(WorldBank::new());
//!
//!     let app = Router::new()
//!         .on(Method::GET, "/", api::home)
//!         .on(Method::GET, "/api/data/{indicator}/{country_code}", move |req| {
//!             let wb = Arc::clone(&wb);
//!             async move { api::indicator_data(wb, req).await }
//!         });
//!
//!     Server::bind("0.0.0.0:3000").serve(app).await.unwrap();
//! }
//! ```

pub mod api;
mod error;
mod handler;
mod indicator;
mod request;
mod response;
mod router;
mod server;
mod shape;
mod worldbank;

pub use error::{Error, FetchError};
pub use handler::Handler;
pub use indicator::Indicator;
pub use request::Request;
pub use response::{IntoResponse, Response};
pub use router::Router;
pub use server::Server;
pub use shape::DataPoint;
pub use worldbank::WorldBank;

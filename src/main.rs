//! tally — economic-indicator API server.
//!
//! Run with:
//!   RUST_LOG=info cargo run
//!
//! Try:
//!   curl http://localhost:3000/
//!   curl http://localhost:3000/api/data/gdp/usa
//!   curl http://localhost:3000/api/data/inflation/ind
//!   curl http://localhost:3000/api/data/bogus/usa

use std::sync::Arc;

use http::Method;
use tally::{Router, Server, WorldBank, api};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let wb = Arc::new(WorldBank::new());

    let app = Router::new()
        .on(Method::GET, "/", api::home)
        .on(Method::GET, "/healthz", api::health)
        .on(Method::GET, "/api/data/{indicator}/{country_code}", move |req| {
            let wb = Arc::clone(&wb);
            async move { api::indicator_data(wb, req).await }
        });

    Server::bind("0.0.0.0:3000")
        .serve(app)
        .await
        .expect("server error");
}

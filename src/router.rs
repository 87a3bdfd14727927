//! Radix-tree request router.
//!
//! One [`matchit`] tree per HTTP method, O(path-length) lookup. Routes are
//! registered once at startup; the table is read-only afterwards, so it can
//! be shared across connection tasks without locking.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};

/// The application router.
///
/// Path parameters use `{name}` syntax and are retrieved with
/// [`Request::param`](crate::Request::param). Each [`Router::on`] call
/// returns `self` so registrations chain.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Register a handler for a method + path pair.
    ///
    /// # Panics
    ///
    /// Panics on a malformed or conflicting route pattern. Routes are
    /// program text, not input; a bad one is a startup bug.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::Response;

    async fn ok(_req: crate::Request) -> Response {
        Response::text("ok")
    }

    fn app() -> Router {
        Router::new()
            .on(Method::GET, "/", ok)
            .on(Method::GET, "/api/data/{indicator}/{country_code}", ok)
    }

    #[test]
    fn lookup_captures_path_params() {
        let (_, params) = app()
            .lookup(&Method::GET, "/api/data/gdp/usa")
            .expect("route should match");
        assert_eq!(params.get("indicator").map(String::as_str), Some("gdp"));
        assert_eq!(params.get("country_code").map(String::as_str), Some("usa"));
    }

    #[test]
    fn unknown_path_and_method_miss() {
        assert!(app().lookup(&Method::GET, "/api/data/gdp").is_none());
        assert!(app().lookup(&Method::POST, "/").is_none());
    }
}

//! Incoming HTTP request type.

use std::collections::HashMap;

/// An incoming HTTP request, paired with the path parameters captured by the
/// router.
///
/// This API is read-only: the handlers here never consume request bodies, so
/// only the head of the request (method, URI, headers) is retained.
pub struct Request {
    parts: http::request::Parts,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(parts: http::request::Parts, params: HashMap<String, String>) -> Self {
        Self { parts, params }
    }

    pub fn method(&self) -> &http::Method {
        &self.parts.method
    }

    pub fn path(&self) -> &str {
        self.parts.uri.path()
    }

    /// Case-insensitive header lookup. Returns `None` for absent headers and
    /// for values that are not valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/api/data/{indicator}/{country_code}`, a request to
    /// `/api/data/gdp/usa` yields `param("indicator") == Some("gdp")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(path: &str, params: &[(&str, &str)]) -> Request {
        let (parts, ()) = http::Request::builder()
            .uri(path)
            .header("accept", "application/json")
            .body(())
            .unwrap()
            .into_parts();
        let params = params
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Request::new(parts, params)
    }

    #[test]
    fn params_and_headers_are_readable() {
        let req = request("/api/data/gdp/usa", &[("indicator", "gdp"), ("country_code", "usa")]);
        assert_eq!(req.path(), "/api/data/gdp/usa");
        assert_eq!(req.param("indicator"), Some("gdp"));
        assert_eq!(req.param("country_code"), Some("usa"));
        assert_eq!(req.param("missing"), None);
        assert_eq!(req.header("Accept"), Some("application/json"));
    }
}

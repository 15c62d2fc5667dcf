//! HTTP request descriptions handed to the host's HTTP client.

use crate::domain::PieceId;
use serde::{Deserialize, Serialize};

/// Header carrying the session credential on gated requests.
///
/// The pieces API expects this exact name (not `Authorization`).
pub const AUTH_HEADER: &str = "Authentication";

/// Which collection route the API host serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// `GET {host}/pieces`, served by the first API deployment.
    Legacy,
    /// `GET {host}/api/pieces`.
    #[default]
    Api,
}

impl Endpoint {
    #[must_use]
    pub const fn collection_path(self) -> &'static str {
        match self {
            Self::Legacy => "/pieces",
            Self::Api => "/api/pieces",
        }
    }

    /// Parses `legacy` or `api`, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "legacy" => Some(Self::Legacy),
            "api" => Some(Self::Api),
            _ => None,
        }
    }
}

/// HTTP method of a [`FetchRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
}

/// A request the host should perform on behalf of the explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

impl FetchRequest {
    /// Whole-collection request, decoded with
    /// [`parse_pieces_payload`](super::parse_pieces_payload).
    ///
    /// # Example
    ///
    /// ```rust
    /// use canplayit::source::{Endpoint, FetchRequest};
    ///
    /// let request = FetchRequest::pieces("https://api.example.org/", Endpoint::Legacy);
    /// assert_eq!(request.url, "https://api.example.org/pieces");
    /// ```
    #[must_use]
    pub fn pieces(api_host: &str, endpoint: Endpoint) -> Self {
        Self::get(format!("{}{}", trim_host(api_host), endpoint.collection_path()))
    }

    /// Single-piece detail request, decoded with
    /// [`parse_piece_payload`](super::parse_piece_payload).
    #[must_use]
    pub fn piece(api_host: &str, id: &PieceId) -> Self {
        Self::get(format!("{}/api/pieces/{id}", trim_host(api_host)))
    }

    fn get(url: String) -> Self {
        Self {
            method: Method::Get,
            url,
            headers: Vec::new(),
        }
    }

    /// Attaches `Authentication: Bearer {credential}`, replacing any previous value.
    #[must_use]
    pub fn with_bearer(mut self, credential: &str) -> Self {
        self.headers.retain(|(name, _)| name != AUTH_HEADER);
        self.headers
            .push((AUTH_HEADER.to_string(), format!("Bearer {credential}")));
        self
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

fn trim_host(api_host: &str) -> &str {
    api_host.trim().trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_routes_per_endpoint() {
        assert_eq!(
            FetchRequest::pieces("http://localhost:5000", Endpoint::Api).url,
            "http://localhost:5000/api/pieces"
        );
        assert_eq!(
            FetchRequest::pieces("http://localhost:5000/", Endpoint::Legacy).url,
            "http://localhost:5000/pieces"
        );
    }

    #[test]
    fn detail_route_embeds_id() {
        let request = FetchRequest::piece("http://h", &PieceId::new("12"));
        assert_eq!(request.url, "http://h/api/pieces/12");
        assert_eq!(request.method, Method::Get);
    }

    #[test]
    fn bearer_header_is_replaced_not_duplicated() {
        let request = FetchRequest::pieces("http://h", Endpoint::Api)
            .with_bearer("old")
            .with_bearer("token");
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("authentication"), Some("Bearer token"));
    }

    #[test]
    fn endpoint_names_parse() {
        assert_eq!(Endpoint::from_name("LEGACY"), Some(Endpoint::Legacy));
        assert_eq!(Endpoint::from_name(" api "), Some(Endpoint::Api));
        assert_eq!(Endpoint::from_name("v2"), None);
    }
}

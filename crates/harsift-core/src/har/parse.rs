//! HAR 1.2 data structures as they appear on disk.
//!
//! Every field defaults, so a missing sub-object decodes to a zero value
//! instead of failing the archive. Unknown fields are ignored.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::fmt;

/// Root HAR document (top-level wrapper).
#[derive(Debug, Default, Deserialize)]
pub struct Archive {
    #[serde(default)]
    pub log: Log,
}

/// The capture log: format version, producing tool, and the recorded
/// entries in capture order.
#[derive(Debug, Default, Deserialize)]
pub struct Log {
    #[serde(default, deserialize_with = "lenient_number")]
    pub version: f64,
    #[serde(default)]
    pub creator: Creator,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// Tool that produced the capture.
#[derive(Debug, Default, Deserialize)]
pub struct Creator {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub version: f64,
}

/// One recorded request/response exchange.
#[derive(Debug, Default, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub request: Request,
    #[serde(default)]
    pub response: Response,
}

/// HTTP method of a captured request. Matching is case-sensitive; anything
/// outside the usual verbs is carried through as-is, unvalidated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Other(String),
}

impl Default for Method {
    fn default() -> Self {
        Method::Other(String::new())
    }
}

impl From<String> for Method {
    fn from(s: String) -> Self {
        match s.as_str() {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "PATCH" => Method::Patch,
            "DELETE" => Method::Delete,
            "OPTIONS" => Method::Options,
            _ => Method::Other(s),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
            Method::Put => f.write_str("PUT"),
            Method::Patch => f.write_str("PATCH"),
            Method::Delete => f.write_str("DELETE"),
            Method::Options => f.write_str("OPTIONS"),
            Method::Other(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub method: Method,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default, rename = "queryString")]
    pub query_string: Vec<QueryParam>,
    #[serde(default, rename = "postData")]
    pub post_data: Body,
}

#[derive(Debug, Default, Deserialize)]
pub struct Response {
    /// Some capture tools write -1 for aborted exchanges, so this is wider
    /// than a real status code.
    #[serde(default)]
    pub status: i64,
    #[serde(default, rename = "statusText")]
    pub status_text: String,
    #[serde(default, rename = "httpVersion")]
    pub http_version: String,
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default)]
    pub content: Body,
    #[serde(default, rename = "redirectURL")]
    pub redirect_url: Option<String>,
    #[serde(default, rename = "serverIPAddress")]
    pub server_ip_address: Option<String>,
}

/// A captured request or response payload.
#[derive(Debug, Default, Deserialize)]
pub struct Body {
    #[serde(default)]
    pub size: i64,
    #[serde(default, rename = "mimeType")]
    pub mime_type: String,
    #[serde(default)]
    pub text: String,
}

impl Body {
    /// True if any body text was captured. The format cannot distinguish
    /// "no body" from "empty body"; both come through as an empty string.
    pub fn is_captured(&self) -> bool {
        !self.text.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryParam {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// HAR version fields are numeric but frequently captured as quoted strings
/// ("1.2"); accept both encodings.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_maps_known_verbs() {
        assert_eq!(Method::from("DELETE".to_string()), Method::Delete);
        assert_eq!(
            Method::from("PROPFIND".to_string()),
            Method::Other("PROPFIND".into())
        );
        // Case matters: lowercase verbs pass through unnormalized.
        assert_eq!(Method::from("get".to_string()), Method::Other("get".into()));
    }

    #[test]
    fn method_displays_original_text() {
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Other("PROPFIND".into()).to_string(), "PROPFIND");
        assert_eq!(Method::default().to_string(), "");
    }

    #[test]
    fn creator_version_accepts_quoted_number() {
        let creator: Creator =
            serde_json::from_str(r#"{"name":"firefox","version":"107.0"}"#).unwrap();
        assert_eq!(creator.name, "firefox");
        assert!((creator.version - 107.0).abs() < 1e-9);
    }

    #[test]
    fn body_capture_flag() {
        assert!(!Body::default().is_captured());
        let body = Body {
            size: 2,
            mime_type: "application/json".into(),
            text: "{}".into(),
        };
        assert!(body.is_captured());
    }
}

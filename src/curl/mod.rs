pub mod curl_parsers;
pub mod handlers;
pub mod parser;

use std::{collections::BTreeMap, fmt, str::FromStr};

use crate::error::ParseError;

pub const HEADER_PREFIX: &str = "H-";
pub const COOKIE_PREFIX: &str = "C-";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive: `get` or `Post` are rejected.
impl FromStr for Method {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            _ => Err(ParseError::InvalidMethod { method: s.into() }),
        }
    }
}

/// One piece of output produced by an argument handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Curl {
    Method(Method),
    Data(String),
    Header(String, String),
    Cookie(String, String),
}

/// The parsed form of a curl command.
///
/// Headers and cookies are keyed by name, so a second `-H` with an already
/// seen name replaces the first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurlOptions {
    pub method: Method,
    pub url: Option<String>,
    pub data: Option<String>,
    pub headers: BTreeMap<String, String>,
    pub cookies: BTreeMap<String, String>,
}

impl CurlOptions {
    pub fn merge(&mut self, entry: Curl) -> &mut Self {
        match entry {
            Curl::Method(method) => self.method = method,
            Curl::Data(data) => self.data = Some(data),
            Curl::Header(name, value) => {
                self.headers.insert(name, value);
            }
            Curl::Cookie(name, value) => {
                self.cookies.insert(name, value);
            }
        }
        self
    }

    pub fn set_url(&mut self, url: &str) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    /// Body to send, empty when no `-d` was given.
    pub fn body(&self) -> &str {
        self.data.as_deref().unwrap_or_default()
    }

    /// Flattens the record into the `method`/`url`/`data`/`H-*`/`C-*` map.
    pub fn to_option_map(&self) -> BTreeMap<String, String> {
        let mut options = BTreeMap::new();
        options.insert("method".to_string(), self.method.to_string());
        if let Some(url) = &self.url {
            options.insert("url".to_string(), url.clone());
        }
        if let Some(data) = &self.data {
            options.insert("data".to_string(), data.clone());
        }
        for (name, value) in &self.headers {
            options.insert(format!("{HEADER_PREFIX}{name}"), value.clone());
        }
        for (name, value) in &self.cookies {
            options.insert(format!("{COOKIE_PREFIX}{name}"), value.clone());
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("GET", Method::Get)]
    #[case("POST", Method::Post)]
    #[case("PUT", Method::Put)]
    #[case("DELETE", Method::Delete)]
    fn test_method_from_str(#[case] input: &str, #[case] expected: Method) {
        assert_eq!(input.parse::<Method>(), Ok(expected));
        assert_eq!(expected.as_str(), input);
    }

    #[rstest]
    #[case("get")]
    #[case("PATCH")]
    #[case("")]
    fn test_method_rejects(#[case] input: &str) {
        assert_eq!(
            input.parse::<Method>(),
            Err(ParseError::InvalidMethod {
                method: input.into()
            })
        );
    }

    #[test]
    fn test_merge_overwrites_same_key() {
        let mut options = CurlOptions::default();
        options
            .merge(Curl::Header("Accept".into(), "json".into()))
            .merge(Curl::Header("Accept".into(), "xml".into()))
            .merge(Curl::Method(Method::Put))
            .merge(Curl::Method(Method::Delete));

        assert_eq!(options.headers.len(), 1);
        assert_eq!(options.headers["Accept"], "xml");
        assert_eq!(options.method, Method::Delete);
    }

    #[test]
    fn test_to_option_map_prefixes() {
        let mut options = CurlOptions::default();
        options
            .set_url("http://x.com")
            .merge(Curl::Data("body".into()))
            .merge(Curl::Header("Accept".into(), "json".into()))
            .merge(Curl::Cookie("session".into(), "abc".into()));

        let map = options.to_option_map();
        assert_eq!(map.len(), 5);
        assert_eq!(map["method"], "GET");
        assert_eq!(map["url"], "http://x.com");
        assert_eq!(map["data"], "body");
        assert_eq!(map["H-Accept"], "json");
        assert_eq!(map["C-session"], "abc");
        assert!(map.keys().all(|key| {
            matches!(key.as_str(), "method" | "url" | "data")
                || key.starts_with(HEADER_PREFIX)
                || key.starts_with(COOKIE_PREFIX)
        }));
    }

    #[test]
    fn test_body_defaults_to_empty() {
        assert_eq!(CurlOptions::default().body(), "");
    }
}

//! Turns parsed [`CurlOptions`] into one outbound HTTP request.
//!
//! # Design
//! [`HttpRequest`] is plain data validated up front, so malformed urls and
//! header names are reported as construction errors before any I/O happens.
//! The actual round-trip goes through a [`Transport`]; [`UreqTransport`] is
//! the default. The response is handed back unread and owning its body, so
//! the connection is released whenever the caller drops it.

pub mod transport;

use std::time::Duration;

use log::debug;
use ureq::http::{HeaderName, HeaderValue};

use crate::{
    curl::{CurlOptions, Method},
    error::DispatchError,
};

pub use transport::UreqTransport;

/// Max-age attached to every cookie taken from a command.
pub const COOKIE_MAX_AGE: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Default)]
pub struct DispatchConfig {
    /// Global deadline for the whole call. `None` waits forever.
    pub timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub max_age: Duration,
}

impl Cookie {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            max_age: COOKIE_MAX_AGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub cookies: Vec<Cookie>,
    pub body: String,
}

impl HttpRequest {
    pub fn from_options(options: &CurlOptions) -> Result<Self, DispatchError> {
        let raw_url = options.url.as_deref().ok_or(DispatchError::MissingUrl)?;
        let url = url::Url::parse(raw_url).map_err(|source| DispatchError::InvalidUrl {
            url: raw_url.into(),
            source,
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DispatchError::UnsupportedScheme {
                url: raw_url.into(),
                scheme: url.scheme().into(),
            });
        }
        if url.host().is_none() {
            return Err(DispatchError::MissingHost {
                url: raw_url.into(),
            });
        }

        let mut headers = Vec::with_capacity(options.headers.len());
        for (name, value) in &options.headers {
            if HeaderName::try_from(name.as_str()).is_err()
                || HeaderValue::try_from(value.as_str()).is_err()
            {
                return Err(DispatchError::InvalidHeader {
                    name: name.clone(),
                    value: value.clone(),
                });
            }
            headers.push((name.clone(), value.clone()));
        }

        let mut cookies = Vec::with_capacity(options.cookies.len());
        for (name, value) in &options.cookies {
            if !is_cookie_token(name) || !is_cookie_value(value) {
                return Err(DispatchError::InvalidCookie {
                    name: name.clone(),
                    value: value.clone(),
                });
            }
            cookies.push(Cookie::new(name, value));
        }

        Ok(Self {
            method: options.method,
            url: url.into(),
            headers,
            cookies,
            body: options.body().into(),
        })
    }

    /// Value of the `Cookie` request header, `None` without cookies.
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        let pairs: Vec<String> = self
            .cookies
            .iter()
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect();
        Some(pairs.join("; "))
    }
}

fn is_cookie_token(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_graphic() && !"()<>@,;:\\\"/[]?={}".contains(c))
}

fn is_cookie_value(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_graphic() && !"\",;\\".contains(c))
}

/// Something able to execute an [`HttpRequest`].
pub trait Transport {
    type Body;

    fn send(&self, request: &HttpRequest) -> Result<ureq::http::Response<Self::Body>, DispatchError>;
}

/// Builds the request for `options` and sends it through `transport`.
///
/// No retry is attempted; the first transport error is returned.
pub fn dispatch_with<T: Transport>(
    transport: &T,
    options: &CurlOptions,
) -> Result<ureq::http::Response<T::Body>, DispatchError> {
    let request = HttpRequest::from_options(options)?;
    debug!(
        "dispatching {} {} ({} headers, {} cookies, {} body bytes)",
        request.method,
        request.url,
        request.headers.len(),
        request.cookies.len(),
        request.body.len()
    );
    let response = transport.send(&request)?;
    debug!("{} {} -> {}", request.method, request.url, response.status());
    Ok(response)
}

pub fn dispatch(
    options: &CurlOptions,
    config: &DispatchConfig,
) -> Result<ureq::http::Response<ureq::Body>, DispatchError> {
    dispatch_with(&UreqTransport::new(config), options)
}

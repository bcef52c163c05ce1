use ureq::{
    http::Response,
    typestate::{WithBody, WithoutBody},
    Agent, Body, RequestBuilder,
};

use crate::{
    curl::Method,
    dispatch::{DispatchConfig, HttpRequest, Transport},
    error::DispatchError,
};

/// Blocking transport backed by a `ureq` agent.
///
/// Status codes are never turned into errors: a 404 or 500 is still a
/// response the caller gets to look at.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new(config: &DispatchConfig) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&DispatchConfig::default())
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, request: &HttpRequest) -> RequestBuilder<B> {
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(cookies) = request.cookie_header() {
        builder = builder.header("Cookie", cookies);
    }
    builder
}

/// GET and DELETE only carry a body when `-d` was given.
fn send_without_body(
    builder: RequestBuilder<WithoutBody>,
    body: &str,
) -> Result<Response<Body>, ureq::Error> {
    if body.is_empty() {
        builder.call()
    } else {
        builder.force_send_body().send(body)
    }
}

fn send_with_body(builder: RequestBuilder<WithBody>, body: &str) -> Result<Response<Body>, ureq::Error> {
    if body.is_empty() {
        builder.send_empty()
    } else {
        builder.send(body)
    }
}

impl Transport for UreqTransport {
    type Body = Body;

    fn send(&self, request: &HttpRequest) -> Result<Response<Body>, DispatchError> {
        let url = request.url.as_str();
        let body = request.body.as_str();

        let result = match request.method {
            Method::Get => send_without_body(with_headers(self.agent.get(url), request), body),
            Method::Delete => {
                send_without_body(with_headers(self.agent.delete(url), request), body)
            }
            Method::Post => send_with_body(with_headers(self.agent.post(url), request), body),
            Method::Put => send_with_body(with_headers(self.agent.put(url), request), body),
        };

        result.map_err(|source| DispatchError::SendFailed {
            method: request.method.to_string(),
            url: request.url.clone(),
            source,
        })
    }
}

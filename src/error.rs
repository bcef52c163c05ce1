use thiserror::Error;

/// Structural errors raised while turning a command string into options.
///
/// Every variant is terminal: the parser stops at the first one and never
/// hands back a partially filled record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("curl command must have at least 2 arguments, got {count}")]
    TooFewTokens { count: usize },
    #[error("missing 'curl' keyword, found '{found}'")]
    MissingKeyword { found: String },
    #[error("flag '{flag}' expects a value")]
    MissingValue { flag: String },
    #[error("invalid method: {method}")]
    InvalidMethod { method: String },
    #[error(r#"data must be contained within "", got {value}"#)]
    UnquotedData { value: String },
    #[error(r#"header must be contained within "", got {value}"#)]
    UnquotedHeader { value: String },
    #[error(r#"cookie must be contained within "", got {value}"#)]
    UnquotedCookie { value: String },
    #[error("invalid header definition: {definition}")]
    InvalidHeaderDefinition { definition: String },
    #[error("invalid cookie definition: {definition}")]
    InvalidCookieDefinition { definition: String },
}

/// Failures while building or sending the outbound request.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("no target url found")]
    MissingUrl,
    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported scheme '{scheme}' in url '{url}', expected http or https")]
    UnsupportedScheme { url: String, scheme: String },
    #[error("url '{url}' has no host")]
    MissingHost { url: String },
    #[error("invalid header '{name}: {value}'")]
    InvalidHeader { name: String, value: String },
    #[error("invalid cookie '{name}={value}'")]
    InvalidCookie { name: String, value: String },
    #[error("failed to send {method} request to {url}: {source}")]
    SendFailed {
        method: String,
        url: String,
        #[source]
        source: ureq::Error,
    },
}

/// Either half of [`crate::execute`] failing.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

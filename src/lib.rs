//! Parse a small subset of cURL commands and execute them.
//!
//! ```no_run
//! let options = curlexec::parse(r#"curl http://example.com -X POST -d "{}""#)?;
//! let response = curlexec::dispatch(&options, &Default::default())?;
//! println!("{}", response.status());
//! # Ok::<(), curlexec::Error>(())
//! ```

pub mod curl;
pub mod dispatch;
pub mod error;
#[cfg(test)]
mod test_util;

pub use curl::{Curl, CurlOptions, Method, curl_parsers::curl_cmd_parse as parse};
pub use dispatch::{
    Cookie, DispatchConfig, HttpRequest, Transport, UreqTransport, dispatch, dispatch_with,
};
pub use error::{DispatchError, Error, ParseError};

/// Parses `command` and sends the resulting request.
pub fn execute(
    command: &str,
    config: &DispatchConfig,
) -> Result<ureq::http::Response<ureq::Body>, Error> {
    let options = parse(command)?;
    Ok(dispatch(&options, config)?)
}

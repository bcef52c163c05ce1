use log::debug;
use nom::{
    bytes::complete::take_till,
    character::complete::char,
    error::context,
    multi::separated_list1,
    IResult,
};

use crate::{
    curl::{handlers::handler_for, CurlOptions},
    error::ParseError,
};

const CURL_CMD: &str = "curl";

pub fn is_curl(token: &str) -> bool {
    token == CURL_CMD
}

pub fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Split on every single space. Runs of spaces yield empty tokens and quotes
/// do not group anything.
pub fn tokens_parse(input: &str) -> IResult<&str, Vec<&str>> {
    context(
        "tokens parse",
        separated_list1(char(' '), take_till(|c: char| c == ' ')),
    )(input)
}

pub fn tokenize(command: &str) -> Vec<&str> {
    tokens_parse(command)
        .map(|(_rest, tokens)| tokens)
        .unwrap_or_else(|_| vec![command])
}

/// Checks the overall shape: at least two tokens, the first being `curl`.
pub fn validate(tokens: &[&str]) -> Result<(), ParseError> {
    if tokens.len() < 2 {
        return Err(ParseError::TooFewTokens {
            count: tokens.len(),
        });
    }
    if !is_curl(tokens[0]) {
        return Err(ParseError::MissingKeyword {
            found: tokens[0].into(),
        });
    }
    Ok(())
}

/// Parses a curl command into [`CurlOptions`].
///
/// Tokens after `curl` are scanned left to right. A registered flag hands its
/// value token to the flag's handler and that token is skipped. Any other
/// non-empty token that does not start with `-` is the url, the last one
/// winning. Unknown flags are ignored. The first error aborts the whole parse.
///
/// Empty tokens left by doubled or trailing spaces are never taken as the
/// url, so `curl http://x.com ` still targets `http://x.com`.
pub fn curl_cmd_parse(command: &str) -> Result<CurlOptions, ParseError> {
    let tokens = tokenize(command);
    debug!("tokenized curl command into {} tokens", tokens.len());
    validate(&tokens)?;

    let mut options = CurlOptions::default();
    let mut index = 1;
    while index < tokens.len() {
        let token = tokens[index];
        if let Some(handler) = handler_for(token) {
            let entry = handler(&tokens, index)?;
            options.merge(entry);
            index += 2;
            continue;
        }
        if !is_flag(token) && !token.is_empty() {
            options.set_url(token);
        }
        index += 1;
    }

    Ok(options)
}

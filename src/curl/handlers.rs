//! Per-flag argument handlers.
//!
//! A handler receives the whole token list and the index of its flag, reads
//! the token right after it and turns it into a single [`Curl`] entry. Handlers
//! hold no state, so the registry is a plain lookup table.

use log::trace;

use crate::{
    curl::{
        parser::{split_definition, unquote},
        Curl, Method,
    },
    error::ParseError,
};

pub type ArgumentHandler = fn(&[&str], usize) -> Result<Curl, ParseError>;

const HANDLERS: &[(&str, ArgumentHandler)] = &[
    ("-X", parse_method_argument),
    ("-d", parse_data_argument),
    ("-H", parse_header_argument),
    ("-b", parse_cookie_argument),
];

pub fn handler_for(flag: &str) -> Option<ArgumentHandler> {
    HANDLERS
        .iter()
        .find(|(name, _)| *name == flag)
        .map(|(_, handler)| *handler)
}

/// The token following `arguments[index]`.
fn flag_value<'a>(arguments: &[&'a str], index: usize) -> Result<&'a str, ParseError> {
    arguments
        .get(index + 1)
        .copied()
        .ok_or_else(|| ParseError::MissingValue {
            flag: arguments.get(index).copied().unwrap_or_default().into(),
        })
}

pub fn parse_method_argument(arguments: &[&str], index: usize) -> Result<Curl, ParseError> {
    let method: Method = flag_value(arguments, index)?.parse()?;
    trace!("method argument: {method}");
    Ok(Curl::Method(method))
}

pub fn parse_data_argument(arguments: &[&str], index: usize) -> Result<Curl, ParseError> {
    let value = flag_value(arguments, index)?;
    let data = unquote(value).ok_or_else(|| ParseError::UnquotedData {
        value: value.into(),
    })?;
    trace!("data argument: {data}");
    Ok(Curl::Data(data.into()))
}

/// Generates a handler for a quoted `name<sep>value` definition.
macro_rules! definition_handler {
    ($name:ident, $separator:expr, $unquoted:ident, $invalid:ident, $variant:ident) => {
        pub fn $name(arguments: &[&str], index: usize) -> Result<Curl, ParseError> {
            let value = flag_value(arguments, index)?;
            let definition = unquote(value).ok_or_else(|| ParseError::$unquoted {
                value: value.into(),
            })?;
            let (key, value) = split_definition(definition, $separator).ok_or_else(|| {
                ParseError::$invalid {
                    definition: definition.into(),
                }
            })?;
            trace!("{}: {key}{}{value}", stringify!($name), $separator);
            Ok(Curl::$variant(key.into(), value.into()))
        }
    };
}

definition_handler!(parse_header_argument, ':', UnquotedHeader, InvalidHeaderDefinition, Header);
definition_handler!(parse_cookie_argument, '=', UnquotedCookie, InvalidCookieDefinition, Cookie);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("-X", true)]
    #[case("-d", true)]
    #[case("-H", true)]
    #[case("-b", true)]
    #[case("--data", false)]
    #[case("-x", false)]
    #[case("--insecure", false)]
    fn test_handler_for(#[case] flag: &str, #[case] registered: bool) {
        assert_eq!(handler_for(flag).is_some(), registered)
    }

    #[rstest]
    #[case(parse_method_argument, "-X")]
    #[case(parse_data_argument, "-d")]
    #[case(parse_header_argument, "-H")]
    #[case(parse_cookie_argument, "-b")]
    fn test_flag_as_last_token(#[case] handler: ArgumentHandler, #[case] flag: &str) {
        let arguments = ["curl", "http://x.com", flag];
        assert_eq!(
            handler(&arguments, 2),
            Err(ParseError::MissingValue { flag: flag.into() })
        );
    }

    #[test]
    fn test_method_argument() {
        let arguments = ["curl", "-X", "PUT"];
        assert_eq!(
            parse_method_argument(&arguments, 1),
            Ok(Curl::Method(Method::Put))
        );
        let arguments = ["curl", "-X", "post"];
        assert_eq!(
            parse_method_argument(&arguments, 1),
            Err(ParseError::InvalidMethod {
                method: "post".into()
            })
        );
    }

    #[test]
    fn test_data_argument() {
        let arguments = ["curl", "-d", r#""{"a":1}""#];
        assert_eq!(
            parse_data_argument(&arguments, 1),
            Ok(Curl::Data(r#"{"a":1}"#.into()))
        );
        let arguments = ["curl", "-d", "raw"];
        assert_eq!(
            parse_data_argument(&arguments, 1),
            Err(ParseError::UnquotedData {
                value: "raw".into()
            })
        );
    }

    #[rstest]
    #[case(r#""Accept:json""#, Ok(Curl::Header("Accept".into(), "json".into())))]
    #[case("Accept:json", Err(ParseError::UnquotedHeader { value: "Accept:json".into() }))]
    #[case(r#""Accept""#, Err(ParseError::InvalidHeaderDefinition { definition: "Accept".into() }))]
    #[case(r#""Host:x:80""#, Err(ParseError::InvalidHeaderDefinition { definition: "Host:x:80".into() }))]
    fn test_header_argument(#[case] value: &str, #[case] expected: Result<Curl, ParseError>) {
        let arguments = ["curl", "-H", value];
        assert_eq!(parse_header_argument(&arguments, 1), expected);
    }

    #[rstest]
    #[case(r#""session=abc123""#, Ok(Curl::Cookie("session".into(), "abc123".into())))]
    #[case("session=abc123", Err(ParseError::UnquotedCookie { value: "session=abc123".into() }))]
    #[case(r#""session""#, Err(ParseError::InvalidCookieDefinition { definition: "session".into() }))]
    #[case(r#""a=b=c""#, Err(ParseError::InvalidCookieDefinition { definition: "a=b=c".into() }))]
    fn test_cookie_argument(#[case] value: &str, #[case] expected: Result<Curl, ParseError>) {
        let arguments = ["curl", "-b", value];
        assert_eq!(parse_cookie_argument(&arguments, 1), expected);
    }
}

use winnow::{
    combinator::{eof, separated_pair, terminated},
    token::take_till,
    ModalResult, Parser,
};

/// Strips one pair of surrounding double quotes.
///
/// Inner quotes are kept as they are, there is no escaping. A lone `"` is not
/// a quoted value.
pub fn unquote(value: &str) -> Option<&str> {
    value.strip_prefix('"')?.strip_suffix('"')
}

/// Splits `name<sep>value`, requiring exactly one separator.
///
/// Both halves are returned verbatim, whitespace included.
pub fn split_definition(definition: &str, separator: char) -> Option<(&str, &str)> {
    let mut input = definition;
    let parsed: ModalResult<(&str, &str)> = terminated(
        separated_pair(
            take_till(0.., separator),
            separator,
            take_till(0.., separator),
        ),
        eof,
    )
    .parse_next(&mut input);
    parsed.ok()
}

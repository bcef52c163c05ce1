use crate::{curl::curl_parsers::curl_cmd_parse, error::ParseError};

#[allow(unused)]
pub fn generic_parse<F, I, T>(parser: F, input: I, expect: T)
where
    F: Fn(I) -> T,
    T: PartialEq + std::fmt::Debug,
    I: std::fmt::Debug,
{
    let result = parser(input);
    assert_eq!(
        expect, result,
        "The expect:\r\n({:?}) should be same with the result:\r\n({:?})",
        expect, result
    );
}

/// Asserts that `command` parses into exactly `expect` as a flat option map.
#[allow(unused)]
pub fn assert_option_map(command: &str, expect: &[(&str, &str)]) {
    let result = curl_cmd_parse(command);
    assert!(result.is_ok(), "The result:\r\n{:#?}", result);
    let map = result.unwrap().to_option_map();
    let expect: std::collections::BTreeMap<String, String> = expect
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(
        expect, map,
        "The expect:\r\n({:?}) should be same with the result:\r\n({:?})",
        expect, map
    );
}

#[allow(unused)]
pub fn assert_parse_error(command: &str, expect: ParseError) {
    let result = curl_cmd_parse(command);
    assert_eq!(
        Err(expect.clone()),
        result,
        "The expect:\r\n({:?}) should be same with the result:\r\n({:?})",
        expect,
        result
    );
}

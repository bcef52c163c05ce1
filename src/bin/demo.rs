use curlexec::parse;

fn main() {
    let curl_command = r#"curl http://example.com -X POST -H "Accept:application/json" -b "session=abc123" -d "{"a":1}""#;
    let result = parse(curl_command);
    println!("{:?}", result);
}

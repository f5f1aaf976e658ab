use html2text::{convert_with_options, Error, Options};

const LIST: &str = r#"Links:<ul><li><a href="/one">One</a></li><li>Two</li></ul>"#;

#[test]
fn json_mapping_drives_conversion() {
    let options = Options::from_json(
        r#"{"unixLineBreaks": true, "linksInnerText": true, "listSupport": true}"#,
    )
    .expect("valid options");

    assert_eq!(
        convert_with_options(LIST, &options),
        "Links:\n - One </one>\n - Two\n"
    );
}

#[test]
fn omitted_keys_keep_defaults() {
    let options = Options::from_json(r#"{"listSupport": true}"#).expect("valid options");

    assert_eq!(
        convert_with_options(LIST, &options),
        "Links:\r\n - /one\r\n - Two\r\n"
    );
}

#[test]
fn default_options_match_empty_mapping() {
    let options = Options::from_json("{}").expect("valid options");
    assert_eq!(
        convert_with_options(LIST, &options),
        convert_with_options(LIST, &Options::default())
    );
}

#[test]
fn malformed_mapping_is_an_error() {
    match Options::from_json("{unixLineBreaks: true}") {
        Err(Error::InvalidOptions(err)) => assert!(err.is_syntax()),
        other => panic!("expected InvalidOptions, got {other:?}"),
    }
}

#[test]
fn max_link_depth_from_json() {
    let options = Options::from_json(r#"{"maxLinkDepth": 2}"#).expect("valid options");
    let html = r#"<a href="1"><a href="2"><a href="3">deep</a></a></a>"#;

    // the third anchor is plain text; the outermost still replaces everything
    assert_eq!(convert_with_options(html, &options), "1");
}

#[test]
fn options_are_reusable_across_calls() {
    let options = Options {
        unix_line_breaks: true,
        ..Options::default()
    };

    let first = convert_with_options("a<br>b", &options);
    let second = convert_with_options("a<br>b", &options);
    assert_eq!(first, "a\nb");
    assert_eq!(first, second);
}

use html2text::{convert_bytes, convert_bytes_with_options, Options};

#[test]
fn utf8_bytes_convert() {
    let html = "<html><head><meta charset=\"utf-8\"></head><body><p>é, ñ, ü, 中文</p></body></html>";
    assert_eq!(convert_bytes(html.as_bytes()), "é, ñ, ü, 中文");
}

#[test]
fn latin1_declared_in_meta() {
    let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9 &amp; cr\xE8me</body></html>";
    assert_eq!(convert_bytes(html), "Café & crème");
}

#[test]
fn charset_from_http_equiv() {
    let html = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\">\x93quoted\x94";
    assert_eq!(convert_bytes(html), "\u{201C}quoted\u{201D}");
}

#[test]
fn undeclared_invalid_bytes_are_replaced() {
    let text = convert_bytes(b"ok \xFF done");
    assert_eq!(text, "ok \u{FFFD} done");
}

#[test]
fn bytes_with_options() {
    let options = Options {
        unix_line_breaks: true,
        links_inner_text: true,
        ..Options::default()
    };
    let html = b"<meta charset=\"windows-1252\"><h2>Men\xFC</h2><a href=\"/m\">See</a>";
    assert_eq!(
        convert_bytes_with_options(html, &options),
        "Men\u{FC}\n\nSee </m>"
    );
}

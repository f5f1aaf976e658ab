//! HTML character reference decoding.
//!
//! Only a small set of named references is recognised, plus decimal
//! (`&#8268;`) and hexadecimal (`&#x204D;`) numeric references. Anything
//! else is left in the text untouched.

/// Number of characters after `&` searched for the terminating `;`.
pub const MAX_ENTITY_LOOKAHEAD: usize = 10;

/// Named references and the character each one stands for.
pub static NAMED_ENTITIES: [(&str, char); 12] = [
    ("nbsp", ' '),
    ("gt", '>'),
    ("lt", '<'),
    ("amp", '&'),
    ("quot", '"'),
    ("apos", '\''),
    ("cent", '¢'),
    ("pound", '£'),
    ("yen", '¥'),
    ("euro", '€'),
    ("copy", '©'),
    ("reg", '®'),
];

/// Decodes every recognised character reference in `text`.
///
/// Unknown references, references whose `;` lies beyond the lookahead
/// window, and bare ampersands are copied through literally.
///
/// # Examples
///
/// ```
/// use html2text::decode_entities;
///
/// assert_eq!(decode_entities("fish &amp; chips"), "fish & chips");
/// assert_eq!(decode_entities("&#8268; and &#x204D;"), "⁌ and ⁍");
/// assert_eq!(decode_entities("Tom & Jerry"), "Tom & Jerry");
/// assert_eq!(decode_entities("&neither;"), "&neither;");
/// ```
#[must_use]
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some((ch, len)) = resolve_entity(after) {
            out.push(ch);
            rest = &after[len..];
        } else {
            // Only the ampersand is committed; a later `&` inside the
            // unresolved span still gets its own attempt.
            out.push('&');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

/// Tries to resolve the reference starting right after an `&`.
///
/// Returns the decoded character and the number of bytes of `after_amp`
/// consumed, including the terminating `;`.
#[must_use]
pub fn resolve_entity(after_amp: &str) -> Option<(char, usize)> {
    let end = after_amp
        .char_indices()
        .take(MAX_ENTITY_LOOKAHEAD)
        .find(|&(_, c)| c == ';')
        .map(|(i, _)| i)?;

    let name = &after_amp[..end];
    let decoded = match name.strip_prefix('#') {
        Some(number) => parse_numeric(number),
        None => lookup_named(name),
    }?;

    Some((decoded, end + 1))
}

/// Looks up a named reference, ignoring ASCII case.
#[must_use]
pub fn lookup_named(name: &str) -> Option<char> {
    NAMED_ENTITIES
        .iter()
        .find(|(entity, _)| entity.eq_ignore_ascii_case(name))
        .map(|&(_, ch)| ch)
}

/// Parses the part of a numeric reference after `#`: either decimal digits
/// or `x`/`X` followed by hex digits.
fn parse_numeric(number: &str) -> Option<char> {
    let (digits, radix) = match number.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16),
        None => (number, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let code = u32::from_str_radix(digits, radix).ok()?;
    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_named_entity_any_case() {
        for (name, ch) in NAMED_ENTITIES {
            let expected = ch.to_string();
            assert_eq!(decode_entities(&format!("&{name};")), expected, "{name}");
            assert_eq!(
                decode_entities(&format!("&{};", name.to_ascii_uppercase())),
                expected,
                "{name} upper"
            );
        }
        assert_eq!(decode_entities("&Copy;"), "©");
    }

    #[test]
    fn test_decimal_and_hex_references() {
        assert_eq!(decode_entities("&#8268;"), "⁌");
        assert_eq!(decode_entities("&#x204D;"), "⁍");
        assert_eq!(decode_entities("&#X204d;"), "⁍");
        assert_eq!(
            decode_entities("&#39;single quotes&#39; and &#52765;"),
            "'single quotes' and 츝"
        );
    }

    #[test]
    fn test_unknown_name_passes_through() {
        assert_eq!(decode_entities("&neither;"), "&neither;");
        assert_eq!(decode_entities("this &neither; as you see"), "this &neither; as you see");
    }

    #[test]
    fn test_bare_ampersand() {
        assert_eq!(decode_entities("Tom & Jerry"), "Tom & Jerry");
        assert_eq!(decode_entities("&"), "&");
        assert_eq!(decode_entities("trailing &"), "trailing &");
    }

    #[test]
    fn test_lookahead_window() {
        // `;` is the 11th character after `&`
        assert_eq!(decode_entities("&abcdefghij;"), "&abcdefghij;");
        // `;` is the 10th character: inside the window, but unknown
        assert_eq!(decode_entities("&abcdefghi;"), "&abcdefghi;");
        assert_eq!(decode_entities("&#0000000065;"), "&#0000000065;");
        assert_eq!(decode_entities("&#00000065;"), "A");
    }

    #[test]
    fn test_nested_ampersand_in_unresolved_span() {
        assert_eq!(decode_entities("&a&amp;"), "&a&");
        assert_eq!(decode_entities("&&lt;"), "&<");
    }

    #[test]
    fn test_invalid_numeric_references() {
        assert_eq!(decode_entities("&#;"), "&#;");
        assert_eq!(decode_entities("&#x;"), "&#x;");
        assert_eq!(decode_entities("&#12a;"), "&#12a;");
        assert_eq!(decode_entities("&#+65;"), "&#+65;");
        // surrogate code point
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
        assert_eq!(decode_entities("&#x110000;"), "&#x110000;");
    }

    #[test]
    fn test_multibyte_text_around_entities() {
        assert_eq!(decode_entities("héllo&nbsp;wörld"), "héllo wörld");
        assert_eq!(decode_entities("&ééééééééééé;"), "&ééééééééééé;");
    }

    #[test]
    fn test_resolve_entity_reports_consumed_bytes() {
        assert_eq!(resolve_entity("amp; rest"), Some(('&', 4)));
        assert_eq!(resolve_entity("#x41;"), Some(('A', 5)));
        assert_eq!(resolve_entity("amp"), None);
        assert_eq!(resolve_entity(""), None);
    }
}

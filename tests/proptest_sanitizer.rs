use ipscout::ip::{classify, AddressClass};
use ipscout::utils::{escape_markdown_v2, MARKDOWN_V2_RESERVED};
use proptest::prelude::*;

/// Strips one backslash before each reserved character. Inverse of the
/// escaper for any input.
fn unescape(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '\\'
            && i + 1 < chars.len()
            && MARKDOWN_V2_RESERVED.contains(&chars[i + 1])
        {
            out.push(chars[i + 1]);
            i += 2;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

proptest! {
    /// Escaping must not crash on any valid UTF-8 input.
    #[test]
    fn escape_does_not_crash(s in "\\PC*") {
        let _ = escape_markdown_v2(&s);
    }

    /// Every reserved character in the output must sit right after a
    /// backslash, so the output is always safe to interpolate.
    #[test]
    fn escaped_output_has_no_naked_reserved_chars(s in "\\PC*") {
        let escaped = escape_markdown_v2(&s);
        let chars: Vec<char> = escaped.chars().collect();

        for (i, c) in chars.iter().enumerate() {
            if MARKDOWN_V2_RESERVED.contains(c) {
                prop_assert!(i > 0, "reserved char {c:?} at start of {escaped:?}");
                prop_assert_eq!(
                    chars[i - 1], '\\',
                    "reserved char {:?} not escaped in {:?}", c, &escaped
                );
            }
        }
    }

    /// Text without reserved characters passes through untouched.
    #[test]
    fn escape_is_identity_on_plain_text(s in "[a-zA-Z0-9 ]*") {
        prop_assert_eq!(escape_markdown_v2(&s), s);
    }

    /// The escaper only ever adds backslashes, one per reserved character.
    #[test]
    fn escape_adds_one_backslash_per_reserved_char(s in "\\PC*") {
        let reserved_count = s
            .chars()
            .filter(|c| MARKDOWN_V2_RESERVED.contains(c))
            .count();
        let escaped = escape_markdown_v2(&s);
        prop_assert_eq!(escaped.chars().count(), s.chars().count() + reserved_count);
    }

    /// Unescaping recovers the original input exactly.
    #[test]
    fn escape_roundtrips(s in "\\PC*") {
        prop_assert_eq!(unescape(&escape_markdown_v2(&s)), s);
    }

    /// Whitespace anywhere in the input disqualifies it as an address.
    #[test]
    fn whitespace_never_classifies(s in "\\PC*[ \\t\\n]\\PC*") {
        prop_assert_eq!(classify(&s), AddressClass::NotAnAddress);
    }

    /// Any four octets joined with dots form a valid IPv4 address, and any
    /// trailing junk breaks it.
    #[test]
    fn generated_ipv4_classifies(a in 0u8..=255, b in 0u8..=255, c in 0u8..=255, d in 0u8..=255) {
        let addr = format!("{a}.{b}.{c}.{d}");
        prop_assert_eq!(classify(&addr), AddressClass::Ipv4);
        prop_assert_eq!(classify(&format!("{addr}x")), AddressClass::NotAnAddress);
        prop_assert_eq!(classify(&format!("ip {addr}")), AddressClass::NotAnAddress);
    }
}

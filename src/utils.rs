//! Utility functions for text sanitizing and message formatting.
//!
//! Telegram MarkdownV2 treats a fixed set of punctuation as markup. Every
//! untrusted string that gets interpolated into an outbound message (user
//! names, provider fields, error details) must pass through
//! [`escape_markdown_v2`] exactly once, at the point of interpolation.

/// Characters reserved by Telegram MarkdownV2 that must be escaped when they
/// appear as literal content.
pub const MARKDOWN_V2_RESERVED: &[char] = &[
    '_', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Escapes MarkdownV2 reserved characters by prefixing each with a backslash.
///
/// All other characters, including multi-byte ones, pass through unchanged.
/// The function is not idempotent: applying it twice doubles the escapes, so
/// callers apply it once per field and never to an already-composed message.
///
/// # Examples
///
/// ```
/// use ipscout::utils::escape_markdown_v2;
/// assert_eq!(escape_markdown_v2("8.8.8.8"), "8\\.8\\.8\\.8");
/// assert_eq!(escape_markdown_v2("AS15169 Google LLC"), "AS15169 Google LLC");
/// ```
#[must_use]
pub fn escape_markdown_v2(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_V2_RESERVED.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Safely truncates a string to a maximum character length (not bytes).
///
/// This is UTF-8 safe and will not panic on multi-byte characters.
///
/// # Examples
///
/// ```
/// use ipscout::utils::truncate_str;
/// assert_eq!(truncate_str("🌍🌍🌍🌍", 2), "🌍🌍");
/// ```
pub fn truncate_str(s: impl AsRef<str>, max_chars: usize) -> String {
    let s = s.as_ref();
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    s.char_indices()
        .nth(max_chars)
        .map_or_else(|| s.to_string(), |(pos, _)| s[..pos].to_string())
}

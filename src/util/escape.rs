//! Escaping for the backend's query syntax.

/// Characters with special meaning in the backend query parser.
const SPECIAL_CHARS: &[char] = &[
    '+', '-', '&', '|', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*', '?', ':', '\\', '/',
];

/// Backslash-escape every query-syntax metacharacter in `input`.
///
/// Whitespace is escaped as well, so a multi-word identifier stays a single
/// term when embedded in a boolean phrase. The function is total: any input
/// produces a string safe to splice into the query language.
pub fn escape_query_chars(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_whitespace() || SPECIAL_CHARS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

//! Grammar validation helpers for media type names.
//!
//! Based on the RFC 6838 restricted-name definitions:
//!
//! ```text
//! type-name = restricted-name
//! subtype-name = restricted-name
//! restricted-name = restricted-name-first *126restricted-name-chars
//! restricted-name-first  = ALPHA / DIGIT
//! restricted-name-chars  = ALPHA / DIGIT / "!" / "#" /
//!                          "$" / "&" / "-" / "^" / "_"
//! restricted-name-chars =/ "." ; facet separator
//! restricted-name-chars =/ "+" ; structured syntax suffix separator
//! ```
//!
//! All matchers are anchored, single-pass scans over the input.

/// Maximum length of a single restricted-name.
pub const MAX_NAME_LEN: usize = 127;

/// Reports whether the character may start a restricted-name.
///
/// restricted-name-first := ALPHA / DIGIT
pub fn is_restricted_name_first(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Reports whether the character is in 'restricted-name-chars', without the
/// facet and suffix extensions.
pub fn is_restricted_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '!' | '#' | '$' | '&' | '^' | '_' | '-')
}

fn is_subtype_name_char(c: char) -> bool {
    is_restricted_name_char(c) || c == '.'
}

fn is_suffixed_subtype_char(c: char) -> bool {
    is_subtype_name_char(c) || c == '+'
}

/// Matches `s` in full against a restricted-name whose trailing characters
/// are accepted by `rest`.
fn is_name_with(s: &str, rest: fn(char) -> bool) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_restricted_name_first(first) => {}
        _ => return false,
    }

    // Every accepted character is ASCII, so byte length equals char count.
    chars.all(rest) && s.len() <= MAX_NAME_LEN
}

/// Reports whether the string is a valid type name.
pub fn is_type_name(s: &str) -> bool {
    is_name_with(s, is_restricted_name_char)
}

/// Reports whether the string is a valid subtype name.
///
/// Subtype names may additionally contain `.` facet separators.
pub fn is_subtype_name(s: &str) -> bool {
    is_name_with(s, is_subtype_name_char)
}

/// Reports whether the string is a valid structured syntax suffix.
///
/// Suffixes use the strict type name grammar, so `.` is not allowed.
pub fn is_suffix_name(s: &str) -> bool {
    is_type_name(s)
}

/// Matches the composite `type/subtype` token and returns its two halves.
///
/// Leading and trailing space characters around the whole token are
/// tolerated. The subtype half may contain both `.` and `+`; splitting off
/// a suffix is left to the caller. Returns `None` unless the entire input
/// matches.
pub fn split_media_type(s: &str) -> Option<(&str, &str)> {
    let (major, sub) = s.trim_matches(' ').split_once('/')?;

    if is_type_name(major) && is_name_with(sub, is_suffixed_subtype_char) {
        Some((major, sub))
    } else {
        None
    }
}

/// Reports whether the string matches the composite `type/subtype` token.
pub fn is_media_type(s: &str) -> bool {
    split_media_type(s).is_some()
}

//! URI normalization and scheme extraction.

/// Schemes that execute code. Never accepted, whatever the policy says.
pub const EXECUTABLE_SCHEMES: &[&str] = &["javascript", "vbscript", "livescript"];

/// Schemes that load content from another host.
const REMOTE_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// The scheme part of a URI reference.
#[derive(Debug, PartialEq, Eq)]
pub enum Scheme<'a> {
    /// Relative reference, fragment or empty value.
    None,
    /// A syntactically valid scheme, lowercased.
    Named(&'a str),
    /// Something before a `:` that is not a valid scheme.
    Invalid,
}

/// Strip whitespace and control characters, fold `\` to `/` and lowercase.
///
/// Browsers ignore these characters when they parse a scheme, so
/// `jav&#9;ascript:` and ` JAVASCRIPT:` must both be seen as `javascript:`.
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .map(|c| if c == '\\' { '/' } else { c.to_ascii_lowercase() })
        .collect()
}

/// Extract the scheme of an already normalized URI reference.
pub fn scheme(normalized: &str) -> Scheme<'_> {
    let Some(colon) = normalized.find(':') else {
        return Scheme::None;
    };
    let candidate = &normalized[..colon];
    if candidate.contains(['/', '?', '#']) {
        return Scheme::None;
    }

    let mut chars = candidate.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    if valid {
        Scheme::Named(candidate)
    } else {
        Scheme::Invalid
    }
}

/// Media type of a normalized `data:` URI, e.g. `image/png`.
pub fn data_media_type(normalized: &str) -> &str {
    let rest = normalized.strip_prefix("data:").unwrap_or(normalized);
    let end = rest.find([';', ',']).unwrap_or(rest.len());
    &rest[..end]
}

/// True for references that point at another host.
pub fn is_remote(normalized: &str) -> bool {
    if normalized.starts_with("//") {
        return true;
    }
    matches!(scheme(normalized), Scheme::Named(s) if REMOTE_SCHEMES.contains(&s))
}

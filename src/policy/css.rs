//! Checks for CSS found in `style` attributes, `<style>` elements and
//! paint references such as `fill="url(#gradient)"`.

use std::sync::LazyLock;

use regex::Regex;

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex"));

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)url\(\s*(?:"([^"]*)"|'([^']*)'|([^)]*?))\s*\)"#).expect("valid regex")
});

/// `image-set(` and `-webkit-image-set(` take bare strings as URLs.
static IMAGE_SET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)image-set\(").expect("valid regex"));

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)"|'([^']*)'"#).expect("valid regex"));

/// Constructs that execute script or pull in other stylesheets.
const FORBIDDEN: &[&str] = &[
    "expression(",
    "javascript:",
    "vbscript:",
    "livescript:",
    "-moz-binding",
    "behavior:",
    "@import",
];

/// Quick test for values that call a CSS function such as `url(` or
/// `image-set(`.
pub fn has_function_call(value: &str) -> bool {
    value.contains('(')
}

/// Every URL `css` loads, comments removed: the targets of `url(...)` and
/// the string arguments of `image-set(...)`.
pub fn url_targets(css: &str) -> Vec<String> {
    let css = COMMENT.replace_all(css, "");
    let mut targets: Vec<String> = URL
        .captures_iter(&css)
        .filter_map(|caps| caps.get(1).or(caps.get(2)).or(caps.get(3)))
        .map(|m| m.as_str().to_string())
        .collect();

    for call in IMAGE_SET.find_iter(&css) {
        let arguments = arguments_of(&css[call.end()..]);
        targets.extend(
            QUOTED
                .captures_iter(arguments)
                .filter_map(|caps| caps.get(1).or(caps.get(2)))
                .map(|m| m.as_str().to_string()),
        );
    }
    targets
}

/// The text up to the `)` closing an already opened call. Unbalanced input
/// yields the whole remainder.
fn arguments_of(rest: &str) -> &str {
    let mut depth = 1usize;
    for (i, c) in rest.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return &rest[..i];
                }
            }
            _ => {}
        }
    }
    rest
}

/// True if `css` contains a forbidden construct or a CSS escape sequence.
///
/// Escapes are rejected outright: `\6a avascript:` spells `javascript:`.
pub fn has_forbidden_construct(css: &str) -> bool {
    if css.contains('\\') {
        return true;
    }
    let without_comments = COMMENT.replace_all(css, "");
    let compact: String = without_comments
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    FORBIDDEN.iter().any(|needle| compact.contains(needle))
}

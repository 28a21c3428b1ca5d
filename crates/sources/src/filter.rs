//! Text cleanup for fetched metadata.
//!
//! READMEs are full of status badges and inline markup that embed poorly:
//! badge lines in particular are dense with CI and coverage vocabulary and
//! cause false positives against test/quality taxonomy categories. These
//! helpers are deterministic, pure string transforms.

use std::sync::OnceLock;

use regex::Regex;

/// Drop badge lines: any line starting with `![` or `[![`.
pub fn strip_badges(text: &str) -> String {
    text.lines()
        .filter(|line| !line.starts_with("![") && !line.starts_with("[!["))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove inline tag fragments: `<...>` runs that do not span a newline,
/// including an unterminated trailing fragment.
pub fn strip_markup(text: &str) -> String {
    tag_pattern().replace_all(text, "").into_owned()
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<[^>\n]+(?:>|$)").expect("tag pattern is valid"))
}

/// Apply both cleanup passes in badge-then-markup order.
pub fn clean_text(text: &str) -> String {
    strip_markup(&strip_badges(text))
}

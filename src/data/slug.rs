use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]+").unwrap());
static HYPHEN_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// Derive the URL slug of a course title.
///
/// Lowercase, whitespace runs become `-`, anything outside `[A-Za-z0-9_-]`
/// is dropped, repeated hyphens collapse and edge hyphens are trimmed.
/// Two identical titles give the same slug.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let hyphenated = WHITESPACE.replace_all(&lower, "-");
    let stripped = NON_WORD.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUNS.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

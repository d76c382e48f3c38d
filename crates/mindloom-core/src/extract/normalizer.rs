use std::sync::LazyLock;

use regex::Regex;

static NON_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\s]+").expect("literal pattern compiles"));

/// Reduce raw note text to lowercase letters and whitespace.
///
/// Total over all inputs; whitespace runs are kept as-is. Anything outside
/// `a-z` after lowercasing (digits, punctuation, accented letters) is
/// dropped.
#[must_use]
pub fn normalize(text: &str) -> String {
    NON_ALPHA.replace_all(&text.to_lowercase(), "").into_owned()
}

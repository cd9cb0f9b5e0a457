// Tokenizer — splits free text into words.
//
// A word is a maximal run of ASCII word characters (letters, digits,
// underscore). Everything else, including non-ASCII letters, delimits.
// Case is preserved.

use std::sync::LazyLock;

use regex_lite::Regex;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    // regex-lite's \w is ASCII-only, spelled out here to make that explicit
    Regex::new(r"[A-Za-z0-9_]+").unwrap_or_else(|e| panic!("invalid word regex: {e}"))
});

/// Iterate the words of `text` in order. Never yields an empty token.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(text).map(|m| m.as_str())
}

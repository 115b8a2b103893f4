//! Lexical helpers shared by the export and import scanners.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Strings (kept verbatim) or comments (removed), whichever starts first.
static COMMENT_OR_STRING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#""(?:\\.|[^"\\\n])*"|'(?:\\.|[^'\\\n])*'|`(?:\\.|[^`\\])*`|/\*[\s\S]*?\*/|//[^\n]*"#,
    )
    .expect("comment regex is valid")
});

/// Remove line and block comments from JavaScript/TypeScript source.
///
/// String and template literals are left untouched, so `"https://..."` is not
/// mistaken for a comment. Block comments keep their line breaks so line
/// anchored patterns still see the same line structure.
pub fn strip_comments(source: &str) -> String {
    COMMENT_OR_STRING
        .replace_all(source, |caps: &Captures<'_>| {
            let text = &caps[0];
            if text.starts_with("/*") {
                let newlines: String = text.chars().filter(|&c| c == '\n').collect();
                if newlines.is_empty() {
                    " ".to_string()
                } else {
                    newlines
                }
            } else if text.starts_with("//") {
                String::new()
            } else {
                text.to_string()
            }
        })
        .into_owned()
}

/// Check whether `word` occurs in `text` as a whole identifier.
pub fn contains_identifier(text: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let is_ident = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$';

    text.match_indices(word).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + word.len()..].chars().next();
        !before.is_some_and(is_ident) && !after.is_some_and(is_ident)
    })
}

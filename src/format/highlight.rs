//! Query-term highlighting for abstract display.

use regex::Regex;

/// Wrap every case-insensitive occurrence of each whitespace-split query
/// token in `**` emphasis markers, preserving the matched text's original
/// casing.
///
/// Matching is literal substring matching, not word-boundary matching: a
/// query word that is a substring of a longer word highlights inside that
/// word. Applied at presentation time only; the stored abstract is never
/// modified.
pub fn highlight(text: &str, query: &str) -> String {
    let mut highlighted = text.to_string();

    for token in query.split_whitespace() {
        let Ok(pattern) = Regex::new(&format!("(?i){}", regex::escape(token))) else {
            continue;
        };
        highlighted = pattern
            .replace_all(&highlighted, |caps: &regex::Captures<'_>| {
                format!("**{}**", &caps[0])
            })
            .into_owned();
    }

    highlighted
}

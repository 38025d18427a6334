// WHY: standalone text transforms so every view can share one normalization pass
// All functions here are pure and total; the streams in `corpus` call them per document.

use once_cell::sync::Lazy;
use regex_automata::meta::Regex;
use std::borrow::Cow;

/// Inline citation marker, e.g. `<hom. il. 1.1> `, including the single trailing whitespace
static CITATION_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<.+?>\s").expect("citation marker pattern compiles"));

/// A newline, optional whitespace, and another newline
static BLANK_LINE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern compiles"));

/// Delimiter between paragraphs in normalized text
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

/// Replace every leftmost-first match of `re`, borrowing when nothing matches
fn replace_all<'a>(re: &Regex, text: &'a str, replacement: &str) -> Cow<'a, str> {
    let mut matches = re.find_iter(text).peekable();
    if matches.peek().is_none() {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;
    for m in matches {
        result.push_str(&text[last_end..m.start()]);
        result.push_str(replacement);
        last_end = m.end();
    }
    result.push_str(&text[last_end..]);
    Cow::Owned(result)
}

/// Delete every citation marker together with the whitespace character that follows it
pub fn strip_citations(raw: &str) -> Cow<'_, str> {
    replace_all(&CITATION_MARKER, raw, "")
}

/// Produce normalized document text.
///
/// Citation markers are removed when `strip` is set; trailing whitespace and
/// line breaks are removed regardless.
pub fn normalize_text(raw: &str, strip: bool) -> String {
    if strip {
        strip_citations(raw).trim_end().to_string()
    } else {
        raw.trim_end().to_string()
    }
}

/// Split normalized text on blank lines, keeping empty segments
pub fn split_paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split(PARAGRAPH_DELIMITER)
}

/// Collapse each run of blank lines into a single newline
pub fn collapse_blank_lines(text: &str) -> Cow<'_, str> {
    replace_all(&BLANK_LINE_RUN, text, "\n")
}

/// Split text into lines after collapsing blank-line runs.
/// Paragraph boundaries are not observable through this view.
pub fn split_lines(text: &str) -> Vec<String> {
    collapse_blank_lines(text)
        .split('\n')
        .map(str::to_string)
        .collect()
}

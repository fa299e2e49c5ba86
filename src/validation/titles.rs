/*!
 * Poem title detection.
 *
 * A poetry collection usually contains several titled poems. Titles are
 * recognised per trimmed line by four patterns, checked in order:
 * - bold markdown: `**Title**`
 * - italic markdown: `*Title*`
 * - markdown heading: `# Title`
 * - a short capitalised line without sentence punctuation
 *
 * The last pattern is a loose heuristic and also matches short
 * capitalised verse lines.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum number of words for a capitalised line to count as a title
const MAX_TITLE_WORDS: usize = 5;

static BOLD_TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\*.*\*\*$").expect("Invalid bold title regex")
});

static ITALIC_TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*.*\*$").expect("Invalid italic title regex")
});

static HEADING_TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#").expect("Invalid heading title regex")
});

static CAPITALIZED_TITLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\p{Lu}[^.!?]*$").expect("Invalid capitalized title regex")
});

/// Which pattern recognised a title line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleStyle {
    /// `**Title**`
    Bold,
    /// `*Title*`
    Italic,
    /// `# Title`
    Heading,
    /// Short capitalised line
    Capitalized,
}

/// Classify a single line as a title, if any pattern matches.
pub fn detect_title(line: &str) -> Option<TitleStyle> {
    let line = line.trim();
    let len = line.chars().count();

    if len > 4 && BOLD_TITLE_REGEX.is_match(line) {
        return Some(TitleStyle::Bold);
    }
    if len > 2 && ITALIC_TITLE_REGEX.is_match(line) {
        return Some(TitleStyle::Italic);
    }
    if len > 2 && HEADING_TITLE_REGEX.is_match(line) {
        return Some(TitleStyle::Heading);
    }
    if CAPITALIZED_TITLE_REGEX.is_match(line) && line.split_whitespace().count() <= MAX_TITLE_WORDS {
        return Some(TitleStyle::Capitalized);
    }

    None
}

/// All title lines of `text`, trimmed, in document order
pub fn detect_titles(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| detect_title(line).is_some())
        .map(str::to_string)
        .collect()
}

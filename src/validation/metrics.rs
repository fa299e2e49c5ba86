/*!
 * Structural and lexical metrics for generated content.
 *
 * Metrics are computed in a single pass over the text and never cached;
 * every call to [`ValidationMetrics::analyze`] starts from scratch.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::titles::detect_titles;
use super::vocabulary::{count_terms, NARRATIVE_TERMS, POETRY_TERMS, STRONG_NARRATIVE_TERMS};

/// Lines shorter than this (in characters, trimmed) are short
pub const SHORT_LINE_MAX: usize = 50;

/// Lines shorter than this (and not short) are medium; the rest are long
pub const MEDIUM_LINE_MAX: usize = 100;

/// A blank line between two blocks of text, with either line ending
static STANZA_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r?\n\r?\n").expect("Invalid stanza break regex")
});

/// Length band of a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBand {
    Empty,
    Short,
    Medium,
    Long,
}

impl LineBand {
    /// Classify a line by its trimmed character length
    pub fn classify(line: &str) -> Self {
        match line.trim().chars().count() {
            0 => LineBand::Empty,
            n if n < SHORT_LINE_MAX => LineBand::Short,
            n if n < MEDIUM_LINE_MAX => LineBand::Medium,
            _ => LineBand::Long,
        }
    }
}

/// Snapshot of everything the validator measures in a text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationMetrics {
    /// All lines, blank ones included
    pub total_lines: usize,
    pub short_line_count: usize,
    pub medium_line_count: usize,
    pub long_line_count: usize,
    pub empty_line_count: usize,
    /// Share of short lines, 0-100
    pub short_line_percentage: f64,
    pub stanza_break_count: usize,
    /// First detected titles, capped by the validator's title limit
    pub detected_poem_titles: Vec<String>,
    /// Number of detected titles before capping
    pub poem_title_count: usize,
    pub poetry_indicator_score: usize,
    pub narrative_indicator_score: usize,
    pub strong_narrative_indicator_score: usize,
}

impl ValidationMetrics {
    /// Analyze `text`, keeping at most `title_limit` titles for reporting.
    pub fn analyze(text: &str, title_limit: usize) -> Self {
        let mut metrics = Self::default();

        for line in text.lines() {
            metrics.total_lines += 1;
            match LineBand::classify(line) {
                LineBand::Empty => metrics.empty_line_count += 1,
                LineBand::Short => metrics.short_line_count += 1,
                LineBand::Medium => metrics.medium_line_count += 1,
                LineBand::Long => metrics.long_line_count += 1,
            }
        }

        metrics.short_line_percentage = if metrics.total_lines > 0 {
            metrics.short_line_count as f64 / metrics.total_lines as f64 * 100.0
        } else {
            0.0
        };

        metrics.stanza_break_count = STANZA_BREAK_REGEX.find_iter(text).count();

        let mut titles = detect_titles(text);
        metrics.poem_title_count = titles.len();
        titles.truncate(title_limit);
        metrics.detected_poem_titles = titles;

        let lowered = text.to_lowercase();
        metrics.poetry_indicator_score = count_terms(&lowered, POETRY_TERMS);
        metrics.narrative_indicator_score = count_terms(&lowered, NARRATIVE_TERMS);
        metrics.strong_narrative_indicator_score = count_terms(&lowered, STRONG_NARRATIVE_TERMS);

        metrics
    }

    /// Whether the band counts account for every line
    pub fn bands_are_consistent(&self) -> bool {
        self.short_line_count + self.medium_line_count + self.long_line_count + self.empty_line_count
            == self.total_lines
    }
}

/*!
 * Poetry content validation.
 *
 * Decides whether generated text labelled as poetry really is poetry or
 * narrative prose in disguise. The validator is a pure function of its
 * inputs: it keeps no state between calls and performs no I/O, so a single
 * instance can be shared freely across threads.
 */

use std::collections::HashSet;

use serde::{Deserialize, Serialize, Serializer};

use crate::errors::ConfigError;

use super::metrics::ValidationMetrics;
use super::quality::QualityBreakdown;

/// Genre assumed by the genre-independent operations
pub const ASSUMED_GENRE: &str = "poetry collection";

/// Score reported when the genre gate skips scoring
const NEUTRAL_SCORE: f64 = 0.5;

/// Suggestion thresholds, stricter than the validity thresholds
const SUGGEST_MIN_SHORT_LINE_PERCENTAGE: f64 = 50.0;
const SUGGEST_MIN_STANZA_BREAKS: usize = 3;
const SUGGEST_MIN_POEM_TITLES: usize = 3;

const NO_IMPROVEMENTS_MESSAGE: &str = "Content looks like well-structured poetry - no specific improvements suggested";

/// Whether a genre label asks for poetry validation
pub fn is_poetry_genre(genre: &str) -> bool {
    genre.to_lowercase().contains("poetry")
}

/// Thresholds for poetry validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Minimum share of short lines, in percent
    #[serde(default = "default_min_short_line_percentage")]
    pub min_short_line_percentage: f64,

    /// Minimum number of stanza breaks
    #[serde(default = "default_min_stanza_breaks")]
    pub min_stanza_breaks: usize,

    /// Minimum number of detected poem titles
    #[serde(default = "default_min_poem_titles")]
    pub min_poem_titles: usize,

    /// Strong narrative hits above this count are critical
    #[serde(default = "default_critical_narrative_threshold")]
    pub critical_narrative_threshold: usize,

    /// More warnings than this invalidate the content
    #[serde(default = "default_max_warnings")]
    pub max_warnings: usize,

    /// Number of detected titles kept in the metrics
    #[serde(default = "default_title_report_limit")]
    pub title_report_limit: usize,
}

fn default_min_short_line_percentage() -> f64 {
    30.0
}

fn default_min_stanza_breaks() -> usize {
    2
}

fn default_min_poem_titles() -> usize {
    2
}

fn default_critical_narrative_threshold() -> usize {
    1
}

fn default_max_warnings() -> usize {
    4
}

fn default_title_report_limit() -> usize {
    10
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_short_line_percentage: default_min_short_line_percentage(),
            min_stanza_breaks: default_min_stanza_breaks(),
            min_poem_titles: default_min_poem_titles(),
            critical_narrative_threshold: default_critical_narrative_threshold(),
            max_warnings: default_max_warnings(),
            title_report_limit: default_title_report_limit(),
        }
    }
}

impl ValidatorConfig {
    /// Check that all thresholds are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=100.0).contains(&self.min_short_line_percentage) {
            return Err(ConfigError::invalid(
                "min_short_line_percentage",
                format!("{} is not between 0 and 100", self.min_short_line_percentage),
            ));
        }
        if self.title_report_limit == 0 {
            return Err(ConfigError::invalid("title_report_limit", "must be at least 1"));
        }
        Ok(())
    }
}

/// A violated heuristic
#[derive(Debug, Clone, PartialEq)]
pub enum PoetryIssue {
    /// Too many phrases that only occur in stories
    StrongNarrative { count: usize },
    /// A few story phrases; worth a look but not disqualifying
    PossibleNarrative { count: usize },
    /// Lines are mostly long prose lines
    FewShortLines { percentage: f64, minimum: f64 },
    /// Not enough blank-line separated blocks
    FewStanzaBreaks { count: usize, minimum: usize },
    /// Not enough titled poems for a collection
    FewPoemTitles { count: usize, minimum: usize },
    /// Story vocabulary outweighs poetry vocabulary
    NarrativeFocus { narrative: usize, poetry: usize },
}

impl PoetryIssue {
    /// Critical issues invalidate content on their own
    pub fn is_critical(&self) -> bool {
        matches!(self, PoetryIssue::StrongNarrative { .. })
    }

    /// Suggested remediation, if this kind of issue has one
    pub fn recommendation(&self) -> Option<&'static str> {
        match self {
            PoetryIssue::StrongNarrative { .. } => Some(
                "Regenerate with explicit poetry requirements: verse with line breaks and stanzas, not prose",
            ),
            PoetryIssue::PossibleNarrative { .. } => None,
            PoetryIssue::FewShortLines { .. } => {
                Some("Use more line breaks and shorter lines to give the text poetic structure")
            }
            PoetryIssue::FewStanzaBreaks { .. } => {
                Some("Add stanza breaks (blank lines) between groups of lines")
            }
            PoetryIssue::FewPoemTitles { .. } => {
                Some("Include multiple distinct poems, each with its own title")
            }
            PoetryIssue::NarrativeFocus { .. } => {
                Some("Focus on poetic expression such as imagery and metaphor instead of storytelling")
            }
        }
    }
}

impl std::fmt::Display for PoetryIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoetryIssue::StrongNarrative { count } => write!(
                f,
                "CRITICAL: Found {} strong narrative indicators - content appears to be story content, not poetry",
                count
            ),
            PoetryIssue::PossibleNarrative { count } => write!(
                f,
                "Found {} potential narrative indicator{} - please verify the content is poetry",
                count,
                if *count == 1 { "" } else { "s" }
            ),
            PoetryIssue::FewShortLines { percentage, minimum } => write!(
                f,
                "Only {:.1}% of lines are short (poetry usually has at least {:.1}%)",
                percentage, minimum
            ),
            PoetryIssue::FewStanzaBreaks { count, minimum } => write!(
                f,
                "Only {} stanza breaks found (expected at least {})",
                count, minimum
            ),
            PoetryIssue::FewPoemTitles { count, minimum } => write!(
                f,
                "Only {} poem titles detected (expected at least {} titled poems)",
                count, minimum
            ),
            PoetryIssue::NarrativeFocus { narrative, poetry } => write!(
                f,
                "Narrative indicators ({}) outnumber poetry indicators ({})",
                narrative, poetry
            ),
        }
    }
}

impl Serialize for PoetryIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of validating one piece of content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationVerdict {
    /// Whether the genre label triggered validation
    pub is_poetry_genre: bool,
    /// Set when the genre gate skipped validation
    pub validation_skipped: bool,
    pub is_valid: bool,
    /// Hard failures that bypass the heuristics
    pub errors: Vec<String>,
    pub warnings: Vec<PoetryIssue>,
    pub recommendations: Vec<String>,
    /// Absent only when validation was skipped
    pub metrics: Option<ValidationMetrics>,
}

impl ValidationVerdict {
    /// Verdict for a genre that is not poetry
    pub fn skipped() -> Self {
        Self {
            is_poetry_genre: false,
            validation_skipped: true,
            is_valid: true,
            errors: vec![],
            warnings: vec![],
            recommendations: vec![],
            metrics: None,
        }
    }

    /// Verdict for text without a single line
    pub fn empty_content() -> Self {
        Self {
            is_poetry_genre: true,
            validation_skipped: false,
            is_valid: false,
            errors: vec!["Empty content: there is nothing to validate".to_string()],
            warnings: vec![],
            recommendations: vec!["Generate poetry content before validating it".to_string()],
            metrics: Some(ValidationMetrics::default()),
        }
    }

    /// Warnings rendered as text
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }

    /// Whether any warning is critical
    pub fn has_critical_warning(&self) -> bool {
        self.warnings.iter().any(PoetryIssue::is_critical)
    }
}

/// Validator for poetry content
#[derive(Debug, Clone, Default)]
pub struct PoetryValidator {
    config: ValidatorConfig,
}

impl PoetryValidator {
    /// Create a new validator with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new validator with custom thresholds
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate `text` generated for `genre`.
    ///
    /// Genres that do not mention poetry are skipped. Text without any
    /// line fails with an empty-content error before any heuristic runs.
    pub fn validate(&self, text: &str, genre: &str) -> ValidationVerdict {
        if !is_poetry_genre(genre) {
            return ValidationVerdict::skipped();
        }

        let metrics = ValidationMetrics::analyze(text, self.config.title_report_limit);
        if metrics.total_lines == 0 {
            return ValidationVerdict::empty_content();
        }

        let warnings = self.collect_issues(&metrics);
        let recommendations: Vec<String> = warnings
            .iter()
            .filter_map(PoetryIssue::recommendation)
            .map(str::to_string)
            .collect();

        let critical = warnings.iter().filter(|w| w.is_critical()).count();
        let is_valid = critical == 0
            && metrics.strong_narrative_indicator_score <= self.config.critical_narrative_threshold
            && warnings.len() <= self.config.max_warnings;

        ValidationVerdict {
            is_poetry_genre: true,
            validation_skipped: false,
            is_valid,
            errors: vec![],
            warnings,
            recommendations,
            metrics: Some(metrics),
        }
    }

    /// Run the heuristics in their fixed order
    fn collect_issues(&self, metrics: &ValidationMetrics) -> Vec<PoetryIssue> {
        let config = &self.config;
        let mut issues = Vec::new();

        let strong = metrics.strong_narrative_indicator_score;
        if strong > config.critical_narrative_threshold {
            issues.push(PoetryIssue::StrongNarrative { count: strong });
        } else if strong > 0 {
            issues.push(PoetryIssue::PossibleNarrative { count: strong });
        }

        if metrics.short_line_percentage < config.min_short_line_percentage {
            issues.push(PoetryIssue::FewShortLines {
                percentage: metrics.short_line_percentage,
                minimum: config.min_short_line_percentage,
            });
        }

        if metrics.stanza_break_count < config.min_stanza_breaks {
            issues.push(PoetryIssue::FewStanzaBreaks {
                count: metrics.stanza_break_count,
                minimum: config.min_stanza_breaks,
            });
        }

        if metrics.poem_title_count < config.min_poem_titles {
            issues.push(PoetryIssue::FewPoemTitles {
                count: metrics.poem_title_count,
                minimum: config.min_poem_titles,
            });
        }

        let narrative = metrics.narrative_indicator_score;
        let poetry = metrics.poetry_indicator_score;
        if narrative > poetry && narrative > 0 {
            issues.push(PoetryIssue::NarrativeFocus { narrative, poetry });
        }

        issues
    }

    /// Quick pass/fail without diagnostics; non-poetry genres always pass
    pub fn is_valid_quick(&self, text: &str, genre: &str) -> bool {
        if !is_poetry_genre(genre) {
            return true;
        }
        self.validate(text, genre).is_valid
    }

    /// Score breakdown of `text` as a poetry collection.
    ///
    /// `None` only if the assumed genre were skipped by the genre gate.
    pub fn quality_breakdown(&self, text: &str) -> Option<QualityBreakdown> {
        self.validate(text, ASSUMED_GENRE)
            .metrics
            .as_ref()
            .map(QualityBreakdown::from_metrics)
    }

    /// Continuous quality score in 0.0 - 1.0, independent of validity
    pub fn quality_score(&self, text: &str) -> f64 {
        self.quality_breakdown(text)
            .map(|breakdown| breakdown.overall)
            .unwrap_or(NEUTRAL_SCORE)
    }

    /// Unique improvement suggestions for `text` as a poetry collection.
    ///
    /// Never empty: when nothing needs fixing a single affirming message
    /// is returned.
    pub fn suggest_improvements(&self, text: &str) -> Vec<String> {
        let verdict = self.validate(text, ASSUMED_GENRE);
        let mut suggestions = verdict.recommendations.clone();

        if let Some(metrics) = &verdict.metrics {
            if metrics.short_line_percentage < SUGGEST_MIN_SHORT_LINE_PERCENTAGE {
                suggestions.push("Break long lines into shorter ones so most lines stay brief".to_string());
            }
            if metrics.stanza_break_count < SUGGEST_MIN_STANZA_BREAKS {
                suggestions.push("Separate ideas into more stanzas with blank lines".to_string());
            }
            if metrics.poem_title_count < SUGGEST_MIN_POEM_TITLES {
                suggestions.push("Include more distinct titled poems in the collection".to_string());
            }
        }

        let lowered = text.to_lowercase();
        if !lowered.contains("metaphor") && !lowered.contains("like") {
            suggestions.push("Consider adding metaphors or similes to strengthen the imagery".to_string());
        }
        if !["rhythm", "rhyme", "alliteration"]
            .iter()
            .any(|device| lowered.contains(device))
        {
            suggestions.push("Consider sound devices such as rhythm, rhyme or alliteration".to_string());
        }

        let mut seen = HashSet::new();
        suggestions.retain(|s| seen.insert(s.clone()));

        if suggestions.is_empty() {
            suggestions.push(NO_IMPROVEMENTS_MESSAGE.to_string());
        }
        suggestions
    }
}

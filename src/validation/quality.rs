/*!
 * Continuous quality score for poetry content.
 *
 * The score combines five components, each clamped to 0.0 - 1.0:
 * - Short lines: share of short lines relative to 60%
 * - Stanzas: stanza breaks relative to 5
 * - Poems: detected titles relative to 5
 * - Poetic focus: poetry vs narrative vocabulary
 * - Narrative penalty: strong narrative phrases relative to 3
 */

use serde::Serialize;

use super::metrics::ValidationMetrics;

/// Short-line percentage that earns a full component score
const SHORT_LINE_TARGET_PERCENT: f64 = 60.0;

/// Stanza breaks that earn a full component score
const STANZA_TARGET: f64 = 5.0;

/// Detected titles that earn a full component score
const TITLE_TARGET: f64 = 5.0;

/// Strong narrative hits that zero the penalty component
const STRONG_NARRATIVE_CEILING: f64 = 3.0;

/// Focus score when no vocabulary is found at all
const NEUTRAL_FOCUS: f64 = 0.5;

const SHORT_LINE_WEIGHT: f64 = 0.3;
const STANZA_WEIGHT: f64 = 0.2;
const TITLE_WEIGHT: f64 = 0.2;
const FOCUS_WEIGHT: f64 = 0.2;
const NARRATIVE_PENALTY_WEIGHT: f64 = 0.1;

/// Score for a single component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentScore {
    /// Score value (0.0 - 1.0)
    pub score: f64,
    /// Weight for overall calculation
    pub weight: f64,
}

impl ComponentScore {
    /// Create a component score, clamping the value.
    pub fn new(score: f64, weight: f64) -> Self {
        Self {
            score: score.clamp(0.0, 1.0),
            weight,
        }
    }

    /// Weighted contribution to the overall score.
    pub fn weighted(&self) -> f64 {
        self.score * self.weight
    }
}

/// Overall quality score with its breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityBreakdown {
    /// Overall weighted score (0.0 - 1.0)
    pub overall: f64,
    pub short_lines: ComponentScore,
    pub stanzas: ComponentScore,
    pub poems: ComponentScore,
    pub poetic_focus: ComponentScore,
    pub narrative_penalty: ComponentScore,
}

impl QualityBreakdown {
    /// Score a metrics snapshot.
    pub fn from_metrics(metrics: &ValidationMetrics) -> Self {
        let short_lines = ComponentScore::new(
            metrics.short_line_percentage / SHORT_LINE_TARGET_PERCENT,
            SHORT_LINE_WEIGHT,
        );
        let stanzas = ComponentScore::new(
            metrics.stanza_break_count as f64 / STANZA_TARGET,
            STANZA_WEIGHT,
        );
        let poems = ComponentScore::new(metrics.poem_title_count as f64 / TITLE_TARGET, TITLE_WEIGHT);

        let poetry = metrics.poetry_indicator_score as f64;
        let narrative = metrics.narrative_indicator_score as f64;
        let focus = if poetry + narrative > 0.0 {
            poetry / (poetry + narrative)
        } else {
            NEUTRAL_FOCUS
        };
        let poetic_focus = ComponentScore::new(focus, FOCUS_WEIGHT);

        let strong = metrics.strong_narrative_indicator_score as f64;
        let narrative_penalty = ComponentScore::new(
            1.0 - (strong / STRONG_NARRATIVE_CEILING).min(1.0),
            NARRATIVE_PENALTY_WEIGHT,
        );

        let overall = (short_lines.weighted()
            + stanzas.weighted()
            + poems.weighted()
            + poetic_focus.weighted()
            + narrative_penalty.weighted())
        .min(1.0);

        Self {
            overall,
            short_lines,
            stanzas,
            poems,
            poetic_focus,
            narrative_penalty,
        }
    }

    /// Check if the score meets a minimum threshold.
    pub fn meets_threshold(&self, threshold: f64) -> bool {
        self.overall >= threshold
    }

    /// Name of the lowest scoring component.
    pub fn weakest_component(&self) -> &'static str {
        let scores = [
            (self.short_lines.score, "short_lines"),
            (self.stanzas.score, "stanzas"),
            (self.poems.score, "poems"),
            (self.poetic_focus.score, "poetic_focus"),
            (self.narrative_penalty.score, "narrative_penalty"),
        ];

        scores
            .iter()
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, name)| *name)
            .unwrap_or("unknown")
    }

    /// Grade letter (A-F) based on the overall score.
    pub fn grade(&self) -> char {
        match self.overall {
            s if s >= 0.9 => 'A',
            s if s >= 0.8 => 'B',
            s if s >= 0.7 => 'C',
            s if s >= 0.6 => 'D',
            _ => 'F',
        }
    }

    /// Human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Quality: {:.1}% (Grade: {}) - weakest: {}",
            self.overall * 100.0,
            self.grade(),
            self.weakest_component()
        )
    }
}

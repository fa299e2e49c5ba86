/*!
 * Review service that turns validation results into decisions.
 *
 * Callers that package generated content use this service to decide
 * whether a generation is accepted or regenerated, and to pick the best
 * of several candidate generations.
 */

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

use super::poetry::{PoetryValidator, ValidationVerdict, ValidatorConfig};

/// Configuration for the review service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Valid content scoring below this is still regenerated
    #[serde(default = "default_min_quality_score")]
    pub min_quality_score: f64,

    /// Maximum number of regenerations for one piece of content
    #[serde(default = "default_max_regenerations")]
    pub max_regenerations: u32,
}

fn default_min_quality_score() -> f64 {
    0.5
}

fn default_max_regenerations() -> u32 {
    3
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            min_quality_score: default_min_quality_score(),
            max_regenerations: default_max_regenerations(),
        }
    }
}

impl ReviewConfig {
    /// Check that the score threshold is a valid score
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.min_quality_score) {
            return Err(ConfigError::invalid(
                "min_quality_score",
                format!("{} is not between 0 and 1", self.min_quality_score),
            ));
        }
        Ok(())
    }
}

/// Suggested action based on a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    /// Genre is not poetry, nothing was checked
    Skip,
    /// Accept the content as-is
    Accept,
    /// Accept but report warnings
    AcceptWithWarnings,
    /// Generate the content again
    Regenerate,
}

impl std::fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ReviewAction::Skip => "skip",
            ReviewAction::Accept => "accept",
            ReviewAction::AcceptWithWarnings => "accept with warnings",
            ReviewAction::Regenerate => "regenerate",
        };
        write!(f, "{}", label)
    }
}

/// Review of a single piece of content
#[derive(Debug, Clone, Serialize)]
pub struct ContentReview {
    pub verdict: ValidationVerdict,
    /// Quality score, only computed for poetry genres
    pub quality_score: Option<f64>,
    pub action: ReviewAction,
}

impl ContentReview {
    /// Get a summary string
    pub fn summary(&self) -> String {
        match self.quality_score {
            Some(score) => format!(
                "Review: {} (valid: {}, score: {:.2}, {} warnings)",
                self.action,
                self.verdict.is_valid,
                score,
                self.verdict.warnings.len()
            ),
            None => format!("Review: {} (not a poetry genre)", self.action),
        }
    }
}

/// A reviewed candidate and its position in the input
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    /// Index of the candidate in the input slice
    pub index: usize,
    pub review: ContentReview,
}

/// Review service for generated content
#[derive(Debug, Clone, Default)]
pub struct ReviewService {
    config: ReviewConfig,
    validator: PoetryValidator,
}

impl ReviewService {
    /// Create a new review service with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new review service with custom configuration
    pub fn with_config(config: ReviewConfig, validator_config: ValidatorConfig) -> Self {
        Self {
            config,
            validator: PoetryValidator::with_config(validator_config),
        }
    }

    /// Validator used by this service
    pub fn validator(&self) -> &PoetryValidator {
        &self.validator
    }

    /// Validate and score `text`, and decide what to do with it
    pub fn review(&self, text: &str, genre: &str) -> ContentReview {
        let verdict = self.validator.validate(text, genre);

        if verdict.validation_skipped {
            debug!("Review skipped for genre '{}'", genre);
            return ContentReview {
                verdict,
                quality_score: None,
                action: ReviewAction::Skip,
            };
        }

        let score = self.validator.quality_score(text);
        let action = if !verdict.is_valid || score < self.config.min_quality_score {
            ReviewAction::Regenerate
        } else if verdict.warnings.is_empty() {
            ReviewAction::Accept
        } else {
            ReviewAction::AcceptWithWarnings
        };

        debug!(
            "Review complete: valid: {}, score: {:.2}, {} warnings, action: {}",
            verdict.is_valid,
            score,
            verdict.warnings.len(),
            action
        );

        ContentReview {
            verdict,
            quality_score: Some(score),
            action,
        }
    }

    /// Review all candidates, best first.
    ///
    /// Valid candidates rank above invalid ones, then higher scores rank
    /// first; ties keep input order.
    pub fn rank_candidates<S: AsRef<str>>(&self, candidates: &[S], genre: &str) -> Vec<RankedCandidate> {
        let mut ranked: Vec<RankedCandidate> = candidates
            .iter()
            .enumerate()
            .map(|(index, text)| RankedCandidate {
                index,
                review: self.review(text.as_ref(), genre),
            })
            .collect();

        ranked.sort_by(|a, b| compare_reviews(&a.review, &b.review));

        debug!("Ranked {} candidates", ranked.len());
        ranked
    }

    /// Best candidate that does not need regenerating
    pub fn best_candidate<S: AsRef<str>>(&self, candidates: &[S], genre: &str) -> Option<RankedCandidate> {
        self.rank_candidates(candidates, genre)
            .into_iter()
            .find(|c| c.review.action != ReviewAction::Regenerate)
    }

    /// Should the caller regenerate, given how many attempts were made?
    pub fn should_regenerate(&self, review: &ContentReview, attempts: u32) -> bool {
        review.action == ReviewAction::Regenerate && attempts < self.config.max_regenerations
    }

    /// Get maximum regenerations from config
    pub fn max_regenerations(&self) -> u32 {
        self.config.max_regenerations
    }
}

fn compare_reviews(a: &ContentReview, b: &ContentReview) -> Ordering {
    b.verdict
        .is_valid
        .cmp(&a.verdict.is_valid)
        .then_with(|| {
            let a_score = a.quality_score.unwrap_or(0.0);
            let b_score = b.quality_score.unwrap_or(0.0);
            b_score.total_cmp(&a_score)
        })
}

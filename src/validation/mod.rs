/*!
 * Validation module for generated book content.
 *
 * This module checks that content generated for a poetry genre really is
 * poetry and not narrative prose:
 * - Structural metrics (line lengths, stanza breaks, poem titles)
 * - Lexical scoring against poetry and narrative vocabularies
 * - A pass/fail verdict with warnings and recommendations
 * - A continuous quality score for ranking candidates
 *
 * # Architecture
 *
 * - `vocabulary`: Term lists and substring counting
 * - `titles`: Poem title detection
 * - `metrics`: Per-text structural and lexical metrics
 * - `quality`: Weighted quality score and breakdown
 * - `poetry`: The poetry validator
 * - `service`: Accept/regenerate decisions and candidate ranking
 */

pub mod vocabulary;
pub mod titles;
pub mod metrics;
pub mod quality;
pub mod poetry;
pub mod service;

// Re-export main types
pub use metrics::ValidationMetrics;
pub use poetry::{PoetryIssue, PoetryValidator, ValidationVerdict, ValidatorConfig};
pub use quality::QualityBreakdown;
pub use service::{ContentReview, RankedCandidate, ReviewAction, ReviewConfig, ReviewService};

/*!
 * # versecheck - content gate for AI-generated poetry
 *
 * A Rust library that checks whether text generated for a poetry book is
 * really poetry, before it is packaged into an ebook.
 *
 * ## Features
 *
 * - Genre gate: only poetry genres are validated
 * - Structural analysis of line lengths, stanza breaks and poem titles
 * - Detection of narrative prose disguised as poetry
 * - Pass/fail verdicts with warnings and recommendations
 * - A continuous quality score for ranking candidate generations
 * - Improvement suggestions for the next generation attempt
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `validation`: Content validation:
 *   - `validation::poetry`: The poetry validator
 *   - `validation::metrics`: Structural and lexical metrics
 *   - `validation::quality`: Quality score breakdown
 *   - `validation::service`: Accept/regenerate decisions and ranking
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod validation;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use validation::{
    PoetryValidator, QualityBreakdown, ReviewAction, ReviewService, ValidationMetrics,
    ValidationVerdict, ValidatorConfig,
};
pub use errors::{AppError, ConfigError};

/*!
 * Tests for the continuous quality score
 */

use versecheck::validation::PoetryValidator;

use crate::common::{story, titled_collection, ROSES, STORY_SENTENCE};

#[test]
fn test_qualityScore_withArbitraryText_shouldStayInUnitRange() {
    let validator = PoetryValidator::new();
    let inputs = [
        String::new(),
        "\n\n\n\n\n\n\n\n\n\n\n\n".to_string(),
        "**A**\n**B**\n**C**\n**D**\n**E**\n**F**".to_string(),
        "poem rhyme verse stanza metaphor\n\n".repeat(50),
        story(20),
        "y".repeat(4_096),
        titled_collection(),
    ];

    for text in inputs.iter() {
        let score = validator.quality_score(text);
        assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }
}

#[test]
fn test_qualityScore_withTitledCollection_shouldExceedPointEight() {
    let score = PoetryValidator::new().quality_score(&titled_collection());
    assert!(score > 0.8, "expected > 0.8, got {}", score);
}

#[test]
fn test_qualityScore_withMoreStrongNarrative_shouldNotIncrease() {
    let validator = PoetryValidator::new();
    let base = titled_collection();

    let mut previous = validator.quality_score(&base);
    let mut text = base;
    for phrase in ["once upon a time", "plot twist", "the protagonist", "love interest"] {
        text.push('\n');
        text.push_str(phrase);
        let score = validator.quality_score(&text);
        assert!(score <= previous, "{} > {} after adding '{}'", score, previous, phrase);
        previous = score;
    }
}

#[test]
fn test_qualityScore_withMoreStanzas_shouldNotDecrease() {
    let validator = PoetryValidator::new();
    let lines = ["Cold light", "Wet stone", "Slow moss", "Grey bird", "Low cloud", "Thin rain"];

    let mut previous = 0.0;
    for breaks in 0..lines.len() {
        // Insert a blank line after each of the first `breaks` lines
        let text = lines
            .iter()
            .enumerate()
            .map(|(i, line)| if i < breaks { format!("{}\n", line) } else { line.to_string() })
            .collect::<Vec<_>>()
            .join("\n");
        let score = validator.quality_score(&text);
        assert!(score >= previous);
        previous = score;
    }
}

#[test]
fn test_qualityScore_isIndependentOfValidity() {
    let validator = PoetryValidator::new();

    // Roses passes validation but is not a full collection
    let roses = validator.quality_score(ROSES);
    assert!(validator.validate(ROSES, "poetry").is_valid);
    assert!(roses < 0.8);

    // A single story line fails every component
    let story_score = validator.quality_score(STORY_SENTENCE);
    assert!(!validator.validate(&story(2), "poetry").is_valid);
    assert!(story_score < roses);
    assert_eq!(story_score, 0.0);
}

#[test]
fn test_qualityBreakdown_shouldMatchQualityScore() {
    let validator = PoetryValidator::new();
    let text = titled_collection();

    let breakdown = validator.quality_breakdown(&text).expect("assumed genre is poetry");

    assert_eq!(breakdown.overall, validator.quality_score(&text));
    assert_eq!(breakdown.poetic_focus.score, 0.5);
    assert_eq!(breakdown.narrative_penalty.score, 1.0);
    assert_eq!(breakdown.short_lines.score, 1.0);
    assert!((breakdown.stanzas.score - 0.8).abs() < 1e-9);
    assert_eq!(breakdown.grade(), 'B');
    assert_eq!(breakdown.weakest_component(), "poetic_focus");
}

/*!
 * Tests for the poetry validator
 */

use versecheck::validation::{PoetryIssue, PoetryValidator, ValidatorConfig};

use crate::common::{story, titled_collection, ROSES};

/// Inputs that must never break the validator
fn awkward_inputs() -> Vec<String> {
    vec![
        String::new(),
        "\n".to_string(),
        "\n\n\n".to_string(),
        "   \t  ".to_string(),
        "\u{0}\u{1}\u{FFFD}binary\u{7f}".to_string(),
        "single line without breaks".to_string(),
        "x".repeat(10_000),
        "short\n".repeat(5_000),
        "Émile écrit\r\nsous la pluie\r\n\r\nrien".to_string(),
        ROSES.to_string(),
        story(4),
        titled_collection(),
    ]
}

#[test]
fn test_validate_withEmptyText_shouldFailForEveryPoetryGenre() {
    let validator = PoetryValidator::new();

    for genre in ["poetry", "Poetry Collection", "modern POETRY anthology"] {
        let verdict = validator.validate("", genre);

        assert!(verdict.is_poetry_genre);
        assert!(!verdict.is_valid);
        assert!(verdict.errors.iter().any(|e| e.contains("Empty content")));
        assert!(!verdict.recommendations.is_empty());
    }
}

#[test]
fn test_validate_withNonPoetryGenre_shouldSkipEverything() {
    let validator = PoetryValidator::new();

    for genre in ["Self Help", "", "Poet biography", "Fantasy"] {
        let verdict = validator.validate(&story(3), genre);

        assert!(!verdict.is_poetry_genre);
        assert!(verdict.validation_skipped);
        assert!(verdict.metrics.is_none());
        assert!(verdict.warnings.is_empty());
        assert!(verdict.recommendations.is_empty());
        assert!(validator.is_valid_quick(&story(3), genre));
        assert!(validator.is_valid_quick("", genre));
    }
}

#[test]
fn test_validate_withAnyInput_shouldPartitionLines() {
    let validator = PoetryValidator::new();

    for text in awkward_inputs() {
        let verdict = validator.validate(&text, "poetry");
        let metrics = verdict.metrics.expect("poetry genres always report metrics");

        assert_eq!(
            metrics.short_line_count
                + metrics.medium_line_count
                + metrics.long_line_count
                + metrics.empty_line_count,
            metrics.total_lines
        );
        assert!(metrics.detected_poem_titles.len() <= 10);
        assert!(metrics.detected_poem_titles.len() <= metrics.poem_title_count);
    }
}

#[test]
fn test_validate_calledTwice_shouldReturnSameVerdict() {
    let validator = PoetryValidator::new();

    for text in awkward_inputs() {
        assert_eq!(validator.validate(&text, "poetry"), validator.validate(&text, "poetry"));
    }
}

#[test]
fn test_validate_withSecondStrongPhrase_shouldFlipToInvalid() {
    let validator = PoetryValidator::new();
    let base = titled_collection();

    let one = format!("{}\nmain character", base);
    let two = format!("{}\nmain character\nlove interest", base);

    let verdict_one = validator.validate(&one, "poetry");
    let verdict_two = validator.validate(&two, "poetry");

    assert_eq!(verdict_one.metrics.as_ref().map(|m| m.strong_narrative_indicator_score), Some(1));
    assert_eq!(verdict_two.metrics.as_ref().map(|m| m.strong_narrative_indicator_score), Some(2));
    assert!(verdict_one.is_valid);
    assert!(!verdict_two.is_valid);
    assert!(verdict_two.has_critical_warning());
}

#[test]
fn test_validate_withRosesExample_shouldReportStructure() {
    let verdict = PoetryValidator::new().validate(ROSES, "Poetry Collection");
    let metrics = verdict.metrics.as_ref().expect("metrics");

    assert_eq!(metrics.total_lines, 5);
    assert_eq!(metrics.stanza_break_count, 1);
    assert_eq!(metrics.short_line_count, 4);
    assert_eq!(metrics.empty_line_count, 1);
    assert_eq!(metrics.strong_narrative_indicator_score, 0);

    assert!(verdict
        .warning_messages()
        .iter()
        .any(|w| w.contains("Only 1 stanza breaks found")));
    assert!(!verdict.has_critical_warning());
    assert!(verdict
        .recommendations
        .iter()
        .any(|r| r.contains("stanza breaks")));
}

#[test]
fn test_validate_withRepeatedStory_shouldBeCritical() {
    let verdict = PoetryValidator::new().validate(&story(3), "poetry");
    let metrics = verdict.metrics.as_ref().expect("metrics");

    assert!(metrics.strong_narrative_indicator_score >= 2);
    assert!(!verdict.is_valid);
    assert!(matches!(verdict.warnings[0], PoetryIssue::StrongNarrative { .. }));
    assert!(verdict.warning_messages()[0].contains("CRITICAL"));
    assert!(verdict.warning_messages()[0].contains(&metrics.strong_narrative_indicator_score.to_string()));
}

#[test]
fn test_validate_withTitledCollection_shouldPassWithoutWarnings() {
    let verdict = PoetryValidator::new().validate(&titled_collection(), "Poetry");
    let metrics = verdict.metrics.as_ref().expect("metrics");

    assert_eq!(metrics.short_line_count, 20);
    assert_eq!(metrics.stanza_break_count, 4);
    assert!(metrics.poem_title_count >= 3);
    assert_eq!(metrics.detected_poem_titles[0], "**Lantern**");
    assert!(verdict.warnings.is_empty());
    assert!(verdict.is_valid);
}

#[test]
fn test_validate_warningsShouldKeepRuleOrder() {
    let prose = "The detective went to the station and the plot grew darker as the scene unfolded slowly, page after page.";
    let text = format!("{}\n{}\n{}\nthe end", prose, prose, prose);
    let verdict = PoetryValidator::new().validate(&text, "poetry");

    let kinds: Vec<&str> = verdict
        .warnings
        .iter()
        .map(|w| match w {
            PoetryIssue::StrongNarrative { .. } => "strong",
            PoetryIssue::PossibleNarrative { .. } => "possible",
            PoetryIssue::FewShortLines { .. } => "short",
            PoetryIssue::FewStanzaBreaks { .. } => "stanza",
            PoetryIssue::FewPoemTitles { .. } => "titles",
            PoetryIssue::NarrativeFocus { .. } => "focus",
        })
        .collect();

    assert_eq!(kinds, vec!["possible", "short", "stanza", "titles", "focus"]);
    assert_eq!(verdict.recommendations.len(), 4);
    assert!(!verdict.is_valid);
}

#[test]
fn test_validate_withLenientConfig_shouldTolerateMoreWarnings() {
    let prose = "The detective went to the station and the plot grew darker as the scene unfolded slowly, page after page.";
    let text = format!("{}\n{}\n{}\nthe end", prose, prose, prose);
    let config = ValidatorConfig {
        max_warnings: 5,
        ..Default::default()
    };

    let verdict = PoetryValidator::with_config(config).validate(&text, "poetry");

    assert_eq!(verdict.warnings.len(), 5);
    assert!(verdict.is_valid);
}

#[test]
fn test_suggestImprovements_shouldNeverBeEmpty() {
    let validator = PoetryValidator::new();

    for text in awkward_inputs() {
        let suggestions = validator.suggest_improvements(&text);
        assert!(!suggestions.is_empty());

        let mut unique = suggestions.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), suggestions.len());
    }
}

#[test]
fn test_suggestImprovements_withoutDevices_shouldNudgeTowardsThem() {
    let suggestions = PoetryValidator::new().suggest_improvements(&titled_collection());

    assert!(suggestions.iter().any(|s| s.contains("metaphors or similes")));
    assert!(suggestions.iter().any(|s| s.contains("sound devices")));
    assert_eq!(suggestions.len(), 2);
}

#[test]
fn test_suggestImprovements_withStory_shouldIncludeValidatorRecommendations() {
    let validator = PoetryValidator::new();
    let text = story(3);

    let verdict = validator.validate(&text, "poetry");
    let suggestions = validator.suggest_improvements(&text);

    for recommendation in &verdict.recommendations {
        assert!(suggestions.contains(recommendation));
    }
}

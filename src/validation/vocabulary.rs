/*!
 * Term lists used for lexical scoring of generated content.
 *
 * Every list is matched against lowercased text with non-overlapping
 * substring counts, so terms must be lowercase.
 */

/// Terms that suggest the content talks about or uses poetic craft
pub const POETRY_TERMS: &[&str] = &[
    "stanza",
    "verse",
    "rhyme",
    "meter",
    "poem",
    "imagery",
    "metaphor",
    "alliteration",
    "sonnet",
    "haiku",
    "free verse",
    "rhythm",
    "line break",
];

/// Terms typical of story writing
pub const NARRATIVE_TERMS: &[&str] = &[
    "character development",
    "plot",
    "protagonist",
    "antagonist",
    "scene",
    "dialogue",
    "chapter",
    "story arc",
    "conflict resolution",
    "narrative",
    "he said",
    "she said",
    "walked to",
    "went to the",
];

/// Phrases that almost never occur in poetry and reliably flag prose
pub const STRONG_NARRATIVE_TERMS: &[&str] = &[
    "once upon a time",
    "the end",
    "character walked",
    "plot twist",
    "story begins",
    "main character",
    "love interest",
    "climax of the story",
    "he walked to",
    "she went to",
    "they traveled",
    "the protagonist",
];

/// Sum of non-overlapping occurrences of every term in `lowered`.
///
/// A term found three times contributes three.
pub fn count_terms(lowered: &str, terms: &[&str]) -> usize {
    terms.iter().map(|term| lowered.matches(term).count()).sum()
}

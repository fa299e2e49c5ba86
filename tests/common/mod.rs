/*!
 * Common test utilities for the versecheck test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Four short lines in two stanzas
pub const ROSES: &str = "Roses are red\nViolets are blue\n\nSugar is sweet\nAnd so are you";

/// A story sentence full of strong narrative phrases
pub const STORY_SENTENCE: &str = "Once upon a time, the protagonist walked to the castle. The end.";

/// Initializes test logging once; later calls are no-ops
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// The story sentence repeated on separate lines
pub fn story(repeats: usize) -> String {
    vec![STORY_SENTENCE; repeats].join("\n")
}

/// Three titled poems: 20 short lines, 4 stanza breaks, no vocabulary hits
pub fn titled_collection() -> String {
    [
        "**Lantern**",
        "Amber glow in the window",
        "Moths circle the glass",
        "",
        "Wick and oil and quiet",
        "Shadows lean on the wall",
        "",
        "**Orchard**",
        "Apples hang in slow wind",
        "Bees drift over clover",
        "Grass bends toward the river",
        "",
        "Frost comes late this year",
        "Branches hold their breath",
        "",
        "**Harbor**",
        "Gulls lift from the pier",
        "Salt light on the ropes",
        "Nets dry in the sun",
        "Boats knock at their moorings",
        "Tide pulls the sand away",
        "A bell rings twice",
        "Fog rolls in at dusk",
        "Lamps wake along the quay",
    ]
    .join("\n")
}

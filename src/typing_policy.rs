use serde::{Deserialize, Serialize};

/// Separator between target words
pub const DELIMITER: char = ' ';

/// How a finished word is credited into the session's correct-char count
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::Display,
)]
pub enum ScoringMode {
    /// A word earns its full length only when typed exactly, otherwise nothing
    #[serde(rename = "whole-word")]
    #[value(name = "whole-word")]
    #[strum(serialize = "whole-word")]
    WholeWordExact,
    /// A word earns one point per position matching the target
    #[default]
    #[serde(rename = "per-character")]
    #[value(name = "per-character")]
    #[strum(serialize = "per-character")]
    PerCharacterPartial,
}

/// Strip the delimiter(s) a learner typed after a word
pub fn strip_delimiters(value: &str) -> &str {
    value.trim_end_matches(DELIMITER)
}

/// Positions in `typed` that match `target`, compared char by char
pub fn matching_chars(typed: &str, target: &str) -> usize {
    strip_delimiters(typed)
        .chars()
        .zip(target.chars())
        .filter(|(t, e)| t == e)
        .count()
}

fn credit_whole_word(typed: &str, target: &str) -> usize {
    if strip_delimiters(typed) == target {
        target.chars().count()
    } else {
        0
    }
}

fn credit_per_character(typed: &str, target: &str) -> usize {
    matching_chars(typed, target)
}

/// Credit earned by `typed` against `target` under `mode`
pub fn word_credit(mode: ScoringMode, typed: &str, target: &str) -> usize {
    match mode {
        ScoringMode::WholeWordExact => credit_whole_word(typed, target),
        ScoringMode::PerCharacterPartial => credit_per_character(typed, target),
    }
}

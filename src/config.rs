//! Configuration for text normalization behavior.
//!
//! The configuration tunes how individual operations behave. It does not
//! describe which operations run or in which order; that is the caller's
//! choice.

use serde::{Deserialize, Serialize};

/// Behavior knobs shared by the normalization operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// How `Lowercase` maps characters.
    /// Default: [`CaseMapping::Simple`].
    pub case_mapping: CaseMapping,

    /// Which marks `RemoveAccents` deletes.
    /// Default: [`MarkClass::Nonspacing`].
    pub accent_marks: MarkClass,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            case_mapping: CaseMapping::Simple,
            accent_marks: MarkClass::Nonspacing,
        }
    }
}

/// Lowercase mapping strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMapping {
    /// Exactly one output character per input character.
    #[default]
    Simple,
    /// Full Unicode lowercase mapping; one character may expand into several.
    Full,
}

/// Set of Unicode marks treated as accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkClass {
    /// General category Mn only.
    #[default]
    Nonspacing,
    /// Any mark: Mn, Mc and Me.
    Any,
}

//! Named transformations as a closed set.
//!
//! [`Transform`] lets callers describe an operation as data (for example in a
//! deserialized pipeline definition) while dispatch stays an exhaustive
//! `match` over known variants.

use crate::config::NormalizerConfig;
use crate::text::NormalizedText;
use serde::{Deserialize, Serialize};

/// One normalization operation.
///
/// Arbitrary predicates are not representable here; use
/// [`NormalizedText::filter`] directly for those.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// Canonical decomposition.
    Nfd,
    /// Canonical composition.
    Nfc,
    /// Lowercase mapping.
    Lowercase,
    /// Remove leading and trailing whitespace.
    Strip,
    /// Remove leading whitespace.
    #[serde(rename = "lstrip")]
    LStrip,
    /// Remove trailing whitespace.
    #[serde(rename = "rstrip")]
    RStrip,
    /// Decompose and drop accent marks.
    RemoveAccents,
    /// Remove every occurrence of one character.
    RemoveChar(char),
}

impl Transform {
    /// Applies the transformation with the default configuration.
    #[must_use]
    pub fn apply(self, text: &NormalizedText) -> NormalizedText {
        self.apply_with(text, &NormalizerConfig::default())
    }

    /// Applies the transformation, taking behavior knobs from `config`.
    #[must_use]
    pub fn apply_with(self, text: &NormalizedText, config: &NormalizerConfig) -> NormalizedText {
        match self {
            Transform::Nfd => text.nfd(),
            Transform::Nfc => text.nfc(),
            Transform::Lowercase => text.lowercase_with(config.case_mapping),
            Transform::Strip => text.strip(),
            Transform::LStrip => text.lstrip(),
            Transform::RStrip => text.rstrip(),
            Transform::RemoveAccents => text.remove_marks(config.accent_marks),
            Transform::RemoveChar(c) => text.filter_char(c),
        }
    }

    /// Short name of the transformation.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Nfd => "nfd",
            Transform::Nfc => "nfc",
            Transform::Lowercase => "lowercase",
            Transform::Strip => "strip",
            Transform::LStrip => "lstrip",
            Transform::RStrip => "rstrip",
            Transform::RemoveAccents => "remove_accents",
            Transform::RemoveChar(_) => "remove_char",
        }
    }
}

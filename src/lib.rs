//! # Textalign - Normalization with Provenance
//!
//! Textalign converts raw input into a canonical form for tokenization while
//! keeping, for every character of the output, the span of original
//! characters it was derived from.
//!
//! ## Overview
//!
//! A [`NormalizedText`] is created once per input. Each operation (NFD, NFC,
//! lowercase, strip, filter, accent removal) returns a new value whose
//! provenance table still has exactly one [`Alignment`] per character.
//! Downstream tokenizers use [`NormalizedText::original_range`] to report
//! token offsets against the user's text.
//!
//! ## Quick Start
//!
//! ```rust
//! use textalign::NormalizedText;
//!
//! let text = NormalizedText::new("  Déjà Vu  ")
//!     .strip()
//!     .remove_accents()
//!     .lowercase();
//!
//! assert_eq!(text.normalized(), "deja vu");
//! assert_eq!(text.original_slice(0..4), Some("Déjà"));
//! ```
//!
//! Operations can also be described as data:
//!
//! ```rust
//! use textalign::{NormalizedText, Transform};
//!
//! let steps = [Transform::Nfd, Transform::Lowercase, Transform::Strip];
//! let text = steps
//!     .iter()
//!     .fold(NormalizedText::new(" Ünïcode "), |t, step| step.apply(&t));
//! assert_eq!(text.len(), 9);
//! ```
//!
//! ## Modules
//!
//! - [`text`] - The normalized text value and its operations
//! - [`config`] - Behavior knobs for lowercase and accent removal
//! - [`error`] - Construction errors

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod text;

pub use config::{CaseMapping, MarkClass, NormalizerConfig};
pub use error::{NormalizeError, Result};
pub use text::{Alignment, NormalizedText, Snapshot, Transform};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

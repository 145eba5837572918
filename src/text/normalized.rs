//! Normalized text with per-character provenance.
//!
//! A [`NormalizedText`] pairs the original input with a working copy that
//! transformations rewrite. Each character of the working copy carries an
//! [`Alignment`] into the original, so token boundaries found in normalized
//! text can be reported against the user's input.
//!
//! Values are persistent: every operation returns a new value and leaves the
//! receiver (and any snapshot taken from it) untouched.
//!
//! ```
//! use textalign::{Alignment, NormalizedText};
//!
//! let text = NormalizedText::new("  Élan ").strip().remove_accents().lowercase();
//! assert_eq!(text.normalized(), "elan");
//! assert_eq!(text.alignments()[0], Alignment::new(2, 3));
//! ```

use crate::config::{CaseMapping, MarkClass};
use crate::error::{NormalizeError, Result};
use crate::text::unicode::{self, AlignedChar};
use crate::text::Alignment;
use log::{debug, trace};
use serde::Serialize;
use std::ops::Range;
use std::sync::Arc;

/// Original text, its normalized form, and the provenance table linking them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    original: Arc<str>,
    original_len: usize,
    normalized: String,
    alignments: Vec<Alignment>,
}

/// An owned copy of a [`NormalizedText`]'s state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// The text the value was constructed from.
    pub original: String,
    /// The current normalized text.
    pub normalized: String,
    /// One alignment per character of `normalized`.
    pub alignments: Vec<Alignment>,
}

impl NormalizedText {
    /// Creates a value whose normalized text equals `original`, with the
    /// identity provenance table.
    pub fn new(original: &str) -> Self {
        let original_len = original.chars().count();
        Self {
            original: Arc::from(original),
            original_len,
            normalized: original.to_string(),
            alignments: (0..original_len).map(Alignment::single).collect(),
        }
    }

    /// Creates a value from UTF-8 bytes.
    ///
    /// Fails with [`NormalizeError::InvalidInput`] if `bytes` is not valid UTF-8.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self> {
        match std::str::from_utf8(bytes) {
            Ok(s) => Ok(Self::new(s)),
            Err(err) => {
                debug!("rejecting input: invalid UTF-8 after {} bytes", err.valid_up_to());
                Err(err.into())
            }
        }
    }

    /// Creates a value from a sequence of code points.
    ///
    /// Fails with [`NormalizeError::InvalidInput`] on surrogates or values
    /// above U+10FFFF.
    pub fn from_code_points(code_points: &[u32]) -> Result<Self> {
        let mut s = String::with_capacity(code_points.len());
        for (position, &cp) in code_points.iter().enumerate() {
            match char::from_u32(cp) {
                Some(c) => s.push(c),
                None => {
                    debug!("rejecting input: code point {:#x} at position {}", cp, position);
                    return Err(NormalizeError::InvalidInput(format!(
                        "not a Unicode scalar value: U+{:04X} at position {}",
                        cp, position
                    )));
                }
            }
        }
        Ok(Self::new(&s))
    }

    /// The text this value was constructed from.
    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The current normalized text.
    #[inline]
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The provenance table, one entry per character of [`normalized`](Self::normalized).
    #[inline]
    pub fn alignments(&self) -> &[Alignment] {
        &self.alignments
    }

    /// Character count of the normalized text.
    #[inline]
    pub fn len(&self) -> usize {
        self.alignments.len()
    }

    /// Returns true if the normalized text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.alignments.is_empty()
    }

    /// Character count of the original text.
    #[inline]
    pub fn len_original(&self) -> usize {
        self.original_len
    }

    /// Returns an owned snapshot of the current state.
    pub fn get(&self) -> Snapshot {
        Snapshot {
            original: self.original.to_string(),
            normalized: self.normalized.clone(),
            alignments: self.alignments.clone(),
        }
    }

    /// Maps a range of normalized character positions to the span of
    /// original characters that produced it.
    ///
    /// Returns `None` for an empty or out-of-bounds range.
    pub fn original_range(&self, range: Range<usize>) -> Option<Range<usize>> {
        if range.start >= range.end || range.end > self.len() {
            return None;
        }
        let entries = &self.alignments[range];
        let start = entries[0].start;
        let end = entries.iter().map(|a| a.end).max()?;
        Some(start..end)
    }

    /// The original text covering a range of normalized character positions.
    pub fn original_slice(&self, range: Range<usize>) -> Option<&str> {
        let chars = self.original_range(range)?;
        let byte_at = |char_pos: usize| {
            self.original
                .char_indices()
                .nth(char_pos)
                .map(|(b, _)| b)
                .unwrap_or(self.original.len())
        };
        let (start, end) = (byte_at(chars.start), byte_at(chars.end));
        self.original.get(start..end)
    }

    /// Canonical decomposition (Unicode Normalization Form D).
    #[must_use]
    pub fn nfd(&self) -> Self {
        self.rebuild("nfd", unicode::decompose(self.aligned_chars()))
    }

    /// Canonical composition (Unicode Normalization Form C).
    #[must_use]
    pub fn nfc(&self) -> Self {
        self.rebuild("nfc", unicode::compose_canonical(self.aligned_chars()))
    }

    /// Maps each character to its lowercase form, one-to-one.
    #[must_use]
    pub fn lowercase(&self) -> Self {
        self.lowercase_with(CaseMapping::Simple)
    }

    /// Full Unicode lowercase; characters whose mapping expands repeat their
    /// source alignment once per produced character.
    #[must_use]
    pub fn lowercase_full(&self) -> Self {
        self.lowercase_with(CaseMapping::Full)
    }

    /// Lowercases using the given mapping strategy.
    #[must_use]
    pub fn lowercase_with(&self, mapping: CaseMapping) -> Self {
        let mut out = Vec::with_capacity(self.len());
        for (c, alignment) in self.aligned_chars() {
            let mut lower = c.to_lowercase();
            match mapping {
                CaseMapping::Simple => out.push((lower.next().unwrap_or(c), alignment)),
                CaseMapping::Full => out.extend(lower.map(|l| (l, alignment))),
            }
        }
        self.rebuild("lowercase", out)
    }

    /// Removes leading and trailing whitespace.
    #[must_use]
    pub fn strip(&self) -> Self {
        self.strip_sides(true, true)
    }

    /// Removes leading whitespace.
    #[must_use]
    pub fn lstrip(&self) -> Self {
        self.strip_sides(true, false)
    }

    /// Removes trailing whitespace.
    #[must_use]
    pub fn rstrip(&self) -> Self {
        self.strip_sides(false, true)
    }

    fn strip_sides(&self, left: bool, right: bool) -> Self {
        let chars: Vec<char> = self.normalized.chars().collect();
        let mut start = 0;
        let mut end = chars.len();
        if left {
            while start < end && chars[start].is_whitespace() {
                start += 1;
            }
        }
        if right {
            while end > start && chars[end - 1].is_whitespace() {
                end -= 1;
            }
        }

        let kept = chars[start..end]
            .iter()
            .copied()
            .zip(self.alignments[start..end].iter().copied())
            .collect();
        self.rebuild("strip", kept)
    }

    /// Removes every character for which `remove` returns true.
    #[must_use]
    pub fn filter<F>(&self, mut remove: F) -> Self
    where
        F: FnMut(char) -> bool,
    {
        let kept = self.aligned_chars().filter(|(c, _)| !remove(*c)).collect();
        self.rebuild("filter", kept)
    }

    /// Removes every occurrence of `target`.
    #[must_use]
    pub fn filter_char(&self, target: char) -> Self {
        self.filter(|c| c == target)
    }

    /// Decomposes and then removes nonspacing marks.
    #[must_use]
    pub fn remove_accents(&self) -> Self {
        self.remove_marks(MarkClass::Nonspacing)
    }

    /// Decomposes and then removes marks of the given class.
    #[must_use]
    pub fn remove_marks(&self, class: MarkClass) -> Self {
        self.nfd().filter(|c| unicode::is_mark(c, class))
    }

    fn aligned_chars(&self) -> impl Iterator<Item = AlignedChar> + '_ {
        self.normalized.chars().zip(self.alignments.iter().copied())
    }

    fn rebuild(&self, op: &str, chars: Vec<AlignedChar>) -> Self {
        let mut normalized = String::with_capacity(self.normalized.len());
        let mut alignments = Vec::with_capacity(chars.len());
        for (c, alignment) in chars {
            normalized.push(c);
            alignments.push(alignment);
        }
        trace!("{}: {} -> {} chars", op, self.len(), alignments.len());

        Self {
            original: Arc::clone(&self.original),
            original_len: self.original_len,
            normalized,
            alignments,
        }
    }
}

impl From<&str> for NormalizedText {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedText {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl TryFrom<&[u8]> for NormalizedText {
    type Error = NormalizeError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_utf8(bytes)
    }
}

impl TryFrom<Vec<u8>> for NormalizedText {
    type Error = NormalizeError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::from_utf8(&bytes)
    }
}

//! Alignment-carrying canonical decomposition and composition.
//!
//! Works on sequences of `(char, Alignment)` so every produced character
//! keeps a record of the original characters it came from.

use crate::config::MarkClass;
use crate::text::Alignment;
use unicode_normalization::char::{canonical_combining_class, compose, decompose_canonical};
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// A normalized character paired with its provenance.
pub(crate) type AlignedChar = (char, Alignment);

/// Canonical decomposition (NFD).
///
/// Each character is fully decomposed and every produced character copies
/// the source alignment. Runs of combining marks are then put in canonical
/// order; a run that actually gets permuted has all its alignments widened
/// to the run's union so starts stay non-decreasing.
pub(crate) fn decompose<I>(chars: I) -> Vec<AlignedChar>
where
    I: IntoIterator<Item = AlignedChar>,
{
    let chars = chars.into_iter();
    let mut out = Vec::with_capacity(chars.size_hint().0);
    for (c, alignment) in chars {
        decompose_canonical(c, |d| out.push((d, alignment)));
    }
    reorder_marks(&mut out);
    out
}

fn reorder_marks(buf: &mut [AlignedChar]) {
    let mut i = 0;
    while i < buf.len() {
        if canonical_combining_class(buf[i].0) == 0 {
            i += 1;
            continue;
        }

        let run_start = i;
        while i < buf.len() && canonical_combining_class(buf[i].0) != 0 {
            i += 1;
        }

        let run = &mut buf[run_start..i];
        let ordered = run
            .windows(2)
            .all(|w| canonical_combining_class(w[0].0) <= canonical_combining_class(w[1].0));
        if ordered {
            continue;
        }

        // sort_by_key is stable, which canonical ordering requires.
        run.sort_by_key(|(c, _)| canonical_combining_class(*c));
        let span = run
            .iter()
            .map(|(_, a)| *a)
            .reduce(Alignment::union)
            .unwrap_or(run[0].1);
        for entry in run.iter_mut() {
            entry.1 = span;
        }
    }
}

/// Canonical composition (NFC).
///
/// Decomposes first, then merges each starter with every following
/// character it is allowed to compose with. The merged alignment keeps the
/// starter's start and takes the largest end among the merged characters.
pub(crate) fn compose_canonical<I>(chars: I) -> Vec<AlignedChar>
where
    I: IntoIterator<Item = AlignedChar>,
{
    let decomposed = decompose(chars);
    let mut out: Vec<AlignedChar> = Vec::with_capacity(decomposed.len());

    // Index of the last starter in `out`, and the combining class of the
    // last character pushed after it (None when the starter is last).
    let mut starter: Option<usize> = None;
    let mut last_class: Option<u8> = None;

    for (c, alignment) in decomposed {
        let class = canonical_combining_class(c);

        if let Some(si) = starter {
            let blocked = match last_class {
                None => false,
                Some(prev) => prev == 0 || prev >= class,
            };
            if !blocked {
                if let Some(composed) = compose(out[si].0, c) {
                    let merged = &mut out[si];
                    merged.0 = composed;
                    merged.1 = Alignment::new(merged.1.start, merged.1.end.max(alignment.end));
                    continue;
                }
            }
        }

        if class == 0 {
            starter = Some(out.len());
            last_class = None;
        } else {
            last_class = Some(class);
        }
        out.push((c, alignment));
    }

    out
}

/// Whether `c` has general category Mn.
#[inline]
pub fn is_nonspacing_mark(c: char) -> bool {
    c.general_category() == GeneralCategory::NonspacingMark
}

/// Whether `c` belongs to the given mark class.
#[inline]
pub fn is_mark(c: char, class: MarkClass) -> bool {
    match class {
        MarkClass::Nonspacing => is_nonspacing_mark(c),
        MarkClass::Any => c.general_category_group() == GeneralCategoryGroup::Mark,
    }
}

//! Integration tests for normalization with provenance.

use textalign::{Alignment, NormalizedText, NormalizerConfig, Transform};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn alignments(pairs: &[(usize, usize)]) -> Vec<Alignment> {
    pairs.iter().copied().map(Alignment::from).collect()
}

#[test]
fn test_identity_mapping() {
    init_logging();
    let text = NormalizedText::new("Here you are");
    let snapshot = text.get();

    assert_eq!(snapshot.original, "Here you are");
    assert_eq!(snapshot.normalized, "Here you are");
    assert_eq!(
        snapshot.alignments,
        alignments(&[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 6),
            (6, 7),
            (7, 8),
            (8, 9),
            (9, 10),
            (10, 11),
            (11, 12),
        ])
    );
}

#[test]
fn test_nfd_expands_precomposed() {
    init_logging();
    let text = NormalizedText::new("élégant").nfd();
    let snapshot = text.get();

    assert_eq!(
        snapshot.normalized.chars().collect::<Vec<_>>(),
        vec!['e', '\u{301}', 'l', 'e', '\u{301}', 'g', 'a', 'n', 't']
    );
    assert_eq!(
        snapshot.alignments,
        alignments(&[(0, 1), (0, 1), (1, 2), (2, 3), (2, 3), (3, 4), (4, 5), (5, 6), (6, 7)])
    );
}

#[test]
fn test_lowercase_keeps_alignments() {
    init_logging();
    let text = NormalizedText::new("éléGaNtÅ").lowercase();

    assert_eq!(text.normalized(), "élégantå");
    assert_eq!(text.alignments(), (0..8).map(Alignment::single).collect::<Vec<_>>());
}

#[test]
fn test_strip_drops_outer_entries() {
    init_logging();
    let text = NormalizedText::new("  Hello   ").strip();

    assert_eq!(text.normalized(), "Hello");
    assert_eq!(
        text.alignments(),
        alignments(&[(2, 3), (3, 4), (4, 5), (5, 6), (6, 7)])
    );
}

#[test]
fn test_filter_fixed_char() {
    init_logging();
    let text = NormalizedText::new("élégant").filter_char('é');

    assert_eq!(text.normalized(), "lgant");
    assert_eq!(
        text.alignments(),
        alignments(&[(1, 2), (3, 4), (4, 5), (5, 6), (6, 7)])
    );
}

#[test]
fn test_remove_accents_matches_plain_text() {
    init_logging();
    let accented = NormalizedText::new("Here you go déclaré Gülçehre.").remove_accents();
    let plain = NormalizedText::new("Here you go declare Gulcehre.");

    assert_eq!(accented.normalized(), plain.normalized());
    assert_eq!(accented.alignments(), plain.alignments());
}

#[test]
fn test_token_offsets_after_pipeline() {
    init_logging();
    let text = NormalizedText::new("  Crème BRÛLÉE! ")
        .strip()
        .nfd()
        .lowercase()
        .remove_accents()
        .filter(|c| c.is_ascii_punctuation());

    assert_eq!(text.normalized(), "creme brulee");

    // Find word boundaries in normalized char positions and map them back.
    let chars: Vec<char> = text.normalized().chars().collect();
    let mut words = Vec::new();
    let mut start = 0;
    for (i, c) in chars.iter().enumerate().chain(std::iter::once((chars.len(), &' '))) {
        if *c == ' ' {
            if start < i {
                words.push(text.original_slice(start..i));
            }
            start = i + 1;
        }
    }

    assert_eq!(words, vec![Some("Crème"), Some("BRÛLÉE")]);
}

#[test]
fn test_transforms_from_config() {
    init_logging();
    let steps: Vec<Transform> =
        serde_json::from_str(r#"["strip", "lowercase", "remove_accents"]"#).unwrap();
    let config: NormalizerConfig =
        serde_json::from_str(r#"{"case_mapping": "full", "accent_marks": "any"}"#).unwrap();

    let text = steps.iter().fold(NormalizedText::new(" İstanbul "), |t, step| {
        step.apply_with(&t, &config)
    });

    assert_eq!(text.normalized(), "istanbul");
    assert_eq!(text.original_range(0..1), Some(1..2));
    assert_eq!(text.alignments()[1], Alignment::new(2, 3));
}

#[test]
fn test_prior_values_survive_later_transforms() {
    init_logging();
    let original = NormalizedText::new("  Élan  ");
    let stripped = original.strip();
    let decomposed = stripped.nfd();
    let snapshot = stripped.get();

    let _lowered = decomposed.lowercase();

    assert_eq!(original.normalized(), "  Élan  ");
    assert_eq!(stripped.normalized(), "Élan");
    assert_eq!(snapshot.normalized, "Élan");
    assert_eq!(decomposed.len(), 5);
    assert_eq!(decomposed.original(), "  Élan  ");
}

#[test]
fn test_invalid_bytes_rejected() {
    init_logging();
    let result = NormalizedText::from_utf8(b"caf\xe9");
    assert!(result.is_err());
}

#[test]
fn test_snapshot_serializes() {
    let snapshot = NormalizedText::new("Aé").nfd().get();
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["normalized"], "Ae\u{301}");
    assert_eq!(json["alignments"][2]["start"], 1);
    assert_eq!(json["alignments"][2]["end"], 2);
}

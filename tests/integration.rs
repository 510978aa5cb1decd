//! End-to-end scenarios over the full tokenize → embed → pool pipeline.
//!
//! Stores are synthetic (zero vectors or tiny hand-built vocabularies) so
//! every expected value can be computed by hand.

use rand::rngs::StdRng;
use rand::SeedableRng;
use swem::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Fixtures
// ─────────────────────────────────────────────────────────────────────────────

/// Every token resolves to the zero vector of dimension 200.
struct ZeroStore;

impl VectorStore for ZeroStore {
    fn lookup(&self, _token: &str) -> Option<&[f32]> {
        static ZEROS: [f32; 200] = [0.0; 200];
        Some(&ZEROS)
    }

    fn dimension(&self) -> usize {
        200
    }
}

const SEVEN_TOKENS: [&str; 7] = ["すもも", "も", "もも", "も", "もも", "の", "うち"];

fn embeds_for(tokens: &[&str], store: &impl VectorStore) -> Vec<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(0);
    embed_tokens(tokens, store, UniformRange::default(), &mut rng)
}

// ─────────────────────────────────────────────────────────────────────────────
// Zero-store scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn zero_store_max_and_average_are_zero_vectors() {
    let seq = embeds_for(&SEVEN_TOKENS, &ZeroStore);
    assert_eq!(seq.len(), 7);

    for method in [Pooling::Max, Pooling::Average] {
        let out = pool(&seq, method).unwrap();
        assert_eq!(out.len(), 200);
        assert!(out.iter().all(|&x| x == 0.0));
    }

    let out = pool(&seq, Pooling::Concat).unwrap();
    assert_eq!(out.len(), 400);
    assert!(out.iter().all(|&x| x == 0.0));
}

#[test]
fn window_three_on_length_one_fails() {
    let seq = embeds_for(&["すもも"], &ZeroStore);
    let err = pool(&seq, Pooling::Hierarchical { window: 3 }).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains('3') && msg.contains('1'), "got: {msg}");
}

#[test]
fn window_three_on_length_seven_pools_five_windows() {
    // 7 − 3 + 1 = 5 window means; with a store of zeros the reduction is
    // still the zero vector of dimension 200.
    let seq = embeds_for(&SEVEN_TOKENS, &ZeroStore);
    let out = hierarchical_pool(&seq, 3).unwrap();
    assert_eq!(out.len(), 200);
    assert!(out.iter().all(|&x| x == 0.0));
}

#[test]
fn hierarchical_window_count_is_t_minus_n_plus_one() {
    // Ramp store: token i ↦ [i]. Window means are [1,2,3,4,5]; max = 5.
    let seq: Vec<Vec<f32>> = (0..7).map(|i| vec![i as f32]).collect();
    let out = hierarchical_pool(&seq, 3).unwrap();
    assert_eq!(out, vec![5.0]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Method dispatch
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unknown_method_string_is_rejected_by_name() {
    let err = "softmax".parse::<Pooling>().unwrap_err();
    assert!(matches!(err, SwemError::UnknownMethod(ref m) if m == "softmax"));
    assert!(err.to_string().contains("softmax"));
}

#[test]
fn canonical_tags_round_trip() {
    for tag in ["max", "average", "concat", "hierarchical"] {
        let method: Pooling = tag.parse().unwrap();
        assert_eq!(method.to_string(), tag);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tokenizers
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn japanese_tokenizer_reference_sentence() {
    assert_eq!(
        tokenize_ja("私はバナナです。"),
        vec!["私", "は", "バナナ", "です", "。"]
    );
}

#[test]
fn english_tokenizer_reference_sentence() {
    assert_eq!(
        tokenize_en("This, is an implementation of SWEM."),
        vec!["This", ",", "is", "an", "implementation", "of", "SWEM", "."]
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Facade over a real vocabulary
// ─────────────────────────────────────────────────────────────────────────────

fn banana_store() -> KeyedVectors {
    let mut kv = KeyedVectors::new(4);
    kv.insert("私", vec![0.1, 0.0, 0.0, 0.0]).unwrap();
    kv.insert("は", vec![0.0, 0.2, 0.0, 0.0]).unwrap();
    kv.insert("バナナ", vec![0.0, 0.0, 0.9, 0.0]).unwrap();
    kv.insert("です", vec![0.0, 0.0, 0.0, 0.4]).unwrap();
    kv.insert("。", vec![-0.1, -0.1, -0.1, -0.1]).unwrap();
    kv
}

#[test]
fn facade_max_over_known_vocabulary() {
    let swem = Swem::new(banana_store(), JapaneseTokenizer);
    let out = swem.infer_vector("私はバナナです。", Pooling::Max).unwrap();
    assert_eq!(out, vec![0.1, 0.2, 0.9, 0.4]);
}

#[test]
fn facade_average_over_known_vocabulary() {
    let swem = Swem::new(banana_store(), JapaneseTokenizer);
    let out = swem
        .infer_vector("私はバナナです。", Pooling::Average)
        .unwrap();
    let expected = [0.0, 0.02, 0.16, 0.06]; // column sums / 5
    for (o, e) in out.iter().zip(expected) {
        assert!((o - e).abs() < 1e-6, "{o} vs {e}");
    }
}

#[test]
fn facade_is_deterministic_when_vocabulary_covers_input() {
    let swem = Swem::new(banana_store(), JapaneseTokenizer);
    for method in [
        Pooling::Max,
        Pooling::Average,
        Pooling::Concat,
        Pooling::Hierarchical { window: 2 },
    ] {
        let a = swem.infer_vector("私はバナナです。", method).unwrap();
        let b = swem.infer_vector("私はバナナです。", method).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn oov_fallback_has_store_dimension_and_range() {
    let kv = KeyedVectors::new(16); // empty vocabulary
    let mut rng = StdRng::seed_from_u64(3);
    let v = embed_token("幻", &kv, UniformRange::default(), &mut rng);
    assert_eq!(v.len(), 16);
    assert!(v.iter().all(|&x| (-0.01..=0.01).contains(&x)));
}

#[test]
fn closure_tokenizer_plugs_into_the_facade() {
    let mut kv = KeyedVectors::new(2);
    kv.insert("i", vec![1.0, 0.0]).unwrap();
    kv.insert("pen", vec![0.0, 1.0]).unwrap();

    let lowercase = |text: &str| {
        text.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
    };
    let swem = Swem::new(kv, lowercase);
    let out = swem.infer_vector("I PEN", Pooling::Max).unwrap();
    assert_eq!(out, vec![1.0, 1.0]);
}

// ─────────────────────────────────────────────────────────────────────────────
// word2vec text loader
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn loads_word2vec_text_from_disk() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vectors.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "2 3").unwrap();
    writeln!(file, "私 0.1 0.2 0.3").unwrap();
    writeln!(file, "バナナ -0.1 -0.2 -0.3").unwrap();
    drop(file);

    let kv = KeyedVectors::load_word2vec_text(&path).unwrap();
    assert_eq!(kv.dimension(), 3);
    assert_eq!(kv.len(), 2);

    let swem = Swem::new(kv, JapaneseTokenizer);
    let out = swem.infer_tokens(&["私", "バナナ"], Pooling::Max).unwrap();
    let expected = [0.1, 0.2, 0.3];
    for (o, e) in out.iter().zip(expected) {
        assert!((o - e).abs() < 1e-6);
    }
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = KeyedVectors::load_word2vec_text("/definitely/not/here.txt").unwrap_err();
    assert!(matches!(err, SwemError::Io(_)));
}

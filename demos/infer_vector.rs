//! Example: Japanese document embedding through the `Swem` facade.
//!
//! Run: `cargo run --example infer_vector`

use swem::prelude::*;

fn main() {
    // Tiny hand-built vocabulary (in real usage, load pre-trained vectors
    // with `KeyedVectors::load_word2vec_text`).
    let mut kv = KeyedVectors::new(4);
    kv.insert("私", vec![0.1, 0.0, 0.0, 0.0]).unwrap();
    kv.insert("は", vec![0.0, 0.2, 0.0, 0.0]).unwrap();
    kv.insert("バナナ", vec![0.0, 0.0, 0.9, 0.0]).unwrap();
    kv.insert("です", vec![0.0, 0.0, 0.0, 0.4]).unwrap();
    kv.insert("。", vec![-0.1, -0.1, -0.1, -0.1]).unwrap();

    let swem = Swem::new(kv, JapaneseTokenizer);
    let doc = "私はバナナです。";
    println!("document: {doc}");
    println!("tokens:   {:?}", tokenize_ja(doc));

    for method in [
        Pooling::Max,
        Pooling::Average,
        Pooling::Concat,
        Pooling::hierarchical(),
    ] {
        match swem.infer_vector(doc, method) {
            Ok(embed) => println!("{method:>12}: dim={} {embed:.3?}", embed.len()),
            Err(err) => println!("{method:>12}: {err}"),
        }
    }
}

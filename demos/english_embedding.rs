//! Example: English text with the punctuation-aware tokenizer.
//!
//! Run: `cargo run --example english_embedding`

use swem::prelude::*;

fn main() {
    let mut kv = KeyedVectors::new(3);
    kv.insert("This", vec![0.2, 0.0, 0.1]).unwrap();
    kv.insert("is", vec![0.0, 0.1, 0.0]).unwrap();
    kv.insert("an", vec![0.0, 0.0, 0.1]).unwrap();
    kv.insert("implementation", vec![0.7, 0.3, 0.0]).unwrap();
    kv.insert("of", vec![0.0, 0.1, 0.1]).unwrap();
    kv.insert("SWEM", vec![0.9, 0.9, 0.9]).unwrap();
    kv.insert(".", vec![0.0, 0.0, 0.0]).unwrap();

    let doc = "This is an implementation of SWEM.";
    let swem = Swem::new(kv, EnglishTokenizer);

    println!("document: {doc}");
    println!("tokens:   {:?}", tokenize_en(doc));

    let embed = swem.infer_vector(doc, Pooling::Max).unwrap();
    println!("max-pooled embedding: {embed:?}");
}

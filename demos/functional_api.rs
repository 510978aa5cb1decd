//! Example: pre-tokenized input through the functional API, no facade.
//!
//! Run: `cargo run --example functional_api`

use swem::prelude::*;

fn main() {
    // An empty vocabulary: every token takes the random-fallback path, so
    // the output is stochastic but always the right shape.
    let kv = KeyedVectors::new(200);
    let tokens = ["I", "have", "a", "pen"];

    let embed = infer_vector(&tokens, &kv, Pooling::Concat, UniformRange::default()).unwrap();
    println!("tokens: {tokens:?}");
    println!("concat dim: {} (2 x {})", embed.len(), kv.dimension());

    // The standalone pooling engine works on any T x D matrix.
    let matrix = vec![vec![1.0, -2.0], vec![3.0, 0.0], vec![-1.0, 5.0]];
    println!("max:          {:?}", pool(&matrix, Pooling::Max).unwrap());
    println!("average:      {:?}", pool(&matrix, Pooling::Average).unwrap());
    println!("hierarchical: {:?}", hierarchical_pool(&matrix, 2).unwrap());
}

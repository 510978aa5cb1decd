//! Token → vector lookup with graceful out-of-vocabulary fallback.
//!
//! The lookup adapter never fails outward: a token missing from the store
//! gets a random vector sampled uniformly from a configurable range instead
//! of aborting the whole document. Missing data degrades; malformed requests
//! (see [`crate::pooling`]) do not.
//!
//! The randomness source is injected, so tests pass a seeded
//! [`rand::rngs::StdRng`] and production callers pass
//! [`rand::thread_rng()`].
//!
//! ## Example
//!
//! ```rust
//! use swem::embedding::{embed_token, UniformRange, VectorStore};
//! use swem::store::KeyedVectors;
//!
//! let mut kv = KeyedVectors::new(3);
//! kv.insert("pen", vec![1.0, 2.0, 3.0]).unwrap();
//!
//! let mut rng = rand::thread_rng();
//! let hit = embed_token("pen", &kv, UniformRange::default(), &mut rng);
//! assert_eq!(hit, vec![1.0, 2.0, 3.0]);
//!
//! let miss = embed_token("stylus", &kv, UniformRange::default(), &mut rng);
//! assert_eq!(miss.len(), kv.dimension()); // random, but the right shape
//! ```

use rand::Rng;

// ─────────────────────────────────────────────────────────────────────────────
// Vector store capability
// ─────────────────────────────────────────────────────────────────────────────

/// Read-only token → vector mapping with a declared dimension.
///
/// Implement this for whatever holds your pre-trained vectors; the crate
/// ships [`crate::store::KeyedVectors`] as an in-memory implementation.
///
/// # Contract
///
/// Every vector returned by `lookup` has length `dimension()`.
pub trait VectorStore {
    /// The vector for `token`, or `None` if the token is out of vocabulary.
    fn lookup(&self, token: &str) -> Option<&[f32]>;

    /// Embedding dimension D shared by every stored vector.
    fn dimension(&self) -> usize;
}

impl<S: VectorStore + ?Sized> VectorStore for &S {
    fn lookup(&self, token: &str) -> Option<&[f32]> {
        (**self).lookup(token)
    }

    fn dimension(&self) -> usize {
        (**self).dimension()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Fallback sampling range
// ─────────────────────────────────────────────────────────────────────────────

/// Sampling interval for out-of-vocabulary fallback vectors.
///
/// Each coordinate of a fallback vector is drawn independently and uniformly
/// from `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformRange {
    pub low: f32,
    pub high: f32,
}

impl UniformRange {
    #[must_use]
    pub fn new(low: f32, high: f32) -> Self {
        debug_assert!(low <= high, "uniform range is inverted: [{low}, {high}]");
        Self { low, high }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen_range(self.low..=self.high)
    }
}

/// `[-0.01, 0.01]`, small enough that fallback tokens stay near the origin
/// and barely perturb max pooling.
impl Default for UniformRange {
    fn default() -> Self {
        Self {
            low: -0.01,
            high: 0.01,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Lookup adapter
// ─────────────────────────────────────────────────────────────────────────────

/// Embed one token, falling back to a uniform random vector on a store miss.
///
/// Infallible by design: an unknown token is missing data, not an error.
#[must_use]
pub fn embed_token<S, R>(token: &str, store: &S, range: UniformRange, rng: &mut R) -> Vec<f32>
where
    S: VectorStore + ?Sized,
    R: Rng + ?Sized,
{
    match store.lookup(token) {
        Some(v) => v.to_vec(),
        None => (0..store.dimension()).map(|_| range.sample(rng)).collect(),
    }
}

/// Embed an ordered token sequence, preserving order.
///
/// The result is a T×D matrix ready for [`crate::pooling::pool`].
#[must_use]
pub fn embed_tokens<S, R, I>(
    tokens: &[I],
    store: &S,
    range: UniformRange,
    rng: &mut R,
) -> Vec<Vec<f32>>
where
    S: VectorStore + ?Sized,
    R: Rng + ?Sized,
    I: AsRef<str>,
{
    tokens
        .iter()
        .map(|t| embed_token(t.as_ref(), store, range, rng))
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

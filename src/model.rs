//! The `Swem` facade: tokenize, embed, pool in one call.
//!
//! Holds the vector store, the tokenizer, and the out-of-vocabulary sampling
//! range for reuse across documents. Nothing is cached between calls; every
//! `infer_vector` builds its token-embedding matrix fresh and discards it
//! after the reduction.
//!
//! ## Example
//!
//! ```rust
//! use swem::prelude::*;
//!
//! let mut kv = KeyedVectors::new(2);
//! kv.insert("私", vec![1.0, 0.0]).unwrap();
//! kv.insert("バナナ", vec![0.0, 1.0]).unwrap();
//!
//! let swem = Swem::new(kv, JapaneseTokenizer);
//! let doc = swem.infer_vector("私はバナナです。", Pooling::Max).unwrap();
//! assert_eq!(doc.len(), 2);
//! ```

use crate::embedding::{embed_tokens, UniformRange, VectorStore};
use crate::pooling::{pool, Pooling};
use crate::tokenize::Tokenizer;
use crate::Result;
use rand::Rng;

/// Document embedder: a vector store, a tokenizer, and an OOV range.
///
/// Stateless across calls apart from entropy consumption on store misses.
/// Construction is cheap; the store is owned, so share a `&KeyedVectors`
/// (references implement [`VectorStore`]) to reuse one store across
/// several facades.
#[derive(Debug, Clone)]
pub struct Swem<S, T> {
    store: S,
    tokenizer: T,
    uniform_range: UniformRange,
}

impl<S: VectorStore, T: Tokenizer> Swem<S, T> {
    /// Facade with the default OOV range `[-0.01, 0.01]`.
    #[must_use]
    pub fn new(store: S, tokenizer: T) -> Self {
        Self {
            store,
            tokenizer,
            uniform_range: UniformRange::default(),
        }
    }

    /// Override the OOV sampling range.
    #[must_use]
    pub fn with_uniform_range(mut self, range: UniformRange) -> Self {
        self.uniform_range = range;
        self
    }

    /// Embedding dimension of the underlying store.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.store.dimension()
    }

    /// Embed a raw document: tokenize, look up, pool.
    ///
    /// Out-of-vocabulary fallbacks draw from [`rand::thread_rng`]; use
    /// [`Self::infer_vector_with_rng`] when determinism matters.
    ///
    /// # Errors
    ///
    /// Propagates pooling validation errors; tokenizing an input to zero
    /// tokens surfaces as [`crate::SwemError::EmptySequence`].
    pub fn infer_vector(&self, doc: &str, method: Pooling) -> Result<Vec<f32>> {
        self.infer_vector_with_rng(doc, method, &mut rand::thread_rng())
    }

    /// [`Self::infer_vector`] with an injected randomness source.
    pub fn infer_vector_with_rng<R: Rng + ?Sized>(
        &self,
        doc: &str,
        method: Pooling,
        rng: &mut R,
    ) -> Result<Vec<f32>> {
        let tokens = self.tokenizer.tokenize(doc);
        self.infer_tokens_with_rng(&tokens, method, rng)
    }

    /// Embed a pre-tokenized document.
    pub fn infer_tokens<I: AsRef<str>>(&self, tokens: &[I], method: Pooling) -> Result<Vec<f32>> {
        self.infer_tokens_with_rng(tokens, method, &mut rand::thread_rng())
    }

    /// [`Self::infer_tokens`] with an injected randomness source.
    pub fn infer_tokens_with_rng<I: AsRef<str>, R: Rng + ?Sized>(
        &self,
        tokens: &[I],
        method: Pooling,
        rng: &mut R,
    ) -> Result<Vec<f32>> {
        let embeds = embed_tokens(tokens, &self.store, self.uniform_range, rng);
        pool(&embeds, method)
    }
}

/// Functional entry point: embed a pre-tokenized document against a store
/// without constructing a facade.
///
/// # Errors
///
/// Same as [`crate::pooling::pool`].
pub fn infer_vector<S, I>(
    tokens: &[I],
    store: &S,
    method: Pooling,
    range: UniformRange,
) -> Result<Vec<f32>>
where
    S: VectorStore + ?Sized,
    I: AsRef<str>,
{
    let embeds = embed_tokens(tokens, store, range, &mut rand::thread_rng());
    pool(&embeds, method)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

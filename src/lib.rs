//! # swem
//!
//! Simple Word-Embedding Model (SWEM) document embeddings: pool pre-trained
//! word vectors into a single fixed-length vector per document. No trainable
//! parameters, no inference backend — just lookups and reductions.
//!
//! ## Modules
//!
//! | Module | Purpose | Notes |
//! |--------|---------|-------|
//! | [`pooling`] | Max / average / concat / hierarchical reductions | The core |
//! | [`embedding`] | Token → vector lookup with random OOV fallback | Trait-based store |
//! | [`tokenize`] | Pluggable tokenizer capability, EN/JA built-ins | BYO analyzer |
//! | [`store`] | In-memory keyed vectors + word2vec text loader | Optional convenience |
//! | [`model`] | `Swem` facade tying the layers together | |
//!
//! ## Pipeline
//!
//! ```text
//! text → tokenize → lookup (OOV ⇒ uniform random) → pool → document vector
//! ```
//!
//! ## Quick Example
//!
//! ```rust
//! use swem::prelude::*;
//!
//! let mut kv = KeyedVectors::new(4);
//! kv.insert("a", vec![1.0, 0.0, 0.0, 0.0]).unwrap();
//! kv.insert("pen", vec![0.0, 1.0, 0.0, 0.0]).unwrap();
//!
//! let swem = Swem::new(kv, EnglishTokenizer);
//! let doc = swem.infer_vector("a pen", Pooling::Average).unwrap();
//! assert_eq!(doc.len(), 4);
//! ```
//!
//! ## What This Crate Doesn't Do
//!
//! It does not train word vectors and it does not fetch them — bring a
//! populated [`embedding::VectorStore`]. By the time tokens reach the
//! pooling engine, they're just `Vec<f32>` rows of a fixed dimension.

pub mod embedding;
pub mod model;
pub mod pooling;
pub mod store;
pub mod tokenize;

use thiserror::Error;

/// Errors surfaced by embedding and pooling operations.
///
/// Out-of-vocabulary tokens are deliberately *not* represented here: a miss
/// in the vector store degrades to a random fallback vector instead of
/// aborting the document (see [`embedding::embed_token`]).
#[derive(Debug, Error)]
pub enum SwemError {
    /// A pooling method tag that names none of the supported reductions.
    #[error("unknown pooling method [{0}]")]
    UnknownMethod(String),

    /// Hierarchical pooling asked for a window longer than the sequence.
    #[error("window size [{window}] must not exceed sequence length [{len}]")]
    WindowExceedsLength { window: usize, len: usize },

    /// Hierarchical pooling asked for an empty window.
    #[error("window size must be at least 1")]
    ZeroWindow,

    /// A reduction over zero tokens has no defined value.
    #[error("cannot pool an empty token sequence")]
    EmptySequence,

    /// A vector's length disagrees with the declared embedding dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Reading a vector-store file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A vector-store file was syntactically malformed.
    #[error("malformed word2vec text at line {line}: {msg}")]
    Parse { line: usize, msg: String },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SwemError>;

pub use embedding::{embed_token, embed_tokens, UniformRange, VectorStore};
pub use model::{infer_vector, Swem};
pub use pooling::{hierarchical_pool, pool, Pooling};
pub use store::KeyedVectors;
pub use tokenize::{tokenize_en, tokenize_ja, EnglishTokenizer, JapaneseTokenizer, Tokenizer};

/// Convenience re-exports for typical usage.
pub mod prelude {
    pub use crate::embedding::{embed_token, embed_tokens, UniformRange, VectorStore};
    pub use crate::model::{infer_vector, Swem};
    pub use crate::pooling::{hierarchical_pool, pool, Pooling};
    pub use crate::store::KeyedVectors;
    pub use crate::tokenize::{
        tokenize_en, tokenize_ja, EnglishTokenizer, JapaneseTokenizer, Tokenizer,
    };
    pub use crate::{Result, SwemError};
}

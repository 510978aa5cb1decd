//! In-memory keyed vector store.
//!
//! [`KeyedVectors`] is the batteries-included [`VectorStore`]: a
//! `HashMap` of token → vector rows of one declared dimension, plus a loader
//! for the ubiquitous word2vec text format (`"<count> <dim>"` header, then
//! one `"<token> <f32> × dim"` row per line).
//!
//! ## Example
//!
//! ```rust
//! use swem::store::KeyedVectors;
//! use swem::embedding::VectorStore;
//!
//! let mut kv = KeyedVectors::new(2);
//! kv.insert("pen", vec![0.5, -0.5]).unwrap();
//!
//! assert_eq!(kv.dimension(), 2);
//! assert_eq!(kv.lookup("pen"), Some(&[0.5, -0.5][..]));
//! assert_eq!(kv.lookup("pineapple"), None);
//! ```

use crate::embedding::VectorStore;
use crate::{Result, SwemError};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Token → vector map with one fixed embedding dimension.
#[derive(Debug, Clone, Default)]
pub struct KeyedVectors {
    dim: usize,
    vectors: HashMap<String, Vec<f32>>,
}

impl KeyedVectors {
    /// An empty store declaring dimension `dim`.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            vectors: HashMap::new(),
        }
    }

    /// Insert or replace a token's vector.
    ///
    /// # Errors
    ///
    /// [`SwemError::DimensionMismatch`] if `vector.len() != dimension()`.
    pub fn insert(&mut self, token: impl Into<String>, vector: Vec<f32>) -> Result<()> {
        if vector.len() != self.dim {
            return Err(SwemError::DimensionMismatch {
                expected: self.dim,
                got: vector.len(),
            });
        }
        self.vectors.insert(token.into(), vector);
        Ok(())
    }

    /// Number of stored tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Whether `token` is in vocabulary.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.vectors.contains_key(token)
    }

    /// Load a store from a word2vec-format text file.
    ///
    /// # Errors
    ///
    /// [`SwemError::Io`] on read failure, [`SwemError::Parse`] on a
    /// malformed header or row (reported with its 1-based line number).
    pub fn load_word2vec_text<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::read_word2vec_text(BufReader::new(file))
    }

    /// Parse word2vec text from any buffered reader.
    pub fn read_word2vec_text<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();

        let header = lines
            .next()
            .transpose()?
            .ok_or_else(|| parse_err(1, "missing header"))?;
        let mut parts = header.split_whitespace();
        let declared: usize = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| parse_err(1, "header must start with a vocabulary count"))?;
        let dim: usize = parts
            .next()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| parse_err(1, "header must declare a dimension"))?;

        let mut kv = Self::new(dim);
        for (idx, line) in lines.enumerate() {
            let line = line?;
            let lineno = idx + 2;
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            let token = fields
                .next()
                .ok_or_else(|| parse_err(lineno, "missing token"))?;
            let vector: Vec<f32> = fields
                .map(|f| {
                    f.parse::<f32>()
                        .map_err(|_| parse_err(lineno, format!("bad float [{f}]")))
                })
                .collect::<Result<_>>()?;
            if vector.len() != dim {
                return Err(parse_err(
                    lineno,
                    format!("expected {dim} values, found {}", vector.len()),
                ));
            }
            kv.vectors.insert(token.to_string(), vector);
        }

        // Header count is advisory, matching common tooling that appends
        // rows without rewriting it; only row shape is enforced.
        let _ = declared;
        Ok(kv)
    }
}

fn parse_err(line: usize, msg: impl Into<String>) -> SwemError {
    SwemError::Parse {
        line,
        msg: msg.into(),
    }
}

impl VectorStore for KeyedVectors {
    fn lookup(&self, token: &str) -> Option<&[f32]> {
        self.vectors.get(token).map(Vec::as_slice)
    }

    fn dimension(&self) -> usize {
        self.dim
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

//! Pooling reductions over token-embedding sequences.
//!
//! Each method collapses a T×D sequence (T tokens, D dimensions) into one
//! fixed-length vector:
//!
//! | Method | Output | Keeps |
//! |--------|--------|-------|
//! | [`Pooling::Max`] | D | Per-dimension salience |
//! | [`Pooling::Average`] | D | Overall topic mass |
//! | [`Pooling::Concat`] | 2D | Both (average ‖ max) |
//! | [`Pooling::Hierarchical`] | D | Local word order |
//!
//! Hierarchical pooling mean-pools a sliding window of `n` consecutive
//! tokens (yielding T−n+1 window means), then max-pools across the windows.
//! Plain average/max are order-blind; the window stage is what lets
//! "not good, bad" and "not bad, good" come out different.
//!
//! ## Example
//!
//! ```rust
//! use swem::pooling::{pool, Pooling};
//!
//! let tokens = vec![
//!     vec![1.0, -2.0],
//!     vec![3.0, 0.0],
//! ];
//!
//! let max = pool(&tokens, Pooling::Max).unwrap();
//! assert_eq!(max, vec![3.0, 0.0]);
//!
//! let concat = pool(&tokens, Pooling::Concat).unwrap();
//! assert_eq!(concat, vec![2.0, -1.0, 3.0, 0.0]); // average ‖ max
//! ```

use crate::{Result, SwemError};
use std::fmt;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────────────────────
// Method selector
// ─────────────────────────────────────────────────────────────────────────────

/// Pooling method selector.
///
/// The set is closed: dispatch is an exhaustive `match`, so adding a method
/// is a compile-time event, not a stringly-typed runtime surprise. String
/// tags are still accepted through [`FromStr`] for config-file use, where an
/// unrecognized tag fails with [`SwemError::UnknownMethod`] — never a silent
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pooling {
    /// Coordinate-wise maximum over the token axis.
    #[default]
    Max,
    /// Coordinate-wise arithmetic mean over the token axis.
    Average,
    /// `Average` result followed by `Max` result; output dimension 2D.
    Concat,
    /// Sliding-window means reduced by coordinate-wise max.
    Hierarchical {
        /// Number of consecutive tokens per window. Must satisfy
        /// `1 <= window <= T`.
        window: usize,
    },
}

impl Pooling {
    /// Default window size for hierarchical pooling.
    pub const DEFAULT_WINDOW: usize = 3;

    /// Hierarchical pooling with the default window size.
    #[must_use]
    pub fn hierarchical() -> Self {
        Self::Hierarchical {
            window: Self::DEFAULT_WINDOW,
        }
    }

    /// Output dimension for an input of embedding dimension `dim`.
    #[must_use]
    pub fn output_dim(&self, dim: usize) -> usize {
        match self {
            Self::Concat => 2 * dim,
            Self::Max | Self::Average | Self::Hierarchical { .. } => dim,
        }
    }
}

impl FromStr for Pooling {
    type Err = SwemError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "max" => Ok(Self::Max),
            "avg" | "average" => Ok(Self::Average),
            "concat" => Ok(Self::Concat),
            "hierarchical" => Ok(Self::hierarchical()),
            other => Err(SwemError::UnknownMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Pooling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Max => f.pad("max"),
            Self::Average => f.pad("average"),
            Self::Concat => f.pad("concat"),
            Self::Hierarchical { .. } => f.pad("hierarchical"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Reductions
// ─────────────────────────────────────────────────────────────────────────────

/// Pool a token-embedding sequence into one document vector.
///
/// # Errors
///
/// - [`SwemError::EmptySequence`] if `tokens` is empty
/// - [`SwemError::DimensionMismatch`] if the rows are ragged
/// - [`SwemError::ZeroWindow`] / [`SwemError::WindowExceedsLength`] for
///   invalid hierarchical windows
pub fn pool(tokens: &[Vec<f32>], method: Pooling) -> Result<Vec<f32>> {
    validate(tokens)?;
    match method {
        Pooling::Max => Ok(max_pool(tokens)),
        Pooling::Average => Ok(mean_pool(tokens)),
        Pooling::Concat => {
            let mut out = mean_pool(tokens);
            out.extend(max_pool(tokens));
            Ok(out)
        }
        Pooling::Hierarchical { window } => hierarchical_windows(tokens, window),
    }
}

/// Hierarchical pooling: mean over each window of `window` consecutive
/// tokens, then coordinate-wise max over the T−window+1 window means.
///
/// Exposed standalone for callers that manage their own embeddings.
///
/// # Errors
///
/// Same validation as [`pool`], plus window preconditions.
pub fn hierarchical_pool(tokens: &[Vec<f32>], window: usize) -> Result<Vec<f32>> {
    validate(tokens)?;
    hierarchical_windows(tokens, window)
}

/// Checks non-emptiness and uniform row dimension.
fn validate(tokens: &[Vec<f32>]) -> Result<()> {
    let first = tokens.first().ok_or(SwemError::EmptySequence)?;
    let dim = first.len();
    for row in tokens {
        if row.len() != dim {
            return Err(SwemError::DimensionMismatch {
                expected: dim,
                got: row.len(),
            });
        }
    }
    Ok(())
}

/// Coordinate-wise maximum. Caller guarantees a non-empty, uniform input.
fn max_pool(tokens: &[Vec<f32>]) -> Vec<f32> {
    let mut out = tokens[0].clone();
    for row in &tokens[1..] {
        for (acc, &x) in out.iter_mut().zip(row) {
            *acc = acc.max(x);
        }
    }
    out
}

/// Coordinate-wise arithmetic mean. Caller guarantees a non-empty, uniform
/// input.
fn mean_pool(tokens: &[Vec<f32>]) -> Vec<f32> {
    let count = tokens.len() as f32;
    let mut out = vec![0.0; tokens[0].len()];
    for row in tokens {
        for (acc, &x) in out.iter_mut().zip(row) {
            *acc += x;
        }
    }
    for acc in &mut out {
        *acc /= count;
    }
    out
}

fn hierarchical_windows(tokens: &[Vec<f32>], window: usize) -> Result<Vec<f32>> {
    if window == 0 {
        return Err(SwemError::ZeroWindow);
    }
    let len = tokens.len();
    if window > len {
        return Err(SwemError::WindowExceedsLength { window, len });
    }

    // T − n + 1 window means, max-reduced in place rather than materialized.
    let mut out = mean_pool(&tokens[0..window]);
    for start in 1..=len - window {
        let mean = mean_pool(&tokens[start..start + window]);
        for (acc, x) in out.iter_mut().zip(mean) {
            *acc = acc.max(x);
        }
    }
    Ok(out)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

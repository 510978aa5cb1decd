//! Tokenizer capability and built-in English/Japanese tokenizers.
//!
//! Tokenization is pluggable: the facade takes anything implementing
//! [`Tokenizer`], and plain `Fn(&str) -> Vec<String>` closures qualify via a
//! blanket impl. Two built-ins cover the common cases:
//!
//! - [`tokenize_en`] — whitespace split with `.`, `,`, `?`, `!` detached as
//!   their own tokens.
//! - [`tokenize_ja`] — Japanese segmentation at script-run boundaries
//!   (Han / Hiragana / Katakana / Latin / digit runs; CJK and ASCII
//!   punctuation one token per character). This is a lightweight stand-in
//!   for a dictionary-backed morphological analyzer; wire a real one in
//!   through the trait if you need production-grade segmentation.
//!
//! ## Example
//!
//! ```rust
//! use swem::tokenize::{tokenize_en, tokenize_ja};
//!
//! assert_eq!(
//!     tokenize_en("This, is SWEM."),
//!     vec!["This", ",", "is", "SWEM", "."]
//! );
//! assert_eq!(
//!     tokenize_ja("私はバナナです。"),
//!     vec!["私", "は", "バナナ", "です", "。"]
//! );
//! ```

// ─────────────────────────────────────────────────────────────────────────────
// Capability
// ─────────────────────────────────────────────────────────────────────────────

/// Splits raw text into an ordered token sequence.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Any `Fn(&str) -> Vec<String>` is a tokenizer.
impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Punctuation-aware whitespace tokenizer for English-like text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishTokenizer;

impl Tokenizer for EnglishTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize_en(text)
    }
}

/// Script-run tokenizer for Japanese text.
#[derive(Debug, Clone, Copy, Default)]
pub struct JapaneseTokenizer;

impl Tokenizer for JapaneseTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        tokenize_ja(text)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// English
// ─────────────────────────────────────────────────────────────────────────────

/// Whitespace split, with `.`, `,`, `?`, `!` separated into their own tokens.
#[must_use]
pub fn tokenize_en(text: &str) -> Vec<String> {
    let mut spaced = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        if matches!(ch, '.' | ',' | '?' | '!') {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    spaced.split_whitespace().map(str::to_owned).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Japanese
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Han,
    Hiragana,
    Katakana,
    Latin,
    Digit,
    Punct,
    Other,
}

fn script_of(ch: char) -> Script {
    match ch {
        '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}' => Script::Han,
        '\u{3040}'..='\u{309F}' => Script::Hiragana,
        // Includes the prolonged sound mark 'ー' and half-width forms.
        '\u{30A0}'..='\u{30FF}' | '\u{FF66}'..='\u{FF9F}' => Script::Katakana,
        'A'..='Z' | 'a'..='z' | '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}' => Script::Latin,
        '0'..='9' | '\u{FF10}'..='\u{FF19}' => Script::Digit,
        '\u{3000}'..='\u{303F}' | '\u{FF01}'..='\u{FF0F}' | '\u{FF1A}'..='\u{FF20}' => {
            Script::Punct
        }
        c if c.is_ascii_punctuation() => Script::Punct,
        _ => Script::Other,
    }
}

/// Segment Japanese text at script-run boundaries.
///
/// Consecutive characters of the same script form one token; punctuation is
/// emitted one token per character; whitespace separates runs and is
/// discarded.
#[must_use]
pub fn tokenize_ja(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_script = Script::Other;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
            continue;
        }
        let script = script_of(ch);
        // Punctuation never merges, not even with itself.
        if script == Script::Punct || (script != current_script && !current.is_empty()) {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
        current_script = script;
        if script == Script::Punct {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

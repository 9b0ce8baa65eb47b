//! Skill normalization strategies.
//!
//! One `SkillNormalizer` instance is shared by the catalog parser and the
//! query builder, so both sides of a match always run the same pipeline
//! and cannot silently diverge.
//!
//! Default: `SimpleSplitNormalizer` (comma split, no case folding).
//! `StemmedNormalizer` trades exactness for recall on free-text input.
//!
//! `AppState` holds an `Arc<dyn SkillNormalizer>`, swapped at startup via config.

use std::collections::BTreeSet;

use rust_stemmers::{Algorithm, Stemmer};

/// Normalizes raw skill text into a set of comparable tokens.
///
/// Carried in `AppState` as `Arc<dyn SkillNormalizer>`.
pub trait SkillNormalizer: Send + Sync {
    fn name(&self) -> &'static str;

    /// Normalizes free text (query input or a catalog skills entry) into
    /// a set of skill tokens. An empty set means no usable skills.
    fn normalize(&self, text: &str) -> BTreeSet<String>;
}

/// Comma-split normalizer: trims each token and folds nothing.
///
/// "Python" and "python" stay distinct tokens. Catalog rows parsed with
/// the same instance remain comparable, which is the point.
pub struct SimpleSplitNormalizer;

impl SkillNormalizer for SimpleSplitNormalizer {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn normalize(&self, text: &str) -> BTreeSet<String> {
        text.split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Linguistic normalizer: lower-cases, splits into word tokens, drops
/// stop words, and reduces each token to its Snowball stem.
///
/// `+` and `#` count as word characters so "c++" and "c#" survive intact.
pub struct StemmedNormalizer {
    stemmer: Stemmer,
}

impl StemmedNormalizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for StemmedNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillNormalizer for StemmedNormalizer {
    fn name(&self) -> &'static str {
        "stemmed"
    }

    fn normalize(&self, text: &str) -> BTreeSet<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
            .filter(|token| !token.is_empty() && !is_stop_word(token))
            .map(|token| self.stemmer.stem(token).into_owned())
            .collect()
    }
}

/// Sorted for binary search.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "do", "for", "from", "had", "has",
    "have", "he", "her", "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "me",
    "my", "no", "not", "of", "on", "or", "our", "out", "so", "than", "that", "the", "their",
    "them", "then", "there", "these", "they", "this", "to", "up", "us", "was", "we", "were",
    "what", "when", "which", "who", "will", "with", "would", "you", "your",
];

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}

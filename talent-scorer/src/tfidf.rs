//! TF-IDF vectorisation and cosine similarity.
//!
//! The vectoriser is fitted on exactly the documents it transforms, so no
//! state survives between calls. Terms are words of at least two characters
//! plus their n-grams up to [`TfidfVectorizer::max_ngram`], with the
//! vectoriser stop words removed before n-grams are formed. Weights use raw
//! term counts and smoothed inverse document frequency
//! `ln((1 + n) / (1 + df)) + 1`, and each document vector is L2-normalised.

use std::collections::{BTreeMap, BTreeSet};

use talent_core::score::sanitise;
use thiserror::Error;

use crate::normalize;
use crate::stopwords::VECTORIZER_STOP_WORDS;

/// Largest vocabulary kept when fitting.
pub const MAX_FEATURES: usize = 500;

/// Longest n-gram added to the vocabulary.
const DEFAULT_MAX_NGRAM: usize = 2;

/// Shortest token considered a term.
const MIN_TOKEN_LEN: usize = 2;

/// Errors raised while fitting a vectoriser.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorizeError {
    /// No document contributed a single term.
    #[error("empty vocabulary; the documents contain only stop words or short tokens")]
    EmptyVocabulary,
}

/// Term-frequency/inverse-document-frequency vectoriser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TfidfVectorizer {
    max_features: usize,
    max_ngram: usize,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(MAX_FEATURES, DEFAULT_MAX_NGRAM)
    }
}

impl TfidfVectorizer {
    /// Build a vectoriser keeping at most `max_features` terms built from
    /// n-grams of length `1..=max_ngram`.
    ///
    /// A `max_ngram` of zero is treated as one.
    #[must_use]
    pub const fn new(max_features: usize, max_ngram: usize) -> Self {
        Self {
            max_features,
            max_ngram: if max_ngram == 0 { 1 } else { max_ngram },
        }
    }

    /// Largest vocabulary this vectoriser keeps.
    #[must_use]
    pub const fn max_features(&self) -> usize {
        self.max_features
    }

    /// Longest n-gram this vectoriser builds.
    #[must_use]
    pub const fn max_ngram(&self) -> usize {
        self.max_ngram
    }

    /// Fit on `documents` and return one L2-normalised vector per document.
    ///
    /// All vectors share the same dimension and term order. Documents with
    /// no surviving terms map to all-zero vectors.
    ///
    /// # Errors
    /// Returns [`VectorizeError::EmptyVocabulary`] when no document yields
    /// a term.
    ///
    /// # Examples
    /// ```
    /// use talent_scorer::{TfidfVectorizer, VectorizeError};
    ///
    /// let vectors = TfidfVectorizer::default()
    ///     .fit_transform(&["rust systems", "rust web"])
    ///     .unwrap();
    /// assert_eq!(vectors.len(), 2);
    ///
    /// let empty = TfidfVectorizer::default().fit_transform(&["the of", "a"]);
    /// assert_eq!(empty, Err(VectorizeError::EmptyVocabulary));
    /// ```
    pub fn fit_transform<S: AsRef<str>>(
        &self,
        documents: &[S],
    ) -> Result<Vec<Vec<f32>>, VectorizeError> {
        let counts: Vec<BTreeMap<String, usize>> = documents
            .iter()
            .map(|doc| self.term_counts(doc.as_ref()))
            .collect();

        let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in &counts {
            for (term, count) in doc {
                *totals.entry(term.as_str()).or_default() += count;
                *doc_freq.entry(term.as_str()).or_default() += 1;
            }
        }
        if totals.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let vocabulary = self.select_features(&totals);
        log::trace!(
            "fitted {} of {} terms over {} documents",
            vocabulary.len(),
            totals.len(),
            documents.len()
        );
        let weights: Vec<(&str, f32)> = vocabulary
            .into_iter()
            .map(|term| {
                let df = doc_freq.get(term).copied().unwrap_or_default();
                (term, smooth_idf(documents.len(), df))
            })
            .collect();

        Ok(counts
            .iter()
            .map(|doc| weigh_document(doc, &weights))
            .collect())
    }

    fn term_counts(&self, document: &str) -> BTreeMap<String, usize> {
        let tokens: Vec<&str> = document
            .split_whitespace()
            .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
            .filter(|token| !VECTORIZER_STOP_WORDS.contains(token))
            .collect();
        let mut counts = BTreeMap::new();
        for size in 1..=self.max_ngram {
            for gram in tokens.windows(size) {
                *counts.entry(gram.join(" ")).or_default() += 1;
            }
        }
        counts
    }

    /// Keep the most frequent terms, breaking count ties alphabetically.
    fn select_features<'t>(&self, totals: &BTreeMap<&'t str, usize>) -> BTreeSet<&'t str> {
        if totals.len() <= self.max_features {
            return totals.keys().copied().collect();
        }
        let mut ranked: Vec<(&str, usize)> =
            totals.iter().map(|(term, count)| (*term, *count)).collect();
        // Stable sort over alphabetical input keeps ties alphabetical.
        ranked.sort_by(|left, right| right.1.cmp(&left.1));
        ranked
            .into_iter()
            .take(self.max_features)
            .map(|(term, _)| term)
            .collect()
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "idf is a logarithm of document count ratios"
)]
fn smooth_idf(documents: usize, doc_freq: usize) -> f32 {
    let n = documents as f32;
    let df = doc_freq as f32;
    ((1.0 + n) / (1.0 + df)).ln() + 1.0
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "tf-idf weights scale term counts"
)]
fn weigh_document(counts: &BTreeMap<String, usize>, weights: &[(&str, f32)]) -> Vec<f32> {
    let mut vector: Vec<f32> = weights
        .iter()
        .map(|(term, idf)| {
            let tf = counts.get(*term).copied().unwrap_or_default();
            tf as f32 * idf
        })
        .collect();
    let norm = l2_norm(&vector);
    if norm > 0.0 {
        for value in &mut vector {
            *value /= norm;
        }
    }
    vector
}

#[expect(clippy::float_arithmetic, reason = "euclidean norm")]
fn l2_norm(vector: &[f32]) -> f32 {
    vector.iter().map(|value| value * value).sum::<f32>().sqrt()
}

/// Cosine of the angle between two vectors.
///
/// Returns `0.0` when either vector has zero length. Extra trailing elements
/// of the longer vector are ignored.
#[expect(clippy::float_arithmetic, reason = "dot product over norms")]
#[must_use]
pub fn cosine_similarity(left: &[f32], right: &[f32]) -> f32 {
    let norms = l2_norm(left) * l2_norm(right);
    if norms <= 0.0 || !norms.is_finite() {
        return 0.0;
    }
    let dot: f32 = left.iter().zip(right).map(|(a, b)| a * b).sum();
    dot / norms
}

/// TF-IDF cosine similarity between two free-text documents.
///
/// Both texts are passed through [`normalize`] and a fresh
/// [`TfidfVectorizer`] is fitted on the pair. Empty input, or input that
/// leaves no terms after cleaning, scores `0.0`. The result lies in
/// `0.0..=1.0`.
///
/// # Examples
/// ```
/// use talent_scorer::text_similarity;
///
/// let same = text_similarity("Rust systems engineer", "rust systems engineer");
/// assert!((same - 1.0).abs() < 1e-6);
/// assert_eq!(text_similarity("", "rust"), 0.0);
/// assert_eq!(text_similarity("the and", "of it"), 0.0);
/// ```
#[must_use]
pub fn text_similarity(left: &str, right: &str) -> f32 {
    if left.is_empty() || right.is_empty() {
        return 0.0;
    }
    let documents = [normalize(left), normalize(right)];
    let vectors = match TfidfVectorizer::default().fit_transform(&documents) {
        Ok(vectors) => vectors,
        Err(err) => {
            log::debug!("text similarity falls back to zero: {err}");
            return 0.0;
        }
    };
    let [first, second] = vectors.as_slice() else {
        return 0.0;
    };
    sanitise(cosine_similarity(first, second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[expect(clippy::float_arithmetic, reason = "tolerance comparison")]
    fn close(actual: f32, expected: f32) -> bool {
        (actual - expected).abs() < 1e-4
    }

    #[rstest]
    fn identical_texts_score_one() {
        let score = text_similarity("Python machine learning", "python machine learning");
        assert!(close(score, 1.0), "got {score}");
    }

    #[rstest]
    fn disjoint_texts_score_zero() {
        assert_eq!(text_similarity("rust compiler", "pastry chef"), 0.0);
    }

    #[rstest]
    #[case("", "python")]
    #[case("python", "")]
    #[case("the and of", "python developer")]
    #[case("a b c", "x y z")]
    fn degenerate_input_scores_zero(#[case] left: &str, #[case] right: &str) {
        assert_eq!(text_similarity(left, right), 0.0);
    }

    #[rstest]
    fn single_letter_tokens_have_no_vocabulary() {
        let result = TfidfVectorizer::default().fit_transform(&["a b c", "x y z"]);
        assert_eq!(result, Err(VectorizeError::EmptyVocabulary));
    }

    #[rstest]
    fn resume_and_description_overlap() {
        let score = text_similarity(
            "Experienced Python developer with ML expertise",
            "Looking for Python ML engineer",
        );
        assert!(close(score, 0.145_874), "got {score}");
    }

    #[rstest]
    fn bigrams_join_adjacent_terms() {
        let vectorizer = TfidfVectorizer::default();
        let counts = vectorizer.term_counts("python ml python ml");
        assert_eq!(counts.get("python ml"), Some(&2));
        assert_eq!(counts.get("ml python"), Some(&1));
        assert_eq!(counts.get("python"), Some(&2));
    }

    #[rstest]
    fn stop_words_are_removed_before_bigrams() {
        let counts = TfidfVectorizer::default().term_counts("rust with go");
        assert_eq!(counts.get("rust go"), Some(&1));
        assert!(!counts.contains_key("with"));
    }

    #[rstest]
    fn feature_limit_prefers_frequent_terms() {
        let vectorizer = TfidfVectorizer::new(2, 1);
        let vectors = vectorizer
            .fit_transform(&["zeta zeta alpha beta", "zeta beta gamma"])
            .expect("vocabulary is non-empty");
        let dims: Vec<usize> = vectors.iter().map(Vec::len).collect();
        assert_eq!(dims, [2, 2]);
    }

    #[rstest]
    fn vectors_are_unit_length() {
        let vectors = TfidfVectorizer::default()
            .fit_transform(&["rust async runtime", "tokio async runtime rust"])
            .expect("vocabulary is non-empty");
        for vector in &vectors {
            assert!(close(l2_norm(vector), 1.0));
        }
    }

    #[rstest]
    fn empty_document_maps_to_zero_vector() {
        let vectors = TfidfVectorizer::default()
            .fit_transform(&["rust", ""])
            .expect("one document has terms");
        assert_eq!(vectors.get(1).map(|v| l2_norm(v)), Some(0.0));
    }

    #[rstest]
    fn cosine_of_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert!(close(cosine_similarity(&[1.0, 1.0], &[2.0, 2.0]), 1.0));
    }
}

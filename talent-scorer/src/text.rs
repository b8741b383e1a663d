//! Text cleaning applied before vectorisation.

use crate::stopwords::NORMALIZER_STOP_WORDS;

/// Reduce free text to lowercase ASCII words with stop words removed.
///
/// Every character that is neither an ASCII letter nor whitespace is dropped,
/// so `"C++"` becomes `"c"` and `"don't"` becomes `"dont"`. Words are joined
/// by single spaces. Empty or all-noise input yields an empty string.
///
/// # Examples
/// ```
/// use talent_scorer::normalize;
///
/// assert_eq!(normalize("Senior Python Developer, 5+ yrs!"), "senior python developer yrs");
/// assert_eq!(normalize("the and of"), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_alphabetic() || ch.is_whitespace())
        .collect();
    cleaned
        .split_whitespace()
        .filter(|word| !NORMALIZER_STOP_WORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

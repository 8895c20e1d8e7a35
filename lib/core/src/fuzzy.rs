//! Fuzzy token matching against vocabulary keywords.
//!
//! A token and a vocabulary keyword are "similar" when any single rule
//! holds: exact/containment, singular-plural, `ies`/`y`, `es`, `ing`/`ed`
//! stem relations, camel-case part overlap for long tokens, or a bounded
//! position-wise character distance for mid-length tokens. Match quality is
//! a coarse scalar used as a score multiplier downstream.

use crate::text::camel_parts;

/// Quality of an exact match.
pub const QUALITY_EXACT: f32 = 1.0;
/// Quality of a substring-containment match.
pub const QUALITY_CONTAINS: f32 = 0.8;
/// Quality of any other heuristic match.
pub const QUALITY_HEURISTIC: f32 = 0.6;

/// Whether `word` is similar enough to `vocab_word` to count as a match.
pub fn similar(word: &str, vocab_word: &str) -> bool {
    if word == vocab_word || vocab_word.contains(word) || word.contains(vocab_word) {
        return true;
    }

    // Singular/plural, either direction.
    if word.strip_suffix('s') == Some(vocab_word) || vocab_word.strip_suffix('s') == Some(word) {
        return true;
    }

    // "...ies" <-> "...y", either direction.
    if let Some(stem) = word.strip_suffix("ies") {
        if vocab_word.strip_suffix('y') == Some(stem) {
            return true;
        }
    }
    if let Some(stem) = vocab_word.strip_suffix("ies") {
        if word.strip_suffix('y') == Some(stem) {
            return true;
        }
    }

    // "...es", either direction.
    if word.strip_suffix("es") == Some(vocab_word) || vocab_word.strip_suffix("es") == Some(word) {
        return true;
    }

    // Verb forms: the record token's stem against the keyword.
    if let Some(stem) = word.strip_suffix("ing") {
        if vocab_word == stem || vocab_word.strip_suffix('e') == Some(stem) {
            return true;
        }
    }
    if let Some(stem) = word.strip_suffix("ed") {
        if vocab_word == stem || vocab_word.strip_suffix('e') == Some(stem) {
            return true;
        }
    }

    let word_len = word.chars().count();
    let vocab_len = vocab_word.chars().count();

    // Long tokens: decided entirely by camel-case part overlap. On
    // lowercased input each side decomposes to itself, so unrelated long
    // tokens never reach the character-distance rule. Preserved as-is.
    if word_len > 6 && vocab_len > 6 {
        let word_parts: Vec<String> = camel_parts(word)
            .into_iter()
            .map(|p| p.to_lowercase())
            .collect();
        let vocab_parts: Vec<String> = camel_parts(vocab_word)
            .into_iter()
            .map(|p| p.to_lowercase())
            .collect();
        return word_parts.iter().any(|p| vocab_parts.contains(p))
            || vocab_parts.iter().any(|p| word_parts.contains(p));
    }

    // Mid-length tokens: position-wise mismatch count over the common
    // prefix length, bounded by 30% of the shorter token. A truncated
    // Hamming distance, not an edit distance - insertions shift every
    // later position and are not compensated for. Known approximation,
    // kept because changing it reorders results.
    if word_len > 3 && vocab_len > 3 {
        let max_distance = (word_len.min(vocab_len) as f32 * 0.3).floor() as usize;
        let mut distance = 0;
        for (a, b) in word.chars().zip(vocab_word.chars()) {
            if a != b {
                distance += 1;
                if distance > max_distance {
                    return false;
                }
            }
        }
        return true;
    }

    false
}

/// Match quality for scoring: exact, containment, or heuristic.
/// Only meaningful when [`similar`] holds for the pair.
#[inline]
pub fn match_quality(word: &str, vocab_word: &str) -> f32 {
    if word == vocab_word {
        QUALITY_EXACT
    } else if vocab_word.contains(word) || word.contains(vocab_word) {
        QUALITY_CONTAINS
    } else {
        QUALITY_HEURISTIC
    }
}

/// Best match quality of `word` against any keyword in `keywords`, if any
/// keyword is similar at all.
pub fn best_match<'a, I>(word: &str, keywords: I) -> Option<f32>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<f32> = None;
    for keyword in keywords {
        if similar(word, keyword) {
            let quality = match_quality(word, keyword);
            if best.map_or(true, |b| quality > b) {
                best = Some(quality);
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_and_containment() {
        assert!(similar("code", "code"));
        assert!(similar("program", "programming"));
        assert!(similar("programming", "program"));
        assert_eq!(match_quality("code", "code"), QUALITY_EXACT);
        assert_eq!(match_quality("program", "programming"), QUALITY_CONTAINS);
    }

    #[test]
    fn test_plural_relation() {
        assert!(similar("algorithms", "algorithm"));
        assert!(similar("algorithm", "algorithms"));
    }

    #[test]
    fn test_ies_relation() {
        assert!(similar("strategies", "strategy"));
        assert!(similar("strategy", "strategies"));
    }

    #[test]
    fn test_ing_relation() {
        assert!(similar("cooking", "cook"));
        assert!(similar("computing", "compute"));
    }

    #[test]
    fn test_ed_relation() {
        assert!(similar("painted", "paint"));
        assert!(similar("explored", "explore"));
    }

    #[test]
    fn test_hamming_mid_length() {
        // "guide" vs "guida": 5 chars, threshold floor(1.5) = 1, one mismatch.
        assert!(similar("guida", "guide"));
        // Two mismatches exceed the threshold.
        assert!(!similar("gqida", "guide"));
        // Short tokens never reach the distance rule.
        assert!(!similar("cat", "car"));
    }

    #[test]
    fn test_long_tokens_terminal_rule() {
        // Both sides longer than 6 chars and lowercase: camel decomposition
        // is the identity, so dissimilar long tokens do not match even
        // though their prefix distance would pass.
        assert!(!similar("gardening1", "gardening2"));
    }

    #[test]
    fn test_best_match_prefers_highest_quality() {
        let keywords = ["technology", "tech"];
        let best = best_match("tech", keywords.iter().map(|s| &**s));
        assert_eq!(best, Some(QUALITY_EXACT));

        let best = best_match("technolog", ["technology"].iter().map(|s| &**s));
        assert_eq!(best, Some(QUALITY_CONTAINS));

        assert_eq!(best_match("zzz", ["technology"].iter().map(|s| &**s)), None);
    }
}

//! Text normalization and morphological expansion.
//!
//! Tokenization is field-aware: author-like fields are split on whitespace
//! and periods with honorific prefixes/suffixes removed, everything else is
//! lowercased, stripped of punctuation, and split on whitespace/hyphens.
//! [`expand`] widens the token list into its variant closure so that
//! downstream matching catches plural/singular and verb-form surface forms.

use smallvec::SmallVec;

const AUTHOR_PREFIXES: [&str; 8] = ["dr", "prof", "professor", "mr", "mrs", "ms", "sir", "dame"];
const AUTHOR_SUFFIXES: [&str; 8] = ["phd", "md", "dds", "jr", "sr", "ii", "iii", "iv"];

/// Tokenize a field value into lowercase tokens.
pub fn tokenize(text: &str, author_like: bool) -> Vec<String> {
    if author_like {
        return tokenize_author(text);
    }

    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace() || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Author names: split on whitespace and periods, drop honorifics.
fn tokenize_author(name: &str) -> Vec<String> {
    name.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '.')
        .filter(|t| !t.is_empty())
        .filter(|t| !AUTHOR_PREFIXES.contains(t) && !AUTHOR_SUFFIXES.contains(t))
        .map(|t| t.to_string())
        .collect()
}

/// Tokenize and expand into the variant closure: each token plus its
/// derived morphological forms, deduplicated in first-seen order.
pub fn expand(text: &str, author_like: bool) -> Vec<String> {
    let tokens = tokenize(text, author_like);
    let mut seen = ahash::AHashSet::new();
    let mut out = Vec::with_capacity(tokens.len() * 2);
    for token in tokens {
        for variant in variants(&token) {
            if seen.insert(variant.clone()) {
                out.push(variant);
            }
        }
    }
    out
}

/// Morphological variants of a single token, the token itself first.
///
/// The camel-case split runs on the already-lowercased token, so it only
/// recovers segments when the surface form kept internal capitals through
/// normalization (author tokens can). Best-effort, not a guaranteed
/// decomposition.
pub fn variants(token: &str) -> SmallVec<[String; 4]> {
    let mut out: SmallVec<[String; 4]> = SmallVec::new();
    out.push(token.to_string());

    if let Some(stem) = token.strip_suffix('s') {
        if !token.ends_with("ss") {
            out.push(stem.to_string());
        }
    }
    if let Some(stem) = token.strip_suffix("ies") {
        out.push(format!("{stem}y"));
    }
    if let Some(stem) = token.strip_suffix("es") {
        out.push(stem.to_string());
    }
    if let Some(stem) = token.strip_suffix("ing") {
        out.push(stem.to_string());
        out.push(format!("{stem}e"));
    }
    if token.ends_with("ed") {
        out.push(token[..token.len() - 2].to_string());
        out.push(token[..token.len() - 1].to_string());
    }
    if token.chars().count() > 6 {
        for part in camel_parts(token) {
            out.push(part);
        }
    }

    out
}

/// Split a token at internal ASCII-uppercase boundaries.
pub fn camel_parts(token: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    for c in token.chars() {
        if c.is_ascii_uppercase() && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(
            tokenize("The Art of Programming!", false),
            vec!["the", "art", "of", "programming"]
        );
        assert_eq!(
            tokenize("eco-friendly, sustainable", false),
            vec!["eco", "friendly", "sustainable"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("", false).is_empty());
        assert!(tokenize("  ...  ", false).is_empty());
        assert!(tokenize("", true).is_empty());
    }

    #[test]
    fn test_tokenize_idempotent_on_normalized_input() {
        let tokens = tokenize("quantum physics guide", false);
        let rejoined = tokens.join(" ");
        assert_eq!(tokenize(&rejoined, false), tokens);
    }

    #[test]
    fn test_author_honorifics_dropped() {
        assert_eq!(tokenize("Dr. Michael Lee", true), vec!["michael", "lee"]);
        assert_eq!(tokenize("Jane Smith PhD", true), vec!["jane", "smith"]);
        assert_eq!(tokenize("Prof. Ada Lovelace Jr", true), vec!["ada", "lovelace"]);
    }

    #[test]
    fn test_variants_plural() {
        let v = variants("algorithms");
        assert!(v.contains(&"algorithms".to_string()));
        assert!(v.contains(&"algorithm".to_string()));

        // "ss" endings are not plurals.
        let v = variants("class");
        assert!(!v.contains(&"clas".to_string()));
    }

    #[test]
    fn test_variants_ies() {
        let v = variants("strategies");
        assert!(v.contains(&"strategy".to_string()));
    }

    #[test]
    fn test_variants_ing_adds_stem_and_e_form() {
        let v = variants("cooking");
        assert!(v.contains(&"cook".to_string()));
        assert!(v.contains(&"cooke".to_string()));

        let v = variants("computing");
        assert!(v.contains(&"compute".to_string()));
    }

    #[test]
    fn test_variants_ed() {
        let v = variants("painted");
        assert!(v.contains(&"paint".to_string()));
        assert!(v.contains(&"painte".to_string()));
    }

    #[test]
    fn test_camel_split_is_noop_on_lowercase() {
        // Lowercased input has no internal capitals left to split on.
        assert_eq!(camel_parts("javascript"), vec!["javascript"]);
        assert_eq!(camel_parts("JavaScript"), vec!["Java", "Script"]);
    }

    #[test]
    fn test_expand_dedupes_across_tokens() {
        // "guide" and "guides" share the variant "guide".
        let expanded = expand("guide guides", false);
        let count = expanded.iter().filter(|w| w.as_str() == "guide").count();
        assert_eq!(count, 1);
        assert_eq!(expanded[0], "guide");
    }

    #[test]
    fn test_expand_author_field() {
        let expanded = expand("Dr. Sarah Palmer", true);
        assert!(expanded.contains(&"sarah".to_string()));
        assert!(expanded.contains(&"palmer".to_string()));
        assert!(!expanded.iter().any(|w| w == "dr"));
    }
}

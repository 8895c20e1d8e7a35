//! Catalog records, fields, and query parsing.

use serde::{Deserialize, Serialize};
use crate::{Error, Result};

/// A structured catalog record. Immutable once vectorized; the engine only
/// ever reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl CatalogRecord {
    /// Reject records with no populated text field. Such a record would
    /// vectorize to pure zero vectors and is a caller error, not a valid
    /// "no topic signal" outcome.
    pub fn validate(&self) -> Result<()> {
        if self.populated_fields().next().is_none() {
            return Err(Error::EmptyRecord(self.id));
        }
        Ok(())
    }

    /// The value of a field, if populated with non-whitespace text.
    pub fn field(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Title => self.title.as_str(),
            Field::Description => self.description.as_str(),
            Field::Author => self.author.as_str(),
            Field::Category => self.category.as_deref().unwrap_or(""),
            Field::Theme => self.theme.as_deref().unwrap_or(""),
            Field::Format => self.format.as_deref().unwrap_or(""),
        };
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Populated fields in canonical order.
    pub fn populated_fields(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .iter()
            .filter_map(move |&field| self.field(field).map(|value| (field, value)))
    }

    /// Build the synthetic record a free-text query is vectorized as: the
    /// query text stands in for every field, except that a detected proper
    /// name replaces it in the author field.
    pub fn from_query(query: &ParsedQuery) -> Self {
        let text = query.raw().to_string();
        let author = query
            .name_candidate()
            .unwrap_or_else(|| query.raw())
            .to_string();
        Self {
            id: 0,
            title: text.clone(),
            description: text.clone(),
            author,
            category: Some(text.clone()),
            theme: Some(text.clone()),
            format: Some(text),
        }
    }
}

/// The closed set of scorable record fields, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Author,
    Category,
    Theme,
    Format,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Title,
        Field::Description,
        Field::Author,
        Field::Category,
        Field::Theme,
        Field::Format,
    ];

    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Author => "author",
            Field::Category => "category",
            Field::Theme => "theme",
            Field::Format => "format",
        }
    }

    /// Author-like fields get honorific stripping during tokenization.
    #[inline]
    #[must_use]
    pub fn is_author(self) -> bool {
        matches!(self, Field::Author)
    }

    /// Field weight for dense topic scoring.
    #[inline]
    #[must_use]
    pub fn dense_weight(self) -> f32 {
        match self {
            Field::Title => 3.0,
            Field::Description => 2.0,
            Field::Author => 2.0,
            Field::Category => 2.5,
            Field::Theme => 2.0,
            Field::Format => 1.5,
        }
    }

    /// Field weight applied when merging per-field sparse components.
    #[inline]
    #[must_use]
    pub fn sparse_weight(self) -> f32 {
        match self {
            Field::Title => 2.5,
            Field::Description => 1.5,
            Field::Author => 2.0,
            Field::Category => 2.0,
            Field::Theme => 1.8,
            Field::Format => 1.5,
        }
    }

    /// Per-token importance weight inside a single field. Distinct from
    /// [`Field::sparse_weight`]: this shapes token frequencies, the other
    /// scales whole fields against each other.
    #[inline]
    #[must_use]
    pub fn token_importance(self) -> f32 {
        match self {
            Field::Title => 3.0,
            Field::Description => 2.0,
            Field::Author => 2.5,
            Field::Category => 2.0,
            Field::Theme => 1.8,
            Field::Format => 1.5,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A free-text query, pre-split for scoring, with the optional proper-name
/// candidate extracted from capitalized tokens.
#[derive(Debug, Clone)]
pub struct ParsedQuery {
    raw: String,
    words: Vec<String>,
    name_candidate: Option<String>,
}

impl ParsedQuery {
    pub fn parse(query: &str) -> Self {
        let words: Vec<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(|w| w.to_string())
            .collect();

        // Capitalized multi-character tokens are treated as a candidate
        // proper name (e.g. an author the user typed verbatim).
        let name_parts: Vec<&str> = query
            .split_whitespace()
            .filter(|part| {
                part.chars().count() > 1
                    && part.chars().next().is_some_and(|c| c.is_ascii_uppercase())
            })
            .collect();
        let name_candidate = if name_parts.is_empty() {
            None
        } else {
            Some(name_parts.join(" "))
        };

        Self {
            raw: query.to_string(),
            words,
            name_candidate,
        }
    }

    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lowercased whitespace-delimited query words.
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    pub fn name_candidate(&self) -> Option<&str> {
        self.name_candidate.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

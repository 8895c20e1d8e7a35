//! Topic vocabulary
//!
//! An ordered table of named topics, each carrying a keyword list. The topic
//! count fixes the dense vector dimensionality; the flattened, deduplicated
//! keyword list defines the sparse vector's index space. Both orderings are
//! stable for the lifetime of the vocabulary - changing either without
//! re-vectorizing every stored record breaks the contract with the index.

use ahash::{AHashMap, AHashSet};
use crate::{Error, Result};

/// A named topic with its keyword list.
#[derive(Debug, Clone)]
pub struct Topic {
    name: String,
    keywords: Vec<String>,
    keyword_set: AHashSet<String>,
}

impl Topic {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        let keywords: Vec<String> = keywords.iter().map(|k| k.to_string()).collect();
        let keyword_set = keywords.iter().cloned().collect();
        Self {
            name: name.into(),
            keywords,
            keyword_set,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Exact membership test against this topic's keyword list.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.keyword_set.contains(word)
    }
}

/// The ordered topic table plus the flattened global keyword vocabulary.
#[derive(Debug, Clone)]
pub struct TopicVocabulary {
    topics: Vec<Topic>,
    flat: Vec<String>,
    index_of: AHashMap<String, u32>,
}

impl TopicVocabulary {
    /// Build a vocabulary from an ordered topic list.
    ///
    /// The flat keyword space is the concatenation of all topic keyword
    /// lists with duplicates removed, first occurrence winning. A keyword
    /// shared by several topics therefore maps to a single sparse index.
    pub fn new(topics: Vec<Topic>) -> Result<Self> {
        if topics.is_empty() {
            return Err(Error::InvalidVocabulary("no topics".to_string()));
        }

        let mut flat = Vec::new();
        let mut index_of = AHashMap::new();
        for topic in &topics {
            for keyword in topic.keywords() {
                if !index_of.contains_key(keyword) {
                    index_of.insert(keyword.clone(), flat.len() as u32);
                    flat.push(keyword.clone());
                }
            }
        }

        Ok(Self {
            topics,
            flat,
            index_of,
        })
    }

    /// The standard catalog vocabulary: eight topics covering the domains a
    /// general book catalog tends to contain.
    pub fn standard() -> Self {
        let topics = vec![
            Topic::new("technology", &[
                "programming", "software", "computer", "code", "development", "web", "data",
                "cloud", "algorithm", "algorithms", "ai", "artificial intelligence", "tech",
                "digital", "computing", "technology", "coding", "developer", "application",
                "system", "database",
            ]),
            Topic::new("science", &[
                "physics", "quantum", "mechanics", "scientific", "exploration", "discovery",
                "research", "experiment", "theory", "principles", "space", "astronomy",
                "science", "laboratory", "hypothesis", "observation", "analysis",
                "methodology", "empirical",
            ]),
            Topic::new("education", &[
                "learn", "guide", "tutorial", "basics", "introduction", "master",
                "understanding", "concepts", "education", "educational", "beginner",
                "advanced", "comprehensive", "practical", "teaching", "instruction",
                "learning", "study", "knowledge", "skills",
            ]),
            Topic::new("arts", &[
                "art", "music", "photography", "composition", "design", "creative",
                "artistic", "visual", "classical", "contemporary", "modern", "symphony",
                "architecture", "painting", "sculpture", "drawing", "performance",
                "exhibition", "gallery", "museum",
            ]),
            Topic::new("lifestyle", &[
                "cooking", "gardening", "mindful", "wellness", "living", "health",
                "meditation", "sustainable", "eco-friendly", "culture", "cuisine", "recipe",
                "technique", "planting", "growing", "organic", "lifestyle", "healthy",
                "balance", "wellbeing", "garden",
            ]),
            Topic::new("business", &[
                "finance", "marketing", "investment", "strategy", "business", "wealth",
                "money", "market", "digital marketing", "growth", "management", "financial",
                "economics", "trading", "stocks", "entrepreneur", "startup", "revenue",
                "profit", "banking", "success",
            ]),
            Topic::new("history", &[
                "ancient", "civilization", "historical", "empire", "dynasty", "archaeology",
                "artifacts", "culture", "heritage", "tradition", "mayan", "egyptian",
                "roman", "greek", "medieval", "renaissance", "modern", "century", "era",
                "period",
            ]),
            Topic::new("format", &[
                "digital", "hardcover", "paperback", "ebook", "print", "audio", "book",
                "books", "guide", "handbook", "manual", "textbook", "publication",
                "edition", "volume", "series", "collection", "anthology", "reference",
            ]),
        ];

        Self::new(topics).expect("standard vocabulary is non-empty")
    }

    /// Number of topics, and therefore the dense vector dimensionality.
    #[inline]
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    #[inline]
    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// The flattened global keyword list, in sparse index order.
    #[inline]
    #[must_use]
    pub fn flat(&self) -> &[String] {
        &self.flat
    }

    /// Sparse index of a keyword, if it is in the vocabulary.
    #[inline]
    pub fn index_of(&self, keyword: &str) -> Option<u32> {
        self.index_of.get(keyword).copied()
    }
}

impl Default for TopicVocabulary {
    fn default() -> Self {
        Self::standard()
    }
}

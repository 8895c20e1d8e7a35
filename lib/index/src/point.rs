use serde::{Deserialize, Serialize};
use serde_json::Value;
use shelfx_core::{CatalogRecord, DenseVector, SparseVector};
use crate::{Error, Result};

/// Payload key carrying the sparse index list, kept in the payload because
/// the index's native sparse storage and its payload-filter mechanism are
/// separate capabilities.
pub const SPARSE_INDICES_KEY: &str = "sparse_indices";
/// Payload key carrying the sparse value list.
pub const SPARSE_VALUES_KEY: &str = "sparse_values";

/// A point as stored in the vector index: integer id, one dense vector,
/// one named sparse vector, and a JSON payload with the record's fields
/// plus the sparse index/value lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPoint {
    pub id: u64,
    pub dense: DenseVector,
    pub sparse: SparseVector,
    pub payload: Value,
}

impl StoredPoint {
    /// Build a point from a record and its vector pair, shaping the
    /// payload the way the index expects it.
    pub fn from_record(
        record: &CatalogRecord,
        dense: DenseVector,
        sparse: SparseVector,
    ) -> Result<Self> {
        let mut payload = serde_json::to_value(record).map_err(|e| Error::InvalidPayload {
            id: record.id,
            reason: e.to_string(),
        })?;
        if let Value::Object(map) = &mut payload {
            map.insert(
                SPARSE_INDICES_KEY.to_string(),
                serde_json::to_value(sparse.indices()).unwrap_or(Value::Null),
            );
            map.insert(
                SPARSE_VALUES_KEY.to_string(),
                serde_json::to_value(sparse.values()).unwrap_or(Value::Null),
            );
        }
        Ok(Self {
            id: record.id,
            dense,
            sparse,
            payload,
        })
    }
}

/// A search or scroll hit: the point id, its similarity score (1.0 for
/// scroll results), and the raw payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPoint {
    pub id: u64,
    pub score: f32,
    pub payload: Value,
}

impl ScoredPoint {
    /// Project the untyped payload into a typed record. Extra payload keys
    /// (the sparse lists) are ignored; a missing required field is a
    /// validation failure, never a silently-propagated absence.
    pub fn record(&self) -> Result<CatalogRecord> {
        serde_json::from_value(self.payload.clone()).map_err(|e| Error::InvalidPayload {
            id: self.id,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> CatalogRecord {
        CatalogRecord {
            id: 4,
            title: "Sustainable Gardening".to_string(),
            description: "Practical techniques for an eco-friendly garden".to_string(),
            author: "James Wilson".to_string(),
            category: Some("Gardening".to_string()),
            theme: Some("Sustainability".to_string()),
            format: Some("Digital".to_string()),
        }
    }

    #[test]
    fn test_payload_carries_sparse_lists() {
        let sparse = SparseVector::new(vec![3, 11], vec![0.6, 0.8]);
        let point =
            StoredPoint::from_record(&record(), DenseVector::zeros(8), sparse).unwrap();
        let indices = point.payload.get(SPARSE_INDICES_KEY).unwrap();
        assert_eq!(indices.as_array().unwrap().len(), 2);
        assert_eq!(point.payload.get("title").unwrap(), "Sustainable Gardening");
    }

    #[test]
    fn test_projection_roundtrip() {
        let point = StoredPoint::from_record(
            &record(),
            DenseVector::zeros(8),
            SparseVector::empty(),
        )
        .unwrap();
        let hit = ScoredPoint {
            id: point.id,
            score: 0.9,
            payload: point.payload,
        };
        assert_eq!(hit.record().unwrap(), record());
    }

    #[test]
    fn test_projection_rejects_missing_fields() {
        let hit = ScoredPoint {
            id: 9,
            score: 0.5,
            payload: serde_json::json!({ "id": 9, "title": "Orphan" }),
        };
        assert!(matches!(
            hit.record(),
            Err(Error::InvalidPayload { id: 9, .. })
        ));
    }
}

// End-to-end tests for the catalog service over the in-memory index.
use shelfx::prelude::*;
use shelfx::sample;
use shelfx::service::ServiceError;

fn seeded_service() -> CatalogService<InMemoryIndex> {
    let service = CatalogService::new(InMemoryIndex::new());
    let seeded = service.init_sample_data().unwrap();
    assert_eq!(seeded, 15);
    service
}

#[test]
fn test_sample_catalog_roundtrip() {
    let service = seeded_service();
    let records = service.list_all().unwrap();
    assert_eq!(records.len(), 15);

    // Scroll order is id order, and projection restores every field.
    let ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=15).collect::<Vec<u64>>());
    assert_eq!(records[0], sample::sample_records()[0]);
}

#[test]
fn test_blank_query_lists_everything_at_full_score() {
    let service = seeded_service();
    let results = service.search("   ").unwrap();
    assert_eq!(results.len(), 15);
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.record.id, (i + 1) as u64);
        assert_eq!(result.score, 1.0);
    }
}

#[test]
fn test_search_without_collection_is_empty() {
    let service = CatalogService::new(InMemoryIndex::new());
    assert!(service.search("anything").unwrap().is_empty());
    assert!(service.search("").unwrap().is_empty());
    assert!(service.list_all().unwrap().is_empty());
}

#[test]
fn test_exact_title_ranks_first() {
    let service = seeded_service();
    let results = service.search("The Art of Programming").unwrap();
    assert!(!results.is_empty());
    assert_eq!(results[0].record.id, 1);
    assert!((results[0].score - 1.0).abs() < 1e-6);
    // Batch rescale: nothing exceeds the maximum.
    assert!(results.iter().all(|r| r.score <= 1.0 + 1e-6 && r.score >= 0.0));
}

#[test]
fn test_author_name_query() {
    let service = seeded_service();
    let results = service.search("Sarah Chen").unwrap();
    assert!(!results.is_empty());
    assert_eq!(results[0].record.id, 2);
    assert_eq!(results[0].record.author, "Sarah Chen");
}

#[test]
fn test_morphological_query_reaches_stem_matches() {
    let service = seeded_service();
    // "cooking" appears only in record 7's description; the variant
    // closure and fuzzy matching have to carry the query to it.
    let results = service.search("cooking").unwrap();
    assert!(!results.is_empty());
    assert_eq!(results[0].record.id, 7);
}

#[test]
fn test_results_truncated_to_top_ten() {
    let service = seeded_service();
    // A broad query that lets many candidates through the filter.
    let results = service.search("guide").unwrap();
    assert!(results.len() <= 10);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_unmatchable_query_degrades_to_empty() {
    let service = seeded_service();
    let results = service.search("zzq xwv").unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_upsert_replaces_record() {
    let service = seeded_service();
    let mut updated = sample::sample_records()[0].clone();
    updated.title = "Refactoring Legacy Systems".to_string();
    service.upsert(&updated).unwrap();

    assert_eq!(service.index().count(shelfx::COLLECTION), 15);
    let records = service.list_all().unwrap();
    assert_eq!(records[0].title, "Refactoring Legacy Systems");
}

#[test]
fn test_upsert_rejects_blank_record() {
    let service = CatalogService::new(InMemoryIndex::new());
    let blank = CatalogRecord {
        id: 99,
        title: String::new(),
        description: "  ".to_string(),
        author: String::new(),
        category: None,
        theme: None,
        format: None,
    };
    assert!(matches!(
        service.upsert(&blank),
        Err(ServiceError::Engine(shelfx_core::Error::EmptyRecord(99)))
    ));
}

#[test]
fn test_clear_is_idempotent() {
    let service = seeded_service();
    service.clear().unwrap();
    assert!(service.search("quantum").unwrap().is_empty());
    assert!(service.list_all().unwrap().is_empty());
    // Clearing an absent collection is still success.
    service.clear().unwrap();
}

#[test]
fn test_vectors_stored_with_payload_lists() {
    let service = seeded_service();
    let points = service.index().scroll(shelfx::COLLECTION, 1).unwrap();
    let payload = &points[0].payload;
    let indices = payload
        .get(shelfx_index::SPARSE_INDICES_KEY)
        .and_then(|v| v.as_array())
        .unwrap();
    let values = payload
        .get(shelfx_index::SPARSE_VALUES_KEY)
        .and_then(|v| v.as_array())
        .unwrap();
    assert_eq!(indices.len(), values.len());
    assert!(!indices.is_empty());
}

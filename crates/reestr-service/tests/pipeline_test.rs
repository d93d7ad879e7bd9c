//! End-to-end reads through the pipeline with a fake registry and an
//! in-process cache.

mod common;

use common::{client_for, listing, object, registry_serving};
use reestr_core::ReestrError;
use reestr_service::{
    CacheStore, DatasetCache, DirectoryService, DirectoryServiceImpl, MemoryCacheStore,
    RetrievalOrchestrator,
};
use std::sync::Arc;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn directory(store: Arc<MemoryCacheStore>, server: &MockServer) -> DirectoryServiceImpl {
    DirectoryServiceImpl::new(RetrievalOrchestrator::new(
        DatasetCache::with_default_key(store),
        Arc::new(client_for(server)),
    ))
}

#[tokio::test]
async fn test_second_read_is_served_from_cache() {
    let server = registry_serving(
        listing(vec![
            object("1", "Министерство финансов \\ Комитет казначейства", "Действующее"),
            object("2", "Министерство юстиции", "Действующее"),
            object("3", "Акимат \\  \\ Отдел", "Ликвидировано"),
        ]),
        1,
    )
    .await;

    let store = Arc::new(MemoryCacheStore::new());
    let service = directory(store.clone(), &server);

    let first = service.get_page("", 1).await.unwrap();
    assert_eq!(first.page.len(), 3);
    assert_eq!(first.page.total_pages(), 1);
    assert_eq!(first.page.items[2].name_parts, vec!["Акимат", "", "Отдел"]);

    let second = service.get_page("", 1).await.unwrap();
    assert_eq!(second.page.items, first.page.items);
    assert!(store.get_raw("organizations").await.unwrap().is_some());
}

#[tokio::test]
async fn test_search_pages_through_cached_dataset() {
    let objects = (0..25)
        .map(|i| object(&format!("{i:012}"), &format!("Школа №{i}"), "Действующее"))
        .chain(std::iter::once(object("999", "Больница", "Действующее")))
        .collect();
    let server = registry_serving(listing(objects), 1).await;
    let service = directory(Arc::new(MemoryCacheStore::new()), &server);

    let schools = service.get_page("школа", 3).await.unwrap();
    assert_eq!(schools.page.len(), 5);
    assert_eq!(schools.page.total_pages(), 3);
    assert_eq!(schools.search_query, "школа");

    let hospital = service.get_page("БОЛЬН", 1).await.unwrap();
    assert_eq!(hospital.page.len(), 1);
    assert_eq!(hospital.page.items[0].bin.as_deref(), Some("999"));
}

#[tokio::test]
async fn test_prefilled_cache_never_calls_registry() {
    let server = registry_serving(listing(vec![]), 0).await;
    let store = Arc::new(MemoryCacheStore::new());
    store
        .set_raw("organizations", r#"[{"bin":"42","nameParts":["Cached"]}]"#)
        .await
        .unwrap();

    let page = directory(store, &server).get_page("cach", 1).await.unwrap();
    assert_eq!(page.page.items[0].bin.as_deref(), Some("42"));
}

#[tokio::test]
async fn test_full_cache_still_serves_every_read() {
    let server = registry_serving(listing(vec![object("1", "Акимат", "Действующее")]), 2).await;
    let service = directory(Arc::new(MemoryCacheStore::with_max_value_bytes(16)), &server);

    for _ in 0..2 {
        let page = service.get_page("", 1).await.unwrap();
        assert_eq!(page.page.len(), 1);
    }
}

#[tokio::test]
async fn test_registry_outage_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = directory(Arc::new(MemoryCacheStore::new()), &server)
        .get_page("", 1)
        .await
        .unwrap_err();
    assert!(matches!(err, ReestrError::UpstreamUnavailable(_)));
}

#[tokio::test]
async fn test_record_without_name_fails_the_read() {
    let server = registry_serving(
        listing(vec![
            object("1", "Акимат", "Действующее"),
            serde_json::json!({ "flBin": "2" }),
        ]),
        1,
    )
    .await;

    let store = Arc::new(MemoryCacheStore::new());
    let err = directory(store.clone(), &server).get_page("", 1).await.unwrap_err();

    assert!(matches!(err, ReestrError::MalformedRecord(_)));
    assert!(store.is_empty());
}

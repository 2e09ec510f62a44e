//! Link service tests: creation, resolution, listing, and the owner-only
//! mutation rules.

use std::sync::Arc;

use tinylink::errors::TinylinkError;
use tinylink::services::LinkService;
use tinylink::storage::MemoryLinkStore;

fn service() -> LinkService {
    LinkService::new(Arc::new(MemoryLinkStore::new(6)))
}

#[tokio::test]
async fn test_create_then_resolve() {
    let service = service();

    let link = service
        .create_link("http://example.com", Some("u1"))
        .await
        .expect("creation should succeed");

    assert_eq!(link.code.len(), 6);
    assert!(link.code.chars().all(|c| c.is_ascii_alphanumeric()));

    let resolved = service
        .resolve(&link.code)
        .await
        .expect("resolution should succeed");
    assert_eq!(resolved.target, "http://example.com");
    assert_eq!(resolved.owner.as_deref(), Some("u1"));
}

#[tokio::test]
async fn test_create_rejects_empty_target() {
    let service = service();

    let err = service
        .create_link("", Some("u1"))
        .await
        .expect_err("empty target should be rejected");
    assert!(matches!(err, TinylinkError::Validation(_)));
}

#[tokio::test]
async fn test_resolve_unknown_code() {
    let service = service();

    let err = service
        .resolve("nosuch")
        .await
        .expect_err("unknown code should not resolve");
    assert!(matches!(err, TinylinkError::NotFound(_)));
}

#[tokio::test]
async fn test_links_for_anonymous_is_always_empty() {
    let service = service();

    service
        .create_link("http://example.com", Some("u1"))
        .await
        .expect("creation should succeed");
    service
        .create_link("http://example.org", None)
        .await
        .expect("creation should succeed");

    assert!(service.links_for(None).await.is_empty());
}

#[tokio::test]
async fn test_links_for_returns_only_own_links_in_code_order() {
    let service = service();

    for i in 0..5 {
        service
            .create_link(&format!("http://u1.example/{}", i), Some("u1"))
            .await
            .expect("creation should succeed");
    }
    service
        .create_link("http://u2.example", Some("u2"))
        .await
        .expect("creation should succeed");

    let mine = service.links_for(Some("u1")).await;
    assert_eq!(mine.len(), 5);
    assert!(mine.iter().all(|l| l.owner.as_deref() == Some("u1")));

    let codes: Vec<&str> = mine.iter().map(|l| l.code.as_str()).collect();
    let mut sorted = codes.clone();
    sorted.sort();
    assert_eq!(codes, sorted);
}

#[tokio::test]
async fn test_update_by_owner() {
    let service = service();

    let link = service
        .create_link("http://old.example", Some("u1"))
        .await
        .expect("creation should succeed");

    let updated = service
        .update_link(&link.code, "http://new.example", Some("u1"))
        .await
        .expect("owner update should succeed");
    assert_eq!(updated.target, "http://new.example");
}

#[tokio::test]
async fn test_update_by_stranger_leaves_link_unchanged() {
    let service = service();

    let link = service
        .create_link("http://old.example", Some("u1"))
        .await
        .expect("creation should succeed");

    for requester in [Some("u2"), None] {
        let err = service
            .update_link(&link.code, "http://new.example", requester)
            .await
            .expect_err("non-owner update should fail");
        assert!(matches!(err, TinylinkError::Authorization(_)));
    }

    let resolved = service.resolve(&link.code).await.expect("still resolvable");
    assert_eq!(resolved.target, "http://old.example");
}

#[tokio::test]
async fn test_update_rejects_empty_target() {
    let service = service();

    let link = service
        .create_link("http://old.example", Some("u1"))
        .await
        .expect("creation should succeed");

    let err = service
        .update_link(&link.code, "", Some("u1"))
        .await
        .expect_err("empty target should be rejected");
    assert!(matches!(err, TinylinkError::Validation(_)));
}

#[tokio::test]
async fn test_delete_by_stranger_then_owner() {
    let service = service();

    let link = service
        .create_link("http://example.com", Some("u1"))
        .await
        .expect("creation should succeed");

    let err = service
        .delete_link(&link.code, Some("u2"))
        .await
        .expect_err("stranger delete should fail");
    assert!(matches!(err, TinylinkError::Authorization(_)));
    assert!(service.resolve(&link.code).await.is_ok());

    service
        .delete_link(&link.code, Some("u1"))
        .await
        .expect("owner delete should succeed");

    let err = service
        .resolve(&link.code)
        .await
        .expect_err("deleted link should not resolve");
    assert!(matches!(err, TinylinkError::NotFound(_)));
}

#[tokio::test]
async fn test_ownerless_link_cannot_be_mutated() {
    let service = service();

    let link = service
        .create_link("http://example.com", None)
        .await
        .expect("creation should succeed");

    let err = service
        .delete_link(&link.code, Some("u1"))
        .await
        .expect_err("ownerless link should reject every requester");
    assert!(matches!(err, TinylinkError::Authorization(_)));
}

#[tokio::test]
async fn test_mutation_of_unknown_code_is_not_found() {
    let service = service();

    let err = service
        .update_link("nosuch", "http://example.com", Some("u1"))
        .await
        .expect_err("unknown code should fail");
    assert!(matches!(err, TinylinkError::NotFound(_)));

    let err = service
        .delete_link("nosuch", Some("u1"))
        .await
        .expect_err("unknown code should fail");
    assert!(matches!(err, TinylinkError::NotFound(_)));
}

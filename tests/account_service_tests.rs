//! Account service tests: registration rules and credential verification.

use std::sync::Arc;

use tinylink::errors::TinylinkError;
use tinylink::services::AccountService;
use tinylink::storage::{AccountStore, MemoryAccountStore};

fn service() -> (AccountService, Arc<MemoryAccountStore>) {
    let store = Arc::new(MemoryAccountStore::new(6));
    (AccountService::new(store.clone()), store)
}

#[tokio::test]
async fn test_register_then_verify_round_trip() {
    let (service, _store) = service();

    let registered = service
        .register("a@x.com", "pw1")
        .await
        .expect("registration should succeed");
    let verified = service
        .verify_credentials("a@x.com", "pw1")
        .await
        .expect("verification should succeed");

    assert_eq!(registered.id, verified.id);
    assert_eq!(verified.email, "a@x.com");
}

#[tokio::test]
async fn test_register_stores_hash_not_password() {
    let (service, store) = service();

    let account = service
        .register("a@x.com", "pw1")
        .await
        .expect("registration should succeed");

    let stored = store.get(&account.id).await.expect("account stored");
    assert_ne!(stored.password_hash, "pw1");
    assert!(stored.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn test_register_rejects_empty_fields() {
    let (service, store) = service();

    let err = service
        .register("a@x.com", "")
        .await
        .expect_err("empty password should be rejected");
    assert!(matches!(err, TinylinkError::Validation(_)));

    let err = service
        .register("", "pw1")
        .await
        .expect_err("empty email should be rejected");
    assert!(matches!(err, TinylinkError::Validation(_)));

    assert_eq!(store.count().await, 0);
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let (service, store) = service();

    service
        .register("a@x.com", "pw1")
        .await
        .expect("first registration should succeed");

    let err = service
        .register("a@x.com", "pw2")
        .await
        .expect_err("duplicate registration should fail");
    assert!(matches!(err, TinylinkError::Conflict(_)));
    assert_eq!(store.count().await, 1);
}

#[tokio::test]
async fn test_verify_rejects_bad_credentials() {
    let (service, _store) = service();

    service
        .register("a@x.com", "pw1")
        .await
        .expect("registration should succeed");

    let err = service
        .verify_credentials("a@x.com", "wrong")
        .await
        .expect_err("wrong password should fail");
    assert!(matches!(err, TinylinkError::Auth(_)));

    let err = service
        .verify_credentials("nobody@x.com", "pw1")
        .await
        .expect_err("unknown email should fail");
    assert!(matches!(err, TinylinkError::Auth(_)));
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::get_config;
use crate::errors::Result;

pub mod memory;
pub mod models;

pub use memory::{MemoryAccountStore, MemoryLinkStore};
pub use models::{Account, Link};

/// The account directory. Implementations must enforce email uniqueness
/// and id allocation atomically inside `insert`.
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn get(&self, id: &str) -> Option<Account>;
    async fn find_by_email(&self, email: &str) -> Option<Account>;

    /// Allocate a fresh id and insert a new account. Fails with a conflict
    /// error when the email is already registered.
    async fn insert(&self, email: String, password_hash: String) -> Result<Account>;

    async fn count(&self) -> usize;
}

/// The link directory. Implementations must allocate the short code
/// atomically inside `insert`.
#[async_trait]
pub trait LinkStore: Send + Sync {
    async fn get(&self, code: &str) -> Option<Link>;

    /// Allocate a fresh short code and insert a new link.
    async fn insert(&self, target: String, owner: Option<String>) -> Result<Link>;

    async fn update(&self, code: &str, target: String) -> Result<()>;
    async fn remove(&self, code: &str) -> Result<()>;

    /// Links owned by the given account. `None` owns nothing.
    async fn owned_by(&self, owner: Option<&str>) -> Vec<Link>;

    async fn count(&self) -> usize;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create() -> Result<(Arc<dyn AccountStore>, Arc<dyn LinkStore>)> {
        let config = get_config();
        let code_length = config.features.random_code_length;

        let accounts = Arc::new(MemoryAccountStore::new(code_length));
        let links = Arc::new(MemoryLinkStore::new(code_length));

        if config.features.seed_demo_data {
            memory::seed_demo_data(accounts.as_ref(), links.as_ref()).await?;
        }

        Ok((
            accounts as Arc<dyn AccountStore>,
            links as Arc<dyn LinkStore>,
        ))
    }
}

//! In-memory directory backends.
//!
//! Both directories live for the lifetime of the process and reset on
//! restart. Mutation runs lookup-then-write inside a single write lock so
//! concurrent registrations cannot duplicate an email and concurrent
//! creations cannot allocate the same code.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tracing::info;

use crate::errors::{Result, TinylinkError};
use crate::storage::models::{Account, Link};
use crate::storage::{AccountStore, LinkStore};
use crate::utils::allocate_unique_code;
use crate::utils::password::hash_password;

pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
    id_length: usize,
}

impl MemoryAccountStore {
    pub fn new(id_length: usize) -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            id_length,
        }
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn get(&self, id: &str) -> Option<Account> {
        self.accounts.read().get(id).cloned()
    }

    async fn find_by_email(&self, email: &str) -> Option<Account> {
        self.accounts
            .read()
            .values()
            .find(|account| account.email == email)
            .cloned()
    }

    async fn insert(&self, email: String, password_hash: String) -> Result<Account> {
        // Uniqueness check, id allocation and insert share one write lock.
        let mut accounts = self.accounts.write();

        if accounts.values().any(|account| account.email == email) {
            return Err(TinylinkError::conflict(format!(
                "an account with email '{}' already exists",
                email
            )));
        }

        let id = allocate_unique_code(&accounts, self.id_length);
        let account = Account {
            id: id.clone(),
            email,
            password_hash,
        };
        accounts.insert(id, account.clone());

        Ok(account)
    }

    async fn count(&self) -> usize {
        self.accounts.read().len()
    }
}

pub struct MemoryLinkStore {
    links: RwLock<HashMap<String, Link>>,
    code_length: usize,
}

impl MemoryLinkStore {
    pub fn new(code_length: usize) -> Self {
        Self {
            links: RwLock::new(HashMap::new()),
            code_length,
        }
    }

    /// Insert a link under a caller-chosen code. Used for seeding and
    /// tests; the HTTP surface only ever allocates codes.
    pub fn insert_with_code(&self, code: &str, target: &str, owner: Option<&str>) -> Result<Link> {
        let mut links = self.links.write();

        if links.contains_key(code) {
            return Err(TinylinkError::conflict(format!(
                "code '{}' already exists",
                code
            )));
        }

        let link = Link {
            code: code.to_string(),
            target: target.to_string(),
            owner: owner.map(String::from),
            created_at: Utc::now(),
        };
        links.insert(code.to_string(), link.clone());

        Ok(link)
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn get(&self, code: &str) -> Option<Link> {
        self.links.read().get(code).cloned()
    }

    async fn insert(&self, target: String, owner: Option<String>) -> Result<Link> {
        // Code allocation and insert share one write lock.
        let mut links = self.links.write();

        let code = allocate_unique_code(&links, self.code_length);
        let link = Link {
            code: code.clone(),
            target,
            owner,
            created_at: Utc::now(),
        };
        links.insert(code, link.clone());

        Ok(link)
    }

    async fn update(&self, code: &str, target: String) -> Result<()> {
        match self.links.write().get_mut(code) {
            Some(link) => {
                link.target = target;
                Ok(())
            }
            None => Err(TinylinkError::not_found(format!(
                "no link with code '{}'",
                code
            ))),
        }
    }

    async fn remove(&self, code: &str) -> Result<()> {
        match self.links.write().remove(code) {
            Some(_) => Ok(()),
            None => Err(TinylinkError::not_found(format!(
                "no link with code '{}'",
                code
            ))),
        }
    }

    async fn owned_by(&self, owner: Option<&str>) -> Vec<Link> {
        let Some(owner) = owner else {
            return Vec::new();
        };

        self.links
            .read()
            .values()
            .filter(|link| link.owner.as_deref() == Some(owner))
            .cloned()
            .collect()
    }

    async fn count(&self) -> usize {
        self.links.read().len()
    }
}

/// Seed the example data the server starts with: two demo accounts and
/// three demo links.
pub async fn seed_demo_data(accounts: &MemoryAccountStore, links: &MemoryLinkStore) -> Result<()> {
    let first = accounts
        .insert(
            "user@example.com".to_string(),
            hash_password("purple-monkey-dinosaur")?,
        )
        .await?;
    let second = accounts
        .insert(
            "user2@example.com".to_string(),
            hash_password("dishwasher-funk")?,
        )
        .await?;

    links.insert_with_code("b2xVn2", "http://www.lighthouselabs.ca", Some(&first.id))?;
    links.insert_with_code("9sm5xK", "http://www.google.com", Some(&second.id))?;
    links.insert_with_code("b6UTxQ", "https://www.tsn.ca", Some(&first.id))?;

    info!(
        "Seeded demo data: {} accounts, {} links",
        accounts.count().await,
        links.count().await
    );

    Ok(())
}

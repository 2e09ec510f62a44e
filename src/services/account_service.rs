//! Account management service
//!
//! Registration and credential verification on top of the account
//! directory. Hashing lives here so the store never sees a raw password.

use std::sync::Arc;

use tracing::info;

use crate::errors::{Result, TinylinkError};
use crate::storage::{Account, AccountStore};
use crate::utils::password::{hash_password, verify_password};

#[derive(Clone)]
pub struct AccountService {
    accounts: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }

    pub async fn get(&self, id: &str) -> Option<Account> {
        self.accounts.get(id).await
    }

    /// Register a new account. Empty email or password is rejected; the
    /// store enforces email uniqueness. The id of the stored account is
    /// returned for session persistence.
    pub async fn register(&self, email: &str, raw_password: &str) -> Result<Account> {
        if email.is_empty() || raw_password.is_empty() {
            return Err(TinylinkError::validation(
                "email and password must not be empty",
            ));
        }

        let password_hash = hash_password(raw_password)?;
        let account = self
            .accounts
            .insert(email.to_string(), password_hash)
            .await?;

        info!(
            "AccountService: registered account '{}' for '{}'",
            account.id, account.email
        );

        Ok(account)
    }

    /// Verify an email/password pair. Unknown email and wrong password
    /// fail identically so the response leaks nothing about which it was.
    pub async fn verify_credentials(&self, email: &str, raw_password: &str) -> Result<Account> {
        let account = match self.accounts.find_by_email(email).await {
            Some(account) => account,
            None => return Err(TinylinkError::auth("invalid email or password")),
        };

        if !verify_password(raw_password, &account.password_hash)? {
            return Err(TinylinkError::auth("invalid email or password"));
        }

        Ok(account)
    }
}

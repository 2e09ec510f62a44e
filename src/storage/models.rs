use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account. Created on registration, never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub password_hash: String,
}

/// A stored short link. `owner` is `None` for links without an owning
/// account; such links can never be edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub code: String,
    pub target: String,
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Whether `requester` may edit or delete this link. Anonymous
    /// requesters and ownerless links both fail the check.
    pub fn is_owned_by(&self, requester: Option<&str>) -> bool {
        match (self.owner.as_deref(), requester) {
            (Some(owner), Some(requester)) => owner == requester,
            _ => false,
        }
    }
}

//! Link management service
//!
//! Business rules for link operations shared by the page handlers and the
//! redirect handler: creation, resolution, listing, and owner-only
//! mutation. Authorization failures are explicit errors, never silent
//! no-ops, so every call site must branch on the result.

use std::sync::Arc;

use tracing::info;

use crate::errors::{Result, TinylinkError};
use crate::storage::{Link, LinkStore};

#[derive(Clone)]
pub struct LinkService {
    links: Arc<dyn LinkStore>,
}

impl LinkService {
    pub fn new(links: Arc<dyn LinkStore>) -> Self {
        Self { links }
    }

    /// Create a link owned by `owner`. The target is stored as supplied,
    /// without well-formedness validation, but an empty target is rejected.
    pub async fn create_link(&self, target: &str, owner: Option<&str>) -> Result<Link> {
        if target.is_empty() {
            return Err(TinylinkError::validation("long URL must not be empty"));
        }

        let link = self
            .links
            .insert(target.to_string(), owner.map(String::from))
            .await?;

        info!(
            "LinkService: created link '{}' -> '{}'",
            link.code, link.target
        );

        Ok(link)
    }

    pub async fn resolve(&self, code: &str) -> Result<Link> {
        self.links
            .get(code)
            .await
            .ok_or_else(|| TinylinkError::not_found(format!("no link with code '{}'", code)))
    }

    /// Links owned by `owner`, in stable code order. Anonymous callers own
    /// nothing.
    pub async fn links_for(&self, owner: Option<&str>) -> Vec<Link> {
        let mut links = self.links.owned_by(owner).await;
        links.sort_by(|a, b| a.code.cmp(&b.code));
        links
    }

    pub async fn update_link(
        &self,
        code: &str,
        target: &str,
        requester: Option<&str>,
    ) -> Result<Link> {
        if target.is_empty() {
            return Err(TinylinkError::validation("long URL must not be empty"));
        }

        self.authorize(code, requester).await?;
        self.links.update(code, target.to_string()).await?;

        info!("LinkService: updated link '{}' -> '{}'", code, target);

        self.resolve(code).await
    }

    pub async fn delete_link(&self, code: &str, requester: Option<&str>) -> Result<()> {
        self.authorize(code, requester).await?;
        self.links.remove(code).await?;

        info!("LinkService: deleted link '{}'", code);

        Ok(())
    }

    /// Resolve the link and check that `requester` owns it.
    async fn authorize(&self, code: &str, requester: Option<&str>) -> Result<Link> {
        let link = self.resolve(code).await?;

        if !link.is_owned_by(requester) {
            return Err(TinylinkError::authorization(format!(
                "link '{}' does not belong to the requester",
                code
            )));
        }

        Ok(link)
    }
}

//! Page handlers for the link list, detail, creation and mutation flows.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::pages;
use crate::api::session::{SessionContext, current_account};
use crate::errors::{Result, TinylinkError};
use crate::services::{AccountService, LinkService};

#[derive(Debug, Deserialize)]
pub struct LongUrlForm {
    #[serde(rename = "longURL", default)]
    pub long_url: String,
}

fn found(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header(("Location", location))
        .finish()
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Content-Type", "text/html; charset=utf-8"))
        .body(body)
}

pub struct LinkPages;

impl LinkPages {
    /// GET /. The index page is the URL list.
    pub async fn home() -> HttpResponse {
        found("/urls")
    }

    /// GET /urls. The caller's links; empty when anonymous.
    pub async fn index(
        session: SessionContext,
        accounts: web::Data<AccountService>,
        links: web::Data<LinkService>,
    ) -> Result<HttpResponse> {
        let account = current_account(&session, &accounts).await?;
        let owned = links
            .links_for(account.as_ref().map(|a| a.id.as_str()))
            .await;

        Ok(html(pages::urls_index_page(account.as_ref(), &owned)))
    }

    /// GET /urls/new. Creation form; anonymous callers go to /login.
    pub async fn new_form(
        session: SessionContext,
        accounts: web::Data<AccountService>,
    ) -> Result<HttpResponse> {
        let account = current_account(&session, &accounts).await?;

        match account {
            Some(account) => Ok(html(pages::urls_new_page(Some(&account)))),
            None => Ok(found("/login")),
        }
    }

    /// POST /urls. Create a link owned by the caller.
    pub async fn create(
        session: SessionContext,
        accounts: web::Data<AccountService>,
        links: web::Data<LinkService>,
        form: web::Form<LongUrlForm>,
    ) -> Result<HttpResponse> {
        let account = current_account(&session, &accounts)
            .await?
            .ok_or_else(|| TinylinkError::auth("login required to create links"))?;

        let link = links.create_link(&form.long_url, Some(&account.id)).await?;

        Ok(found(&format!("/urls/{}", link.code)))
    }

    /// GET /urls/{code}. Detail page with the edit form when owned.
    pub async fn show(
        session: SessionContext,
        accounts: web::Data<AccountService>,
        links: web::Data<LinkService>,
        path: web::Path<String>,
    ) -> Result<HttpResponse> {
        let code = path.into_inner();
        let account = current_account(&session, &accounts).await?;

        let link = match links.resolve(&code).await {
            Ok(link) => link,
            // Unknown codes go back to the list rather than a 404 page.
            Err(TinylinkError::NotFound(_)) => return Ok(found("/urls")),
            Err(e) => return Err(e),
        };

        let owned = link.is_owned_by(account.as_ref().map(|a| a.id.as_str()));

        Ok(html(pages::urls_show_page(account.as_ref(), &link, owned)))
    }

    /// PUT /urls/{code} and its POST override. Owner-only target update.
    pub async fn update(
        session: SessionContext,
        accounts: web::Data<AccountService>,
        links: web::Data<LinkService>,
        path: web::Path<String>,
        form: web::Form<LongUrlForm>,
    ) -> Result<HttpResponse> {
        let code = path.into_inner();
        let account = current_account(&session, &accounts).await?;

        links
            .update_link(
                &code,
                &form.long_url,
                account.as_ref().map(|a| a.id.as_str()),
            )
            .await?;

        Ok(found("/urls"))
    }

    /// DELETE /urls/{code}/delete and its POST override. Owner-only.
    pub async fn delete(
        session: SessionContext,
        accounts: web::Data<AccountService>,
        links: web::Data<LinkService>,
        path: web::Path<String>,
    ) -> Result<HttpResponse> {
        let code = path.into_inner();
        let account = current_account(&session, &accounts).await?;

        links
            .delete_link(&code, account.as_ref().map(|a| a.id.as_str()))
            .await?;

        Ok(found("/urls"))
    }
}


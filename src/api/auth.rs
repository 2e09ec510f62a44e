//! Login, logout and registration handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::pages;
use crate::api::session::{SessionContext, current_account};
use crate::errors::Result;
use crate::services::AccountService;

#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
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

pub struct AuthPages;

impl AuthPages {
    /// GET /login. Signed-in callers go straight back to their list.
    pub async fn login_form(
        session: SessionContext,
        accounts: web::Data<AccountService>,
    ) -> Result<HttpResponse> {
        if current_account(&session, &accounts).await?.is_some() {
            return Ok(found("/urls"));
        }

        Ok(html(pages::login_page()))
    }

    /// POST /login. Verify credentials and start a session.
    pub async fn login(
        session: SessionContext,
        accounts: web::Data<AccountService>,
        form: web::Form<CredentialsForm>,
    ) -> Result<HttpResponse> {
        let account = accounts
            .verify_credentials(&form.email, &form.password)
            .await?;

        session.persist_account(&account.id)?;

        Ok(found("/urls"))
    }

    /// POST /logout. Drop the session.
    pub async fn logout(session: SessionContext) -> HttpResponse {
        session.clear();
        found("/urls")
    }

    /// GET /register
    pub async fn register_form(
        session: SessionContext,
        accounts: web::Data<AccountService>,
    ) -> Result<HttpResponse> {
        if current_account(&session, &accounts).await?.is_some() {
            return Ok(found("/urls"));
        }

        Ok(html(pages::register_page()))
    }

    /// POST /register. Create the account and sign it in.
    pub async fn register(
        session: SessionContext,
        accounts: web::Data<AccountService>,
        form: web::Form<CredentialsForm>,
    ) -> Result<HttpResponse> {
        let account = accounts.register(&form.email, &form.password).await?;

        session.persist_account(&account.id)?;

        Ok(found("/urls"))
    }
}


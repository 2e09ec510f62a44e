use actix_web::web;

pub mod auth;
pub mod health;
pub mod links;
pub mod pages;
pub mod redirect;
pub mod session;

pub use auth::AuthPages;
pub use health::{AppStartTime, HealthService, health_routes};
pub use links::LinkPages;
pub use redirect::{RedirectService, redirect_routes};
pub use session::{SessionContext, current_account, session_key, session_middleware};

/// All server-rendered page routes: the link pages plus the auth flows.
///
/// The scope has an empty prefix, so it must be registered after the
/// prefixed scopes (`/health`, `/u`); anything it does not match falls to
/// its 404. `/urls/new` must stay registered ahead of `/urls/{code}`.
pub fn page_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(LinkPages::home))
        .route("/urls", web::get().to(LinkPages::index))
        .route("/urls", web::post().to(LinkPages::create))
        .route("/urls/new", web::get().to(LinkPages::new_form))
        .route("/urls/{code}", web::get().to(LinkPages::show))
        .route("/urls/{code}", web::put().to(LinkPages::update))
        .route("/urls/{code}", web::post().to(LinkPages::update))
        .route("/urls/{code}/delete", web::delete().to(LinkPages::delete))
        .route("/urls/{code}/delete", web::post().to(LinkPages::delete))
        .route("/login", web::get().to(AuthPages::login_form))
        .route("/login", web::post().to(AuthPages::login))
        .route("/logout", web::post().to(AuthPages::logout))
        .route("/register", web::get().to(AuthPages::register_form))
        .route("/register", web::post().to(AuthPages::register))
}

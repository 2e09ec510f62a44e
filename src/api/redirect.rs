//! The short-link hop: /u/{code} → stored target.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::debug;

use crate::services::LinkService;

pub struct RedirectService;

impl RedirectService {
    /// GET /u/{code}. Known codes get a 307 to the stored target; unknown
    /// codes go back to the list page.
    pub async fn handle_redirect(
        path: web::Path<String>,
        links: web::Data<LinkService>,
    ) -> impl Responder {
        let code = path.into_inner();

        match links.resolve(&code).await {
            Ok(link) => HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
                .insert_header(("Location", link.target))
                .finish(),
            Err(_) => {
                debug!("Redirect link not found: {}", code);
                HttpResponse::Found()
                    .insert_header(("Location", "/urls"))
                    .finish()
            }
        }
    }
}

/// Redirect 路由配置
pub fn redirect_routes() -> actix_web::Scope {
    web::scope("/u").route("/{code}", web::get().to(RedirectService::handle_redirect))
}

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TinylinkError {
    Validation(String),
    Conflict(String),
    Auth(String),
    Authorization(String),
    NotFound(String),
    PasswordHash(String),
    Session(String),
}

impl TinylinkError {
    pub fn code(&self) -> &'static str {
        match self {
            TinylinkError::Validation(_) => "E001",
            TinylinkError::Conflict(_) => "E002",
            TinylinkError::Auth(_) => "E003",
            TinylinkError::Authorization(_) => "E004",
            TinylinkError::NotFound(_) => "E005",
            TinylinkError::PasswordHash(_) => "E006",
            TinylinkError::Session(_) => "E007",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            TinylinkError::Validation(_) => "Validation Error",
            TinylinkError::Conflict(_) => "Conflict Error",
            TinylinkError::Auth(_) => "Authentication Error",
            TinylinkError::Authorization(_) => "Authorization Error",
            TinylinkError::NotFound(_) => "Resource Not Found",
            TinylinkError::PasswordHash(_) => "Password Hash Error",
            TinylinkError::Session(_) => "Session Error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            TinylinkError::Validation(msg) => msg,
            TinylinkError::Conflict(msg) => msg,
            TinylinkError::Auth(msg) => msg,
            TinylinkError::Authorization(msg) => msg,
            TinylinkError::NotFound(msg) => msg,
            TinylinkError::PasswordHash(msg) => msg,
            TinylinkError::Session(msg) => msg,
        }
    }
}

impl fmt::Display for TinylinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for TinylinkError {}

// 便捷的构造函数
impl TinylinkError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        TinylinkError::Validation(msg.into())
    }

    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        TinylinkError::Conflict(msg.into())
    }

    pub fn auth<T: Into<String>>(msg: T) -> Self {
        TinylinkError::Auth(msg.into())
    }

    pub fn authorization<T: Into<String>>(msg: T) -> Self {
        TinylinkError::Authorization(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        TinylinkError::NotFound(msg.into())
    }

    pub fn password_hash<T: Into<String>>(msg: T) -> Self {
        TinylinkError::PasswordHash(msg.into())
    }

    pub fn session<T: Into<String>>(msg: T) -> Self {
        TinylinkError::Session(msg.into())
    }
}

/// HTTP mapping. Keeps the enum itself transport-agnostic; handlers return
/// `Result<_, TinylinkError>` and always halt on the error path.
impl ResponseError for TinylinkError {
    fn status_code(&self) -> StatusCode {
        match self {
            TinylinkError::Validation(_) | TinylinkError::Conflict(_) => StatusCode::BAD_REQUEST,
            TinylinkError::Auth(_) | TinylinkError::Authorization(_) => StatusCode::FORBIDDEN,
            TinylinkError::NotFound(_) => StatusCode::NOT_FOUND,
            TinylinkError::PasswordHash(_) | TinylinkError::Session(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Internal details stay in the log, not in the page.
        let message = match self {
            TinylinkError::PasswordHash(_) | TinylinkError::Session(_) => {
                tracing::error!("internal error: {}", self);
                "Internal server error"
            }
            _ => self.message(),
        };

        HttpResponse::build(self.status_code())
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .body(crate::api::pages::error_page(
                self.status_code().as_u16(),
                self.error_type(),
                message,
            ))
    }
}

impl From<crate::utils::password::PasswordError> for TinylinkError {
    fn from(err: crate::utils::password::PasswordError) -> Self {
        TinylinkError::PasswordHash(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TinylinkError>;

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

/// Application error kinds. Store failures map onto conflict/not-found,
/// form failures onto unprocessable-entity; none are fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    EmailExists,
    NotFound,
    Validation(Vec<String>),
    Session(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EmailExists => write!(f, "Email already exists"),
            AppError::NotFound => write!(f, "User not found"),
            AppError::Validation(errors) => write!(f, "Validation failed: {}", errors.join("; ")),
            AppError::Session(e) => write!(f, "Session error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::EmailExists => {
                HttpResponse::Conflict().json(json!({ "error": self.to_string() }))
            }
            AppError::NotFound => {
                HttpResponse::NotFound().json(json!({ "error": self.to_string() }))
            }
            AppError::Validation(errors) => {
                HttpResponse::UnprocessableEntity().json(json!({ "errors": errors }))
            }
            AppError::Session(_) => {
                HttpResponse::Unauthorized().json(json!({ "error": "Not authenticated" }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn error_kinds_map_to_expected_status_codes() {
        assert_eq!(AppError::EmailExists.error_response().status(), StatusCode::CONFLICT);
        assert_eq!(AppError::NotFound.error_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Validation(vec!["Email is required".into()]).error_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Session("missing".into()).error_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}

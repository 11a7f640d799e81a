//! Mapping of domain errors to HTTP responses

use actix_web::HttpResponse;
use validator::ValidationErrors;

use ch_core::errors::DomainError;
use ch_shared::types::ErrorResponse;

/// Convert a domain error into the corresponding HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ErrorResponse::new("validation_error", message))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "not_found",
            format!("{} not found", resource),
        )),
        DomainError::Conflict { resource } => HttpResponse::Conflict().json(ErrorResponse::new(
            "conflict",
            format!("{} already exists", resource),
        )),
        DomainError::PreconditionFailed { resource } => {
            HttpResponse::BadRequest().json(ErrorResponse::new(
                "precondition_failed",
                format!("{} not available", resource),
            ))
        }
        DomainError::Unauthorized | DomainError::Token(_) => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("unauthorized", "Unauthorized"))
        }
        DomainError::Internal { message } => {
            log::error!("internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

/// Convert payload validation failures into a 400 response
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let mut details = std::collections::HashMap::new();
    details.insert(
        "validation_errors".to_string(),
        serde_json::json!(errors),
    );

    HttpResponse::BadRequest().json(
        ErrorResponse::new("validation_error", "Invalid request data").with_details(details),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use ch_core::errors::TokenError;

    #[test]
    fn test_precondition_failed_maps_to_400() {
        let response = handle_domain_error(DomainError::PreconditionFailed {
            resource: "product p-404".to_string(),
        });
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_token_errors_map_to_401() {
        for error in [
            TokenError::Expired,
            TokenError::Malformed,
            TokenError::BadSignature,
        ] {
            let response = handle_domain_error(DomainError::Token(error));
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let response = handle_domain_error(DomainError::Conflict {
            resource: "user email a@b.c".to_string(),
        });
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = handle_domain_error(DomainError::NotFound {
            resource: "order o-1".to_string(),
        });
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

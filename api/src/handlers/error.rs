//! Domain error to HTTP response mapping
//!
//! Single place where the error taxonomy meets HTTP status codes.
//! Internal failure details are logged, never sent to clients.

use actix_web::HttpResponse;

use eq_core::errors::{AuthError, DomainError, TokenError};
use eq_shared::types::response::error_codes;
use eq_shared::ErrorResponse;

/// Convert a domain error into the matching HTTP response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => HttpResponse::BadRequest().json(
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone()),
        ),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            error_codes::NOT_FOUND,
            format!("{} not found", capitalize(resource)),
        )),
        DomainError::EquipmentUnavailable => HttpResponse::Conflict().json(ErrorResponse::new(
            error_codes::CONFLICT,
            "Equipment is not available for rent",
        )),
        DomainError::InsufficientDeposit {
            required,
            available,
        } => HttpResponse::PaymentRequired().json(
            ErrorResponse::new(
                error_codes::PAYMENT_REQUIRED,
                "Insufficient deposit amount",
            )
            .add_detail("required", required)
            .add_detail("available", available),
        ),
        DomainError::Unauthorized => HttpResponse::Unauthorized().json(ErrorResponse::new(
            error_codes::UNAUTHORIZED,
            "Authentication required",
        )),
        DomainError::Auth(auth_error) => auth_error_response(auth_error),
        DomainError::Token(token_error) => token_error_response(token_error),
        DomainError::Database { message } => {
            log::error!("Database error: {}", message);
            internal_error_response()
        }
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            internal_error_response()
        }
    }
}

fn auth_error_response(error: &AuthError) -> HttpResponse {
    match error {
        AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(ErrorResponse::new(
            error_codes::UNAUTHORIZED,
            "Invalid email or password",
        )),
        AuthError::EmailAlreadyRegistered => HttpResponse::Conflict().json(ErrorResponse::new(
            error_codes::CONFLICT,
            "Email is already registered",
        )),
        AuthError::PasswordHashFailed => {
            log::error!("Password hashing failed");
            internal_error_response()
        }
    }
}

fn token_error_response(error: &TokenError) -> HttpResponse {
    let code = match error {
        TokenError::TokenExpired => error_codes::TOKEN_EXPIRED,
        _ => error_codes::TOKEN_INVALID,
    };
    HttpResponse::Unauthorized().json(ErrorResponse::new(code, error.to_string()))
}

/// Convert request body validation failures into a 400 response
///
/// Collects per-field messages into the error details map.
pub fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    let mut response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request body");
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        response = response.add_detail(field.to_string(), messages);
    }
    HttpResponse::BadRequest().json(response)
}

fn internal_error_response() -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse::new(
        error_codes::INTERNAL_ERROR,
        "An internal error occurred",
    ))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use rust_decimal_macros::dec;

    #[test]
    fn not_found_maps_to_404() {
        let response = domain_error_response(&DomainError::not_found("equipment"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unavailable_equipment_maps_to_409() {
        let response = domain_error_response(&DomainError::EquipmentUnavailable);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn insufficient_deposit_maps_to_402() {
        let response = domain_error_response(&DomainError::InsufficientDeposit {
            required: dec!(30),
            available: dec!(10),
        });
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn invalid_credentials_map_to_401() {
        let response = domain_error_response(&DomainError::Auth(AuthError::InvalidCredentials));
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn duplicate_email_maps_to_409() {
        let response =
            domain_error_response(&DomainError::Auth(AuthError::EmailAlreadyRegistered));
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn database_errors_hide_details() {
        let response = domain_error_response(&DomainError::database("connection reset"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn field_errors_map_to_400() {
        use validator::Validate;

        #[derive(Validate)]
        struct Body {
            #[validate(email)]
            email: String,
        }

        let body = Body {
            email: "nope".to_string(),
        };
        let errors = body.validate().unwrap_err();
        let response = validation_error_response(&errors);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn expired_token_maps_to_401() {
        let response = domain_error_response(&DomainError::Token(TokenError::TokenExpired));
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

//! Unit tests for registration, login, and top-up

use std::sync::Arc;

use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::{InMemoryStore, UserRepository};
use crate::services::auth::AuthService;
use crate::services::token::{TokenService, TokenServiceConfig};

use super::mocks::RecordingMailer;

fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenServiceConfig {
        secret: "unit-test-secret".to_string(),
        access_token_expiry: 3600,
        issuer: "equiprent".to_string(),
    }))
}

fn service() -> (
    AuthService<InMemoryStore, RecordingMailer>,
    Arc<InMemoryStore>,
    Arc<RecordingMailer>,
) {
    let store = Arc::new(InMemoryStore::new());
    let mailer = Arc::new(RecordingMailer::new());
    let service = AuthService::new(store.clone(), mailer.clone(), token_service());
    (service, store, mailer)
}

#[tokio::test]
async fn register_creates_user_and_sends_welcome_mail() {
    let (service, store, mailer) = service();

    let user = service.register("renter@example.com", "hunter2hunter2").await.unwrap();
    assert_eq!(user.email, "renter@example.com");
    assert_eq!(user.deposit, dec!(0));
    // Credential is stored hashed, never verbatim
    assert_ne!(user.password_hash, "hunter2hunter2");

    let stored = store.find_by_email("renter@example.com").await.unwrap();
    assert!(stored.is_some());

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "renter@example.com");
    assert_eq!(sent[0].subject, "Registration Successful");
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let (service, _store, _mailer) = service();

    service.register("renter@example.com", "hunter2hunter2").await.unwrap();
    let err = service
        .register("renter@example.com", "other-password")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::EmailAlreadyRegistered)
    ));
}

#[tokio::test]
async fn register_surfaces_mail_failure() {
    let (service, store, mailer) = service();
    mailer.fail_sends();

    let err = service
        .register("renter@example.com", "hunter2hunter2")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Internal { .. }));

    // The user row was already created before the mail step failed.
    let stored = store.find_by_email("renter@example.com").await.unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn login_issues_verifiable_token() {
    let (service, _store, _mailer) = service();
    let user = service.register("renter@example.com", "hunter2hunter2").await.unwrap();

    let token = service.login("renter@example.com", "hunter2hunter2").await.unwrap();
    assert_eq!(token.token_type, "Bearer");

    let claims = token_service().verify_token(&token.access_token).unwrap();
    assert_eq!(claims.user_id().unwrap(), user.id);
    assert_eq!(claims.email, "renter@example.com");
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let (service, _store, _mailer) = service();
    service.register("renter@example.com", "hunter2hunter2").await.unwrap();

    let err = service
        .login("renter@example.com", "wrong-password")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn login_with_unknown_email_fails_identically() {
    let (service, _store, _mailer) = service();

    let err = service
        .login("nobody@example.com", "whatever-pass")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn top_up_credits_balance_and_sends_confirmation() {
    let (service, _store, mailer) = service();
    let user = service.register("renter@example.com", "hunter2hunter2").await.unwrap();

    let updated = service.top_up(user.id, dec!(100)).await.unwrap();
    assert_eq!(updated.deposit, dec!(100));

    let sent = mailer.sent.lock().unwrap();
    // welcome + top-up confirmation
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].subject, "Top-Up Successful");
    assert!(sent[1].body.contains("$100"));
}

#[tokio::test]
async fn top_up_rejects_non_positive_amounts() {
    let (service, _store, _mailer) = service();
    let user = service.register("renter@example.com", "hunter2hunter2").await.unwrap();

    let err = service.top_up(user.id, dec!(0)).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));

    let err = service.top_up(user.id, dec!(-5)).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn top_up_for_unknown_user_is_not_found() {
    let (service, _store, _mailer) = service();

    let err = service.top_up(Uuid::new_v4(), dec!(50)).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn top_up_succeeds_even_when_confirmation_mail_fails() {
    let (service, store, mailer) = service();
    let user = service.register("renter@example.com", "hunter2hunter2").await.unwrap();

    mailer.fail_sends();
    let updated = service.top_up(user.id, dec!(40)).await.unwrap();
    assert_eq!(updated.deposit, dec!(40));

    // Balance committed despite the mail failure
    let stored = store.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored.deposit, dec!(40));
}

#[tokio::test]
async fn expired_token_is_rejected_up_front() {
    let expired = TokenService::new(TokenServiceConfig {
        secret: "unit-test-secret".to_string(),
        access_token_expiry: -3600,
        issuer: "equiprent".to_string(),
    });
    let user = crate::domain::entities::User::new(
        "renter@example.com".to_string(),
        "hash".to_string(),
    );
    let token = expired.issue_token(&user).unwrap();

    let err = token_service().verify_token(&token.access_token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
}

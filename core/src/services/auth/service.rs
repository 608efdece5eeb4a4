//! Registration, login, and top-up use cases

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::entities::{AuthToken, User};
use crate::errors::{AuthError, DomainError};
use crate::repositories::UserRepository;
use crate::services::notification::{mask_email, top_up_mail, welcome_mail, Mailer};
use crate::services::token::TokenService;

/// Authentication and account service
///
/// All collaborators are injected at construction; there is no ambient
/// global state.
pub struct AuthService<U, M>
where
    U: UserRepository,
    M: Mailer,
{
    users: Arc<U>,
    mailer: Arc<M>,
    tokens: Arc<TokenService>,
}

impl<U, M> AuthService<U, M>
where
    U: UserRepository,
    M: Mailer,
{
    /// Creates a new authentication service
    pub fn new(users: Arc<U>, mailer: Arc<M>, tokens: Arc<TokenService>) -> Self {
        Self {
            users,
            mailer,
            tokens,
        }
    }

    /// Registers a new user with a hashed credential and a zero deposit
    ///
    /// The welcome mail is part of the registration contract: a delivery
    /// failure fails the request even though the user row already exists.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, DomainError> {
        if self.users.exists_by_email(email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|_| AuthError::PasswordHashFailed)?;

        let user = self
            .users
            .create(User::new(email.to_string(), password_hash))
            .await?;

        info!(email = %mask_email(email), "user registered");

        let (subject, body) = welcome_mail();
        self.mailer
            .send(&user.email, subject, &body)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("failed to send registration mail: {}", e),
            })?;

        Ok(user)
    }

    /// Verifies credentials and issues a bearer token
    ///
    /// Unknown email and wrong password collapse into the same error so the
    /// response never reveals which one was off.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthToken, DomainError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let matches = bcrypt::verify(password, &user.password_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;
        if !matches {
            return Err(AuthError::InvalidCredentials.into());
        }

        info!(email = %mask_email(email), "login successful");
        self.tokens.issue_token(&user)
    }

    /// Credits the caller's deposit balance
    ///
    /// The confirmation mail is best-effort: once the credit has been
    /// persisted it is never reported as failed over a mail problem.
    pub async fn top_up(&self, user_id: Uuid, amount: Decimal) -> Result<User, DomainError> {
        if amount <= Decimal::ZERO {
            return Err(DomainError::validation(
                "deposit amount must be positive",
            ));
        }

        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))?;

        user.credit(amount);
        let user = self.users.update(user).await?;

        info!(email = %mask_email(&user.email), %amount, "top-up applied");

        let (subject, body) = top_up_mail(amount);
        if let Err(e) = self.mailer.send(&user.email, subject, &body).await {
            warn!(
                email = %mask_email(&user.email),
                error = %e,
                "top-up confirmation mail failed; balance already committed"
            );
        }

        Ok(user)
    }
}

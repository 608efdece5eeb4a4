//! User entity representing a registered account with a deposit balance.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// User entity representing a registered account
///
/// The deposit balance covers rental costs; it is credited by top-ups and
/// debited by rental creation, and never goes negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, used as the login key (unique)
    pub email: String,

    /// Bcrypt hash of the password; opaque to the domain and never serialized
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Monetary deposit balance usable to cover rental costs
    pub deposit: Decimal,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User with a zero deposit balance
    pub fn new(email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            deposit: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Credits the deposit balance by `amount`
    pub fn credit(&mut self, amount: Decimal) {
        self.deposit += amount;
        self.updated_at = Utc::now();
    }

    /// Debits the deposit balance by exactly `amount`
    ///
    /// Refuses to over-draw: the balance invariant (`deposit >= 0`) is
    /// enforced here rather than trusted to callers.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), DomainError> {
        if self.deposit < amount {
            return Err(DomainError::InsufficientDeposit {
                required: amount,
                available: self.deposit,
            });
        }
        self.deposit -= amount;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Checks whether the balance covers `cost`
    pub fn can_afford(&self, cost: Decimal) -> bool {
        self.deposit >= cost
    }
}

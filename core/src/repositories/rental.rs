//! Rental record repository and the atomic rental commit primitive.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{Equipment, RentalRecord, User};
use crate::errors::DomainError;

/// Repository contract for RentalRecord entities (CRUD paths)
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Find a rental record by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RentalRecord>, DomainError>;

    /// List all rental records
    async fn find_all(&self) -> Result<Vec<RentalRecord>, DomainError>;

    /// Persist a new rental record
    async fn create(&self, record: RentalRecord) -> Result<RentalRecord, DomainError>;

    /// Persist changes to an existing record
    async fn update(&self, record: RentalRecord) -> Result<RentalRecord, DomainError>;

    /// Delete a record; returns false when it did not exist
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}

/// Atomic transaction primitive for rental creation
///
/// The three writes (user update, equipment update, record insert) either
/// all persist or none do. Implementations must also close the
/// read-check-write race on the availability flag: the flip to unavailable
/// happens under a transaction-level guard (row lock or conditional
/// update), and losing that race surfaces as
/// [`DomainError::EquipmentUnavailable`] rather than a second success.
#[async_trait]
pub trait RentalStore: Send + Sync {
    /// Commit a validated rental as one atomic unit
    ///
    /// `user` and `equipment` carry the post-transition state (debited
    /// balance, availability already flipped to false).
    async fn commit_rental(
        &self,
        user: &User,
        equipment: &Equipment,
        record: RentalRecord,
    ) -> Result<RentalRecord, DomainError>;
}

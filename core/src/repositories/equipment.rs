//! Equipment repository trait for catalog persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Equipment;
use crate::errors::DomainError;

/// Repository contract for Equipment entities
#[async_trait]
pub trait EquipmentRepository: Send + Sync {
    /// Find an equipment unit by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Equipment>, DomainError>;

    /// List the whole catalog
    async fn find_all(&self) -> Result<Vec<Equipment>, DomainError>;

    /// Persist a new equipment unit
    async fn create(&self, equipment: Equipment) -> Result<Equipment, DomainError>;

    /// Persist changes to an existing unit
    async fn update(&self, equipment: Equipment) -> Result<Equipment, DomainError>;

    /// Delete a unit; returns false when it did not exist
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}

//! Shared in-memory store implementing every repository trait.
//!
//! Used by unit tests and development wiring. A single store backs all
//! three entity tables because the rental commit spans them; clones share
//! state. The store honors the same contracts as the MySQL
//! implementations, including the availability guard in
//! [`RentalStore::commit_rental`], and can simulate a persistence failure
//! for atomicity tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Equipment, RentalRecord, User};
use crate::errors::{AuthError, DomainError};
use crate::repositories::{EquipmentRepository, RentalRepository, RentalStore, UserRepository};

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    equipment: HashMap<Uuid, Equipment>,
    rentals: HashMap<Uuid, RentalRecord>,
}

/// In-memory persistence gateway
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
    fail_next_commit: Arc<AtomicBool>,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `commit_rental` fail before writing anything
    ///
    /// Simulates the record-insert step of the transaction failing, so
    /// tests can assert that no partial state is ever observable.
    pub fn fail_next_commit(&self) {
        self.fail_next_commit.store(true, Ordering::SeqCst);
    }

    /// Number of stored rental records
    pub async fn rental_count(&self) -> usize {
        self.tables.read().await.rentals.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().any(|u| u.email == email))
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&user.id) {
            return Err(DomainError::not_found("user"));
        }
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[async_trait]
impl EquipmentRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Equipment>, DomainError> {
        Ok(self.tables.read().await.equipment.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Equipment>, DomainError> {
        let tables = self.tables.read().await;
        let mut all: Vec<Equipment> = tables.equipment.values().cloned().collect();
        all.sort_by_key(|e| e.created_at);
        Ok(all)
    }

    async fn create(&self, equipment: Equipment) -> Result<Equipment, DomainError> {
        let mut tables = self.tables.write().await;
        tables.equipment.insert(equipment.id, equipment.clone());
        Ok(equipment)
    }

    async fn update(&self, equipment: Equipment) -> Result<Equipment, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.equipment.contains_key(&equipment.id) {
            return Err(DomainError::not_found("equipment"));
        }
        tables.equipment.insert(equipment.id, equipment.clone());
        Ok(equipment)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.tables.write().await.equipment.remove(&id).is_some())
    }
}

#[async_trait]
impl RentalRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<RentalRecord>, DomainError> {
        Ok(self.tables.read().await.rentals.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<RentalRecord>, DomainError> {
        let tables = self.tables.read().await;
        let mut all: Vec<RentalRecord> = tables.rentals.values().cloned().collect();
        all.sort_by_key(|r| r.created_at);
        Ok(all)
    }

    async fn create(&self, record: RentalRecord) -> Result<RentalRecord, DomainError> {
        let mut tables = self.tables.write().await;
        tables.rentals.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: RentalRecord) -> Result<RentalRecord, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.rentals.contains_key(&record.id) {
            return Err(DomainError::not_found("rental history"));
        }
        tables.rentals.insert(record.id, record.clone());
        Ok(record)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.tables.write().await.rentals.remove(&id).is_some())
    }
}

#[async_trait]
impl RentalStore for InMemoryStore {
    async fn commit_rental(
        &self,
        user: &User,
        equipment: &Equipment,
        record: RentalRecord,
    ) -> Result<RentalRecord, DomainError> {
        // One write lock spans the whole commit; nothing below mutates
        // until every guard has passed, so a failure leaves no partial
        // state behind.
        let mut tables = self.tables.write().await;

        if self.fail_next_commit.swap(false, Ordering::SeqCst) {
            return Err(DomainError::database("simulated persist failure"));
        }

        let stored = tables
            .equipment
            .get(&equipment.id)
            .ok_or_else(|| DomainError::not_found("equipment"))?;
        // The availability re-check under the lock is what turns a lost
        // race into a Conflict instead of a double booking.
        if !stored.availability {
            return Err(DomainError::EquipmentUnavailable);
        }
        if !tables.users.contains_key(&user.id) {
            return Err(DomainError::not_found("user"));
        }

        tables.users.insert(user.id, user.clone());
        tables.equipment.insert(equipment.id, equipment.clone());
        tables.rentals.insert(record.id, record.clone());
        Ok(record)
    }
}

//! The rental transaction engine

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::RentalRecord;
use crate::errors::DomainError;
use crate::repositories::{EquipmentRepository, RentalRepository, RentalStore, UserRepository};

/// Input for creating a rental
#[derive(Debug, Clone)]
pub struct NewRental {
    pub user_id: Uuid,
    pub equipment_id: Uuid,
    pub rental_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub status: String,
}

/// Input for updating a rental record; every field is overwritten
#[derive(Debug, Clone)]
pub struct RentalUpdate {
    pub user_id: Uuid,
    pub equipment_id: Uuid,
    pub rental_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub status: String,
}

/// Result of a successful rental creation
///
/// Carries the user's new deposit balance alongside the record; callers
/// report the balance without a second user lookup.
#[derive(Debug, Clone)]
pub struct RentalOutcome {
    pub record: RentalRecord,
    pub deposit_balance: Decimal,
}

/// Rental transaction engine
///
/// Validates rental eligibility and executes the atomic state transition
/// across user, equipment, and rental history. Collaborators are injected
/// at construction.
pub struct RentalService<U, E, R, S>
where
    U: UserRepository,
    E: EquipmentRepository,
    R: RentalRepository,
    S: RentalStore,
{
    users: Arc<U>,
    equipment: Arc<E>,
    rentals: Arc<R>,
    store: Arc<S>,
}

impl<U, E, R, S> RentalService<U, E, R, S>
where
    U: UserRepository,
    E: EquipmentRepository,
    R: RentalRepository,
    S: RentalStore,
{
    /// Creates a new rental engine
    pub fn new(users: Arc<U>, equipment: Arc<E>, rentals: Arc<R>, store: Arc<S>) -> Self {
        Self {
            users,
            equipment,
            rentals,
            store,
        }
    }

    /// Creates a rental: validates eligibility, then commits the
    /// debit-flip-insert transition as one atomic unit
    ///
    /// Preconditions are checked in a fixed order and the first failure
    /// wins: user exists, equipment exists, equipment available, deposit
    /// covers the cost. The commit itself re-asserts availability under
    /// the store's transaction guard, so two concurrent calls for the
    /// same unit produce exactly one success. No retry; the operation is
    /// not idempotent.
    pub async fn create_rental(&self, input: NewRental) -> Result<RentalOutcome, DomainError> {
        let mut user = self
            .users
            .find_by_id(input.user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))?;

        let mut equipment = self
            .equipment
            .find_by_id(input.equipment_id)
            .await?
            .ok_or_else(|| DomainError::not_found("equipment"))?;

        if !equipment.availability {
            return Err(DomainError::EquipmentUnavailable);
        }

        if !user.can_afford(equipment.rental_cost) {
            return Err(DomainError::InsufficientDeposit {
                required: equipment.rental_cost,
                available: user.deposit,
            });
        }

        // Stage the transition on the transient copies; nothing persists
        // until commit_rental succeeds as a whole.
        user.debit(equipment.rental_cost)?;
        equipment.mark_rented()?;

        let record = RentalRecord::new(
            input.user_id,
            input.equipment_id,
            input.rental_date,
            input.return_date,
            input.status,
        );

        let record = self.store.commit_rental(&user, &equipment, record).await?;

        info!(
            rental_id = %record.id,
            user_id = %user.id,
            equipment_id = %equipment.id,
            cost = %equipment.rental_cost,
            "rental committed"
        );

        Ok(RentalOutcome {
            record,
            deposit_balance: user.deposit,
        })
    }

    /// Lists all rental records
    pub async fn list_rentals(&self) -> Result<Vec<RentalRecord>, DomainError> {
        self.rentals.find_all().await
    }

    /// Overwrites every field of an existing record
    ///
    /// Unlike the equipment update, no field is skipped; this full
    /// overwrite is the documented contract for rental history.
    pub async fn update_rental(
        &self,
        id: Uuid,
        input: RentalUpdate,
    ) -> Result<RentalRecord, DomainError> {
        let mut record = self
            .rentals
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("rental history"))?;

        record.user_id = input.user_id;
        record.equipment_id = input.equipment_id;
        record.rental_date = input.rental_date;
        record.return_date = input.return_date;
        record.status = input.status;
        record.updated_at = Utc::now();

        self.rentals.update(record).await
    }

    /// Deletes a rental record
    pub async fn delete_rental(&self, id: Uuid) -> Result<(), DomainError> {
        self.rentals
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("rental history"))?;

        let deleted = self.rentals.delete(id).await?;
        if !deleted {
            return Err(DomainError::not_found("rental history"));
        }
        Ok(())
    }
}

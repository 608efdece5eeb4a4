//! Rental record entity documenting one rental event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A record of one rental event
///
/// Created by the rental transaction engine as the terminal step of a
/// successful rental; after that it only changes through the explicit
/// update endpoint. The status label is free-form by design, not a closed
/// enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Renting user
    pub user_id: Uuid,

    /// Rented equipment unit
    pub equipment_id: Uuid,

    /// When the rental starts
    pub rental_date: DateTime<Utc>,

    /// When the equipment was (or is due to be) returned, if known
    pub return_date: Option<DateTime<Utc>>,

    /// Free-form status label
    pub status: String,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl RentalRecord {
    /// Creates a new rental record
    pub fn new(
        user_id: Uuid,
        equipment_id: Uuid,
        rental_date: DateTime<Utc>,
        return_date: Option<DateTime<Utc>>,
        status: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            equipment_id,
            rental_date,
            return_date,
            status,
            created_at: now,
            updated_at: now,
        }
    }
}

//! Equipment entity representing a rentable catalog item.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// A rentable equipment unit
///
/// `availability` is false while the unit is currently rented and true
/// otherwise; only a single concurrent rental per unit is supported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// Unique identifier for the equipment unit
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Whether the unit is currently rentable
    pub availability: bool,

    /// Cost of a single rental
    pub rental_cost: Decimal,

    /// Free-form category label
    pub category: String,

    /// Timestamp when the unit was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the unit was last updated
    pub updated_at: DateTime<Utc>,
}

impl Equipment {
    /// Creates a new equipment unit
    pub fn new(name: String, availability: bool, rental_cost: Decimal, category: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            availability,
            rental_cost,
            category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Flips the unit to rented (unavailable)
    ///
    /// Fails if the unit is already rented out.
    pub fn mark_rented(&mut self) -> Result<(), DomainError> {
        if !self.availability {
            return Err(DomainError::EquipmentUnavailable);
        }
        self.availability = false;
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn excavator() -> Equipment {
        Equipment::new(
            "Mini excavator".to_string(),
            true,
            dec!(30),
            "earthmoving".to_string(),
        )
    }

    #[test]
    fn mark_rented_flips_availability() {
        let mut unit = excavator();
        unit.mark_rented().unwrap();
        assert!(!unit.availability);
    }

    #[test]
    fn mark_rented_twice_is_rejected() {
        let mut unit = excavator();
        unit.mark_rented().unwrap();
        let err = unit.mark_rented().unwrap_err();
        assert!(matches!(err, DomainError::EquipmentUnavailable));
    }

}

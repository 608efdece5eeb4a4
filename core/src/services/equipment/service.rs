//! Catalog CRUD for equipment units

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::domain::entities::Equipment;
use crate::errors::DomainError;
use crate::repositories::EquipmentRepository;

/// Fields for creating an equipment unit
#[derive(Debug, Clone)]
pub struct NewEquipment {
    pub name: String,
    pub availability: bool,
    pub rental_cost: Decimal,
    pub category: String,
}

/// Fields for updating an equipment unit
///
/// Empty `name`/`category` strings mean "leave unchanged", while
/// `availability` and `rental_cost` are always written. This asymmetry is
/// a deliberate per-field partial-update policy that clients already
/// depend on; do not unify it without product sign-off.
#[derive(Debug, Clone)]
pub struct EquipmentUpdate {
    pub name: String,
    pub availability: bool,
    pub rental_cost: Decimal,
    pub category: String,
}

/// Equipment catalog service
pub struct EquipmentService<E>
where
    E: EquipmentRepository,
{
    equipment: Arc<E>,
}

impl<E> EquipmentService<E>
where
    E: EquipmentRepository,
{
    /// Creates a new catalog service
    pub fn new(equipment: Arc<E>) -> Self {
        Self { equipment }
    }

    /// Adds a unit to the catalog
    pub async fn create(&self, input: NewEquipment) -> Result<Equipment, DomainError> {
        if input.name.trim().is_empty() {
            return Err(DomainError::validation("equipment name must not be empty"));
        }
        if input.rental_cost < Decimal::ZERO {
            return Err(DomainError::validation("rental cost must not be negative"));
        }

        let unit = Equipment::new(
            input.name,
            input.availability,
            input.rental_cost,
            input.category,
        );
        let unit = self.equipment.create(unit).await?;
        info!(equipment_id = %unit.id, name = %unit.name, "equipment created");
        Ok(unit)
    }

    /// Lists the whole catalog
    pub async fn list(&self) -> Result<Vec<Equipment>, DomainError> {
        self.equipment.find_all().await
    }

    /// Applies the partial-update policy and persists
    pub async fn update(&self, id: Uuid, input: EquipmentUpdate) -> Result<Equipment, DomainError> {
        if input.rental_cost < Decimal::ZERO {
            return Err(DomainError::validation("rental cost must not be negative"));
        }

        let mut unit = self
            .equipment
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("equipment"))?;

        if !input.name.is_empty() {
            unit.name = input.name;
        }
        unit.availability = input.availability;
        unit.rental_cost = input.rental_cost;
        if !input.category.is_empty() {
            unit.category = input.category;
        }
        unit.updated_at = chrono::Utc::now();

        self.equipment.update(unit).await
    }

    /// Removes a unit from the catalog
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        // Look up first so a missing unit reports NotFound, not success
        self.equipment
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("equipment"))?;

        let deleted = self.equipment.delete(id).await?;
        if !deleted {
            return Err(DomainError::not_found("equipment"));
        }
        info!(equipment_id = %id, "equipment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryStore;
    use rust_decimal_macros::dec;

    fn service() -> (EquipmentService<InMemoryStore>, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        (EquipmentService::new(store.clone()), store)
    }

    fn excavator() -> NewEquipment {
        NewEquipment {
            name: "Mini excavator".to_string(),
            availability: true,
            rental_cost: dec!(30),
            category: "earthmoving".to_string(),
        }
    }

    #[tokio::test]
    async fn create_and_list() {
        let (service, _store) = service();
        service.create(excavator()).await.unwrap();

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Mini excavator");
    }

    #[tokio::test]
    async fn create_rejects_empty_name_and_negative_cost() {
        let (service, _store) = service();

        let mut input = excavator();
        input.name = "  ".to_string();
        assert!(matches!(
            service.create(input).await.unwrap_err(),
            DomainError::Validation { .. }
        ));

        let mut input = excavator();
        input.rental_cost = dec!(-1);
        assert!(matches!(
            service.create(input).await.unwrap_err(),
            DomainError::Validation { .. }
        ));
    }

    #[tokio::test]
    async fn update_skips_empty_strings_but_overwrites_scalars() {
        let (service, _store) = service();
        let unit = service.create(excavator()).await.unwrap();

        let updated = service
            .update(
                unit.id,
                EquipmentUpdate {
                    name: String::new(),
                    availability: false,
                    rental_cost: dec!(45),
                    category: String::new(),
                },
            )
            .await
            .unwrap();

        // Empty strings left name/category alone
        assert_eq!(updated.name, "Mini excavator");
        assert_eq!(updated.category, "earthmoving");
        // Scalars overwritten unconditionally
        assert!(!updated.availability);
        assert_eq!(updated.rental_cost, dec!(45));
    }

    #[tokio::test]
    async fn update_overwrites_non_empty_strings() {
        let (service, _store) = service();
        let unit = service.create(excavator()).await.unwrap();

        let updated = service
            .update(
                unit.id,
                EquipmentUpdate {
                    name: "Midi excavator".to_string(),
                    availability: true,
                    rental_cost: dec!(30),
                    category: "heavy".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Midi excavator");
        assert_eq!(updated.category, "heavy");
    }

    #[tokio::test]
    async fn update_missing_unit_is_not_found() {
        let (service, _store) = service();
        let err = service
            .update(Uuid::new_v4(), EquipmentUpdate {
                name: "x".to_string(),
                availability: true,
                rental_cost: dec!(1),
                category: "y".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_removes_unit_and_reports_missing() {
        let (service, _store) = service();
        let unit = service.create(excavator()).await.unwrap();

        service.delete(unit.id).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());

        let err = service.delete(unit.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}

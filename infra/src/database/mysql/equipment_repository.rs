//! MySQL implementation of the EquipmentRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use eq_core::domain::entities::Equipment;
use eq_core::errors::DomainError;
use eq_core::repositories::EquipmentRepository;

/// MySQL implementation of EquipmentRepository
pub struct MySqlEquipmentRepository {
    pool: MySqlPool,
}

impl MySqlEquipmentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an Equipment entity
    pub(crate) fn row_to_equipment(
        row: &sqlx::mysql::MySqlRow,
    ) -> Result<Equipment, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;

        Ok(Equipment {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("Invalid UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::database(format!("Failed to get name: {}", e)))?,
            availability: row
                .try_get("availability")
                .map_err(|e| DomainError::database(format!("Failed to get availability: {}", e)))?,
            rental_cost: row
                .try_get::<Decimal, _>("rental_cost")
                .map_err(|e| DomainError::database(format!("Failed to get rental_cost: {}", e)))?,
            category: row
                .try_get("category")
                .map_err(|e| DomainError::database(format!("Failed to get category: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::database(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl EquipmentRepository for MySqlEquipmentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Equipment>, DomainError> {
        let query = r#"
            SELECT id, name, availability, rental_cost, category, created_at, updated_at
            FROM equipment
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_equipment(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<Equipment>, DomainError> {
        let query = r#"
            SELECT id, name, availability, rental_cost, category, created_at, updated_at
            FROM equipment
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Database query failed: {}", e)))?;

        rows.iter().map(Self::row_to_equipment).collect()
    }

    async fn create(&self, equipment: Equipment) -> Result<Equipment, DomainError> {
        let query = r#"
            INSERT INTO equipment (id, name, availability, rental_cost, category, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(equipment.id.to_string())
            .bind(&equipment.name)
            .bind(equipment.availability)
            .bind(equipment.rental_cost)
            .bind(&equipment.category)
            .bind(equipment.created_at)
            .bind(equipment.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to create equipment: {}", e)))?;

        Ok(equipment)
    }

    async fn update(&self, equipment: Equipment) -> Result<Equipment, DomainError> {
        let query = r#"
            UPDATE equipment SET
                name = ?,
                availability = ?,
                rental_cost = ?,
                category = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let now = Utc::now();
        let result = sqlx::query(query)
            .bind(&equipment.name)
            .bind(equipment.availability)
            .bind(equipment.rental_cost)
            .bind(&equipment.category)
            .bind(now)
            .bind(equipment.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update equipment: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("equipment"));
        }

        let mut updated = equipment;
        updated.updated_at = now;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = "DELETE FROM equipment WHERE id = ?";

        let result = sqlx::query(query)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete equipment: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

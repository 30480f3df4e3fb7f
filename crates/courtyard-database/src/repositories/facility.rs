//! Facility repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use courtyard_core::error::{AppError, ErrorKind};
use courtyard_core::result::AppResult;
use courtyard_entity::facility::Facility;
use courtyard_entity::facility::model::{FacilityUpdate, NewFacility};

/// Repository for facility CRUD operations.
#[derive(Debug, Clone)]
pub struct FacilityRepository {
    pool: PgPool,
}

impl FacilityRepository {
    /// Create a new facility repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a facility by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Facility>> {
        sqlx::query_as::<_, Facility>("SELECT * FROM facilities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find facility by id", e)
            })
    }

    /// List all facilities ordered by name.
    pub async fn find_all(&self) -> AppResult<Vec<Facility>> {
        sqlx::query_as::<_, Facility>("SELECT * FROM facilities ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list facilities", e)
            })
    }

    /// Insert a new facility.
    pub async fn create(&self, new: &NewFacility) -> AppResult<Facility> {
        sqlx::query_as::<_, Facility>(
            "INSERT INTO facilities (name, location, availability, capacity, open_time, close_time) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&new.name)
        .bind(&new.location)
        .bind(new.availability)
        .bind(new.capacity)
        .bind(new.open_time)
        .bind(new.close_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create facility", e))
    }

    /// Apply a partial update; absent fields are left unchanged.
    pub async fn update(&self, id: Uuid, update: &FacilityUpdate) -> AppResult<Option<Facility>> {
        sqlx::query_as::<_, Facility>(
            "UPDATE facilities SET \
                 name = COALESCE($2, name), \
                 location = COALESCE($3, location), \
                 availability = COALESCE($4, availability), \
                 capacity = COALESCE($5, capacity), \
                 open_time = COALESCE($6, open_time), \
                 close_time = COALESCE($7, close_time), \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.location)
        .bind(update.availability)
        .bind(update.capacity)
        .bind(update.open_time)
        .bind(update.close_time)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update facility", e))
    }
}

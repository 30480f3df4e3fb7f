//! Facility CRUD with admin-only mutation.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use courtyard_core::error::AppError;
use courtyard_core::types::time::parse_hhmm;
use courtyard_database::repositories::FacilityRepository;
use courtyard_entity::facility::Facility;
use courtyard_entity::facility::model::{FacilityUpdate, NewFacility};

use crate::context::RequestContext;

/// Input for creating a facility. Operating hours arrive as `HH:MM`
/// strings and are parsed here.
#[derive(Debug, Clone)]
pub struct CreateFacilityInput {
    /// Display name.
    pub name: String,
    /// Campus location.
    pub location: String,
    /// Whether the facility accepts bookings.
    pub availability: bool,
    /// Capacity (people).
    pub capacity: i32,
    /// Daily opening time, `HH:MM`.
    pub open_time: String,
    /// Daily closing time, `HH:MM`.
    pub close_time: String,
}

/// Partial facility update. Operating hours arrive as `HH:MM` strings.
#[derive(Debug, Clone, Default)]
pub struct UpdateFacilityInput {
    /// New display name.
    pub name: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New availability flag.
    pub availability: Option<bool>,
    /// New capacity.
    pub capacity: Option<i32>,
    /// New opening time, `HH:MM`.
    pub open_time: Option<String>,
    /// New closing time, `HH:MM`.
    pub close_time: Option<String>,
}

/// Handles facility listing and admin-only management.
#[derive(Debug, Clone)]
pub struct FacilityService {
    facility_repo: Arc<FacilityRepository>,
}

impl FacilityService {
    /// Creates a new facility service.
    pub fn new(facility_repo: Arc<FacilityRepository>) -> Self {
        Self { facility_repo }
    }

    /// Lists every facility.
    pub async fn list(&self) -> Result<Vec<Facility>, AppError> {
        self.facility_repo.find_all().await
    }

    /// Loads one facility.
    pub async fn get(&self, id: Uuid) -> Result<Facility, AppError> {
        self.facility_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Facility not found"))
    }

    /// Creates a facility. Admin only.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        input: CreateFacilityInput,
    ) -> Result<Facility, AppError> {
        self.require_admin(ctx)?;

        if input.name.trim().is_empty() {
            return Err(AppError::validation("Facility name must not be empty"));
        }
        if input.capacity < 1 {
            return Err(AppError::validation("Capacity must be at least 1"));
        }
        let open_time = parse_hhmm(&input.open_time)?;
        let close_time = parse_hhmm(&input.close_time)?;
        if close_time <= open_time {
            return Err(AppError::validation(
                "Closing time must be after opening time",
            ));
        }

        let facility = self
            .facility_repo
            .create(&NewFacility {
                name: input.name,
                location: input.location,
                availability: input.availability,
                capacity: input.capacity,
                open_time,
                close_time,
            })
            .await?;

        info!(facility_id = %facility.id, name = %facility.name, "Created facility");
        Ok(facility)
    }

    /// Applies a partial update. Admin only.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: UpdateFacilityInput,
    ) -> Result<Facility, AppError> {
        self.require_admin(ctx)?;

        let current = self.get(id).await?;

        let open_time = input.open_time.as_deref().map(parse_hhmm).transpose()?;
        let close_time = input.close_time.as_deref().map(parse_hhmm).transpose()?;

        // Validate the resulting window, not just the changed half.
        let effective_open = open_time.unwrap_or(current.open_time);
        let effective_close = close_time.unwrap_or(current.close_time);
        if effective_close <= effective_open {
            return Err(AppError::validation(
                "Closing time must be after opening time",
            ));
        }
        if let Some(capacity) = input.capacity
            && capacity < 1
        {
            return Err(AppError::validation("Capacity must be at least 1"));
        }

        let updated = self
            .facility_repo
            .update(
                id,
                &FacilityUpdate {
                    name: input.name,
                    location: input.location,
                    availability: input.availability,
                    capacity: input.capacity,
                    open_time,
                    close_time,
                },
            )
            .await?
            .ok_or_else(|| AppError::not_found("Facility not found"))?;

        info!(facility_id = %updated.id, "Updated facility");
        Ok(updated)
    }

    fn require_admin(&self, ctx: &RequestContext) -> Result<(), AppError> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Admin role required"));
        }
        Ok(())
    }
}

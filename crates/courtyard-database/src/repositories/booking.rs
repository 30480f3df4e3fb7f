//! Booking repository implementation.
//!
//! The check-then-insert race on slot submission is closed at the store
//! layer: the `bookings_user_date_key` unique index backs the
//! one-booking-per-day rule and the `bookings_primary_slot_idx` partial
//! unique index backs slot exclusivity. Violations of either surface as
//! the corresponding domain error kind instead of a bare database error.

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use uuid::Uuid;

use courtyard_core::error::{AppError, ErrorKind};
use courtyard_core::result::AppResult;
use courtyard_entity::booking::model::PROMOTION_REMARKS;
use courtyard_entity::booking::{Booking, BookingStatus, NewBooking};

/// Constraint backing the one-booking-per-day rule.
const USER_DATE_CONSTRAINT: &str = "bookings_user_date_key";
/// Partial unique index backing slot exclusivity for primary bookings.
const PRIMARY_SLOT_CONSTRAINT: &str = "bookings_primary_slot_idx";

/// Repository for booking CRUD, slot queries, and the transactional
/// status-transition + waitlist-promotion write.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a booking by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find booking by id", e)
            })
    }

    /// List bookings with optional date/facility filters.
    ///
    /// Waitlisted entries sort after primaries at the same slot; ties
    /// break by submission order.
    pub async fn find_all(
        &self,
        date: Option<NaiveDate>,
        facility_id: Option<Uuid>,
    ) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings \
             WHERE ($1::date IS NULL OR date = $1) \
               AND ($2::uuid IS NULL OR facility_id = $2) \
             ORDER BY date, start_time, waitlist_position NULLS FIRST, created_at",
        )
        .bind(date)
        .bind(facility_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))
    }

    /// List a user's bookings, newest slot first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY date DESC, start_time DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list user bookings", e))
    }

    /// Find a user's booking on a given date, regardless of facility or
    /// status (the one-per-day rule counts terminal bookings too).
    pub async fn find_for_user_on_date(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE user_id = $1 AND date = $2")
            .bind(user_id)
            .bind(date)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check daily booking", e)
            })
    }

    /// Find the primary (non-waitlisted) pending/approved booking
    /// occupying a slot, if any.
    pub async fn find_primary_for_slot(
        &self,
        facility_id: Uuid,
        date: NaiveDate,
        start_time: NaiveTime,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings \
             WHERE facility_id = $1 AND date = $2 AND start_time = $3 \
               AND waitlist_position IS NULL \
               AND status IN ('pending', 'approved')",
        )
        .bind(facility_id)
        .bind(date)
        .bind(start_time)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check slot occupancy", e)
        })
    }

    /// All pending/approved bookings for a facility on a date, the
    /// read-set of the availability resolver.
    pub async fn find_active_for_date(
        &self,
        facility_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Vec<Booking>> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings \
             WHERE facility_id = $1 AND date = $2 AND status IN ('pending', 'approved') \
             ORDER BY start_time, waitlist_position NULLS FIRST",
        )
        .bind(facility_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load active bookings", e)
        })
    }

    /// The highest waitlist rank currently assigned at a slot.
    pub async fn max_waitlist_position(
        &self,
        facility_id: Uuid,
        date: NaiveDate,
        start_time: NaiveTime,
    ) -> AppResult<Option<i32>> {
        sqlx::query_scalar::<_, Option<i32>>(
            "SELECT MAX(waitlist_position) FROM bookings \
             WHERE facility_id = $1 AND date = $2 AND start_time = $3",
        )
        .bind(facility_id)
        .bind(date)
        .bind(start_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to read waitlist ranks", e)
        })
    }

    /// Insert a new booking with status `pending`.
    ///
    /// Unique-constraint violations are mapped to the domain error the
    /// racing request would have received from the pre-insert checks.
    pub async fn create(&self, new: &NewBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (user_id, facility_id, date, start_time, end_time, status, waitlist_position) \
             VALUES ($1, $2, $3, $4, $5, 'pending', $6) RETURNING *",
        )
        .bind(new.user_id)
        .bind(new.facility_id)
        .bind(new.date)
        .bind(new.start_time)
        .bind(new.end_time)
        .bind(new.waitlist_position)
        .fetch_one(&self.pool)
        .await
        .map_err(map_create_error)
    }

    /// Apply a status transition and, when requested, promote the
    /// lowest-ranked waitlisted booking at the vacated slot — both in a
    /// single transaction.
    ///
    /// `promote` is decided by the caller (vacating transition of a
    /// primary booking). The promotion candidate is locked with
    /// `FOR UPDATE SKIP LOCKED` so concurrent vacancies at the same slot
    /// never promote the same entry twice. Returns the updated booking
    /// and the promoted one, if any. Remaining waitlist ranks are not
    /// renumbered.
    pub async fn transition_and_promote(
        &self,
        id: Uuid,
        status: BookingStatus,
        remarks: Option<&str>,
        promote: bool,
    ) -> AppResult<(Booking, Option<Booking>)> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let updated = sqlx::query_as::<_, Booking>(
            "UPDATE bookings \
             SET status = $2, remarks = COALESCE($3, remarks), updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(remarks)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update booking status", e)
        })?
        .ok_or_else(|| AppError::not_found("Booking not found"))?;

        let promoted = if promote {
            let candidate = sqlx::query_as::<_, Booking>(
                "SELECT * FROM bookings \
                 WHERE facility_id = $1 AND date = $2 AND start_time = $3 \
                   AND waitlist_position IS NOT NULL \
                 ORDER BY waitlist_position \
                 LIMIT 1 FOR UPDATE SKIP LOCKED",
            )
            .bind(updated.facility_id)
            .bind(updated.date)
            .bind(updated.start_time)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to find promotion candidate",
                    e,
                )
            })?;

            match candidate {
                Some(candidate) => {
                    let promoted = sqlx::query_as::<_, Booking>(
                        "UPDATE bookings \
                         SET waitlist_position = NULL, status = 'pending', remarks = $2, \
                             updated_at = NOW() \
                         WHERE id = $1 RETURNING *",
                    )
                    .bind(candidate.id)
                    .bind(PROMOTION_REMARKS)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to promote booking", e)
                    })?;
                    Some(promoted)
                }
                None => None,
            }
        } else {
            None
        };

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transition", e)
        })?;

        Ok((updated, promoted))
    }
}

/// Map insert failures, translating the two uniqueness backstops into
/// their domain error kinds.
fn map_create_error(err: sqlx::Error) -> AppError {
    if let Some(db_err) = err.as_database_error() {
        match db_err.constraint() {
            Some(USER_DATE_CONSTRAINT) => {
                return AppError::daily_limit_exceeded(
                    "You already have a booking for this date. Only one booking per day is allowed.",
                );
            }
            Some(PRIMARY_SLOT_CONSTRAINT) => {
                return AppError::slot_conflict("This slot was just booked by someone else.");
            }
            _ => {}
        }
    }
    AppError::with_source(ErrorKind::Database, "Failed to create booking", err)
}

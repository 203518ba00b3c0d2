//! Repository for the `measurements` table.

use sqlx::{PgExecutor, PgPool};
use vitalog_core::types::{DbId, UserId};

use crate::models::measurement::{CreateMeasurement, Measurement, UpdateMeasurement};

/// Column list for measurements queries.
const COLUMNS: &str = "\
    id, user_id, measured_on, weight_kg, waist_cm, belly_cm, hips_cm, \
    thigh_cm, created_at";

/// Listing order: most recent first. Entries on the same date fall back to
/// insertion order so the newest row still comes first.
const ORDER: &str = "measured_on DESC, id DESC";

/// Provides CRUD operations for body measurements.
pub struct MeasurementRepo;

impl MeasurementRepo {
    /// List all measurements of a user, most recent first.
    ///
    /// Accepts the pool or an open transaction (`&mut *tx`).
    pub async fn list_for_user<'e, E>(
        executor: E,
        user_id: UserId,
    ) -> Result<Vec<Measurement>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM measurements WHERE user_id = $1 ORDER BY {ORDER}");
        sqlx::query_as::<_, Measurement>(&query)
            .bind(user_id)
            .fetch_all(executor)
            .await
    }

    /// The user's most recent measurement, if any.
    pub async fn latest_for_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Option<Measurement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM measurements WHERE user_id = $1 ORDER BY {ORDER} LIMIT 1"
        );
        sqlx::query_as::<_, Measurement>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find one of the user's measurements by id.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
    ) -> Result<Option<Measurement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM measurements WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Measurement>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new measurement, returning the created row.
    ///
    /// Accepts the pool or an open transaction (`&mut *tx`).
    pub async fn create<'e, E>(
        executor: E,
        user_id: UserId,
        input: &CreateMeasurement,
    ) -> Result<Measurement, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO measurements
                (user_id, measured_on, weight_kg, waist_cm, belly_cm, hips_cm, thigh_cm)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Measurement>(&query)
            .bind(user_id)
            .bind(input.measured_on)
            .bind(input.weight_kg)
            .bind(input.waist_cm)
            .bind(input.belly_cm)
            .bind(input.hips_cm)
            .bind(input.thigh_cm)
            .fetch_one(executor)
            .await
    }

    /// Partially update a measurement.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Returns `None`
    /// if the row does not exist or belongs to another user.
    pub async fn update(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
        input: &UpdateMeasurement,
    ) -> Result<Option<Measurement>, sqlx::Error> {
        let query = format!(
            "UPDATE measurements SET
                measured_on = COALESCE($3, measured_on),
                weight_kg = COALESCE($4, weight_kg),
                waist_cm = COALESCE($5, waist_cm),
                belly_cm = COALESCE($6, belly_cm),
                hips_cm = COALESCE($7, hips_cm),
                thigh_cm = COALESCE($8, thigh_cm)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Measurement>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.measured_on)
            .bind(input.weight_kg)
            .bind(input.waist_cm)
            .bind(input.belly_cm)
            .bind(input.hips_cm)
            .bind(input.thigh_cm)
            .fetch_optional(pool)
            .await
    }

    /// Delete a measurement. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, user_id: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM measurements WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

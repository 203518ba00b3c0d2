//! Repository for the `goals` table.

use sqlx::{PgExecutor, PgPool};
use vitalog_core::goals::GOAL_KIND_MAIN;
use vitalog_core::types::{DbId, UserId};

use crate::models::goal::{CreateGoal, Goal, UpdateGoal};

/// Column list for goals queries.
const COLUMNS: &str = "id, user_id, goal_kind, target_weight_kg, target_date, created_at";

/// Provides CRUD operations for weight goals.
pub struct GoalRepo;

impl GoalRepo {
    /// List a user's goals: main goal first, then by target date.
    ///
    /// Accepts the pool or an open transaction (`&mut *tx`).
    pub async fn list_for_user<'e, E>(executor: E, user_id: UserId) -> Result<Vec<Goal>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM goals
             WHERE user_id = $1
             ORDER BY goal_kind DESC, target_date ASC, id ASC"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(user_id)
            .fetch_all(executor)
            .await
    }

    /// Find one of the user's goals by id.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Whether the user has a main goal, ignoring the goal `excluding`.
    pub async fn main_goal_exists(
        pool: &PgPool,
        user_id: UserId,
        excluding: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(
                SELECT 1 FROM goals
                WHERE user_id = $1 AND goal_kind = $2 AND ($3::BIGINT IS NULL OR id <> $3)
             )",
        )
        .bind(user_id)
        .bind(GOAL_KIND_MAIN)
        .bind(excluding)
        .fetch_one(pool)
        .await
    }

    /// Insert a new goal, returning the created row.
    ///
    /// A second main goal violates `uq_goals_main_per_user`.
    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        input: &CreateGoal,
    ) -> Result<Goal, sqlx::Error> {
        let query = format!(
            "INSERT INTO goals (user_id, goal_kind, target_weight_kg, target_date)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(user_id)
            .bind(input.kind.code())
            .bind(input.target_weight_kg)
            .bind(input.target_date)
            .fetch_one(pool)
            .await
    }

    /// Partially update a goal. Returns `None` if not found for this user.
    pub async fn update(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
        input: &UpdateGoal,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!(
            "UPDATE goals SET
                goal_kind = COALESCE($3, goal_kind),
                target_weight_kg = COALESCE($4, target_weight_kg),
                target_date = COALESCE($5, target_date)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.kind.map(|k| k.code()))
            .bind(input.target_weight_kg)
            .bind(input.target_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a goal. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, user_id: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

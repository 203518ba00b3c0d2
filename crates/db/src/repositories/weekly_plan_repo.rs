//! Repository for the `weekly_plans` table.

use chrono::NaiveDate;
use sqlx::PgPool;
use vitalog_core::types::{DbId, UserId};

use crate::models::weekly_plan::{CreateWeeklyPlan, UpdateWeeklyPlan, WeeklyPlan};

/// Column list for weekly_plans queries.
const COLUMNS: &str = "id, user_id, plan_date, breakfast, lunch, dinner, created_at";

/// Provides CRUD operations for daily meal plans.
pub struct WeeklyPlanRepo;

impl WeeklyPlanRepo {
    /// List all of a user's plans, latest date first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Vec<WeeklyPlan>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM weekly_plans WHERE user_id = $1 ORDER BY plan_date DESC"
        );
        sqlx::query_as::<_, WeeklyPlan>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List plans dated within `from..=to`, earliest first.
    pub async fn list_between(
        pool: &PgPool,
        user_id: UserId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<WeeklyPlan>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM weekly_plans
             WHERE user_id = $1 AND plan_date BETWEEN $2 AND $3
             ORDER BY plan_date ASC"
        );
        sqlx::query_as::<_, WeeklyPlan>(&query)
            .bind(user_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// The plan for a specific date, if one exists.
    pub async fn find_by_date(
        pool: &PgPool,
        user_id: UserId,
        plan_date: NaiveDate,
    ) -> Result<Option<WeeklyPlan>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM weekly_plans WHERE user_id = $1 AND plan_date = $2");
        sqlx::query_as::<_, WeeklyPlan>(&query)
            .bind(user_id)
            .bind(plan_date)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new plan. A second plan for the same date violates
    /// `uq_weekly_plans_user_date`.
    pub async fn create(
        pool: &PgPool,
        user_id: UserId,
        input: &CreateWeeklyPlan,
    ) -> Result<WeeklyPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO weekly_plans (user_id, plan_date, breakfast, lunch, dinner)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WeeklyPlan>(&query)
            .bind(user_id)
            .bind(input.plan_date)
            .bind(&input.breakfast)
            .bind(&input.lunch)
            .bind(&input.dinner)
            .fetch_one(pool)
            .await
    }

    /// Partially update a plan. Returns `None` if not found for this user.
    pub async fn update(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
        input: &UpdateWeeklyPlan,
    ) -> Result<Option<WeeklyPlan>, sqlx::Error> {
        let query = format!(
            "UPDATE weekly_plans SET
                plan_date = COALESCE($3, plan_date),
                breakfast = COALESCE($4, breakfast),
                lunch = COALESCE($5, lunch),
                dinner = COALESCE($6, dinner)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WeeklyPlan>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.plan_date)
            .bind(&input.breakfast)
            .bind(&input.lunch)
            .bind(&input.dinner)
            .fetch_optional(pool)
            .await
    }

    /// Delete a plan. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, user_id: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM weekly_plans WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `lung_function_tests` and `lung_function_results` tables.

use std::collections::HashMap;

use sqlx::PgPool;
use vitalog_core::lung_function::DerivedResult;
use vitalog_core::types::{DbId, UserId};

use crate::models::lung_function::{
    CreateLungFunctionTest, LungFunctionResult, LungFunctionTest, LungFunctionTestWithResults,
    UpdateLungFunctionResult,
};

/// Column list for `lung_function_tests` queries.
const TEST_COLUMNS: &str = "\
    id, user_id, tested_on, height_cm, weight_kg, overall_predicted_pct, \
    hospital_protocol, created_at";

/// Column list for `lung_function_results` queries.
const RESULT_COLUMNS: &str = "\
    id, test_id, parameter, attempt_1, attempt_2, attempt_3, best_attempt, \
    predicted, lower_limit, predicted_pct, remark, created_at";

/// Provides data access for lung-function test sessions and their results.
pub struct LungFunctionRepo;

impl LungFunctionRepo {
    /// Insert a session and its derived results in one transaction.
    pub async fn create_with_results(
        pool: &PgPool,
        user_id: UserId,
        input: &CreateLungFunctionTest,
        results: &[DerivedResult],
    ) -> Result<LungFunctionTestWithResults, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO lung_function_tests
                (user_id, tested_on, height_cm, weight_kg, overall_predicted_pct, hospital_protocol)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {TEST_COLUMNS}"
        );
        let test = sqlx::query_as::<_, LungFunctionTest>(&query)
            .bind(user_id)
            .bind(input.tested_on)
            .bind(input.height_cm)
            .bind(input.weight_kg)
            .bind(input.overall_predicted_pct)
            .bind(input.hospital_protocol)
            .fetch_one(&mut *tx)
            .await?;

        let insert_result = format!(
            "INSERT INTO lung_function_results
                (test_id, parameter, attempt_1, attempt_2, attempt_3, best_attempt,
                 predicted, lower_limit, predicted_pct, remark)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {RESULT_COLUMNS}"
        );
        let mut stored = Vec::with_capacity(results.len());
        for result in results {
            let row = sqlx::query_as::<_, LungFunctionResult>(&insert_result)
                .bind(test.id)
                .bind(result.parameter)
                .bind(result.attempt_1)
                .bind(result.attempt_2)
                .bind(result.attempt_3)
                .bind(result.best_attempt)
                .bind(result.predicted)
                .bind(result.lower_limit)
                .bind(result.predicted_pct)
                .bind(&result.remark)
                .fetch_one(&mut *tx)
                .await?;
            stored.push(row);
        }

        tx.commit().await?;
        tracing::debug!(
            test_id = test.id,
            result_count = stored.len(),
            "Stored lung function session"
        );

        Ok(LungFunctionTestWithResults {
            test,
            results: stored,
        })
    }

    /// List a user's sessions with their results, latest test date first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Vec<LungFunctionTestWithResults>, sqlx::Error> {
        let query = format!(
            "SELECT {TEST_COLUMNS} FROM lung_function_tests
             WHERE user_id = $1
             ORDER BY tested_on DESC, id DESC"
        );
        let tests = sqlx::query_as::<_, LungFunctionTest>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        if tests.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = tests.iter().map(|t| t.id).collect();
        let query = format!(
            "SELECT {RESULT_COLUMNS} FROM lung_function_results
             WHERE test_id = ANY($1)
             ORDER BY test_id, id"
        );
        let results = sqlx::query_as::<_, LungFunctionResult>(&query)
            .bind(&ids)
            .fetch_all(pool)
            .await?;

        let mut by_test: HashMap<DbId, Vec<LungFunctionResult>> = HashMap::new();
        for result in results {
            by_test.entry(result.test_id).or_default().push(result);
        }

        Ok(tests
            .into_iter()
            .map(|test| {
                let results = by_test.remove(&test.id).unwrap_or_default();
                LungFunctionTestWithResults { test, results }
            })
            .collect())
    }

    /// Find one session (with results) by id.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: UserId,
        id: DbId,
    ) -> Result<Option<LungFunctionTestWithResults>, sqlx::Error> {
        let query =
            format!("SELECT {TEST_COLUMNS} FROM lung_function_tests WHERE id = $1 AND user_id = $2");
        let Some(test) = sqlx::query_as::<_, LungFunctionTest>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {RESULT_COLUMNS} FROM lung_function_results WHERE test_id = $1 ORDER BY id"
        );
        let results = sqlx::query_as::<_, LungFunctionResult>(&query)
            .bind(test.id)
            .fetch_all(pool)
            .await?;

        Ok(Some(LungFunctionTestWithResults { test, results }))
    }

    /// Edit one result of a session owned by the user.
    ///
    /// The row is locked, the edit applied in memory (so `null` clears a
    /// column and the best attempt and remark are recomputed), and every
    /// editable column written back in the same transaction.
    pub async fn update_result(
        pool: &PgPool,
        user_id: UserId,
        result_id: DbId,
        input: &UpdateLungFunctionResult,
    ) -> Result<Option<LungFunctionResult>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {RESULT_COLUMNS} FROM lung_function_results
             WHERE id = $1
               AND test_id IN (SELECT id FROM lung_function_tests WHERE user_id = $2)
             FOR UPDATE"
        );
        let Some(current) = sqlx::query_as::<_, LungFunctionResult>(&query)
            .bind(result_id)
            .bind(user_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let next = input.apply_to(&current);
        let query = format!(
            "UPDATE lung_function_results SET
                attempt_1 = $2,
                attempt_2 = $3,
                attempt_3 = $4,
                best_attempt = $5,
                predicted = $6,
                lower_limit = $7,
                predicted_pct = $8,
                remark = $9
             WHERE id = $1
             RETURNING {RESULT_COLUMNS}"
        );
        let updated = sqlx::query_as::<_, LungFunctionResult>(&query)
            .bind(result_id)
            .bind(next.attempt_1)
            .bind(next.attempt_2)
            .bind(next.attempt_3)
            .bind(next.best_attempt)
            .bind(next.predicted)
            .bind(next.lower_limit)
            .bind(next.predicted_pct)
            .bind(&next.remark)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete a session; its results cascade. Returns `true` if deleted.
    pub async fn delete(pool: &PgPool, user_id: UserId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lung_function_tests WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

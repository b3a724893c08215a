// src/models/result.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteConnection};
use validator::Validate;

use crate::{
    db::{Record, ensure_exists},
    error::AppError,
    models::{test::Test, user::User},
};

/// Represents the 'results' table in the database.
/// Stores the score a user obtained on a test.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, PartialEq)]
pub struct TestResult {
    pub id: i64,
    pub user_id: i64,
    pub test_id: i64,
    pub score: f64,
}

#[async_trait]
impl Record for TestResult {
    const TABLE: &'static str = "results";
    const COLUMNS: &'static str = "id, user_id, test_id, score";
    const LABEL: &'static str = "Result";

    type Create = CreateResultRequest;

    async fn insert(
        conn: &mut SqliteConnection,
        new: &CreateResultRequest,
    ) -> Result<Self, AppError> {
        ensure_exists::<User>(&mut *conn, new.user_id, "user_id").await?;
        ensure_exists::<Test>(&mut *conn, new.test_id, "test_id").await?;

        let result = sqlx::query_as::<_, TestResult>(
            r#"
            INSERT INTO results (user_id, test_id, score)
            VALUES (?, ?, ?)
            RETURNING id, user_id, test_id, score
            "#,
        )
        .bind(new.user_id)
        .bind(new.test_id)
        .bind(new.score)
        .fetch_one(conn)
        .await?;

        Ok(result)
    }
}

/// DTO for recording a result.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateResultRequest {
    pub user_id: i64,
    pub test_id: i64,
    #[validate(custom(function = validate_score))]
    pub score: f64,
}

fn validate_score(score: f64) -> Result<(), validator::ValidationError> {
    if !score.is_finite() {
        return Err(validator::ValidationError::new("score_must_be_finite"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_scores_pass() {
        assert!(validate_score(0.0).is_ok());
        assert!(validate_score(87.5).is_ok());
        assert!(validate_score(f64::NAN).is_err());
        assert!(validate_score(f64::INFINITY).is_err());
    }

    #[test]
    fn missing_score_fails_to_deserialize() {
        let parsed = serde_json::from_value::<CreateResultRequest>(serde_json::json!({
            "user_id": 1,
            "test_id": 2
        }));
        assert!(parsed.is_err());
    }
}

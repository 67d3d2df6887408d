use ei_core::model::{Category, SubmissionId};

use super::SqliteRepository;
use super::mapping::{map_result_row, score_to_i64};
use crate::repository::{ResultRow, ResultSheet, StorageError};

#[async_trait::async_trait]
impl ResultSheet for SqliteRepository {
    async fn append_row(&self, row: &ResultRow) -> Result<SubmissionId, StorageError> {
        let res = sqlx::query(
            r"
                INSERT INTO assessment_results (
                    submitted_at, name, organization,
                    self_awareness, managing_emotions, motivating_oneself, empathy, social_skill
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ",
        )
        .bind(row.submitted_at)
        .bind(&row.name)
        .bind(&row.organization)
        .bind(score_to_i64(&row.scores, Category::SelfAwareness))
        .bind(score_to_i64(&row.scores, Category::ManagingEmotions))
        .bind(score_to_i64(&row.scores, Category::MotivatingOneself))
        .bind(score_to_i64(&row.scores, Category::Empathy))
        .bind(score_to_i64(&row.scores, Category::SocialSkill))
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(SubmissionId::new(res.last_insert_rowid()))
    }
}

impl SqliteRepository {
    /// Most recent rows first. Operator tooling only; the submission flow never reads.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the query fails or a row cannot be decoded.
    pub async fn recent_rows(&self, limit: u32) -> Result<Vec<ResultRow>, StorageError> {
        let rows = sqlx::query(
            r"
                SELECT
                    id, submitted_at, name, organization,
                    self_awareness, managing_emotions, motivating_oneself, empathy, social_skill
                FROM assessment_results
                ORDER BY submitted_at DESC, id DESC
                LIMIT ?1
            ",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(map_result_row(&row)?);
        }
        Ok(out)
    }
}

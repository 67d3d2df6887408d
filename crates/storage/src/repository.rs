use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ei_core::model::{Category, Participant, ScoreVector, SubmissionId};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("remote sheet rejected append with status {0}")]
    Rejected(u16),
}

/// Column headers of the result sheet, in cell order.
pub const RESULT_HEADERS: [&str; 8] = [
    "Timestamp",
    "Name",
    "Organization",
    "Self-Awareness",
    "Managing Emotions",
    "Motivating Oneself",
    "Empathy",
    "Social Skill",
];

/// One persisted submission: who, when, and the five totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub organization: String,
    pub scores: ScoreVector,
}

impl ResultRow {
    #[must_use]
    pub fn new(submitted_at: DateTime<Utc>, participant: &Participant, scores: ScoreVector) -> Self {
        Self {
            submitted_at,
            name: participant.name().to_owned(),
            organization: participant.organization().to_owned(),
            scores,
        }
    }

    /// Cell values matching [`RESULT_HEADERS`].
    #[must_use]
    pub fn cells(&self) -> Vec<String> {
        let mut cells = vec![
            self.submitted_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            self.name.clone(),
            self.organization.clone(),
        ];
        cells.extend(
            Category::ALL
                .into_iter()
                .map(|c| self.scores.get(c).to_string()),
        );
        cells
    }
}

/// Append-only sink for submission rows.
#[async_trait]
pub trait ResultSheet: Send + Sync {
    /// Append one row for a finished submission.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the row cannot be written.
    async fn append_row(&self, row: &ResultRow) -> Result<SubmissionId, StorageError>;
}

/// Simple in-memory sheet for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    rows: Arc<Mutex<Vec<ResultRow>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every appended row, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn rows(&self) -> Result<Vec<ResultRow>, StorageError> {
        let guard = self
            .rows
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl ResultSheet for InMemoryRepository {
    async fn append_row(&self, row: &ResultRow) -> Result<SubmissionId, StorageError> {
        let mut guard = self
            .rows
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.push(row.clone());
        let id = i64::try_from(guard.len())
            .map_err(|_| StorageError::Serialization("row id overflow".into()))?;
        Ok(SubmissionId::new(id))
    }
}

/// Result sheet behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub results: Arc<dyn ResultSheet>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_sheet(Arc::new(InMemoryRepository::new()))
    }

    #[must_use]
    pub fn from_sheet(results: Arc<dyn ResultSheet>) -> Self {
        Self { results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ei_core::time::fixed_now;

    fn row(name: &str) -> ResultRow {
        let participant = Participant::new(name, "Acme").unwrap();
        ResultRow::new(
            fixed_now(),
            &participant,
            ScoreVector::new(40, 41, 30, 20, 25).unwrap(),
        )
    }

    #[tokio::test]
    async fn appends_keep_order_and_assign_ids() {
        let repo = InMemoryRepository::new();
        let first = repo.append_row(&row("Ann")).await.unwrap();
        let second = repo.append_row(&row("Bob")).await.unwrap();
        assert_eq!(first, SubmissionId::new(1));
        assert_eq!(second, SubmissionId::new(2));

        let names: Vec<String> = repo.rows().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Ann".to_string(), "Bob".to_string()]);
    }

    #[test]
    fn cells_line_up_with_headers() {
        let cells = row("Ann").cells();
        assert_eq!(cells.len(), RESULT_HEADERS.len());
        assert_eq!(cells[0], "2023-11-14 22:13:20");
        assert_eq!(&cells[1..], &["Ann", "Acme", "40", "41", "30", "20", "25"]);
    }
}

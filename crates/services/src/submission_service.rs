use std::sync::Arc;

use ei_core::model::{Participant, ScoreVector, SubmissionId};
use storage::repository::{ResultRow, ResultSheet};
use tracing::{info, warn};

use crate::Clock;
use crate::error::SubmissionError;
use crate::requests::{SubmitAck, SubmitResultsRequest};

/// Appends one result row per finished assessment.
#[derive(Clone)]
pub struct SubmissionService {
    clock: Clock,
    sheet: Arc<dyn ResultSheet>,
}

impl SubmissionService {
    #[must_use]
    pub fn new(clock: Clock, sheet: Arc<dyn ResultSheet>) -> Self {
        Self { clock, sheet }
    }

    /// Validate a wire request and append its row.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::Request` before any side effect when the payload is
    /// missing data or out of range.
    /// Returns `SubmissionError::Storage` if the sheet rejects the row.
    pub async fn submit(&self, request: SubmitResultsRequest) -> Result<SubmitAck, SubmissionError> {
        let (participant, scores) = request.validate()?;
        self.record(&participant, scores).await?;
        Ok(SubmitAck {
            message: SubmitAck::SAVED,
        })
    }

    /// Append a row for already validated results.
    ///
    /// Failures are logged here, so fire-and-forget callers may drop the result.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::Storage` if the sheet rejects the row.
    pub async fn record(
        &self,
        participant: &Participant,
        scores: ScoreVector,
    ) -> Result<SubmissionId, SubmissionError> {
        let row = ResultRow::new(self.clock.now(), participant, scores);
        match self.sheet.append_row(&row).await {
            Ok(id) => {
                info!(submission = %id, organization = %row.organization, "results recorded");
                Ok(id)
            }
            Err(err) => {
                warn!(error = %err, "failed to record results");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ei_core::time::fixed_clock;
    use storage::repository::InMemoryRepository;

    #[tokio::test]
    async fn record_appends_timestamped_row() {
        let repo = InMemoryRepository::new();
        let service = SubmissionService::new(fixed_clock(), Arc::new(repo.clone()));
        let participant = Participant::new("Ann", "Acme").unwrap();
        let scores = ScoreVector::new(40, 40, 30, 20, 25).unwrap();

        let id = service.record(&participant, scores).await.unwrap();
        assert_eq!(id, SubmissionId::new(1));

        let rows = repo.rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].submitted_at, ei_core::time::fixed_now());
        assert_eq!(rows[0].scores, scores);
    }

    #[tokio::test]
    async fn invalid_request_has_no_side_effect() {
        let repo = InMemoryRepository::new();
        let service = SubmissionService::new(fixed_clock(), Arc::new(repo.clone()));
        let err = service
            .submit(SubmitResultsRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required data.");
        assert!(repo.rows().unwrap().is_empty());
    }
}

//! Wire shapes of the two boundary operations.
//!
//! Fields are optional so that a missing field surfaces as
//! `RequestError::MissingData` rather than a deserializer error.

use serde::{Deserialize, Serialize};

use ei_core::model::{Participant, ScoreVector};

use crate::error::RequestError;

/// Five category totals keyed by category code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoresPayload {
    #[serde(rename = "SA")]
    pub self_awareness: u16,
    #[serde(rename = "ME")]
    pub managing_emotions: u16,
    #[serde(rename = "MO")]
    pub motivating_oneself: u16,
    #[serde(rename = "E")]
    pub empathy: u16,
    #[serde(rename = "SS")]
    pub social_skill: u16,
}

impl From<ScoreVector> for ScoresPayload {
    fn from(scores: ScoreVector) -> Self {
        let [sa, me, mo, e, ss] = scores.totals();
        Self {
            self_awareness: sa,
            managing_emotions: me,
            motivating_oneself: mo,
            empathy: e,
            social_skill: ss,
        }
    }
}

impl TryFrom<ScoresPayload> for ScoreVector {
    type Error = ei_core::Error;

    fn try_from(p: ScoresPayload) -> Result<Self, Self::Error> {
        Ok(ScoreVector::new(
            p.self_awareness,
            p.managing_emotions,
            p.motivating_oneself,
            p.empathy,
            p.social_skill,
        )?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResultsRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub scores: Option<ScoresPayload>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub scores: Option<ScoresPayload>,
    #[serde(default)]
    pub chart_image: Option<String>,
}

/// Acknowledgment returned after a row is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitAck {
    pub message: &'static str,
}

impl SubmitAck {
    pub const SAVED: &'static str = "Results saved successfully!";
}

pub(crate) fn validate(
    name: Option<&str>,
    organization: Option<&str>,
    scores: Option<ScoresPayload>,
) -> Result<(Participant, ScoreVector), RequestError> {
    let (Some(name), Some(organization), Some(scores)) = (name, organization, scores) else {
        return Err(RequestError::MissingData);
    };
    let participant = Participant::new(name, organization).map_err(ei_core::Error::from)?;
    let scores = ScoreVector::try_from(scores)?;
    Ok((participant, scores))
}

impl SubmitResultsRequest {
    /// Validated identity and scores.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` when a field is absent, blank or out of range.
    pub fn validate(&self) -> Result<(Participant, ScoreVector), RequestError> {
        validate(self.name.as_deref(), self.organization.as_deref(), self.scores)
    }
}

impl GenerateReportRequest {
    /// Validated identity and scores; the chart image is handled separately.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` when a field is absent, blank or out of range.
    pub fn validate(&self) -> Result<(Participant, ScoreVector), RequestError> {
        validate(self.name.as_deref(), self.organization.as_deref(), self.scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ei_core::model::{IdentityError, ScoreError};

    #[test]
    fn parses_original_json_shape() {
        let json = r#"{"name":"Ann","organization":"Acme",
            "scores":{"SA":40,"ME":40,"MO":30,"E":20,"SS":25},
            "chartImage":"data:image/png;base64,AAAA"}"#;
        let request: GenerateReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.chart_image.as_deref(), Some("data:image/png;base64,AAAA"));
        let (participant, scores) = request.validate().unwrap();
        assert_eq!(participant.name(), "Ann");
        assert_eq!(scores, ScoreVector::new(40, 40, 30, 20, 25).unwrap());
    }

    #[test]
    fn absent_fields_are_missing_data() {
        let request: SubmitResultsRequest =
            serde_json::from_str(r#"{"name":"Ann","organization":"Acme"}"#).unwrap();
        assert_eq!(request.validate(), Err(RequestError::MissingData));
    }

    #[test]
    fn blank_identity_and_out_of_range_scores_are_invalid() {
        let scores = ScoresPayload::from(ScoreVector::new(30, 30, 30, 30, 30).unwrap());
        let request = SubmitResultsRequest {
            name: Some("  ".into()),
            organization: Some("Acme".into()),
            scores: Some(scores),
        };
        assert_eq!(
            request.validate(),
            Err(RequestError::Invalid(IdentityError::EmptyName.into()))
        );

        let request = SubmitResultsRequest {
            name: Some("Ann".into()),
            organization: Some("Acme".into()),
            scores: Some(ScoresPayload {
                social_skill: 51,
                ..scores
            }),
        };
        assert!(matches!(
            request.validate(),
            Err(RequestError::Invalid(ei_core::Error::Score(
                ScoreError::OutOfRange { .. }
            )))
        ));
    }
}

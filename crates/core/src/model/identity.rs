use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdentityError {
    #[error("name cannot be empty")]
    EmptyName,

    #[error("organization cannot be empty")]
    EmptyOrganization,
}

/// Who took the assessment, as entered on the welcome step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    name: String,
    organization: String,
}

impl Participant {
    /// Creates a participant from trimmed, non-empty fields.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError` if either field is blank.
    pub fn new(
        name: impl Into<String>,
        organization: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        let name = name.into().trim().to_owned();
        let organization = organization.into().trim().to_owned();
        if name.is_empty() {
            return Err(IdentityError::EmptyName);
        }
        if organization.is_empty() {
            return Err(IdentityError::EmptyOrganization);
        }
        Ok(Self { name, organization })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// File name for this participant's PDF report.
    ///
    /// Runs of whitespace in the name become a single hyphen.
    #[must_use]
    pub fn report_file_name(&self) -> String {
        let slug = self.name.split_whitespace().collect::<Vec<_>>().join("-");
        format!("EI-Report-{slug}.pdf")
    }
}

//! Google Sheets result sheet using the `values:append` endpoint.
//!
//! Token minting is left to the deployment; this adapter only needs a
//! bearer token that is valid for the spreadsheet.

use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use ei_core::model::SubmissionId;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::repository::{ResultRow, ResultSheet, Storage, StorageError};

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/v4";
const DEFAULT_RANGE: &str = "Sheet1!A1";

#[derive(Clone, Debug)]
pub struct SheetsConfig {
    pub base_url: String,
    pub spreadsheet_id: String,
    pub access_token: String,
    pub range: String,
}

impl SheetsConfig {
    /// Reads `EI_SHEETS_*` variables; `None` unless both id and token are set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let spreadsheet_id = non_empty_var("EI_SHEETS_SPREADSHEET_ID")?;
        let access_token = non_empty_var("EI_SHEETS_ACCESS_TOKEN")?;
        let base_url = non_empty_var("EI_SHEETS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let range = non_empty_var("EI_SHEETS_RANGE").unwrap_or_else(|| DEFAULT_RANGE.into());
        Some(Self {
            base_url,
            spreadsheet_id,
            access_token,
            range,
        })
    }

    /// Endpoint that appends rows after the last filled row of `range`.
    #[must_use]
    pub fn append_url(&self) -> String {
        format!(
            "{}/spreadsheets/{}/values/{}:append",
            self.base_url.trim_end_matches('/'),
            self.spreadsheet_id,
            self.range
        )
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Clone)]
pub struct GoogleSheetsRepository {
    client: Client,
    config: SheetsConfig,
}

impl GoogleSheetsRepository {
    #[must_use]
    pub fn new(config: SheetsConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SheetsConfig {
        &self.config
    }
}

#[derive(Debug, Serialize)]
struct AppendRequest {
    #[serde(rename = "majorDimension")]
    major_dimension: &'static str,
    values: Vec<Vec<String>>,
}

impl AppendRequest {
    fn single_row(row: &ResultRow) -> Self {
        Self {
            major_dimension: "ROWS",
            values: vec![row.cells()],
        }
    }
}

#[derive(Debug, Deserialize)]
struct AppendResponse {
    updates: Option<AppendUpdates>,
}

#[derive(Debug, Deserialize)]
struct AppendUpdates {
    #[serde(rename = "updatedRange")]
    updated_range: Option<String>,
}

/// Row number from an A1 range such as `Sheet1!A7:H7`.
fn row_number(updated_range: &str) -> Option<i64> {
    let cells = updated_range.rsplit('!').next()?;
    let first = cells.split(':').next()?;
    let digits: String = first.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

#[async_trait]
impl ResultSheet for GoogleSheetsRepository {
    async fn append_row(&self, row: &ResultRow) -> Result<SubmissionId, StorageError> {
        let response = self
            .client
            .post(self.config.append_url())
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .bearer_auth(&self.config.access_token)
            .json(&AppendRequest::single_row(row))
            .send()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "sheets append rejected");
            return Err(StorageError::Rejected(status.as_u16()));
        }

        let body: AppendResponse = response
            .json()
            .await
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let id = body
            .updates
            .and_then(|u| u.updated_range)
            .as_deref()
            .and_then(row_number)
            .unwrap_or_default();
        Ok(SubmissionId::new(id))
    }
}

impl Storage {
    /// Build a `Storage` that appends to a Google spreadsheet.
    #[must_use]
    pub fn google_sheets(config: SheetsConfig) -> Self {
        let results: Arc<dyn ResultSheet> = Arc::new(GoogleSheetsRepository::new(config));
        Self::from_sheet(results)
    }
}

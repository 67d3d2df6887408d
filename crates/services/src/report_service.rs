use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use ei_core::model::{Participant, ScoreVector};
use ei_core::report::build_report;
use render::{ChartImage, ReportRenderer};
use tracing::{info, warn};

use crate::Clock;
use crate::error::ReportError;
use crate::requests::GenerateReportRequest;

pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(30);

/// A finished PDF and the name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Builds report content and renders it on a blocking worker under a deadline.
#[derive(Clone)]
pub struct ReportService {
    clock: Clock,
    renderer: Arc<dyn ReportRenderer>,
    timeout: Duration,
}

impl ReportService {
    #[must_use]
    pub fn new(clock: Clock, renderer: Arc<dyn ReportRenderer>) -> Self {
        Self {
            clock,
            renderer,
            timeout: DEFAULT_RENDER_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validate a wire request and render its report.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Request` for missing or invalid fields, `ChartEncoding`
    /// for an undecodable chart image, and the render errors of [`Self::render`].
    pub async fn generate(&self, request: GenerateReportRequest) -> Result<RenderedReport, ReportError> {
        let (participant, scores) = request.validate()?;
        let chart = match request.chart_image.as_deref() {
            Some(encoded) if !encoded.trim().is_empty() => Some(decode_chart_image(encoded)?),
            _ => None,
        };
        self.render(participant, scores, chart).await
    }

    /// Render a report for validated results.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Render` if the renderer fails, `Timeout` if it does not
    /// finish in time, and `Worker` if the blocking task panics.
    pub async fn render(
        &self,
        participant: Participant,
        scores: ScoreVector,
        chart: Option<ChartImage>,
    ) -> Result<RenderedReport, ReportError> {
        let file_name = participant.report_file_name();
        let content = build_report(participant, scores, self.clock.today());
        let renderer = Arc::clone(&self.renderer);
        let started = Instant::now();

        let task = tokio::task::spawn_blocking(move || renderer.render(&content, chart.as_ref()));
        let outcome = match tokio::time::timeout(self.timeout, task).await {
            Err(_) => Err(ReportError::Timeout(self.timeout)),
            Ok(Err(join)) => Err(ReportError::Worker(join.to_string())),
            Ok(Ok(rendered)) => rendered.map_err(ReportError::from),
        };

        match outcome {
            Ok(bytes) => {
                info!(
                    file = %file_name,
                    bytes = bytes.len(),
                    elapsed_ms = started.elapsed().as_millis(),
                    "report rendered"
                );
                Ok(RenderedReport { file_name, bytes })
            }
            Err(err) => {
                warn!(file = %file_name, error = %err, "report rendering failed");
                Err(err)
            }
        }
    }
}

/// Accepts a `data:image/png;base64,` URL or bare base64.
///
/// # Errors
///
/// Returns `ReportError::ChartEncoding` for invalid base64 and
/// `ReportError::Render` when the bytes are not a PNG.
pub fn decode_chart_image(encoded: &str) -> Result<ChartImage, ReportError> {
    let trimmed = encoded.trim();
    let payload = match trimmed.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => trimmed,
    };
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| ReportError::ChartEncoding(e.to_string()))?;
    Ok(ChartImage::from_png(bytes)?)
}

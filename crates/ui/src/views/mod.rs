mod assessment;
mod chart;
mod results;
mod section;
mod state;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assessment::AssessmentView;
pub use chart::RadarChart;
pub use results::ResultsView;
pub use state::{DownloadState, ViewError, ViewState};

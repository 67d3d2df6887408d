mod assessment_vm;
mod chart_vm;
mod results_vm;

pub use assessment_vm::{LikertOptionVm, QuestionVm, SectionVm, likert_options, map_section};
pub use chart_vm::{AxisLabelVm, RadarChartVm, RingVm, SpokeVm, VertexVm, map_radar_chart};
pub use results_vm::{BreakdownRowVm, ResultsVm, map_results};

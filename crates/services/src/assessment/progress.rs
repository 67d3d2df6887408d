/// Aggregated view of assessment progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssessmentProgress {
    pub answered: usize,
    pub total: usize,
    pub fraction: f64,
    pub section: Option<usize>,
    pub section_count: usize,
}

impl AssessmentProgress {
    /// Progress bar width as a whole percentage.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u8 {
        (self.fraction.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered == self.total
    }
}

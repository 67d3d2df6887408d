//! Radar chart data and geometry shared by every chart target.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::bank::{MAX_CATEGORY_SCORE, MIN_CATEGORY_SCORE};
use crate::model::{Category, ScoreVector};

/// Axis order of the radar chart, clockwise from the top.
pub const CHART_ORDER: [Category; 5] = [
    Category::SelfAwareness,
    Category::Empathy,
    Category::MotivatingOneself,
    Category::ManagingEmotions,
    Category::SocialSkill,
];

/// Distance between concentric grid rings, in score points.
pub const TICK_STEP: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPoint {
    pub category: Category,
    pub value: u16,
}

impl ChartPoint {
    /// Axis label split onto two lines at the first space.
    #[must_use]
    pub fn label_lines(&self) -> Vec<&'static str> {
        let title = self.category.title();
        match title.split_once(' ') {
            Some((first, rest)) => vec![first, rest],
            None => vec![title],
        }
    }
}

/// Scores reordered for the radar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPayload {
    points: Vec<ChartPoint>,
}

impl ChartPayload {
    #[must_use]
    pub fn from_scores(scores: &ScoreVector) -> Self {
        let points = CHART_ORDER
            .into_iter()
            .map(|category| ChartPoint {
                category,
                value: scores.get(category),
            })
            .collect();
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    #[must_use]
    pub fn values(&self) -> Vec<u16> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// Screen-space geometry for a radar chart centred on the origin.
///
/// Coordinates use a downward y axis (SVG convention); PDF callers flip y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    radius: f64,
    axes: usize,
}

impl RadarGeometry {
    #[must_use]
    pub fn new(radius: f64, axes: usize) -> Self {
        Self { radius, axes }
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[allow(clippy::cast_precision_loss)]
    fn angle(&self, axis: usize) -> f64 {
        TAU * axis as f64 / self.axes.max(1) as f64 - FRAC_PI_2
    }

    /// Share of the radius a score occupies; the scale starts at the minimum score.
    #[must_use]
    pub fn fraction(value: u16) -> f64 {
        let clamped = value.clamp(MIN_CATEGORY_SCORE, MAX_CATEGORY_SCORE);
        f64::from(clamped - MIN_CATEGORY_SCORE)
            / f64::from(MAX_CATEGORY_SCORE - MIN_CATEGORY_SCORE)
    }

    /// Point on `axis` at `fraction` of the radius.
    #[must_use]
    pub fn point(&self, axis: usize, fraction: f64) -> (f64, f64) {
        let angle = self.angle(axis);
        let r = self.radius * fraction;
        (r * angle.cos(), r * angle.sin())
    }

    /// Vertices of the score polygon, one per axis.
    #[must_use]
    pub fn polygon(&self, payload: &ChartPayload) -> Vec<(f64, f64)> {
        payload
            .points()
            .iter()
            .enumerate()
            .map(|(axis, p)| self.point(axis, Self::fraction(p.value)))
            .collect()
    }

    /// Grid rings as polygons, one per tick above the minimum.
    #[must_use]
    pub fn rings(&self) -> Vec<(u16, Vec<(f64, f64)>)> {
        (MIN_CATEGORY_SCORE + TICK_STEP..=MAX_CATEGORY_SCORE)
            .step_by(usize::from(TICK_STEP))
            .map(|tick| {
                let fraction = Self::fraction(tick);
                let ring = (0..self.axes).map(|axis| self.point(axis, fraction)).collect();
                (tick, ring)
            })
            .collect()
    }

    /// Outer end of each spoke.
    #[must_use]
    pub fn spokes(&self) -> Vec<(f64, f64)> {
        (0..self.axes).map(|axis| self.point(axis, 1.0)).collect()
    }

    /// Anchor for an axis label, pushed `gap` beyond the outer ring.
    #[must_use]
    pub fn label_anchor(&self, axis: usize, gap: f64) -> (f64, f64) {
        self.point(axis, 1.0 + gap / self.radius.max(f64::EPSILON))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn payload_uses_canonical_order() {
        let scores = ScoreVector::new(11, 22, 33, 44, 50).unwrap();
        let payload = ChartPayload::from_scores(&scores);
        let codes: Vec<&str> = payload.points().iter().map(|p| p.category.code()).collect();
        assert_eq!(codes, vec!["SA", "E", "MO", "ME", "SS"]);
        assert_eq!(payload.values(), vec![11, 44, 33, 22, 50]);
    }

    #[test]
    fn scale_starts_at_minimum_score() {
        assert!(close(RadarGeometry::fraction(10), 0.0));
        assert!(close(RadarGeometry::fraction(30), 0.5));
        assert!(close(RadarGeometry::fraction(50), 1.0));
    }

    #[test]
    fn first_axis_points_up() {
        let geometry = RadarGeometry::new(100.0, 5);
        let (x, y) = geometry.point(0, 1.0);
        assert!(close(x, 0.0));
        assert!(close(y, -100.0));
    }

    #[test]
    fn rings_cover_every_tick() {
        let geometry = RadarGeometry::new(100.0, 5);
        let ticks: Vec<u16> = geometry.rings().iter().map(|(t, _)| *t).collect();
        assert_eq!(ticks, vec![20, 30, 40, 50]);
        assert!(geometry.rings().iter().all(|(_, ring)| ring.len() == 5));
    }

    #[test]
    fn labels_split_on_first_space() {
        let point = ChartPoint {
            category: Category::ManagingEmotions,
            value: 20,
        };
        assert_eq!(point.label_lines(), vec!["Managing", "Emotions"]);
        let point = ChartPoint {
            category: Category::SelfAwareness,
            value: 20,
        };
        assert_eq!(point.label_lines(), vec!["Self-Awareness"]);
    }
}

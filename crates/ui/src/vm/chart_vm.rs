use ei_core::chart::{ChartPayload, RadarGeometry};

const VIEW_SIZE: f64 = 400.0;
const RADIUS: f64 = 130.0;
const LABEL_GAP: f64 = 22.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RingVm {
    pub tick: u16,
    pub points: String,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpokeVm {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VertexVm {
    pub x: f64,
    pub y: f64,
    pub tooltip: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabelVm {
    pub x: f64,
    pub y: f64,
    pub anchor: &'static str,
    pub lines: Vec<&'static str>,
}

/// SVG-ready radar chart in a square `view_box`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadarChartVm {
    pub view_box: String,
    pub rings: Vec<RingVm>,
    pub spokes: Vec<SpokeVm>,
    pub area: String,
    pub vertices: Vec<VertexVm>,
    pub labels: Vec<AxisLabelVm>,
}

fn shift((x, y): (f64, f64)) -> (f64, f64) {
    let center = VIEW_SIZE / 2.0;
    (center + x, center + y)
}

fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|&p| {
            let (x, y) = shift(p);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn map_radar_chart(payload: &ChartPayload) -> RadarChartVm {
    let geometry = RadarGeometry::new(RADIUS, payload.points().len());
    let center = VIEW_SIZE / 2.0;

    let rings = geometry
        .rings()
        .into_iter()
        .map(|(tick, ring)| {
            let (label_x, label_y) = ring.first().map_or((center, center), |&p| shift(p));
            RingVm {
                tick,
                points: points_attr(&ring),
                label_x: label_x + 4.0,
                label_y: label_y + 12.0,
            }
        })
        .collect();

    let spokes = geometry
        .spokes()
        .into_iter()
        .map(|p| {
            let (x2, y2) = shift(p);
            SpokeVm {
                x1: center,
                y1: center,
                x2,
                y2,
            }
        })
        .collect();

    let polygon = geometry.polygon(payload);
    let vertices = polygon
        .iter()
        .zip(payload.points())
        .map(|(&p, point)| {
            let (x, y) = shift(p);
            VertexVm {
                x,
                y,
                tooltip: format!("{}: {} / 50", point.category.title(), point.value),
            }
        })
        .collect();

    let labels = payload
        .points()
        .iter()
        .enumerate()
        .map(|(axis, point)| {
            let (x, y) = shift(geometry.label_anchor(axis, LABEL_GAP));
            let anchor = if (x - center).abs() < 1.0 {
                "middle"
            } else if x < center {
                "end"
            } else {
                "start"
            };
            AxisLabelVm {
                x,
                y,
                anchor,
                lines: point.label_lines(),
            }
        })
        .collect();

    RadarChartVm {
        view_box: format!("0 0 {VIEW_SIZE} {VIEW_SIZE}"),
        rings,
        spokes,
        area: points_attr(&polygon),
        vertices,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ei_core::model::ScoreVector;

    #[test]
    fn chart_has_one_entry_per_axis() {
        let scores = ScoreVector::new(50, 10, 30, 20, 40).unwrap();
        let vm = map_radar_chart(&ChartPayload::from_scores(&scores));
        assert_eq!(vm.view_box, "0 0 400 400");
        assert_eq!(vm.rings.len(), 4);
        assert_eq!(vm.spokes.len(), 5);
        assert_eq!(vm.vertices.len(), 5);
        assert_eq!(vm.labels[0].anchor, "middle");
        assert_eq!(vm.labels[0].lines, vec!["Self-Awareness"]);
        assert_eq!(vm.vertices[0].tooltip, "Self-Awareness: 50 / 50");
        // Self-Awareness at 50 sits on the outer ring straight above the centre.
        assert!((vm.vertices[0].x - 200.0).abs() < 1e-9);
        assert!((vm.vertices[0].y - 70.0).abs() < 1e-9);
    }
}

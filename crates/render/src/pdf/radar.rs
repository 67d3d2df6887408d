//! Vector radar chart, drawn when the caller supplies no bitmap.

use ei_core::chart::{ChartPayload, RadarGeometry};

use super::canvas::{Canvas, Font, text_width};
use super::color::{ACCENT_ORANGE, BODY_TEXT, GRID_LINE, MUTED_TEXT, RADAR_FILL};

const LABEL_SIZE: f32 = 10.0;
const TICK_SIZE: f32 = 7.0;

#[allow(clippy::cast_possible_truncation)]
fn at(center: (f32, f32), offset: (f64, f64)) -> (f32, f32) {
    (center.0 + offset.0 as f32, center.1 + offset.1 as f32)
}

/// Draws the chart centred on `center` (top-down page coordinates).
pub fn draw(canvas: &mut Canvas, payload: &ChartPayload, center: (f32, f32), radius: f32) {
    let geometry = RadarGeometry::new(f64::from(radius), payload.points().len());

    for (tick, ring) in geometry.rings() {
        let ring: Vec<(f32, f32)> = ring.into_iter().map(|p| at(center, p)).collect();
        canvas.polygon(&ring, None, Some((GRID_LINE, 0.5)));
        if let Some(top) = ring.first() {
            canvas.text(
                top.0 + 3.0,
                top.1 + 3.0,
                Font::Regular,
                TICK_SIZE,
                MUTED_TEXT,
                &tick.to_string(),
            );
        }
    }
    for spoke in geometry.spokes() {
        canvas.line(center, at(center, spoke), 0.5, GRID_LINE);
    }

    let polygon: Vec<(f32, f32)> = geometry
        .polygon(payload)
        .into_iter()
        .map(|p| at(center, p))
        .collect();
    canvas.polygon(&polygon, Some(RADAR_FILL), Some((ACCENT_ORANGE, 2.0)));
    for vertex in &polygon {
        let dot = [
            (vertex.0 - 2.0, vertex.1 - 2.0),
            (vertex.0 + 2.0, vertex.1 - 2.0),
            (vertex.0 + 2.0, vertex.1 + 2.0),
            (vertex.0 - 2.0, vertex.1 + 2.0),
        ];
        canvas.polygon(&dot, Some(ACCENT_ORANGE), None);
    }

    for (axis, point) in payload.points().iter().enumerate() {
        let anchor = at(center, geometry.label_anchor(axis, 18.0));
        let lines = point.label_lines();
        let leading = LABEL_SIZE * 1.2;
        #[allow(clippy::cast_precision_loss)]
        let block = leading * lines.len() as f32;
        let mut baseline = anchor.1 - block / 2.0 + LABEL_SIZE;
        for line in lines {
            let width = text_width(line, Font::Bold, LABEL_SIZE);
            let x = if (anchor.0 - center.0).abs() < 1.0 {
                anchor.0 - width / 2.0
            } else if anchor.0 < center.0 {
                anchor.0 - width
            } else {
                anchor.0
            };
            canvas.text(x, baseline, Font::Bold, LABEL_SIZE, BODY_TEXT, line);
            baseline += leading;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ei_core::model::ScoreVector;

    #[test]
    fn draws_labels_for_every_axis() {
        let scores = ScoreVector::new(40, 20, 30, 25, 50).unwrap();
        let payload = ChartPayload::from_scores(&scores);
        let mut canvas = Canvas::new();
        draw(&mut canvas, &payload, (297.0, 450.0), 150.0);
        let content = canvas.into_content();
        let shown = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .count();
        // Four tick labels plus eight label lines; three titles wrap.
        assert_eq!(shown, 4 + 8);
    }
}

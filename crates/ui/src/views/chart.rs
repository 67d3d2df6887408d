use dioxus::prelude::*;

use crate::vm::RadarChartVm;

/// Radar chart of the five category totals, drawn as inline SVG.
#[component]
pub fn RadarChart(chart: RadarChartVm) -> Element {
    rsx! {
        svg {
            class: "radar-chart",
            view_box: "{chart.view_box}",
            role: "img",
            "aria-label": "Emotional intelligence profile",

            for ring in chart.rings.iter() {
                polygon { key: "ring-{ring.tick}", class: "radar-ring", points: "{ring.points}" }
            }
            for ring in chart.rings.iter() {
                text {
                    key: "tick-{ring.tick}",
                    class: "radar-tick",
                    x: "{ring.label_x}",
                    y: "{ring.label_y}",
                    "{ring.tick}"
                }
            }
            for (idx, spoke) in chart.spokes.iter().enumerate() {
                line {
                    key: "spoke-{idx}",
                    class: "radar-spoke",
                    x1: "{spoke.x1}",
                    y1: "{spoke.y1}",
                    x2: "{spoke.x2}",
                    y2: "{spoke.y2}",
                }
            }

            polygon { class: "radar-area", points: "{chart.area}" }

            for (idx, vertex) in chart.vertices.iter().enumerate() {
                circle {
                    key: "vertex-{idx}",
                    class: "radar-vertex",
                    cx: "{vertex.x}",
                    cy: "{vertex.y}",
                    r: "4",
                    title { "{vertex.tooltip}" }
                }
            }

            for (idx, label) in chart.labels.iter().enumerate() {
                text {
                    key: "label-{idx}",
                    class: "radar-label",
                    x: "{label.x}",
                    y: "{label.y}",
                    text_anchor: "{label.anchor}",
                    for (line_idx, line) in label.lines.iter().enumerate() {
                        tspan {
                            x: "{label.x}",
                            dy: if line_idx == 0 { "0" } else { "1.2em" },
                            "{line}"
                        }
                    }
                }
            }
        }
    }
}

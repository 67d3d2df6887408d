//! Thin drawing layer over PDF content operators.
//!
//! Callers work top-down in points from the upper-left corner of an A4 page;
//! the canvas flips to PDF's bottom-up space when emitting operators.

use lopdf::Object;
use lopdf::content::{Content, Operation};

use super::color::Rgb;

pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;
pub const MARGIN: f32 = 50.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    /// Resource name the page dictionary maps to the font object.
    pub const fn resource(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
        }
    }

    pub const fn base_font(self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
        }
    }
}

// Helvetica advance widths for 0x20..=0x7E, per 1000 units of font size.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, 556, 556, 556,
    556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, 1015, 667, 667, 722, 722, 667,
    611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667,
    667, 611, 278, 278, 278, 469, 556, 333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500,
    222, 833, 556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Approximate rendered width of `text` in points.
#[must_use]
pub fn text_width(text: &str, font: Font, size: f32) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| {
            let code = u32::from(c);
            if (0x20..=0x7E).contains(&code) {
                u32::from(HELVETICA_WIDTHS[(code - 0x20) as usize])
            } else {
                556
            }
        })
        .sum();
    let scale = match font {
        Font::Regular => 1.0,
        Font::Bold => 1.06,
    };
    #[allow(clippy::cast_precision_loss)]
    let width = units as f32 * size / 1000.0 * scale;
    width
}

/// Greedy word wrap against `max_width`. Overlong words get a line to themselves.
#[must_use]
pub fn wrap(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if text_width(&candidate, font, size) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_owned()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Encodes text for a WinAnsi base font; unmappable characters become `?`.
#[must_use]
pub fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            c if u32::from(c) < 0x80 => c as u8,
            c if (0xA0..=0xFF).contains(&u32::from(c)) => u32::from(c) as u8,
            _ => b'?',
        })
        .collect()
}

fn real(v: f32) -> Object {
    Object::Real(v)
}

fn name(n: &str) -> Object {
    Object::Name(n.as_bytes().to_vec())
}

/// Accumulates the operators of one page.
#[derive(Debug, Default)]
pub struct Canvas {
    ops: Vec<Operation>,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn flip(y: f32) -> f32 {
        PAGE_HEIGHT - y
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.ops.push(Operation::new(operator, operands));
    }

    fn fill_color(&mut self, color: Rgb) {
        self.push("rg", vec![real(color.0), real(color.1), real(color.2)]);
    }

    fn stroke_color(&mut self, color: Rgb) {
        self.push("RG", vec![real(color.0), real(color.1), real(color.2)]);
    }

    /// Single line of text with its baseline at `y`.
    pub fn text(&mut self, x: f32, y: f32, font: Font, size: f32, color: Rgb, text: &str) {
        self.push("BT", vec![]);
        self.push("Tf", vec![name(font.resource()), real(size)]);
        self.fill_color(color);
        self.push("Td", vec![real(x), real(Self::flip(y))]);
        self.push("Tj", vec![Object::string_literal(win_ansi(text))]);
        self.push("ET", vec![]);
    }

    /// Single line centred on the page.
    pub fn centered_text(&mut self, y: f32, font: Font, size: f32, color: Rgb, text: &str) {
        let x = (PAGE_WIDTH - text_width(text, font, size)) / 2.0;
        self.text(x.max(0.0), y, font, size, color, text);
    }

    /// Wrapped block whose first baseline sits at `y`. Returns the y after the block.
    #[allow(clippy::too_many_arguments)]
    pub fn paragraph(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        font: Font,
        size: f32,
        color: Rgb,
        text: &str,
    ) -> f32 {
        let leading = size * 1.5;
        let mut baseline = y;
        for line in wrap(text, font, size, width) {
            self.text(x, baseline, font, size, color, &line);
            baseline += leading;
        }
        baseline
    }

    /// Wrapped block with every line centred on the page.
    pub fn centered_paragraph(
        &mut self,
        y: f32,
        width: f32,
        font: Font,
        size: f32,
        color: Rgb,
        text: &str,
    ) -> f32 {
        let leading = size * 1.5;
        let mut baseline = y;
        for line in wrap(text, font, size, width) {
            self.centered_text(baseline, font, size, color, &line);
            baseline += leading;
        }
        baseline
    }

    /// Filled rectangle whose top-left corner is at (`x`, `y`).
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.fill_color(color);
        self.push(
            "re",
            vec![real(x), real(Self::flip(y + height)), real(width), real(height)],
        );
        self.push("f", vec![]);
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgb) {
        self.stroke_color(color);
        self.push("w", vec![real(width)]);
        self.push("m", vec![real(from.0), real(Self::flip(from.1))]);
        self.push("l", vec![real(to.0), real(Self::flip(to.1))]);
        self.push("S", vec![]);
    }

    /// Closed path through `points`; filled and/or stroked.
    pub fn polygon(&mut self, points: &[(f32, f32)], fill: Option<Rgb>, stroke: Option<(Rgb, f32)>) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if let Some(color) = fill {
            self.fill_color(color);
        }
        if let Some((color, width)) = stroke {
            self.stroke_color(color);
            self.push("w", vec![real(width)]);
        }
        self.push("m", vec![real(first.0), real(Self::flip(first.1))]);
        for point in rest {
            self.push("l", vec![real(point.0), real(Self::flip(point.1))]);
        }
        let paint = match (fill.is_some(), stroke.is_some()) {
            (true, true) => "b",
            (true, false) => "f",
            (false, true) => "s",
            (false, false) => "n",
        };
        self.push(paint, vec![]);
    }

    /// Draws a named image XObject into the box with top-left (`x`, `y`).
    pub fn image(&mut self, resource: &str, x: f32, y: f32, width: f32, height: f32) {
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                real(width),
                real(0.0),
                real(0.0),
                real(height),
                real(x),
                real(Self::flip(y + height)),
            ],
        );
        self.push("Do", vec![name(resource)]);
        self.push("Q", vec![]);
    }

    #[must_use]
    pub fn into_content(self) -> Content {
        Content {
            operations: self.ops,
        }
    }
}

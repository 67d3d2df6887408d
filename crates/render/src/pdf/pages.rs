//! Layout of the four report pages.

use ei_core::copy;
use ei_core::interpretation::Tier;
use ei_core::report::ReportContent;

use super::canvas::{CONTENT_WIDTH, Canvas, Font, MARGIN, PAGE_WIDTH, text_width, wrap};
use super::color::{
    ACCENT_ORANGE, BODY_TEXT, BRAND_RED, CARD_BACKGROUND, MUTED_TEXT, Rgb, tier_color,
};
use super::radar;

pub const CHART_RESOURCE: &str = "Im1";

const HEADING_SIZE: f32 = 20.0;
const BODY_SIZE: f32 = 11.0;
const CARD_PADDING: f32 = 12.0;
const CARD_BORDER: f32 = 5.0;
const CHART_BOX: (f32, f32) = (400.0, 360.0);
const IDENTITY_INDENT: f32 = 95.0;

fn page_heading(canvas: &mut Canvas, text: &str) -> f32 {
    canvas.centered_paragraph(80.0, CONTENT_WIDTH, Font::Bold, HEADING_SIZE, BRAND_RED, text) + 10.0
}

fn underline(canvas: &mut Canvas, y: f32) {
    canvas.line((MARGIN, y), (PAGE_WIDTH - MARGIN, y), 2.0, ACCENT_ORANGE);
}

/// Card with a coloured left border; returns the y below it.
fn card(canvas: &mut Canvas, top: f32, height: f32, border: Rgb) -> f32 {
    canvas.fill_rect(MARGIN, top, CONTENT_WIDTH, height, CARD_BACKGROUND);
    canvas.fill_rect(MARGIN, top, CARD_BORDER, height, border);
    top + height
}

fn block_height(text: &str, font: Font, size: f32, width: f32) -> f32 {
    #[allow(clippy::cast_precision_loss)]
    let lines = wrap(text, font, size, width).len() as f32;
    lines * size * 1.5
}

/// Bold label followed by a regular value on the same line, wrapping the value.
fn labelled(canvas: &mut Canvas, x: f32, y: f32, width: f32, label: &str, value: &str) -> f32 {
    canvas.text(x, y, Font::Bold, BODY_SIZE, BODY_TEXT, label);
    let offset = text_width(label, Font::Bold, BODY_SIZE) + 4.0;
    canvas.paragraph(x + offset, y, width - offset, Font::Regular, BODY_SIZE, BODY_TEXT, value)
}

/// Page 1: header, identity block, chart, caption.
pub fn profile(content: &ReportContent, chart_size: Option<(u32, u32)>) -> Canvas {
    let mut canvas = Canvas::new();
    let mut y = canvas.centered_paragraph(
        70.0,
        CONTENT_WIDTH,
        Font::Bold,
        22.0,
        BRAND_RED,
        copy::ASSESSMENT_TITLE,
    );
    canvas.centered_text(y + 2.0, Font::Regular, 13.0, MUTED_TEXT, "Assessment Results");
    y += 20.0;
    underline(&mut canvas, y);
    y += 28.0;

    let rows = [
        ("Name:", content.participant.name().to_owned()),
        ("Organization:", content.participant.organization().to_owned()),
        ("Date:", content.formatted_date()),
    ];
    for (label, value) in &rows {
        canvas.text(MARGIN, y, Font::Bold, 12.0, BODY_TEXT, label);
        y = canvas.paragraph(
            MARGIN + IDENTITY_INDENT,
            y,
            CONTENT_WIDTH - IDENTITY_INDENT,
            Font::Regular,
            12.0,
            BODY_TEXT,
            value,
        ) + 2.0;
    }
    y += 10.0;

    let (box_w, box_h) = CHART_BOX;
    match chart_size {
        Some((w, h)) => {
            #[allow(clippy::cast_precision_loss)]
            let (w, h) = (w as f32, h as f32);
            let scale = (box_w / w).min(box_h / h);
            let (draw_w, draw_h) = (w * scale, h * scale);
            let x = (PAGE_WIDTH - draw_w) / 2.0;
            let top = y + (box_h - draw_h) / 2.0;
            canvas.image(CHART_RESOURCE, x, top, draw_w, draw_h);
        }
        None => {
            let center = (PAGE_WIDTH / 2.0, y + box_h / 2.0);
            radar::draw(&mut canvas, &content.chart(), center, box_h / 2.0 - 50.0);
        }
    }
    y += box_h + 24.0;

    canvas.centered_paragraph(
        y,
        CONTENT_WIDTH - 40.0,
        Font::Regular,
        BODY_SIZE,
        MUTED_TEXT,
        copy::CHART_CAPTION,
    );
    canvas
}

/// Page 2: key insights and one score card per category.
pub fn summary(content: &ReportContent) -> Canvas {
    let mut canvas = Canvas::new();
    let mut y = page_heading(&mut canvas, "Results Summary");

    let inner_x = MARGIN + CARD_PADDING;
    let inner_w = CONTENT_WIDTH - 2.0 * CARD_PADDING;
    let strongest = content.strongest_titles();
    let weakest = content.weakest_titles();
    let height = CARD_PADDING * 2.0
        + 26.0
        + block_height(&strongest, Font::Regular, BODY_SIZE, inner_w - 150.0)
        + block_height(&weakest, Font::Regular, BODY_SIZE, inner_w - 200.0);
    canvas.fill_rect(MARGIN, y, CONTENT_WIDTH, height, CARD_BACKGROUND);
    let mut inner = y + CARD_PADDING + 15.0;
    canvas.text(inner_x, inner, Font::Bold, 16.0, BODY_TEXT, "Key Insights");
    inner += 26.0;
    inner = labelled(
        &mut canvas,
        inner_x,
        inner,
        inner_w,
        "Your highest score is in:",
        &strongest,
    );
    labelled(
        &mut canvas,
        inner_x,
        inner,
        inner_w,
        "Your area with the lowest score is:",
        &weakest,
    );
    y += height + 16.0;

    for result in &content.results {
        let tier = result.interpretation.tier;
        let bottom = card(&mut canvas, y, 52.0, tier_color(result.interpretation.color));
        let x = MARGIN + CARD_BORDER + CARD_PADDING;
        canvas.text(x, y + 20.0, Font::Bold, 14.0, BRAND_RED, result.category.title());
        let score = format!("Score: {} / 50 - ", result.score);
        canvas.text(x, y + 40.0, Font::Regular, BODY_SIZE, BODY_TEXT, &score);
        canvas.text(
            x + text_width(&score, Font::Regular, BODY_SIZE),
            y + 40.0,
            Font::Bold,
            BODY_SIZE,
            BODY_TEXT,
            copy::tier_heading(tier),
        );
        y = bottom + 10.0;
    }
    canvas
}

/// Page 3: what each tier means.
pub fn legend() -> Canvas {
    let mut canvas = Canvas::new();
    let mut y = page_heading(&mut canvas, "Understanding Your Scores");
    y = canvas.centered_paragraph(
        y,
        CONTENT_WIDTH,
        Font::Regular,
        BODY_SIZE,
        BODY_TEXT,
        copy::LEGEND_INTRO,
    ) + 14.0;

    let inner_x = MARGIN + CARD_BORDER + CARD_PADDING;
    let inner_w = CONTENT_WIDTH - CARD_BORDER - 2.0 * CARD_PADDING;
    for tier in Tier::ALL {
        let (low, high) = tier.range();
        let heading = format!("{} ({low}-{high})", copy::tier_heading(tier));
        let description = copy::tier_description(tier);
        let height = CARD_PADDING * 2.0
            + 22.0
            + block_height(description, Font::Regular, BODY_SIZE, inner_w);
        let color = tier_color(tier.color());
        let bottom = card(&mut canvas, y, height, color);
        canvas.text(inner_x, y + CARD_PADDING + 12.0, Font::Bold, 13.0, color, &heading);
        canvas.paragraph(
            inner_x,
            y + CARD_PADDING + 34.0,
            inner_w,
            Font::Regular,
            BODY_SIZE,
            BODY_TEXT,
            description,
        );
        y = bottom + 14.0;
    }
    canvas
}

/// Page 4: development advice and contact footer.
pub fn next_steps(content: &ReportContent) -> Canvas {
    let mut canvas = Canvas::new();
    let mut y = page_heading(&mut canvas, "Understanding Your Profile & Next Steps");
    y = canvas.paragraph(
        MARGIN,
        y,
        CONTENT_WIDTH,
        Font::Regular,
        BODY_SIZE,
        BODY_TEXT,
        copy::NEXT_STEPS_INTRO,
    ) + 8.0;

    for step in &content.next_steps {
        canvas.text(MARGIN, y, Font::Bold, 13.0, BRAND_RED, step.category.title());
        y = canvas.paragraph(
            MARGIN,
            y + 18.0,
            CONTENT_WIDTH,
            Font::Regular,
            BODY_SIZE,
            BODY_TEXT,
            step.advice,
        ) + 10.0;
    }

    y += 20.0;
    underline(&mut canvas, y);
    canvas.centered_paragraph(
        y + 28.0,
        CONTENT_WIDTH,
        Font::Regular,
        BODY_SIZE,
        MUTED_TEXT,
        copy::CONTACT_FOOTER,
    );
    canvas
}

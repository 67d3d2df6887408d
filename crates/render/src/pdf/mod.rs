mod canvas;
mod color;
mod image;
mod pages;
mod radar;

use ei_core::report::ReportContent;
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use tracing::debug;

use crate::{ChartImage, RenderError, ReportRenderer};
use canvas::{Font, PAGE_HEIGHT, PAGE_WIDTH};

/// Four-page A4 report built directly with lopdf.
///
/// Uses the standard Helvetica faces, so no font files are embedded.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn font_object(font: Font) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    }
}

fn add_page(doc: &mut Document, parent: ObjectId, content: &Content) -> Result<Object, RenderError> {
    let stream = Stream::new(dictionary! {}, content.encode()?);
    let content_id = doc.add_object(stream);
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => parent,
        "Contents" => content_id,
    });
    Ok(page_id.into())
}

impl ReportRenderer for PdfRenderer {
    fn render(
        &self,
        content: &ReportContent,
        chart: Option<&ChartImage>,
    ) -> Result<Vec<u8>, RenderError> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let regular_id = doc.add_object(font_object(Font::Regular));
        let bold_id = doc.add_object(font_object(Font::Bold));

        let mut xobjects = Dictionary::new();
        let mut chart_size = None;
        if let Some(image) = chart {
            let (image_id, size) = image::add_chart_image(&mut doc, image)?;
            chart_size = Some(size);
            xobjects.set(pages::CHART_RESOURCE, image_id);
        }

        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                Font::Regular.resource() => regular_id,
                Font::Bold.resource() => bold_id,
            },
            "XObject" => xobjects,
        });

        let canvases = [
            pages::profile(content, chart_size),
            pages::summary(content),
            pages::legend(),
            pages::next_steps(content),
        ];
        let mut kids = Vec::with_capacity(canvases.len());
        for canvas in canvases {
            kids.push(add_page(&mut doc, pages_id, &canvas.into_content())?);
        }

        let count = i64::try_from(kids.len()).unwrap_or(i64::MAX);
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        let info_id = doc.add_object(dictionary! {
            "Title" => Object::string_literal("EI Assessment Results"),
            "Subject" => Object::string_literal(canvas::win_ansi(content.participant.name())),
        });
        doc.trailer.set("Root", catalog_id);
        doc.trailer.set("Info", info_id);
        doc.compress();

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)?;
        debug!(
            bytes = bytes.len(),
            embedded_chart = chart.is_some(),
            "rendered report"
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ei_core::model::{Participant, ScoreVector};
    use ei_core::report::build_report;

    #[test]
    fn vector_chart_render_has_four_pages() {
        let report = build_report(
            Participant::new("Ada", "Engines").unwrap(),
            ScoreVector::new(40, 40, 30, 20, 25).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        );
        let bytes = PdfRenderer::new().render(&report, None).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 4);
    }
}

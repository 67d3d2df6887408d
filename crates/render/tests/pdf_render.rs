use chrono::NaiveDate;
use ei_core::model::{Participant, ScoreVector};
use ei_core::report::{ReportContent, build_report};
use lopdf::{Dictionary, Document, Object, Stream};
use render::{ChartImage, PdfRenderer, RenderError, ReportRenderer};

// 2x2 RGB PNG.
const TINY_PNG: [u8; 73] = [
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x02, 0x08, 0x02, 0x00, 0x00, 0x00, 0xfd, 0xd4, 0x9a,
    0x73, 0x00, 0x00, 0x00, 0x10, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0xf8, 0x5a, 0xc3, 0x00,
    0x44, 0x0c, 0x10, 0x0a, 0x00, 0x2c, 0x3e, 0x05, 0xc5, 0xf7, 0x8e, 0xfa, 0xbe, 0x00, 0x00, 0x00,
    0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

fn report() -> ReportContent {
    build_report(
        Participant::new("Grace Hopper", "Navy").unwrap(),
        ScoreVector::new(40, 40, 30, 20, 25).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
    )
}

fn page_text(doc: &Document, page: u32) -> String {
    let pages = doc.get_pages();
    let id = pages[&page];
    let bytes = doc.get_page_content(id).unwrap();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[test]
fn renders_four_page_pdf_without_chart_image() {
    let bytes = PdfRenderer::new().render(&report(), None).unwrap();
    assert!(bytes.starts_with(b"%PDF"));

    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 4);

    let profile = page_text(&doc, 1);
    assert!(profile.contains("Grace Hopper"));
    assert!(profile.contains("March 5, 2024"));
    assert!(profile.contains("Self-Awareness"));

    let summary = page_text(&doc, 2);
    assert!(summary.contains("Results Summary"));
    assert!(summary.contains("Self-Awareness, Managing Emotions"));
    assert!(summary.contains("Area of Strength"));

    let legend = page_text(&doc, 3);
    assert!(legend.contains("Needs More Consistent Attention"));
    assert!(legend.contains("(35-50)"));

    let steps = page_text(&doc, 4);
    assert!(steps.contains("hello@carnelianco.com"));
}

#[test]
fn embeds_supplied_chart_image() {
    let chart = ChartImage::from_png(TINY_PNG.to_vec()).unwrap();
    let bytes = PdfRenderer::new().render(&report(), Some(&chart)).unwrap();
    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 4);
    assert!(page_text(&doc, 1).contains("/Im1 Do"));
}

#[test]
fn undecodable_chart_image_is_an_error() {
    let mut broken = TINY_PNG[..16].to_vec();
    broken.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
    let chart = ChartImage::from_png(broken).unwrap();
    let err = PdfRenderer::new().render(&report(), Some(&chart)).unwrap_err();
    assert!(matches!(err, RenderError::Image(_)));
}

fn rgba_chart(width: u32, height: u32) -> ChartImage {
    let mut data = Vec::new();
    for y in 0..height {
        for x in 0..width {
            // Transparent background with an opaque red diagonal band.
            let alpha = if x.abs_diff(y) < 4 { 255 } else { 0 };
            data.extend_from_slice(&[200, 30, 30, alpha]);
        }
    }
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&data).unwrap();
    }
    ChartImage::from_png(out).unwrap()
}

fn stream_bytes(stream: &Stream) -> Vec<u8> {
    stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone())
}

fn chart_xobject(doc: &Document) -> (&Dictionary, Vec<u8>) {
    doc.objects
        .values()
        .find_map(|object| match object {
            Object::Stream(stream) if stream.dict.get(b"SMask").is_ok() => {
                Some((&stream.dict, stream_bytes(stream)))
            }
            _ => None,
        })
        .expect("image with soft mask")
}

#[test]
fn rgba_chart_image_is_embedded_as_rgb_with_soft_mask() {
    let chart = rgba_chart(40, 30);
    let bytes = PdfRenderer::new().render(&report(), Some(&chart)).unwrap();
    let doc = Document::load_mem(&bytes).unwrap();
    assert!(page_text(&doc, 1).contains("/Im1 Do"));

    let (dict, pixels) = chart_xobject(&doc);
    assert_eq!(dict.get(b"ColorSpace").unwrap().as_name().unwrap(), b"DeviceRGB");
    assert_eq!(dict.get(b"BitsPerComponent").unwrap().as_i64().unwrap(), 8);
    assert_eq!(dict.get(b"Width").unwrap().as_i64().unwrap(), 40);
    assert_eq!(dict.get(b"Height").unwrap().as_i64().unwrap(), 30);
    assert_eq!(pixels.len(), 40 * 30 * 3);

    let mask_id = dict.get(b"SMask").unwrap().as_reference().unwrap();
    let mask = doc.get_object(mask_id).unwrap().as_stream().unwrap();
    assert_eq!(mask.dict.get(b"ColorSpace").unwrap().as_name().unwrap(), b"DeviceGray");
    assert_eq!(mask.dict.get(b"BitsPerComponent").unwrap().as_i64().unwrap(), 8);
    assert_eq!(stream_bytes(mask).len(), 40 * 30);
}

use std::io::Cursor;

use lopdf::{Document, ObjectId, Stream, dictionary};
use png::{ColorType, Decoder, Transformations};

use crate::{ChartImage, RenderError};

/// 8-bit RGB pixels plus an optional 8-bit alpha plane.
struct Pixels {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
    alpha: Option<Vec<u8>>,
}

fn decode(image: &ChartImage) -> Result<Pixels, RenderError> {
    let mut decoder = Decoder::new(Cursor::new(image.bytes()));
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| RenderError::Image(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| RenderError::Image(e.to_string()))?;
    let data = &buf[..frame.buffer_size()];

    let (rgb, alpha) = match frame.color_type {
        ColorType::Rgb => (data.to_vec(), None),
        ColorType::Rgba => {
            let mut rgb = Vec::with_capacity(data.len() / 4 * 3);
            let mut alpha = Vec::with_capacity(data.len() / 4);
            for px in data.chunks_exact(4) {
                rgb.extend_from_slice(&px[..3]);
                alpha.push(px[3]);
            }
            (rgb, Some(alpha))
        }
        ColorType::Grayscale => (data.iter().flat_map(|&g| [g, g, g]).collect(), None),
        ColorType::GrayscaleAlpha => {
            let mut rgb = Vec::with_capacity(data.len() / 2 * 3);
            let mut alpha = Vec::with_capacity(data.len() / 2);
            for px in data.chunks_exact(2) {
                rgb.extend_from_slice(&[px[0], px[0], px[0]]);
                alpha.push(px[1]);
            }
            (rgb, Some(alpha))
        }
        // Palettes are expanded by `normalize_to_color8`.
        ColorType::Indexed => {
            return Err(RenderError::Image("unexpanded palette image".into()));
        }
    };

    Ok(Pixels {
        width: frame.width,
        height: frame.height,
        rgb,
        alpha: alpha.filter(|plane| plane.iter().any(|&a| a != u8::MAX)),
    })
}

fn image_stream(width: u32, height: u32, color_space: &str, data: Vec<u8>) -> Stream {
    Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(width),
            "Height" => i64::from(height),
            "ColorSpace" => color_space,
            "BitsPerComponent" => 8_i64,
        },
        data,
    )
}

/// Adds the chart as a `DeviceRGB` image XObject, with an `SMask` when the PNG
/// has real transparency. Returns the object id and the pixel size.
///
/// Streams are left unfiltered; `Document::compress` applies `FlateDecode`.
pub(crate) fn add_chart_image(
    doc: &mut Document,
    image: &ChartImage,
) -> Result<(ObjectId, (u32, u32)), RenderError> {
    let pixels = decode(image)?;
    let mut stream = image_stream(pixels.width, pixels.height, "DeviceRGB", pixels.rgb);
    if let Some(alpha) = pixels.alpha {
        let mask_id = doc.add_object(image_stream(pixels.width, pixels.height, "DeviceGray", alpha));
        stream.dict.set("SMask", mask_id);
    }
    let id = doc.add_object(stream);
    Ok((id, (pixels.width, pixels.height)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(width: u32, height: u32, color: ColorType, data: &[u8]) -> ChartImage {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        ChartImage::from_png(out).unwrap()
    }

    #[test]
    fn rgba_is_split_into_rgb_and_alpha() {
        let data = [10, 20, 30, 0, 40, 50, 60, 255];
        let pixels = decode(&encode(2, 1, ColorType::Rgba, &data)).unwrap();
        assert_eq!((pixels.width, pixels.height), (2, 1));
        assert_eq!(pixels.rgb, vec![10, 20, 30, 40, 50, 60]);
        assert_eq!(pixels.alpha, Some(vec![0, 255]));
    }

    #[test]
    fn opaque_alpha_is_dropped() {
        let data = [1, 2, 3, 255];
        let pixels = decode(&encode(1, 1, ColorType::Rgba, &data)).unwrap();
        assert_eq!(pixels.rgb, vec![1, 2, 3]);
        assert!(pixels.alpha.is_none());
    }

    #[test]
    fn grayscale_expands_to_rgb() {
        let pixels = decode(&encode(2, 1, ColorType::Grayscale, &[0, 200])).unwrap();
        assert_eq!(pixels.rgb, vec![0, 0, 0, 200, 200, 200]);
        assert!(pixels.alpha.is_none());
    }
}

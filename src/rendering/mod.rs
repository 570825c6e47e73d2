//! Rendering: realize a [`Scene`](crate::layout::Scene) as PNG bytes or SVG
//! markup. Layout decides geometry; these modules only paint.

pub mod raster;
pub mod vector;

use image::codecs::png::PngEncoder;
use image::{imageops, ColorType, ImageEncoder, RgbaImage};

use crate::color::Color;
use crate::error::Result;
use crate::layout::Rect;
use crate::recolor::recolor;

/// An encoded raster asset.
#[derive(Debug, Clone)]
pub struct RasterAsset {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

/// Resize the master logo to a scene's placement rectangle and apply the
/// optional silhouette recolor. The placement already encodes the
/// shrink-to-fit decision, so the resize here is exact.
pub fn prepare_logo(master: &RgbaImage, placement: &Rect, target: Option<Color>) -> RgbaImage {
    let resized = if (master.width(), master.height()) == (placement.width, placement.height) {
        master.clone()
    } else {
        imageops::resize(
            master,
            placement.width,
            placement.height,
            imageops::FilterType::Lanczos3,
        )
    };
    match target {
        Some(color) => recolor(&resized, color),
        None => resized,
    }
}

/// Encode an RGBA image as PNG bytes. The encoder settings are fixed, so the
/// same pixels always produce the same bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ColorType::Rgba8,
    )?;
    Ok(buf)
}

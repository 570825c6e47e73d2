//! Raster realization of scenes.
//!
//! Paints the background fill, alpha-composites the prepared logo bitmap at
//! its placement offset, rasterizes the wordmark text, and encodes the canvas
//! as PNG. Text goes through the SVG text primitive and `resvg`, so raster
//! and vector output share one source of glyph truth.

use image::{imageops, Rgba, RgbaImage};

use crate::color::Fill;
use crate::error::{Error, Result};
use crate::layout::{Background, Canvas, Scene, TextRun};
use crate::rendering::{encode_png, vector, RasterAsset};

/// Render a scene to PNG bytes. `logo` must already be recolored and resized
/// to the scene's placement rectangle (see
/// [`prepare_logo`](crate::rendering::prepare_logo)).
pub fn render(scene: &Scene, logo: &RgbaImage) -> Result<RasterAsset> {
    if (logo.width(), logo.height()) != (scene.logo.width, scene.logo.height) {
        return Err(Error::RenderError(format!(
            "logo bitmap {}x{} does not match placement {}x{}",
            logo.width(),
            logo.height(),
            scene.logo.width,
            scene.logo.height
        )));
    }

    let Canvas { width, height } = scene.canvas;
    let mut canvas = RgbaImage::new(width, height);
    paint_background(&mut canvas, &scene.background);
    imageops::overlay(&mut canvas, logo, scene.logo.x as i64, scene.logo.y as i64);
    if let Some(run) = &scene.text {
        draw_text(&mut canvas, run, scene.canvas)?;
    }

    Ok(RasterAsset { width, height, png_data: encode_png(&canvas)? })
}

fn paint_background(canvas: &mut RgbaImage, background: &Background) {
    match background {
        Background::None => {}
        Background::Rect(Fill::Solid(color)) => {
            let px = Rgba([color.r, color.g, color.b, color.a]);
            for pixel in canvas.pixels_mut() {
                *pixel = px;
            }
        }
        Background::Rect(Fill::LinearGradient { start, end }) => {
            let width = canvas.width();
            let span = (width.saturating_sub(1)).max(1) as f64;
            for x in 0..width {
                let color = start.lerp(*end, x as f64 / span);
                let px = Rgba([color.r, color.g, color.b, color.a]);
                for y in 0..canvas.height() {
                    canvas.put_pixel(x, y, px);
                }
            }
        }
        Background::Circle { fill: None, .. } => {}
        Background::Circle { cx, cy, radius, fill: Some(color) } => {
            let px = Rgba([color.r, color.g, color.b, color.a]);
            let (cx, cy) = (*cx as f64, *cy as f64);
            let r2 = (*radius as f64) * (*radius as f64);
            for y in 0..canvas.height() {
                for x in 0..canvas.width() {
                    let (dx, dy) = (x as f64 - cx, y as f64 - cy);
                    if dx * dx + dy * dy <= r2 {
                        canvas.put_pixel(x, y, px);
                    }
                }
            }
        }
    }
}

/// Rasterize the text run over the canvas. Glyphs come from the system font
/// database; when no fonts are available the run is skipped with a warning,
/// leaving the rest of the asset intact.
fn draw_text(canvas: &mut RgbaImage, run: &TextRun, size: Canvas) -> Result<()> {
    let mut options = resvg::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    if options.fontdb.is_empty() {
        log::warn!("no system fonts available; skipping wordmark text");
        return Ok(());
    }

    let svg = vector::text_document(run, size);
    let tree = resvg::usvg::Tree::from_str(&svg, &options)
        .map_err(|e| Error::RenderError(format!("text rasterization failed: {e}")))?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width, size.height)
        .ok_or_else(|| Error::RenderError("zero-sized canvas".into()))?;
    resvg::render(&tree, resvg::tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    let mut layer = RgbaImage::new(size.width, size.height);
    for (src, dst) in pixmap.pixels().iter().zip(layer.pixels_mut()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    imageops::overlay(canvas, &layer, 0, 0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::layout::{self, LayoutConfig};
    use crate::rendering::prepare_logo;

    fn sample_logo() -> RgbaImage {
        RgbaImage::from_pixel(64, 64, Rgba([212, 175, 55, 255]))
    }

    fn decode(asset: &RasterAsset) -> RgbaImage {
        image::load_from_memory(&asset.png_data).unwrap().to_rgba8()
    }

    #[test]
    fn mismatched_logo_is_rejected() {
        let scene = layout::layout_icon_bare((64, 64), layout::Canvas::square(100));
        let wrong = RgbaImage::new(10, 10);
        assert!(matches!(render(&scene, &wrong), Err(Error::RenderError(_))));
    }

    #[test]
    fn circle_background_leaves_corners_transparent() {
        let config = LayoutConfig {
            canvas: layout::Canvas::square(100),
            background: Some(Fill::Solid(color::GREEN)),
            logo_color: Some(color::WHITE),
            text_color: None,
        };
        let scene = layout::layout_icon_circle(&config, (64, 64)).unwrap();
        let logo = prepare_logo(&sample_logo(), &scene.logo, Some(color::WHITE));
        let img = decode(&render(&scene, &logo).unwrap());
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        // Inside the disc but above the logo box: background green.
        assert_eq!(img.get_pixel(50, 10).0, [2, 255, 207, 255]);
    }

    #[test]
    fn gradient_spans_start_to_end() {
        let config = LayoutConfig {
            canvas: layout::Canvas::new(300, 100),
            background: Some(Fill::LinearGradient {
                start: color::GRADIENT_START,
                end: color::GRADIENT_END,
            }),
            logo_color: None,
            text_color: None,
        };
        let scene = layout::layout_banner(&config, "TOS", (64, 64));
        let logo = prepare_logo(&sample_logo(), &scene.logo, None);
        let img = decode(&render(&scene, &logo).unwrap());
        assert_eq!(img.get_pixel(0, 0).0, [0, 50, 0, 255]);
        assert_eq!(img.get_pixel(299, 0).0, [0, 200, 100, 255]);
    }

    #[test]
    fn transparent_banner_keeps_alpha_zero_outside_logo() {
        let config = LayoutConfig {
            canvas: layout::Canvas::new(300, 100),
            background: None,
            logo_color: None,
            text_color: None,
        };
        let scene = layout::layout_banner(&config, "TOS", (64, 64));
        let logo = prepare_logo(&sample_logo(), &scene.logo, None);
        let img = decode(&render(&scene, &logo).unwrap());
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        // Logo interior stays gold and opaque.
        let cx = scene.logo.x as u32 + scene.logo.width / 2;
        let cy = scene.logo.y as u32 + scene.logo.height / 2;
        assert_eq!(img.get_pixel(cx, cy).0, [212, 175, 55, 255]);
    }
}

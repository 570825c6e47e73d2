//! Parametric asset layout.
//!
//! Pure functions mapping a configuration tuple and the logo's intrinsic size
//! to a renderer-agnostic [`Scene`]. Both the raster and the vector renderer
//! consume the same scene, so the geometry of a banner or icon is decided
//! exactly once, here.

use serde::{Deserialize, Serialize};

use crate::color::{Color, Fill};
use crate::error::{Error, Result};

/// Logo fraction of the canvas height (banners) or side (icons).
const LOGO_SCALE: f64 = 0.6;
/// Banner logo left offset as a fraction of canvas height.
const BANNER_LOGO_OFFSET: f64 = 0.2;
/// Gap between logo and wordmark as a fraction of canvas height.
const BANNER_TEXT_SPACING: f64 = 0.15;
/// Wordmark font size as a fraction of canvas height.
const BANNER_FONT_SCALE: f64 = 0.35;

/// Output canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: u32) -> Self {
        Self { width: side, height: side }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self { width: 1500, height: 500 }
    }
}

/// Placement rectangle on a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// A positioned run of wordmark text. `y` is the vertical center of the run
/// (middle baseline in SVG terms).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub content: String,
    pub x: i32,
    pub y: i32,
    pub font_size: u32,
    pub fill: Color,
}

/// Fully resolved background specification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Background {
    /// No background: the raster canvas stays fully transparent and the
    /// vector form emits no shape.
    None,
    /// Canvas-filling rectangle.
    Rect(Fill),
    /// Disc centered on a square canvas. `fill: None` keeps the disc outline
    /// in the vector form (`fill="none"`) and paints nothing in raster form.
    Circle { cx: u32, cy: u32, radius: u32, fill: Option<Color> },
}

/// A renderer-agnostic description of one asset's visual layout.
///
/// Produced fresh per configuration and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub canvas: Canvas,
    pub background: Background,
    /// Logo placement. Aspect ratio matches the source under uniform
    /// shrink-to-fit scaling, except for wordmark banners which pin the logo
    /// to a fixed square.
    pub logo: Rect,
    pub text: Option<TextRun>,
}

/// Immutable layout input, one per configuration-table entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    pub canvas: Canvas,
    /// `None` means a transparent background.
    pub background: Option<Fill>,
    /// Recolor target for the logo silhouette; `None` keeps the intrinsic
    /// color. Consumed by the generator, not by layout itself.
    pub logo_color: Option<Color>,
    /// Wordmark fill; `None` omits the text run entirely (icons).
    pub text_color: Option<Color>,
}

/// Wordmark-banner input: the canvas is derived from the text, not configured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordmarkConfig {
    pub background: Option<Fill>,
    pub text_color: Color,
}

/// Side of the fixed logo square on wordmark banners.
pub const WORDMARK_LOGO_SIDE: u32 = 250;
/// Padding around wordmark-banner content.
const WORDMARK_PADDING: u32 = 60;
/// Gap between logo and text on wordmark banners.
const WORDMARK_SPACING: u32 = 40;
/// Wordmark-banner font size.
const WORDMARK_FONT_SIZE: u32 = 90;
/// Per-character advance as a fraction of the font size. Coarse metric for a
/// bold sans-serif wordmark, used to size the canvas around the text.
const CHAR_ADVANCE: f64 = 0.6;

/// Uniform shrink-to-fit: scale `intrinsic` down (never up) to fit `bounds`,
/// preserving aspect ratio. Dimensions round to the nearest pixel with a
/// floor of 1.
pub fn fit_within(intrinsic: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (w, h) = intrinsic;
    if w == 0 || h == 0 {
        return (0, 0);
    }
    let scale = f64::min(bounds.0 as f64 / w as f64, bounds.1 as f64 / h as f64).min(1.0);
    let out_w = ((w as f64 * scale).round() as u32).max(1);
    let out_h = ((h as f64 * scale).round() as u32).max(1);
    (out_w, out_h)
}

/// Lay out a banner: logo on the left at 0.6x canvas height, wordmark to its
/// right, both vertically centered.
pub fn layout_banner(config: &LayoutConfig, wordmark: &str, logo_intrinsic: (u32, u32)) -> Scene {
    let Canvas { height, .. } = config.canvas;
    let bound = (height as f64 * LOGO_SCALE) as u32;
    let (lw, lh) = fit_within(logo_intrinsic, (bound, bound));
    let logo_x = (height as f64 * BANNER_LOGO_OFFSET) as i32;
    let logo_y = ((height - lh) / 2) as i32;

    let text = config.text_color.map(|fill| TextRun {
        content: wordmark.to_string(),
        x: logo_x + lw as i32 + (height as f64 * BANNER_TEXT_SPACING) as i32,
        y: (height / 2) as i32,
        font_size: (height as f64 * BANNER_FONT_SCALE) as u32,
        fill,
    });

    Scene {
        canvas: config.canvas,
        background: match config.background {
            None => Background::None,
            Some(fill) => Background::Rect(fill),
        },
        logo: Rect { x: logo_x, y: logo_y, width: lw, height: lh },
        text,
    }
}

/// Lay out a circular icon: disc of radius S/2 - 1 centered on an SxS canvas,
/// logo at 0.6x S centered. A transparent background keeps the disc shape in
/// the vector form but paints nothing.
pub fn layout_icon_circle(config: &LayoutConfig, logo_intrinsic: (u32, u32)) -> Result<Scene> {
    let side = icon_side(config.canvas);
    let fill = match config.background {
        None => None,
        Some(Fill::Solid(c)) if c.is_transparent() => None,
        Some(Fill::Solid(c)) => Some(c),
        Some(Fill::LinearGradient { .. }) => {
            return Err(Error::ConfigError("circle icons support solid fills only".into()))
        }
    };
    Ok(Scene {
        canvas: config.canvas,
        background: Background::Circle {
            cx: side / 2,
            cy: side / 2,
            radius: side / 2 - 1,
            fill,
        },
        logo: centered_logo(side, logo_intrinsic, LOGO_SCALE),
        text: None,
    })
}

/// Lay out a square icon: canvas-filling background, logo at 0.6x S centered.
///
/// Square icons composite against an opaque canvas in both output formats, so
/// a transparent or missing fill is rejected rather than substituted.
pub fn layout_icon_square(config: &LayoutConfig, logo_intrinsic: (u32, u32)) -> Result<Scene> {
    let side = icon_side(config.canvas);
    let fill = match config.background {
        Some(Fill::Solid(c)) if !c.is_transparent() => c,
        Some(Fill::Solid(_)) | None => {
            return Err(Error::ConfigError("square icons require an opaque background".into()))
        }
        Some(Fill::LinearGradient { .. }) => {
            return Err(Error::ConfigError("square icons support solid fills only".into()))
        }
    };
    Ok(Scene {
        canvas: config.canvas,
        background: Background::Rect(Fill::Solid(fill)),
        logo: centered_logo(side, logo_intrinsic, LOGO_SCALE),
        text: None,
    })
}

/// Lay out a bare icon: no background, logo scaled to fit the whole canvas
/// and centered.
pub fn layout_icon_bare(logo_intrinsic: (u32, u32), canvas: Canvas) -> Scene {
    let side = icon_side(canvas);
    Scene {
        canvas,
        background: Background::None,
        logo: centered_logo(side, logo_intrinsic, 1.0),
        text: None,
    }
}

/// Lay out a content-sized wordmark banner: fixed logo square, padding on all
/// sides, canvas width derived from the estimated text width.
pub fn layout_wordmark_banner(config: &WordmarkConfig, text: &str) -> Scene {
    let text_w = estimate_text_width(text, WORDMARK_FONT_SIZE);
    let width = WORDMARK_PADDING * 2 + WORDMARK_LOGO_SIDE + WORDMARK_SPACING + text_w;
    let height = WORDMARK_PADDING * 2 + WORDMARK_LOGO_SIDE.max(WORDMARK_FONT_SIZE);
    let logo_x = WORDMARK_PADDING as i32;
    let logo_y = ((height - WORDMARK_LOGO_SIDE) / 2) as i32;

    Scene {
        canvas: Canvas::new(width, height),
        background: match config.background {
            None => Background::None,
            Some(fill) => Background::Rect(fill),
        },
        logo: Rect {
            x: logo_x,
            y: logo_y,
            width: WORDMARK_LOGO_SIDE,
            height: WORDMARK_LOGO_SIDE,
        },
        text: Some(TextRun {
            content: text.to_string(),
            x: logo_x + (WORDMARK_LOGO_SIDE + WORDMARK_SPACING) as i32,
            y: (height / 2) as i32,
            font_size: WORDMARK_FONT_SIZE,
            fill: config.text_color,
        }),
    }
}

/// Estimated pixel width of a wordmark at the given font size.
pub fn estimate_text_width(text: &str, font_size: u32) -> u32 {
    (text.chars().count() as f64 * font_size as f64 * CHAR_ADVANCE).ceil() as u32
}

fn icon_side(canvas: Canvas) -> u32 {
    debug_assert_eq!(canvas.width, canvas.height, "icon canvases are square");
    canvas.width
}

fn centered_logo(side: u32, logo_intrinsic: (u32, u32), scale: f64) -> Rect {
    let bound = (side as f64 * scale) as u32;
    let (lw, lh) = fit_within(logo_intrinsic, (bound, bound));
    Rect {
        x: ((side - lw) / 2) as i32,
        y: ((side - lh) / 2) as i32,
        width: lw,
        height: lh,
    }
}

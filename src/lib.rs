//! Brandforge
//!
//! Batch-generates branding assets (PNG and SVG banners and icons) from a
//! master logo image: silhouette recoloring, background compositing, and
//! wordmark text overlay, with identical geometry in both output formats.
//!
//! The crate splits into a pure layout engine and two renderers that consume
//! its scenes:
//!
//! - [`layout`] computes a renderer-agnostic [`Scene`] from a configuration
//!   tuple and the logo's intrinsic size
//! - [`rendering::raster`] realizes a scene as PNG bytes
//! - [`rendering::vector`] realizes the same scene as SVG markup
//! - [`generator`] walks the static variant tables in [`config`] and writes
//!   the full asset tree
//!
//! # Example
//!
//! ```no_run
//! use brandforge::color::{self, Fill};
//! use brandforge::layout::{self, Canvas, LayoutConfig};
//! use brandforge::rendering::{self, raster, vector};
//!
//! # fn main() -> brandforge::Result<()> {
//! let logo = image::open("logo/logo.png")?.to_rgba8();
//! let config = LayoutConfig {
//!     canvas: Canvas::new(1500, 500),
//!     background: Some(Fill::Solid(color::BLACK)),
//!     logo_color: None,
//!     text_color: Some(color::WHITE),
//! };
//! let scene = layout::layout_banner(&config, "TOS", (logo.width(), logo.height()));
//! let prepared = rendering::prepare_logo(&logo, &scene.logo, None);
//! let png = raster::render(&scene, &prepared)?;
//! let svg = vector::render(&scene, &vector::data_uri(&rendering::encode_png(&prepared)?));
//! # let _ = (png, svg);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod color;
pub mod config;
pub mod generator;
pub mod layout;
pub mod recolor;
pub mod rendering;

pub use layout::{Canvas, LayoutConfig, Scene};

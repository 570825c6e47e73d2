//! Batch generation tasks.
//!
//! Walks the variant tables, computes one scene per entry, and writes the
//! raster and vector realizations under the output layout rooted at `root`:
//! `banners/{png,svg}/<variant>.<ext>` and
//! `icons/{png,svg}/{circle,square,transparent}/<variant>.<ext>`.
//!
//! A missing source image is a soft-stop: the task logs an error line and
//! returns without generating, leaving any files written so far in place.

use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use image::{imageops, RgbaImage};

use crate::color::{Color, Fill};
use crate::config::{
    BANNERS_PNG_DIR, BANNERS_SVG_DIR, BANNER_CANVAS, BANNER_VARIANTS, ICONS_PNG_DIR,
    ICONS_SVG_DIR, ICON_SIZE, ICON_VARIANTS, LOGO_DIR, LOGO_SIZES, LOGO_SOURCE, MASTER_SOURCE,
    MASTER_TRANSPARENT_SOURCE, SILHOUETTE_VARIANTS, TRANSPARENT_SIZES, WORDMARK,
    WORDMARK_LONG, WORDMARK_VARIANTS,
};
use crate::error::{Error, Result};
use crate::layout::{self, Canvas, LayoutConfig, Scene, WordmarkConfig};
use crate::rendering::{self, raster, vector};

/// Load an RGBA source image, failing when the path does not exist.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(Error::MissingSource(path.to_path_buf()));
    }
    Ok(image::open(path)?.to_rgba8())
}

/// Soft-stop wrapper: a missing source logs an error and yields `None`.
fn load_source(path: &Path) -> Result<Option<RgbaImage>> {
    match load_image(path) {
        Ok(img) => Ok(Some(img)),
        Err(Error::MissingSource(p)) => {
            log::error!("source image not found: {}", p.display());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Generate the full banner and icon set from `logo/logo.png`.
pub fn generate_assets(root: &Path) -> Result<()> {
    let Some(logo) = load_source(&root.join(LOGO_SOURCE))? else {
        return Ok(());
    };
    generate_banners(root, &logo)?;
    generate_icons(root, &logo)?;
    log::info!("all banner and icon assets generated");
    Ok(())
}

fn generate_banners(root: &Path, logo: &RgbaImage) -> Result<()> {
    log::info!("generating banners...");
    let png_dir = root.join(BANNERS_PNG_DIR);
    let svg_dir = root.join(BANNERS_SVG_DIR);
    let intrinsic = (logo.width(), logo.height());

    for variant in BANNER_VARIANTS {
        let config = LayoutConfig {
            canvas: BANNER_CANVAS,
            background: variant.background,
            logo_color: variant.logo_color,
            text_color: Some(variant.text_color),
        };
        let scene = layout::layout_banner(&config, WORDMARK, intrinsic);
        write_asset(&png_dir, &svg_dir, variant.name, &scene, logo, variant.logo_color)?;
    }
    Ok(())
}

fn generate_icons(root: &Path, logo: &RgbaImage) -> Result<()> {
    let intrinsic = (logo.width(), logo.height());
    let canvas = Canvas::square(ICON_SIZE);

    log::info!("generating circle icons...");
    for variant in ICON_VARIANTS {
        let config = LayoutConfig {
            canvas,
            background: Some(Fill::Solid(variant.background)),
            logo_color: Some(variant.logo_color),
            text_color: None,
        };
        let scene = layout::layout_icon_circle(&config, intrinsic)?;
        write_asset(
            &root.join(ICONS_PNG_DIR).join("circle"),
            &root.join(ICONS_SVG_DIR).join("circle"),
            variant.name,
            &scene,
            logo,
            Some(variant.logo_color),
        )?;
    }

    log::info!("generating square icons...");
    for variant in ICON_VARIANTS {
        let config = LayoutConfig {
            canvas,
            background: Some(Fill::Solid(variant.background)),
            logo_color: Some(variant.logo_color),
            text_color: None,
        };
        let scene = layout::layout_icon_square(&config, intrinsic)?;
        write_asset(
            &root.join(ICONS_PNG_DIR).join("square"),
            &root.join(ICONS_SVG_DIR).join("square"),
            variant.name,
            &scene,
            logo,
            Some(variant.logo_color),
        )?;
    }

    log::info!("generating transparent icons...");
    for variant in SILHOUETTE_VARIANTS {
        let scene = layout::layout_icon_bare(intrinsic, canvas);
        write_asset(
            &root.join(ICONS_PNG_DIR).join("transparent"),
            &root.join(ICONS_SVG_DIR).join("transparent"),
            variant.name,
            &scene,
            logo,
            Some(variant.logo_color),
        )?;
    }
    Ok(())
}

/// Generate content-sized wordmark banners from `logo/logo.png`.
pub fn generate_wordmark_banners(root: &Path) -> Result<()> {
    let Some(logo) = load_source(&root.join(LOGO_SOURCE))? else {
        return Ok(());
    };
    log::info!("generating wordmark banners...");
    let png_dir = root.join(BANNERS_PNG_DIR);
    let svg_dir = root.join(BANNERS_SVG_DIR);

    for variant in WORDMARK_VARIANTS {
        let config = WordmarkConfig {
            background: variant.background,
            text_color: variant.text_color,
        };
        let scene = layout::layout_wordmark_banner(&config, WORDMARK_LONG);
        write_asset(&png_dir, &svg_dir, variant.name, &scene, &logo, None)?;
    }
    log::info!("all wordmark banners generated");
    Ok(())
}

/// Render one scene in both formats and write the pair of files.
fn write_asset(
    png_dir: &Path,
    svg_dir: &Path,
    name: &str,
    scene: &Scene,
    logo: &RgbaImage,
    logo_color: Option<Color>,
) -> Result<()> {
    fs::create_dir_all(png_dir)?;
    fs::create_dir_all(svg_dir)?;

    let prepared = rendering::prepare_logo(logo, &scene.logo, logo_color);

    let asset = raster::render(scene, &prepared)?;
    let png_path = png_dir.join(format!("{name}.png"));
    fs::write(&png_path, &asset.png_data)?;
    log::info!("  created {}", png_path.display());

    let href = vector::data_uri(&rendering::encode_png(&prepared)?);
    let svg_path = svg_dir.join(format!("{name}.svg"));
    fs::write(&svg_path, vector::render(scene, &href))?;
    log::info!("  created {}", svg_path.display());
    Ok(())
}

/// Derive the resized logo series from the master artwork.
pub fn generate_logos(root: &Path) -> Result<()> {
    let Some(master) = load_source(&root.join(MASTER_SOURCE))? else {
        return Ok(());
    };
    let dir = root.join(LOGO_DIR);
    fs::create_dir_all(&dir)?;

    log::info!("generating logo files...");
    for &size in LOGO_SIZES {
        write_resized(&dir, "logo", &master, size)?;
    }
    fs::write(dir.join("logo.png"), rendering::encode_png(&master)?)?;
    log::info!("  created {}", dir.join("logo.png").display());

    log::info!("generating transparent logo files...");
    let transparent_path = root.join(MASTER_TRANSPARENT_SOURCE);
    let transparent = if transparent_path.exists() {
        image::open(&transparent_path)?.to_rgba8()
    } else {
        match remove_background(&root.join(MASTER_SOURCE))? {
            Some(img) => img,
            None => {
                log::error!(
                    "transparent source not found: {}",
                    transparent_path.display()
                );
                return Ok(());
            }
        }
    };
    for &size in TRANSPARENT_SIZES {
        write_resized(&dir, "logo-transparent", &transparent, size)?;
    }
    fs::write(
        dir.join("logo-transparent.png"),
        rendering::encode_png(&transparent)?,
    )?;
    log::info!("  created {}", dir.join("logo-transparent.png").display());

    log::info!("all logo files generated");
    Ok(())
}

fn write_resized(dir: &Path, stem: &str, source: &RgbaImage, size: u32) -> Result<()> {
    let (w, h) = layout::fit_within((source.width(), source.height()), (size, size));
    let resized = imageops::resize(source, w, h, imageops::FilterType::Lanczos3);
    let path = dir.join(format!("{stem}-{size}x{size}.png"));
    fs::write(&path, rendering::encode_png(&resized)?)?;
    log::info!("  created {} ({}x{})", path.display(), w, h);
    Ok(())
}

/// Attempt background removal via the external `rembg` tool.
///
/// Returns `Ok(None)` when the tool is unavailable or fails; callers treat
/// that as a soft-stop, not a fault.
pub fn remove_background(source: &Path) -> Result<Option<RgbaImage>> {
    let output = std::env::temp_dir().join("brandforge-rembg.png");
    let status = Command::new("rembg").arg("i").arg(source).arg(&output).status();
    match status {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!(
                "rembg not found; install it (`pip install rembg`) to derive transparent logos automatically"
            );
            Ok(None)
        }
        Err(e) => {
            log::warn!("background removal failed: {e}");
            Ok(None)
        }
        Ok(status) if !status.success() => {
            log::warn!("background removal exited with {status}");
            Ok(None)
        }
        Ok(_) => match image::open(&output) {
            Ok(img) => {
                let img = img.to_rgba8();
                let _ = fs::remove_file(&output);
                Ok(Some(img))
            }
            Err(e) => {
                log::warn!("background removal produced an unreadable image: {e}");
                Ok(None)
            }
        },
    }
}

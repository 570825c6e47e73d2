use std::fs;
use std::path::{Path, PathBuf};

use brandforge::generator;
use image::{Rgba, RgbaImage};

fn synthetic_logo() -> RgbaImage {
    let mut img = RgbaImage::new(64, 64);
    for y in 0..64i32 {
        for x in 0..64i32 {
            let (dx, dy) = (x - 32, y - 32);
            if dx * dx + dy * dy <= 28 * 28 {
                img.put_pixel(x as u32, y as u32, Rgba([212, 175, 55, 255]));
            }
        }
    }
    img
}

fn generated_root() -> PathBuf {
    let root = std::env::temp_dir().join(format!("brandforge-pixels-{}", std::process::id()));
    let _ = fs::remove_dir_all(&root);
    fs::create_dir_all(root.join("logo")).unwrap();
    synthetic_logo().save(root.join("logo/logo.png")).unwrap();
    generator::generate_assets(&root).unwrap();
    root
}

fn decode(path: &Path) -> RgbaImage {
    image::open(path).unwrap().to_rgba8()
}

#[test]
fn generated_assets_have_expected_pixels() {
    let root = generated_root();

    // Square icons composite against an opaque canvas everywhere.
    let square = decode(&root.join("icons/png/square/white_background_black_logo.png"));
    assert!(square.pixels().all(|p| p.0[3] == 255));
    assert_eq!(square.get_pixel(0, 0).0, [255, 255, 255, 255]);
    // Logo center recolored to black.
    assert_eq!(square.get_pixel(500, 500).0, [0, 0, 0, 255]);

    // Transparent icons keep alpha zero outside the silhouette.
    let bare = decode(&root.join("icons/png/transparent/green.png"));
    assert_eq!(bare.get_pixel(0, 0).0[3], 0);
    assert_eq!(bare.get_pixel(500, 500).0, [2, 255, 207, 255]);

    // Circle icons leave the canvas corners transparent.
    let circle = decode(&root.join("icons/png/circle/black_background_green_logo.png"));
    assert_eq!(circle.get_pixel(0, 0).0[3], 0);
    assert_eq!(circle.get_pixel(500, 40).0, [0, 0, 0, 255]);

    // Banner background fills the far edge, away from logo and text.
    let banner = decode(&root.join("banners/png/black_background_white_logo.png"));
    assert_eq!((banner.width(), banner.height()), (1500, 500));
    assert_eq!(banner.get_pixel(0, 0).0, [0, 0, 0, 255]);
    assert_eq!(banner.get_pixel(10, 490).0, [0, 0, 0, 255]);

    // Gold pass-through banner keeps the intrinsic logo color. The 64px
    // source is never upscaled, so the logo spans x 100..164 centered on
    // y 250.
    assert_eq!(banner.get_pixel(130, 250).0, [212, 175, 55, 255]);

    // The vector sibling of every raster asset exists with the same viewBox.
    let svg = fs::read_to_string(root.join("banners/svg/black_background_white_logo.svg")).unwrap();
    assert!(svg.contains("viewBox=\"0 0 1500 500\""));
    assert!(svg.contains("data:image/png;base64,"));

    let _ = fs::remove_dir_all(&root);
}

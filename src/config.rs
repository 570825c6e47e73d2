//! Static configuration: brand palette wiring, output layout, and the
//! name -> attributes variant tables the batch generator walks.

use crate::color::{self, Color, Fill};
use crate::layout::Canvas;

/// Wordmark rendered on standard banners.
pub const WORDMARK: &str = "TOS";
/// Long-form wordmark rendered on content-sized banners.
pub const WORDMARK_LONG: &str = "TOS Network";

/// Shared logo consumed by the banner and icon tasks.
pub const LOGO_SOURCE: &str = "logo/logo.png";
/// Master artwork consumed by the logo-derivation task.
pub const MASTER_SOURCE: &str = "logo/master.png";
/// Background-free master artwork for the transparent series.
pub const MASTER_TRANSPARENT_SOURCE: &str = "logo/master-transparent.png";

pub const LOGO_DIR: &str = "logo";
pub const BANNERS_PNG_DIR: &str = "banners/png";
pub const BANNERS_SVG_DIR: &str = "banners/svg";
pub const ICONS_PNG_DIR: &str = "icons/png";
pub const ICONS_SVG_DIR: &str = "icons/svg";

pub const BANNER_CANVAS: Canvas = Canvas::new(1500, 500);
pub const ICON_SIZE: u32 = 1000;

/// A named banner configuration.
#[derive(Debug, Clone, Copy)]
pub struct BannerVariant {
    pub name: &'static str,
    pub background: Option<Fill>,
    /// Recolor target for the logo; `None` keeps the intrinsic gold.
    pub logo_color: Option<Color>,
    pub text_color: Color,
}

pub const BANNER_VARIANTS: &[BannerVariant] = &[
    BannerVariant {
        name: "black_background_white_logo",
        background: Some(Fill::Solid(color::BLACK)),
        logo_color: None,
        text_color: color::WHITE,
    },
    BannerVariant {
        name: "white_background_black_logo",
        background: Some(Fill::Solid(color::WHITE)),
        logo_color: None,
        text_color: color::BLACK,
    },
    BannerVariant {
        name: "green_background_black_logo",
        background: Some(Fill::Solid(color::GREEN)),
        logo_color: None,
        text_color: color::BLACK,
    },
    BannerVariant {
        name: "gradient_green_background_white_logo",
        background: Some(Fill::LinearGradient {
            start: color::GRADIENT_START,
            end: color::GRADIENT_END,
        }),
        logo_color: None,
        text_color: color::WHITE,
    },
    BannerVariant {
        name: "transparent_background_black_logo",
        background: None,
        logo_color: None,
        text_color: color::BLACK,
    },
    BannerVariant {
        name: "transparent_background_white_logo",
        background: None,
        logo_color: None,
        text_color: color::WHITE,
    },
    BannerVariant {
        name: "transparent_background_green_logo",
        background: None,
        logo_color: None,
        text_color: color::GREEN,
    },
];

/// A named icon configuration, shared by the circle and square shapes.
#[derive(Debug, Clone, Copy)]
pub struct IconVariant {
    pub name: &'static str,
    pub background: Color,
    pub logo_color: Color,
}

pub const ICON_VARIANTS: &[IconVariant] = &[
    IconVariant { name: "black_background_green_logo", background: color::BLACK, logo_color: color::GREEN },
    IconVariant { name: "black_background_white_logo", background: color::BLACK, logo_color: color::WHITE },
    IconVariant { name: "green_background_black_logo", background: color::GREEN, logo_color: color::BLACK },
    IconVariant { name: "green_background_white_logo", background: color::GREEN, logo_color: color::WHITE },
    IconVariant { name: "white_background_black_logo", background: color::WHITE, logo_color: color::BLACK },
    IconVariant { name: "white_background_green_logo", background: color::WHITE, logo_color: color::GREEN },
];

/// Bare recolored logo on a transparent canvas.
#[derive(Debug, Clone, Copy)]
pub struct SilhouetteVariant {
    pub name: &'static str,
    pub logo_color: Color,
}

pub const SILHOUETTE_VARIANTS: &[SilhouetteVariant] = &[
    SilhouetteVariant { name: "black", logo_color: color::BLACK },
    SilhouetteVariant { name: "white", logo_color: color::WHITE },
    SilhouetteVariant { name: "green", logo_color: color::GREEN },
];

/// A named wordmark-banner configuration. These write under the same names
/// as the plain banners; when both tasks run, the last writer wins.
#[derive(Debug, Clone, Copy)]
pub struct WordmarkVariant {
    pub name: &'static str,
    pub background: Option<Fill>,
    pub text_color: Color,
}

pub const WORDMARK_VARIANTS: &[WordmarkVariant] = &[
    WordmarkVariant {
        name: "black_background_white_logo",
        background: Some(Fill::Solid(color::BLACK)),
        text_color: color::WHITE,
    },
    WordmarkVariant {
        name: "white_background_black_logo",
        background: Some(Fill::Solid(color::WHITE)),
        text_color: color::BLACK,
    },
    WordmarkVariant {
        name: "green_background_black_logo",
        background: Some(Fill::Solid(color::GREEN)),
        text_color: color::BLACK,
    },
    WordmarkVariant {
        name: "gradient_green_background_white_logo",
        background: Some(Fill::LinearGradient {
            start: color::GRADIENT_START,
            end: color::GRADIENT_END,
        }),
        text_color: color::WHITE,
    },
    WordmarkVariant {
        name: "transparent_background_black_logo",
        background: None,
        text_color: color::BLACK,
    },
    WordmarkVariant {
        name: "transparent_background_white_logo",
        background: None,
        text_color: color::WHITE,
    },
    WordmarkVariant {
        name: "transparent_background_green_logo",
        background: None,
        text_color: color::GREEN,
    },
];

/// Square sizes for derived logo files.
pub const LOGO_SIZES: &[u32] = &[16, 32, 48, 64, 128, 256, 512, 1024];
/// Square sizes for derived transparent logo files.
pub const TRANSPARENT_SIZES: &[u32] = &[16, 32, 48, 64, 128, 150, 200, 256, 400, 512, 800];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique(names: impl Iterator<Item = &'static str>) {
        let mut seen = HashSet::new();
        for name in names {
            assert!(seen.insert(name), "duplicate variant name: {name}");
        }
    }

    #[test]
    fn variant_names_are_unique_per_table() {
        assert_unique(BANNER_VARIANTS.iter().map(|v| v.name));
        assert_unique(ICON_VARIANTS.iter().map(|v| v.name));
        assert_unique(SILHOUETTE_VARIANTS.iter().map(|v| v.name));
        assert_unique(WORDMARK_VARIANTS.iter().map(|v| v.name));
    }

    #[test]
    fn icon_backgrounds_are_opaque() {
        // The square task reuses this table and rejects transparent fills.
        for v in ICON_VARIANTS {
            assert_eq!(v.background.a, 255, "{}", v.name);
        }
    }

    #[test]
    fn size_series_are_ascending() {
        assert!(LOGO_SIZES.windows(2).all(|w| w[0] < w[1]));
        assert!(TRANSPARENT_SIZES.windows(2).all(|w| w[0] < w[1]));
    }
}

//! Image set used to dress the globe.
//!
//! Surface imagery changes with the month (NASA Blue Marble 2004 series); the
//! bump and specular maps are fixed. Every image ships as both WebP and JPEG and
//! the host picks one depending on browser support.

use std::fmt;

/// Height of surface bumps relative to the globe radius.
pub const BUMP_SCALE: f64 = 0.05;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageFormat {
    Webp,
    Jpeg,
}

impl ImageFormat {
    pub fn from_webp_support(supported: bool) -> Self {
        if supported {
            ImageFormat::Webp
        } else {
            ImageFormat::Jpeg
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Webp => "webp",
            ImageFormat::Jpeg => "jpg",
        }
    }
}

/// Resolved image URLs for one globe instance.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureSet {
    pub surface: String,
    pub bump: String,
    pub specular: String,
    pub marker: String,
    pub bump_scale: f64,
}

pub trait TextureSetResolver: fmt::Debug + Send + Sync {
    /// `month` is 1-based (January = 1).
    fn resolve(&self, month: u32, format: ImageFormat) -> TextureSet;
}

/// Monthly Blue Marble surface plus static bump/specular maps under `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTextures {
    pub base: String,
}

impl Default for MonthlyTextures {
    fn default() -> Self {
        Self {
            base: "images".to_string(),
        }
    }
}

impl TextureSetResolver for MonthlyTextures {
    fn resolve(&self, month: u32, format: ImageFormat) -> TextureSet {
        let base = self.base.trim_end_matches('/');
        let ext = format.extension();
        let month = month.clamp(1, 12);
        TextureSet {
            surface: format!("{base}/world.2004{month:02}.{ext}"),
            bump: format!("{base}/earthbump1k.{ext}"),
            specular: format!("{base}/earthspec1k.{ext}"),
            // The marker sprite only exists as PNG.
            marker: format!("{base}/map-marker.png"),
            bump_scale: BUMP_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ImageFormat, MonthlyTextures, TextureSetResolver};

    #[test]
    fn pads_month_and_picks_extension() {
        let set = MonthlyTextures::default().resolve(3, ImageFormat::Webp);
        assert_eq!(set.surface, "images/world.200403.webp");
        assert_eq!(set.bump, "images/earthbump1k.webp");
        assert_eq!(set.specular, "images/earthspec1k.webp");
        assert_eq!(set.marker, "images/map-marker.png");

        let set = MonthlyTextures::default().resolve(11, ImageFormat::Jpeg);
        assert_eq!(set.surface, "images/world.200411.jpg");
    }

    #[test]
    fn custom_base_without_trailing_slash() {
        let textures = MonthlyTextures {
            base: "/static/img/".to_string(),
        };
        let set = textures.resolve(12, ImageFormat::from_webp_support(false));
        assert_eq!(set.surface, "/static/img/world.200412.jpg");
    }
}

use std::sync::Arc;

use foundation::math::Coordinate;

use crate::textures::{MonthlyTextures, TextureSetResolver};

/// Globe radius in scene units.
pub const EARTH_RADIUS: f64 = 0.7;
/// Distance from the scene origin at which the camera travels.
pub const ORBIT_RADIUS: f64 = 2.0;
/// Where the camera starts (Madrid).
pub const INITIAL_COORDINATE: Coordinate = Coordinate::new(40.4167754, -3.7037902);
/// Longitude advanced per animation frame while spinning (degrees).
pub const SPIN_STEP_DEG: f64 = 0.1;
/// Sprite size of a location marker.
pub const MARKER_SCALE: f64 = 0.05;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraConfig {
    pub fov_y_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_deg: 45.0,
            // The canvas is always square, see `layout::fit_canvas`.
            aspect: 1.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Everything that differs between globe instances.
#[derive(Debug, Clone)]
pub struct GlobeConfig {
    pub radius: f64,
    pub orbit_radius: f64,
    pub initial_coordinate: Coordinate,
    pub spin_step_deg: f64,
    pub marker_scale: f64,
    /// Selector of the host element that contains the canvas.
    pub container: String,
    pub camera: CameraConfig,
    pub textures: Arc<dyn TextureSetResolver>,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: EARTH_RADIUS,
            orbit_radius: ORBIT_RADIUS,
            initial_coordinate: INITIAL_COORDINATE,
            spin_step_deg: SPIN_STEP_DEG,
            marker_scale: MARKER_SCALE,
            container: ".globe".to_string(),
            camera: CameraConfig::default(),
            textures: Arc::new(MonthlyTextures::default()),
        }
    }
}

impl GlobeConfig {
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.container = container.into();
        self
    }

    pub fn with_textures(mut self, textures: impl TextureSetResolver + 'static) -> Self {
        self.textures = Arc::new(textures);
        self
    }
}

//! Interactive member globe.
//!
//! `Globe` owns the orbit controller, marker layer and sun position for one
//! widget instance. The host drives it:
//! - report image loads with `asset_loaded` (nothing animates before all are in);
//! - call `on_frame` from its animation-frame callback;
//! - forward pointer events with `on_pointer`;
//! - call `resize` when the container changes size.
//!
//! Drawing is delegated to a [`Renderer`], which receives a [`SceneView`].

use chrono::{DateTime, Datelike, Utc};
use foundation::math::Vec3;
use roster::Member;
use tracing::debug;

use crate::camera::Camera;
use crate::config::{CameraConfig, GlobeConfig};
use crate::layout::{CanvasLayout, fit_canvas};
use crate::loading::{Asset, AssetGate};
use crate::markers::{Marker, MarkerLayer, distance_to_edge};
use crate::orbit::OrbitController;
use crate::pointer::{PointerEvent, Repaint};
use crate::sun::sun_position;
use crate::textures::{ImageFormat, TextureSet};

/// Snapshot handed to the renderer for one draw.
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    pub camera: &'a Camera,
    pub projection: &'a CameraConfig,
    pub globe_radius: f64,
    pub sun: Vec3,
    pub markers: &'a [Marker],
    pub marker_scale: f64,
}

pub trait Renderer {
    fn render(&mut self, view: &SceneView<'_>);
}

#[derive(Debug)]
pub struct Globe {
    config: GlobeConfig,
    orbit: OrbitController,
    markers: MarkerLayer,
    sun: Vec3,
    assets: AssetGate,
    layout: CanvasLayout,
}

impl Globe {
    /// `container_width`/`container_height` size the canvas before the first
    /// pointer event, so drags are scaled correctly without a `resize` call.
    pub fn new(
        config: GlobeConfig,
        container_width: f64,
        container_height: f64,
        now: DateTime<Utc>,
    ) -> Self {
        let mut orbit = OrbitController::new(
            config.orbit_radius,
            config.initial_coordinate,
            config.spin_step_deg,
        );
        let layout = fit_canvas(container_width, container_height);
        orbit.set_element_size(layout.size, layout.size);
        let edge = distance_to_edge(orbit.camera().position, config.radius);
        let sun = sun_position(now, config.orbit_radius);

        Self {
            markers: MarkerLayer::new(edge),
            orbit,
            sun,
            assets: AssetGate::new(),
            layout,
            config,
        }
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    /// Images to load for `now`'s month.
    pub fn textures(&self, now: DateTime<Utc>, format: ImageFormat) -> TextureSet {
        self.config.textures.resolve(now.month(), format)
    }

    pub fn add_members(&mut self, members: &[Member]) {
        self.markers.set_members(members, self.config.radius);
        debug!(
            members = members.len(),
            markers = self.markers.len(),
            "globe markers placed"
        );
    }

    /// Record a finished image load. Returns whether the globe is now running.
    pub fn asset_loaded(&mut self, asset: Asset) -> bool {
        let was_running = self.assets.is_ready();
        let running = self.assets.mark_loaded(asset);
        if running && !was_running {
            debug!(container = %self.config.container, "globe assets loaded, starting");
        }
        running
    }

    pub fn is_running(&self) -> bool {
        self.assets.is_ready()
    }

    pub fn resize(&mut self, container_width: f64, container_height: f64) -> CanvasLayout {
        self.layout = fit_canvas(container_width, container_height);
        self.orbit.set_element_size(self.layout.size, self.layout.size);
        self.layout
    }

    /// Animation-frame callback. Returns whether a frame was rendered.
    pub fn on_frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> bool {
        if !self.is_running() {
            return false;
        }
        self.orbit.tick();
        self.markers.update_depth_test(self.orbit.camera().position);
        self.render(renderer);
        true
    }

    pub fn on_pointer<R: Renderer + ?Sized>(
        &mut self,
        event: PointerEvent,
        renderer: &mut R,
    ) -> Repaint {
        if !self.is_running() {
            return Repaint::Skip;
        }
        let repaint = self.orbit.handle(event);
        if repaint == Repaint::Now {
            self.render(renderer);
        }
        repaint
    }

    pub fn orbit(&self) -> &OrbitController {
        &self.orbit
    }

    pub fn markers(&self) -> &[Marker] {
        self.markers.markers()
    }

    pub fn sun(&self) -> Vec3 {
        self.sun
    }

    pub fn layout(&self) -> CanvasLayout {
        self.layout
    }

    fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.render(&SceneView {
            camera: self.orbit.camera(),
            projection: &self.config.camera,
            globe_radius: self.config.radius,
            sun: self.sun,
            markers: self.markers.markers(),
            marker_scale: self.config.marker_scale,
        });
    }
}

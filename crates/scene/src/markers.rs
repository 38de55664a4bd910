use std::collections::HashSet;

use foundation::math::{Vec3, place};
use roster::Member;

/// One sprite per distinct member location.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub location: String,
    pub position: Vec3,
    /// Off while the marker faces the camera so it draws over the globe;
    /// on for the far hemisphere so the globe hides it.
    pub depth_test: bool,
}

/// Distance from the camera to the globe's silhouette.
///
/// Markers closer than this are on the visible hemisphere.
pub fn distance_to_edge(camera: Vec3, radius: f64) -> f64 {
    camera.distance(Vec3::new(0.0, radius, 0.0))
}

#[derive(Debug, Clone, Default)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
    distance_to_edge: f64,
}

impl MarkerLayer {
    pub fn new(distance_to_edge: f64) -> Self {
        Self {
            markers: Vec::new(),
            distance_to_edge,
        }
    }

    /// Replace the markers with one per distinct location name, placed on the
    /// globe surface. Members without a location are skipped.
    pub fn set_members(&mut self, members: &[Member], radius: f64) {
        let mut seen = HashSet::new();
        self.markers = members
            .iter()
            .filter_map(|m| m.location.as_ref())
            .filter(|loc| seen.insert(loc.name.as_str()))
            .map(|loc| Marker {
                location: loc.name.clone(),
                position: place(radius, loc.lat, loc.long),
                depth_test: false,
            })
            .collect();
    }

    /// Recompute which markers sit on the far side for this camera position.
    pub fn update_depth_test(&mut self, camera: Vec3) {
        for marker in &mut self.markers {
            marker.depth_test = camera.distance(marker.position) > self.distance_to_edge;
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

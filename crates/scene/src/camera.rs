use foundation::math::Vec3;

/// Perspective camera pose. Projection parameters live in `CameraConfig`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
}

impl Camera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            target: Vec3::ZERO,
        }
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn distance_to(&self, point: Vec3) -> f64 {
        self.position.distance(point)
    }
}

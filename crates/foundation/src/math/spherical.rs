use core::f64::consts::PI;

use super::Vec3;

/// Margin kept between the polar angle and either pole by [`Spherical::make_safe`].
pub const POLE_EPSILON: f64 = 1e-6;

/// Spherical coordinates around the y axis.
///
/// - `phi` is the polar angle from `+y` (0 at the top pole, `PI` at the bottom).
/// - `theta` is the azimuth, measured from `+z` towards `+x`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spherical {
    pub radius: f64,
    pub phi: f64,
    pub theta: f64,
}

impl Spherical {
    pub fn new(radius: f64, phi: f64, theta: f64) -> Self {
        Self { radius, phi, theta }
    }

    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        let theta = v.x.atan2(v.z);
        let phi = (v.y / radius).clamp(-1.0, 1.0).acos();
        Self::new(radius, phi, theta)
    }

    pub fn to_vec3(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Keep the polar angle strictly between the poles so a look-at from this
    /// position never degenerates.
    pub fn make_safe(mut self) -> Self {
        self.phi = self.phi.clamp(POLE_EPSILON, PI - POLE_EPSILON);
        self
    }
}

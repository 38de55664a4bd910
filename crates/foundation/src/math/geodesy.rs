use super::Vec3;

/// Geographic coordinates in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CoordinateError {
    Latitude(f64),
    Longitude(f64),
}

impl std::fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinateError::Latitude(v) => write!(f, "latitude {v} outside [-90, 90]"),
            CoordinateError::Longitude(v) => write!(f, "longitude {v} outside [-180, 180]"),
        }
    }
}

impl std::error::Error for CoordinateError {}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Like `new`, but rejects non-finite or out-of-range values.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }
        Ok(Self::new(latitude, longitude))
    }

    pub fn place(self, radius: f64) -> Vec3 {
        place(radius, self.latitude, self.longitude)
    }
}

/// Map latitude/longitude (degrees) onto a y-up sphere of the given radius.
///
/// `(0, 0)` lands on `+x`, the north pole on `+y`, and `(0, 90)` on `-z`.
/// These signs match the scene's camera conventions; a renderer with other
/// axis conventions should re-check them against those reference points.
pub fn place(radius: f64, latitude: f64, longitude: f64) -> Vec3 {
    let phi = (90.0 - latitude).to_radians();
    let theta = (longitude + 180.0).to_radians();

    Vec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

pub mod math;

// Foundation crate: small, well-tested primitives only.
pub use math::{Coordinate, CoordinateError, Spherical, Vec2, Vec3, place};

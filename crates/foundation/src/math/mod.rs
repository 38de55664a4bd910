pub mod geodesy;
pub mod spherical;
pub mod vec;

pub use geodesy::*;
pub use spherical::*;
pub use vec::*;

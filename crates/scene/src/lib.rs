pub mod camera;
pub mod config;
pub mod globe;
pub mod layout;
pub mod loading;
pub mod markers;
pub mod orbit;
pub mod pointer;
pub mod sun;
pub mod textures;

pub use camera::*;
pub use config::*;
pub use globe::*;
pub use layout::*;
pub use loading::*;
pub use markers::*;
pub use orbit::*;
pub use pointer::*;
pub use sun::*;
pub use textures::*;

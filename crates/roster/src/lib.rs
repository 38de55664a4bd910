pub mod groups;
pub mod member;
pub mod normalize;

pub use groups::*;
pub use member::*;
pub use normalize::*;

pub mod buffer;
pub mod camera;
pub mod clock;
pub mod constants;
pub mod cycler;
pub mod params;
pub mod path;
pub mod pointer;
pub mod trace;

pub use buffer::*;
pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use cycler::*;
pub use params::*;
pub use path::*;
pub use pointer::*;
pub use trace::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
pub static BACKGROUND_WGSL: &str = include_str!("../shaders/background.wgsl");

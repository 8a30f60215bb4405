pub mod camera;
pub mod renderer;

pub use camera::*;
pub use renderer::*;

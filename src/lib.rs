pub mod camera;
pub mod cli;
pub mod config;
pub mod context;
pub mod controls;
pub mod core;
pub mod debug_panel;
pub mod demo;
pub mod geometry;
pub mod logging;
pub mod motion;
pub mod resize;
pub mod scene;
pub mod shadow;
pub mod texture;
pub mod traits;
pub mod types;
pub mod viewport;

pub use crate::context::AppContext;
pub use crate::core::{FrameLoop, StopHandle, TickOutcome};
pub use crate::motion::{orbit_position, OrbitPosition};
pub use crate::shadow::{sync_shadow, ShadowState};

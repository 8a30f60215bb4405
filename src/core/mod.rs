pub mod clock;
pub mod forward_renderer;
pub mod frame_loop;
pub mod gpu_context;
pub mod input_adapter;

pub use clock::*;
pub use forward_renderer::*;
pub use frame_loop::*;
pub use gpu_context::*;
pub use input_adapter::*;

pub mod instance;
pub mod traits;

pub use instance::{DrawCommand, DrawKind, RenderBuffer};
pub use traits::RenderTarget;

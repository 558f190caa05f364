//! Rendering module
//!
//! Implementations of [`crate::sim::Surface`]: the browser's 2D canvas, and an
//! in-memory recorder for headless runs and tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use recording::{DrawCommand, RecordingSurface};

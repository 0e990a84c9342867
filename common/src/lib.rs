//! Common utilities for the simulation front ends
//!
//! Shared window and GPU setup, a 2D camera that can frame a pixel canvas,
//! and small vertex/buffer helpers used by the renderers.

pub mod camera;
pub mod graphics;

pub use camera::*;
pub use graphics::*;

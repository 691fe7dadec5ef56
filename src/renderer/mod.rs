//! WebGPU rendering module
//!
//! `shapes` turns the board into coloured triangles in canvas pixels;
//! `pipeline` uploads and draws them.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderError, RenderState};
pub use shapes::scene;
pub use vertex::Vertex;

//! WebGPU rendering module
//!
//! Draw lists are tessellated into flat-colored triangles on the CPU and
//! submitted through a single pipeline.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, screen_to_ndc};
pub use shapes::{Tessellation, tessellate};
pub use vertex::Vertex;

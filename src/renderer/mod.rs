//! Renderer hand-off
//!
//! The game does not own a GPU device. It flattens each [`crate::scene::Scene`]
//! into colored triangles whose buffer layout a WebGPU host can bind directly.

pub mod shapes;
pub mod vertex;

pub use shapes::scene_vertices;
pub use vertex::{Vertex, colors};

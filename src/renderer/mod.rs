//! Presentation helpers
//!
//! The simulation works in world units. This module maps them onto a device
//! surface and builds flat-colored vertex batches from a render snapshot.

pub mod shapes;
pub mod vertex;
pub mod viewport;

pub use shapes::scene_vertices;
pub use vertex::{Vertex, css_rgba};
pub use viewport::Viewport;

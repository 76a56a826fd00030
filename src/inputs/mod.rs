mod contour;
pub use contour::{Contour, ContourRole};
mod vertex;
pub use vertex::Vertex;
pub(crate) use vertex::{Coords, SweepKey};
mod vertex_buffer;
pub(crate) use vertex_buffer::VertexBuffer;

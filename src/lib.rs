//! Triangulates polygons with holes into indexed triangle meshes.
//!
//! The region inside a border contour and outside every hole is split into monotone polygons by a sweep over the
//! vertices in (x, y) order, and each monotone polygon is then cut into triangles. Contours may be given in either
//! winding; every triangle is emitted in the [Winding] the caller asks for.
//!
//! ```
//! use monotri::{Axis, AxisFrame, TriangleMesh, Winding};
//!
//! let border = [[0f64, 0.], [4., 0.], [4., 4.], [0., 4.]];
//! let hole = [[1f64, 1.], [3., 1.], [3., 3.], [1., 3.]];
//!
//! let mut mesh = TriangleMesh::new();
//! monotri::triangulate(&AxisFrame::identity(), Axis::X, Axis::Z, &border, &[hole], Winding::Counterclockwise, &mut mesh)
//!     .expect("Triangulation failed");
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.index_count(), 24);
//! ```

mod idx;
mod errors;
mod inputs;
mod outputs;
mod tolerance;
mod math;
mod normalizer;
mod event;
mod sweep;
mod monotone;
mod mesh;
mod triangulation;

#[cfg(feature = "debugging")]
pub mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{InternalError, MeshError, TriangulationError};
pub use inputs::*;
pub use outputs::*;
pub use tolerance::Tolerance;
pub use math::{is_polygon_degenerate, signed_area};
pub use mesh::{Axis, AxisFrame, CoordinateSystem, MeshBuilder, Point3, TriangleMesh};
pub use triangulation::{Triangulation, Triangulator};

pub use num_traits::Float;

/// Triangulates `border` minus `holes` in the plane of `x_axis` and `y_axis`, appending the vertices and indices to `mesh`.
///
/// Uses the default [Tolerance]; see [Triangulator::triangulate_into_mesh] for the details.
pub fn triangulate<C, V, H, S, M>(system: &S, x_axis: Axis, y_axis: Axis, border: &[V], holes: &[H], target: Winding, mesh: &mut M) -> Result<(), TriangulationError>
where
    C: Float,
    V: Vertex<Coordinate = C>,
    H: AsRef<[V]>,
    S: CoordinateSystem<C> + ?Sized,
    M: MeshBuilder<C> + ?Sized,
{
    Triangulator::new(target)
        .triangulate_into_mesh(system, x_axis, y_axis, border, holes, mesh)
        .map(|_| ())
}

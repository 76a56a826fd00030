use std::convert::TryFrom;

use num_traits::Float;

use crate::{Axis, CoordinateSystem, MeshBuilder, Triangle, TriangulationError, inputs::VertexBuffer};

/// Triangles produced for a border of `border` vertices and holes of the given sizes.
/// Holes with fewer than 3 vertices are not counted.
///
/// Exact for valid input: every simple polygon of `n` vertices with `h` holes yields `n + 2h - 2` triangles.
pub(crate) fn estimate_triangle_count<I: IntoIterator<Item=usize>>(border: usize, holes: I) -> usize {
    let mut vertices = border;
    let mut hole_count = 0;
    for hole in holes.into_iter().filter(|&len| len >= 3) {
        vertices += hole;
        hole_count += 1;
    }
    (vertices + 2 * hole_count).saturating_sub(2)
}

/// Appends every buffer vertex, lifted into 3D, and then the triangles, using the indices the builder returned.
///
/// Nothing is written if sequential indices after the existing vertices would not fit into a `u32`. A builder
/// that rejects a vertex keeps whatever it accepted before the error.
pub(crate) fn assemble<C, S, M>(system: &S, x_axis: Axis, y_axis: Axis, vertices: &VertexBuffer<C>, triangles: &[Triangle], mesh: &mut M) -> Result<(), TriangulationError>
where
    C: Float,
    S: CoordinateSystem<C> + ?Sized,
    M: MeshBuilder<C> + ?Sized,
{
    let base = mesh.vertex_count();
    let end = base + vertices.len();
    if end > 0 && u32::try_from(end - 1).is_err() {
        return Err(TriangulationError::IndexOverflow(end - 1));
    }

    mesh.reserve(vertices.len(), triangles.len() * 3);

    let mut mesh_indices = Vec::with_capacity(vertices.len());
    for coords in vertices.coords() {
        mesh_indices.push(mesh.add_vertex(system.unproject(coords.to_array(), x_axis, y_axis))?);
    }

    for triangle in triangles {
        for &vi in triangle {
            mesh.add_index(mesh_indices[vi]);
        }
    }

    Ok(())
}

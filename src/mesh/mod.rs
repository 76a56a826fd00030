mod assembler;
pub(crate) use assembler::{assemble, estimate_triangle_count};
mod coordinate_system;
pub use coordinate_system::{Axis, AxisFrame, CoordinateSystem};
mod triangle_mesh;
pub use triangle_mesh::{MeshBuilder, TriangleMesh};

use num_traits::Float;

use crate::MeshError;

/// A point or direction in three dimensions
pub type Point3<C> = [C; 3];

/// `index` as a 32 bit mesh index
#[inline]
pub(crate) fn mesh_index(index: usize) -> Result<u32, MeshError> {
    u32::try_from(index).map_err(|_| MeshError::IndexOverflow(index))
}

#[inline]
fn add<C: Float>(a: Point3<C>, b: Point3<C>) -> Point3<C> {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
fn sub<C: Float>(a: Point3<C>, b: Point3<C>) -> Point3<C> {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
fn scale<C: Float>(a: Point3<C>, s: C) -> Point3<C> {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline]
fn dot<C: Float>(a: Point3<C>, b: Point3<C>) -> C {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn cross<C: Float>(a: Point3<C>, b: Point3<C>) -> Point3<C> {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Unit vector along `a`, or `a` itself if it has no length
#[inline]
fn normalize<C: Float>(a: Point3<C>) -> Point3<C> {
    let length = dot(a, a).sqrt();
    if length > C::zero() {
        [a[0] / length, a[1] / length, a[2] / length]
    } else {
        a
    }
}

use num_traits::Float;

use crate::{Winding, inputs::Coords, math};

/// Three vertex indices into the vertex buffer of a triangulation
pub type Triangle = [usize; 3];

/// Swaps the last two vertices of `triangle` if its winding is not `target`.
/// Triangles without a winding are returned unchanged.
pub(crate) fn oriented<C: Float>(mut triangle: Triangle, points: [Coords<C>; 3], target: Winding, area_tolerance: C) -> Triangle {
    let area = math::cross(points[0], points[1], points[2]) / (C::one() + C::one());
    if let Some(winding) = Winding::of_signed_area(area, area_tolerance) {
        if winding != target {
            triangle.swap(1, 2);
        }
    }
    triangle
}

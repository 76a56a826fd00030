use num_traits::Float;

use crate::{Tolerance, Vertex, inputs::Coords, math};

/// The order the vertices of a polygon or triangle are listed in
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Winding {
    Counterclockwise,
    Clockwise,
}

impl Winding {
    /// The opposite winding
    pub fn reversed(self) -> Self {
        match self {
            Winding::Counterclockwise => Winding::Clockwise,
            Winding::Clockwise => Winding::Counterclockwise,
        }
    }

    /// Classifies a signed area, returning `None` when it is within `tolerance` of zero
    pub fn of_signed_area<C: Float>(area: C, tolerance: C) -> Option<Self> {
        if area < -tolerance {
            Some(Winding::Clockwise)
        } else if area > tolerance {
            Some(Winding::Counterclockwise)
        } else {
            None
        }
    }

    /// The winding of the closed polygon through `polygon`, or `None` if its area is within `tolerance` of zero
    pub fn of_polygon<V: Vertex>(polygon: &[V], tolerance: V::Coordinate) -> Option<Self> {
        Self::of_signed_area(math::signed_area(polygon), tolerance)
    }

    /// The winding of the triangle `a`, `b`, `c` under the default [Tolerance], scaled to the triangle
    pub fn of_triangle<V: Vertex>(a: &V, b: &V, c: &V) -> Option<Self> {
        let points = [Coords::of(a), Coords::of(b), Coords::of(c)];
        let tolerance = Tolerance::default().scaled_to(points.iter().copied());
        Self::of_signed_area(math::half(math::cross(points[0], points[1], points[2])), tolerance.area)
    }
}

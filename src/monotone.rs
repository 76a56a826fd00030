use num_traits::Float;
use smallvec::SmallVec;

use crate::{Tolerance, Triangle, TriangulationError, Winding, inputs::{Coords, VertexBuffer}, math, outputs::oriented};

/// A monotone polygon being cut down one triangle at a time.
///
/// The polygon is kept as its circular list of directed edges. Cutting off the corner between two
/// consecutive edges replaces both with a single edge that skips the corner vertex.
pub(crate) struct Monotone<'v, C: Float> {
    vertices: &'v VertexBuffer<C>,
    edges: SmallVec<[(usize, usize); 16]>,
    winding: Winding,
    cursor: usize,
}

#[cfg(feature = "debugging")]
impl<'v, C: Float> std::fmt::Display for Monotone<'v, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} [ ", self.winding)?;
        for (i, (begin, _)) in self.edges.iter().enumerate() {
            if i == self.cursor {
                write!(f, "*")?;
            }
            write!(f, "{:03} ", begin)?;
        }
        write!(f, "]")
    }
}

impl<'v, C: Float> Monotone<'v, C> {
    /// Returns `None` if the polygon has no area to triangulate
    pub fn new(polygon: &[usize], vertices: &'v VertexBuffer<C>, tolerance: &Tolerance<C>) -> Result<Option<Self>, TriangulationError> {
        if polygon.len() < 3 {
            return Err(TriangulationError::internal(format!("Monotone needs at least 3 vertices, has {}", polygon.len())));
        }

        let two = C::one() + C::one();
        let area = math::doubled_signed_area(polygon.iter().map(|&vi| vertices[vi])) / two;
        let winding = match Winding::of_signed_area(area, tolerance.area) {
            Some(winding) => winding,
            None => return Ok(None),
        };

        let len = polygon.len();
        let edges = (0..len).map(|i| (polygon[i], polygon[(i + 1) % len])).collect();

        Ok(Some(Self {
            vertices,
            edges,
            winding,
            cursor: 0,
        }))
    }

    /// Emits `k - 2` triangles for a polygon of `k` vertices, each wound as `target`
    pub fn triangulate(mut self, target: Winding, tolerance: &Tolerance<C>, output: &mut Vec<Triangle>) -> Result<(), TriangulationError> {
        while self.edges.len() > 3 {
            self.advance_to_convex(tolerance)?;

            let next = self.next_of(self.cursor);
            let (v0, v1) = self.edges[self.cursor];
            let v2 = self.edges[next].1;
            output.push(self.oriented([v0, v1, v2], target, tolerance));

            self.edges[self.cursor] = (v0, v2);
            self.edges.remove(next);
            if next == 0 {
                // The cursor was on the last edge, which shifted down
                self.cursor -= 1;
            }
            if self.cursor > 0 {
                self.cursor -= 1;
            }
        }

        let (v0, v1) = self.edges[0];
        let v2 = self.edges[1].1;
        output.push(self.oriented([v0, v1, v2], target, tolerance));
        Ok(())
    }

    fn advance_to_convex(&mut self, tolerance: &Tolerance<C>) -> Result<(), TriangulationError> {
        let mut steps = 0;
        while !self.is_convex(self.cursor, tolerance) {
            self.cursor = self.next_of(self.cursor);
            steps += 1;
            if steps > self.edges.len() {
                return Err(TriangulationError::internal(format!("No convex corner found in a monotone of {} edges", self.edges.len())));
            }
        }
        Ok(())
    }

    /// Is the corner between edge `ei` and the edge after it strictly convex?
    fn is_convex(&self, ei: usize, tolerance: &Tolerance<C>) -> bool {
        let (begin, end) = self.edges[ei];
        let after = self.edges[self.next_of(ei)].1;
        let (begin, end, after) = (self.coords(begin), self.coords(end), self.coords(after));

        match self.winding {
            Winding::Clockwise => math::is_right_of(begin, end, after, tolerance.orientation),
            Winding::Counterclockwise => math::is_left_of(begin, end, after, tolerance.orientation),
        }
    }

    fn oriented(&self, triangle: Triangle, target: Winding, tolerance: &Tolerance<C>) -> Triangle {
        let points = [self.coords(triangle[0]), self.coords(triangle[1]), self.coords(triangle[2])];
        oriented(triangle, points, target, tolerance.area)
    }

    #[inline(always)]
    fn next_of(&self, ei: usize) -> usize {
        (ei + 1) % self.edges.len()
    }

    #[inline(always)]
    fn coords(&self, vi: usize) -> Coords<C> {
        self.vertices[vi]
    }
}

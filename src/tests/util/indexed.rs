use num_traits::ToPrimitive;

use crate::{Triangulation, TriangulationError, Triangulator, Vertex, Winding, signed_area};

/// A border and its holes flattened into one vertex buffer, with each contour as indices into it
#[derive(Debug, Clone)]
pub struct Indexed<V> {
    pub vertices: Vec<V>,
    pub border: Vec<usize>,
    pub holes: Vec<Vec<usize>>,
}

impl<V: Vertex + Clone> Indexed<V> {
    pub fn new<P: AsRef<[V]>>(polygon_list: &[P]) -> Self {
        let mut vertices = Vec::new();
        let mut contours = Vec::new();
        for polygon in polygon_list {
            let polygon = polygon.as_ref();
            contours.push((vertices.len()..vertices.len() + polygon.len()).collect::<Vec<_>>());
            vertices.extend_from_slice(polygon);
        }

        let mut contours = contours.into_iter();
        Self {
            vertices,
            border: contours.next().unwrap_or_default(),
            holes: contours.collect(),
        }
    }

    /// Reverses the order of the border and of every hole
    pub fn reversed(mut self) -> Self {
        self.border.reverse();
        for hole in self.holes.iter_mut() {
            hole.reverse();
        }
        self
    }

    pub fn triangulate(&self, target: Winding) -> Result<Triangulation, TriangulationError> {
        Triangulator::new(target).triangulate_indexed(&self.vertices, &self.border, &self.holes)
    }

    pub fn expected_triangle_count(&self) -> usize {
        self.vertices.len() + 2 * self.holes.len() - 2
    }

    /// Area inside the border and outside the holes
    pub fn expected_area(&self) -> f64 {
        let hole_area: f64 = self.holes.iter().map(|hole| self.area(hole).abs()).sum();
        self.area(&self.border).abs() - hole_area
    }

    fn area(&self, indices: &[usize]) -> f64 {
        let points: Vec<[f64; 2]> = indices.iter().map(|&vi| self.point(vi)).collect();
        signed_area(&points)
    }

    fn point(&self, vi: usize) -> [f64; 2] {
        let v = &self.vertices[vi];
        [v.x().to_f64().unwrap(), v.y().to_f64().unwrap()]
    }

    /// Checks the triangle count, the winding of every triangle, and that the triangles add up to the polygon's area
    pub fn assert_valid(&self, triangulation: &Triangulation) {
        assert_eq!(triangulation.len(), self.expected_triangle_count(), "Unexpected triangle count");

        let mut area = 0.;
        for &[v0, v1, v2] in triangulation.triangles() {
            let points = [self.point(v0), self.point(v1), self.point(v2)];
            assert_eq!(Winding::of_polygon(&points, 0.), Some(triangulation.target()), "Triangle {:?} is not {:?}", [v0, v1, v2], triangulation.target());
            area += signed_area(&points).abs();
        }

        let expected = self.expected_area();
        assert!((area - expected).abs() <= 1e-6 * expected.max(1.), "Triangles cover {} instead of {}", area, expected);
    }
}

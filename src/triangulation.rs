use std::ops::Range;

use num_traits::Float;

use crate::{Axis, Contour, CoordinateSystem, List, MeshBuilder, Tolerance, Triangle, TriangulationError, Vertex, Winding};
use crate::{event::EventSet, inputs::VertexBuffer, mesh, monotone::Monotone, normalizer, sweep::{MonotoneChain, Sweep}};
#[cfg(feature = "debugging")]
use crate::debug::{self, svg::{SvgOutputLevel, SvgTriangulationStyle}};

/// The triangles covering a polygon with holes, along with the monotone polygons they were cut from
#[derive(Debug, Clone)]
pub struct Triangulation {
    target: Winding,
    event_count: usize,
    monotones: Vec<MonotoneChain>,
    monotone_triangles: Vec<Range<usize>>,
    triangles: Vec<Triangle>,
}

impl Triangulation {
    /// The winding every triangle is listed in
    pub fn target(&self) -> Winding { self.target }

    /// The number of vertices swept, across the border and every hole
    pub fn event_count(&self) -> usize { self.event_count }

    pub fn triangles(&self) -> &[Triangle] { &self.triangles }

    pub fn into_triangles(self) -> Vec<Triangle> { self.triangles }

    pub fn len(&self) -> usize { self.triangles.len() }

    pub fn is_empty(&self) -> bool { self.triangles.is_empty() }

    /// Each monotone polygon of the decomposition, with the triangles cut from it
    pub fn monotones(&self) -> impl '_ + Iterator<Item=(&[usize], &[Triangle])> {
        self.monotones.iter()
            .zip(self.monotone_triangles.iter())
            .map(move |(monotone, range)| (monotone.vertices(), &self.triangles[range.clone()]))
    }

    /// Writes every triangle as three vertex indices
    pub fn write_indexed<L: List<usize>>(&self, mut list: L) {
        list.reserve_triangles(self.triangles.len());
        for &triangle in &self.triangles {
            list.push_triangle(triangle);
        }
    }

    /// Writes every triangle as copies of its three vertices, looked up in `vertices`
    pub fn write_deindexed<V: Clone, L: List<V>>(&self, vertices: &[V], mut list: L) -> Result<(), TriangulationError> {
        let len = vertices.len();
        if let Some(&index) = self.triangles.iter().flatten().find(|&&vi| vi >= len) {
            return Err(TriangulationError::IndexOutOfBounds { index, len });
        }

        list.reserve_triangles(self.triangles.len());
        for &[v0, v1, v2] in &self.triangles {
            list.push_triangle([vertices[v0].clone(), vertices[v1].clone(), vertices[v2].clone()]);
        }
        Ok(())
    }
}

/// Triangulates polygons with holes by sweep-line monotone decomposition.
///
/// ```
/// use monotri::{Triangulator, Winding};
///
/// let vertices = [[0f64, 0.], [4., 0.], [4., 4.], [0., 4.], [1., 1.], [3., 1.], [3., 3.], [1., 3.]];
/// let triangulation = Triangulator::new(Winding::Counterclockwise)
///     .triangulate_indexed(&vertices, &[0, 1, 2, 3], &[[4, 5, 6, 7]])
///     .expect("Triangulation failed");
/// assert_eq!(triangulation.len(), 8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Triangulator<C: Float> {
    target: Winding,
    tolerance: Tolerance<C>,
}

impl<C: Float> Triangulator<C> {
    /// Produces triangles wound as `target`, using the default [Tolerance]
    pub fn new(target: Winding) -> Self {
        Self {
            target,
            tolerance: Tolerance::default(),
        }
    }

    /// Replaces the thresholds, which scale with the extent of each input
    pub fn tolerance(mut self, tolerance: Tolerance<C>) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn target(&self) -> Winding { self.target }

    /// Triangulates the region inside `border` and outside every hole, where contours are indices into `vertices`.
    ///
    /// Contours may be given in either winding. Every contour needs at least 3 vertices, and no two vertices used by
    /// the contours may share a position.
    pub fn triangulate_indexed<V, H>(&self, vertices: &[V], border: &[usize], holes: &[H]) -> Result<Triangulation, TriangulationError>
    where
        V: Vertex<Coordinate = C>,
        H: AsRef<[usize]>,
    {
        let buffer = VertexBuffer::from_vertices(vertices);
        let contours: Vec<Contour<'_>> = std::iter::once(Contour::border(border))
            .chain(holes.iter().map(|hole| Contour::hole(hole.as_ref())))
            .collect();
        self.run(&buffer, &contours)
    }

    /// Triangulates `border` minus `holes` in the plane spanned by `x_axis` and `y_axis` of `system`,
    /// then appends the result to `mesh`.
    ///
    /// The vertices of the border and of each hole are appended in that order, followed by the indices.
    /// Holes with fewer than 3 vertices are ignored. Nothing is appended if an error is returned.
    pub fn triangulate_into_mesh<V, H, S, M>(&self, system: &S, x_axis: Axis, y_axis: Axis, border: &[V], holes: &[H], mesh: &mut M) -> Result<Triangulation, TriangulationError>
    where
        V: Vertex<Coordinate = C>,
        H: AsRef<[V]>,
        S: CoordinateSystem<C> + ?Sized,
        M: MeshBuilder<C> + ?Sized,
    {
        if x_axis == y_axis {
            return Err(TriangulationError::CoincidentAxes(x_axis));
        }

        let holes: Vec<&[V]> = holes.iter().map(AsRef::<[V]>::as_ref).filter(|hole| hole.len() >= 3).collect();
        let vertex_count = border.len() + holes.iter().map(|hole| hole.len()).sum::<usize>();

        let mut buffer = VertexBuffer::with_capacity(vertex_count);
        let mut ranges = Vec::with_capacity(holes.len() + 1);
        for polygon in std::iter::once(border).chain(holes.iter().copied()) {
            let start = buffer.extend_from_vertices(polygon);
            ranges.push((start..start + polygon.len()).collect::<Vec<usize>>());
        }

        let contours: Vec<Contour<'_>> = ranges.iter()
            .enumerate()
            .map(|(i, indices)| if i == 0 { Contour::border(indices) } else { Contour::hole(indices) })
            .collect();

        let triangulation = self.run(&buffer, &contours)?;
        mesh::assemble(system, x_axis, y_axis, &buffer, triangulation.triangles(), mesh)?;
        Ok(triangulation)
    }

    fn run(&self, vertices: &VertexBuffer<C>, contours: &[Contour<'_>]) -> Result<Triangulation, TriangulationError> {
        #[cfg(feature = "debugging")]
        let mut tracer = debug::Tracer::new(vertices);

        // Out of bounds indices are reported by the normalizer
        let tolerance = self.tolerance.scaled_to(contours.iter()
            .flat_map(|contour| contour.indices())
            .filter_map(|&vi| vertices.coords().get(vi).copied()));

        let mut events = EventSet::new();
        for contour in contours {
            let normalized = normalizer::normalize(contour, vertices, &tolerance)?;
            events.insert_contour(&normalized, vertices)?;
        }

        #[cfg(feature = "debugging")]
        {
            tracer.output_svg(&events, vertices, SvgTriangulationStyle::default(), SvgOutputLevel::MajorSteps);
            tracer.advance_step();
        }

        let sweep = Sweep::new(vertices, tolerance);
        #[cfg(feature = "debugging")]
        let monotones = sweep.run(&events, |sweep, event| {
            tracer.output_svg(sweep, vertices, SvgTriangulationStyle::highlight_vertex(event.vertex()), SvgOutputLevel::AllSteps);
        })?;
        #[cfg(not(feature = "debugging"))]
        let monotones = sweep.run(&events, |_, _| { })?;

        #[cfg(feature = "debugging")]
        {
            tracer.advance_step();
            tracer.output_svg(&monotones[..], vertices, SvgTriangulationStyle::default(), SvgOutputLevel::MajorSteps);
            tracer.advance_step();
        }

        let border_len = contours.first().map_or(0, Contour::len);
        let hole_lens = contours.iter().skip(1).map(Contour::len);
        let mut triangles = Vec::with_capacity(mesh::estimate_triangle_count(border_len, hole_lens));
        let mut monotone_triangles = Vec::with_capacity(monotones.len());

        for chain in &monotones {
            let start = triangles.len();
            if let Some(monotone) = Monotone::new(chain.vertices(), vertices, &tolerance)? {
                monotone.triangulate(self.target, &tolerance, &mut triangles)?;
            }
            monotone_triangles.push(start..triangles.len());
        }

        let triangulation = Triangulation {
            target: self.target,
            event_count: events.len(),
            monotones,
            monotone_triangles,
            triangles,
        };

        #[cfg(feature = "debugging")]
        {
            tracer.output_svg(triangulation.triangles(), vertices, SvgTriangulationStyle::default(), SvgOutputLevel::ResultOnly);
            tracer.write_state(&triangulation);
        }

        Ok(triangulation)
    }
}

use crate::{Axis, AxisFrame, CoordinateSystem, MeshBuilder, MeshError, TriangleMesh, TriangulationError, Triangulator, Winding};

use super::util;

/// Merges vertices at identical positions
#[derive(Default)]
struct WeldingMesh {
    mesh: TriangleMesh<f64>,
}

impl MeshBuilder<f64> for WeldingMesh {
    fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    fn add_vertex(&mut self, position: [f64; 3]) -> Result<u32, MeshError> {
        match self.mesh.vertices().iter().position(|&v| v == position) {
            Some(index) => Ok(index as u32),
            None => self.mesh.add_vertex(position),
        }
    }

    fn add_index(&mut self, index: u32) {
        self.mesh.add_index(index);
    }
}

/// Accepts no vertices
struct FullMesh;

impl MeshBuilder<f64> for FullMesh {
    fn vertex_count(&self) -> usize {
        0
    }

    fn add_vertex(&mut self, _position: [f64; 3]) -> Result<u32, MeshError> {
        Err(MeshError::IndexOverflow(u32::MAX as usize))
    }

    fn add_index(&mut self, _index: u32) {
        panic!("Index added without a vertex");
    }
}

fn frame() -> (Vec<[f64; 2]>, Vec<Vec<[f64; 2]>>) {
    let border = vec![[0., 0.], [4., 0.], [4., 4.], [0., 4.]];
    let holes = vec![vec![[1., 1.], [3., 1.], [3., 3.], [1., 3.]]];
    (border, holes)
}

#[test]
fn triangulate_into_mesh() {
    let (border, holes) = frame();
    let mut mesh = TriangleMesh::new();
    crate::triangulate(&AxisFrame::identity(), Axis::X, Axis::Y, &border, &holes, Winding::Counterclockwise, &mut mesh)
        .expect("Triangulation failed");

    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.index_count(), 24);
    assert_eq!(mesh.vertices()[5], [3., 1., 0.]);
    mesh.validate_indices().unwrap();

    for [a, b, c] in mesh.triangles() {
        let [a, b, c] = [a, b, c].map(|i| mesh.vertices()[i as usize]);
        let normal_z = (b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1]);
        assert!(normal_z > 0.);
    }
}

#[test]
fn appends_to_existing_mesh() {
    let (border, holes) = frame();
    let mut mesh = TriangleMesh::new();
    let triangulator = Triangulator::new(Winding::Clockwise);
    let first = triangulator.triangulate_into_mesh(&AxisFrame::identity(), Axis::X, Axis::Y, &border, &holes, &mut mesh).unwrap();
    let second = triangulator.triangulate_into_mesh(&AxisFrame::identity(), Axis::X, Axis::Y, &border, &holes, &mut mesh).unwrap();
    assert_eq!(first.triangles(), second.triangles());

    assert_eq!(mesh.vertex_count(), 16);
    let (front, back) = mesh.indices().split_at(24);
    for (&i, &j) in front.iter().zip(back) {
        assert_eq!(i + 8, j);
    }
    mesh.validate_indices().unwrap();
}

#[test]
fn short_holes_are_skipped() {
    let (border, mut holes) = frame();
    holes.push(vec![[2., 3.5], [2.5, 3.5]]);
    let mut mesh = TriangleMesh::new();
    let triangulation = Triangulator::new(Winding::Counterclockwise)
        .triangulate_into_mesh(&AxisFrame::identity(), Axis::X, Axis::Y, &border, &holes, &mut mesh)
        .unwrap();

    assert_eq!(triangulation.len(), 8);
    assert_eq!(mesh.vertex_count(), 8);
}

#[test]
fn vertical_plane() {
    let (border, holes) = frame();
    let mut system = AxisFrame::identity();
    system.set_origin([0., 0., 10.]);
    let mut mesh = TriangleMesh::new();
    crate::triangulate(&system, Axis::Z, Axis::Y, &border, &holes, Winding::Counterclockwise, &mut mesh).unwrap();

    for (v, p) in mesh.vertices().iter().zip(border.iter().chain(holes.iter().flatten())) {
        assert_eq!(*v, [0., p[1], 10. + p[0]]);
        assert_eq!(system.project(*v, Axis::Z, Axis::Y), *p);
    }
}

#[test]
fn random_meshes_are_consistent() {
    let mut rng = util::random::rng(3);
    let mut mesh = TriangleMesh::new();
    for _ in 0..20 {
        let polygon_list = util::random::polygon_with_holes(&mut rng, 40, 3);
        let (border, holes) = polygon_list.split_at(1);
        crate::triangulate(&AxisFrame::identity(), Axis::X, Axis::Y, &border[0], holes, Winding::Clockwise, &mut mesh).unwrap();
    }
    mesh.validate_indices().unwrap();

    for normal in mesh.generate_normals().unwrap() {
        assert_eq!(normal, [0., 0., -1.]);
    }
}

#[test]
fn validate() {
    let mut mesh = TriangleMesh::<f32>::new();
    for p in [[0., 0., 0.], [1., 0., 0.], [0., 1., 0.]] {
        mesh.add_vertex(p).unwrap();
    }
    for i in [0, 1, 2, 2] {
        mesh.add_index(i);
    }
    assert_eq!(mesh.validate_index_count(), Err(MeshError::IndexCountNotMultipleOfThree(4)));
    assert_eq!(mesh.flip(), Err(MeshError::IndexCountNotMultipleOfThree(4)));

    mesh.add_index(1);
    mesh.add_index(3);
    assert_eq!(mesh.validate_index_count(), Ok(()));
    assert_eq!(mesh.validate_indices(), Err(MeshError::IndexOutOfRange { index: 3, vertex_count: 3 }));
    assert!(mesh.generate_normals().is_err());

    mesh.reset();
    assert_eq!(mesh.vertex_count(), 0);
    assert_eq!(mesh.index_count(), 0);
}

#[test]
fn flip_and_normals() {
    let mut mesh = TriangleMesh::<f64>::new();
    for p in [[0., 0., 0.], [1., 0., 0.], [0., 1., 0.], [5., 5., 5.]] {
        mesh.add_vertex(p).unwrap();
    }
    for i in [0, 1, 2] {
        mesh.add_index(i);
    }

    let normals = mesh.generate_normals().unwrap();
    assert_eq!(normals, vec![[0., 0., 1.], [0., 0., 1.], [0., 0., 1.], [0., 0., 0.]]);

    mesh.flip().unwrap();
    assert_eq!(mesh.indices(), &[0, 2, 1]);
    assert_eq!(mesh.generate_normals().unwrap()[0], [0., 0., -1.]);
}

#[test]
fn extend() {
    let (border, holes) = frame();
    let mut square = TriangleMesh::new();
    crate::triangulate(&AxisFrame::identity(), Axis::X, Axis::Y, &border, &[] as &[Vec<[f64; 2]>], Winding::Counterclockwise, &mut square).unwrap();
    let mut framed = TriangleMesh::new();
    crate::triangulate(&AxisFrame::identity(), Axis::X, Axis::Y, &border, &holes, Winding::Counterclockwise, &mut framed).unwrap();

    let mut mesh = square.clone();
    mesh.extend(&framed, |[x, y, z]| [x, y, z + 1.]).unwrap();
    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(mesh.index_count(), 6 + 24);
    assert_eq!(mesh.vertices()[4], [0., 0., 1.]);
    assert_eq!(&mesh.indices()[..6], square.indices());
    assert!(mesh.indices()[6..].iter().all(|&i| i >= 4));
    mesh.validate_indices().unwrap();
}

#[test]
fn builder_indices_are_used() {
    let left = [[0f64, 0.], [1., 0.], [1., 1.], [0., 1.]];
    let right = [[1f64, 0.], [2., 0.], [2., 1.], [1., 1.]];
    let mut welded = WeldingMesh::default();
    for square in [&left, &right] {
        crate::triangulate(&AxisFrame::identity(), Axis::X, Axis::Y, square, &[] as &[Vec<[f64; 2]>], Winding::Counterclockwise, &mut welded).unwrap();
    }

    let mesh = welded.mesh;
    assert_eq!(mesh.vertex_count(), 6);
    assert_eq!(mesh.index_count(), 12);
    mesh.validate_indices().unwrap();

    let mut area = 0.;
    for [a, b, c] in mesh.triangles() {
        let [a, b, c] = [a, b, c].map(|i| mesh.vertices()[i as usize]);
        let doubled = (b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1]);
        assert!(doubled > 0.);
        area += doubled / 2.;
    }
    assert_eq!(area, 2.);
}

#[test]
fn rejected_vertex_is_reported() {
    let (border, holes) = frame();
    let result = crate::triangulate(&AxisFrame::identity(), Axis::X, Axis::Y, &border, &holes, Winding::Counterclockwise, &mut FullMesh);
    let error = result.unwrap_err();
    assert!(matches!(error, TriangulationError::Mesh(MeshError::IndexOverflow(_))));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn extend_rejects_invalid_meshes() {
    let mut broken = TriangleMesh::<f64>::new();
    broken.add_vertex([0., 0., 0.]).unwrap();
    for i in [0, 0, 1] {
        broken.add_index(i);
    }

    let mut mesh = TriangleMesh::new();
    mesh.add_vertex([1., 1., 1.]).unwrap();
    let before = mesh.clone();
    assert_eq!(mesh.extend(&broken, |v| v), Err(MeshError::IndexOutOfRange { index: 1, vertex_count: 1 }));
    assert_eq!(mesh, before);
}

use num_traits::Float;

use crate::errors::MeshError;
use super::{Point3, add, cross, mesh_index, normalize, sub};

/// Receives the vertices and indices of a triangulation
pub trait MeshBuilder<C: Float> {
    /// The number of vertices already in the mesh
    fn vertex_count(&self) -> usize;

    /// Appends a vertex, returning the index triangles refer to it by.
    /// Builders may merge vertices, so indices need not be sequential.
    fn add_vertex(&mut self, position: Point3<C>) -> Result<u32, MeshError>;

    fn add_index(&mut self, index: u32);

    /// Make room for `vertices` more vertices and `indices` more indices
    fn reserve(&mut self, _vertices: usize, _indices: usize) { }
}

/// An indexed triangle mesh: a vertex buffer plus three indices per triangle
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh<C: Float> {
    vertices: Vec<Point3<C>>,
    indices: Vec<u32>,
}

impl<C: Float> Default for TriangleMesh<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Float> TriangleMesh<C> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn vertices(&self) -> &[Point3<C>] { &self.vertices }

    pub fn indices(&self) -> &[u32] { &self.indices }

    pub fn vertex_count(&self) -> usize { self.vertices.len() }

    pub fn index_count(&self) -> usize { self.indices.len() }

    /// Iterates over complete triangles; a trailing partial triangle is skipped
    pub fn triangles(&self) -> impl '_ + Iterator<Item=[u32; 3]> {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Removes all content and releases the buffers
    pub fn reset(&mut self) {
        self.vertices = Vec::new();
        self.indices = Vec::new();
    }

    pub fn reserve_vertices(&mut self, additional: usize) {
        self.vertices.reserve(additional);
    }

    pub fn reserve_indices(&mut self, additional: usize) {
        self.indices.reserve(additional);
    }

    pub fn validate_index_count(&self) -> Result<(), MeshError> {
        if self.indices.len() % 3 != 0 {
            Err(MeshError::IndexCountNotMultipleOfThree(self.indices.len()))
        } else {
            Ok(())
        }
    }

    pub fn validate_indices(&self) -> Result<(), MeshError> {
        self.validate_index_count()?;

        let vertex_count = self.vertices.len();
        match self.indices.iter().find(|&&index| index as usize >= vertex_count) {
            Some(&index) => Err(MeshError::IndexOutOfRange { index, vertex_count }),
            None => Ok(()),
        }
    }

    /// Reverses the winding of every triangle
    pub fn flip(&mut self) -> Result<(), MeshError> {
        self.validate_index_count()?;

        for triangle in self.indices.chunks_exact_mut(3) {
            triangle.swap(1, 2);
        }
        Ok(())
    }

    /// Appends `other`, with each of its vertices mapped through `transform`.
    /// Nothing is appended if `other` has invalid indices or the combined mesh needs indices past `u32`.
    pub fn extend<F: Fn(Point3<C>) -> Point3<C>>(&mut self, other: &TriangleMesh<C>, transform: F) -> Result<(), MeshError> {
        other.validate_indices()?;
        let offset = mesh_index(self.vertices.len())?;
        if let Some(last) = (self.vertices.len() + other.vertices.len()).checked_sub(1) {
            mesh_index(last)?;
        }

        self.vertices.reserve(other.vertices.len());
        self.indices.reserve(other.indices.len());
        self.vertices.extend(other.vertices.iter().map(|&v| transform(v)));
        self.indices.extend(other.indices.iter().map(|&i| i + offset));
        Ok(())
    }

    /// One normal per vertex: the normalized sum of the unit normals of every triangle using the vertex.
    /// Vertices no triangle uses get a zero normal.
    pub fn generate_normals(&self) -> Result<Vec<Point3<C>>, MeshError> {
        self.validate_indices()?;

        let zero = C::zero();
        let mut normals = vec![[zero, zero, zero]; self.vertices.len()];
        for [a, b, c] in self.triangles() {
            let (a, b, c) = (a as usize, b as usize, c as usize);
            let ab = normalize(sub(self.vertices[b], self.vertices[a]));
            let ac = normalize(sub(self.vertices[c], self.vertices[a]));
            let n = normalize(cross(ab, ac));

            for vi in [a, b, c] {
                normals[vi] = add(normals[vi], n);
            }
        }

        for normal in normals.iter_mut() {
            *normal = normalize(*normal);
        }
        Ok(normals)
    }
}

impl<C: Float> MeshBuilder<C> for TriangleMesh<C> {
    fn vertex_count(&self) -> usize {
        TriangleMesh::vertex_count(self)
    }

    fn add_vertex(&mut self, position: Point3<C>) -> Result<u32, MeshError> {
        let index = mesh_index(self.vertices.len())?;
        self.vertices.push(position);
        Ok(index)
    }

    fn add_index(&mut self, index: u32) {
        self.indices.push(index);
    }

    fn reserve(&mut self, vertices: usize, indices: usize) {
        self.reserve_vertices(vertices);
        self.reserve_indices(indices);
    }
}

impl<C: Float, B: MeshBuilder<C>> MeshBuilder<C> for &mut B {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn add_vertex(&mut self, position: Point3<C>) -> Result<u32, MeshError> {
        (**self).add_vertex(position)
    }

    fn add_index(&mut self, index: u32) {
        (**self).add_index(index)
    }

    fn reserve(&mut self, vertices: usize, indices: usize) {
        (**self).reserve(vertices, indices)
    }
}

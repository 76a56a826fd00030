use std::ops;

use num_traits::Float;

use crate::{TriangulationError, Vertex};
use super::Coords;

/// The caller's vertices, converted once to plain coordinates
pub(crate) struct VertexBuffer<C: Float> {
    coords: Vec<Coords<C>>,
}

impl<C: Float> VertexBuffer<C> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            coords: Vec::with_capacity(capacity),
        }
    }

    pub fn from_vertices<V: Vertex<Coordinate = C>>(vertices: &[V]) -> Self {
        let mut buffer = Self::with_capacity(vertices.len());
        buffer.extend_from_vertices(vertices);
        buffer
    }

    /// Appends `vertices`, returning the index of the first one appended
    pub fn extend_from_vertices<V: Vertex<Coordinate = C>>(&mut self, vertices: &[V]) -> usize {
        let start = self.coords.len();
        self.coords.extend(vertices.iter().map(Coords::of));
        start
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn coords(&self) -> &[Coords<C>] {
        &self.coords
    }

    pub fn get(&self, index: usize) -> Result<Coords<C>, TriangulationError> {
        self.coords.get(index)
            .copied()
            .ok_or(TriangulationError::IndexOutOfBounds { index, len: self.coords.len() })
    }
}

impl<C: Float> ops::Index<usize> for VertexBuffer<C> {
    type Output = Coords<C>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coords[index]
    }
}

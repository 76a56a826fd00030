use std::{error, fmt};

use backtrace::Backtrace;

use crate::Axis;

/// Describes why a triangulation call failed. No output is committed when an error is returned.
#[derive(Debug)]
#[non_exhaustive]
pub enum TriangulationError {
    /// A border (or an indexed hole) was supplied with fewer than 3 vertices
    DegenerateContour {
        vertices: usize,
    },
    /// Two input vertices share identical (x, y) coordinates
    DuplicateVertex {
        first: usize,
        second: usize,
    },
    /// Edges were still open once every vertex had been swept.
    /// This indicates malformed or self-intersecting input.
    UnresolvedSweep {
        open_edges: usize,
    },
    /// A contour referenced a vertex outside the vertex buffer
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
    /// The two projection axes are the same axis
    CoincidentAxes(Axis),
    /// A vertex index does not fit into the 32 bit index buffer of the mesh
    IndexOverflow(usize),
    /// The mesh builder rejected a vertex
    Mesh(MeshError),
    /// A triangulation invariant was violated, either by input the preconditions do not allow or by a bug.
    InternalError(InternalError),
}

impl TriangulationError {
    #[inline(always)]
    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        TriangulationError::InternalError(InternalError::new(msg))
    }
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateContour { vertices } => write!(f, "Contour only contains {} vertices", vertices),
            Self::DuplicateVertex { first, second } => write!(f, "Vertices {} and {} share the same coordinates", first, second),
            Self::UnresolvedSweep { open_edges } => write!(f, "Triangulation could not be completed, {} edges remain open", open_edges),
            Self::IndexOutOfBounds { index, len } => write!(f, "Vertex index {} is out of bounds for {} vertices", index, len),
            Self::CoincidentAxes(axis) => write!(f, "Both projection axes are {:?}", axis),
            Self::IndexOverflow(index) => write!(f, "Vertex index {} does not fit into a u32", index),
            Self::Mesh(error) => fmt::Display::fmt(error, f),
            Self::InternalError(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl error::Error for TriangulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InternalError(error) => Some(error),
            Self::Mesh(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct InternalError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl InternalError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for InternalError { }

/// Describes an inconsistency found while validating a [TriangleMesh](crate::TriangleMesh)
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum MeshError {
    /// The index buffer does not describe whole triangles
    IndexCountNotMultipleOfThree(usize),
    /// An index refers past the end of the vertex buffer
    IndexOutOfRange {
        index: u32,
        vertex_count: usize,
    },
    /// A vertex index does not fit into 32 bits
    IndexOverflow(usize),
}

impl From<MeshError> for TriangulationError {
    fn from(error: MeshError) -> Self {
        TriangulationError::Mesh(error)
    }
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexCountNotMultipleOfThree(count) => write!(f, "Number of indices ({}) must be divisible by 3", count),
            Self::IndexOutOfRange { index, vertex_count } => write!(f, "Index {} is invalid for a mesh of {} vertices", index, vertex_count),
            Self::IndexOverflow(index) => write!(f, "Vertex index {} does not fit into a u32", index),
        }
    }
}

impl error::Error for MeshError { }

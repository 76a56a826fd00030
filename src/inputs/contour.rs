use crate::Winding;

/// What a contour contributes to the filled region
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ContourRole {
    /// The outer boundary of the polygon
    Border,
    /// A region cut out of the border
    Hole,
}

impl ContourRole {
    /// The winding every contour of this role is normalized to before the sweep.
    ///
    /// Borders run clockwise and holes counterclockwise, so the filled region always lies to the right of an edge.
    pub fn required_winding(self) -> Winding {
        match self {
            ContourRole::Border => Winding::Clockwise,
            ContourRole::Hole => Winding::Counterclockwise,
        }
    }
}

/// A closed polygon given as indices into a shared vertex buffer.
///
/// Consecutive indices form the edges of the contour, and the last index connects back to the first.
#[derive(Debug, Clone, Copy)]
pub struct Contour<'a> {
    indices: &'a [usize],
    role: ContourRole,
}

impl<'a> Contour<'a> {
    pub fn new(indices: &'a [usize], role: ContourRole) -> Self {
        Self { indices, role }
    }

    pub fn border(indices: &'a [usize]) -> Self {
        Self::new(indices, ContourRole::Border)
    }

    pub fn hole(indices: &'a [usize]) -> Self {
        Self::new(indices, ContourRole::Hole)
    }

    pub fn indices(&self) -> &'a [usize] { self.indices }

    pub fn role(&self) -> ContourRole { self.role }

    pub fn len(&self) -> usize { self.indices.len() }

    pub fn is_empty(&self) -> bool { self.indices.is_empty() }

    /// Iterates over every vertex with its predecessor and successor, in contour order
    pub(crate) fn neighborhoods(&self) -> impl '_ + Iterator<Item=(usize, usize, usize)> {
        let len = self.indices.len();
        (0..len).map(move |i| {
            let prev = self.indices[(i + len - 1) % len];
            let next = self.indices[(i + 1) % len];
            (prev, self.indices[i], next)
        })
    }
}

use num_traits::Float;

use crate::{Contour, ContourRole, Tolerance, TriangulationError, Winding, inputs::VertexBuffer, math};

/// A vertex together with its neighbors, oriented so the contour runs in its role's required winding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Link {
    pub prev: usize,
    pub vertex: usize,
    pub next: usize,
}

/// The links of one contour after orientation
#[derive(Debug)]
pub(crate) struct NormalizedContour {
    role: ContourRole,
    /// `None` if the contour's signed area is within tolerance of zero
    input_winding: Option<Winding>,
    links: Vec<Link>,
}

impl NormalizedContour {
    pub fn role(&self) -> ContourRole { self.role }

    pub fn input_winding(&self) -> Option<Winding> { self.input_winding }

    /// `true` if the contour was supplied against its required winding
    pub fn is_reversed(&self) -> bool {
        matches!(self.input_winding(), Some(w) if w != self.role.required_winding())
    }

    pub fn links(&self) -> &[Link] { &self.links }
}

/// Orients `contour` to its role's winding without touching the contour itself.
///
/// A contour whose area is within tolerance of zero has no winding and is kept in its given order.
pub(crate) fn normalize<C: Float>(contour: &Contour<'_>, vertices: &VertexBuffer<C>, tolerance: &Tolerance<C>) -> Result<NormalizedContour, TriangulationError> {
    if contour.len() < 3 {
        return Err(TriangulationError::DegenerateContour { vertices: contour.len() });
    }

    let mut points = Vec::with_capacity(contour.len());
    for &vi in contour.indices() {
        points.push(vertices.get(vi)?);
    }

    let two = C::one() + C::one();
    let area = math::doubled_signed_area(points.iter().copied()) / two;
    let input_winding = Winding::of_signed_area(area, tolerance.area);

    let mut normalized = NormalizedContour {
        role: contour.role(),
        input_winding,
        links: Vec::with_capacity(contour.len()),
    };

    let reversed = normalized.is_reversed();
    normalized.links.extend(contour.neighborhoods().map(|(prev, vertex, next)| {
        if reversed {
            Link { prev: next, vertex, next: prev }
        } else {
            Link { prev, vertex, next }
        }
    }));

    Ok(normalized)
}

use num_traits::Float;

use crate::inputs::Coords;

/// Thresholds used by the floating point predicates.
///
/// Both thresholds are relative: before a triangulation they are multiplied by the square of the largest side of
/// the input's bounding box, so the same polygon behaves the same at every scale. The predicates are not robust:
/// values within the scaled thresholds of zero are treated as zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<C: Float> {
    /// Signed areas within `area` of zero are degenerate and have no winding
    pub area: C,
    /// Cross products within `orientation` of zero count as collinear
    pub orientation: C,
}

impl<C: Float> Tolerance<C> {
    pub fn new(area: C, orientation: C) -> Self {
        Self { area, orientation }
    }

    /// Uses `epsilon` for both thresholds
    pub fn uniform(epsilon: C) -> Self {
        Self::new(epsilon, epsilon)
    }

    /// The absolute thresholds for the bounding box of `points`.
    /// Left unscaled when the box is empty, a single point, or too large to square.
    pub(crate) fn scaled_to<I: IntoIterator<Item=Coords<C>>>(&self, points: I) -> Self {
        let mut points = points.into_iter();
        let first = match points.next() {
            Some(first) => first,
            None => return *self,
        };

        let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x(), first.x(), first.y(), first.y());
        for p in points {
            min_x = min_x.min(p.x());
            max_x = max_x.max(p.x());
            min_y = min_y.min(p.y());
            max_y = max_y.max(p.y());
        }

        let extent = (max_x - min_x).max(max_y - min_y);
        let scale = extent * extent;
        if scale > C::zero() && scale.is_finite() {
            Self::new(self.area * scale, self.orientation * scale)
        } else {
            *self
        }
    }
}

impl<C: Float> Default for Tolerance<C> {
    fn default() -> Self {
        Self::uniform(C::epsilon())
    }
}

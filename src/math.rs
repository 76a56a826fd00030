use num_traits::Float;

use crate::{Vertex, inputs::Coords};

/// Twice the signed area of the closed polygon through `points`.
/// Positive for counterclockwise polygons, negative for clockwise ones.
pub(crate) fn doubled_signed_area<C: Float, I: IntoIterator<Item=Coords<C>>>(points: I) -> C {
    let mut points = points.into_iter();
    let first = match points.next() {
        Some(first) => first,
        None => return C::zero(),
    };

    let mut sum = C::zero();
    let mut prev = first;
    for p in points {
        sum = sum + prev.x() * p.y() - p.x() * prev.y();
        prev = p;
    }
    sum + prev.x() * first.y() - first.x() * prev.y()
}

/// Signed area of the closed polygon through `points` (shoelace formula).
/// Positive for counterclockwise polygons, negative for clockwise ones.
pub fn signed_area<V: Vertex>(points: &[V]) -> V::Coordinate {
    half(doubled_signed_area(points.iter().map(Coords::of)))
}

#[inline]
pub(crate) fn half<C: Float>(value: C) -> C {
    value / (C::one() + C::one())
}

/// z component of `(a - o) x (b - o)`
#[inline]
pub(crate) fn cross<C: Float>(o: Coords<C>, a: Coords<C>, b: Coords<C>) -> C {
    (a.x() - o.x()) * (b.y() - o.y()) - (b.x() - o.x()) * (a.y() - o.y())
}

/// `true` if `p` lies strictly to the right of the directed line `begin -> end`
#[inline]
pub(crate) fn is_right_of<C: Float>(begin: Coords<C>, end: Coords<C>, p: Coords<C>, tolerance: C) -> bool {
    cross(begin, end, p) < -tolerance
}

/// `true` if `p` lies strictly to the left of the directed line `begin -> end`
#[inline]
pub(crate) fn is_left_of<C: Float>(begin: Coords<C>, end: Coords<C>, p: Coords<C>, tolerance: C) -> bool {
    cross(begin, end, p) > tolerance
}

/// Vertical offset of `p` from the segment `s`-`e` at `p.x`: positive when `p` is above the segment.
///
/// Returns `None` when the segment does not span `p.x`. At an endpoint's x the offset to that endpoint is exact.
/// For a vertical segment at `p.x` the offset is measured to the nearest endpoint, and is zero between the endpoints.
pub(crate) fn signed_y_distance<C: Float>(s: Coords<C>, e: Coords<C>, p: Coords<C>) -> Option<C> {
    let dx = e.x() - s.x();
    if dx != C::zero() {
        if p.x() < s.x().min(e.x()) || p.x() > s.x().max(e.x()) {
            return None;
        }
        if p.x() == s.x() {
            return Some(p.y() - s.y());
        }
        if p.x() == e.x() {
            return Some(p.y() - e.y());
        }
        Some(p.y() - (p.x() - s.x()) * (e.y() - s.y()) / dx - s.y())
    } else if p.x() == s.x() {
        let (low, high) = (s.y().min(e.y()), s.y().max(e.y()));
        if p.y() < low {
            Some(p.y() - low)
        } else if p.y() > high {
            Some(p.y() - high)
        } else {
            Some(C::zero())
        }
    } else {
        None
    }
}

/// Cosine of the angle between straight up (or down, if `upward` is false) and the segment `s`-`e`,
/// directed away from whichever endpoint is nearer to `x`
pub(crate) fn vertical_alignment<C: Float>(s: Coords<C>, e: Coords<C>, x: C, upward: bool) -> C {
    let (from, to) = if (e.x() - x).abs() < (s.x() - x).abs() { (e, s) } else { (s, e) };
    let length = distance(from, to);
    if length == C::zero() {
        return C::zero();
    }
    let cos = (to.y() - from.y()) / length;
    if upward { cos } else { -cos }
}

fn orientation<C: Float>(o: Coords<C>, a: Coords<C>, b: Coords<C>) -> i8 {
    let c = cross(o, a, b);
    if c > C::zero() {
        1
    } else if c < C::zero() {
        -1
    } else {
        0
    }
}

fn on_segment<C: Float>(s: Coords<C>, e: Coords<C>, p: Coords<C>) -> bool {
    p.x() >= s.x().min(e.x()) && p.x() <= s.x().max(e.x()) &&
    p.y() >= s.y().min(e.y()) && p.y() <= s.y().max(e.y())
}

/// `true` if the closed segments `a0`-`a1` and `b0`-`b1` share at least one point
pub(crate) fn segments_intersect<C: Float>(a0: Coords<C>, a1: Coords<C>, b0: Coords<C>, b1: Coords<C>) -> bool {
    let o1 = orientation(a0, a1, b0);
    let o2 = orientation(a0, a1, b1);
    let o3 = orientation(b0, b1, a0);
    let o4 = orientation(b0, b1, a1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == 0 && on_segment(a0, a1, b0)) ||
    (o2 == 0 && on_segment(a0, a1, b1)) ||
    (o3 == 0 && on_segment(b0, b1, a0)) ||
    (o4 == 0 && on_segment(b0, b1, a1))
}

fn distance<C: Float>(a: Coords<C>, b: Coords<C>) -> C {
    (b.x() - a.x()).hypot(b.y() - a.y())
}

/// Checks whether `polygon` can not be triangulated as a simple polygon.
///
/// A polygon is degenerate if it has fewer than 3 vertices, an edge shorter than `min_edge_length`,
/// two adjacent edges folding back onto each other, or two non-adjacent edges that touch or cross.
/// The check is quadratic in the number of vertices.
pub fn is_polygon_degenerate<V: Vertex>(polygon: &[V], min_edge_length: V::Coordinate) -> bool {
    let n = polygon.len();
    if n < 3 {
        return true;
    }

    let p = |i: usize| Coords::of(&polygon[i % n]);

    for i in 0..n {
        let (a, b, c) = (p(i), p(i + 1), p(i + 2));
        let ab = distance(a, b);
        if ab < min_edge_length {
            return true;
        }
        // b doubles back along a -> b
        let bc = distance(b, c);
        let ac = distance(a, c);
        if ab >= ac + bc || bc >= ab + ac {
            return true;
        }
    }

    for i in 0..n {
        // Edges sharing a vertex with edge i are adjacent
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_intersect(p(i), p(i + 1), p(j), p(j + 1)) {
                return true;
            }
        }
    }

    false
}

use std::{cmp, fmt};

use num_traits::Float;
use ordered_float::OrderedFloat;

/// A two-dimensional point.
///
/// The coordinate type must implement [num_traits::Float], reexported as [crate::Float].
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: Float;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;
}

/// Plain coordinate pair used by every internal computation
#[derive(Clone, Copy, PartialEq)]
pub struct Coords<C: Float>([C; 2]);

impl<C: Float> Coords<C> {
    pub fn new(x: C, y: C) -> Self { Self([x, y]) }

    pub fn of<V: Vertex<Coordinate = C>>(v: &V) -> Self { Self([v.x(), v.y()]) }

    pub fn x(&self) -> C { self.0[0] }
    pub fn y(&self) -> C { self.0[1] }

    pub fn to_array(self) -> [C; 2] { self.0 }

    /// Sweep order: ascending x, then ascending y
    pub fn sweep_key(&self) -> SweepKey<C> {
        SweepKey(OrderedFloat(self.x()), OrderedFloat(self.y()))
    }

    /// `true` if `self` is visited before `other` by the left-to-right sweep
    pub fn precedes(&self, other: &Self) -> bool {
        self.sweep_key() < other.sweep_key()
    }
}

impl<C: Float> fmt::Debug for Coords<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Coords");
        if let Some(x) = self.x().to_f64() {
            tuple.field(&x);
        }
        if let Some(y) = self.y().to_f64() {
            tuple.field(&y);
        }
        tuple.finish()
    }
}

impl<C: Float> fmt::Display for Coords<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(x), Some(y)) = (self.x().to_f64(), self.y().to_f64()) {
            write!(f, "({}, {})", x, y)
        } else {
            write!(f, "Coords<{}>", std::any::type_name::<C>())
        }
    }
}

impl<C: Float> Vertex for Coords<C> {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate { self.0[0] }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate { self.0[1] }
}

/// Totally ordered (x, y) key. `-0.0` and `0.0` compare equal, so they count as the same position.
#[derive(Clone, Copy)]
pub struct SweepKey<C: Float>(OrderedFloat<C>, OrderedFloat<C>);

impl<C: Float> SweepKey<C> {
    pub fn coords(&self) -> Coords<C> {
        Coords::new(self.0.into_inner(), self.1.into_inner())
    }
}

// #[derive] would require `C: Ord`, which no float type implements
impl<C: Float> PartialEq for SweepKey<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == cmp::Ordering::Equal
    }
}

impl<C: Float> Eq for SweepKey<C> { }

impl<C: Float> PartialOrd for SweepKey<C> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Float> Ord for SweepKey<C> {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.0.cmp(&other.0).then_with(|| self.1.cmp(&other.1))
    }
}

impl<C: Float> fmt::Debug for SweepKey<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.coords(), f)
    }
}

impl<C: Float> PartialOrd for Coords<C> {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.sweep_key().cmp(&other.sweep_key()))
    }
}

impl<C: fmt::Debug + Float> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: fmt::Debug + Float> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}

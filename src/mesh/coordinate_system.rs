use num_traits::Float;

use super::{Point3, add, dot, scale, sub};

/// One of the three axes of a [CoordinateSystem]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The axis that is neither `self` nor `other`, or `None` if both are the same axis
    pub fn third(self, other: Axis) -> Option<Axis> {
        if self == other {
            return None;
        }
        Axis::ALL.iter().copied().find(|&a| a != self && a != other)
    }
}

/// Maps points between three dimensions and the plane spanned by two of the system's axes
pub trait CoordinateSystem<C: Float> {
    /// The coordinates of `point` within the plane spanned by `x_axis` and `y_axis`
    fn project(&self, point: Point3<C>, x_axis: Axis, y_axis: Axis) -> [C; 2];

    /// The point at `point` within the plane spanned by `x_axis` and `y_axis`
    fn unproject(&self, point: [C; 2], x_axis: Axis, y_axis: Axis) -> Point3<C>;
}

/// A coordinate system given by an origin and three axis directions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFrame<C: Float> {
    origin: Point3<C>,
    axes: [Point3<C>; 3],
}

impl<C: Float> AxisFrame<C> {
    pub fn new(origin: Point3<C>, x: Point3<C>, y: Point3<C>, z: Point3<C>) -> Self {
        Self {
            origin,
            axes: [x, y, z],
        }
    }

    /// The world coordinate system
    pub fn identity() -> Self {
        let (o, i) = (C::zero(), C::one());
        Self::new([o, o, o], [i, o, o], [o, i, o], [o, o, i])
    }

    pub fn origin(&self) -> Point3<C> { self.origin }

    pub fn axis(&self, axis: Axis) -> Point3<C> {
        self.axes[axis.index()]
    }

    pub fn set_origin(&mut self, origin: Point3<C>) {
        self.origin = origin;
    }

    /// Reverses the direction of `axis`
    pub fn flip_axis(&mut self, axis: Axis) {
        let a = &mut self.axes[axis.index()];
        *a = scale(*a, -C::one());
    }
}

impl<C: Float> Default for AxisFrame<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: Float> CoordinateSystem<C> for AxisFrame<C> {
    /// Drops the component along the remaining axis, then measures along `x_axis` and `y_axis`.
    /// With coincident axes the point is measured without being flattened.
    fn project(&self, point: Point3<C>, x_axis: Axis, y_axis: Axis) -> [C; 2] {
        let mut offset = sub(point, self.origin);
        if let Some(normal_axis) = x_axis.third(y_axis) {
            let normal = self.axis(normal_axis);
            let length_sq = dot(normal, normal);
            if length_sq > C::zero() {
                offset = sub(offset, scale(normal, dot(offset, normal) / length_sq));
            }
        }
        [dot(offset, self.axis(x_axis)), dot(offset, self.axis(y_axis))]
    }

    fn unproject(&self, point: [C; 2], x_axis: Axis, y_axis: Axis) -> Point3<C> {
        add(self.origin, add(scale(self.axis(x_axis), point[0]), scale(self.axis(y_axis), point[1])))
    }
}

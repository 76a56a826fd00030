use std::collections::BTreeMap;

use num_traits::Float;
use smallvec::{SmallVec, smallvec};
use zot::Zot;

use crate::{Tolerance, TriangulationError, event::{Event, EventSet}, idx::{Idx, IdxDisplay, VecExt}, inputs::VertexBuffer, math};

/// A directed contour edge, from `begin` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct OrientedEdge {
    pub begin: usize,
    pub end: usize,
}

impl OrientedEdge {
    pub fn new(begin: usize, end: usize) -> Self {
        Self { begin, end }
    }

    pub fn incoming(event: &Event) -> Self {
        Self::new(event.prev(), event.vertex())
    }

    pub fn outgoing(event: &Event) -> Self {
        Self::new(event.vertex(), event.next())
    }
}

/// The vertices of a monotone polygon, collected while the sweep passes over it
#[derive(Debug, Clone, Default)]
pub(crate) struct MonotoneChain {
    vertices: SmallVec<[usize; 16]>,
}

impl MonotoneChain {
    fn seeded(vi: usize) -> Self {
        Self {
            vertices: smallvec![vi],
        }
    }

    fn push(&mut self, vi: usize) {
        self.vertices.push(vi);
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }
}

impl IdxDisplay for MonotoneChain {
    fn fmt(f: &mut std::fmt::Formatter<'_>, idx: usize) -> std::fmt::Result {
        write!(f, "mc{}", idx)
    }
}

/// Splits the normalized contours into monotone polygons with a single left-to-right sweep.
///
/// Every open edge maps to the chain of the region directly to its right. A vertex joins the chains of the
/// nearest open edges above and below it if it lies inside their regions, and always joins the chains of its
/// own two edges. A chain is finished once all of its edges have been passed.
pub(crate) struct Sweep<'v, C: Float> {
    vertices: &'v VertexBuffer<C>,
    tolerance: Tolerance<C>,
    chains: Vec<MonotoneChain>,
    open: BTreeMap<OrientedEdge, Idx<MonotoneChain>>,
}

impl<'v, C: Float> Sweep<'v, C> {
    pub fn new(vertices: &'v VertexBuffer<C>, tolerance: Tolerance<C>) -> Self {
        Self {
            vertices,
            tolerance,
            chains: Vec::new(),
            open: BTreeMap::new(),
        }
    }

    /// Runs the sweep over every event, returning the chains that form polygons in creation order.
    /// `on_event` sees the sweep state after each event.
    pub fn run<F: FnMut(&Self, &Event)>(mut self, events: &EventSet<C>, mut on_event: F) -> Result<Vec<MonotoneChain>, TriangulationError> {
        for event in events.iter() {
            self.process(event);
            on_event(&self, event);
        }
        self.finish()
    }

    fn process(&mut self, event: &Event) {
        let incoming = OrientedEdge::incoming(event);
        let outgoing = OrientedEdge::outgoing(event);
        let vi = event.vertex();
        let v = self.vertices[vi];

        let neighbors = match self.nearest_edges(event, incoming, outgoing) {
            (Some(below), Some(above)) if below == above => Zot::One(below),
            (Some(below), Some(above)) => Zot::Two(below, above),
            (Some(edge), None) | (None, Some(edge)) => Zot::One(edge),
            (None, None) => Zot::Zero,
        };

        // Edges whose region contains the vertex gain it as a chain vertex
        let extend = |edge: OrientedEdge, sweep: &mut Self| {
            let (begin, end) = (sweep.vertices[edge.begin], sweep.vertices[edge.end]);
            if math::is_right_of(begin, end, v, sweep.tolerance.orientation) {
                if let Some(&ci) = sweep.open.get(&edge) {
                    sweep.chains[ci].push(vi);
                }
            }
        };
        match neighbors {
            Zot::Zero => { },
            Zot::One(edge) => extend(edge, self),
            Zot::Two(below, above) => {
                extend(below, self);
                extend(above, self);
            },
        }

        for edge in [incoming, outgoing] {
            match self.open.get(&edge) {
                Some(&ci) => self.chains[ci].push(vi),
                None => {
                    let ci = self.chains.push_get_index(MonotoneChain::seeded(vi));
                    self.open.insert(edge, ci);
                },
            }
        }

        if event.incoming_ends_here() {
            self.open.remove(&incoming);
        }
        if event.outgoing_ends_here() {
            self.open.remove(&outgoing);
        }
    }

    /// The nearest open edges strictly below and strictly above the event's vertex, ignoring the vertex's own edges.
    ///
    /// Edges at the same distance meet at a common point straight above or below the vertex. Of those, the edge
    /// leaving that point closest to the direction of the vertex bounds the vertex's region. Remaining ties keep
    /// the first edge in key order.
    fn nearest_edges(&self, event: &Event, incoming: OrientedEdge, outgoing: OrientedEdge) -> (Option<OrientedEdge>, Option<OrientedEdge>) {
        let v = self.vertices[event.vertex()];
        let mut below: Option<(OrientedEdge, C)> = None;
        let mut above: Option<(OrientedEdge, C)> = None;
        let alignment = |edge: OrientedEdge, upward: bool| {
            math::vertical_alignment(self.vertices[edge.begin], self.vertices[edge.end], v.x(), upward)
        };

        for &edge in self.open.keys() {
            if edge == incoming || edge == outgoing {
                continue;
            }
            let distance = match math::signed_y_distance(self.vertices[edge.begin], self.vertices[edge.end], v) {
                Some(distance) => distance,
                None => continue,
            };

            if distance > C::zero() {
                let nearer = below.map_or(true, |(e, d)| {
                    distance < d || (distance == d && alignment(edge, true) > alignment(e, true))
                });
                if nearer {
                    below = Some((edge, distance));
                }
            } else if distance < C::zero() {
                let distance = -distance;
                let nearer = above.map_or(true, |(e, d)| {
                    distance < d || (distance == d && alignment(edge, false) > alignment(e, false))
                });
                if nearer {
                    above = Some((edge, distance));
                }
            }
        }

        (below.map(|(edge, _)| edge), above.map(|(edge, _)| edge))
    }

    /// Edges the sweep has entered but not yet passed
    #[cfg(feature = "debugging")]
    pub fn open_edges(&self) -> impl '_ + Iterator<Item=OrientedEdge> {
        self.open.keys().copied()
    }

    #[cfg(feature = "debugging")]
    pub fn chains(&self) -> &[MonotoneChain] {
        &self.chains
    }

    fn finish(self) -> Result<Vec<MonotoneChain>, TriangulationError> {
        if !self.open.is_empty() {
            return Err(TriangulationError::UnresolvedSweep { open_edges: self.open.len() });
        }

        Ok(self.chains.into_iter().filter(|chain| chain.len() >= 3).collect())
    }
}

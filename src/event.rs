use std::collections::{BTreeMap, btree_map};

use num_traits::Float;

use crate::{TriangulationError, Winding, inputs::{SweepKey, VertexBuffer}, normalizer::{Link, NormalizedContour}};

/// A vertex as seen by the sweep: its normalized neighbors and which of its edges end at it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Event {
    vertex: usize,
    prev: usize,
    next: usize,
    winding: Winding,
    incoming_ends_here: bool,
    outgoing_ends_here: bool,
}

impl Event {
    fn new<C: Float>(link: Link, winding: Winding, vertices: &VertexBuffer<C>) -> Self {
        let v = vertices[link.vertex];
        Self {
            vertex: link.vertex,
            prev: link.prev,
            next: link.next,
            winding,
            incoming_ends_here: vertices[link.prev].precedes(&v),
            outgoing_ends_here: vertices[link.next].precedes(&v),
        }
    }

    pub fn vertex(&self) -> usize { self.vertex }
    pub fn prev(&self) -> usize { self.prev }
    pub fn next(&self) -> usize { self.next }
    /// The winding of the contour this vertex belongs to, after normalization
    #[cfg_attr(not(any(test, feature = "debugging")), allow(dead_code))]
    pub fn winding(&self) -> Winding { self.winding }
    /// `true` if the edge from the predecessor is swept past at this vertex
    pub fn incoming_ends_here(&self) -> bool { self.incoming_ends_here }
    /// `true` if the edge to the successor is swept past at this vertex
    pub fn outgoing_ends_here(&self) -> bool { self.outgoing_ends_here }
}

/// Every vertex of the input, ordered by ascending x, then ascending y
pub(crate) struct EventSet<C: Float> {
    events: BTreeMap<SweepKey<C>, Event>,
}

impl<C: Float> EventSet<C> {
    pub fn new() -> Self {
        Self {
            events: BTreeMap::new(),
        }
    }

    pub fn insert_contour(&mut self, contour: &NormalizedContour, vertices: &VertexBuffer<C>) -> Result<(), TriangulationError> {
        let winding = contour.role().required_winding();
        for &link in contour.links() {
            self.insert(link, winding, vertices)?;
        }
        Ok(())
    }

    /// Fails if another vertex already occupies the same position
    pub fn insert(&mut self, link: Link, winding: Winding, vertices: &VertexBuffer<C>) -> Result<(), TriangulationError> {
        let key = vertices.get(link.vertex)?.sweep_key();
        vertices.get(link.prev)?;
        vertices.get(link.next)?;

        match self.events.entry(key) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(Event::new(link, winding, vertices));
                Ok(())
            },
            btree_map::Entry::Occupied(entry) => Err(TriangulationError::DuplicateVertex {
                first: entry.get().vertex,
                second: link.vertex,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Events in sweep order
    pub fn iter(&self) -> impl '_ + Iterator<Item=&Event> {
        self.events.values()
    }
}

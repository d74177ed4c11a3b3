//! A polygon: one exterior ring plus zero or more hole rings.

use crate::bbox::Bbox;
use crate::point::Point;
use crate::ring::Ring;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The minimal geometry-accessor contract the clipping core is written
/// against (§6). `Polygon` is the crate's own concrete model satisfying it;
/// an external geometry representation can implement this trait directly
/// instead of converting into `Polygon`.
pub trait GeometryAccessor {
    fn exterior(&self) -> &Ring;
    fn holes(&self) -> &[Ring];
}

/// One exterior ring plus its holes. Holes are assumed interior-disjoint
/// from one another and wholly contained in the exterior; this is a
/// precondition the clipping core relies on rather than re-validates per
/// operation (§7 only covers the degeneracies it can cheaply detect).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    pub exterior: Ring,
    pub holes: Vec<Ring>,
}

impl Polygon {
    pub fn new(exterior: Ring, holes: Vec<Ring>) -> Self {
        Self { exterior, holes }
    }

    /// Convenience constructor for a hole-free polygon from raw points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self::new(Ring::new(points), Vec::new())
    }

    pub fn bounding_box(&self) -> Option<Bbox> {
        self.exterior.bounding_box()
    }

    /// A polygon is empty per §7 when its exterior ring is degenerate
    /// (fewer than three distinct vertices).
    pub fn is_empty(&self) -> bool {
        self.exterior.is_degenerate()
    }
}

impl GeometryAccessor for Polygon {
    fn exterior(&self) -> &Ring {
        &self.exterior
    }

    fn holes(&self) -> &[Ring] {
        &self.holes
    }
}

//! C2 — the point-in-ring oracle.

use crate::point::Point;
use crate::ring::Ring;

/// Result of classifying a point against a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointPosition {
    In,
    On,
    Out,
}

/// How a caller folds [`PointPosition::On`] into a two-valued answer.
/// The raw oracle always distinguishes `On` from `In`/`Out`; this is the
/// per-call customization knob §4.2 describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnBoundary {
    /// `On` counts as inside.
    In,
    /// `On` counts as outside.
    Out,
    /// `On` is kept distinct (same as calling the raw oracle).
    Boundary,
}

impl PointPosition {
    /// Collapses `On` according to `on_is`.
    pub fn fold(self, on_is: OnBoundary) -> PointPosition {
        match (self, on_is) {
            (PointPosition::On, OnBoundary::In) => PointPosition::In,
            (PointPosition::On, OnBoundary::Out) => PointPosition::Out,
            (other, _) => other,
        }
    }

    pub fn is_in(self) -> bool {
        matches!(self, PointPosition::In)
    }

    pub fn is_on(self) -> bool {
        matches!(self, PointPosition::On)
    }

    pub fn is_out(self) -> bool {
        matches!(self, PointPosition::Out)
    }
}

/// C2: classifies `p` against `ring` as strictly inside, on, or strictly
/// outside, via ray-crossing with exact edge/vertex detection.
///
/// The ray cast is the horizontal half-line `y = p.y, x >= p.x`. Before
/// counting crossings, every edge is checked for exact incidence with `p`
/// (on a vertex or collinear with the edge and between its endpoints),
/// which must win over the crossing count regardless of parity.
pub fn point_in_ring(p: Point, ring: &Ring) -> PointPosition {
    if ring.is_degenerate() {
        return PointPosition::Out;
    }

    for (a, b) in ring.edges() {
        if point_on_segment(p, a, b) {
            return PointPosition::On;
        }
    }

    let mut inside = false;
    for (a, b) in ring.edges() {
        let crosses_ray = (a.y > p.y) != (b.y > p.y);
        if crosses_ray {
            let x_at_p_y = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if x_at_p_y > p.x {
                inside = !inside;
            }
        }
    }

    if inside {
        PointPosition::In
    } else {
        PointPosition::Out
    }
}

/// Exact point-on-segment test: `p` is collinear with `(a, b)` and within
/// the segment's bounding box.
fn point_on_segment(p: Point, a: Point, b: Point) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    if cross != 0.0 {
        return false;
    }
    let within_x = p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x);
    let within_y = p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y);
    within_x && within_y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Ring {
        Ring::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ])
    }

    #[test]
    fn center_is_inside() {
        assert_eq!(point_in_ring(Point::new(2.0, 2.0), &square()), PointPosition::In);
    }

    #[test]
    fn outside_is_outside() {
        assert_eq!(point_in_ring(Point::new(10.0, 10.0), &square()), PointPosition::Out);
    }

    #[test]
    fn vertex_is_on() {
        assert_eq!(point_in_ring(Point::new(0.0, 0.0), &square()), PointPosition::On);
    }

    #[test]
    fn edge_midpoint_is_on() {
        assert_eq!(point_in_ring(Point::new(2.0, 0.0), &square()), PointPosition::On);
    }

    #[test]
    fn fold_on_as_in() {
        let pos = PointPosition::On;
        assert_eq!(pos.fold(OnBoundary::In), PointPosition::In);
        assert_eq!(pos.fold(OnBoundary::Out), PointPosition::Out);
        assert_eq!(pos.fold(OnBoundary::Boundary), PointPosition::On);
    }

    #[test]
    fn degenerate_ring_is_always_outside() {
        let ring = Ring::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert_eq!(point_in_ring(Point::new(0.5, 0.5), &ring), PointPosition::Out);
    }
}

//! §4.9 ambient spatial predicates, built from C2 (point-in-ring) and
//! bounding-box prefiltering rather than the clipping pipeline proper.

use crate::classify::side;
use crate::intersect::{segment_intersection, SegmentIntersection};
use crate::point_in_ring::{point_in_ring, PointPosition};
use crate::polygon::Polygon;
use crate::ring::Ring;

fn vertex_positions<'a>(ring: &'a Ring, other: &'a Ring) -> impl Iterator<Item = PointPosition> + 'a {
    ring.points()[..ring.len()].iter().map(move |&p| point_in_ring(p, other))
}

/// `a`'s exterior has no point strictly outside `b`, and at least one point
/// strictly inside; `a` is not `b` itself.
pub fn within(a: &Polygon, b: &Polygon) -> bool {
    if a == b {
        return false;
    }
    let mut any_inside = false;
    for pos in vertex_positions(&a.exterior, &b.exterior) {
        if pos == PointPosition::Out {
            return false;
        }
        any_inside |= pos == PointPosition::In;
    }
    any_inside
}

/// Every point of `b` is `In` or `On` `a` (boundary touching allowed both
/// ways, unlike [`within`]).
pub fn covers(a: &Polygon, b: &Polygon) -> bool {
    vertex_positions(&b.exterior, &a.exterior).all(|pos| pos != PointPosition::Out)
}

/// True if an edge of `a` crosses an edge of `b` at a point strictly
/// interior to both segments.
fn rings_cross_transversally(a: &Ring, b: &Ring) -> bool {
    a.edges().any(|(a1, a2)| {
        b.edges().any(|(b1, b2)| {
            matches!(
                segment_intersection(a1, a2, b1, b2),
                SegmentIntersection::Point { fracs: (alpha, beta), .. }
                    if alpha > 0.0 && alpha < 1.0 && beta > 0.0 && beta < 1.0
            )
        })
    })
}

/// Bbox reject first, then no point of either ring lies `In`/`On` the
/// other and no edge of one transversally crosses an edge of the other.
pub fn disjoint(a: &Polygon, b: &Polygon) -> bool {
    match (a.bounding_box(), b.bounding_box()) {
        (Some(ba), Some(bb)) if ba.overlaps(&bb) => {}
        _ => return true,
    }
    let no_a_touches_b = vertex_positions(&a.exterior, &b.exterior).all(|p| p == PointPosition::Out);
    let no_b_touches_a = vertex_positions(&b.exterior, &a.exterior).all(|p| p == PointPosition::Out);
    no_a_touches_b && no_b_touches_a && !rings_cross_transversally(&a.exterior, &b.exterior)
}

/// `a` and `b` share interior area but neither covers the other. Boundary
/// contact alone (a shared edge or vertex with no interior overlap) is
/// [`touches`], not this.
pub fn overlaps(a: &Polygon, b: &Polygon) -> bool {
    if within(a, b) || within(b, a) || covers(a, b) || covers(b, a) {
        return false;
    }
    let a_enters_b = vertex_positions(&a.exterior, &b.exterior).any(|p| p == PointPosition::In);
    let b_enters_a = vertex_positions(&b.exterior, &a.exterior).any(|p| p == PointPosition::In);
    a_enters_b || b_enters_a || rings_cross_transversally(&a.exterior, &b.exterior)
}

/// Boundaries meet (`On`) but interiors are disjoint.
pub fn touches(a: &Polygon, b: &Polygon) -> bool {
    let boundary_meets = vertex_positions(&a.exterior, &b.exterior).any(|p| p == PointPosition::On)
        || vertex_positions(&b.exterior, &a.exterior).any(|p| p == PointPosition::On);
    boundary_meets
        && !overlaps(a, b)
        && !within(a, b)
        && !within(b, a)
        && !covers(a, b)
        && !covers(b, a)
}

/// Boundaries meet at an isolated, transversal point: an edge of `a` and an
/// edge of `b` cross strictly inside both segments, and C5's own wedge test
/// confirms each ring's far endpoint actually lands on opposite sides of the
/// other's edge there (built on [`side`] rather than a fresh sign test).
pub fn crosses(a: &Polygon, b: &Polygon) -> bool {
    let (ra, rb) = (&a.exterior, &b.exterior);
    for (a1, a2) in ra.edges() {
        for (b1, b2) in rb.edges() {
            if let SegmentIntersection::Point { point, fracs: (alpha, beta) } =
                segment_intersection(a1, a2, b1, b2)
            {
                let interior = alpha > 0.0 && alpha < 1.0 && beta > 0.0 && beta < 1.0;
                if !interior {
                    continue;
                }
                let a_is_split = side(a1, point, a2, b1) != side(a1, point, a2, b2);
                let b_is_split = side(b1, point, b2, a1) != side(b1, point, b2, a2);
                if a_is_split && b_is_split {
                    return true;
                }
            }
        }
    }
    false
}

fn rings_equal_up_to_rotation(a: &Ring, b: &Ring) -> bool {
    if a.len() != b.len() || a.len() == 0 {
        return false;
    }
    let a_pts = &a.points()[..a.len()];
    let b_pts = &b.points()[..b.len()];
    let n = b_pts.len();
    let starts = b_pts.iter().enumerate().filter(|(_, p)| **p == a_pts[0]);
    for (start, _) in starts {
        let forward = (0..n).all(|i| a_pts[i] == b_pts[(start + i) % n]);
        let backward = (0..n).all(|i| a_pts[i] == b_pts[(start + n - i) % n]);
        if forward || backward {
            return true;
        }
    }
    false
}

/// Same point set: bounding boxes equal, then exact ring equality up to
/// rotation/orientation, falling back to mutual point-in-ring containment
/// (handles the holes case, which rotation-matching doesn't cover).
pub fn equals(a: &Polygon, b: &Polygon) -> bool {
    if a.bounding_box() != b.bounding_box() {
        return false;
    }
    if rings_equal_up_to_rotation(&a.exterior, &b.exterior) {
        return true;
    }
    covers(a, b) && covers(b, a)
}

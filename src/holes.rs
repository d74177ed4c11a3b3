//! C7 — the hole integrator.
//!
//! C6 only ever sees exterior rings; this module re-applies each input's
//! holes to the exterior-only result by recursively invoking the
//! difference/intersection drivers on hole-only polygons (§4.7).

use crate::error::Error;
use crate::ops;
use crate::point_in_ring::{point_in_ring, OnBoundary, PointPosition};
use crate::polygon::Polygon;
use crate::ring::Ring;
use crate::trace::Operation;

fn ring_polygon(ring: &Ring) -> Polygon {
    Polygon::new(ring.clone(), Vec::new())
}

pub fn integrate(
    op: Operation,
    a: &Polygon,
    b: &Polygon,
    pieces: Vec<Polygon>,
) -> Result<Vec<Polygon>, Error> {
    if a.holes.is_empty() && b.holes.is_empty() {
        return Ok(pieces);
    }
    log::debug!(
        "integrating {} hole(s) from a and {} from b into {} piece(s) under {:?}",
        a.holes.len(),
        b.holes.len(),
        pieces.len(),
        op
    );
    match op {
        Operation::Intersection => integrate_intersection(a, b, pieces),
        Operation::Union => integrate_union(a, b, pieces),
        Operation::Difference => integrate_difference(a, b, pieces),
    }
}

/// Every hole of either input removes area from every current piece.
fn integrate_intersection(
    a: &Polygon,
    b: &Polygon,
    pieces: Vec<Polygon>,
) -> Result<Vec<Polygon>, Error> {
    let mut current = pieces;
    for hole in a.holes.iter().chain(b.holes.iter()) {
        let hole_poly = ring_polygon(hole);
        let mut next = Vec::new();
        for piece in &current {
            next.extend(ops::difference(piece, &hole_poly)?);
        }
        log::trace!("hole subtracted from {} piece(s), {} remain", current.len(), next.len());
        current = next;
    }
    Ok(current)
}

/// A hole of one input survives where the other input's exterior doesn't
/// fill it back in.
fn integrate_union(a: &Polygon, b: &Polygon, pieces: Vec<Polygon>) -> Result<Vec<Polygon>, Error> {
    let a_ext = ring_polygon(&a.exterior);
    let b_ext = ring_polygon(&b.exterior);

    let mut new_holes: Vec<Ring> = Vec::new();
    for hole in &a.holes {
        let leftovers = ops::difference(&ring_polygon(hole), &b_ext)?;
        log::trace!("a's hole left {} leftover piece(s) after subtracting b's exterior", leftovers.len());
        for leftover in leftovers {
            new_holes.push(leftover.exterior);
        }
    }
    for hole in &b.holes {
        let leftovers = ops::difference(&ring_polygon(hole), &a_ext)?;
        log::trace!("b's hole left {} leftover piece(s) after subtracting a's exterior", leftovers.len());
        for leftover in leftovers {
            new_holes.push(leftover.exterior);
        }
    }

    let mut pieces = pieces;
    if pieces.len() == 1 {
        log::trace!("single output piece: attaching all {} surviving hole(s) directly", new_holes.len());
        pieces[0].holes.extend(new_holes);
        return Ok(pieces);
    }

    for hole in new_holes {
        let sample = hole.points()[0];
        if let Some(piece) = pieces.iter_mut().find(|p| {
            point_in_ring(sample, &p.exterior).fold(OnBoundary::In) == PointPosition::In
        }) {
            log::trace!("assigned a surviving hole to its containing piece");
            piece.holes.push(hole);
        }
    }
    Ok(pieces)
}

/// `A`'s holes stay carved out of the result; `B`'s holes hand area back.
fn integrate_difference(
    a: &Polygon,
    b: &Polygon,
    pieces: Vec<Polygon>,
) -> Result<Vec<Polygon>, Error> {
    let mut current = pieces;
    for hole in &a.holes {
        let hole_poly = ring_polygon(hole);
        let mut next = Vec::new();
        for piece in &current {
            next.extend(ops::difference(piece, &hole_poly)?);
        }
        log::trace!("a's hole carved out of {} piece(s), {} remain", current.len(), next.len());
        current = next;
    }
    for hole in &b.holes {
        let reclaimed = ops::intersection(&ring_polygon(hole), a)?;
        log::trace!("b's hole handed back {} piece(s) of area inside a", reclaimed.len());
        current.extend(reclaimed);
    }
    Ok(current)
}

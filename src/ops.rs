//! C8 — the operation drivers.
//!
//! Each driver extracts exteriors, runs C3–C6 with its step rule, then
//! dispatches to C7 when either input has holes (§4.8).

use crate::classify::classify;
use crate::error::Error;
use crate::holes;
use crate::label::label;
use crate::polygon::Polygon;
use crate::ring::Ring;
use crate::trace::{self, Operation};
use crate::weave::weave;

/// The three set operations, as a trait implemented on [`Polygon`]. The
/// free functions below expose the exact same behavior at the crate root.
pub trait BooleanOps {
    fn intersection(&self, other: &Polygon) -> Result<Vec<Polygon>, Error>;
    fn union(&self, other: &Polygon) -> Result<Vec<Polygon>, Error>;
    fn difference(&self, other: &Polygon) -> Result<Vec<Polygon>, Error>;
}

impl BooleanOps for Polygon {
    fn intersection(&self, other: &Polygon) -> Result<Vec<Polygon>, Error> {
        intersection(self, other)
    }
    fn union(&self, other: &Polygon) -> Result<Vec<Polygon>, Error> {
        union(self, other)
    }
    fn difference(&self, other: &Polygon) -> Result<Vec<Polygon>, Error> {
        difference(self, other)
    }
}

pub fn intersection(a: &Polygon, b: &Polygon) -> Result<Vec<Polygon>, Error> {
    run(a, b, Operation::Intersection)
}

pub fn union(a: &Polygon, b: &Polygon) -> Result<Vec<Polygon>, Error> {
    run(a, b, Operation::Union)
}

pub fn difference(a: &Polygon, b: &Polygon) -> Result<Vec<Polygon>, Error> {
    run(a, b, Operation::Difference)
}

/// Dispatches to [`intersection`]/[`union`]/[`difference`] by name, for
/// callers that select the operation dynamically (a config value, a CLI
/// flag) rather than at the Rust call site. Any other name is the
/// "unsupported operation" case §7 reserves [`Error::UnsupportedOperation`]
/// for — never silently substituted for one of the three supported ops.
pub fn by_name(name: &str, a: &Polygon, b: &Polygon) -> Result<Vec<Polygon>, Error> {
    match name {
        "intersection" => intersection(a, b),
        "union" => union(a, b),
        "difference" => difference(a, b),
        _ => Err(Error::UnsupportedOperation),
    }
}

fn run(a: &Polygon, b: &Polygon, op: Operation) -> Result<Vec<Polygon>, Error> {
    // Empty input (§7): absorbing/identity behavior, resolved before any
    // woven list is built.
    if a.is_empty() && b.is_empty() {
        return Ok(vec![]);
    }
    if a.is_empty() {
        return Ok(match op {
            Operation::Union => vec![b.clone()],
            Operation::Intersection | Operation::Difference => vec![],
        });
    }
    if b.is_empty() {
        return Ok(match op {
            Operation::Intersection => vec![],
            Operation::Union | Operation::Difference => vec![a.clone()],
        });
    }

    let mut w = weave(&a.exterior, &b.exterior);

    let rings = if w.a_idx.is_empty() {
        trace::trace_no_intersections(&a.exterior, &b.exterior, op)?
    } else {
        if let Err(err) = label(&mut w.list_a, &b.exterior) {
            return fully_on_boundary_result(err, a, op);
        }
        if let Err(err) = label(&mut w.list_b, &a.exterior) {
            return fully_on_boundary_result(err, a, op);
        }
        classify(&mut w.list_a, &mut w.list_b, &w.a_idx);

        let traced = trace::trace(&w.list_a, &w.list_b, &w.a_idx, op);
        if traced.is_empty() {
            // Every intersection classified as a bounce (e.g. a single
            // shared vertex): fall back to the containment-based cases.
            trace::trace_no_intersections(&a.exterior, &b.exterior, op)?
        } else {
            traced
        }
    };

    let exterior_pieces: Vec<Polygon> = trace::group_into_polygons(rings)?
        .into_iter()
        .map(|(ext, hs)| Polygon::new(ext, hs))
        .collect();

    holes::integrate(op, a, b, exterior_pieces)
}

/// §7: the two rings are exactly coincident. Hard-coded per the error
/// taxonomy rather than surfaced as a failure.
fn fully_on_boundary_result(
    err: Error,
    a: &Polygon,
    op: Operation,
) -> Result<Vec<Polygon>, Error> {
    if err != Error::FullyOnBoundary {
        return Err(err);
    }
    Ok(match op {
        Operation::Intersection | Operation::Union => vec![a.clone()],
        Operation::Difference => vec![],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    fn square(x0: f64, y0: f64, size: f64) -> Ring {
        Ring::new(vec![
            Point::new(x0, y0),
            Point::new(x0 + size, y0),
            Point::new(x0 + size, y0 + size),
            Point::new(x0, y0 + size),
        ])
    }

    #[test]
    fn overlapping_squares_intersection_is_nonempty() {
        let a = Polygon::new(square(0.0, 0.0, 2.0), vec![]);
        let b = Polygon::new(square(1.0, 1.0, 2.0), vec![]);
        let result = intersection(&a, &b).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn disjoint_squares_union_is_two_pieces() {
        let a = Polygon::new(square(0.0, 0.0, 1.0), vec![]);
        let b = Polygon::new(square(10.0, 10.0, 1.0), vec![]);
        let result = union(&a, &b).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn disjoint_squares_difference_is_a() {
        let a = Polygon::new(square(0.0, 0.0, 1.0), vec![]);
        let b = Polygon::new(square(10.0, 10.0, 1.0), vec![]);
        let result = difference(&a, &b).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0], a);
    }

    #[test]
    fn containment_difference_produces_a_hole() {
        let a = Polygon::new(square(0.0, 0.0, 3.0), vec![]);
        let b = Polygon::new(square(1.0, 1.0, 1.0), vec![]);
        let result = difference(&a, &b).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].holes.len(), 1);
    }

    #[test]
    fn containment_intersection_is_the_inner_polygon() {
        let a = Polygon::new(square(0.0, 0.0, 3.0), vec![]);
        let b = Polygon::new(square(1.0, 1.0, 1.0), vec![]);
        let result = intersection(&a, &b).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].exterior, b.exterior);
    }

    #[test]
    fn identical_polygons_are_their_own_intersection_and_union() {
        let a = Polygon::new(square(0.0, 0.0, 2.0), vec![]);
        let b = Polygon::new(square(0.0, 0.0, 2.0), vec![]);
        assert_eq!(intersection(&a, &b).unwrap(), vec![a.clone()]);
        assert_eq!(union(&a, &b).unwrap(), vec![a.clone()]);
        assert!(difference(&a, &b).unwrap().is_empty());
    }

    #[test]
    fn by_name_dispatches_to_the_matching_driver() {
        let a = Polygon::new(square(0.0, 0.0, 2.0), vec![]);
        let b = Polygon::new(square(1.0, 1.0, 2.0), vec![]);
        assert_eq!(by_name("intersection", &a, &b).unwrap(), intersection(&a, &b).unwrap());
        assert_eq!(by_name("union", &a, &b).unwrap(), union(&a, &b).unwrap());
        assert_eq!(by_name("difference", &a, &b).unwrap(), difference(&a, &b).unwrap());
    }

    #[test]
    fn by_name_rejects_an_unknown_operation() {
        let a = Polygon::new(square(0.0, 0.0, 2.0), vec![]);
        let b = Polygon::new(square(1.0, 1.0, 2.0), vec![]);
        assert_eq!(by_name("xor", &a, &b), Err(Error::UnsupportedOperation));
    }
}

//! Integration coverage for the seed scenarios and algebraic invariants.

use approx::assert_relative_eq;
use polyclip::{difference, equals, intersection, polygon_area, union, Point, Polygon};

fn poly(points: &[(f64, f64)]) -> Polygon {
    Polygon::from_points(points.iter().map(|&(x, y)| Point::new(x, y)).collect())
}

fn total_area(pieces: &[Polygon]) -> f64 {
    pieces.iter().map(polygon_area).sum()
}

fn square(x0: f64, y0: f64, size: f64) -> Polygon {
    poly(&[
        (x0, y0),
        (x0 + size, y0),
        (x0 + size, y0 + size),
        (x0, y0 + size),
    ])
}

// Seed scenario 1: two congruent squares overlapping on a band.
#[test]
fn overlapping_diamonds_intersect_to_the_expected_quadrilateral() {
    let p = poly(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0), (5.0, -5.0)]);
    let q = poly(&[(3.0, 0.0), (8.0, 5.0), (13.0, 0.0), (8.0, -5.0)]);

    let result = intersection(&p, &q).unwrap();
    assert_eq!(result.len(), 1);
    assert_relative_eq!(polygon_area(&result[0]), 24.5, epsilon = 1e-9);
}

// Seed scenario 2: disjoint polygons.
#[test]
fn disjoint_diamonds() {
    let p = poly(&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0), (5.0, -5.0)]);
    let q = poly(&[(13.0, 0.0), (18.0, 5.0), (23.0, 0.0), (18.0, -5.0)]);

    assert!(intersection(&p, &q).unwrap().is_empty());
    assert_eq!(union(&p, &q).unwrap().len(), 2);
    let diff = difference(&p, &q).unwrap();
    assert_eq!(diff.len(), 1);
    assert!(equals(&diff[0], &p));
}

// Seed scenario 3: containment.
#[test]
fn containment() {
    let p = square(0.0, 0.0, 3.0);
    let q = square(1.0, 1.0, 1.0);

    let inter = intersection(&p, &q).unwrap();
    assert_eq!(inter.len(), 1);
    assert!(equals(&inter[0], &q));

    let uni = union(&p, &q).unwrap();
    assert_eq!(uni.len(), 1);
    assert!(equals(&uni[0], &p));

    let diff = difference(&p, &q).unwrap();
    assert_eq!(diff.len(), 1);
    assert_eq!(diff[0].holes.len(), 1);
}

// Seed scenario 4: the Greiner-Hormann paper's own worked example, which
// clips into two disjoint intersection rings.
#[test]
fn greiner_paper_example_yields_two_rings() {
    let p = poly(&[(0.0, 0.0), (0.0, 4.0), (7.0, 4.0), (7.0, 0.0)]);
    let q = poly(&[
        (1.0, -3.0),
        (1.0, 1.0),
        (3.5, -1.5),
        (6.0, 1.0),
        (6.0, -3.0),
    ]);

    let result = intersection(&p, &q).unwrap();
    assert_eq!(result.len(), 2);
    for piece in &result {
        assert!(polygon_area(piece) > 0.0);
    }
}

// Seed scenario 5: every vertex of both rings is an intersection vertex,
// exercising the crossing classifier's ability to tell true crossings
// apart from bounces on a fully-shared vertex set.
#[test]
fn every_vertex_is_an_intersection() {
    let p = poly(&[
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 2.0),
        (3.0, 1.0),
        (1.0, 1.0),
        (0.0, 2.0),
    ]);
    let q = poly(&[
        (4.0, 0.0),
        (3.0, 1.0),
        (1.0, 1.0),
        (0.0, 0.0),
        (0.0, 2.0),
        (4.0, 2.0),
    ]);

    let result = intersection(&p, &q).unwrap();
    assert!(!result.is_empty());
    assert!(total_area(&result) > 0.0);
}

// Seed scenario 6: single-vertex touch.
#[test]
fn single_point_touch() {
    let p = square(0.0, 0.0, 2.0);
    let q = square(2.0, 2.0, 2.0);

    let inter = intersection(&p, &q).unwrap();
    assert!(total_area(&inter) < 1e-9);

    let uni = union(&p, &q).unwrap();
    assert_eq!(uni.len(), 2);
}

// Invariant 1: commutativity up to ring rotation/orientation.
#[test]
fn intersection_and_union_are_commutative() {
    let p = square(0.0, 0.0, 2.0);
    let q = square(1.0, 1.0, 2.0);

    assert_relative_eq!(
        total_area(&intersection(&p, &q).unwrap()),
        total_area(&intersection(&q, &p).unwrap()),
        epsilon = 1e-9
    );
    assert_relative_eq!(
        total_area(&union(&p, &q).unwrap()),
        total_area(&union(&q, &p).unwrap()),
        epsilon = 1e-9
    );
}

// Invariant 2: self-identity.
#[test]
fn self_identity() {
    let p = square(0.0, 0.0, 2.0);

    let inter = intersection(&p, &p).unwrap();
    assert_eq!(inter.len(), 1);
    assert!(equals(&inter[0], &p));

    let uni = union(&p, &p).unwrap();
    assert_eq!(uni.len(), 1);
    assert!(equals(&uni[0], &p));

    assert!(difference(&p, &p).unwrap().is_empty());
}

// Invariant 3: inclusion-exclusion on area.
#[test]
fn inclusion_exclusion_on_area() {
    let p = square(0.0, 0.0, 2.0);
    let q = square(1.0, 1.0, 2.0);

    let union_area = total_area(&union(&p, &q).unwrap());
    let inter_area = total_area(&intersection(&p, &q).unwrap());
    let p_area = polygon_area(&p);
    let q_area = polygon_area(&q);

    assert_relative_eq!(union_area + inter_area, p_area + q_area, epsilon = 1e-9);
}

// Invariant 4: difference closure.
#[test]
fn difference_closure() {
    let p = square(0.0, 0.0, 2.0);
    let q = square(1.0, 1.0, 2.0);

    let diff_area = total_area(&difference(&p, &q).unwrap());
    let inter_area = total_area(&intersection(&p, &q).unwrap());
    let p_area = polygon_area(&p);

    assert_relative_eq!(diff_area, p_area - inter_area, epsilon = 1e-9);
}

// Invariant 5: union as the complement of the two differences and the
// intersection, for disjoint-or-touching inputs.
#[test]
fn union_as_complement_of_differences() {
    let p = square(0.0, 0.0, 2.0);
    let q = square(10.0, 10.0, 2.0);

    let union_area = total_area(&union(&p, &q).unwrap());
    let parts = total_area(&difference(&p, &q).unwrap())
        + total_area(&difference(&q, &p).unwrap())
        + total_area(&intersection(&p, &q).unwrap());

    assert_relative_eq!(union_area, parts, epsilon = 1e-9);
}

// Invariant 6: hole integration is a no-op on hole-free inputs.
#[test]
fn hole_integration_is_a_no_op_without_holes() {
    let p = square(0.0, 0.0, 2.0);
    let q = square(1.0, 1.0, 2.0);

    for piece in union(&p, &q).unwrap() {
        assert!(piece.holes.is_empty());
    }
    for piece in intersection(&p, &q).unwrap() {
        assert!(piece.holes.is_empty());
    }
}

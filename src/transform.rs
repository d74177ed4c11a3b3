//! §4.10 transforms: simplification and coordinate mapping.

use crate::point::Point;
use crate::polygon::Polygon;
use crate::ring::Ring;

/// Ramer–Douglas–Peucker simplification of a closed ring. `epsilon` is the
/// maximum perpendicular distance a point may deviate from its chord before
/// it is kept.
pub fn simplify(ring: &Ring, epsilon: f64) -> Ring {
    let points = ring.points();
    if points.len() < 3 {
        return ring.clone();
    }
    let mut kept = vec![true; points.len()];
    rdp(points, 0, points.len() - 1, epsilon, &mut kept);
    let simplified: Vec<Point> = points
        .iter()
        .zip(kept.iter())
        .filter(|(_, &k)| k)
        .map(|(p, _)| *p)
        .collect();
    Ring::new(simplified)
}

fn rdp(points: &[Point], start: usize, end: usize, epsilon: f64, kept: &mut [bool]) {
    if end <= start + 1 {
        return;
    }
    let (mut max_dist, mut index) = (0.0, start);
    for (i, &p) in points.iter().enumerate().take(end).skip(start + 1) {
        let d = perpendicular_distance(p, points[start], points[end]);
        if d > max_dist {
            max_dist = d;
            index = i;
        }
    }
    if max_dist > epsilon {
        rdp(points, start, index, epsilon, kept);
        rdp(points, index, end, epsilon, kept);
    } else {
        for k in kept.iter_mut().take(end).skip(start + 1) {
            *k = false;
        }
    }
}

fn perpendicular_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return p.distance_squared(&a).sqrt();
    }
    ((p.x - a.x) * dy - (p.y - a.y) * dx).abs() / len2.sqrt()
}

/// Swaps x/y of every point of every ring.
pub fn flip(p: &Polygon) -> Polygon {
    map_coords(p, |pt| Point::new(pt.y, pt.x))
}

/// Applies `f` to every point of every ring (the reprojection hook).
pub fn map_coords(p: &Polygon, f: impl Fn(Point) -> Point) -> Polygon {
    let map_ring = |r: &Ring| Ring::new(r.points().iter().map(|&pt| f(pt)).collect());
    Polygon::new(map_ring(&p.exterior), p.holes.iter().map(map_ring).collect())
}

//! §4.10 measures: centroid, signed area, barycentric coordinates.

use crate::point::Point;
use crate::polygon::Polygon;
use crate::ring::Ring;
use crate::utils::calculate_signed_area3;

/// Signed area enclosed by `ring` (shoelace formula, positive for CCW).
pub fn signed_area(ring: &Ring) -> f64 {
    ring.signed_area2() / 2.0
}

/// Exterior area minus the area of every hole.
pub fn polygon_area(p: &Polygon) -> f64 {
    let exterior = signed_area(&p.exterior).abs();
    let holes: f64 = p.holes.iter().map(|h| signed_area(h).abs()).sum();
    exterior - holes
}

/// Area-weighted centroid of the exterior ring. Holes are not subtracted.
pub fn centroid(p: &Polygon) -> Option<Point> {
    let ring = &p.exterior;
    if ring.is_degenerate() {
        return None;
    }
    let (mut cx, mut cy, mut area2) = (0.0, 0.0, 0.0);
    for (a, b) in ring.edges() {
        let cross = a.x * b.y - b.x * a.y;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
        area2 += cross;
    }
    if area2 == 0.0 {
        return None;
    }
    let factor = 1.0 / (3.0 * area2);
    Some(Point::new(cx * factor, cy * factor))
}

/// Barycentric coordinates of `p` with respect to `triangle`. `None` for a
/// degenerate (zero-area) triangle.
pub fn barycentric_coordinates(triangle: [Point; 3], p: Point) -> Option<(f64, f64, f64)> {
    let [a, b, c] = triangle;
    let area = calculate_signed_area3(&a, &b, &c);
    if area == 0.0 {
        return None;
    }
    let u = calculate_signed_area3(&p, &b, &c) / area;
    let v = calculate_signed_area3(&a, &p, &c) / area;
    let w = 1.0 - u - v;
    Some((u, v, w))
}

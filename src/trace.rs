//! C6 — the ring tracer.
//!
//! One algorithm parameterized by a two-bit step rule, rather than one
//! tracer per operation (§9's "operation parameterization" note).

use crate::error::Error;
use crate::point::Point;
use crate::point_in_ring::{point_in_ring, OnBoundary, PointPosition};
use crate::ring::Ring;
use crate::weave::WovenList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Intersection,
    Union,
    Difference,
}

impl Operation {
    /// `step` is the signed advance applied to the current list position;
    /// `on_list_a` is true while walking `A`, false while walking `B`.
    fn step(self, ent_exit: bool, on_list_a: bool) -> i64 {
        match self {
            Operation::Intersection => {
                if ent_exit {
                    1
                } else {
                    -1
                }
            }
            Operation::Union => {
                if ent_exit {
                    -1
                } else {
                    1
                }
            }
            Operation::Difference => {
                if ent_exit ^ on_list_a {
                    1
                } else {
                    -1
                }
            }
        }
    }
}

fn advance(idx: usize, step: i64, len: usize) -> usize {
    let len = len as i64;
    (((idx as i64 + step) % len + len) % len) as usize
}

/// C6's traversal over the woven lists, when at least one crossing exists.
/// Returns one ring per closed loop traced.
pub fn trace(list_a: &WovenList, list_b: &WovenList, a_idx: &[usize], op: Operation) -> Vec<Ring> {
    let mut consumed = vec![false; a_idx.len()];
    let mut rings = Vec::new();

    loop {
        let start_pos = match (0..a_idx.len())
            .find(|&p| !consumed[p] && list_a[a_idx[p]].crossing)
        {
            Some(p) => p,
            None => break,
        };
        consumed[start_pos] = true;
        let start_i = a_idx[start_pos];
        let start_twin = list_a[start_i].neighbor;

        let mut points = vec![list_a[start_i].point];
        let mut on_a = true;
        let mut cur = start_i;

        loop {
            let (ent_exit, len) = if on_a {
                (list_a[cur].ent_exit, list_a.len())
            } else {
                (list_b[cur].ent_exit, list_b.len())
            };
            let step = op.step(ent_exit, on_a);

            loop {
                cur = advance(cur, step, len);
                let (point, is_inter) = if on_a {
                    (list_a[cur].point, list_a[cur].inter)
                } else {
                    (list_b[cur].point, list_b[cur].inter)
                };
                points.push(point);
                if is_inter {
                    break;
                }
            }

            let reached_start = on_a && cur == start_i;
            let reached_twin = !on_a && cur == start_twin;
            if reached_start || reached_twin {
                break;
            }

            let arrived_point = if on_a { list_a[cur].point } else { list_b[cur].point };
            for (p, &ai) in a_idx.iter().enumerate() {
                if !consumed[p] && list_a[ai].point == arrived_point {
                    consumed[p] = true;
                }
            }

            let neighbor = if on_a {
                list_a[cur].neighbor
            } else {
                list_b[cur].neighbor
            };
            cur = neighbor;
            on_a = !on_a;

            log::trace!("trace jumped to opposite list at ({:.6}, {:.6})", points.last().unwrap().x, points.last().unwrap().y);
        }

        rings.push(Ring::new(points));
    }

    log::debug!("traced {} ring(s)", rings.len());
    rings
}

/// The three cases C6 handles when `a_idx` is empty: one ring wholly
/// contains the other, or they are disjoint.
pub fn trace_no_intersections(a_ring: &Ring, b_ring: &Ring, op: Operation) -> Result<Vec<Ring>, Error> {
    let a_point = a_ring.first_point()?;
    let b_point = b_ring.first_point()?;

    let a_in_b = point_in_ring(a_point, b_ring).fold(OnBoundary::Out) == PointPosition::In;
    let b_in_a = point_in_ring(b_point, a_ring).fold(OnBoundary::Out) == PointPosition::In;

    Ok(if a_in_b {
        match op {
            Operation::Intersection => vec![a_ring.clone()],
            Operation::Union => vec![b_ring.clone()],
            Operation::Difference => vec![],
        }
    } else if b_in_a {
        match op {
            Operation::Intersection => vec![b_ring.clone()],
            Operation::Union => vec![a_ring.clone()],
            // A \ B when B sits wholly inside A: A survives with B carved
            // out. group_into_polygons turns the pair into exterior+hole.
            Operation::Difference => vec![a_ring.clone(), b_ring.clone()],
        }
    } else {
        match op {
            Operation::Intersection => vec![],
            Operation::Union => vec![a_ring.clone(), b_ring.clone()],
            Operation::Difference => vec![a_ring.clone()],
        }
    })
}

/// Groups a flat bag of traced rings into exterior/hole pairs by mutual
/// containment (§4.6, §9 redesign flag (b)): re-sorts by containment
/// instead of assuming any particular index range holds the holes.
///
/// Each ring's immediate parent is the smallest ring that contains one of
/// its sample points; a ring with no parent is a new top-level exterior.
/// This is a shallow (one level) nesting model, sufficient for the rings a
/// single boolean operation produces.
pub fn group_into_polygons(rings: Vec<Ring>) -> Result<Vec<(Ring, Vec<Ring>)>, Error> {
    let n = rings.len();
    let mut parent: Vec<Option<usize>> = vec![None; n];

    for i in 0..n {
        let sample = rings[i].first_point()?;
        let mut best: Option<(usize, f64)> = None;
        for j in 0..n {
            if i == j {
                continue;
            }
            let pos = point_in_ring(sample, &rings[j]).fold(OnBoundary::In);
            if pos == PointPosition::In {
                let area = rings[j].signed_area2().abs();
                if best.map_or(true, |(_, best_area)| area < best_area) {
                    best = Some((j, area));
                }
            }
        }
        parent[i] = best.map(|(j, _)| j);
    }

    let mut groups: Vec<(Ring, Vec<Ring>)> = Vec::new();
    let mut index_of_group: Vec<Option<usize>> = vec![None; n];
    for i in 0..n {
        if parent[i].is_none() {
            index_of_group[i] = Some(groups.len());
            groups.push((rings[i].clone(), Vec::new()));
        }
    }
    for i in 0..n {
        if let Some(p) = parent[i] {
            if let Some(gi) = index_of_group[p] {
                groups[gi].1.push(rings[i].clone());
            }
        }
    }

    Ok(groups)
}

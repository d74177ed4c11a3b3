//! C3 — the weaving builder.
//!
//! Produces the two interleaved vertex lists `A` and `B` that the rest of
//! the clipping pipeline (C4–C6) operates on, plus the index of
//! intersection positions in `A`. This is the part of the pipeline with no
//! direct teacher precursor (the teacher's Martinez-Rueda sweep builds a
//! sorted event queue, not a pair of interleaved lists) — see DESIGN.md.

use crate::intersect::{segment_intersection, SegmentIntersection};
use crate::point::Point;
use crate::ring::Ring;

/// A node of a woven list: either an original ring vertex or an
/// intersection vertex (§3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexNode {
    pub point: Point,
    /// This node arose from an intersection of the two rings.
    pub inter: bool,
    /// Index into the *other* list identifying the twin node. Meaningful
    /// only when `inter` is true; holds the opposite-ring edge index
    /// temporarily while the list is still under construction.
    pub neighbor: usize,
    /// When entering the opposite ring at this node: `true` = entry
    /// (outside -> inside), `false` = exit. Set by C4.
    pub ent_exit: bool,
    /// Parametric position `(alpha, beta)` along the originating edge of
    /// list A and list B respectively.
    pub fracs: (f64, f64),
    /// Whether C5 has classified this intersection as a real crossing.
    pub crossing: bool,
}

impl VertexNode {
    fn original(point: Point) -> Self {
        VertexNode {
            point,
            inter: false,
            neighbor: 0,
            ent_exit: false,
            fracs: (0.0, 0.0),
            crossing: false,
        }
    }

    fn intersection(point: Point, neighbor_edge: usize, fracs: (f64, f64)) -> Self {
        VertexNode {
            point,
            inter: true,
            neighbor: neighbor_edge,
            ent_exit: false,
            fracs,
            crossing: false,
        }
    }
}

pub type WovenList = Vec<VertexNode>;

/// The two woven lists plus the index of intersection positions in `A`.
pub struct Weave {
    pub list_a: WovenList,
    pub list_b: WovenList,
    pub a_idx: Vec<usize>,
}

/// An intersection accepted while scanning one A-edge against all B-edges,
/// still needing to be placed into `list_b`.
struct Pending {
    /// Index into `list_a` of the node this pending entry is the twin of.
    list_a_index: usize,
    /// The B-edge it falls on.
    b_edge: usize,
    /// Its position along that B-edge, used both to sort injections within
    /// the edge and to detect coincidence with the edge's start vertex.
    beta: f64,
}

/// C3: weaves `a_ring` and `b_ring` together at every intersection point.
pub fn weave(a_ring: &Ring, b_ring: &Ring) -> Weave {
    let mut list_a: WovenList = Vec::new();
    let mut pending: Vec<Pending> = Vec::new();

    for ai in 0..a_ring.len() {
        let (a1, a2) = a_ring.edge(ai);
        let a1_index = list_a.len();
        list_a.push(VertexNode::original(a1));

        // Collected on this edge only, then sorted by alpha before being
        // spliced into list_a.
        let mut on_this_edge: Vec<(f64, Point, usize, f64)> = Vec::new();
        let mut a1_marked = false;

        for bi in 0..b_ring.len() {
            let (b1, b2) = b_ring.edge(bi);
            match segment_intersection(a1, a2, b1, b2) {
                SegmentIntersection::None => {}
                SegmentIntersection::Point { point, fracs: (alpha, beta) } => {
                    let alpha_interior = alpha > 0.0 && alpha < 1.0;
                    let beta_interior = beta > 0.0 && beta < 1.0;
                    if alpha_interior && beta_interior {
                        log::trace!(
                            "a-edge {} crosses b-edge {} at ({:.6}, {:.6})",
                            ai, bi, point.x, point.y
                        );
                        on_this_edge.push((alpha, point, bi, beta));
                    } else if alpha == 0.0 && (beta_interior || beta == 0.0) && !a1_marked {
                        // a1 lies on the current B-edge (or exactly on b1).
                        list_a[a1_index].inter = true;
                        list_a[a1_index].neighbor = bi;
                        list_a[a1_index].fracs = (0.0, beta);
                        pending.push(Pending { list_a_index: a1_index, b_edge: bi, beta });
                        a1_marked = true;
                        log::trace!("a-edge {} start vertex lands on b-edge {}", ai, bi);
                    } else if beta == 0.0 && alpha_interior {
                        // b1 lies strictly inside the A-edge.
                        log::trace!("b-edge {} start vertex lands on a-edge {}", bi, ai);
                        on_this_edge.push((alpha, b1, bi, 0.0));
                    }
                    // alpha == 1 or beta == 1 land on a2 / b2, handled when
                    // those points are visited as the *next* edge's a1/b1 —
                    // skipping here avoids emitting the same vertex twice.
                }
                SegmentIntersection::Collinear { fracs: (alpha, beta) } => {
                    let alpha_interior = alpha > 0.0 && alpha < 1.0;
                    let beta_interior = beta > 0.0 && beta < 1.0;
                    if alpha_interior {
                        // b1 lies strictly inside the A-edge.
                        log::trace!("a-edge {} collinear with b-edge {}, b1 lands inside", ai, bi);
                        on_this_edge.push((alpha, b1, bi, 0.0));
                    } else if alpha == 0.0 && !a1_marked {
                        // b1 coincides with a1.
                        list_a[a1_index].inter = true;
                        list_a[a1_index].neighbor = bi;
                        list_a[a1_index].fracs = (0.0, 0.0);
                        pending.push(Pending { list_a_index: a1_index, b_edge: bi, beta: 0.0 });
                        a1_marked = true;
                        log::trace!("a-edge {} start vertex coincides with b-edge {} start", ai, bi);
                    }
                    if beta_interior && !a1_marked {
                        // a1 lies strictly inside the B-edge.
                        list_a[a1_index].inter = true;
                        list_a[a1_index].neighbor = bi;
                        list_a[a1_index].fracs = (0.0, beta);
                        pending.push(Pending { list_a_index: a1_index, b_edge: bi, beta });
                        a1_marked = true;
                        log::trace!("a-edge {} start vertex lands inside collinear b-edge {}", ai, bi);
                    }
                }
            }
        }

        on_this_edge.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap());
        for (alpha, point, bi, beta) in on_this_edge {
            let idx = list_a.len();
            list_a.push(VertexNode::intersection(point, bi, (alpha, beta)));
            pending.push(Pending { list_a_index: idx, b_edge: bi, beta });
        }
    }

    let list_b = build_list_b(b_ring, &mut list_a, pending);
    let a_idx: Vec<usize> = (0..list_a.len()).filter(|&i| list_a[i].inter).collect();

    log::debug!(
        "wove {} intersection(s) into list_a ({} nodes) and list_b ({} nodes)",
        a_idx.len(),
        list_a.len(),
        list_b.len()
    );

    Weave { list_a, list_b, a_idx }
}

/// Replays `A`'s intersections into a fresh list for `B`, walking `B`'s
/// original vertices and, between consecutive vertices, injecting all
/// pending intersections on that edge in ascending `beta` order. An
/// injected intersection that coincides with the edge's start vertex is
/// coalesced into that vertex rather than duplicated (§4.3).
fn build_list_b(b_ring: &Ring, list_a: &mut WovenList, pending: Vec<Pending>) -> WovenList {
    let mut list_b: WovenList = Vec::new();

    for bi in 0..b_ring.len() {
        let (b1, _b2) = b_ring.edge(bi);

        let mut on_this_edge: Vec<usize> = (0..pending.len())
            .filter(|&i| pending[i].b_edge == bi)
            .collect();
        on_this_edge.sort_by(|&x, &y| pending[x].beta.partial_cmp(&pending[y].beta).unwrap());

        let coalesce_with_b1 = on_this_edge
            .first()
            .map(|&i| pending[i].beta == 0.0)
            .unwrap_or(false);

        if coalesce_with_b1 {
            let pe_index = on_this_edge.remove(0);
            let list_a_index = pending[pe_index].list_a_index;
            let point = list_a[list_a_index].point;
            let alpha = list_a[list_a_index].fracs.0;
            let b_index = list_b.len();
            list_b.push(VertexNode::intersection(point, list_a_index, (alpha, 0.0)));
            list_a[list_a_index].neighbor = b_index;
            log::trace!("b-edge {} start vertex coalesced with an injected intersection", bi);
        } else {
            list_b.push(VertexNode::original(b1));
        }

        for pe_index in on_this_edge {
            let list_a_index = pending[pe_index].list_a_index;
            let beta = pending[pe_index].beta;
            let point = list_a[list_a_index].point;
            let alpha = list_a[list_a_index].fracs.0;
            let b_index = list_b.len();
            list_b.push(VertexNode::intersection(point, list_a_index, (alpha, beta)));
            list_a[list_a_index].neighbor = b_index;
        }
    }

    list_b
}

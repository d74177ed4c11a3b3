//! C5 — the crossing classifier.
//!
//! The most delicate step of the pipeline: distinguishing a genuine
//! crossing (the two rings actually exchange sides) from a bounce
//! (touch-and-return), and collapsing a collinear overlap chain — a run of
//! coincident vertices shared by both rings — to a single delayed-crossing
//! or delayed-bounce verdict at the chain's terminal node.

use crate::point::Point;
use crate::utils::{calculate_signed_area3, Sign};
use crate::weave::WovenList;

/// Which side of the oriented arc `(p_minus, i, p_plus)` a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Classifies `q` against the local wedge of ring `A` at vertex `i`, i.e.
/// the region swept between incoming edge `(p_minus, i)` and outgoing edge
/// `(i, p_plus)`. The wedge's own turn direction decides whether `q` needs
/// to be left of *both* edges or merely left of *either* of them to count
/// as `Left` — a convex (left-turning) vertex and a reflex (right-turning)
/// one use complementary rules for the same wedge.
///
/// Shared with [`crate::predicates::crosses`], which calls this directly
/// rather than re-deriving a side test of its own.
pub(crate) fn side(p_minus: Point, i: Point, p_plus: Point, q: Point) -> Side {
    let s3 = Sign::of(calculate_signed_area3(&p_minus, &i, &p_plus));
    let s1 = Sign::of(calculate_signed_area3(&p_minus, &i, &q));
    let s2 = Sign::of(calculate_signed_area3(&i, &p_plus, &q));

    let is_left = match s3 {
        Sign::Positive | Sign::Zero => s1 == Sign::Positive && s2 == Sign::Positive,
        Sign::Negative => !(s1 == Sign::Positive || s2 == Sign::Positive),
    };

    if is_left {
        Side::Left
    } else {
        Side::Right
    }
}

fn points_coincide(a: Point, b: Point) -> bool {
    a.x == b.x && a.y == b.y
}

/// C5: walks every intersection in `a_idx`, setting `crossing` on both
/// twins in `list_a` and `list_b`.
pub fn classify(list_a: &mut WovenList, list_b: &mut WovenList, a_idx: &[usize]) {
    let len_a = list_a.len();
    let len_b = list_b.len();
    if a_idx.is_empty() {
        return;
    }

    let mut visited = vec![false; a_idx.len()];

    for start_pos in 0..a_idx.len() {
        if visited[start_pos] {
            continue;
        }

        let i = a_idx[start_pos];
        let j = list_a[i].neighbor;
        let p_minus = list_a[(i + len_a - 1) % len_a].point;
        let node_point = list_a[i].point;
        let p_plus = list_a[(i + 1) % len_a].point;
        let q_minus = list_b[(j + len_b - 1) % len_b].point;
        let q_plus = list_b[(j + 1) % len_b].point;

        let coincide_minus = points_coincide(p_plus, q_minus);
        let coincide_plus = points_coincide(p_plus, q_plus);

        visited[start_pos] = true;

        if !coincide_minus && !coincide_plus {
            let side_minus = side(p_minus, node_point, p_plus, q_minus);
            let side_plus = side(p_minus, node_point, p_plus, q_plus);
            let crossing = side_minus != side_plus;
            list_a[i].crossing = crossing;
            list_b[j].crossing = crossing;
            log::trace!("intersection at ({:.6},{:.6}) classified as {}", node_point.x, node_point.y, if crossing { "crossing" } else { "bounce" });
            continue;
        }

        // Overlap chain: I is a bounce provisionally (default `crossing =
        // false` already holds). The start side is whichever Q neighbor is
        // *not* the coincident one.
        let start_side = if coincide_minus {
            side(p_minus, node_point, p_plus, q_plus)
        } else {
            side(p_minus, node_point, p_plus, q_minus)
        };

        let mut cur_pos = start_pos;
        loop {
            let next_pos = (cur_pos + 1) % a_idx.len();
            if next_pos == start_pos {
                break;
            }
            let cur_j = list_a[a_idx[cur_pos]].neighbor;
            let next_j = list_a[a_idx[next_pos]].neighbor;
            let steps_together =
                next_j == (cur_j + 1) % len_b || next_j == (cur_j + len_b - 1) % len_b;
            if !steps_together {
                break;
            }
            visited[next_pos] = true;
            cur_pos = next_pos;
        }

        let end_pos = cur_pos;
        let end_i = a_idx[end_pos];
        let end_j = list_a[end_i].neighbor;
        let end_point = list_a[end_i].point;
        let end_p_minus = list_a[(end_i + len_a - 1) % len_a].point;
        let end_p_plus = list_a[(end_i + 1) % len_a].point;
        let end_q_minus = list_b[(end_j + len_b - 1) % len_b].point;
        let end_q_plus = list_b[(end_j + 1) % len_b].point;
        let end_coincide_minus = points_coincide(end_p_plus, end_q_minus);
        let end_side = if end_coincide_minus {
            side(end_p_minus, end_point, end_p_plus, end_q_plus)
        } else {
            side(end_p_minus, end_point, end_p_plus, end_q_minus)
        };

        let crossing = start_side != end_side;
        log::debug!(
            "overlap chain {}..{} resolved as delayed {}",
            start_pos,
            end_pos,
            if crossing { "crossing" } else { "bounce" }
        );
        if crossing {
            list_a[end_i].crossing = true;
            list_b[end_j].crossing = true;
        }
    }
}

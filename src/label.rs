//! C4 — the entry/exit labeller.

use crate::error::Error;
use crate::point_in_ring::{point_in_ring, PointPosition};
use crate::ring::Ring;
use crate::weave::WovenList;

/// C4: labels every intersection node of `list` with its entry/exit flag
/// relative to `opposite`, per §4.4.
///
/// Every node of `list`, not just its intersections, is tested for
/// containment: in the degenerate case where *every* original vertex also
/// happens to be an intersection (spec seed scenario 5, "every vertex is an
/// intersection"), there may be no node anywhere in the list whose point
/// isn't exactly on `opposite`'s boundary, which is the actual
/// [`Error::FullyOnBoundary`] condition — not merely "every original vertex
/// is a touch point".
pub fn label(list: &mut WovenList, opposite: &Ring) -> Result<(), Error> {
    if list.is_empty() {
        return Ok(());
    }

    let reference = list
        .iter()
        .enumerate()
        .map(|(i, node)| (i, point_in_ring(node.point, opposite)))
        .find(|(_, pos)| *pos != PointPosition::On);

    let (ref_index, ref_pos) = reference.ok_or(Error::FullyOnBoundary)?;

    // Each intersection strictly before `ref_index` flips the running
    // status once; unwind that parity to recover the status at index 0.
    let flips_before_ref = list[..ref_index].iter().filter(|n| n.inter).count();
    let status_at_ref = !ref_pos.is_in();
    let mut status = if flips_before_ref % 2 == 1 {
        !status_at_ref
    } else {
        status_at_ref
    };

    for node in list.iter_mut() {
        if node.inter {
            node.ent_exit = status;
            log::trace!(
                "labelled intersection at ({:.6}, {:.6}) as {}",
                node.point.x,
                node.point.y,
                if status { "entry" } else { "exit" }
            );
            status = !status;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;
    use crate::weave::weave;

    fn square(x0: f64, y0: f64, size: f64) -> Ring {
        Ring::new(vec![
            Point::new(x0, y0),
            Point::new(x0 + size, y0),
            Point::new(x0 + size, y0 + size),
            Point::new(x0, y0 + size),
        ])
    }

    #[test]
    fn entries_and_exits_alternate() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 1.0, 2.0);
        let mut w = weave(&a, &b);
        label(&mut w.list_a, &b).unwrap();
        label(&mut w.list_b, &a).unwrap();

        let flags: Vec<bool> = w
            .list_a
            .iter()
            .filter(|n| n.inter)
            .map(|n| n.ent_exit)
            .collect();
        for pair in flags.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn coincident_rings_are_fully_on_boundary() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(0.0, 0.0, 2.0);
        let mut w = weave(&a, &b);
        assert_eq!(label(&mut w.list_a, &b), Err(Error::FullyOnBoundary));
    }
}

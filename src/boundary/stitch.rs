use std::collections::{BTreeMap, HashMap};

use slotmap::SlotMap;

use super::edges::BoundaryEdge;
use crate::error::BoundaryError;
use crate::vertex::VertexKey;

slotmap::new_key_type! {
    /// Handle of an unconsumed edge in the stitching arena.
    struct EdgeId;
}

/// Edges touching one vertex, in insertion order.
#[derive(Default)]
struct Incidence {
    edges: Vec<EdgeId>,
    /// Everything before this index is known to be consumed.
    cursor: usize,
}

/// Stitches an unordered edge set into closed loops of vertex keys.
///
/// Seeds are taken in edge order. A walk starts at the seed's `a` end and
/// moves to its `b` end, then repeatedly follows the earliest-inserted
/// unconsumed edge at the current vertex until it returns to the start. A
/// walk that revisits a vertex other than its start splits the enclosed
/// sub-loop off as its own polygon, so every loop is simple.
///
/// # Errors
///
/// - `BoundaryError::OddDegree` if some vertex has an odd number of edges.
/// - `BoundaryError::UnclosedLoop` if a walk runs out of edges.
/// - `BoundaryError::WalkLimitExceeded` if one walk takes more than
///   `max_walk_steps` steps.
pub fn stitch(
    edges: &[BoundaryEdge],
    max_walk_steps: usize,
) -> Result<Vec<Vec<VertexKey>>, BoundaryError> {
    if edges.is_empty() {
        return Ok(Vec::new());
    }

    let mut live: SlotMap<EdgeId, BoundaryEdge> = SlotMap::with_capacity_and_key(edges.len());
    let mut order = Vec::with_capacity(edges.len());
    let mut incidence: BTreeMap<VertexKey, Incidence> = BTreeMap::new();
    for edge in edges {
        let id = live.insert(*edge);
        order.push(id);
        incidence.entry(edge.a).or_default().edges.push(id);
        incidence.entry(edge.b).or_default().edges.push(id);
    }

    if let Some((vertex, inc)) = incidence.iter().find(|(_, inc)| inc.edges.len() % 2 != 0) {
        let err = BoundaryError::OddDegree {
            vertex: *vertex,
            degree: inc.edges.len(),
        };
        tracing::warn!(%err, "rejecting boundary edge set");
        return Err(err);
    }

    let mut loops = Vec::new();
    for seed in order {
        let Some(edge) = live.remove(seed) else {
            continue;
        };
        walk(edge, &mut live, &mut incidence, max_walk_steps, &mut loops)?;
    }
    Ok(loops)
}

/// Walks one loop from `seed`, pushing it (and any split-off sub-loops) to `loops`.
fn walk(
    seed: BoundaryEdge,
    live: &mut SlotMap<EdgeId, BoundaryEdge>,
    incidence: &mut BTreeMap<VertexKey, Incidence>,
    max_walk_steps: usize,
    loops: &mut Vec<Vec<VertexKey>>,
) -> Result<(), BoundaryError> {
    let start = seed.a;
    let mut current = seed.b;
    let mut path = vec![start];
    let mut position: HashMap<VertexKey, usize> = HashMap::from([(start, 0)]);
    let mut steps = 0;

    while current != start {
        steps += 1;
        if steps > max_walk_steps {
            let err = BoundaryError::WalkLimitExceeded {
                start,
                limit: max_walk_steps,
            };
            tracing::warn!(%err, "aborting boundary walk");
            return Err(err);
        }

        if let Some(&at) = position.get(&current) {
            let sub_loop = path.split_off(at);
            for key in &sub_loop {
                position.remove(key);
            }
            tracing::trace!(len = sub_loop.len(), "split sub-loop off boundary walk");
            loops.push(sub_loop);
        }
        position.insert(current, path.len());
        path.push(current);

        let next = next_edge(incidence, live, current).and_then(|id| live.remove(id));
        let Some(far) = next.and_then(|edge| edge.other(current)) else {
            let err = BoundaryError::UnclosedLoop {
                start,
                stuck_at: current,
            };
            tracing::warn!(%err, "aborting boundary walk");
            return Err(err);
        };
        current = far;
    }

    tracing::trace!(len = path.len(), %start, "closed boundary loop");
    loops.push(path);
    Ok(())
}

/// Earliest-inserted unconsumed edge at `vertex`.
fn next_edge(
    incidence: &mut BTreeMap<VertexKey, Incidence>,
    live: &SlotMap<EdgeId, BoundaryEdge>,
    vertex: VertexKey,
) -> Option<EdgeId> {
    let inc = incidence.get_mut(&vertex)?;
    while let Some(&id) = inc.edges.get(inc.cursor) {
        if live.contains_key(id) {
            return Some(id);
        }
        inc.cursor += 1;
    }
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::grid::AxialCoord;
    use crate::vertex::VertexSlot;

    /// Distinct vertex keys for hand-built graphs.
    fn v(i: i32) -> VertexKey {
        VertexKey::new(AxialCoord::new(i, 0), VertexSlot::BottomRight)
    }

    fn e(a: i32, b: i32) -> BoundaryEdge {
        BoundaryEdge::new(v(a), v(b))
    }

    #[test]
    fn empty_input() {
        assert!(stitch(&[], 10).unwrap().is_empty());
    }

    #[test]
    fn shuffled_square_follows_seed_direction() {
        let edges = [e(0, 1), e(2, 3), e(3, 0), e(1, 2)];
        let loops = stitch(&edges, 100).unwrap();
        assert_eq!(loops, vec![vec![v(0), v(1), v(2), v(3)]]);
    }

    #[test]
    fn reversed_edges_are_matched_by_either_end() {
        let edges = [e(0, 1), e(2, 1), e(0, 2)];
        let loops = stitch(&edges, 100).unwrap();
        assert_eq!(loops, vec![vec![v(0), v(1), v(2)]]);
    }

    #[test]
    fn disjoint_loops_in_seed_order() {
        let edges = [e(10, 11), e(0, 1), e(11, 12), e(1, 2), e(12, 10), e(2, 0)];
        let loops = stitch(&edges, 100).unwrap();
        assert_eq!(
            loops,
            vec![vec![v(10), v(11), v(12)], vec![v(0), v(1), v(2)]]
        );
    }

    /// Two triangles sharing vertex 2: the earliest edge at the shared
    /// vertex closes the first triangle before the second is entered.
    #[test]
    fn degree_four_vertex_takes_earliest_edge() {
        let edges = [e(0, 1), e(1, 2), e(2, 0), e(2, 3), e(3, 4), e(4, 2)];
        let loops = stitch(&edges, 100).unwrap();
        assert_eq!(
            loops,
            vec![vec![v(0), v(1), v(2)], vec![v(2), v(3), v(4)]]
        );
    }

    /// Same figure-eight, but the walk is forced through the shared vertex
    /// into the second triangle first; the revisit splits it off.
    #[test]
    fn revisited_vertex_splits_sub_loop() {
        let edges = [e(0, 1), e(1, 2), e(2, 3), e(3, 4), e(4, 2), e(2, 0)];
        let loops = stitch(&edges, 100).unwrap();
        assert_eq!(
            loops,
            vec![vec![v(2), v(3), v(4)], vec![v(0), v(1), v(2)]]
        );
    }

    #[test]
    fn dangling_edge_is_reported() {
        let edges = [e(0, 1), e(1, 2), e(2, 0), e(2, 5)];
        let err = stitch(&edges, 100).unwrap_err();
        assert!(matches!(err, BoundaryError::OddDegree { degree: 3, .. }));
    }

    #[test]
    fn open_chain_is_reported() {
        let edges = [e(0, 1), e(1, 2)];
        let err = stitch(&edges, 100).unwrap_err();
        assert!(matches!(err, BoundaryError::OddDegree { degree: 1, .. }));
    }

    #[test]
    fn walk_limit_is_enforced() {
        let edges: Vec<_> = (0..50).map(|i| e(i, (i + 1) % 50)).collect();
        let err = stitch(&edges, 10).unwrap_err();
        assert_eq!(
            err,
            BoundaryError::WalkLimitExceeded {
                start: v(0),
                limit: 10
            }
        );
        assert_eq!(stitch(&edges, 50).unwrap()[0].len(), 50);
    }
}

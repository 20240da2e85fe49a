use tracing::{debug, debug_span};

use crate::{error::GraphError, sparse::SparseGraph, vertex::VertexId};

impl<V> SparseGraph<V> {
    /// Single-source shortest paths over a DAG, in one relaxation sweep
    /// along the topological order computed from `start`.
    ///
    /// Distances are reset to the infinity sentinel (`None`) except the
    /// start at 0, then every vertex's outgoing edges are relaxed in
    /// topological order: a shorter path through `u` updates the target's
    /// distance and makes `u` its parent.  Results are read back through
    /// [`distance`](Self::distance) and [`parent`](Self::parent); vertices
    /// unreachable from `start` keep `None`.
    ///
    /// Correct only for DAGs.  On a graph containing a cycle the
    /// topological order itself is not well-defined and the outputs are
    /// unspecified.  Fails with [`GraphError::UnknownVertex`] when `start`
    /// is absent.
    pub fn shortest_path_dag(&mut self, start: impl Into<VertexId>) -> Result<(), GraphError> {
        let start = start.into();
        let _span = debug_span!("shortest_path_dag", start = start.0).entered();
        let mut finish_slots = Vec::with_capacity(self.num_vertices());
        self.dfs_explore_with(Some(start), |slot| finish_slots.push(slot))?;
        let start_slot = self.slot_of(start)?;

        // The exploration above left entry counters behind; shortest-path
        // state starts from a clean slate.
        for slot in self.slots() {
            let vertex = self.vertex_mut(slot);
            vertex.distance = None;
            vertex.parent = None;
        }
        self.vertex_mut(start_slot).distance = Some(0);

        // Finishing order has every edge's target ahead of its source, so
        // the topological order is the reverse.
        for &slot in finish_slots.iter().rev() {
            for cursor in 0..self.vertex(slot).neighbors.len() {
                let Some(base) = self.vertex(slot).distance else {
                    break;
                };
                let (target, weight) = self.vertex(slot).neighbors[cursor];
                let candidate = base.saturating_add(weight);
                if self.vertex(target).distance.map_or(true, |d| d > candidate) {
                    let relaxed = self.vertex_mut(target);
                    relaxed.distance = Some(candidate);
                    relaxed.parent = Some(slot);
                }
            }
        }
        Ok(())
    }

    /// Bellman-Ford single-source shortest paths with negative-cycle
    /// detection.
    ///
    /// Runs |V|-1 full passes relaxing every edge of every vertex whose
    /// distance is already finite, then one more scan: an edge that would
    /// still relax means a negative-weight cycle is reachable from `start`,
    /// reported as `Ok(false)`.  Distances and parents computed before the
    /// detection are left in place and must not be trusted after a `false`
    /// result.  Returns `Ok(true)` when no such cycle exists, with the
    /// shortest path weights in [`distance`](Self::distance) and the
    /// predecessor tree in [`parent`](Self::parent).
    ///
    /// Fails with [`GraphError::UnknownVertex`] when `start` is absent.
    pub fn shortest_path_bellman_ford(
        &mut self,
        start: impl Into<VertexId>,
    ) -> Result<bool, GraphError> {
        let start = start.into();
        let _span = debug_span!("shortest_path_bellman_ford", start = start.0).entered();
        let start_slot = self.slot_of(start)?;
        self.reset_traversal_state();
        self.vertex_mut(start_slot).distance = Some(0);

        for _pass in 1..self.num_vertices() {
            let mut updated = false;
            for slot in self.slots() {
                for cursor in 0..self.vertex(slot).neighbors.len() {
                    let Some(base) = self.vertex(slot).distance else {
                        break;
                    };
                    let (target, weight) = self.vertex(slot).neighbors[cursor];
                    let candidate = base.saturating_add(weight);
                    if self.vertex(target).distance.map_or(true, |d| d > candidate) {
                        let relaxed = self.vertex_mut(target);
                        relaxed.distance = Some(candidate);
                        relaxed.parent = Some(slot);
                        updated = true;
                    }
                }
            }
            // A pass with no relaxation means the remaining ones are no-ops.
            if !updated {
                break;
            }
        }

        for slot in self.slots() {
            let Some(base) = self.vertex(slot).distance else {
                continue;
            };
            for &(target, weight) in &self.vertex(slot).neighbors {
                if self
                    .vertex(target)
                    .distance
                    .map_or(true, |d| d > base.saturating_add(weight))
                {
                    debug!(
                        from = self.vertex(slot).id.0,
                        into = self.vertex(target).id.0,
                        "negative-weight cycle reachable from start"
                    );
                    return Ok(false);
                }
            }
        }
        Ok(true)
    }
}

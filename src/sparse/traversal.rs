use std::collections::VecDeque;

use tracing::debug_span;

use crate::{
    error::GraphError,
    sparse::SparseGraph,
    vertex::{Color, VertexId},
};

impl<V> SparseGraph<V> {
    /// Depth-first visit from one root, iterative with an explicit stack so
    /// that deep or skewed graphs cannot exhaust the call stack.
    ///
    /// Semantics match the recursive formulation exactly: a vertex turns
    /// `InProgress` and bumps its entry counter when first reached,
    /// neighbors are scanned in edge insertion order, an `Unvisited`
    /// neighbor records the current vertex as its parent before being
    /// descended into, and once every neighbor has been processed the
    /// vertex turns `Done` and its slot is handed to `on_finish`.  The
    /// finishing order observed by `on_finish` is what the topological sort
    /// and the component search consume.
    pub(super) fn dfs_visit(&mut self, root: usize, on_finish: &mut impl FnMut(usize)) {
        debug_assert_eq!(self.vertex(root).color, Color::Unvisited);
        self.enter(root);
        // (slot, cursor into the slot's neighbor list)
        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        while let Some(frame) = stack.last_mut() {
            let (slot, cursor) = *frame;
            let next = self.vertex(slot).neighbors.get(cursor).map(|&(t, _)| t);
            match next {
                Some(target) => {
                    frame.1 += 1;
                    if self.vertex(target).color == Color::Unvisited {
                        self.vertex_mut(target).parent = Some(slot);
                        self.enter(target);
                        stack.push((target, 0));
                    }
                }
                None => {
                    self.vertex_mut(slot).color = Color::Done;
                    on_finish(slot);
                    stack.pop();
                }
            }
        }
    }

    fn enter(&mut self, slot: usize) {
        let vertex = self.vertex_mut(slot);
        vertex.color = Color::InProgress;
        // Entry counter, not a graph distance: counts how many times the
        // vertex has been entered during this pass.
        vertex.distance = Some(vertex.distance.map_or(0, |d| d + 1));
    }

    /// Full-graph depth-first exploration driving `on_finish` with the
    /// slot of every finished vertex; the shared primitive behind
    /// [`Self::dfs_explore`], [`Self::topological_sort`] and the component
    /// search.
    pub(super) fn dfs_explore_with(
        &mut self,
        start: Option<VertexId>,
        mut on_finish: impl FnMut(usize),
    ) -> Result<(), GraphError> {
        let start_slot = match start {
            Some(id) => Some(self.slot_of(id)?),
            None => None,
        };
        self.reset_traversal_state();
        if let Some(slot) = start_slot {
            self.dfs_visit(slot, &mut on_finish);
        }
        for slot in self.slots() {
            if self.vertex(slot).color == Color::Unvisited {
                self.dfs_visit(slot, &mut on_finish);
            }
        }
        Ok(())
    }

    /// Depth-first exploration of the whole graph.
    ///
    /// When `start` is given, exploration begins there; afterwards every
    /// remaining `Unvisited` vertex in insertion order becomes a new root,
    /// so every vertex is visited exactly once per call regardless of
    /// connectivity.  Fails with [`GraphError::UnknownVertex`] when `start`
    /// names an absent vertex.
    ///
    /// Afterwards each visited vertex is `Done`, its `distance` holds the
    /// entry counter (zero after a single visit) and its `parent` points at
    /// the vertex that discovered it, or `None` for roots.
    pub fn dfs_explore(&mut self, start: Option<VertexId>) -> Result<(), GraphError> {
        let _span = debug_span!("dfs_explore").entered();
        self.dfs_explore_with(start, |_| {})
    }

    /// Sorts the graph by DFS finishing order (postorder).
    ///
    /// For a DAG this is a valid topological sequence read back to front:
    /// for every edge u→v, v finishes before u and therefore appears before
    /// u in the returned order.  On a cyclic graph the output is not a
    /// topological order (back edges are skipped, not detected) and
    /// callers must not rely on it.
    pub fn topological_sort(
        &mut self,
        start: Option<VertexId>,
    ) -> Result<Vec<VertexId>, GraphError> {
        let _span = debug_span!("topological_sort").entered();
        let mut finish_slots = Vec::with_capacity(self.num_vertices());
        self.dfs_explore_with(start, |slot| finish_slots.push(slot))?;
        Ok(finish_slots
            .into_iter()
            .map(|slot| self.vertex(slot).id)
            .collect())
    }

    /// Breadth-first exploration from `start` with a hop distance of 1 per
    /// layer.  See [`Self::bfs_explore_stepped`].
    pub fn bfs_explore(&mut self, start: impl Into<VertexId>) -> Result<(), GraphError> {
        self.bfs_explore_stepped(start, 1)
    }

    /// Breadth-first exploration from `start`, assigning each newly
    /// discovered vertex `distance = parent distance + step` and recording
    /// the discovering vertex as its parent.
    ///
    /// The increment is a constant per layer, not the edge weight; this
    /// computes hop layers in caller-chosen units, not weighted shortest
    /// paths.  A vertex is `InProgress` while queued and `Done` once
    /// dequeued and fully expanded; vertices unreachable from `start` stay
    /// `Unvisited` with no distance.  Fails with
    /// [`GraphError::UnknownVertex`] when `start` is absent.
    pub fn bfs_explore_stepped(
        &mut self,
        start: impl Into<VertexId>,
        step: i64,
    ) -> Result<(), GraphError> {
        let start = start.into();
        let _span = debug_span!("bfs_explore", start = start.0).entered();
        let start_slot = self.slot_of(start)?;
        self.reset_traversal_state();

        let mut queue = VecDeque::new();
        {
            let root = self.vertex_mut(start_slot);
            root.color = Color::InProgress;
            root.distance = Some(0);
        }
        queue.push_back(start_slot);

        while let Some(slot) = queue.pop_front() {
            let base = self
                .vertex(slot)
                .distance
                .expect("queued vertex has a distance");
            for cursor in 0..self.vertex(slot).neighbors.len() {
                let (target, _weight) = self.vertex(slot).neighbors[cursor];
                if self.vertex(target).color == Color::Unvisited {
                    let discovered = self.vertex_mut(target);
                    discovered.color = Color::InProgress;
                    discovered.distance = Some(base + step);
                    discovered.parent = Some(slot);
                    queue.push_back(target);
                }
            }
            self.vertex_mut(slot).color = Color::Done;
        }
        Ok(())
    }
}

use std::collections::HashMap;
use std::fmt::{self, Debug};

use crate::{
    error::GraphError,
    vertex::{Color, Vertex, VertexId},
};

mod scc;
mod shortest_path;
mod traversal;

/// Validation policy of a [`SparseGraph`], chosen at construction time.
///
/// The two modes have entirely separate contracts:
///
/// * `Strict` validates every operation: duplicate vertex ids, duplicate
///   ordered edge pairs, and unknown endpoints all fail with the matching
///   [`GraphError`].  Ids are resolved through an id-to-slot map, so lookup
///   is O(1).
/// * `Fast` skips the duplicate and existence checks entirely and resolves
///   an id by treating it as a 1-based index into insertion order.  Callers
///   must assign ids as a contiguous `1..=N` range; the only check retained
///   is the index range itself, which fails with
///   [`GraphError::UnknownVertex`] instead of reading out of bounds.
///   Malformed input that stays in range produces a silently incorrect
///   structure rather than an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Strict,
    Fast,
}

/// An adjacency-list graph for the sparse case, where the number of edges
/// is nowhere near the possible maximum.  Each vertex carries its own
/// ordered neighbor list, so storage is proportional to vertices plus
/// edges.
///
/// The graph is built once (vertices, then edges) and then queried through
/// the algorithm entry points: [`dfs_explore`](Self::dfs_explore),
/// [`bfs_explore`](Self::bfs_explore),
/// [`topological_sort`](Self::topological_sort),
/// [`strongly_connected_components`](Self::strongly_connected_components),
/// [`shortest_path_dag`](Self::shortest_path_dag) and
/// [`shortest_path_bellman_ford`](Self::shortest_path_bellman_ford).  Every
/// entry point re-initializes the per-vertex scratch state (color,
/// distance, parent) it needs, so calls can be repeated on the same graph;
/// the outputs of one run are overwritten by the next.  Algorithms take
/// `&mut self` because that scratch state lives on the vertices, which is
/// also what rules out querying one graph from two places at once.
pub struct SparseGraph<V> {
    vertices: Vec<Vertex<V>>,
    /// Id to slot, first insertion of an id wins.  Kept up to date in both
    /// modes but only consulted by strict lookups.
    index: HashMap<VertexId, usize>,
    undirected: bool,
    mode: Mode,
}

impl<V> SparseGraph<V> {
    /// Creates an empty directed graph in [`Mode::Strict`].
    pub fn directed() -> Self {
        SparseGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
            undirected: false,
            mode: Mode::Strict,
        }
    }

    /// Creates an empty undirected graph in [`Mode::Strict`].  Every
    /// [`add_edge`](Self::add_edge) call inserts both directions.
    pub fn undirected() -> Self {
        SparseGraph {
            undirected: true,
            ..Self::directed()
        }
    }

    /// Switches the validation policy.  Meant to be chained onto a
    /// constructor before the graph is populated.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_undirected(&self) -> bool {
        self.undirected
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Counts directed edge records; an undirected edge contributes two.
    pub fn num_edges(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum()
    }

    /// Iterates over all vertex ids in insertion order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().map(|v| v.id)
    }

    /// Adds a vertex with a caller-assigned id.
    ///
    /// In strict mode, fails with [`GraphError::DuplicateVertex`] when the
    /// id is already present and the vertex count is unchanged.  In fast
    /// mode the check is skipped: a duplicate id is appended as a second
    /// vertex record, not deduplicated, and lookups will keep resolving to
    /// the first one.
    pub fn add_vertex(&mut self, id: impl Into<VertexId>, value: V) -> Result<(), GraphError> {
        let id = id.into();
        if self.mode == Mode::Strict && self.index.contains_key(&id) {
            return Err(GraphError::DuplicateVertex { id });
        }
        let slot = self.vertices.len();
        self.vertices.push(Vertex::new(id, value));
        self.index.entry(id).or_insert(slot);
        Ok(())
    }

    /// Adds a directed edge `from → into` with the given weight; on an
    /// undirected graph the reverse edge is inserted with the same weight.
    ///
    /// In strict mode, fails with [`GraphError::UnknownVertex`] when either
    /// endpoint is absent and with [`GraphError::DuplicateEdge`] when the
    /// ordered pair already has an edge.  In fast mode endpoints are
    /// resolved by 1-based index (see [`Mode`]) and the duplicate check is
    /// skipped.
    pub fn add_edge(
        &mut self,
        from: impl Into<VertexId>,
        into: impl Into<VertexId>,
        weight: i64,
    ) -> Result<(), GraphError> {
        let from = from.into();
        let into = into.into();
        self.add_edge_in_direction(from, into, weight)?;
        if self.undirected {
            self.add_edge_in_direction(into, from, weight)?;
        }
        Ok(())
    }

    fn add_edge_in_direction(
        &mut self,
        from: VertexId,
        into: VertexId,
        weight: i64,
    ) -> Result<(), GraphError> {
        let from_slot = self.slot_of(from)?;
        let into_slot = self.slot_of(into)?;
        if self.mode == Mode::Strict
            && self.vertices[from_slot]
                .neighbors
                .iter()
                .any(|&(slot, _)| slot == into_slot)
        {
            return Err(GraphError::DuplicateEdge { from, into });
        }
        self.vertices[from_slot].neighbors.push((into_slot, weight));
        Ok(())
    }

    /// Resolves an id to its arena slot according to the graph's [`Mode`].
    pub(crate) fn slot_of(&self, id: VertexId) -> Result<usize, GraphError> {
        match self.mode {
            Mode::Strict => self
                .index
                .get(&id)
                .copied()
                .ok_or(GraphError::UnknownVertex { id }),
            Mode::Fast => {
                let position = id.0 as usize;
                if (1..=self.vertices.len()).contains(&position) {
                    Ok(position - 1)
                } else {
                    Err(GraphError::UnknownVertex { id })
                }
            }
        }
    }

    pub(crate) fn vertex(&self, slot: usize) -> &Vertex<V> {
        &self.vertices[slot]
    }

    pub(crate) fn vertex_mut(&mut self, slot: usize) -> &mut Vertex<V> {
        &mut self.vertices[slot]
    }

    pub(crate) fn slots(&self) -> std::ops::Range<usize> {
        0..self.vertices.len()
    }

    /// Resets every vertex to Unvisited with no distance and no parent.
    pub(crate) fn reset_traversal_state(&mut self) {
        for vertex in &mut self.vertices {
            vertex.reset();
        }
    }

    /// Gets the payload of a vertex.
    pub fn value(&self, id: impl Into<VertexId>) -> Result<&V, GraphError> {
        Ok(&self.vertices[self.slot_of(id.into())?].value)
    }

    /// Gets the traversal color left behind by the most recent algorithm
    /// run.
    pub fn color(&self, id: impl Into<VertexId>) -> Result<Color, GraphError> {
        Ok(self.vertices[self.slot_of(id.into())?].color)
    }

    /// Gets the distance computed by the most recent algorithm run.  `None`
    /// means the vertex was never reached (or no algorithm has run yet);
    /// the unit depends on the algorithm: hops for BFS, path weight for
    /// the shortest-path algorithms.
    pub fn distance(&self, id: impl Into<VertexId>) -> Result<Option<i64>, GraphError> {
        Ok(self.vertices[self.slot_of(id.into())?].distance)
    }

    /// Gets the id of the vertex that discovered or last relaxed this one
    /// in the most recent algorithm run, for path reconstruction.
    pub fn parent(&self, id: impl Into<VertexId>) -> Result<Option<VertexId>, GraphError> {
        let slot = self.slot_of(id.into())?;
        Ok(self.vertices[slot].parent.map(|p| self.vertices[p].id))
    }

    /// Iterates over a vertex's `(neighbor id, weight)` pairs in edge
    /// insertion order.
    pub fn neighbors(
        &self,
        id: impl Into<VertexId>,
    ) -> Result<impl Iterator<Item = (VertexId, i64)> + '_, GraphError> {
        let slot = self.slot_of(id.into())?;
        Ok(self.vertices[slot]
            .neighbors
            .iter()
            .map(|&(target, weight)| (self.vertices[target].id, weight)))
    }
}

impl<V: Debug> Debug for SparseGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let adjacency: Vec<(VertexId, Vec<(VertexId, i64)>)> = self
            .vertices
            .iter()
            .map(|v| {
                let targets = v
                    .neighbors
                    .iter()
                    .map(|&(slot, weight)| (self.vertices[slot].id, weight))
                    .collect();
                (v.id, targets)
            })
            .collect();
        f.debug_struct("SparseGraph")
            .field("undirected", &self.undirected)
            .field("mode", &self.mode)
            .field("adjacency", &adjacency)
            .finish()
    }
}

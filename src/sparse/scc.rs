use std::collections::HashMap;

use tracing::{debug, debug_span};

use crate::{
    error::GraphError,
    sparse::SparseGraph,
    vertex::{Color, Vertex, VertexId},
};

impl<V: Clone> SparseGraph<V> {
    /// Builds the transposed graph: same vertices in the same insertion
    /// order with fresh traversal state, every edge reversed, weights
    /// preserved.  Slot numbering is identical to the source graph, which
    /// is what lets the component search reuse finishing-order slots
    /// directly.
    pub fn transpose(&self) -> SparseGraph<V> {
        let mut transposed = SparseGraph {
            vertices: self
                .vertices
                .iter()
                .map(|v| Vertex::new(v.id, v.value.clone()))
                .collect::<Vec<_>>(),
            index: HashMap::new(),
            undirected: self.undirected,
            mode: self.mode,
        };
        for (slot, vertex) in self.vertices.iter().enumerate() {
            transposed.index.entry(vertex.id).or_insert(slot);
            for &(target, weight) in &vertex.neighbors {
                transposed.vertices[target].neighbors.push((slot, weight));
            }
        }
        transposed
    }

    /// Partitions the graph into strongly connected components using
    /// Kosaraju's algorithm: take the DFS finishing order of the whole
    /// graph, then walk it back to front running DFS in the transposed
    /// graph; each root's visit set is one maximal set of mutually
    /// reachable vertices.
    ///
    /// Component order is the discovery order of the second phase and
    /// carries no further meaning.  Only sensible for directed graphs; on
    /// an undirected graph every connected component is trivially strongly
    /// connected.
    pub fn strongly_connected_components(&mut self) -> Result<Vec<Vec<VertexId>>, GraphError> {
        let _span = debug_span!("strongly_connected_components").entered();
        let mut finish_slots = Vec::with_capacity(self.num_vertices());
        self.dfs_explore_with(None, |slot| finish_slots.push(slot))?;

        let mut transposed = self.transpose();
        let mut components = Vec::new();
        for &slot in finish_slots.iter().rev() {
            if transposed.vertex(slot).color == Color::Unvisited {
                let mut member_slots = Vec::new();
                transposed.dfs_visit(slot, &mut |s| member_slots.push(s));
                components.push(
                    member_slots
                        .into_iter()
                        .map(|s| transposed.vertex(s).id)
                        .collect(),
                );
            }
        }
        debug!(components = components.len(), "component search finished");
        Ok(components)
    }
}

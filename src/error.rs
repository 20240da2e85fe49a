use crate::vertex::VertexId;

/// Errors raised by graph construction and lookup when validation is
/// enabled.  Graphs in [`Mode::Fast`](crate::sparse::Mode::Fast) skip the
/// duplicate and existence checks entirely, so most of these can only occur
/// in strict mode; the exception is `UnknownVertex`, which fast mode still
/// reports when an id falls outside the 1-based index range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError {
    /// A vertex with this id already exists in the graph.
    #[error("vertex with id {id} already exists in the graph")]
    DuplicateVertex { id: VertexId },
    /// An edge between this ordered pair of vertices already exists.
    #[error("edge from {from} to {into} already exists in the graph")]
    DuplicateEdge { from: VertexId, into: VertexId },
    /// An operation referenced an id that is not present in the graph.
    #[error("no vertex with id {id} in the graph")]
    UnknownVertex { id: VertexId },
}

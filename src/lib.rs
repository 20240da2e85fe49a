#[cfg(feature = "dense")]
pub mod dense;
pub mod error;
pub mod sparse;
pub mod vertex;

pub use error::GraphError;
pub use sparse::{Mode, SparseGraph};
pub use vertex::{Color, VertexId};

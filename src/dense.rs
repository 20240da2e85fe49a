//! Adjacency-matrix storage for the dense case.
//!
//! Vertices are implicit indices `0..capacity`; only edges carry data.  The
//! representation is a flat weight matrix, so it suits graphs whose edge
//! count is close to the possible maximum, where per-vertex neighbor lists
//! would waste more than they save.

use std::collections::VecDeque;
use std::fmt::{self, Debug};

use bitvec::vec::BitVec;

use crate::{error::GraphError, vertex::VertexId};

/// An adjacency-matrix graph with a fixed vertex capacity.
///
/// `matrix[i * capacity + j]` holds the weight of the edge i→j, or `None`
/// when there is no edge.  An undirected graph mirrors every write to
/// `(j, i)`.  Two counters track edges: `num_edges` counts occupied matrix
/// entries, `num_edges_with_duplicates` counts every `add_edge` call
/// including overwrites of an existing entry.
pub struct DenseGraph {
    capacity: usize,
    undirected: bool,
    matrix: Vec<Option<i64>>,
    num_edges: usize,
    num_edges_with_duplicates: usize,
    distances: Vec<Option<i64>>,
    parents: Vec<Option<usize>>,
    visited: BitVec,
}

impl DenseGraph {
    /// Creates a directed graph with vertices `0..capacity` and no edges.
    pub fn directed(capacity: usize) -> Self {
        DenseGraph {
            capacity,
            undirected: false,
            matrix: vec![None; capacity * capacity],
            num_edges: 0,
            num_edges_with_duplicates: 0,
            distances: vec![None; capacity],
            parents: vec![None; capacity],
            visited: BitVec::repeat(false, capacity),
        }
    }

    /// Creates an undirected graph with vertices `0..capacity`.
    pub fn undirected(capacity: usize) -> Self {
        DenseGraph {
            undirected: true,
            ..Self::directed(capacity)
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of occupied matrix entries; an undirected edge occupies two.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Total `add_edge` calls, counting overwrites of existing entries.
    pub fn num_edges_with_duplicates(&self) -> usize {
        self.num_edges_with_duplicates
    }

    fn check_index(&self, index: usize) -> Result<(), GraphError> {
        if index < self.capacity {
            Ok(())
        } else {
            Err(GraphError::UnknownVertex {
                id: VertexId(index as u32),
            })
        }
    }

    fn cell(&self, from: usize, into: usize) -> usize {
        from * self.capacity + into
    }

    /// Sets the weight of the edge `from → into`, overwriting any previous
    /// weight.  Mirrored on undirected graphs.
    pub fn add_edge(&mut self, from: usize, into: usize, weight: i64) -> Result<(), GraphError> {
        self.check_index(from)?;
        self.check_index(into)?;
        let cell = self.cell(from, into);
        if self.matrix[cell].is_none() {
            self.num_edges += 1;
        }
        self.matrix[cell] = Some(weight);
        if self.undirected {
            let mirror = self.cell(into, from);
            if self.matrix[mirror].is_none() && mirror != cell {
                self.num_edges += 1;
            }
            self.matrix[mirror] = Some(weight);
        }
        self.num_edges_with_duplicates += 1;
        Ok(())
    }

    /// Removes the edge `from → into` if present.  Mirrored on undirected
    /// graphs.
    pub fn remove_edge(&mut self, from: usize, into: usize) -> Result<(), GraphError> {
        self.check_index(from)?;
        self.check_index(into)?;
        let cell = self.cell(from, into);
        if self.matrix[cell].is_some() {
            self.num_edges -= 1;
        }
        self.matrix[cell] = None;
        if self.undirected {
            let mirror = self.cell(into, from);
            if self.matrix[mirror].is_some() && mirror != cell {
                self.num_edges -= 1;
            }
            self.matrix[mirror] = None;
        }
        Ok(())
    }

    /// Gets the weight of the edge `from → into`, or `None` when absent.
    pub fn weight(&self, from: usize, into: usize) -> Result<Option<i64>, GraphError> {
        self.check_index(from)?;
        self.check_index(into)?;
        Ok(self.matrix[self.cell(from, into)])
    }

    /// Scans one matrix row for the vertices adjacent to `from`.
    pub fn neighbors_of(&self, from: usize) -> Result<Vec<usize>, GraphError> {
        self.check_index(from)?;
        Ok((0..self.capacity)
            .filter(|&into| self.matrix[self.cell(from, into)].is_some())
            .collect())
    }

    /// Layered breadth-first exploration with a hop distance of 1; see
    /// [`Self::bfs_explore_stepped`].
    pub fn bfs_explore(&mut self, start: usize) -> Result<(), GraphError> {
        self.bfs_explore_stepped(start, 1)
    }

    /// Layered breadth-first exploration from `start`: every newly
    /// discovered vertex gets `distance = parent distance + step` and the
    /// discovering vertex as its parent.  Prior results are reset first;
    /// vertices unreachable from `start` end with no distance and no
    /// parent.
    pub fn bfs_explore_stepped(&mut self, start: usize, step: i64) -> Result<(), GraphError> {
        self.check_index(start)?;
        self.distances.fill(None);
        self.parents.fill(None);
        self.visited.fill(false);

        let mut queue = VecDeque::new();
        self.distances[start] = Some(0);
        self.visited.set(start, true);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let base = self.distances[current].expect("queued vertex has a distance");
            for into in 0..self.capacity {
                if self.matrix[self.cell(current, into)].is_some() && !self.visited[into] {
                    self.distances[into] = Some(base + step);
                    self.parents[into] = Some(current);
                    self.visited.set(into, true);
                    queue.push_back(into);
                }
            }
        }
        Ok(())
    }

    /// Gets the distance assigned by the most recent BFS run.
    pub fn distance(&self, index: usize) -> Result<Option<i64>, GraphError> {
        self.check_index(index)?;
        Ok(self.distances[index])
    }

    /// Gets the parent assigned by the most recent BFS run.
    pub fn parent(&self, index: usize) -> Result<Option<usize>, GraphError> {
        self.check_index(index)?;
        Ok(self.parents[index])
    }
}

impl Debug for DenseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DenseGraph ({} vertices)", self.capacity)?;
        for from in 0..self.capacity {
            for into in 0..self.capacity {
                match self.matrix[self.cell(from, into)] {
                    Some(weight) => write!(f, "{weight:>4} ")?,
                    None => write!(f, "   . ")?,
                }
            }
            writeln!(f, "[{from}]")?;
        }
        Ok(())
    }
}

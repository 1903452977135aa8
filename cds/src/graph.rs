//! Directed graph as a square adjacency matrix.
//!
//! Cell `from * nodes + to` of the backing [`Vector<bool>`] is `true` when
//! the edge `from -> to` exists. Space is quadratic in the node count, so
//! this suits small, dense graphs.

use std::fmt;

use crate::core::Vector;
use crate::error::VectorError;

/// A directed graph over nodes `0..node_count()`.
#[derive(Debug)]
pub struct Graph {
    nodes: usize,
    edges: Vector<bool>,
}

impl Graph {
    /// Creates a graph with `nodes` nodes and no edges.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::CapacityOverflow` or `VectorError::AllocationFailed`
    /// if the matrix cannot be allocated.
    pub fn new(nodes: usize) -> Result<Self, VectorError> {
        let cells = nodes
            .checked_mul(nodes)
            .ok_or(VectorError::CapacityOverflow { requested: nodes })?;
        let mut edges = Vector::with_capacity(cells)?;
        edges.resize(cells, Some(false))?;
        Ok(Self { nodes, edges })
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    fn cell(&self, from: usize, to: usize) -> Result<usize, VectorError> {
        for node in [from, to] {
            if node >= self.nodes {
                return Err(VectorError::NodeOutOfRange {
                    node,
                    nodes: self.nodes,
                });
            }
        }
        Ok(from * self.nodes + to)
    }

    /// Adds the edge `from -> to`.
    ///
    /// Returns `false` if the edge already existed.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::NodeOutOfRange` if either node is not in the graph.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<bool, VectorError> {
        let cell = self.cell(from, to)?;
        match self.edges.get_mut(cell) {
            Some(edge) if !*edge => {
                *edge = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Whether the edge `from -> to` exists.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::NodeOutOfRange` if either node is not in the graph.
    pub fn has_edge(&self, from: usize, to: usize) -> Result<bool, VectorError> {
        let cell = self.cell(from, to)?;
        self.edges.at(cell)
    }

    /// Iterates over existing edges as `(from, to)` in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let nodes = self.nodes;
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| **edge)
            .map(move |(cell, _)| (cell / nodes, cell % nodes))
    }
}

/// Renders the graph in Graphviz `dot` syntax.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        for (from, to) in self.edges() {
            writeln!(f, "{from} -> {to};")?;
        }
        writeln!(f, "}}")
    }
}

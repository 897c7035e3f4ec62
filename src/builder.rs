use serde::{Deserialize, Serialize};

use crate::edges::Edges;
use crate::vertices::Vertices;
use crate::Graph;

/// Builder is the configuration used to create an empty Graph.
///
// - `vertex_capacity` is the number of vertices reserved up front; it only avoids reallocation during import.
// - `edge_capacity` is the number of arc slots reserved up front. Every connection uses two slots.
// - `block_size` is the capacity of a vertex's first adjacency block. A full block doubles, so a small value wastes less memory on low-degree vertices and a larger one relocates high-degree vertices less often.
///
/// Missing fields take their default when the builder is deserialized, so a partial
/// JSON document is a valid configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GraphBuilder {
    vertex_capacity: usize,
    edge_capacity: usize,
    block_size: usize,
}

pub const DEFAULT_BLOCK_SIZE: usize = 4;

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            vertex_capacity: 0,
            edge_capacity: 0,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl GraphBuilder {
    pub fn set_vertex_capacity(mut self, vertex_capacity: usize) -> Self {
        self.vertex_capacity = vertex_capacity;
        self
    }
    pub fn set_edge_capacity(mut self, edge_capacity: usize) -> Self {
        self.edge_capacity = edge_capacity;
        self
    }
    /// Values below 1 are raised to 1.
    pub fn set_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size.max(1);
        self
    }

    pub fn get_vertex_capacity(&self) -> usize {
        self.vertex_capacity
    }
    pub fn get_edge_capacity(&self) -> usize {
        self.edge_capacity
    }
    pub fn get_block_size(&self) -> usize {
        self.block_size
    }

    /// Creates an empty graph with this configuration.
    pub fn build<E>(&self) -> Graph<E> {
        Graph::from_parts(
            Vertices::with_capacity(self.vertex_capacity),
            Edges::new(self.vertex_capacity, self.edge_capacity, self.block_size),
        )
    }
}

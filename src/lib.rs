/*
    routegraph is a mutable, memory-resident road-network graph for route planning,
    with mirrored arcs, compaction and a pluggable binary codec for edge payloads.
*/

//! Vertices carry a `(latitude, longitude)` pair and get dense `u32` ids. Edges are
//! undirected connections whose payload is opaque to the graph apart from the
//! [`EdgeInterface`] contract: a fixed width in `u32` words, an encoder, a decoder and a
//! `reverse` used to fill in the arc that runs the other way.
//!
//! ```rust
//! use routegraph::{Graph, LiveEdge};
//!
//! let mut graph = Graph::new();
//! let a = graph.add_vertex(51.0, 4.0);
//! let b = graph.add_vertex(51.0, 4.1);
//! let c = graph.add_vertex(51.1, 4.1);
//! graph.add_edge(a, b, LiveEdge::new(true, 1)).unwrap();
//! graph.add_edge(b, c, LiveEdge::new(true, 2)).unwrap();
//!
//! graph.remove_edges(c).unwrap();
//! graph.compress();
//! assert_eq!(graph.vertex_count(), 2);
//!
//! let mut bytes = Vec::new();
//! graph.serialize(&mut bytes).unwrap();
//! let loaded: Graph<LiveEdge> = Graph::deserialize(bytes.as_slice()).unwrap();
//! assert_eq!(loaded.get_edge(b, a).unwrap(), Some(&LiveEdge::new(false, 1)));
//! ```

pub mod builder;
pub mod compress;
pub mod error;
pub mod graph;
pub mod live_edge;
pub mod serialize;
pub mod sync;
pub mod traits;

mod edges;
mod vertices;


pub use crate::builder::GraphBuilder;
pub use crate::compress::CompressStats;
pub use crate::edges::Arcs;
pub use crate::error::{GraphError, Result};
pub use crate::graph::Graph;
pub use crate::live_edge::LiveEdge;
pub use crate::sync::SharedGraph;
pub use crate::traits::EdgeInterface;

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::Graph;

/// A graph shared between threads: one writer or many readers at a time.
///
/// [`Graph`] itself takes no locks. Wrap it once construction is done, or whenever
/// structural changes have to be interleaved with concurrent reads.
///
/// # Examples
///
/// ```rust
/// use routegraph::{Graph, LiveEdge, SharedGraph};
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex(51.0, 4.0);
/// let b = graph.add_vertex(51.1, 4.1);
/// graph.add_edge(a, b, LiveEdge::new(true, 1)).unwrap();
///
/// let shared = SharedGraph::new(graph);
/// let reader = shared.clone();
/// std::thread::spawn(move || {
///     assert!(reader.read().contains_edges(a, b).unwrap());
/// })
/// .join()
/// .unwrap();
/// ```
pub struct SharedGraph<E> {
    inner: Arc<RwLock<Graph<E>>>,
}

impl<E> Clone for SharedGraph<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> SharedGraph<E> {
    pub fn new(graph: Graph<E>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Graph<E>> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Graph<E>> {
        self.inner.write()
    }

    /// Gives the graph back if this is the last handle to it.
    pub fn try_unwrap(self) -> Result<Graph<E>, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<E> From<Graph<E>> for SharedGraph<E> {
    fn from(graph: Graph<E>) -> Self {
        Self::new(graph)
    }
}

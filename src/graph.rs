use crate::edges::{Arcs, Edges};
use crate::error::{GraphError, Result};
use crate::vertices::Vertices;
use crate::{EdgeInterface, GraphBuilder};

/// An undirected road-network graph.
///
/// Vertices carry a coordinate and get dense ids, starting at 0, in the order they are
/// added. A connection between two vertices is stored as two arcs, `u -> v` with the
/// payload given to [`Graph::add_edge`] and `v -> u` with its [`EdgeInterface::reverse`].
/// A pair of vertices has at most one connection.
///
/// Every strict operation validates its arguments before touching storage, so an `Err`
/// leaves the graph exactly as it was.
///
/// # Examples
///
/// ```rust
/// use routegraph::{Graph, LiveEdge};
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex(51.0, 4.0);
/// let b = graph.add_vertex(51.1, 4.1);
/// graph.add_edge(a, b, LiveEdge::new(true, 7)).unwrap();
///
/// assert_eq!(graph.get_edge(a, b).unwrap(), Some(&LiveEdge::new(true, 7)));
/// assert_eq!(graph.get_edge(b, a).unwrap(), Some(&LiveEdge::new(false, 7)));
/// ```
#[derive(Clone, Debug)]
pub struct Graph<E> {
    pub(crate) vertices: Vertices,
    pub(crate) edges: Edges<E>,
}

impl<E> Default for Graph<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Graph<E> {
    /// An empty graph with the default [`GraphBuilder`] settings.
    pub fn new() -> Self {
        GraphBuilder::default().build()
    }

    pub(crate) fn from_parts(vertices: Vertices, edges: Edges<E>) -> Self {
        Self { vertices, edges }
    }

    /// Always `false`: every connection can be read from both ends.
    pub fn is_directed(&self) -> bool {
        false
    }

    /// Always `false`: adding a connection twice overwrites the first one.
    pub fn can_have_duplicates(&self) -> bool {
        false
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.count()
    }

    /// Number of connections, each counted once even though it is stored as two arcs.
    pub fn edge_count(&self) -> usize {
        self.edges.arcs() / 2
    }

    /// Adds a vertex and returns its id, which is the previous vertex count.
    ///
    /// # Panics
    ///
    /// Panics once the graph holds `u32::MAX` vertices, since no id is left.
    pub fn add_vertex(&mut self, latitude: f32, longitude: f32) -> u32 {
        let id = self.vertices.push(latitude, longitude);
        self.edges.push_vertex();
        id
    }

    pub fn set_vertex(&mut self, id: u32, latitude: f32, longitude: f32) -> Result<()> {
        self.check_vertex(id)?;
        self.vertices.set(id, latitude, longitude);
        Ok(())
    }

    /// Coordinates of `id` as `(latitude, longitude)`, or `None` when there is no such vertex.
    pub fn get_vertex(&self, id: u32) -> Option<(f32, f32)> {
        self.vertices.get(id)
    }

    /// Every vertex as `(id, latitude, longitude)`, by increasing id.
    pub fn vertices(&self) -> impl Iterator<Item = (u32, f32, f32)> + '_ {
        self.vertices.iter()
    }

    /// The payload of the arc `u -> v`, if `u` and `v` are connected.
    pub fn get_edge(&self, u: u32, v: u32) -> Result<Option<&E>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.edges.find(u, v).and_then(|slot| self.edges.get(slot)))
    }

    /// The arcs leaving `u` as `(neighbor, payload)`, in the order they were added.
    pub fn get_edges(&self, u: u32) -> Result<Arcs<'_, E>> {
        self.check_vertex(u)?;
        Ok(self.edges.iter(u))
    }

    /// The arcs leaving `u` that point to `v`. Yields at most one item.
    pub fn get_edges_between(&self, u: u32, v: u32) -> Result<impl Iterator<Item = (u32, &E)> + '_> {
        let arcs = self.get_edges(u)?;
        self.check_vertex(v)?;
        Ok(arcs.filter(move |&(neighbor, _)| neighbor == v))
    }

    /// Whether `u` and `v` are connected. Symmetric in its arguments.
    pub fn contains_edges(&self, u: u32, v: u32) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.edges.find(u, v).is_some())
    }

    /// Number of arcs leaving `u`.
    pub fn arc_count(&self, u: u32) -> Result<usize> {
        self.check_vertex(u)?;
        Ok(self.edges.live(u))
    }

    /// Removes the connection between `u` and `v`, both arcs of it.
    ///
    /// Returns `Ok(false)` when the two vertices were not connected.
    pub fn remove_edge(&mut self, u: u32, v: u32) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        let Some(forward) = self.edges.find(u, v) else {
            return Ok(false);
        };
        self.edges.remove_at(u, forward);
        if let Some(backward) = self.edges.find(v, u) {
            self.edges.remove_at(v, backward);
        }
        Ok(true)
    }

    /// Removes every connection of `u`. The vertex itself stays.
    ///
    /// Returns the number of connections removed.
    pub fn remove_edges(&mut self, u: u32) -> Result<usize> {
        self.check_vertex(u)?;

        let neighbors = self.edges.clear(u);
        for &neighbor in &neighbors {
            if let Some(backward) = self.edges.find(neighbor, u) {
                self.edges.remove_at(neighbor, backward);
            }
        }
        Ok(neighbors.len())
    }

    pub(crate) fn check_vertex(&self, id: u32) -> Result<()> {
        let count = self.vertex_count();
        if id < count {
            Ok(())
        } else {
            Err(GraphError::OutOfRange { vertex: id, count })
        }
    }
}

impl<E> Graph<E>
where
    E: EdgeInterface,
{
    /// Connects `u` and `v`, storing `edge` on `u -> v` and `edge.reverse()` on `v -> u`.
    ///
    /// If the pair is already connected, in either direction, both payloads are
    /// overwritten in place and no new arc is created.
    pub fn add_edge(&mut self, u: u32, v: u32, edge: E) -> Result<()> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::InvalidArgument(format!(
                "cannot connect vertex {u} to itself"
            )));
        }

        let reverse = edge.reverse();
        if let Some(forward) = self.edges.find(u, v) {
            let backward = self.edges.find(v, u);
            debug_assert!(backward.is_some(), "arc {u} -> {v} has no mirror");
            self.edges.set(forward, edge);
            if let Some(backward) = backward {
                self.edges.set(backward, reverse);
            }
            return Ok(());
        }

        self.edges.append(u, v, edge);
        self.edges.append(v, u, reverse);
        Ok(())
    }
}

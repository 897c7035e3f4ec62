//! Binary persistence of a [`Graph`].
//!
//! All integers are little-endian `u32`, floats are little-endian IEEE-754 binary32:
//!
//! ```text
//! vertex_count
//! vertex_count x (latitude, longitude)
//! vertex_count x (arc_count, arc_count x (neighbor, SIZE_WORDS x word))
//! ```
//!
//! Both arcs of a connection are written, in adjacency order, so a loaded graph iterates
//! exactly like the one that was saved. Tombstones are never written.

use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::{EdgeInterface, Graph, GraphBuilder};

/// Upper bound on the vertex table reserved from a count read off the stream.
const MAX_RESERVED_VERTICES: usize = 1 << 20;

impl<E> Graph<E> {
    /// Writes the graph to `writer`, encoding each payload with `map_to` into
    /// `size_words` words.
    ///
    /// `map_to` is handed a zeroed buffer of exactly `size_words` words, so `size_words`
    /// must be at least the number of words the codec writes. A codec that indexes past
    /// the buffer panics. [`Graph::serialize`] takes the width from
    /// [`EdgeInterface::SIZE_WORDS`] and cannot get it wrong.
    pub fn serialize_with<W, F>(&self, mut writer: W, size_words: usize, map_to: F) -> Result<()>
    where
        W: Write,
        F: Fn(&E, &mut [u32]),
    {
        let count = self.vertex_count();
        writer.write_u32::<LittleEndian>(count)?;
        for (_, latitude, longitude) in self.vertices() {
            writer.write_f32::<LittleEndian>(latitude)?;
            writer.write_f32::<LittleEndian>(longitude)?;
        }

        let mut words = vec![0u32; size_words];
        for vertex in 0..count {
            let arcs = self.edges.iter(vertex);
            writer.write_u32::<LittleEndian>(arcs.len() as u32)?;
            for (neighbor, payload) in arcs {
                writer.write_u32::<LittleEndian>(neighbor)?;
                words.fill(0);
                map_to(payload, &mut words);
                for &word in &words {
                    writer.write_u32::<LittleEndian>(word)?;
                }
            }
        }
        writer.flush()?;

        debug!(vertices = count, arcs = self.edges.arcs(), size_words, "serialized graph");
        Ok(())
    }

    /// Reads a graph written by [`Graph::serialize_with`], decoding each payload from
    /// `size_words` words with `map_from`.
    ///
    /// A stream that ends early fails with [`GraphError::Io`]. A complete stream that
    /// breaks the graph's invariants (out-of-range neighbor, self-loop, two arcs to the
    /// same neighbor, an arc without its mirror) fails with [`GraphError::Format`].
    ///
    /// Without a way to reverse a payload only the presence of each mirror arc can be
    /// checked here. [`Graph::deserialize`] also checks that the two payloads mirror
    /// each other.
    pub fn deserialize_with<R, F>(reader: R, size_words: usize, map_from: F) -> Result<Self>
    where
        R: Read,
        F: Fn(&[u32]) -> E,
    {
        Self::read(reader, size_words, map_from, |_, _| true)
    }

    /// Reads a graph, accepting an arc `u -> v` only if the arc `v -> u` exists and
    /// `mirrored(u -> v, v -> u)` holds.
    fn read<R, F, M>(
        mut reader: R,
        size_words: usize,
        map_from: F,
        mut mirrored: M,
    ) -> Result<Self>
    where
        R: Read,
        F: Fn(&[u32]) -> E,
        M: FnMut(&E, &E) -> bool,
    {
        let count = reader.read_u32::<LittleEndian>()?;
        let mut graph: Graph<E> = GraphBuilder::default()
            .set_vertex_capacity((count as usize).min(MAX_RESERVED_VERTICES))
            .build();
        for _ in 0..count {
            let latitude = reader.read_f32::<LittleEndian>()?;
            let longitude = reader.read_f32::<LittleEndian>()?;
            graph.add_vertex(latitude, longitude);
        }

        let mut words = vec![0u32; size_words];
        let mut seen = FxHashSet::default();
        for vertex in 0..count {
            let arcs = reader.read_u32::<LittleEndian>()?;
            seen.clear();
            for _ in 0..arcs {
                let neighbor = reader.read_u32::<LittleEndian>()?;
                reader.read_u32_into::<LittleEndian>(&mut words)?;
                if neighbor >= count {
                    return Err(malformed(format!(
                        "arc {vertex} -> {neighbor} points past the last vertex ({count} vertices)"
                    )));
                }
                if neighbor == vertex {
                    return Err(malformed(format!("vertex {vertex} has an arc to itself")));
                }
                if !seen.insert(neighbor) {
                    return Err(malformed(format!(
                        "vertex {vertex} has more than one arc to {neighbor}"
                    )));
                }
                graph.edges.append(vertex, neighbor, map_from(&words));
            }
        }

        for vertex in 0..count {
            for (neighbor, payload) in graph.edges.iter(vertex) {
                let mirror = graph
                    .edges
                    .find(neighbor, vertex)
                    .and_then(|slot| graph.edges.get(slot));
                match mirror {
                    None => {
                        return Err(malformed(format!(
                            "arc {vertex} -> {neighbor} has no mirror arc {neighbor} -> {vertex}"
                        )))
                    }
                    Some(mirror) if !mirrored(payload, mirror) => {
                        return Err(malformed(format!(
                            "arcs {vertex} -> {neighbor} and {neighbor} -> {vertex} do not carry mirrored payloads"
                        )))
                    }
                    Some(_) => {}
                }
            }
        }

        debug!(vertices = count, arcs = graph.edges.arcs(), size_words, "deserialized graph");
        Ok(graph)
    }
}

impl<E> Graph<E>
where
    E: EdgeInterface,
{
    /// [`Graph::serialize_with`] using the payload's own [`EdgeInterface`] codec.
    pub fn serialize<W: Write>(&self, writer: W) -> Result<()> {
        self.serialize_with(writer, E::SIZE_WORDS, E::to_words)
    }

    /// [`Graph::deserialize_with`] using the payload's own [`EdgeInterface`] codec.
    ///
    /// The payload of every arc must encode to the same words as the reverse of its
    /// mirror arc's payload, otherwise the stream fails with [`GraphError::Format`].
    pub fn deserialize<R: Read>(reader: R) -> Result<Self> {
        let mut expected = vec![0u32; E::SIZE_WORDS];
        let mut stored = vec![0u32; E::SIZE_WORDS];
        Self::read(reader, E::SIZE_WORDS, E::from_words, |arc, mirror| {
            expected.fill(0);
            stored.fill(0);
            arc.reverse().to_words(&mut expected);
            mirror.to_words(&mut stored);
            expected == stored
        })
    }
}

fn malformed(message: String) -> GraphError {
    warn!(%message, "rejected graph data");
    GraphError::Format(message)
}

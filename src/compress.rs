use tracing::debug;

use crate::Graph;

/// What a call to [`Graph::compress`] gave back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompressStats {
    /// Arc slots released from the backing storage: tombstones, spare block capacity
    /// and blocks left behind by relocation.
    pub reclaimed_slots: usize,
    /// Vertices dropped from the end of the id range.
    pub trimmed_vertices: u32,
}

impl<E> Graph<E> {
    /// Reclaims the space left by removed arcs and drops edge-less vertices at the end of
    /// the id range.
    ///
    /// Trimming walks down from the highest id and stops at the first vertex that still has
    /// an arc, so interior vertices keep their ids even when they have no arcs. Connections
    /// and their iteration order are unchanged.
    pub fn compress(&mut self) -> CompressStats {
        let count = self.vertex_count();
        let trimmed_count = (0..count)
            .rev()
            .find(|&id| self.edges.live(id) > 0)
            .map_or(0, |id| id + 1);

        self.vertices.truncate(trimmed_count);
        let reclaimed_slots = self.edges.compact(trimmed_count);

        let stats = CompressStats {
            reclaimed_slots,
            trimmed_vertices: count - trimmed_count,
        };
        debug!(
            vertices = trimmed_count,
            arcs = self.edges.arcs(),
            slots = self.edges.slot_count(),
            reclaimed_slots = stats.reclaimed_slots,
            trimmed_vertices = stats.trimmed_vertices,
            "compressed graph"
        );
        stats
    }
}

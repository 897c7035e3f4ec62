use std::iter::FusedIterator;
use std::slice;

use tracing::trace;

/// A stored arc: neighbor id and payload. `None` marks a tombstone.
type Slot<E> = Option<(u32, E)>;

/// The part of the backing array owned by one vertex.
///
/// Slots `start..start + len` have been handed out, `live` of them still hold an arc.
/// Slots `start + len..start + capacity` have never been used since the block was placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Block {
    start: usize,
    len: usize,
    capacity: usize,
    live: usize,
}

/// Per-vertex adjacency lists packed into one growable array.
///
/// Removing an arc only empties its slot. The slot is given back when the block is
/// relocated (live arcs only are moved) or when the whole store is compacted.
#[derive(Clone, Debug)]
pub(crate) struct Edges<E> {
    slots: Vec<Slot<E>>,
    blocks: Vec<Block>,
    /// Blocks left behind by relocation, as (start, capacity).
    free: Vec<(usize, usize)>,
    block_size: usize,
    arcs: usize,
}

impl<E> Edges<E> {
    pub(crate) fn new(vertex_capacity: usize, edge_capacity: usize, block_size: usize) -> Self {
        Self {
            slots: Vec::with_capacity(edge_capacity),
            blocks: Vec::with_capacity(vertex_capacity),
            free: Vec::new(),
            block_size: block_size.max(1),
            arcs: 0,
        }
    }

    /// Registers one more vertex, with no arcs.
    pub(crate) fn push_vertex(&mut self) {
        self.blocks.push(Block::default());
    }

    /// Number of live arcs at `vertex`.
    pub(crate) fn live(&self, vertex: u32) -> usize {
        self.blocks[vertex as usize].live
    }

    /// Number of live arcs in the whole store.
    pub(crate) fn arcs(&self) -> usize {
        self.arcs
    }

    /// Number of slots in the backing array, tombstones and spare capacity included.
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Adds the arc `vertex -> neighbor` after every arc already stored at `vertex`.
    ///
    /// Does not look for an existing arc to the same neighbor.
    pub(crate) fn append(&mut self, vertex: u32, neighbor: u32, payload: E) {
        let v = vertex as usize;
        if self.blocks[v].len == self.blocks[v].capacity {
            self.grow(v);
        }
        let block = &mut self.blocks[v];
        self.slots[block.start + block.len] = Some((neighbor, payload));
        block.len += 1;
        block.live += 1;
        self.arcs += 1;
    }

    /// Index of the slot holding the arc `vertex -> neighbor`.
    pub(crate) fn find(&self, vertex: u32, neighbor: u32) -> Option<usize> {
        let block = self.blocks[vertex as usize];
        (block.start..block.start + block.len)
            .find(|&slot| matches!(&self.slots[slot], Some((n, _)) if *n == neighbor))
    }

    pub(crate) fn get(&self, slot: usize) -> Option<&E> {
        self.slots[slot].as_ref().map(|(_, payload)| payload)
    }

    /// Replaces the payload in an occupied slot, keeping its position.
    pub(crate) fn set(&mut self, slot: usize, payload: E) {
        if let Some((_, stored)) = &mut self.slots[slot] {
            *stored = payload;
        }
    }

    /// Tombstones `slot`, which must belong to `vertex`. Returns the removed payload.
    pub(crate) fn remove_at(&mut self, vertex: u32, slot: usize) -> Option<E> {
        let (_, payload) = self.slots[slot].take()?;
        self.blocks[vertex as usize].live -= 1;
        self.arcs -= 1;
        Some(payload)
    }

    /// Tombstones every arc of `vertex` and returns the neighbors they pointed to.
    pub(crate) fn clear(&mut self, vertex: u32) -> Vec<u32> {
        let block = &mut self.blocks[vertex as usize];
        let neighbors: Vec<u32> = self.slots[block.start..block.start + block.len]
            .iter_mut()
            .filter_map(Option::take)
            .map(|(neighbor, _)| neighbor)
            .collect();
        block.live = 0;
        self.arcs -= neighbors.len();
        neighbors
    }

    /// The live arcs of `vertex` in insertion order.
    pub(crate) fn iter(&self, vertex: u32) -> Arcs<'_, E> {
        let block = self.blocks[vertex as usize];
        Arcs {
            slots: self.slots[block.start..block.start + block.len].iter(),
            remaining: block.live,
        }
    }

    /// Rewrites the store so that only the first `count` vertices remain and every
    /// block holds exactly its live arcs. Returns the number of slots given back.
    pub(crate) fn compact(&mut self, count: u32) -> usize {
        self.blocks.truncate(count as usize);

        let before = self.slots.len();
        let mut slots: Vec<Slot<E>> = Vec::with_capacity(self.arcs);
        for block in self.blocks.iter_mut() {
            let start = slots.len();
            slots.extend(
                self.slots[block.start..block.start + block.len]
                    .iter_mut()
                    .filter_map(Option::take)
                    .map(Some),
            );
            *block = Block {
                start,
                len: block.live,
                capacity: block.live,
                live: block.live,
            };
        }

        self.slots = slots;
        self.free.clear();
        before - self.slots.len()
    }

    /// Makes room for one more arc at `v`, whose block is full.
    fn grow(&mut self, v: usize) {
        let block = self.blocks[v];
        let capacity = (block.capacity * 2).max(self.block_size);

        // The last block of the array can simply be extended.
        if block.capacity > 0 && block.start + block.capacity == self.slots.len() {
            self.slots.resize_with(block.start + capacity, || None);
            self.blocks[v].capacity = capacity;
            trace!(vertex = v, capacity, "grew adjacency block in place");
            return;
        }

        let start = self.allocate(capacity);
        let mut len = 0;
        for slot in block.start..block.start + block.len {
            if let Some(arc) = self.slots[slot].take() {
                self.slots[start + len] = Some(arc);
                len += 1;
            }
        }
        if block.capacity > 0 {
            self.free.push((block.start, block.capacity));
        }
        self.blocks[v] = Block {
            start,
            len,
            capacity,
            live: len,
        };
        trace!(vertex = v, from = block.start, to = start, capacity, "relocated adjacency block");
    }

    /// First fit from the free list, otherwise fresh slots at the end of the array.
    fn allocate(&mut self, capacity: usize) -> usize {
        if let Some(position) = self.free.iter().position(|&(_, free)| free >= capacity) {
            let (start, free) = self.free.swap_remove(position);
            if free > capacity {
                self.free.push((start + capacity, free - capacity));
            }
            return start;
        }
        let start = self.slots.len();
        self.slots.resize_with(start + capacity, || None);
        start
    }
}

/// Iterator over the arcs of one vertex, yielding `(neighbor, &payload)`.
///
/// Tombstones are skipped. A clone continues from the same position.
pub struct Arcs<'a, E> {
    slots: slice::Iter<'a, Slot<E>>,
    remaining: usize,
}

impl<'a, E> Clone for Arcs<'a, E> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, E> Iterator for Arcs<'a, E> {
    type Item = (u32, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let arc = self
            .slots
            .by_ref()
            .find_map(|slot| slot.as_ref().map(|(neighbor, payload)| (*neighbor, payload)));
        if arc.is_some() {
            self.remaining -= 1;
        }
        arc
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, E> ExactSizeIterator for Arcs<'a, E> {}

impl<'a, E> FusedIterator for Arcs<'a, E> {}

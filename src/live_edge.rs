use serde::{Deserialize, Serialize};

use crate::EdgeInterface;

/// Edge payload used for road networks built from OSM ways.
///
/// `forward` tells whether travelling the arc in its stored direction follows the
/// way's own direction. `tags` references a tag set kept outside the graph.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LiveEdge {
    pub forward: bool,
    pub tags: u32,
}

impl LiveEdge {
    pub fn new(forward: bool, tags: u32) -> Self {
        Self { forward, tags }
    }
}

impl EdgeInterface for LiveEdge {
    const SIZE_WORDS: usize = 2;

    fn reverse(&self) -> Self {
        Self {
            forward: !self.forward,
            tags: self.tags,
        }
    }

    fn to_words(&self, words: &mut [u32]) {
        words[0] = self.forward as u32;
        words[1] = self.tags;
    }

    fn from_words(words: &[u32]) -> Self {
        Self {
            // Only bit 0 carries the flag.
            forward: words[0] & 1 == 1,
            tags: words[1],
        }
    }
}

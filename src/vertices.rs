/// Most vertices a table can hold. Ids and the vertex count are both `u32`.
pub(crate) const MAX_VERTICES: usize = u32::MAX as usize;

/// Id of the vertex appended to a table of `len` vertices, if there is room for it.
pub(crate) fn next_id(len: usize) -> Option<u32> {
    u32::try_from(len).ok().filter(|&id| id < u32::MAX)
}

/// Dense table of vertex coordinates. A vertex id is its index.
#[derive(Clone, Debug, Default)]
pub(crate) struct Vertices {
    coordinates: Vec<(f32, f32)>,
}

impl Vertices {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            coordinates: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn count(&self) -> u32 {
        self.coordinates.len() as u32
    }

    /// Appends a vertex and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if the table already holds [`MAX_VERTICES`] vertices.
    pub(crate) fn push(&mut self, latitude: f32, longitude: f32) -> u32 {
        let Some(id) = next_id(self.coordinates.len()) else {
            panic!("vertex table is full ({MAX_VERTICES} vertices)");
        };
        self.coordinates.push((latitude, longitude));
        id
    }

    pub(crate) fn get(&self, id: u32) -> Option<(f32, f32)> {
        self.coordinates.get(id as usize).copied()
    }

    /// Overwrites the coordinates of `id`. The caller has validated the id.
    pub(crate) fn set(&mut self, id: u32, latitude: f32, longitude: f32) {
        self.coordinates[id as usize] = (latitude, longitude);
    }

    /// Forgets every vertex with an id `>= count`.
    pub(crate) fn truncate(&mut self, count: u32) {
        self.coordinates.truncate(count as usize);
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (u32, f32, f32)> + '_ {
        self.coordinates
            .iter()
            .enumerate()
            .map(|(id, &(lat, lon))| (id as u32, lat, lon))
    }
}

/// Traits that the edge payload type should implement for use by routegraph::Graph.
///
/// The graph never looks inside a payload. It only needs to build the payload of
/// the mirrored arc, and to turn a payload into a fixed number of `u32` words and back
/// when the graph is serialized.
///
/// # Examples
///
/// ```rust
/// use routegraph::EdgeInterface;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Oneway {
///     forward: bool,
///     way: u32,
/// }
///
/// impl EdgeInterface for Oneway {
///     const SIZE_WORDS: usize = 2;
///
///     fn reverse(&self) -> Self {
///         Oneway {
///             forward: !self.forward,
///             way: self.way,
///         }
///     }
///
///     fn to_words(&self, words: &mut [u32]) {
///         words[0] = self.forward as u32;
///         words[1] = self.way;
///     }
///
///     fn from_words(words: &[u32]) -> Self {
///         Oneway {
///             forward: words[0] & 1 == 1,
///             way: words[1],
///         }
///     }
/// }
/// ```
pub trait EdgeInterface: Sized {
    /// The number of `u32` words a payload occupies once serialized.
    const SIZE_WORDS: usize;

    /// The payload as seen when travelling the arc in the opposite direction.
    ///
    /// Must be pure. `AddEdge(u, v, p)` stores `p.reverse()` on the arc `v -> u`.
    fn reverse(&self) -> Self;

    /// Writes the payload into `words`, whose length is always `SIZE_WORDS`.
    fn to_words(&self, words: &mut [u32]);

    /// Rebuilds a payload from `words`, whose length is always `SIZE_WORDS`.
    ///
    /// Must accept every bit pattern.
    fn from_words(words: &[u32]) -> Self;
}

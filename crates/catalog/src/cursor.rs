/// Caller-owned wrapping position over a catalog of `len` prototypes.
///
/// Each display driver keeps its own cursor; nothing about the cursor lives in
/// the catalog. An empty catalog yields a cursor that stays at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    len: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Self { position: 0, len }
    }

    /// Start at `position`, wrapped into range.
    pub fn starting_at(len: usize, position: usize) -> Self {
        Self {
            position: position.checked_rem(len).unwrap_or(0),
            len,
        }
    }

    /// Position of the prototype to display now.
    pub fn current(&self) -> usize {
        self.position
    }

    /// Move to the next position, wrapping to 0 after the last, and return it.
    pub fn advance(&mut self) -> usize {
        self.position = (self.position + 1).checked_rem(self.len).unwrap_or(0);
        tracing::trace!(position = self.position, len = self.len, "cursor advanced");
        self.position
    }
}

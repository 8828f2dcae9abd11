use std::ops::Range;

/// Bytes of name text one listing may hold.
pub const ARENA_CAPACITY: usize = 32 * 1024;
/// Entries one listing may hold.
pub const MAX_ENTRIES: usize = 2048;

/// Text arena holding the names of one directory listing.
///
/// Allocated once and refilled wholesale on every directory change; the
/// names handed out are views into the shared buffer.
#[derive(Debug, Clone)]
pub struct NameArena {
    text: String,
    spans: Vec<Range<usize>>,
}

impl Default for NameArena {
    fn default() -> Self {
        Self::new()
    }
}

impl NameArena {
    pub fn new() -> Self {
        Self {
            text: String::with_capacity(ARENA_CAPACITY),
            spans: Vec::with_capacity(MAX_ENTRIES),
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.spans.clear();
    }

    /// Append a name. Returns `false` and stores nothing once either the
    /// entry cap or the byte capacity would be exceeded.
    pub fn push(&mut self, name: &str) -> bool {
        if self.spans.len() >= MAX_ENTRIES || self.text.len() + name.len() > ARENA_CAPACITY {
            return false;
        }
        let start = self.text.len();
        self.text.push_str(name);
        self.spans.push(start..self.text.len());
        true
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.spans.get(index).map(|span| &self.text[span.clone()])
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans.iter().map(|span| &self.text[span.clone()])
    }

    /// Bytes of name text currently stored.
    pub fn used_bytes(&self) -> usize {
        self.text.len()
    }
}

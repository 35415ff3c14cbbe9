use std::fmt;

/// Insertion-ordered set of vertex ids.
///
/// Enumeration order of shortest paths follows the order predecessors were
/// first recorded, so this keeps a plain `Vec` with append-if-absent
/// semantics instead of a hash set. Sets stay small (bounded by `n`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredecessorSet {
    items: Vec<usize>,
}

impl PredecessorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `vertex` unless already present. Returns whether it was added.
    pub fn insert(&mut self, vertex: usize) -> bool {
        if self.items.contains(&vertex) {
            return false;
        }
        self.items.push(vertex);
        true
    }

    /// Appends every member of `other` not already present, in `other`'s order.
    pub fn merge(&mut self, other: &PredecessorSet) {
        for &vertex in &other.items {
            self.insert(vertex);
        }
    }

    pub fn first(&self) -> Option<usize> {
        self.items.first().copied()
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.items.contains(&vertex)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.items
    }
}

impl FromIterator<usize> for PredecessorSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = PredecessorSet::new();
        for vertex in iter {
            set.insert(vertex);
        }
        set
    }
}

/// `ø` when empty, the bare id for a singleton, `[a,b,..]` otherwise.
impl fmt::Display for PredecessorSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self.items.as_slice() {
            [] => "ø".to_string(),
            [only] => only.to_string(),
            many => {
                let joined: Vec<String> = many.iter().map(|v| v.to_string()).collect();
                format!("[{}]", joined.join(","))
            }
        };
        f.pad(&text)
    }
}

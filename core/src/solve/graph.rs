use std::collections::HashMap;

/// Directed weighted graph over sparse `u32` ids.
#[derive(Debug, Default)]
pub struct Graph {
    index: HashMap<u32, usize>,
    ids: Vec<u32>,
    adjacency: Vec<Vec<(usize, u64)>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32, u32)>,
    {
        let mut graph = Self::new();
        for (from, to, distance) in edges {
            graph.add_edge(from, to, distance);
        }
        graph
    }

    /// Index of `id`, adding it as an isolated node when it is new.
    pub fn intern(&mut self, id: u32) -> usize {
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.ids.len();
        self.index.insert(id, idx);
        self.ids.push(id);
        self.adjacency.push(Vec::new());
        idx
    }

    pub fn add_edge(&mut self, from: u32, to: u32, distance: u32) {
        let from = self.intern(from);
        let to = self.intern(to);
        self.adjacency[from].push((to, u64::from(distance)));
    }

    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn id(&self, idx: usize) -> u32 {
        self.ids[idx]
    }

    pub fn neighbours(&self, idx: usize) -> &[(usize, u64)] {
        &self.adjacency[idx]
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_stable() {
        let mut g = Graph::from_edges([(10, 20, 1), (20, 10, 2)]);
        assert_eq!(g.len(), 2);
        assert_eq!(g.intern(20), 1);
        assert_eq!(g.intern(30), 2);
        assert_eq!(g.id(2), 30);
        assert!(g.neighbours(2).is_empty());
        assert_eq!(g.neighbours(0), &[(1, 1)]);
    }
}

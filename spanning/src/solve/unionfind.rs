use std::collections::HashMap;
use std::hash::Hash;

/// Union-find (disjoint-set) keyed by arbitrary elements, with path
/// compression and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    index: HashMap<T, usize>,
    elements: Vec<T>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    size: Vec<usize>,
    sets: usize,
}

impl<T: Clone + Eq + Hash> Default for UnionFind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> UnionFind<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            index: HashMap::with_capacity(n),
            elements: Vec::with_capacity(n),
            parent: Vec::with_capacity(n),
            rank: Vec::with_capacity(n),
            size: Vec::with_capacity(n),
            sets: 0,
        }
    }

    /// Register `element` as a singleton set. Returns `false` if it was already known.
    pub fn make_set(&mut self, element: T) -> bool {
        if self.index.contains_key(&element) {
            return false;
        }
        let id = self.elements.len();
        self.index.insert(element.clone(), id);
        self.elements.push(element);
        self.parent.push(id);
        self.rank.push(0);
        self.size.push(1);
        self.sets += 1;
        true
    }

    /// Find the representative of the set containing `element`, compressing
    /// the traversed path. `None` if the element was never registered.
    pub fn find(&mut self, element: &T) -> Option<&T> {
        let id = *self.index.get(element)?;
        let root = self.root(id);
        Some(&self.elements[root])
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `false` when nothing was merged: both elements already share a
    /// set, or one of them is unknown.
    pub fn union(&mut self, a: &T, b: &T) -> bool {
        let (Some(&ia), Some(&ib)) = (self.index.get(a), self.index.get(b)) else {
            return false;
        };
        let ra = self.root(ia);
        let rb = self.root(ib);
        if ra == rb {
            return false;
        }
        // Equal ranks: `a`'s root wins.
        let (winner, loser) = if self.rank[ra] < self.rank[rb] {
            (rb, ra)
        } else {
            (ra, rb)
        };
        if self.rank[winner] == self.rank[loser] {
            self.rank[winner] += 1;
        }
        self.parent[loser] = winner;
        self.size[winner] += self.size[loser];
        self.sets -= 1;
        true
    }

    /// Whether `a` and `b` are registered and belong to the same set.
    pub fn same_set(&mut self, a: &T, b: &T) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => self.root(ia) == self.root(ib),
            _ => false,
        }
    }

    /// Size of the set containing `element` (0 if unknown).
    pub fn set_size(&mut self, element: &T) -> usize {
        match self.index.get(element) {
            Some(&id) => {
                let root = self.root(id);
                self.size[root]
            }
            None => 0,
        }
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn root(&mut self, mut id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[id] != root {
            let next = self.parent[id];
            self.parent[id] = root;
            id = next;
        }
        root
    }
}

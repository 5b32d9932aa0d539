//! Disjoint-set forest with union by rank and full path compression.

use crate::types::{GraphError, GraphResult};

/// Create a forest of `n` singleton sets `{0}, {1}, .., {n-1}`.
pub fn new(n: usize) -> DisjointSetForest {
    DisjointSetForest::new(n)
}

/// A partition of `0..len()` into disjoint sets.
///
/// `find` re-points every node on the find-path directly at the root;
/// `union` hangs the lower-rank root under the higher-rank one. Together
/// they give amortized near-constant time per operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u32>,
    sets: usize,
}

impl DisjointSetForest {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Append a new singleton set and return its element id.
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.rank.push(0);
        self.sets += 1;
        id
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the forest.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of the set containing `x`.
    pub fn find(&mut self, x: usize) -> GraphResult<usize> {
        self.check(x)?;
        Ok(self.find_root(x))
    }

    /// Merge the sets containing `x` and `y`. Returns `false` when they were
    /// already the same set.
    pub fn union(&mut self, x: usize, y: usize) -> GraphResult<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.union_roots(x, y))
    }

    /// Whether `x` and `y` are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> GraphResult<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    fn check(&self, x: usize) -> GraphResult<()> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex: x,
                vertex_count: self.parent.len(),
            })
        }
    }

    /// Two passes: locate the root, then point every node on the path at it.
    pub(crate) fn find_root(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    pub(crate) fn union_roots(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find_root(x);
        let root_y = self.find_root(y);
        if root_x == root_y {
            return false;
        }
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        self.sets -= 1;
        true
    }
}

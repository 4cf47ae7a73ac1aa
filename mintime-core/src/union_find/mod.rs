//! Union-find (disjoint set union) used by the threshold search.
//!
//! Every probe of the search builds a fresh [`DisjointSet`], merges the
//! endpoints of the edges that survive the probe's predicate, and then counts
//! distinct roots. Merges use union-by-rank; lookups compress paths according
//! to the configured [`PathCompression`] mode.

use std::collections::HashSet;

use crate::{Result, error::ThresholdError};

/// How [`DisjointSet::find`] rewrites parent links after locating a root.
///
/// Both modes leave the partition untouched; they only differ in how many
/// shortcuts a lookup installs for later calls.
///
/// # Examples
/// ```
/// use mintime_core::PathCompression;
///
/// assert_eq!(PathCompression::default(), PathCompression::Full);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PathCompression {
    /// Re-point every node on the traversed path at the root.
    #[default]
    Full,
    /// Re-point only the queried node at the root.
    SingleLevel,
}

/// Disjoint-set forest over the nodes `0..len`.
///
/// # Examples
/// ```
/// use mintime_core::DisjointSet;
///
/// let mut set = DisjointSet::new(4);
/// assert!(set.union(0, 1)?);
/// assert!(set.union(2, 3)?);
/// assert!(!set.union(1, 0)?);
/// assert!(set.same_set(0, 1)?);
/// assert!(!set.same_set(1, 2)?);
/// assert_eq!(set.count_distinct_roots(), 2);
/// # Ok::<(), mintime_core::ThresholdError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    compression: PathCompression,
}

impl DisjointSet {
    /// Creates `n` singleton sets using [`PathCompression::Full`].
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self::with_compression(n, PathCompression::Full)
    }

    /// Creates `n` singleton sets using the given compression mode.
    #[must_use]
    pub fn with_compression(n: usize, compression: PathCompression) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            compression,
        }
    }

    /// Returns the number of nodes held by the structure.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the structure holds no nodes.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the compression mode applied by [`Self::find`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn compression(&self) -> PathCompression { self.compression }

    /// Returns the root representative of `node`'s set.
    ///
    /// # Errors
    /// Returns [`ThresholdError::NodeOutOfRange`] when `node >= self.len()`.
    pub fn find(&mut self, node: usize) -> Result<usize> {
        self.check(node)?;
        Ok(self.find_root(node))
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `true` when two distinct sets were merged and `false` when both
    /// nodes already shared a root.
    ///
    /// # Errors
    /// Returns [`ThresholdError::NodeOutOfRange`] when either node is outside
    /// the structure.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        self.check(left)?;
        self.check(right)?;
        Ok(self.union_roots(left, right))
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Errors
    /// Returns [`ThresholdError::NodeOutOfRange`] when either node is outside
    /// the structure.
    pub fn same_set(&mut self, left: usize, right: usize) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Counts the distinct roots across every node, i.e. the number of sets.
    pub fn count_distinct_roots(&mut self) -> usize {
        let mut roots = HashSet::with_capacity(self.len());
        for node in 0..self.len() {
            roots.insert(self.find_root(node));
        }
        roots.len()
    }

    fn check(&self, node: usize) -> Result<()> {
        if node < self.len() {
            Ok(())
        } else {
            Err(ThresholdError::NodeOutOfRange {
                node,
                node_count: self.len(),
            })
        }
    }

    /// Callers guarantee `node < self.len()`.
    pub(crate) fn find_root(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        match self.compression {
            PathCompression::Full => {
                while self.parent[node] != node {
                    let parent = self.parent[node];
                    self.parent[node] = root;
                    node = parent;
                }
            }
            PathCompression::SingleLevel => self.parent[node] = root,
        }

        root
    }

    /// Callers guarantee both nodes are in range.
    pub(crate) fn union_roots(&mut self, left: usize, right: usize) -> bool {
        let left = self.find_root(left);
        let right = self.find_root(right);
        if left == right {
            return false;
        }

        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            self.parent[left] = right;
        } else {
            self.parent[right] = left;
            if left_rank == right_rank {
                self.rank[left] = left_rank.saturating_add(1);
            }
        }
        true
    }
}

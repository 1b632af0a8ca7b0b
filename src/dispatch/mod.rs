//! Per-node child dispatch.
//!
//! Each node maps the first byte of an outgoing edge label to the child
//! carrying that label. Two interchangeable implementations sit behind
//! the [`ChildTable`] trait, chosen at construction time through the
//! tree's type parameter:
//!
//! - [`OrderedChildren`]: a sorted byte → child map. Logarithmic
//!   operations, ascending iteration order (stable visualizer output).
//! - [`FlatChildren`]: parallel key and child arrays in insertion
//!   order, scanned with the SIMD primitives in [`simd`]. Faster
//!   lookups on wide nodes, no ordered iteration.
//!
//! The construction algorithm is identical under both; the trees they
//! produce are isomorphic up to child insertion order within a node.
//!
//! # Submodules
//!
//! - [`simd`]: vectorized byte scan with scalar fallback

pub mod simd;

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::node::NodeId;

// ============================================================================
//  ChildTable
// ============================================================================

/// Capability set of a child dispatch table.
///
/// Lookup of a missing byte returns `None`; no operation fails.
pub trait ChildTable: Debug + Default {
    /// True when [`entries`](Self::entries) yields children in
    /// ascending key order.
    const ORDERED: bool;

    /// The child whose edge label begins with `key`, if any.
    fn lookup(&self, key: u8) -> Option<NodeId>;

    /// Add a child under a key not currently present.
    fn insert(&mut self, key: u8, child: NodeId);

    /// Repoint an existing key at a different child (edge split).
    fn replace(&mut self, key: u8, child: NodeId);

    /// Number of outgoing edges.
    fn degree(&self) -> usize;

    /// All `(key, child)` pairs in visit order: ascending key order
    /// when [`ORDERED`](Self::ORDERED), insertion order otherwise.
    fn entries(&self) -> Vec<(u8, NodeId)>;
}

// ============================================================================
//  OrderedChildren
// ============================================================================

/// Baseline dispatcher: a sorted byte → child map.
///
/// Lookup, insert, and replace are logarithmic in the out-degree.
#[derive(Debug, Default)]
pub struct OrderedChildren {
    map: BTreeMap<u8, NodeId>,
}

impl ChildTable for OrderedChildren {
    const ORDERED: bool = true;

    #[inline]
    fn lookup(&self, key: u8) -> Option<NodeId> {
        self.map.get(&key).copied()
    }

    #[inline]
    fn insert(&mut self, key: u8, child: NodeId) {
        let prev = self.map.insert(key, child);
        debug_assert!(prev.is_none(), "insert over an existing key {key:#04x}");
    }

    #[inline]
    fn replace(&mut self, key: u8, child: NodeId) {
        let prev = self.map.insert(key, child);
        debug_assert!(prev.is_some(), "replace of a missing key {key:#04x}");
    }

    #[inline]
    fn degree(&self) -> usize {
        self.map.len()
    }

    fn entries(&self) -> Vec<(u8, NodeId)> {
        self.map.iter().map(|(&k, &v)| (k, v)).collect()
    }
}

// ============================================================================
//  FlatChildren
// ============================================================================

/// Optimized dispatcher: parallel key and child arrays in insertion
/// order.
///
/// Lookup scans the key array through [`simd::find_byte`], which uses
/// 16- or 32-lane compares on wide nodes. Trades ordered iteration for
/// speed; the visualizer falls back to insertion order under this
/// variant.
#[derive(Debug, Default)]
pub struct FlatChildren {
    keys: Vec<u8>,
    children: Vec<NodeId>,
}

impl ChildTable for FlatChildren {
    const ORDERED: bool = false;

    #[inline]
    #[expect(
        clippy::indexing_slicing,
        reason = "find_byte only returns indices into `keys`, which stays parallel to `children`"
    )]
    fn lookup(&self, key: u8) -> Option<NodeId> {
        simd::find_byte(&self.keys, key).map(|i| self.children[i])
    }

    #[inline]
    fn insert(&mut self, key: u8, child: NodeId) {
        debug_assert!(
            !self.keys.contains(&key),
            "insert over an existing key {key:#04x}"
        );
        self.keys.push(key);
        self.children.push(child);
    }

    #[inline]
    #[expect(
        clippy::indexing_slicing,
        reason = "position() indices are in bounds of the parallel arrays"
    )]
    fn replace(&mut self, key: u8, child: NodeId) {
        debug_assert!(self.keys.contains(&key), "replace of a missing key {key:#04x}");
        // Splits are O(N) total across a construction; a scalar scan is
        // enough here.
        if let Some(i) = self.keys.iter().position(|&k| k == key) {
            self.children[i] = child;
        }
    }

    #[inline]
    fn degree(&self) -> usize {
        self.keys.len()
    }

    fn entries(&self) -> Vec<(u8, NodeId)> {
        self.keys.iter().copied().zip(self.children.iter().copied()).collect()
    }
}

// ============================================================================
//  Tests
// ============================================================================

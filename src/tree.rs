//! The suffix tree container and its read-side operations.
//!
//! [`SuffixTree`] owns the text and the node arena. Construction is a
//! single left-to-right pass through [`Builder`](crate::builder); once
//! it returns, the tree is immutable and any number of threads may
//! query it through shared references.

use std::fmt;
use std::io::{self, Write};

use crate::arena::NodeArena;
use crate::builder::Builder;
use crate::dispatch::{ChildTable, FlatChildren, OrderedChildren};
use crate::node::NodeId;
use crate::tracing_helpers::debug_log;

/// Sentinel byte appended when the input does not already end in it.
///
/// The sentinel occurs nowhere else in the text, so every suffix ends
/// at its own leaf.
pub const SENTINEL: u8 = b'$';

// ============================================================================
//  SuffixTree
// ============================================================================

/// Suffix tree over a byte string, built online with Ukkonen's
/// algorithm.
///
/// Construction is linear in the text length over a fixed alphabet;
/// membership queries are linear in the pattern length. The dispatcher
/// type `C` fixes the per-node child lookup strategy at construction
/// time; see [`OrderedSuffixTree`] and [`FlatSuffixTree`].
///
/// # Examples
///
/// ```
/// use sufftree::OrderedSuffixTree;
///
/// let tree = OrderedSuffixTree::build("banana");
/// assert!(tree.contains(b"ana"));
/// assert!(tree.contains(b"nana"));
/// assert!(!tree.contains(b"nab"));
/// ```
pub struct SuffixTree<C = OrderedChildren> {
    text: Vec<u8>,
    arena: NodeArena<C>,
}

/// Tree with the baseline sorted-map dispatcher; visualization output
/// is in ascending byte order.
pub type OrderedSuffixTree = SuffixTree<OrderedChildren>;

/// Tree with the flat keys/children dispatcher and SIMD lookup;
/// visualization output is in insertion order.
pub type FlatSuffixTree = SuffixTree<FlatChildren>;

impl<C: ChildTable> SuffixTree<C> {
    /// Build the tree for `text`.
    ///
    /// A [`SENTINEL`] byte is appended when the input does not already
    /// end in one, so the effective text is one byte longer than the
    /// input in the common case. The sentinel is a legal byte of the
    /// text: it is searchable like any other.
    #[must_use]
    pub fn build(text: impl Into<Vec<u8>>) -> Self {
        let mut text = text.into();
        if text.last() != Some(&SENTINEL) {
            text.push(SENTINEL);
        }

        let arena = Builder::<C>::new(&text).run();
        debug_log!(
            text_len = text.len(),
            nodes = arena.len(),
            "construction finished"
        );

        Self { text, arena }
    }

    /// Exact substring membership: does `pattern` occur in the text?
    ///
    /// Descends from the root matching the pattern byte by byte across
    /// edge labels. The empty pattern always matches. O(|pattern|).
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "edge labels are ranges of the owned text by construction"
    )]
    pub fn contains(&self, pattern: &[u8]) -> bool {
        let mut node = NodeId::ROOT;
        let mut matched = 0;

        while matched < pattern.len() {
            let Some(child) = self.arena.node(node).children.lookup(pattern[matched]) else {
                return false;
            };

            let start = self.arena.node(child).start;
            let len = self.arena.edge_length(child);
            let take = len.min(pattern.len() - matched);
            if self.text[start..start + take] != pattern[matched..matched + take] {
                return false;
            }

            if len <= pattern.len() - matched {
                // Consumed the whole edge; descend and keep matching.
                matched += len;
                node = child;
            } else {
                // Pattern ends inside this edge.
                return true;
            }
        }

        true
    }

    /// The text the tree was built over, sentinel included.
    #[must_use]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Total number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// The node store backing this tree; read-only structural access
    /// for inspection and tests.
    #[must_use]
    pub fn arena(&self) -> &NodeArena<C> {
        &self.arena
    }

    /// Write the tree to `out` in pre-order, one node per line, with
    /// two-space indentation per depth level.
    ///
    /// Each non-root node prints as `Edge [start,end]: <label>
    /// (Node <id>)` with the label bytes emitted raw (the sentinel
    /// included); the root line is `Root (Node <id>)`. Children are
    /// visited in ascending byte order when the dispatcher iterates
    /// ordered, in insertion order otherwise.
    ///
    /// # Errors
    ///
    /// Propagates errors from the sink.
    pub fn write_tree<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_node(out, NodeId::ROOT, 0)
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "edge labels are ranges of the owned text by construction"
    )]
    fn write_node<W: Write>(&self, out: &mut W, id: NodeId, depth: usize) -> io::Result<()> {
        let node = self.arena.node(id);
        match node.end.resolve(self.arena.leaf_end()) {
            None => writeln!(out, "Root (Node {})", id.index())?,

            Some(end) => {
                for _ in 0..depth {
                    out.write_all(b"  ")?;
                }
                write!(out, "Edge [{},{}]: ", node.start, end)?;
                out.write_all(&self.text[node.start..=end])?;
                writeln!(out, " (Node {})", id.index())?;
            }
        }

        for (_, child) in node.children.entries() {
            self.write_node(out, child, depth + 1)?;
        }
        Ok(())
    }

    /// [`write_tree`](Self::write_tree) to stdout.
    ///
    /// # Errors
    ///
    /// Propagates errors from stdout.
    pub fn print_tree(&self) -> io::Result<()> {
        let stdout = io::stdout();
        self.write_tree(&mut stdout.lock())
    }
}

impl<C: ChildTable> fmt::Debug for SuffixTree<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuffixTree")
            .field("text_len", &self.text.len())
            .field("nodes", &self.arena.len())
            .finish()
    }
}

// ============================================================================
//  Tests
// ============================================================================

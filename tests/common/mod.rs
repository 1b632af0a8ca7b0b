//! Shared test utilities: tracing bootstrap, the naive substring
//! oracle, and structural helpers over the public arena surface.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//!
//! #[test]
//! fn my_test() {
//!     common::init_tracing();
//!     // ...
//! }
//! ```
//!
//! `RUST_LOG` filters as usual, e.g. `RUST_LOG=sufftree=trace` together
//! with the crate's `tracing` feature.

#![allow(dead_code)]
#![allow(clippy::indexing_slicing)]

use std::fmt::Write as _;
use std::sync::Once;

use sufftree::{ChildTable, NodeId, SuffixTree};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a fmt subscriber once per test binary.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Oracle: substring membership by brute force.
pub fn naive_contains(text: &[u8], pattern: &[u8]) -> bool {
    pattern.is_empty() || text.windows(pattern.len()).any(|window| window == pattern)
}

/// Edge label of a non-root node, resolved against the global leaf end.
pub fn label<C: ChildTable>(tree: &SuffixTree<C>, id: NodeId) -> Vec<u8> {
    let node = tree.arena().node(id);
    match node.end.resolve(tree.arena().leaf_end()) {
        Some(end) => tree.text()[node.start..=end].to_vec(),
        None => Vec::new(),
    }
}

/// Every `(id, path-string from root)` pair, discovered pre-order.
pub fn path_strings<C: ChildTable>(tree: &SuffixTree<C>) -> Vec<(NodeId, Vec<u8>)> {
    let mut out = Vec::new();
    let mut stack = vec![(NodeId::ROOT, Vec::new())];

    while let Some((id, path)) = stack.pop() {
        for (_, child) in tree.arena().node(id).children.entries() {
            let mut child_path = path.clone();
            child_path.extend_from_slice(&label(tree, child));
            stack.push((child, child_path));
        }
        out.push((id, path));
    }
    out
}

/// Canonical form of the tree: subtrees rendered as hex labels and
/// recursively sorted, so two isomorphic trees compare equal no matter
/// how their dispatchers order children or how ids were assigned.
pub fn canonical<C: ChildTable>(tree: &SuffixTree<C>) -> String {
    fn visit<C: ChildTable>(tree: &SuffixTree<C>, id: NodeId, out: &mut String) {
        let mut subtrees: Vec<(Vec<u8>, String)> = tree
            .arena()
            .node(id)
            .children
            .entries()
            .into_iter()
            .map(|(_, child)| {
                let mut sub = String::new();
                visit(tree, child, &mut sub);
                (label(tree, child), sub)
            })
            .collect();
        subtrees.sort();

        out.push('(');
        for (bytes, sub) in subtrees {
            for byte in bytes {
                let _ = write!(out, "{byte:02x}");
            }
            out.push_str(&sub);
        }
        out.push(')');
    }

    let mut out = String::new();
    visit(tree, NodeId::ROOT, &mut out);
    out
}

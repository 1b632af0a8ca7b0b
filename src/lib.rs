//! # sufftree
//!
//! An online suffix tree over a byte string, built with Ukkonen's
//! linear-time algorithm.
//!
//! The tree answers exact substring membership ("does `pattern` occur
//! in `text`?") in O(|pattern|), after an O(|text|) construction over
//! a fixed alphabet. A sentinel byte (`$`) is appended when missing so
//! that every suffix ends at its own leaf.
//!
//! ## Design
//!
//! - **Arena-indexed nodes**: children, suffix links, and the active
//!   node are indices into one `Vec`-backed arena; no ownership cycles,
//!   teardown is dropping the arena.
//! - **Global leaf end**: all leaf edges resolve their endpoint against
//!   one shared integer, so extending every leaf per phase is a single
//!   store (Rule 1 in O(1)).
//! - **Pluggable child dispatch** behind [`ChildTable`]: a sorted-map
//!   baseline ([`OrderedChildren`]) and a flat keys/children pair with
//!   a SIMD byte scan ([`FlatChildren`]), chosen at construction time
//!   through the tree's type parameter.
//!
//! ## Example
//!
//! ```
//! use sufftree::{FlatSuffixTree, OrderedSuffixTree};
//!
//! let tree = OrderedSuffixTree::build("mississippi");
//! assert!(tree.contains(b"issi"));
//! assert!(tree.contains(b"sip"));
//! assert!(!tree.contains(b"mips"));
//!
//! // Same contract, flat dispatcher with vectorized lookup.
//! let tree = FlatSuffixTree::build("mississippi");
//! assert!(tree.contains(b"ssi"));
//! ```

mod builder;
mod tracing_helpers;

pub mod arena;
pub mod dispatch;
pub mod node;
pub mod tree;

pub use dispatch::{ChildTable, FlatChildren, OrderedChildren};
pub use node::{EdgeEnd, Node, NodeId};
pub use tree::{FlatSuffixTree, OrderedSuffixTree, SENTINEL, SuffixTree};

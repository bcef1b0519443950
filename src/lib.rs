//! # Pando -- a 2-3 search tree that only ever grows
//!
//! This crate exports a single collection type -- [`TwoThreeTree`] -- an ordered tree in which
//! every internal node holds one or two keys and two or three children, and every leaf sits at
//! the same depth. The interesting machinery is all in insertion: descending to the leaf a key
//! belongs in, resolving a leaf that would overflow to three keys by promoting the median, and
//! propagating that split up through ancestors until some ancestor absorbs it or the tree grows
//! a new root.
//!
//! ### Notable properties
//!
//! * Nodes live in an arena owned by the tree, addressed by [`NodeId`] indexes -- the upward
//!     parent links needed for split propagation never form ownership cycles
//! * A node is statically either a 2-node or a 3-node ([two variants][design]), so "two keys but
//!     only two children" and friends are unrepresentable
//! * Insertion is `O(height)`, and the equal-leaf-depth invariant keeps height logarithmic in
//!     the number of keys
//! * Misusing the insertion entry point (handing it a node that isn't the root, or a key that's
//!     already present) surfaces as an [`InsertError`], never as a silent no-op
//!
//! Keys are small scalar values: the tree takes them by value and stores copies, hence the
//! `K: Copy + Ord` bound on the mutating operations.
//!
//! Deletion is deliberately not implemented. The parent links exist only to serve upward split
//! propagation (and would serve borrow/merge on delete, if that were ever added).
//!
//! ### Feature flags
//!
//! * `serde` -- `Serialize`/`Deserialize` for [`TwoThreeTree`], encoded as its in-order key
//!     sequence.
//! * `fuzz` -- exposes the otherwise test-only `validate` walker, so the cargo-fuzz targets
//!     under `fuzz/` can check every structural invariant after each insertion.
//!
//! ### Naming
//!
//! This library is named after [Pando], a clonal colony of quaking aspen in Utah that is the
//! current heaviest known organism on Earth -- tens of thousands of trunks, one root system.
//!
//! [Pando]: https://en.wikipedia.org/wiki/Pando_(tree)
//! [design]: TwoThreeTree#representation

#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod tree;

#[cfg(feature = "serde")]
mod serde;

pub use tree::{InsertError, Iter, NodeId, TwoThreeTree};

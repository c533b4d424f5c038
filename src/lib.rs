//! An in-memory ordered key set backed by a B-tree with a configurable
//! minimum degree.
//!
//! Keys only, no payloads. Every mutation rebalances on the way down from
//! the root, so a single pass is always enough; no operation backtracks.

pub mod btree;
pub mod dot;
pub mod generate;

pub use btree::{BTree, Node};

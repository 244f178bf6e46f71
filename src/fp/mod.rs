//! FP-tree construction and frequent-pattern mining.

pub mod builder;
pub mod mining;
pub mod tree;


pub use mining::mine_frequent_patterns;
pub use tree::{FPNode, FPTree};

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Anything usable as a transaction item: opaque, comparable, hashable.
///
/// The `Ord` bound provides deterministic tie-breaking and canonical
/// (sorted) itemset keys; `Send + Sync` lets independent conditional
/// branches be mined in parallel.
pub trait Item: Clone + Eq + Hash + Ord + Debug + Send + Sync {}

impl<T: Clone + Eq + Hash + Ord + Debug + Send + Sync> Item for T {}

/// Per-item occurrence counts, local to one tree construction.
pub type FrequencyTable<I> = HashMap<I, u64>;

/// Itemset (canonically sorted) to support count. The terminal artifact of
/// mining and the input to rule generation.
pub type PatternMap<I> = HashMap<Vec<I>, u64>;

use std::collections::HashMap;

use super::{FrequencyTable, Item};

/// Arena index of the sentinel root node.
const ROOT: usize = 0;

/// One position in the prefix trie, addressed by index into the tree arena.
#[derive(Debug, Clone)]
pub struct FPNode<I> {
    /// `None` only for the sentinel root.
    pub item: Option<I>,
    /// Number of (possibly weighted) transactions passing through this node.
    pub count: u64,
    /// Arena index of the parent; `None` terminates upward traversal.
    pub parent: Option<usize>,
    /// Arena indices of children, at most one per distinct item value.
    pub children: HashMap<I, usize>,
}

/// A frequent-pattern tree over one (possibly conditional) transaction set.
///
/// Nodes live in an arena and refer to each other by index. The header
/// table maps each frequent item to its occurrence chain: the indices of
/// every node holding that item, in node-creation order.
#[derive(Debug, Clone)]
pub struct FPTree<I: Item> {
    pub nodes: Vec<FPNode<I>>,
    pub header: HashMap<I, Vec<usize>>,
    /// Local frequencies of the items this tree was built over, already
    /// filtered to the support threshold.
    pub frequencies: FrequencyTable<I>,
    /// `Some((item, count))` when this is a conditional sub-tree for `item`;
    /// `None` for the top-level tree.
    pub conditioned: Option<(I, u64)>,
}

impl<I: Item> FPTree<I> {
    /// Create an empty tree holding only the sentinel root. Every frequent
    /// item starts with an empty occurrence chain.
    pub fn new(frequencies: FrequencyTable<I>, conditioned: Option<(I, u64)>) -> Self {
        let header = frequencies
            .keys()
            .map(|item| (item.clone(), Vec::new()))
            .collect();

        Self {
            nodes: vec![FPNode {
                item: None,
                count: 0,
                parent: None,
                children: HashMap::new(),
            }],
            header,
            frequencies,
            conditioned,
        }
    }

    /// Insert one frequency-sorted transaction, adding `weight` to the count
    /// of every node along its path. Newly created nodes are appended to the
    /// tail of their item's occurrence chain.
    pub fn insert_transaction(&mut self, items: &[I], weight: u64) {
        let mut current = ROOT;

        for item in items {
            if let Some(&child) = self.nodes[current].children.get(item) {
                self.nodes[child].count += weight;
                current = child;
            } else {
                let child = self.nodes.len();
                self.nodes.push(FPNode {
                    item: Some(item.clone()),
                    count: weight,
                    parent: Some(current),
                    children: HashMap::new(),
                });
                self.nodes[current].children.insert(item.clone(), child);
                self.header.entry(item.clone()).or_default().push(child);
                current = child;
            }
        }
    }

    /// Collect the prefix path of every occurrence of `item`, paired with
    /// that occurrence's count. Paths run leaf-to-root (nearest ancestor
    /// first) and stop before the sentinel root; occurrences sitting
    /// directly under the root yield no path.
    pub fn prefix_paths(&self, item: &I) -> Vec<(Vec<I>, u64)> {
        self.header.get(item).map_or_else(Vec::new, |chain| {
            chain
                .iter()
                .filter_map(|&idx| {
                    let mut path = Vec::new();
                    let mut current = self.nodes[idx].parent;

                    while let Some(i) = current {
                        if let Some(value) = &self.nodes[i].item {
                            path.push(value.clone());
                        }
                        current = self.nodes[i].parent;
                    }

                    (!path.is_empty()).then_some((path, self.nodes[idx].count))
                })
                .collect()
        })
    }

    /// Whether every node has at most one child. A root with no children is
    /// trivially a single path.
    pub fn has_single_path(&self) -> bool {
        let mut current = ROOT;

        loop {
            let node = &self.nodes[current];

            if node.children.len() > 1 {
                return false;
            }

            match node.children.values().next() {
                Some(&child) => current = child,
                None => return true,
            }
        }
    }
}

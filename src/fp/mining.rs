use itertools::Itertools;
use rayon::prelude::*;
use tracing::{debug, trace};

use super::builder::{build_conditional_tree, build_tree};
use super::tree::FPTree;
use super::{Item, PatternMap};
use crate::error::Error;

/// Mine every itemset occurring in at least `support_threshold`
/// transactions, mapped to its support count.
///
/// Zero transactions is not an error and yields an empty map; a zero
/// threshold is rejected before any work.
pub fn mine_frequent_patterns<I: Item>(
    transactions: &[Vec<I>],
    support_threshold: u64,
) -> Result<PatternMap<I>, Error> {
    if support_threshold == 0 {
        return Err(Error::InvalidSupport);
    }

    debug!(
        transactions = transactions.len(),
        support_threshold, "mining frequent patterns"
    );

    let tree = build_tree(transactions, support_threshold);
    let patterns = mine_tree(&tree, support_threshold);

    debug!(patterns = patterns.len(), "mining finished");
    Ok(patterns)
}

/// Mining dispatch for one (possibly conditional) tree.
pub(crate) fn mine_tree<I: Item>(tree: &FPTree<I>, support_threshold: u64) -> PatternMap<I> {
    if tree.has_single_path() {
        // the single-path enumeration already folds the conditioning item
        // into every key, so no promotion happens on this branch
        enumerate_single_path(tree)
    } else {
        let patterns = mine_conditional(tree, support_threshold);
        match &tree.conditioned {
            Some((item, _)) => promote_root(patterns, item),
            None => patterns,
        }
    }
}

/// Enumerate patterns directly on a single-path tree: every non-empty
/// combination of the locally frequent items, unioned with the conditioning
/// item when there is one.
fn enumerate_single_path<I: Item>(tree: &FPTree<I>) -> PatternMap<I> {
    let mut patterns = PatternMap::new();

    let base = match &tree.conditioned {
        Some((item, count)) => {
            patterns.insert(vec![item.clone()], *count);
            Some(item.clone())
        }
        None => None,
    };

    let items: Vec<&I> = tree.frequencies.keys().sorted().collect();

    for k in 1..=items.len() {
        for combo in items.iter().cloned().combinations(k) {
            // support is bounded by the least frequent member of the
            // combination; the conditioning item's count stays out of it
            let Some(support) = combo.iter().map(|item| tree.frequencies[*item]).min() else {
                continue;
            };

            let mut itemset: Vec<I> = combo.into_iter().cloned().collect();
            if let Some(root) = &base {
                itemset.push(root.clone());
            }
            itemset.sort();
            patterns.insert(itemset, support);
        }
    }

    patterns
}

/// Conditional-pattern-base recursion over a multi-path tree.
///
/// Each item's occurrence chain yields its prefix paths, a conditional tree
/// built over them, and a recursive mine. Branches are independent, so they
/// fan out in parallel and merge afterwards.
fn mine_conditional<I: Item>(tree: &FPTree<I>, support_threshold: u64) -> PatternMap<I> {
    // least frequent first; ties broken by item order so runs are repeatable
    let mut order: Vec<(&I, u64)> = tree
        .frequencies
        .iter()
        .map(|(item, &count)| (item, count))
        .collect();
    order.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    let branches: Vec<PatternMap<I>> = order
        .par_iter()
        .map(|(item, count)| {
            trace!(?item, count = *count, "mining conditional branch");
            let paths = tree.prefix_paths(item);
            let subtree =
                build_conditional_tree(&paths, support_threshold, ((*item).clone(), *count));
            mine_tree(&subtree, support_threshold)
        })
        .collect();

    // supports accumulate when the same itemset is reached through more
    // than one conditioning item
    let mut merged = PatternMap::new();
    for branch in branches {
        for (itemset, support) in branch {
            *merged.entry(itemset).or_insert(0) += support;
        }
    }

    merged
}

/// Rewrite every itemset mined inside a conditional sub-tree to include the
/// item the sub-tree was conditioned on. The conditioning item never occurs
/// inside the sub-tree, so rewritten keys stay distinct.
fn promote_root<I: Item>(patterns: PatternMap<I>, root: &I) -> PatternMap<I> {
    patterns
        .into_iter()
        .map(|(mut itemset, support)| {
            itemset.push(root.clone());
            itemset.sort();
            (itemset, support)
        })
        .collect()
}

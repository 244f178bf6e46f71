use std::collections::HashMap;

use super::tree::FPTree;
use super::{FrequencyTable, Item};

/// Count per-item occurrences across all transactions and drop items whose
/// total falls below `support_threshold`. A repeated item within one
/// transaction counts once per repetition.
pub fn count_frequent_items<I: Item>(
    transactions: &[Vec<I>],
    support_threshold: u64,
) -> FrequencyTable<I> {
    let mut counts: FrequencyTable<I> = HashMap::new();

    for transaction in transactions {
        for item in transaction {
            *counts.entry(item.clone()).or_insert(0) += 1;
        }
    }

    counts.retain(|_, count| *count >= support_threshold);
    counts
}

/// Weighted variant over a conditional pattern base: each path stands for
/// `weight` identical conditional transactions.
fn count_frequent_weighted<I: Item>(
    paths: &[(Vec<I>, u64)],
    support_threshold: u64,
) -> FrequencyTable<I> {
    let mut counts: FrequencyTable<I> = HashMap::new();

    for (path, weight) in paths {
        for item in path {
            *counts.entry(item.clone()).or_insert(0) += weight;
        }
    }

    counts.retain(|_, count| *count >= support_threshold);
    counts
}

/// Keep the locally frequent items of a transaction, sorted by descending
/// local frequency. The sort is stable: equal-frequency items keep their
/// encounter order, which makes tree shapes reproducible.
fn filter_and_sort<I: Item>(transaction: &[I], frequencies: &FrequencyTable<I>) -> Vec<I> {
    let mut kept: Vec<I> = transaction
        .iter()
        .filter(|item| frequencies.contains_key(*item))
        .cloned()
        .collect();

    kept.sort_by(|a, b| frequencies[b].cmp(&frequencies[a]));
    kept
}

/// Build the top-level FP-tree over raw transactions.
pub fn build_tree<I: Item>(transactions: &[Vec<I>], support_threshold: u64) -> FPTree<I> {
    let frequencies = count_frequent_items(transactions, support_threshold);
    let mut tree = FPTree::new(frequencies, None);

    for transaction in transactions {
        let sorted = filter_and_sort(transaction, &tree.frequencies);
        if !sorted.is_empty() {
            tree.insert_transaction(&sorted, 1);
        }
    }

    tree
}

/// Build a conditional FP-tree over the prefix paths of `conditioned.0`,
/// each weighted by its occurrence count in the parent tree.
pub fn build_conditional_tree<I: Item>(
    paths: &[(Vec<I>, u64)],
    support_threshold: u64,
    conditioned: (I, u64),
) -> FPTree<I> {
    let frequencies = count_frequent_weighted(paths, support_threshold);
    let mut tree = FPTree::new(frequencies, Some(conditioned));

    for (path, weight) in paths {
        let sorted = filter_and_sort(path, &tree.frequencies);
        if !sorted.is_empty() {
            tree.insert_transaction(&sorted, *weight);
        }
    }

    tree
}

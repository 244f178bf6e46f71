//! Association rule generation over a mined pattern map.

use itertools::Itertools;
use tracing::debug;

use crate::error::Error;
use crate::fp::{Item, PatternMap};

/// One association rule: `antecedent => consequent`, with confidence
/// `support(antecedent ∪ consequent) / support(antecedent)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule<I> {
    pub antecedent: Vec<I>,
    pub consequent: Vec<I>,
    pub confidence: f64,
}

/// Derive every rule meeting `confidence_threshold` from a pattern map.
///
/// For each itemset of two or more items, every non-empty proper subset is
/// tried as the antecedent, with the set of remaining items as the
/// consequent; subsets that leave no remainder produce no rule. Rule order
/// is unspecified.
pub fn generate_association_rules<I: Item>(
    patterns: &PatternMap<I>,
    confidence_threshold: f64,
) -> Result<Vec<Rule<I>>, Error> {
    if !(confidence_threshold > 0.0 && confidence_threshold <= 1.0) {
        return Err(Error::InvalidConfidence(confidence_threshold));
    }

    let mut rules = Vec::new();

    for (itemset, &itemset_support) in patterns {
        for size in 1..itemset.len() {
            for antecedent in itemset.iter().cloned().combinations(size) {
                // an antecedent below the mining threshold never made it
                // into the map; that disqualifies the rule, nothing more
                let Some(&antecedent_support) = patterns.get(&antecedent) else {
                    continue;
                };

                let confidence = itemset_support as f64 / antecedent_support as f64;
                if confidence < confidence_threshold {
                    continue;
                }

                // set difference: itemset keys may repeat an item when the
                // source transactions did, but a consequent is a set, and
                // an empty difference leaves nothing to conclude
                let consequent: Vec<I> = itemset
                    .iter()
                    .filter(|item| !antecedent.contains(*item))
                    .cloned()
                    .dedup()
                    .collect();
                if consequent.is_empty() {
                    continue;
                }

                rules.push(Rule {
                    antecedent,
                    consequent,
                    confidence,
                });
            }
        }
    }

    debug!(
        rules = rules.len(),
        confidence_threshold, "generated association rules"
    );
    Ok(rules)
}

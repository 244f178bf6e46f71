//! FP-Growth frequent itemset mining and association rule generation.
//!
//! Given a collection of transactions (each an unordered bag of item
//! identifiers) and a minimum support count, [`mine_frequent_patterns`]
//! finds every itemset occurring at least that many times. The resulting
//! pattern map feeds [`generate_association_rules`], which emits
//! `antecedent => consequent` rules annotated with confidence.
//!
//! ```
//! use baskets::{mine_frequent_patterns, generate_association_rules};
//!
//! let transactions = vec![
//!     vec!["milk", "bread"],
//!     vec!["milk", "bread"],
//!     vec!["milk", "eggs"],
//!     vec!["milk"],
//! ];
//!
//! let patterns = mine_frequent_patterns(&transactions, 2).unwrap();
//! assert_eq!(patterns[&vec!["milk"]], 4);
//! assert_eq!(patterns[&vec!["bread", "milk"]], 2);
//!
//! let rules = generate_association_rules(&patterns, 0.5).unwrap();
//! assert!(!rules.is_empty());
//! ```

mod error;
pub mod fp;
pub mod rules;

pub use error::Error;
pub use fp::{mine_frequent_patterns, FrequencyTable, Item, PatternMap};
pub use rules::{generate_association_rules, Rule};

//! Condition-set statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::filtering::condition_sets::ConditionSets;
use crate::filtering::labels::PriceBracket;

/// Sizes of the category and price-bracket sets.
///
/// Serialized map keys are the client-facing labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub category_count: BTreeMap<Category, usize>,
    pub price_count: BTreeMap<PriceBracket, usize>,
    pub total_count: usize,
}

impl Statistics {
    pub fn from_sets(sets: &ConditionSets, total_count: usize) -> Self {
        Self {
            category_count: sets.category.iter().map(|(k, v)| (*k, v.len())).collect(),
            price_count: sets.price.iter().map(|(k, v)| (*k, v.len())).collect(),
            total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_builtin_statistics() {
        let catalog = Catalog::builtin();
        let stats = Statistics::from_sets(&ConditionSets::build(&catalog), catalog.len());

        assert_eq!(stats.total_count, 10);
        assert_eq!(stats.category_count[&Category::Appliances], 4);
        assert_eq!(stats.category_count[&Category::Apparel], 3);
        assert_eq!(stats.category_count[&Category::Food], 3);
        assert_eq!(stats.price_count[&PriceBracket::UnderHundred], 3);
        assert_eq!(stats.price_count[&PriceBracket::HundredToFiveHundred], 4);
        assert_eq!(stats.price_count[&PriceBracket::FiveHundredAndUp], 3);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let catalog = Catalog::builtin();
        let stats = Statistics::from_sets(&ConditionSets::build(&catalog), catalog.len());

        assert_eq!(stats.category_count.values().sum::<usize>(), stats.total_count);
        assert_eq!(stats.price_count.values().sum::<usize>(), stats.total_count);
    }

    #[test]
    fn test_serializes_with_label_keys() {
        let catalog = Catalog::builtin();
        let stats = Statistics::from_sets(&ConditionSets::build(&catalog), catalog.len());
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["category_count"]["家电"], 4);
        assert_eq!(json["price_count"]["500元以上"], 3);
        assert_eq!(json["total_count"], 10);
    }
}

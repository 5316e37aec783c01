//! Condition-set construction.
//!
//! # Responsibilities
//! - Scan the catalog once per dimension
//! - Map every label to the ids of the products carrying it
//! - Intersect selected sets
//!
//! # Design Decisions
//! - Every label has an entry, even when no product matches it
//! - Ordered sets so intersections are deterministic

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::{Catalog, Category, ProductId};
use crate::filtering::labels::{PriceBracket, Shipping};

/// A set of product ids sharing one label.
pub type IdSet = BTreeSet<ProductId>;

/// The three dimension mappings derived from a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionSets {
    pub category: BTreeMap<Category, IdSet>,
    pub price: BTreeMap<PriceBracket, IdSet>,
    pub shipping: BTreeMap<Shipping, IdSet>,
}

impl ConditionSets {
    /// Derive all condition sets from the catalog.
    pub fn build(catalog: &Catalog) -> Self {
        let mut category: BTreeMap<Category, IdSet> =
            Category::ALL.into_iter().map(|c| (c, IdSet::new())).collect();
        let mut price: BTreeMap<PriceBracket, IdSet> =
            PriceBracket::ALL.into_iter().map(|b| (b, IdSet::new())).collect();
        let mut shipping: BTreeMap<Shipping, IdSet> =
            Shipping::ALL.into_iter().map(|s| (s, IdSet::new())).collect();

        for product in catalog.iter() {
            category.entry(product.category).or_default().insert(product.id);
            price
                .entry(PriceBracket::of(product.price))
                .or_default()
                .insert(product.id);
            shipping
                .entry(Shipping::from(product.free_shipping))
                .or_default()
                .insert(product.id);
        }

        Self {
            category,
            price,
            shipping,
        }
    }

    pub fn category(&self, category: Category) -> &IdSet {
        // Every label is inserted by `build`.
        &self.category[&category]
    }

    pub fn price(&self, bracket: PriceBracket) -> &IdSet {
        &self.price[&bracket]
    }

    pub fn shipping(&self, shipping: Shipping) -> &IdSet {
        &self.shipping[&shipping]
    }
}

/// Intersect any number of sets. An empty input yields an empty set.
///
/// The result does not depend on the order of `sets`.
pub fn intersect_all(sets: &[&IdSet]) -> IdSet {
    let Some(smallest) = sets.iter().min_by_key(|s| s.len()) else {
        return IdSet::new();
    };

    smallest
        .iter()
        .filter(|id| sets.iter().all(|s| s.contains(id)))
        .copied()
        .collect()
}

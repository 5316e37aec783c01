//! Filter engine: validate, intersect, resolve.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Category, Product};
use crate::filtering::condition_sets::{intersect_all, ConditionSets};
use crate::filtering::error::FilterError;
use crate::filtering::labels::{parse_category, PriceBracket, Shipping};
use crate::filtering::statistics::Statistics;

/// Filter request as received from a client: one raw label per dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterRequest {
    pub category: String,
    pub price: String,
    pub shipping: String,
}

impl FilterRequest {
    pub fn new(
        category: impl Into<String>,
        price: impl Into<String>,
        shipping: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            price: price.into(),
            shipping: shipping.into(),
        }
    }

    /// Check every label against its dimension.
    ///
    /// Labels are checked in the order category, price, shipping; the first
    /// unknown one is reported.
    pub fn validate(&self) -> Result<FilterQuery, FilterError> {
        Ok(FilterQuery {
            category: parse_category(&self.category)?,
            price: PriceBracket::parse(&self.price)?,
            shipping: Shipping::parse(&self.shipping)?,
        })
    }
}

/// A validated filter request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FilterQuery {
    pub category: Category,
    pub price: PriceBracket,
    pub shipping: Shipping,
}

impl FilterQuery {
    /// Human-readable description of the intersection performed.
    pub fn expression(&self) -> String {
        format!("{} ∩ {} ∩ shipping:{}", self.category, self.price, self.shipping)
    }

    /// Whether a product satisfies all three predicates.
    pub fn matches(&self, product: &Product) -> bool {
        product.category == self.category
            && self.price.contains(product.price)
            && self.shipping.matches(product.free_shipping)
    }
}

/// Result of one filter call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOutcome {
    pub expression: String,
    pub products: Vec<Product>,
    pub matched_count: usize,
    pub total_count: usize,
}

/// Filters an immutable catalog by set intersection.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    catalog: Arc<Catalog>,
}

impl FilterEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Condition sets for the current catalog, rebuilt on every call.
    pub fn condition_sets(&self) -> ConditionSets {
        ConditionSets::build(&self.catalog)
    }

    /// Intersect the three selected condition sets and resolve the matches.
    pub fn filter(&self, query: &FilterQuery) -> FilterOutcome {
        let sets = self.condition_sets();
        let matched = intersect_all(&[
            sets.category(query.category),
            sets.price(query.price),
            sets.shipping(query.shipping),
        ]);

        let products: Vec<Product> = self
            .catalog
            .iter()
            .filter(|p| matched.contains(&p.id))
            .cloned()
            .collect();

        FilterOutcome {
            expression: query.expression(),
            matched_count: products.len(),
            products,
            total_count: self.catalog.len(),
        }
    }

    /// Validate raw labels, then filter.
    pub fn filter_request(&self, request: &FilterRequest) -> Result<FilterOutcome, FilterError> {
        let query = request.validate()?;
        Ok(self.filter(&query))
    }

    /// Set sizes per category and price bracket.
    pub fn statistics(&self) -> Statistics {
        Statistics::from_sets(&self.condition_sets(), self.catalog.len())
    }
}

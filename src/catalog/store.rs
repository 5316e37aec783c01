//! The immutable catalog.

use std::collections::HashSet;

use thiserror::Error;

use crate::catalog::product::{Category, Product, ProductId};

/// Errors raised while assembling a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Product ids must be positive.
    #[error("product {name:?} has id 0; ids must be positive")]
    ZeroId { name: String },

    /// The same id appears more than once.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
}

/// Ordered, read-only sequence of products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking that ids are positive and unique.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id == 0 {
                return Err(CatalogError::ZeroId {
                    name: product.name.clone(),
                });
            }
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }
        Ok(Self { products })
    }

    /// The fixed ten-product demo catalog.
    pub fn builtin() -> Self {
        use Category::{Apparel, Appliances, Food};

        let products = vec![
            Product::new(1, "冰箱", Appliances, 2999, true),
            Product::new(2, "耳机", Appliances, 199, true),
            Product::new(3, "T恤", Apparel, 99, false),
            Product::new(4, "饼干", Food, 29, true),
            Product::new(5, "连衣裙", Apparel, 399, false),
            Product::new(6, "坚果礼盒", Food, 159, true),
            Product::new(7, "洗衣机", Appliances, 1999, true),
            Product::new(8, "牛仔裤", Apparel, 259, false),
            Product::new(9, "面包", Food, 15, true),
            Product::new(10, "微波炉", Appliances, 699, true),
        ];
        Self { products }
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

//! Product records and the category enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Product identifier. Always positive within a valid catalog.
pub type ProductId = u32;

/// Closed set of product categories.
///
/// The wire form is the Chinese label used by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 家电
    #[serde(rename = "家电")]
    Appliances,
    /// 服装
    #[serde(rename = "服装")]
    Apparel,
    /// 食品
    #[serde(rename = "食品")]
    Food,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Appliances, Category::Apparel, Category::Food];

    /// Client-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Appliances => "家电",
            Category::Apparel => "服装",
            Category::Food => "食品",
        }
    }

    /// Look up a category by its client-facing label.
    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    /// Price in whole yuan.
    pub price: u32,
    pub free_shipping: bool,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: Category,
        price: u32,
        free_shipping: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            price,
            free_shipping,
        }
    }
}

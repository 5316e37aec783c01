//! Label enumerations for the price and shipping dimensions.
//!
//! Categories live with the product record; see [`crate::catalog::Category`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::filtering::error::FilterError;

/// One of the three filter axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Category,
    Price,
    Shipping,
}

impl Dimension {
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Category => "category",
            Dimension::Price => "price",
            Dimension::Shipping => "shipping",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open price brackets in whole yuan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceBracket {
    /// [0, 100)
    #[serde(rename = "0-100元")]
    UnderHundred,
    /// [100, 500)
    #[serde(rename = "100-500元")]
    HundredToFiveHundred,
    /// [500, ∞)
    #[serde(rename = "500元以上")]
    FiveHundredAndUp,
}

impl PriceBracket {
    pub const ALL: [PriceBracket; 3] = [
        PriceBracket::UnderHundred,
        PriceBracket::HundredToFiveHundred,
        PriceBracket::FiveHundredAndUp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PriceBracket::UnderHundred => "0-100元",
            PriceBracket::HundredToFiveHundred => "100-500元",
            PriceBracket::FiveHundredAndUp => "500元以上",
        }
    }

    /// Inclusive lower bound and exclusive upper bound (`None` = unbounded).
    pub fn bounds(self) -> (u32, Option<u32>) {
        match self {
            PriceBracket::UnderHundred => (0, Some(100)),
            PriceBracket::HundredToFiveHundred => (100, Some(500)),
            PriceBracket::FiveHundredAndUp => (500, None),
        }
    }

    pub fn contains(self, price: u32) -> bool {
        let (low, high) = self.bounds();
        price >= low && high.map_or(true, |high| price < high)
    }

    /// The bracket a price falls into. Brackets cover every price exactly once.
    pub fn of(price: u32) -> Self {
        match price {
            0..=99 => PriceBracket::UnderHundred,
            100..=499 => PriceBracket::HundredToFiveHundred,
            _ => PriceBracket::FiveHundredAndUp,
        }
    }

    pub fn parse(label: &str) -> Result<Self, FilterError> {
        PriceBracket::ALL
            .into_iter()
            .find(|b| b.label() == label)
            .ok_or_else(|| unknown(Dimension::Price, label))
    }
}

impl fmt::Display for PriceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Free-shipping flag as a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shipping {
    #[serde(rename = "是")]
    Free,
    #[serde(rename = "否")]
    Paid,
}

impl Shipping {
    pub const ALL: [Shipping; 2] = [Shipping::Free, Shipping::Paid];

    pub fn label(self) -> &'static str {
        match self {
            Shipping::Free => "是",
            Shipping::Paid => "否",
        }
    }

    pub fn matches(self, free_shipping: bool) -> bool {
        self == Shipping::from(free_shipping)
    }

    pub fn parse(label: &str) -> Result<Self, FilterError> {
        Shipping::ALL
            .into_iter()
            .find(|s| s.label() == label)
            .ok_or_else(|| unknown(Dimension::Shipping, label))
    }
}

impl From<bool> for Shipping {
    fn from(free_shipping: bool) -> Self {
        if free_shipping {
            Shipping::Free
        } else {
            Shipping::Paid
        }
    }
}

impl fmt::Display for Shipping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a category label, reporting it against the category dimension.
pub fn parse_category(label: &str) -> Result<Category, FilterError> {
    Category::from_label(label).ok_or_else(|| unknown(Dimension::Category, label))
}

fn unknown(dimension: Dimension, label: &str) -> FilterError {
    FilterError::UnknownLabel {
        dimension,
        label: label.to_string(),
    }
}

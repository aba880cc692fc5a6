//! Molding products on offer. Each tier fixes a bar length and a price per bar.

use serde::{Deserialize, Serialize};

pub const DEFAULT_STANDARD_BAR_CM: f64 = 290.0;
pub const DEFAULT_STANDARD_PRICE: f64 = 69.0;
pub const DEFAULT_PREMIUM_BAR_CM: f64 = 250.0;
pub const DEFAULT_PREMIUM_PRICE: f64 = 89.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductTier {
    #[default]
    Standard,
    Premium,
}

impl ProductTier {
    pub fn label(&self) -> &'static str {
        match self {
            ProductTier::Standard => "standard",
            ProductTier::Premium => "premium",
        }
    }
}

/// A resolved product: the two numbers the engine needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub tier: ProductTier,
    pub bar_length: f64,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductCatalog {
    pub standard: Product,
    pub premium: Product,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        ProductCatalog {
            standard: Product {
                tier: ProductTier::Standard,
                bar_length: DEFAULT_STANDARD_BAR_CM,
                unit_price: DEFAULT_STANDARD_PRICE,
            },
            premium: Product {
                tier: ProductTier::Premium,
                bar_length: DEFAULT_PREMIUM_BAR_CM,
                unit_price: DEFAULT_PREMIUM_PRICE,
            },
        }
    }
}

impl ProductCatalog {
    pub fn get(&self, tier: ProductTier) -> Product {
        match tier {
            ProductTier::Standard => self.standard,
            ProductTier::Premium => self.premium,
        }
    }

    pub fn products(&self) -> Vec<Product> {
        vec![self.standard, self.premium]
    }
}

/// Product choice as sent by a client. Explicit numbers override the tier's.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ProductSelection {
    #[serde(default)]
    pub product: Option<ProductTier>,
    #[serde(default)]
    pub bar_length: Option<f64>,
    #[serde(default)]
    pub unit_price: Option<f64>,
}

impl ProductSelection {
    pub fn resolve(&self, catalog: &ProductCatalog) -> Product {
        let base = catalog.get(self.product.unwrap_or_default());
        Product {
            tier: base.tier,
            bar_length: self.bar_length.unwrap_or(base.bar_length),
            unit_price: self.unit_price.unwrap_or(base.unit_price),
        }
    }
}

//! Catalog data model: products and categories

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single catalog item.
///
/// Products are loaded once from an [`ItemSource`](crate::store::source::ItemSource)
/// and treated as read-only by the engine and the store. Field names serialize
/// in camelCase to match the catalog wire shape.
///
/// Note: `in_stock == (stock_quantity > 0)` is expected but not enforced
/// anywhere in the engine; it is the item source's responsibility. Use
/// [`Product::stock_consistent`] to check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Current price (>= 0)
    pub price: f64,
    /// Pre-discount price, if the product is on sale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Id of the [`Category`] this product belongs to
    pub category_id: String,
    /// Brand name (matched case-sensitively by the brand filter)
    pub brand: String,
    /// Average rating in [0, 5]
    pub rating: f64,
    /// Number of reviews (popularity sort key)
    pub review_count: u32,
    /// Stock flag used by the in-stock-only filter
    pub in_stock: bool,
    /// Units on hand
    pub stock_quantity: u32,
    /// Image reference
    pub image_url: String,
    /// Tag strings (OR semantics in the tag filter)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Feature strings (informational, not filtered on)
    #[serde(default)]
    pub features: Vec<String>,
    /// Creation timestamp (chronological sort key)
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Check the documented caller invariant `in_stock == (stock_quantity > 0)`.
    pub fn stock_consistent(&self) -> bool {
        self.in_stock == (self.stock_quantity > 0)
    }

    /// Whether this product carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier, referenced by [`Product::category_id`]
    pub id: String,
    /// Display name
    pub name: String,
    /// Unique URL-safe slug
    pub slug: String,
}

/// The unit an item source yields: an ordered product list plus its
/// matching category list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    /// Categories referenced by the products
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Products in their canonical load order
    #[serde(default)]
    pub products: Vec<Product>,
}

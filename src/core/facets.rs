//! Catalog-wide facet derivation
//!
//! Facets summarize the *unfiltered* catalog so filter UIs can always show
//! every available option with its total count, regardless of what is
//! currently filtered out.

use crate::core::product::{Category, Product};
use indexmap::IndexMap;
use serde::Serialize;

/// One selectable facet value with its catalog-wide item count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    /// The raw value used in criteria (brand name, tag string)
    pub value: String,
    /// Display label; identical to the value for brands and tags
    pub label: String,
    /// Number of items in the full catalog carrying this value
    pub count: usize,
}

/// Global price bounds across the full catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

/// Derived summaries of the unfiltered catalog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Facets {
    /// All categories, in load order
    pub categories: Vec<Category>,
    /// Distinct brands with per-brand item counts, in first-seen order
    pub brands: Vec<FacetOption>,
    /// Distinct tags with per-tag item counts, in first-seen order
    pub tags: Vec<FacetOption>,
    /// Global price range; `None` for an empty catalog
    pub price: Option<PriceBounds>,
}

impl Facets {
    /// Derive facets from the full catalog.
    pub fn derive(products: &[Product], categories: &[Category]) -> Self {
        let mut brands: IndexMap<&str, usize> = IndexMap::new();
        let mut tags: IndexMap<&str, usize> = IndexMap::new();
        let mut price: Option<PriceBounds> = None;

        for product in products {
            *brands.entry(product.brand.as_str()).or_insert(0) += 1;
            for tag in &product.tags {
                *tags.entry(tag.as_str()).or_insert(0) += 1;
            }
            price = Some(match price {
                None => PriceBounds {
                    min: product.price,
                    max: product.price,
                },
                Some(bounds) => PriceBounds {
                    min: bounds.min.min(product.price),
                    max: bounds.max.max(product.price),
                },
            });
        }

        Self {
            categories: categories.to_vec(),
            brands: into_options(brands),
            tags: into_options(tags),
            price,
        }
    }
}

fn into_options(counts: IndexMap<&str, usize>) -> Vec<FacetOption> {
    counts
        .into_iter()
        .map(|(value, count)| FacetOption {
            value: value.to_string(),
            label: value.to_string(),
            count,
        })
        .collect()
}

//! Pure filter/sort engine over the catalog
//!
//! [`visible`] is the whole engine contract: given the unfiltered item list
//! and the current criteria, produce the ordered visible subset. It is
//! deterministic, never mutates its inputs, and never fails — contradictory
//! criteria (min > max, tags nobody has) resolve to an empty result.

use crate::core::criteria::{FilterCriteria, SortDirection, SortKey};
use crate::core::product::Product;
use std::cmp::Ordering;

/// Compute the filtered and sorted visible list.
///
/// Filter dimensions compose with AND semantics; each stage is skipped when
/// its criteria field is absent or empty. Sorting is stable and applied
/// after filtering; without a sort key the filter order (input order) is
/// preserved.
pub fn visible(items: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let mut result: Vec<Product> = items
        .iter()
        .filter(|product| matches(product, criteria))
        .cloned()
        .collect();

    if let Some(key) = criteria.sort_by {
        // Vec::sort_by is stable, so equal keys keep their filter order
        result.sort_by(|a, b| {
            let ordering = compare(a, b, key);
            match criteria.sort_order {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    result
}

/// Whether a single product passes every present filter dimension.
fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    if let Some(query) = criteria.query() {
        let query = query.to_lowercase();
        let hit = product.name.to_lowercase().contains(&query)
            || product.description.to_lowercase().contains(&query)
            || product.brand.to_lowercase().contains(&query);
        if !hit {
            return false;
        }
    }

    if !criteria.categories.is_empty() && !criteria.categories.contains(&product.category_id) {
        return false;
    }

    if !criteria.brands.is_empty() && !criteria.brands.contains(&product.brand) {
        return false;
    }

    if let Some(range) = criteria.price_range {
        // min > max simply matches nothing; not an error
        if product.price < range.min || product.price > range.max {
            return false;
        }
    }

    if let Some(min_rating) = criteria.min_rating {
        if min_rating > 0.0 && product.rating < min_rating {
            return false;
        }
    }

    if criteria.in_stock_only && !product.in_stock {
        return false;
    }

    if !criteria.tags.is_empty() && !criteria.tags.iter().any(|tag| product.has_tag(tag)) {
        return false;
    }

    true
}

/// Ascending comparison for a single sort key.
fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::Price => compare_f64(a.price, b.price),
        SortKey::Rating => compare_f64(a.rating, b.rating),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::Popularity => a.review_count.cmp(&b.review_count),
    }
}

/// Case-insensitive lexicographic name ordering, raw bytes as tiebreak.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Total ordering over well-formed (non-NaN) numeric fields.
fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

//! Filter criteria, sort options, and single-dimension patches

use crate::core::error::StoreError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inclusive price bounds for the price-range filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

/// The single sort key applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Lexicographic, case-insensitive name ordering
    Name,
    /// Numeric price ordering
    Price,
    /// Numeric rating ordering
    Rating,
    /// Chronological creation-time ordering
    CreatedAt,
    /// Review-count ordering
    Popularity,
}

/// Sort direction; ascending unless explicitly descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Filter and sort criteria for the catalog.
///
/// Every field is independently optional; an absent or empty field means
/// "no constraint from this dimension". Present dimensions combine with AND
/// semantics; multi-valued dimensions (categories, brands, tags) use OR
/// semantics within their set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Free-text query matched against name, description, and brand
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    /// Category ids; any match qualifies
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Brand names, matched exactly as stored; any match qualifies
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub brands: Vec<String>,
    /// Inclusive price bounds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,
    /// Minimum rating threshold; 0 or absent means no rating filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    /// Only items whose stock flag is set
    pub in_stock_only: bool,
    /// Tag strings; any overlapping tag qualifies
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Sort key; absent preserves filter order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
    /// Sort direction, ascending by default
    pub sort_order: SortDirection,
}

impl FilterCriteria {
    /// The trimmed search query, or `None` when absent or whitespace-only.
    pub fn query(&self) -> Option<&str> {
        self.search_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    /// Whether no dimension constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.query().is_none()
            && self.categories.is_empty()
            && self.brands.is_empty()
            && self.price_range.is_none()
            && self.min_rating.is_none_or(|r| r <= 0.0)
            && !self.in_stock_only
            && self.tags.is_empty()
    }

    /// Merge a single-dimension patch into these criteria.
    pub fn apply(&mut self, patch: CriteriaPatch) {
        match patch {
            CriteriaPatch::SearchQuery(q) => self.search_query = q,
            CriteriaPatch::Categories(ids) => self.categories = ids,
            CriteriaPatch::ToggleCategory(id) => toggle(&mut self.categories, id),
            CriteriaPatch::Brands(brands) => self.brands = brands,
            CriteriaPatch::ToggleBrand(brand) => toggle(&mut self.brands, brand),
            CriteriaPatch::PriceRange(range) => self.price_range = range,
            CriteriaPatch::MinRating(rating) => self.min_rating = rating,
            CriteriaPatch::InStockOnly(flag) => self.in_stock_only = flag,
            CriteriaPatch::Tags(tags) => self.tags = tags,
            CriteriaPatch::ToggleTag(tag) => toggle(&mut self.tags, tag),
            CriteriaPatch::SortBy(key) => self.sort_by = key,
            CriteriaPatch::SortOrder(direction) => self.sort_order = direction,
        }
    }
}

/// Insert the value if absent, remove it if present.
fn toggle(set: &mut Vec<String>, value: String) {
    if let Some(pos) = set.iter().position(|v| v == &value) {
        set.remove(pos);
    } else {
        set.push(value);
    }
}

/// A partial criteria update touching exactly one filter dimension.
///
/// Toggle variants flip one member of a set dimension in or out; the other
/// variants replace the dimension wholesale. Patches never touch dimensions
/// they do not name.
#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaPatch {
    SearchQuery(Option<String>),
    Categories(Vec<String>),
    ToggleCategory(String),
    Brands(Vec<String>),
    ToggleBrand(String),
    PriceRange(Option<PriceRange>),
    MinRating(Option<f64>),
    InStockOnly(bool),
    Tags(Vec<String>),
    ToggleTag(String),
    SortBy(Option<SortKey>),
    SortOrder(SortDirection),
}

impl CriteriaPatch {
    /// Parse a patch from a single-key JSON object, e.g.
    /// `{"categories": ["1", "3"]}` or `{"minRating": 4}`.
    ///
    /// An unknown key is rejected with [`StoreError::UnknownDimension`]; a
    /// value of the wrong shape with [`StoreError::InvalidPatch`]. Rejection
    /// leaves nothing applied, so callers can safely forward untrusted input.
    pub fn from_json(patch: &Value) -> Result<Self, StoreError> {
        let object = patch.as_object().ok_or_else(|| StoreError::InvalidPatch {
            dimension: "<root>".to_string(),
            reason: "patch must be a JSON object".to_string(),
        })?;
        if object.len() != 1 {
            return Err(StoreError::InvalidPatch {
                dimension: "<root>".to_string(),
                reason: format!("patch must name exactly one dimension, got {}", object.len()),
            });
        }
        // len() == 1 checked above
        let (key, value) = object
            .iter()
            .next()
            .ok_or_else(|| StoreError::InvalidPatch {
                dimension: "<root>".to_string(),
                reason: "empty patch".to_string(),
            })?;

        let invalid = |reason: String| StoreError::InvalidPatch {
            dimension: key.clone(),
            reason,
        };

        match key.as_str() {
            "searchQuery" => Ok(Self::SearchQuery(
                serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?,
            )),
            "categories" => Ok(Self::Categories(
                serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?,
            )),
            "toggleCategory" => Ok(Self::ToggleCategory(
                serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?,
            )),
            "brands" => Ok(Self::Brands(
                serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?,
            )),
            "toggleBrand" => Ok(Self::ToggleBrand(
                serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?,
            )),
            "priceRange" => Ok(Self::PriceRange(
                serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?,
            )),
            "minRating" => Ok(Self::MinRating(
                serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?,
            )),
            "inStockOnly" => Ok(Self::InStockOnly(
                serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?,
            )),
            "tags" => Ok(Self::Tags(
                serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?,
            )),
            "toggleTag" => Ok(Self::ToggleTag(
                serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?,
            )),
            "sortBy" => Ok(Self::SortBy(
                serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?,
            )),
            "sortOrder" => Ok(Self::SortOrder(
                serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?,
            )),
            other => Err(StoreError::UnknownDimension {
                dimension: other.to_string(),
            }),
        }
    }
}

//! Core module: data model, filter/sort engine, facets, and validation

pub mod criteria;
pub mod engine;
pub mod error;
pub mod facets;
pub mod product;
pub mod validation;

pub use criteria::{CriteriaPatch, FilterCriteria, PriceRange, SortDirection, SortKey};
pub use error::{FieldError, StoreError, ValidationError};
pub use facets::{FacetOption, Facets, PriceBounds};
pub use product::{CatalogSnapshot, Category, Product};

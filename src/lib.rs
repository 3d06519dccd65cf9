//! # Vitrine
//!
//! The in-memory core of a demonstration storefront: a pure product
//! filter/sort engine, a reactive catalog store with derived facets, a
//! user-profile editing core, and a star-rating input model.
//!
//! ## Architecture
//!
//! ```text
//! UI ──criteria patches──▶ CatalogStore ──(items, criteria)──▶ engine::visible
//!                              │                                      │
//!                              ◀──────── ordered visible list ────────┘
//!                              ▼
//!                    subscriber callbacks (synchronous)
//! ```
//!
//! The engine is a pure function: given the unfiltered item list and the
//! current [`FilterCriteria`](core::FilterCriteria), it produces the
//! ordered visible subset. The store owns the canonical list and the
//! criteria, recomputes on every criteria change, and pushes the result to
//! subscribers synchronously. Facets are always derived from the
//! *unfiltered* catalog so filter controls can show every option.
//!
//! Everything is single-threaded and synchronous by design: no background
//! computation, no debouncing (a UI-adapter concern), no hidden
//! scheduling. The stores use `Arc<RwLock>` only for interior mutability.
//!
//! ## Quick start
//!
//! ```rust
//! use vitrine::prelude::*;
//!
//! let store = CatalogStore::new();
//! store.load(&vitrine::store::sample::sample_catalog())?;
//!
//! let id = store.subscribe(|products| {
//!     println!("{} products visible", products.len());
//! })?;
//!
//! store.patch_criteria(CriteriaPatch::ToggleCategory("1".into()))?;
//! store.patch_criteria(CriteriaPatch::SortBy(Some(SortKey::Price)))?;
//!
//! let facets = store.facets()?;
//! assert_eq!(facets.categories.len(), 6);
//!
//! store.unsubscribe(id)?;
//! # Ok::<(), vitrine::core::StoreError>(())
//! ```

pub mod core;
pub mod profile;
pub mod rating;
pub mod store;

/// Re-exports of commonly used types
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        criteria::{CriteriaPatch, FilterCriteria, PriceRange, SortDirection, SortKey},
        engine::visible,
        error::{FieldError, StoreError, ValidationError},
        facets::{FacetOption, Facets, PriceBounds},
        product::{CatalogSnapshot, Category, Product},
        validation::{validate, FieldRule},
    };

    // === Stores ===
    pub use crate::store::{
        source::{ItemSource, YamlSource},
        CatalogStore, SubscriptionId,
    };

    // === Profile ===
    pub use crate::profile::{
        Preferences, PreferencesUpdate, ProfileStore, SocialMedia, User, UserUpdateRequest,
    };

    // === Rating widget ===
    pub use crate::rating::StarRating;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}

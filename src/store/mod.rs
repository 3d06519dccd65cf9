//! Reactive catalog store
//!
//! The store owns the canonical unfiltered product list and the current
//! filter criteria, recomputes the visible list through the engine on every
//! criteria change, and pushes the result to subscribers. Publishing is an
//! explicit callback list invoked synchronously after each recomputation;
//! there is no hidden scheduling. Debouncing free-text input is a UI-layer
//! concern and never happens here.

pub mod sample;
pub mod source;

use crate::core::criteria::{CriteriaPatch, FilterCriteria};
use crate::core::engine;
use crate::core::error::StoreError;
use crate::core::facets::Facets;
use crate::core::product::{Category, Product};
use serde_json::Value;
use source::ItemSource;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Handle returned by [`CatalogStore::subscribe`]; pass it to
/// [`CatalogStore::unsubscribe`] to cancel delivery.
pub type SubscriptionId = Uuid;

type Subscriber = Arc<dyn Fn(&[Product]) + Send + Sync>;

struct Inner {
    products: Vec<Product>,
    categories: Vec<Category>,
    criteria: FilterCriteria,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

/// In-memory catalog store with synchronous publish/subscribe.
///
/// Cheap to clone (Arc internally). All mutation is synchronous: by the
/// time `set_criteria`/`patch_criteria` returns, every subscriber has seen
/// the new visible list.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<RwLock<Inner>>,
}

impl CatalogStore {
    /// Create a store with an empty catalog and unconstrained criteria.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                products: Vec::new(),
                categories: Vec::new(),
                criteria: FilterCriteria::default(),
                subscribers: Vec::new(),
            })),
        }
    }

    /// Load the catalog from an item source, replacing any previous data.
    ///
    /// On failure the store is left in the empty-catalog state (empty
    /// visible list, no facets) and the error is returned; the store never
    /// retries on its own. Both outcomes publish to subscribers.
    pub fn load(&self, source: &dyn ItemSource) -> Result<(), StoreError> {
        let fetched = source.fetch();
        let result = {
            let mut inner = self.write()?;
            match fetched {
                Ok(snapshot) => {
                    tracing::debug!(
                        products = snapshot.products.len(),
                        categories = snapshot.categories.len(),
                        "catalog loaded"
                    );
                    inner.products = snapshot.products;
                    inner.categories = snapshot.categories;
                    Ok(())
                }
                Err(e) => {
                    tracing::debug!(error = %e, "catalog load failed, store left empty");
                    inner.products.clear();
                    inner.categories.clear();
                    Err(StoreError::Load {
                        message: e.to_string(),
                    })
                }
            }
        };
        self.publish()?;
        result
    }

    /// Replace the criteria wholesale and republish.
    pub fn set_criteria(&self, criteria: FilterCriteria) -> Result<(), StoreError> {
        self.write()?.criteria = criteria;
        self.publish()
    }

    /// Merge a single-dimension patch into the current criteria and
    /// republish.
    pub fn patch_criteria(&self, patch: CriteriaPatch) -> Result<(), StoreError> {
        self.write()?.criteria.apply(patch);
        self.publish()
    }

    /// Parse and apply a JSON patch such as `{"toggleCategory": "1"}`.
    ///
    /// A malformed or unknown-dimension patch is rejected and the criteria
    /// stay unchanged; nothing is published in that case.
    pub fn patch_criteria_json(&self, patch: &Value) -> Result<(), StoreError> {
        let patch = CriteriaPatch::from_json(patch)?;
        self.patch_criteria(patch)
    }

    /// Snapshot of the current criteria.
    pub fn criteria(&self) -> Result<FilterCriteria, StoreError> {
        Ok(self.read()?.criteria.clone())
    }

    /// The current filtered and sorted visible list.
    pub fn visible(&self) -> Result<Vec<Product>, StoreError> {
        let inner = self.read()?;
        Ok(engine::visible(&inner.products, &inner.criteria))
    }

    /// Facets derived from the unfiltered catalog, so filter UIs always
    /// show every option regardless of current filtering.
    pub fn facets(&self) -> Result<Facets, StoreError> {
        let inner = self.read()?;
        Ok(Facets::derive(&inner.products, &inner.categories))
    }

    /// Register a callback for visible-list updates.
    ///
    /// The callback is invoked synchronously with the current visible list
    /// before this method returns, then again after every recomputation.
    pub fn subscribe<F>(&self, callback: F) -> Result<SubscriptionId, StoreError>
    where
        F: Fn(&[Product]) + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        let subscriber: Subscriber = Arc::new(callback);
        let current = {
            let mut inner = self.write()?;
            inner.subscribers.push((id, subscriber.clone()));
            engine::visible(&inner.products, &inner.criteria)
        };
        // Initial delivery happens outside the lock so the callback may
        // call back into the store
        subscriber(&current);
        Ok(id)
    }

    /// Cancel a subscription. Returns whether the handle was still active.
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, StoreError> {
        let mut inner = self.write()?;
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
        Ok(inner.subscribers.len() < before)
    }

    /// Recompute the visible list and deliver it to every subscriber.
    fn publish(&self) -> Result<(), StoreError> {
        let (visible, subscribers) = {
            let inner = self.read()?;
            let visible = engine::visible(&inner.products, &inner.criteria);
            let subscribers: Vec<Subscriber> = inner
                .subscribers
                .iter()
                .map(|(_, sub)| sub.clone())
                .collect();
            (visible, subscribers)
        };
        tracing::debug!(
            visible = visible.len(),
            subscribers = subscribers.len(),
            "republishing visible list"
        );
        for subscriber in subscribers {
            subscriber(&visible);
        }
        Ok(())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner.read().map_err(|e| StoreError::Lock {
            message: e.to_string(),
        })
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner.write().map_err(|e| StoreError::Lock {
            message: e.to_string(),
        })
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::criteria::{SortDirection, SortKey};
    use super::sample::sample_catalog;
    use std::sync::Mutex;

    fn loaded_store() -> CatalogStore {
        let store = CatalogStore::new();
        store.load(&sample_catalog()).unwrap();
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = CatalogStore::new();
        assert!(store.visible().unwrap().is_empty());
        assert!(store.facets().unwrap().price.is_none());
    }

    #[test]
    fn test_load_populates_visible_list() {
        let store = loaded_store();
        assert_eq!(store.visible().unwrap().len(), 12);
    }

    #[test]
    fn test_set_criteria_replaces_wholesale() {
        let store = loaded_store();
        store
            .set_criteria(FilterCriteria {
                brands: vec!["Apple".to_string()],
                ..Default::default()
            })
            .unwrap();
        store
            .set_criteria(FilterCriteria {
                in_stock_only: true,
                ..Default::default()
            })
            .unwrap();
        // The brand constraint did not survive the replace
        let criteria = store.criteria().unwrap();
        assert!(criteria.brands.is_empty());
        assert!(criteria.in_stock_only);
    }

    #[test]
    fn test_patch_merges_one_dimension() {
        let store = loaded_store();
        store
            .patch_criteria(CriteriaPatch::ToggleBrand("Apple".to_string()))
            .unwrap();
        store
            .patch_criteria(CriteriaPatch::SortBy(Some(SortKey::Price)))
            .unwrap();
        let criteria = store.criteria().unwrap();
        assert_eq!(criteria.brands, vec!["Apple"]);
        assert_eq!(criteria.sort_by, Some(SortKey::Price));
    }

    #[test]
    fn test_rejected_json_patch_leaves_criteria_unchanged() {
        let store = loaded_store();
        store
            .patch_criteria(CriteriaPatch::InStockOnly(true))
            .unwrap();
        let before = store.criteria().unwrap();

        let err = store
            .patch_criteria_json(&serde_json::json!({"color": "red"}))
            .unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_DIMENSION");
        assert_eq!(store.criteria().unwrap(), before);
    }

    #[test]
    fn test_subscriber_gets_current_list_at_subscribe_time() {
        let store = loaded_store();
        let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store
            .subscribe(move |products| sink.lock().unwrap().push(products.len()))
            .unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![12]);
    }

    #[test]
    fn test_every_mutation_republishes() {
        let store = loaded_store();
        let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store
            .subscribe(move |products| sink.lock().unwrap().push(products.len()))
            .unwrap();

        store
            .patch_criteria(CriteriaPatch::ToggleCategory("1".to_string()))
            .unwrap();
        store
            .patch_criteria(CriteriaPatch::InStockOnly(true))
            .unwrap();

        let counts = seen.lock().unwrap().clone();
        // Initial delivery, then 5 electronics, then 5 in-stock electronics
        assert_eq!(counts, vec![12, 5, 5]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let store = loaded_store();
        let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = store
            .subscribe(move |products| sink.lock().unwrap().push(products.len()))
            .unwrap();

        assert!(store.unsubscribe(id).unwrap());
        store
            .patch_criteria(CriteriaPatch::InStockOnly(true))
            .unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![12]);
        // Second cancel is a no-op
        assert!(!store.unsubscribe(id).unwrap());
    }

    #[test]
    fn test_load_failure_leaves_empty_catalog() {
        struct FailingSource;
        impl ItemSource for FailingSource {
            fn fetch(&self) -> anyhow::Result<crate::core::product::CatalogSnapshot> {
                anyhow::bail!("backend unreachable")
            }
        }

        let store = loaded_store();
        let err = store.load(&FailingSource).unwrap_err();
        assert_eq!(err.error_code(), "LOAD_FAILED");
        assert!(store.visible().unwrap().is_empty());
        let facets = store.facets().unwrap();
        assert!(facets.brands.is_empty());
        assert!(facets.price.is_none());

        // Retry with a good source recovers
        store.load(&sample_catalog()).unwrap();
        assert_eq!(store.visible().unwrap().len(), 12);
    }

    #[test]
    fn test_facets_ignore_current_filtering() {
        let store = loaded_store();
        store
            .set_criteria(FilterCriteria {
                brands: vec!["Apple".to_string()],
                ..Default::default()
            })
            .unwrap();
        // Facets still cover the full catalog
        let facets = store.facets().unwrap();
        assert_eq!(facets.categories.len(), 6);
        assert!(facets.brands.len() > 1);
    }

    #[test]
    fn test_sorted_visible_through_store() {
        let store = loaded_store();
        store
            .set_criteria(FilterCriteria {
                sort_by: Some(SortKey::Price),
                sort_order: SortDirection::Desc,
                ..Default::default()
            })
            .unwrap();
        let visible = store.visible().unwrap();
        assert_eq!(visible[0].id, "12"); // Canon EOS R5 at 8599
        assert_eq!(visible.last().unwrap().id, "7"); // H&M shirt at 25
    }
}

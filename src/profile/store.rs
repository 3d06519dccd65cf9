//! Reactive profile store
//!
//! Same synchronous publish/subscribe contract as the catalog store, over a
//! single optional user instead of a product list. Avatar upload and
//! password changes are external collaborators; this store only holds
//! their results (an avatar URL arrives through a normal update).

use crate::core::error::StoreError;
use crate::profile::user::{User, UserUpdateRequest};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Handle returned by [`ProfileStore::subscribe`].
pub type SubscriptionId = Uuid;

type Subscriber = Arc<dyn Fn(Option<&User>) + Send + Sync>;

struct Inner {
    user: Option<User>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
}

/// In-memory store for the current user profile.
#[derive(Clone)]
pub struct ProfileStore {
    inner: Arc<RwLock<Inner>>,
}

impl ProfileStore {
    /// Create a store with no user loaded.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                user: None,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Create a store holding the given user.
    pub fn with_user(user: User) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                user: Some(user),
                subscribers: Vec::new(),
            })),
        }
    }

    /// The current user, if any.
    pub fn current(&self) -> Result<Option<User>, StoreError> {
        Ok(self.read()?.user.clone())
    }

    /// Apply a partial update to the current user and publish the result.
    ///
    /// Fails with [`StoreError::NoUser`] when no user is loaded, leaving
    /// subscribers untouched.
    pub fn update(&self, update: UserUpdateRequest) -> Result<User, StoreError> {
        let updated = {
            let mut inner = self.write()?;
            let user = inner.user.as_mut().ok_or(StoreError::NoUser)?;
            user.apply(update);
            user.clone()
        };
        tracing::debug!(user = %updated.id, "profile updated");
        self.publish()?;
        Ok(updated)
    }

    /// Clear the current user and publish `None` to subscribers.
    pub fn delete_account(&self) -> Result<(), StoreError> {
        self.write()?.user = None;
        self.publish()
    }

    /// Register a callback for profile changes; invoked synchronously with
    /// the current state on subscribe and after every mutation.
    pub fn subscribe<F>(&self, callback: F) -> Result<SubscriptionId, StoreError>
    where
        F: Fn(Option<&User>) + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        let subscriber: Subscriber = Arc::new(callback);
        let current = {
            let mut inner = self.write()?;
            inner.subscribers.push((id, subscriber.clone()));
            inner.user.clone()
        };
        subscriber(current.as_ref());
        Ok(id)
    }

    /// Cancel a subscription. Returns whether the handle was still active.
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, StoreError> {
        let mut inner = self.write()?;
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sub_id, _)| *sub_id != id);
        Ok(inner.subscribers.len() < before)
    }

    fn publish(&self) -> Result<(), StoreError> {
        let (user, subscribers) = {
            let inner = self.read()?;
            let subscribers: Vec<Subscriber> = inner
                .subscribers
                .iter()
                .map(|(_, sub)| sub.clone())
                .collect();
            (inner.user.clone(), subscribers)
        };
        for subscriber in subscribers {
            subscriber(user.as_ref());
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

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

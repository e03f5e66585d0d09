use crate::domain::{Subscription, SubscriptionUpdate};
use anyhow::anyhow;
use std::{
    collections::{hash_map::Entry, HashMap},
    sync::{Arc, PoisonError, RwLock},
};

/// In-memory mapping from username to subscription record, shared between
/// handlers through cheap clones of the handle. Entries live for the lifetime
/// of the process; nothing is persisted. At most one record per username.
#[derive(Clone, Default)]
pub struct SubscriptionStore {
    records: Arc<RwLock<HashMap<String, Subscription>>>,
}

impl SubscriptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, username: &str) -> Result<Option<Subscription>, anyhow::Error> {
        let records = self.records.read().map_err(lock_poisoned)?;

        Ok(records.get(username).cloned())
    }

    /// Inserts a record for a username that has none yet. Returns `false` and
    /// leaves the store untouched when the username is already taken.
    pub fn insert_new(
        &self,
        username: String,
        subscription: Subscription,
    ) -> Result<bool, anyhow::Error> {
        let mut records = self.records.write().map_err(lock_poisoned)?;

        match records.entry(username) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(entry) => {
                entry.insert(subscription);
                Ok(true)
            }
        }
    }

    /// Applies a partial update in place. Returns `false` when the username
    /// has no record.
    pub fn update(&self, username: &str, update: SubscriptionUpdate) -> Result<bool, anyhow::Error> {
        let mut records = self.records.write().map_err(lock_poisoned)?;

        match records.get_mut(username) {
            Some(subscription) => {
                subscription.apply(update);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes the record. Returns `false` when the username has no record.
    pub fn remove(&self, username: &str) -> Result<bool, anyhow::Error> {
        let mut records = self.records.write().map_err(lock_poisoned)?;

        Ok(records.remove(username).is_some())
    }
}

fn lock_poisoned<T>(_: PoisonError<T>) -> anyhow::Error {
    anyhow!("Subscription store lock is poisoned")
}

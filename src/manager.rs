//! Registry of share groups keyed by opaque context keys
//!
//! Each client context attaches to a share group under its own key. A context
//! that shares objects with another one attaches its key to the other
//! context's group, so several keys may reference the same [`ShareGroup`].
//!
//! The registry lock only guards the key table. Group handles are cloned out
//! and the lock is released before any group operation runs, and groups that
//! lose their last share are dropped outside the lock.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::config::{DuplicateKeyPolicy, NameManagerConfig};
use crate::error::{NameError, NameResult};
use crate::share_group::{ShareGroup, ShareGroupPtr};
use crate::types::GroupKey;

/// Maps context keys to share groups
pub struct ObjectNameManager<K = GroupKey> {
    groups: Mutex<HashMap<K, ShareGroupPtr>>,
    config: NameManagerConfig,
}

impl ObjectNameManager<GroupKey> {
    /// Process-wide registry, created on first use with the default config
    pub fn global() -> &'static ObjectNameManager<GroupKey> {
        static GLOBAL: OnceLock<ObjectNameManager<GroupKey>> = OnceLock::new();
        GLOBAL.get_or_init(ObjectNameManager::new)
    }
}

impl<K> ObjectNameManager<K>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::with_config(NameManagerConfig::default())
    }

    pub fn with_config(config: NameManagerConfig) -> Self {
        Self {
            groups: Mutex::new(HashMap::new()),
            config,
        }
    }

    pub fn config(&self) -> &NameManagerConfig {
        &self.config
    }

    /// Create a new share group attached to `key`.
    ///
    /// If `key` already has a group, the configured [`DuplicateKeyPolicy`]
    /// decides whether that group is returned or replaced by a fresh one.
    pub fn create_share_group(&self, key: K) -> ShareGroupPtr {
        let mut groups = self.groups.lock();

        if let Some(existing) = groups.get(&key) {
            match self.config.duplicate_key_policy {
                DuplicateKeyPolicy::ReturnExisting => {
                    log::debug!("Key {:?} already has a share group, reusing it", key);
                    return existing.clone();
                }
                DuplicateKeyPolicy::Replace => {
                    log::debug!("Replacing share group of key {:?}", key);
                }
            }
        }

        let group = ShareGroup::new(self.config.name_seed());
        log::debug!("Created share group for key {:?}", key);
        let previous = groups.insert(key, group.clone());

        drop(groups);
        drop(previous);
        group
    }

    /// Attach `key` to the share group of `existing_key`.
    ///
    /// Fails with [`NameError::GroupNotFound`] if `existing_key` has no group,
    /// in which case the registry is left untouched.
    pub fn attach_share_group<Q>(&self, key: K, existing_key: &Q) -> NameResult<ShareGroupPtr>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let mut groups = self.groups.lock();

        let Some(group) = groups.get(existing_key).cloned() else {
            log::warn!(
                "Cannot attach {:?}: no share group for {:?}",
                key,
                existing_key
            );
            return Err(NameError::GroupNotFound(format!("{existing_key:?}")));
        };

        log::debug!("Attached key {:?} to share group of {:?}", key, existing_key);
        let previous = groups.insert(key, group.clone());

        drop(groups);
        drop(previous);
        Ok(group)
    }

    /// Share group attached to `key`
    pub fn get_share_group<Q>(&self, key: &Q) -> Option<ShareGroupPtr>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.groups.lock().get(key).cloned()
    }

    /// Detach `key` from its share group.
    ///
    /// The group itself lives on while other keys or handles reference it.
    pub fn delete_share_group<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let removed = self.groups.lock().remove(key);
        if let Some(group) = removed {
            log::debug!(
                "Detached key {:?} from share group ({} other shares)",
                key,
                std::sync::Arc::strong_count(&group) - 1
            );
        }
    }

    /// Some key with an attached share group, if any.
    ///
    /// Which key is returned is unspecified. A new context uses it to find a
    /// group to share initial state with.
    pub fn get_global_context(&self) -> Option<K> {
        self.groups.lock().keys().next().cloned()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.groups.lock().contains_key(key)
    }

    /// Number of attached keys
    pub fn len(&self) -> usize {
        self.groups.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.lock().is_empty()
    }
}

impl<K> Default for ObjectNameManager<K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

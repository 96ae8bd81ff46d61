//! Registry configuration

/// What `create_share_group` does when the key is already attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateKeyPolicy {
    /// Return the share group already attached to the key
    #[default]
    ReturnExisting,
    /// Detach the key from its old group and attach a fresh one
    Replace,
}

/// Configuration for an [`ObjectNameManager`](crate::ObjectNameManager)
#[derive(Debug, Clone)]
pub struct NameManagerConfig {
    /// Behavior of `create_share_group` on a key collision
    pub duplicate_key_policy: DuplicateKeyPolicy,
    /// First candidate for generated local and global names in new namespaces.
    /// Zero is coerced to one.
    pub first_name: u32,
}

impl Default for NameManagerConfig {
    fn default() -> Self {
        Self {
            duplicate_key_policy: DuplicateKeyPolicy::ReturnExisting,
            first_name: 1,
        }
    }
}

impl NameManagerConfig {
    pub fn with_duplicate_key_policy(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_key_policy = policy;
        self
    }

    pub fn with_first_name(mut self, first_name: u32) -> Self {
        self.first_name = first_name;
        self
    }

    /// Name seed actually handed to namespaces
    pub(crate) fn name_seed(&self) -> u32 {
        self.first_name.max(1)
    }
}

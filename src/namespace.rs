//! Per-type local to global name mapping
//!
//! A [`NameSpace`] owns the names of one [`ObjectType`] inside a share group.
//! Every local name handed to a client context resolves to a global name used
//! with the shared execution environment. Name `0` is reserved on both sides
//! and is never generated.
//!
//! Namespaces are not synchronized. They are only reachable through a
//! [`ShareGroup`](crate::ShareGroup), which serializes access with its lock.

use std::collections::HashMap;

use crate::types::{GlobalName, LocalName, ObjectType, NO_OBJECT};

/// Bidirectional local/global name table for one object type
#[derive(Debug)]
pub struct NameSpace {
    object_type: ObjectType,
    next_local: u32,
    next_global: u32,
    local_to_global: HashMap<LocalName, GlobalName>,
    /// For every bound global name, the local name most recently bound to it.
    global_to_local: HashMap<GlobalName, LocalName>,
}

impl NameSpace {
    pub(crate) fn with_seed(object_type: ObjectType, seed: u32) -> Self {
        let seed = seed.max(1);
        Self {
            object_type,
            next_local: seed,
            next_global: seed,
            local_to_global: HashMap::new(),
            global_to_local: HashMap::new(),
        }
    }

    /// Object type whose names live in this namespace
    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    /// Create a new object and return its local name.
    ///
    /// A non-zero `requested` is used as the local name verbatim; zero picks
    /// the next unused name. With `gen_global` a fresh global name is bound to
    /// the object, otherwise it stays bound to [`NO_OBJECT`] until
    /// [`replace_global_name`](Self::replace_global_name) is called.
    ///
    /// Requesting a local name that already exists leaves its mapping as is.
    pub fn gen_name(&mut self, requested: LocalName, gen_global: bool) -> LocalName {
        let local = if requested != NO_OBJECT {
            if self.local_to_global.contains_key(&requested) {
                log::warn!(
                    "{} name {} already exists, keeping its current mapping",
                    self.object_type,
                    requested
                );
                return requested;
            }
            requested
        } else {
            let used = &self.local_to_global;
            probe_unused(&mut self.next_local, |name| used.contains_key(&name))
        };

        let global = if gen_global {
            let used = &self.global_to_local;
            probe_unused(&mut self.next_global, |name| used.contains_key(&name))
        } else {
            NO_OBJECT
        };

        self.local_to_global.insert(local, global);
        if global != NO_OBJECT {
            self.global_to_local.insert(global, local);
        }

        log::trace!("gen {} {} -> {}", self.object_type, local, global);
        local
    }

    /// Global name of `local`, or [`NO_OBJECT`] if it does not exist
    pub fn global_name(&self, local: LocalName) -> GlobalName {
        self.local_to_global
            .get(&local)
            .copied()
            .unwrap_or(NO_OBJECT)
    }

    /// Local name bound to `global`, or [`NO_OBJECT`] if there is none.
    ///
    /// When several local names share a global name the most recently bound
    /// one is returned.
    pub fn local_name(&self, global: GlobalName) -> LocalName {
        if global == NO_OBJECT {
            return NO_OBJECT;
        }
        self.global_to_local
            .get(&global)
            .copied()
            .unwrap_or(NO_OBJECT)
    }

    /// Remove `local` from the namespace. Unknown names are ignored.
    pub fn delete_name(&mut self, local: LocalName) {
        if let Some(global) = self.local_to_global.remove(&local) {
            self.release_global(global, local);
            log::trace!("delete {} {} (was {})", self.object_type, local, global);
        }
    }

    pub fn is_object(&self, local: LocalName) -> bool {
        self.local_to_global.contains_key(&local)
    }

    /// Bind `local` to an existing global name, creating the entry if needed.
    ///
    /// Other local names keep their bindings, including those that share the
    /// previous or the new global name.
    pub fn replace_global_name(&mut self, local: LocalName, global: GlobalName) {
        if local == NO_OBJECT || global == NO_OBJECT {
            log::warn!(
                "ignoring {} alias {} -> {}: name 0 is reserved",
                self.object_type,
                local,
                global
            );
            return;
        }

        if let Some(previous) = self.local_to_global.insert(local, global) {
            if previous != global {
                self.release_global(previous, local);
            }
        }
        self.global_to_local.insert(global, local);

        log::trace!("alias {} {} -> {}", self.object_type, local, global);
    }

    /// Number of live objects
    pub fn len(&self) -> usize {
        self.local_to_global.len()
    }

    pub fn is_empty(&self) -> bool {
        self.local_to_global.is_empty()
    }

    /// Iterate over `(local, global)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (LocalName, GlobalName)> + '_ {
        self.local_to_global.iter().map(|(&l, &g)| (l, g))
    }

    /// Drop `local`'s claim on `global` in the reverse index. If another local
    /// name still maps to `global`, it takes over the reverse entry.
    fn release_global(&mut self, global: GlobalName, local: LocalName) {
        if global == NO_OBJECT || self.global_to_local.get(&global) != Some(&local) {
            return;
        }
        self.global_to_local.remove(&global);

        // Linear, but only reached when a shared global loses its latest binding.
        let successor = self
            .local_to_global
            .iter()
            .find(|(_, &g)| g == global)
            .map(|(&l, _)| l);
        if let Some(successor) = successor {
            self.global_to_local.insert(global, successor);
        }
    }
}

/// Advance `counter` until it yields a non-zero name that `in_use` rejects.
/// The counter wraps around at `u32::MAX`.
fn probe_unused(counter: &mut u32, in_use: impl Fn(u32) -> bool) -> u32 {
    loop {
        let candidate = *counter;
        *counter = counter.wrapping_add(1);
        if candidate != NO_OBJECT && !in_use(candidate) {
            return candidate;
        }
    }
}

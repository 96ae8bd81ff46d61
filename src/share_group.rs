//! Share groups: the named objects of one set of sharing contexts
//!
//! A [`ShareGroup`] holds one [`NameSpace`] per [`ObjectType`] and the
//! payloads attached to names. Contexts that share objects hold the same
//! group through [`ShareGroupPtr`] handles handed out by the
//! [`ObjectNameManager`](crate::ObjectNameManager).
//!
//! # Locking
//!
//! Every method takes the group lock for its whole duration. Payloads that
//! the group lets go of are dropped after the lock is released, so payload
//! destructors may call back into the group.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::namespace::NameSpace;
use crate::object_data::{ObjectDataPtr, ObjectDataStore};
use crate::types::{GlobalName, LocalName, ObjectType};

/// Shared handle to a share group. The group is destroyed with its last handle.
pub type ShareGroupPtr = Arc<ShareGroup>;

struct ShareGroupInner {
    namespaces: [NameSpace; ObjectType::COUNT],
    data: ObjectDataStore,
}

impl ShareGroupInner {
    fn namespace(&self, ty: ObjectType) -> &NameSpace {
        &self.namespaces[ty.index()]
    }

    fn namespace_mut(&mut self, ty: ObjectType) -> &mut NameSpace {
        &mut self.namespaces[ty.index()]
    }
}

/// Thread-safe set of namespaces shared by one or more contexts
pub struct ShareGroup {
    inner: Mutex<ShareGroupInner>,
}

impl ShareGroup {
    /// Only the registry creates groups.
    pub(crate) fn new(name_seed: u32) -> ShareGroupPtr {
        Arc::new(Self {
            inner: Mutex::new(ShareGroupInner {
                namespaces: ObjectType::ALL.map(|ty| NameSpace::with_seed(ty, name_seed)),
                data: ObjectDataStore::new(),
            }),
        })
    }

    /// Generate an object name and a global name for it.
    ///
    /// A non-zero `requested` is used as the local name.
    pub fn gen_name(&self, ty: ObjectType, requested: LocalName) -> LocalName {
        self.inner.lock().namespace_mut(ty).gen_name(requested, true)
    }

    /// Global name of an object, or [`NO_OBJECT`](crate::NO_OBJECT)
    pub fn global_name(&self, ty: ObjectType, local: LocalName) -> GlobalName {
        self.inner.lock().namespace(ty).global_name(local)
    }

    /// Local name bound to a global name, or [`NO_OBJECT`](crate::NO_OBJECT)
    pub fn local_name(&self, ty: ObjectType, global: GlobalName) -> LocalName {
        self.inner.lock().namespace(ty).local_name(global)
    }

    /// Delete an object name together with its payload
    pub fn delete_name(&self, ty: ObjectType, local: LocalName) {
        let released = {
            let mut inner = self.inner.lock();
            inner.namespace_mut(ty).delete_name(local);
            inner.data.remove(ty, local)
        };
        drop(released);
    }

    /// Make `local` resolve to an existing global object.
    ///
    /// Used when an object must share storage with another one, such as
    /// siblings of an image.
    pub fn replace_global_name(&self, ty: ObjectType, local: LocalName, global: GlobalName) {
        self.inner
            .lock()
            .namespace_mut(ty)
            .replace_global_name(local, global);
    }

    pub fn is_object(&self, ty: ObjectType, local: LocalName) -> bool {
        self.inner.lock().namespace(ty).is_object(local)
    }

    /// Attach `data` to an object, replacing any previous payload.
    ///
    /// Returns `false` and leaves the group unchanged if the object does not
    /// exist.
    pub fn set_object_data(&self, ty: ObjectType, local: LocalName, data: ObjectDataPtr) -> bool {
        let released = {
            let mut inner = self.inner.lock();
            if !inner.namespace(ty).is_object(local) {
                log::warn!("cannot attach data to unknown {} {}", ty, local);
                return false;
            }
            inner.data.insert(ty, local, data)
        };
        drop(released);
        true
    }

    /// Payload attached to an object, if any
    pub fn get_object_data(&self, ty: ObjectType, local: LocalName) -> Option<ObjectDataPtr> {
        self.inner.lock().data.get(ty, local)
    }

    /// Number of live objects of one type
    pub fn object_count(&self, ty: ObjectType) -> usize {
        self.inner.lock().namespace(ty).len()
    }

    /// Snapshot of the `(local, global)` pairs of one type
    pub fn objects(&self, ty: ObjectType) -> Vec<(LocalName, GlobalName)> {
        self.inner.lock().namespace(ty).iter().collect()
    }
}

impl Drop for ShareGroup {
    fn drop(&mut self) {
        let inner = self.inner.get_mut();
        let objects: usize = inner.namespaces.iter().map(NameSpace::len).sum();
        log::debug!(
            "Destroying share group ({} objects, {} payloads)",
            objects,
            inner.data.len()
        );
    }
}

impl std::fmt::Debug for ShareGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        let mut s = f.debug_struct("ShareGroup");
        for ns in &inner.namespaces {
            s.field(ns.object_type().name(), &ns.len());
        }
        s.finish()
    }
}

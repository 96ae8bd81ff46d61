//! Opaque per-object payloads attached to names

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::types::{LocalName, ObjectType};

/// Shared, type-erased payload attached to a named object.
///
/// The share group holds one share of the payload for as long as the name
/// exists. Callers recover the concrete type with [`Arc::downcast`].
pub type ObjectDataPtr = Arc<dyn Any + Send + Sync>;

/// Per-type payload tables of a share group
#[derive(Default)]
pub(crate) struct ObjectDataStore {
    tables: [HashMap<LocalName, ObjectDataPtr>; ObjectType::COUNT],
}

impl ObjectDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `data` for the object, returning the payload it replaced
    pub fn insert(
        &mut self,
        ty: ObjectType,
        local: LocalName,
        data: ObjectDataPtr,
    ) -> Option<ObjectDataPtr> {
        self.tables[ty.index()].insert(local, data)
    }

    pub fn get(&self, ty: ObjectType, local: LocalName) -> Option<ObjectDataPtr> {
        self.tables[ty.index()].get(&local).cloned()
    }

    pub fn remove(&mut self, ty: ObjectType, local: LocalName) -> Option<ObjectDataPtr> {
        self.tables[ty.index()].remove(&local)
    }

    /// Total number of payloads across all types
    pub fn len(&self) -> usize {
        self.tables.iter().map(HashMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replace_remove() {
        let mut store = ObjectDataStore::new();
        let first: ObjectDataPtr = Arc::new(1u32);
        let second: ObjectDataPtr = Arc::new(2u32);

        assert!(store.insert(ObjectType::Texture, 1, first.clone()).is_none());
        let replaced = store.insert(ObjectType::Texture, 1, second.clone());
        assert!(Arc::ptr_eq(&replaced.unwrap(), &first));

        let current = store.get(ObjectType::Texture, 1).unwrap();
        assert!(Arc::ptr_eq(&current, &second));

        assert!(store.remove(ObjectType::Texture, 1).is_some());
        assert!(store.get(ObjectType::Texture, 1).is_none());
    }

    #[test]
    fn test_types_are_separate() {
        let mut store = ObjectDataStore::new();
        store.insert(ObjectType::Shader, 3, Arc::new("shader"));
        assert!(store.get(ObjectType::Program, 3).is_none());
        assert_eq!(store.len(), 1);
    }
}

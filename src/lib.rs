//! GL Namespace - object name virtualization for shared GL contexts
//!
//! Client contexts see *local* object names. Each local name is remapped to a
//! *global* name in the shared execution environment, so contexts that do not
//! share objects can never collide, while contexts that do share observe the
//! same objects.
//!
//! # Overview
//! - [`NameSpace`] - local/global name table for one [`ObjectType`]
//! - [`ShareGroup`] - one namespace per object type plus per-object payloads,
//!   behind a single lock
//! - [`ObjectNameManager`] - registry mapping opaque context keys to share
//!   groups, several keys may reference one group
//!
//! # Example
//!
//! ```
//! use gl_namespace::{GroupKey, ObjectNameManager, ObjectType};
//!
//! let manager: ObjectNameManager = ObjectNameManager::new();
//! let group = manager.create_share_group(GroupKey(1));
//! manager.attach_share_group(GroupKey(2), &GroupKey(1)).unwrap();
//!
//! let texture = group.gen_name(ObjectType::Texture, 0);
//! let global = group.global_name(ObjectType::Texture, texture);
//! assert_ne!(global, 0);
//!
//! let shared = manager.get_share_group(&GroupKey(2)).unwrap();
//! assert!(shared.is_object(ObjectType::Texture, texture));
//! ```
//!
//! Only names are managed here. Creating and destroying the objects behind the
//! global names is up to the caller.

pub mod config;
pub mod error;
pub mod manager;
pub mod namespace;
pub mod object_data;
pub mod share_group;
pub mod types;

pub use config::{DuplicateKeyPolicy, NameManagerConfig};
pub use error::{NameError, NameResult};
pub use manager::ObjectNameManager;
pub use namespace::NameSpace;
pub use object_data::ObjectDataPtr;
pub use share_group::{ShareGroup, ShareGroupPtr};
pub use types::{GlobalName, GroupKey, LocalName, ObjectType, NO_OBJECT};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version. Call once after the logger is installed.
pub fn init() {
    log::info!("GL Namespace v{} initialized", VERSION);
}

//! Name manager error types

use thiserror::Error;

/// Errors surfaced by the share group registry.
///
/// Name lookups never fail with an error; a miss is reported as
/// [`NO_OBJECT`](crate::NO_OBJECT) or `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// `attach_share_group` referenced a key with no share group.
    #[error("no share group attached to key {0}")]
    GroupNotFound(String),
}

pub type NameResult<T> = Result<T, NameError>;

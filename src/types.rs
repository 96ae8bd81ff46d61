//! Core name and object type definitions

use std::fmt;

/// Name of an object as seen by a client context
pub type LocalName = u32;

/// Name of an object in the shared execution environment
pub type GlobalName = u32;

/// Reserved name meaning "no object". Lookups return it on a miss.
pub const NO_OBJECT: u32 = 0;

/// Kinds of named objects tracked per share group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    VertexBuffer,
    Texture,
    Renderbuffer,
    Framebuffer,
    Shader,
    Program,
}

impl ObjectType {
    /// Number of object types
    pub const COUNT: usize = 6;

    /// All object types, in index order
    pub const ALL: [ObjectType; Self::COUNT] = [
        ObjectType::VertexBuffer,
        ObjectType::Texture,
        ObjectType::Renderbuffer,
        ObjectType::Framebuffer,
        ObjectType::Shader,
        ObjectType::Program,
    ];

    /// Slot of this type in per-type tables
    pub const fn index(self) -> usize {
        match self {
            ObjectType::VertexBuffer => 0,
            ObjectType::Texture => 1,
            ObjectType::Renderbuffer => 2,
            ObjectType::Framebuffer => 3,
            ObjectType::Shader => 4,
            ObjectType::Program => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ObjectType::VertexBuffer => "vertex buffer",
            ObjectType::Texture => "texture",
            ObjectType::Renderbuffer => "renderbuffer",
            ObjectType::Framebuffer => "framebuffer",
            ObjectType::Shader => "shader",
            ObjectType::Program => "program",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque key identifying a share group in the registry.
///
/// Typically derived from a native context handle. The registry only hashes
/// and compares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey(pub u64);

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupKey({:#x})", self.0)
    }
}

impl From<u64> for GroupKey {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, ty) in ObjectType::ALL.iter().enumerate() {
            assert_eq!(ty.index(), i);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(ObjectType::Renderbuffer.to_string(), "renderbuffer");
        assert_eq!(GroupKey(0x2a).to_string(), "GroupKey(0x2a)");
    }
}

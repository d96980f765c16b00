/// Buffer trait and buffer descriptor

use std::fmt::Debug;
use bitflags::bitflags;

bitflags! {
    /// Pipeline stages a buffer can be bound to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BindFlags: u32 {
        const VERTEX_BUFFER      = 0x001;
        const INDEX_BUFFER       = 0x002;
        const UNIFORM_BUFFER     = 0x004;
        const SHADER_RESOURCE    = 0x008;
        const STREAM_OUTPUT      = 0x010;
        const UNORDERED_ACCESS   = 0x080;
        const INDIRECT_DRAW_ARGS = 0x100;
    }
}

bitflags! {
    /// CPU access allowed on a buffer
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CpuAccessFlags: u32 {
        const READ  = 0x1;
        const WRITE = 0x2;
    }
}

/// Expected usage of a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Usage {
    /// Immutable, initialized at creation
    Static,
    /// GPU read/write, occasional CPU updates
    #[default]
    Default,
    /// Written by the CPU every frame
    Dynamic,
    /// Staging resource read back by the CPU
    CpuAccessible,
}

impl Usage {
    pub const COUNT: usize = 4;
}

/// How shaders view the buffer contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BufferMode {
    #[default]
    Undefined,
    /// Typed elements with a format
    Formatted,
    /// Array of structures
    Structured,
    /// Byte address buffer
    Raw,
}

impl BufferMode {
    pub const COUNT: usize = 4;

    /// Modes whose size must be a whole number of elements
    pub fn requires_stride(&self) -> bool {
        matches!(self, BufferMode::Formatted | BufferMode::Structured)
    }
}

/// Descriptor for creating a buffer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BufferDesc {
    /// Debug name
    pub name: String,
    /// Size in bytes (0 = take it from the initial data)
    pub size_in_bytes: u32,
    pub bind_flags: BindFlags,
    pub usage: Usage,
    pub cpu_access_flags: CpuAccessFlags,
    pub mode: BufferMode,
    /// Element size for formatted and structured buffers
    pub element_byte_stride: u32,
}

/// Buffer resource trait
///
/// Implemented by backend-specific buffer types.
/// The buffer is destroyed when the last reference is dropped.
pub trait Buffer: Send + Sync + Debug {
    /// Descriptor the buffer was created with
    fn desc(&self) -> &BufferDesc;
}

/// Script names of the buffer enums and flag sets

use std::sync::Arc;
use bitflags::Flags;
use crate::binding::{SymbolMap, ValueType, value_type_map};
use crate::device::{
    BindFlags, BufferMode, CpuAccessFlags, ResourceStateTransitionMode,
    SetVertexBuffersFlags, Usage,
};
use crate::error::Result;

/// Every symbol map the buffer binding needs, built and checked once
#[derive(Debug, Clone)]
pub struct BufferSymbols {
    pub bind_flags: Arc<SymbolMap<BindFlags>>,
    pub usage: Arc<SymbolMap<Usage>>,
    pub cpu_access: Arc<SymbolMap<CpuAccessFlags>>,
    pub mode: Arc<SymbolMap<BufferMode>>,
    pub transition_mode: Arc<SymbolMap<ResourceStateTransitionMode>>,
    pub vertex_buffer_flags: Arc<SymbolMap<SetVertexBuffersFlags>>,
    pub value_type: Arc<SymbolMap<ValueType>>,
}

impl BufferSymbols {
    /// Build all maps
    ///
    /// Fails with a `ConfigurationError` if a map no longer matches its
    /// native type.
    pub fn new() -> Result<Self> {
        let bind_flags = SymbolMap::new("BIND_FLAGS")
            .define("BIND_VERTEX_BUFFER", BindFlags::VERTEX_BUFFER)?
            .define("BIND_INDEX_BUFFER", BindFlags::INDEX_BUFFER)?
            .define("BIND_UNIFORM_BUFFER", BindFlags::UNIFORM_BUFFER)?
            .define("BIND_SHADER_RESOURCE", BindFlags::SHADER_RESOURCE)?
            .define("BIND_STREAM_OUTPUT", BindFlags::STREAM_OUTPUT)?
            .define("BIND_UNORDERED_ACCESS", BindFlags::UNORDERED_ACCESS)?
            .define("BIND_INDIRECT_DRAW_ARGS", BindFlags::INDIRECT_DRAW_ARGS)?
            .expect_cardinality(BindFlags::FLAGS.len())?;

        let usage = SymbolMap::new("USAGE")
            .define("USAGE_STATIC", Usage::Static)?
            .define("USAGE_DEFAULT", Usage::Default)?
            .define("USAGE_DYNAMIC", Usage::Dynamic)?
            .define("USAGE_CPU_ACCESSIBLE", Usage::CpuAccessible)?
            .expect_cardinality(Usage::COUNT)?;

        let cpu_access = SymbolMap::new("CPU_ACCESS_FLAGS")
            .define("CPU_ACCESS_READ", CpuAccessFlags::READ)?
            .define("CPU_ACCESS_WRITE", CpuAccessFlags::WRITE)?
            .expect_cardinality(CpuAccessFlags::FLAGS.len())?;

        let mode = SymbolMap::new("BUFFER_MODE")
            .define("BUFFER_MODE_UNDEFINED", BufferMode::Undefined)?
            .define("BUFFER_MODE_FORMATTED", BufferMode::Formatted)?
            .define("BUFFER_MODE_STRUCTURED", BufferMode::Structured)?
            .define("BUFFER_MODE_RAW", BufferMode::Raw)?
            .expect_cardinality(BufferMode::COUNT)?;

        let transition_mode = SymbolMap::new("RESOURCE_STATE_TRANSITION_MODE")
            .define("RESOURCE_STATE_TRANSITION_MODE_NONE", ResourceStateTransitionMode::None)?
            .define("RESOURCE_STATE_TRANSITION_MODE_TRANSITION", ResourceStateTransitionMode::Transition)?
            .define("RESOURCE_STATE_TRANSITION_MODE_VERIFY", ResourceStateTransitionMode::Verify)?
            .expect_cardinality(ResourceStateTransitionMode::COUNT)?;

        // NONE has no bit of its own
        let vertex_buffer_flags = SymbolMap::new("SET_VERTEX_BUFFERS_FLAGS")
            .define("SET_VERTEX_BUFFERS_FLAG_NONE", SetVertexBuffersFlags::empty())?
            .define("SET_VERTEX_BUFFERS_FLAG_RESET", SetVertexBuffersFlags::RESET)?
            .expect_cardinality(SetVertexBuffersFlags::FLAGS.len() + 1)?;

        Ok(Self {
            bind_flags: Arc::new(bind_flags),
            usage: Arc::new(usage),
            cpu_access: Arc::new(cpu_access),
            mode: Arc::new(mode),
            transition_mode: Arc::new(transition_mode),
            vertex_buffer_flags: Arc::new(vertex_buffer_flags),
            value_type: Arc::new(value_type_map()?),
        })
    }
}

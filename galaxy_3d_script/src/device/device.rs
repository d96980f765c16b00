/// RenderDevice and DeviceContext traits - the native side of the bindings

use std::sync::Arc;
use bitflags::bitflags;
use crate::device::{Buffer, BufferDesc};

/// How a command handles resource state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResourceStateTransitionMode {
    /// No transition, no verification
    #[default]
    None,
    /// Transition resources to the required states
    Transition,
    /// Only verify that resources are in the required states
    Verify,
}

impl ResourceStateTransitionMode {
    pub const COUNT: usize = 3;
}

bitflags! {
    /// Modifiers for `DeviceContext::set_vertex_buffers`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SetVertexBuffersFlags: u32 {
        /// Unbind every slot not set by the call
        const RESET = 0x1;
    }
}

/// Resource factory
pub trait RenderDevice: Send + Sync {
    /// Create a buffer
    ///
    /// # Arguments
    ///
    /// * `desc` - Fully validated buffer descriptor
    /// * `data` - Initial contents, exactly `desc.size_in_bytes` long when present
    ///
    /// # Returns
    ///
    /// The new buffer, or `None` if the device could not create it
    fn create_buffer(&mut self, desc: &BufferDesc, data: Option<&[u8]>) -> Option<Arc<dyn Buffer>>;
}

/// Immediate device context
pub trait DeviceContext: Send + Sync {
    /// Bind vertex buffers to consecutive input slots
    ///
    /// # Arguments
    ///
    /// * `start_slot` - First slot to bind
    /// * `buffers` - One entry per slot, `None` unbinds the slot
    /// * `offsets` - Byte offsets, same length as `buffers`
    /// * `mode` - State transition mode
    /// * `flags` - Binding modifiers
    fn set_vertex_buffers(
        &mut self,
        start_slot: u32,
        buffers: &[Option<Arc<dyn Buffer>>],
        offsets: &[u64],
        mode: ResourceStateTransitionMode,
        flags: SetVertexBuffersFlags,
    );

    /// Bind an index buffer
    ///
    /// # Arguments
    ///
    /// * `buffer` - Index buffer
    /// * `offset` - Byte offset of the first index
    /// * `mode` - State transition mode
    fn set_index_buffer(&mut self, buffer: &Arc<dyn Buffer>, offset: u64, mode: ResourceStateTransitionMode);
}

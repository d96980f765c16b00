/// Mock device and context for tests (no GPU required)
///
/// The mock device keeps every created buffer in a SlotMap so tests can
/// check what reached the device; the mock context records every binding
/// call it receives.

use std::sync::{Arc, Mutex};
use slotmap::{new_key_type, SlotMap};
use crate::device::{
    Buffer, BufferDesc, DeviceContext, RenderDevice,
    ResourceStateTransitionMode, SetVertexBuffersFlags,
};

new_key_type! {
    /// Stable identifier of a buffer created by the mock device
    pub struct MockBufferKey;
}

// ============================================================================
// Mock Buffer
// ============================================================================

#[derive(Debug)]
pub struct MockBuffer {
    pub key: MockBufferKey,
    pub desc: BufferDesc,
    pub data: Vec<u8>,
}

impl Buffer for MockBuffer {
    fn desc(&self) -> &BufferDesc {
        &self.desc
    }
}

// ============================================================================
// Mock RenderDevice
// ============================================================================

#[derive(Debug, Default)]
pub struct MockRenderDevice {
    buffers: SlotMap<MockBufferKey, Arc<MockBuffer>>,
    /// When set, every creation request returns no buffer
    pub fail_creation: bool,
}

impl MockRenderDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle in the form bindings expect
    pub fn shared() -> Arc<Mutex<MockRenderDevice>> {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    pub fn buffer(&self, key: MockBufferKey) -> Option<&Arc<MockBuffer>> {
        self.buffers.get(key)
    }

    /// Buffers in creation order
    pub fn buffers(&self) -> Vec<Arc<MockBuffer>> {
        let mut buffers: Vec<_> = self.buffers.values().cloned().collect();
        buffers.sort_by_key(|buffer| buffer.key);
        buffers
    }
}

impl RenderDevice for MockRenderDevice {
    fn create_buffer(&mut self, desc: &BufferDesc, data: Option<&[u8]>) -> Option<Arc<dyn Buffer>> {
        if self.fail_creation {
            return None;
        }
        let key = self.buffers.insert_with_key(|key| {
            Arc::new(MockBuffer {
                key,
                desc: desc.clone(),
                data: data.map(<[u8]>::to_vec).unwrap_or_default(),
            })
        });
        let buffer: Arc<dyn Buffer> = self.buffers[key].clone();
        Some(buffer)
    }
}

// ============================================================================
// Mock DeviceContext
// ============================================================================

/// One recorded context call
#[derive(Debug, Clone)]
pub enum ContextCommand {
    SetVertexBuffers {
        start_slot: u32,
        buffers: Vec<Option<Arc<dyn Buffer>>>,
        offsets: Vec<u64>,
        mode: ResourceStateTransitionMode,
        flags: SetVertexBuffersFlags,
    },
    SetIndexBuffer {
        buffer: Arc<dyn Buffer>,
        offset: u64,
        mode: ResourceStateTransitionMode,
    },
}

#[derive(Debug, Default)]
pub struct MockDeviceContext {
    pub commands: Vec<ContextCommand>,
}

impl MockDeviceContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Mutex<MockDeviceContext>> {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn last_command(&self) -> Option<&ContextCommand> {
        self.commands.last()
    }
}

impl DeviceContext for MockDeviceContext {
    fn set_vertex_buffers(
        &mut self,
        start_slot: u32,
        buffers: &[Option<Arc<dyn Buffer>>],
        offsets: &[u64],
        mode: ResourceStateTransitionMode,
        flags: SetVertexBuffersFlags,
    ) {
        self.commands.push(ContextCommand::SetVertexBuffers {
            start_slot,
            buffers: buffers.to_vec(),
            offsets: offsets.to_vec(),
            mode,
            flags,
        });
    }

    fn set_index_buffer(&mut self, buffer: &Arc<dyn Buffer>, offset: u64, mode: ResourceStateTransitionMode) {
        self.commands.push(ContextCommand::SetIndexBuffer {
            buffer: buffer.clone(),
            offset,
            mode,
        });
    }
}

/// Binding configuration

/// Configuration shared by every binding built on top of the table parser
/// and the call argument parsers
#[derive(Debug, Clone)]
pub struct BindingConfig {
    /// Number of vertex buffer slots exposed by the device context
    pub max_vertex_buffer_slots: u32,
    /// Capacity (in bytes) of buffered string fields such as `Name`
    pub max_name_length: usize,
    /// Required size multiple for buffers bound as uniform buffers
    pub uniform_buffer_alignment: u32,
    /// Fail on table keys that no binding rule recognizes
    pub reject_unknown_keys: bool,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            max_vertex_buffer_slots: 32,
            max_name_length: 128,
            uniform_buffer_alignment: 16,
            reject_unknown_keys: false,
        }
    }
}

//! Buffer module - script bindings of engine buffers and their context calls

pub mod symbols;
pub mod call_args;
pub mod buffer_binding;

pub use symbols::BufferSymbols;
pub use call_args::{VertexBufferArgs, IndexBufferArgs, BUFFER_TYPE_NAME};
pub use buffer_binding::BufferBinding;

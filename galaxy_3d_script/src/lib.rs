/*!
# Galaxy 3D Script

Script bindings for Galaxy 3D engine buffers.

This crate lets an embedded scripting runtime create buffers from
declarative tables and bind them on a device context. Untyped script values
are translated into typed native descriptors, enums and bit flags, with every
violation reported against the script line that caused it.

## Architecture

- **script**: Values, call frames and call-site diagnostics exchanged with the runtime
- **binding**: Generic machinery (symbol maps, field binders, table parser, array loader)
- **device**: `RenderDevice`, `DeviceContext` and `Buffer` traits, plus a mock device
- **buffer**: The buffer binding (`Buffer.Create`, `Buffer.GetDesc`,
  `Context.SetVertexBuffers`, `Context.SetIndexBuffer`)
- **dispatch**: `ScriptLibrary`, the call boundary where errors are logged

## Example

```no_run
use std::sync::Arc;
use galaxy_3d_script::galaxy3d::{BindingConfig, Result};
use galaxy_3d_script::galaxy3d::buffer::BufferBinding;
use galaxy_3d_script::galaxy3d::device::mock_device::{MockDeviceContext, MockRenderDevice};
use galaxy_3d_script::galaxy3d::dispatch::ScriptLibrary;

fn setup() -> Result<ScriptLibrary> {
    let binding = Arc::new(BufferBinding::new(
        MockRenderDevice::shared(),
        MockDeviceContext::shared(),
        BindingConfig::default(),
    )?);
    let mut library = ScriptLibrary::new();
    binding.register(&mut library)?;
    Ok(library)
}
```
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod script;
pub mod binding;
pub mod device;
pub mod buffer;
pub mod dispatch;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Binding configuration
    pub use crate::config::BindingConfig;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Script value sub-module
    pub mod script {
        pub use crate::script::*;
    }

    // Generic binding machinery
    pub mod binding {
        pub use crate::binding::*;
    }

    // Native device interfaces
    pub mod device {
        pub use crate::device::*;
    }

    // Buffer bindings
    pub mod buffer {
        pub use crate::buffer::*;
    }

    // Script library dispatch
    pub mod dispatch {
        pub use crate::dispatch::*;
    }
}

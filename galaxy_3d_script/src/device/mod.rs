/// Device module - native interfaces consumed by the bindings

pub mod buffer;
pub mod device;
pub mod mock_device;

pub use buffer::*;
pub use device::*;

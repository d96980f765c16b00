//! Script runtime interface
//!
//! The values, call frames and diagnostics the bindings exchange with the
//! embedded scripting runtime.

pub mod value;
pub mod call_frame;
pub mod diagnostic;

pub use value::{ScriptValue, ScriptTable, UserData, ValueKind};
pub use call_frame::{CallFrame, ArgCursor};
pub use diagnostic::CallSite;

/// Diagnostic reporter
///
/// Script faults are reported against the call site the runtime was
/// executing (chunk, line, bound function) so the message points at the
/// script line, not at the binding.

use std::fmt::{self, Display, Write};
use crate::error::Error;

/// Location of a script call, as reported by the runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    chunk: String,
    line: u32,
    function: String,
}

impl CallSite {
    /// # Arguments
    ///
    /// * `chunk` - Script chunk name (usually the file name)
    /// * `line` - Current line in the chunk (0 if unknown)
    /// * `function` - Qualified bound function, e.g. "Context.SetIndexBuffer"
    pub fn new(chunk: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            chunk: chunk.into(),
            line,
            function: function.into(),
        }
    }

    /// Site for calls made from native code
    pub fn native(function: impl Into<String>) -> Self {
        Self::new("[native]", 0, function)
    }

    pub fn chunk(&self) -> &str {
        &self.chunk
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    /// Build a `ParseError` from heterogeneous message parts
    ///
    /// Parts are concatenated as-is, numbers and text interleaved:
    /// `site.fail(&[&"Start slot (", &-1, &" provided) must be in range 0..", &31])`
    pub fn fail(&self, parts: &[&dyn Display]) -> Error {
        Error::ParseError(format!("{}: {}", self, join_parts(parts)))
    }

    /// Same as `fail` but reported as a device failure
    pub fn device_failure(&self, parts: &[&dyn Display]) -> Error {
        Error::DeviceError(format!("{}: {}", self, join_parts(parts)))
    }
}

impl Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}()", self.chunk, self.line, self.function)
    }
}

fn join_parts(parts: &[&dyn Display]) -> String {
    let mut message = String::new();
    for part in parts {
        // Writing into a String cannot fail
        let _ = write!(message, "{}", part);
    }
    message
}

/// Comma separated vocabulary for "valid values are ..." messages
pub fn vocabulary<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().collect::<Vec<_>>().join(", ")
}

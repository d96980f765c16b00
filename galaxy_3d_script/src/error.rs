//! Error types for the Galaxy3D script bindings
//!
//! This module defines the error types used throughout the binding layer,
//! from binder construction to script argument parsing and device calls.

use std::fmt;

/// Result type for script binding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Script binding errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Binder registry or symbol map does not match the native types
    /// (fatal at startup)
    ConfigurationError(String),

    /// Bad, missing or out-of-range script input (recoverable at the
    /// script call boundary)
    ParseError(String),

    /// The device refused to create a resource or is unreachable
    DeviceError(String),
}

impl Error {
    /// Message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            Error::ConfigurationError(msg) => msg,
            Error::ParseError(msg) => msg,
            Error::DeviceError(msg) => msg,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            Error::ParseError(msg) => write!(f, "Parse error: {}", msg),
            Error::DeviceError(msg) => write!(f, "Device error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build a `ConfigurationError` and log it with file:line information
///
/// # Example
///
/// ```ignore
/// let err = config_err!("galaxy3d::script::SymbolMap", "Duplicate symbol '{}'", name);
/// ```
#[macro_export]
macro_rules! config_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::ConfigurationError(message)
    }};
}

/// Return early with a `ConfigurationError`
#[macro_export]
macro_rules! config_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::config_err!($source, $($arg)*))
    };
}

/// Return early with a `ParseError` built from heterogeneous message parts
///
/// Every part only needs to implement `Display`; parts are concatenated
/// without separators and prefixed with the call site.
///
/// # Example
///
/// ```ignore
/// script_bail!(site, "Buffer size (", size, ") is not a multiple of ", 16, ".");
/// ```
#[macro_export]
macro_rules! script_bail {
    ($site:expr, $($part:expr),+ $(,)?) => {
        return Err($site.fail(&[$(&$part as &dyn ::std::fmt::Display),+]))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

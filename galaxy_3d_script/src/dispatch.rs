/// Script library dispatch
///
/// Bound functions are registered under their qualified script name
/// ("Buffer.Create", "Context.SetIndexBuffer", ...). The embedding runtime
/// hands every call to `ScriptLibrary::call`, which is the single point
/// where failures are logged before being surfaced to the script caller.

use rustc_hash::FxHashMap;
use crate::config_bail;
use crate::error::Result;
use crate::script::call_frame::CallFrame;
use crate::script::value::ScriptValue;
use crate::{engine_error, engine_trace, script_bail};

/// Native function callable from scripts
pub type ScriptFunction = Box<dyn Fn(&CallFrame) -> Result<Vec<ScriptValue>> + Send + Sync>;

/// Registry of bound functions
#[derive(Default)]
pub struct ScriptLibrary {
    functions: FxHashMap<String, ScriptFunction>,
}

impl ScriptLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function
    ///
    /// # Arguments
    ///
    /// * `name` - Qualified script name (e.g., "Buffer.Create")
    /// * `function` - Native implementation
    pub fn register<F>(&mut self, name: &str, function: F) -> Result<()>
    where
        F: Fn(&CallFrame) -> Result<Vec<ScriptValue>> + Send + Sync + 'static,
    {
        if self.functions.contains_key(name) {
            config_bail!("galaxy3d::script::ScriptLibrary",
                "Script function '{}' is registered twice", name);
        }
        self.functions.insert(name.to_string(), Box::new(function));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names, sorted
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run the function named by the frame's call site
    ///
    /// # Returns
    ///
    /// The values returned to the script, or the error raised to it
    pub fn call(&self, frame: &CallFrame) -> Result<Vec<ScriptValue>> {
        let site = frame.site();
        engine_trace!("galaxy3d::script::ScriptLibrary", "{} with {} argument(s)", site, frame.len());

        let result = match self.functions.get(site.function()) {
            Some(function) => function(frame),
            None => unknown_function(frame),
        };

        if let Err(err) = &result {
            engine_error!("galaxy3d::script::ScriptLibrary", "{}", err);
        }
        result
    }
}

fn unknown_function(frame: &CallFrame) -> Result<Vec<ScriptValue>> {
    script_bail!(frame.site(), "Unknown script function '", frame.site().function(), "'")
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;

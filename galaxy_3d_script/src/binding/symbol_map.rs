/// Bidirectional symbol maps for enums and flag sets
///
/// Each native enum or flag type exposed to scripts gets one map from its
/// script name (e.g. "BUFFER_MODE_RAW") to its value and back. Maps are
/// built once while a binding is constructed and are read-only afterwards.

use std::fmt::Debug;
use std::hash::Hash;
use rustc_hash::FxHashMap;
use crate::config_bail;
use crate::error::Result;
use crate::script::diagnostic::{CallSite, vocabulary};
use crate::script_bail;

/// Name <-> value table for one enum or flag type
#[derive(Debug, Clone)]
pub struct SymbolMap<T> {
    type_name: &'static str,
    // Definition order, used for stable vocabulary listings
    names: Vec<&'static str>,
    str_to_val: FxHashMap<&'static str, T>,
    val_to_str: FxHashMap<T, &'static str>,
}

impl<T> SymbolMap<T>
where
    T: Copy + Eq + Hash + Debug,
{
    /// Create an empty map for the given native type name
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            names: Vec::new(),
            str_to_val: FxHashMap::default(),
            val_to_str: FxHashMap::default(),
        }
    }

    /// Add one element in both directions
    ///
    /// Reusing a name or a value is binder drift and fails with a
    /// `ConfigurationError`.
    pub fn define(mut self, name: &'static str, value: T) -> Result<Self> {
        if self.str_to_val.contains_key(name) {
            config_bail!("galaxy3d::script::SymbolMap",
                "{}: symbol '{}' is defined twice", self.type_name, name);
        }
        if let Some(existing) = self.val_to_str.get(&value) {
            config_bail!("galaxy3d::script::SymbolMap",
                "{}: '{}' and '{}' map to the same value {:?}", self.type_name, existing, name, value);
        }
        self.names.push(name);
        self.str_to_val.insert(name, value);
        self.val_to_str.insert(value, name);
        Ok(self)
    }

    /// Verify the map covers exactly `expected` native values
    ///
    /// Catches a native enum that grew (or shrank) without the binder
    /// being updated.
    pub fn expect_cardinality(self, expected: usize) -> Result<Self> {
        if self.str_to_val.len() != expected || self.val_to_str.len() != expected {
            config_bail!("galaxy3d::script::SymbolMap",
                "Unexpected {} map size ({} symbols, {} expected). Did the {} enum change?",
                self.type_name, self.str_to_val.len(), expected, self.type_name);
        }
        Ok(self)
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in definition order
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn get(&self, name: &str) -> Option<T> {
        self.str_to_val.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.str_to_val.contains_key(name)
    }

    pub fn name_of(&self, value: T) -> Option<&'static str> {
        self.val_to_str.get(&value).copied()
    }

    /// Look a symbol up, failing with the list of valid names
    pub fn value_of(&self, name: &str, site: &CallSite, field: &str) -> Result<T> {
        match self.get(name) {
            Some(value) => Ok(value),
            None => script_bail!(site, "Unknown ", self.type_name, " value '", name,
                "' for ", field, ". Valid values are: ", vocabulary(self.names.iter().copied())),
        }
    }
}

#[cfg(test)]
#[path = "symbol_map_tests.rs"]
mod tests;

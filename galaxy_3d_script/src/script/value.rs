/// Script value model
///
/// The narrow view of the embedded runtime's values the bindings consume:
/// nil, booleans, integers, numbers, text, tables and opaque userdata
/// handles. Tables keep an array part (1-based sequence) and a keyed part.

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use rustc_hash::FxHashMap;

// ===== VALUE KIND =====

/// Dynamic type of a script value, used in diagnostics and type sniffing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Nil,
    Boolean,
    Integer,
    Number,
    Text,
    Table,
    UserData,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Nil => "nil",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Number => "number",
            ValueKind::Text => "string",
            ValueKind::Table => "table",
            ValueKind::UserData => "userdata",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ===== USER DATA =====

/// Opaque native object surfaced to scripts
///
/// The type name plays the role of the runtime's metatable name: a handle
/// is only accepted where that exact type is expected.
#[derive(Clone)]
pub struct UserData {
    type_name: &'static str,
    object: Arc<dyn Any + Send + Sync>,
}

impl UserData {
    pub fn new<T: Any + Send + Sync>(type_name: &'static str, object: T) -> Self {
        Self {
            type_name,
            object: Arc::new(object),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Borrow the native object if it has the requested type name and Rust type
    pub fn downcast_ref<T: Any>(&self, type_name: &str) -> Option<&T> {
        if self.type_name != type_name {
            return None;
        }
        self.object.downcast_ref::<T>()
    }

    /// True if both handles refer to the same native object
    pub fn ptr_eq(&self, other: &UserData) -> bool {
        Arc::ptr_eq(&self.object, &other.object)
    }
}

impl fmt::Debug for UserData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserData({} @ {:p})", self.type_name, Arc::as_ptr(&self.object))
    }
}

// ===== TABLE =====

/// Script table: a sequence part plus string-keyed fields
#[derive(Debug, Clone, Default)]
pub struct ScriptTable {
    array: Vec<ScriptValue>,
    fields: FxHashMap<String, ScriptValue>,
}

impl ScriptTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pure sequence table (`{a, b, c}`)
    pub fn sequence<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ScriptValue>,
    {
        Self {
            array: items.into_iter().map(Into::into).collect(),
            fields: FxHashMap::default(),
        }
    }

    /// Builder-style keyed insert
    pub fn with(mut self, key: &str, value: impl Into<ScriptValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a keyed field; assigning nil removes the key
    pub fn set(&mut self, key: &str, value: impl Into<ScriptValue>) {
        let value = value.into();
        if value.is_nil() {
            self.fields.remove(key);
        } else {
            self.fields.insert(key.to_string(), value);
        }
    }

    /// Append to the sequence part
    pub fn push(&mut self, value: impl Into<ScriptValue>) {
        self.array.push(value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ScriptValue> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn array(&self) -> &[ScriptValue] {
        &self.array
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty() && self.fields.is_empty()
    }
}

// ===== VALUE =====

/// A loosely typed script value
#[derive(Debug, Clone, Default)]
pub enum ScriptValue {
    #[default]
    Nil,
    Boolean(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    Table(ScriptTable),
    UserData(UserData),
}

impl ScriptValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ScriptValue::Nil => ValueKind::Nil,
            ScriptValue::Boolean(_) => ValueKind::Boolean,
            ScriptValue::Integer(_) => ValueKind::Integer,
            ScriptValue::Number(_) => ValueKind::Number,
            ScriptValue::Text(_) => ValueKind::Text,
            ScriptValue::Table(_) => ValueKind::Table,
            ScriptValue::UserData(_) => ValueKind::UserData,
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, ScriptValue::Nil)
    }

    /// Integers and floats both count as numbers
    pub fn is_number(&self) -> bool {
        matches!(self, ScriptValue::Integer(_) | ScriptValue::Number(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ScriptValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&ScriptTable> {
        match self {
            ScriptValue::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_user_data(&self) -> Option<&UserData> {
        match self {
            ScriptValue::UserData(data) => Some(data),
            _ => None,
        }
    }

    /// Integer view of a number; floats qualify only when they hold an
    /// exact integral value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ScriptValue::Integer(value) => Some(*value),
            ScriptValue::Number(value)
                if value.fract() == 0.0 && *value >= i64::MIN as f64 && *value <= i64::MAX as f64 =>
            {
                Some(*value as i64)
            }
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScriptValue::Integer(value) => Some(*value as f64),
            ScriptValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

/// Short rendering for diagnostics (`"FOO"`, `42`, `table`, `Buffer`)
impl fmt::Display for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptValue::Nil => write!(f, "nil"),
            ScriptValue::Boolean(value) => write!(f, "{}", value),
            ScriptValue::Integer(value) => write!(f, "{}", value),
            ScriptValue::Number(value) => write!(f, "{}", value),
            ScriptValue::Text(text) => write!(f, "\"{}\"", text),
            ScriptValue::Table(_) => write!(f, "table"),
            ScriptValue::UserData(data) => write!(f, "{}", data.type_name()),
        }
    }
}

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self { ScriptValue::Boolean(value) }
}

impl From<i32> for ScriptValue {
    fn from(value: i32) -> Self { ScriptValue::Integer(value as i64) }
}

impl From<i64> for ScriptValue {
    fn from(value: i64) -> Self { ScriptValue::Integer(value) }
}

impl From<u32> for ScriptValue {
    fn from(value: u32) -> Self { ScriptValue::Integer(value as i64) }
}

impl From<f32> for ScriptValue {
    fn from(value: f32) -> Self { ScriptValue::Number(value as f64) }
}

impl From<f64> for ScriptValue {
    fn from(value: f64) -> Self { ScriptValue::Number(value) }
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self { ScriptValue::Text(value.to_string()) }
}

impl From<String> for ScriptValue {
    fn from(value: String) -> Self { ScriptValue::Text(value) }
}

impl From<ScriptTable> for ScriptValue {
    fn from(value: ScriptTable) -> Self { ScriptValue::Table(value) }
}

impl From<UserData> for ScriptValue {
    fn from(value: UserData) -> Self { ScriptValue::UserData(value) }
}

impl<T: Into<ScriptValue>> From<Option<T>> for ScriptValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ScriptValue::Nil)
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;

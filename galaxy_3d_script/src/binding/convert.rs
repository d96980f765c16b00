/// Conversions between script values and native field types
///
/// Scalars convert directly with a type and range check; enums and flag
/// sets go through their `SymbolMap`.

use std::fmt::Debug;
use std::hash::Hash;
use crate::binding::symbol_map::SymbolMap;
use crate::device::{BindFlags, CpuAccessFlags, SetVertexBuffersFlags};
use crate::error::Result;
use crate::script::diagnostic::CallSite;
use crate::script::value::{ScriptTable, ScriptValue};
use crate::script_bail;

// ===== SCALARS =====

/// Native scalar that can be read from (and written back to) a script value
pub trait ScalarField: Sized + Send + Sync + 'static {
    /// Human readable expectation for diagnostics
    const EXPECTED: &'static str;

    /// Convert, or return `None` if the value has the wrong type or range
    fn from_script(value: &ScriptValue) -> Option<Self>;

    fn to_script(&self) -> ScriptValue;
}

macro_rules! impl_integer_scalar {
    ($($ty:ty => $expected:expr),+ $(,)?) => {$(
        impl ScalarField for $ty {
            const EXPECTED: &'static str = $expected;

            fn from_script(value: &ScriptValue) -> Option<Self> {
                value.as_integer().and_then(|integer| <$ty>::try_from(integer).ok())
            }

            fn to_script(&self) -> ScriptValue {
                ScriptValue::Integer(i64::try_from(*self).unwrap_or(i64::MAX))
            }
        }
    )+};
}

impl_integer_scalar! {
    u8 => "an integer in range 0..255",
    u32 => "an integer in range 0..4294967295",
    i32 => "an integer in range -2147483648..2147483647",
    u64 => "a non-negative integer",
}

impl ScalarField for f32 {
    const EXPECTED: &'static str = "a number";

    fn from_script(value: &ScriptValue) -> Option<Self> {
        value.as_number().map(|number| number as f32)
    }

    fn to_script(&self) -> ScriptValue {
        ScriptValue::Number(*self as f64)
    }
}

impl ScalarField for bool {
    const EXPECTED: &'static str = "a boolean";

    fn from_script(value: &ScriptValue) -> Option<Self> {
        match value {
            ScriptValue::Boolean(flag) => Some(*flag),
            _ => None,
        }
    }

    fn to_script(&self) -> ScriptValue {
        ScriptValue::Boolean(*self)
    }
}

impl ScalarField for String {
    const EXPECTED: &'static str = "a string";

    fn from_script(value: &ScriptValue) -> Option<Self> {
        value.as_text().map(str::to_string)
    }

    fn to_script(&self) -> ScriptValue {
        ScriptValue::Text(self.clone())
    }
}

/// Read a scalar, failing with the field name and the expected type
pub fn parse_scalar<T: ScalarField>(value: &ScriptValue, site: &CallSite, field: &str) -> Result<T> {
    match T::from_script(value) {
        Some(scalar) => Ok(scalar),
        None => script_bail!(site, "Invalid value ", value, " (", value.kind(), ") for ", field,
            ": expected ", T::EXPECTED),
    }
}

// ===== ENUMS =====

/// Native enum exposed to scripts by name
pub trait EnumValue: Copy + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T: Copy + Eq + Hash + Debug + Send + Sync + 'static> EnumValue for T {}

/// Read a single enum symbol
pub fn parse_enum<E: EnumValue>(
    value: &ScriptValue,
    map: &SymbolMap<E>,
    site: &CallSite,
    field: &str,
) -> Result<E> {
    match value {
        ScriptValue::Text(name) => map.value_of(name, site, field),
        other => script_bail!(site, field, " must be a string naming a ", map.type_name(),
            " value, ", other.kind(), " provided"),
    }
}

pub fn enum_to_script<E: EnumValue>(value: E, map: &SymbolMap<E>) -> ScriptValue {
    map.name_of(value).map(ScriptValue::from).unwrap_or(ScriptValue::Nil)
}

// ===== FLAG SETS =====

/// Native bit-flag set exposed to scripts by flag names
pub trait FlagSet: EnumValue {
    /// Flags from raw bits; `None` if any bit is undefined
    fn from_raw(raw: u64) -> Option<Self>;

    fn raw(self) -> u64;

    fn empty() -> Self;

    fn union(self, other: Self) -> Self {
        Self::from_raw(self.raw() | other.raw()).unwrap_or(self)
    }

    fn contains(self, other: Self) -> bool {
        self.raw() & other.raw() == other.raw()
    }
}

macro_rules! impl_flag_set {
    ($($ty:ty),+ $(,)?) => {$(
        impl FlagSet for $ty {
            fn from_raw(raw: u64) -> Option<Self> {
                u32::try_from(raw).ok().and_then(<$ty>::from_bits)
            }

            fn raw(self) -> u64 {
                self.bits() as u64
            }

            fn empty() -> Self {
                <$ty>::empty()
            }
        }
    )+};
}

impl_flag_set!(BindFlags, CpuAccessFlags, SetVertexBuffersFlags);

/// Read a flag set given as one name, a sequence of names or raw bits
///
/// Names are OR-combined.
pub fn parse_flags<F: FlagSet>(
    value: &ScriptValue,
    map: &SymbolMap<F>,
    site: &CallSite,
    field: &str,
) -> Result<F> {
    match value {
        ScriptValue::Text(name) => map.value_of(name, site, field),
        ScriptValue::Table(table) => {
            if table.field_count() > 0 {
                script_bail!(site, field, " must be a list of ", map.type_name(),
                    " names; keyed entries are not allowed");
            }
            let mut flags = F::empty();
            for (index, item) in table.array().iter().enumerate() {
                let Some(name) = item.as_text() else {
                    script_bail!(site, field, "[", index + 1, "] must be a string naming a ",
                        map.type_name(), " value, ", item.kind(), " provided");
                };
                flags = flags.union(map.value_of(name, site, field)?);
            }
            Ok(flags)
        }
        ScriptValue::Integer(_) | ScriptValue::Number(_) => {
            let raw = value.as_integer().filter(|raw| *raw >= 0);
            match raw.and_then(|raw| F::from_raw(raw as u64)) {
                Some(flags) => Ok(flags),
                None => script_bail!(site, "Invalid ", map.type_name(), " bits ", value,
                    " for ", field),
            }
        }
        other => script_bail!(site, field, " must be a flag name, a list of flag names or an integer, ",
            other.kind(), " provided"),
    }
}

/// Flags as the list of their names (empty list for no flags)
pub fn flags_to_script<F: FlagSet>(flags: F, map: &SymbolMap<F>) -> ScriptValue {
    let mut names = ScriptTable::new();
    for name in map.names() {
        if let Some(flag) = map.get(name) {
            if flag.raw() != 0 && flags.contains(flag) {
                names.push(*name);
            }
        }
    }
    ScriptValue::Table(names)
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;

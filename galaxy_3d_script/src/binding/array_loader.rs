/// Initial-data array loader
///
/// Turns a `(valueType, {v1, v2, ...})` pair from a script into the raw
/// byte payload a device expects. Every element is range checked against
/// the value type before anything is packed.

use bytemuck::Pod;
use crate::binding::symbol_map::SymbolMap;
use crate::error::Result;
use crate::script::diagnostic::CallSite;
use crate::script::value::ScriptValue;
use crate::script_bail;

/// Element type of an initial-data array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int8,
    Int16,
    Int32,
    UInt8,
    UInt16,
    UInt32,
    Float32,
}

impl ValueType {
    pub const COUNT: usize = 7;

    pub const ALL: [ValueType; Self::COUNT] = [
        ValueType::Int8,
        ValueType::Int16,
        ValueType::Int32,
        ValueType::UInt8,
        ValueType::UInt16,
        ValueType::UInt32,
        ValueType::Float32,
    ];

    /// Name scripts use for this type
    pub fn script_name(&self) -> &'static str {
        match self {
            ValueType::Int8 => "VT_INT8",
            ValueType::Int16 => "VT_INT16",
            ValueType::Int32 => "VT_INT32",
            ValueType::UInt8 => "VT_UINT8",
            ValueType::UInt16 => "VT_UINT16",
            ValueType::UInt32 => "VT_UINT32",
            ValueType::Float32 => "VT_FLOAT32",
        }
    }

    /// Size of one packed element in bytes
    pub fn element_size(&self) -> usize {
        match self {
            ValueType::Int8 | ValueType::UInt8 => 1,
            ValueType::Int16 | ValueType::UInt16 => 2,
            ValueType::Int32 | ValueType::UInt32 | ValueType::Float32 => 4,
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            ValueType::Int8 => "an integer in range -128..127",
            ValueType::Int16 => "an integer in range -32768..32767",
            ValueType::Int32 => "an integer in range -2147483648..2147483647",
            ValueType::UInt8 => "an integer in range 0..255",
            ValueType::UInt16 => "an integer in range 0..65535",
            ValueType::UInt32 => "an integer in range 0..4294967295",
            ValueType::Float32 => "a number within the 32-bit float range",
        }
    }
}

/// Script names of every `ValueType`
pub fn value_type_map() -> Result<SymbolMap<ValueType>> {
    let mut map = SymbolMap::new("VALUE_TYPE");
    for value_type in ValueType::ALL {
        map = map.define(value_type.script_name(), value_type)?;
    }
    map.expect_cardinality(ValueType::COUNT)
}

/// Pack a script array into little-endian bytes
///
/// # Arguments
///
/// * `value_type` - Element type every entry must fit in
/// * `value` - Sequence table of numbers
/// * `site` - Call site used in diagnostics
///
/// # Returns
///
/// The packed payload (empty for an empty array)
pub fn load_array(value_type: ValueType, value: &ScriptValue, site: &CallSite) -> Result<Vec<u8>> {
    let Some(table) = value.as_table() else {
        script_bail!(site, "Initial data must be an array of values, ", value.kind(), " provided");
    };
    if table.field_count() > 0 {
        script_bail!(site, "Initial data must be an array of values; keyed entries are not allowed");
    }

    let items = table.array();
    match value_type {
        ValueType::Int8 => pack(items, value_type, site, |v| integer::<i8>(v).map(i8::to_le)),
        ValueType::Int16 => pack(items, value_type, site, |v| integer::<i16>(v).map(i16::to_le)),
        ValueType::Int32 => pack(items, value_type, site, |v| integer::<i32>(v).map(i32::to_le)),
        ValueType::UInt8 => pack(items, value_type, site, integer::<u8>),
        ValueType::UInt16 => pack(items, value_type, site, |v| integer::<u16>(v).map(u16::to_le)),
        ValueType::UInt32 => pack(items, value_type, site, |v| integer::<u32>(v).map(u32::to_le)),
        // Floats travel as their bit pattern so the byte order is explicit
        ValueType::Float32 => pack(items, value_type, site, |v| {
            float32(v).map(|number| number.to_bits().to_le())
        }),
    }
}

fn integer<T: TryFrom<i64>>(value: &ScriptValue) -> Option<T> {
    value.as_integer().and_then(|integer| T::try_from(integer).ok())
}

/// Finite numbers must stay finite once narrowed; inf and nan pass through
fn float32(value: &ScriptValue) -> Option<f32> {
    let number = value.as_number()?;
    let narrowed = number as f32;
    (narrowed.is_finite() || !number.is_finite()).then_some(narrowed)
}

fn pack<T: Pod>(
    items: &[ScriptValue],
    value_type: ValueType,
    site: &CallSite,
    convert: impl Fn(&ScriptValue) -> Option<T>,
) -> Result<Vec<u8>> {
    let mut elements = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match convert(item) {
            Some(element) => elements.push(element),
            None => script_bail!(site, "Initial data[", index + 1, "] (", item.kind(), " ", item,
                ") does not fit ", value_type.script_name(), ": expected ", value_type.expected()),
        }
    }
    Ok(bytemuck::cast_slice::<T, u8>(&elements).to_vec())
}

#[cfg(test)]
#[path = "array_loader_tests.rs"]
mod tests;

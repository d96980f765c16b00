use super::*;
use crate::error::Error;
use crate::script::value::ScriptTable;

fn site() -> CallSite {
    CallSite::new("mesh.lua", 21, "Buffer.Create")
}

fn array<V: Into<ScriptValue>>(items: impl IntoIterator<Item = V>) -> ScriptValue {
    ScriptValue::from(ScriptTable::sequence(items))
}

#[test]
fn test_value_type_map_covers_every_type() {
    let map = value_type_map().unwrap();
    assert_eq!(map.len(), ValueType::COUNT);
    assert_eq!(map.get("VT_UINT16"), Some(ValueType::UInt16));
    assert_eq!(map.name_of(ValueType::Float32), Some("VT_FLOAT32"));
}

#[test]
fn test_element_sizes() {
    assert_eq!(ValueType::Int8.element_size(), 1);
    assert_eq!(ValueType::UInt16.element_size(), 2);
    assert_eq!(ValueType::Float32.element_size(), 4);
}

#[test]
fn test_load_uint16_little_endian() {
    let bytes = load_array(ValueType::UInt16, &array([1, 0x0203]), &site()).unwrap();
    assert_eq!(bytes, vec![0x01, 0x00, 0x03, 0x02]);
}

#[test]
fn test_load_int8_negative() {
    let bytes = load_array(ValueType::Int8, &array([-1, 127]), &site()).unwrap();
    assert_eq!(bytes, vec![0xFF, 0x7F]);
}

#[test]
fn test_load_float32() {
    let bytes = load_array(ValueType::Float32, &array([1.0, -2.5]), &site()).unwrap();
    let mut expected = 1.0f32.to_le_bytes().to_vec();
    expected.extend_from_slice(&(-2.5f32).to_le_bytes());
    assert_eq!(bytes, expected);
}

#[test]
fn test_float32_accepts_integers() {
    let bytes = load_array(ValueType::Float32, &array([3]), &site()).unwrap();
    assert_eq!(bytes, 3.0f32.to_le_bytes().to_vec());
}

#[test]
fn test_float32_overflow_rejected() {
    let err = load_array(ValueType::Float32, &array([1.0, 1e300]), &site()).unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
    assert!(err.message().contains("Initial data[2]"));
    assert!(err.message().contains("does not fit VT_FLOAT32"));
}

#[test]
fn test_float32_keeps_explicit_infinity() {
    let bytes = load_array(ValueType::Float32, &array([f64::INFINITY]), &site()).unwrap();
    assert_eq!(bytes, f32::INFINITY.to_le_bytes().to_vec());
}

#[test]
fn test_empty_array_gives_empty_payload() {
    let bytes = load_array(ValueType::UInt32, &array(Vec::<i64>::new()), &site()).unwrap();
    assert!(bytes.is_empty());
}

#[test]
fn test_out_of_range_element_is_reported_with_index() {
    let err = load_array(ValueType::UInt8, &array([1, 2, 256]), &site()).unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
    assert!(err.message().contains("Initial data[3] (integer 256) does not fit VT_UINT8"));
    assert!(err.message().contains("0..255"));
}

#[test]
fn test_fractional_value_rejected_for_integer_types() {
    assert!(load_array(ValueType::Int32, &array([1.5]), &site()).is_err());
}

#[test]
fn test_non_numeric_element_rejected() {
    let err = load_array(ValueType::Float32, &array(["x"]), &site()).unwrap_err();
    assert!(err.message().contains("Initial data[1] (string \"x\")"));
}

#[test]
fn test_non_table_rejected() {
    let err = load_array(ValueType::UInt32, &ScriptValue::from(4), &site()).unwrap_err();
    assert!(err.message().contains("Initial data must be an array of values, integer provided"));
}

#[test]
fn test_keyed_table_rejected() {
    let value = ScriptValue::from(ScriptTable::new().with("a", 1));
    let err = load_array(ValueType::UInt32, &value, &site()).unwrap_err();
    assert!(err.message().contains("keyed entries are not allowed"));
}

use super::*;
use crate::error::Error;

fn site() -> CallSite {
    CallSite::new("convert.lua", 2, "Buffer.Create")
}

fn bind_flag_map() -> SymbolMap<BindFlags> {
    SymbolMap::new("BIND_FLAGS")
        .define("BIND_VERTEX_BUFFER", BindFlags::VERTEX_BUFFER).unwrap()
        .define("BIND_INDEX_BUFFER", BindFlags::INDEX_BUFFER).unwrap()
        .define("BIND_UNIFORM_BUFFER", BindFlags::UNIFORM_BUFFER).unwrap()
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn test_parse_u32_scalar() {
    let value: u32 = parse_scalar(&ScriptValue::from(256), &site(), "SizeInBytes").unwrap();
    assert_eq!(value, 256);

    let value: u32 = parse_scalar(&ScriptValue::from(64.0), &site(), "SizeInBytes").unwrap();
    assert_eq!(value, 64);
}

#[test]
fn test_parse_u32_rejects_negative_and_fractional() {
    let err = parse_scalar::<u32>(&ScriptValue::from(-1), &site(), "SizeInBytes").unwrap_err();
    assert!(matches!(err, Error::ParseError(_)));
    assert!(err.message().contains("SizeInBytes"));
    assert!(err.message().contains("expected an integer in range 0..4294967295"));

    assert!(parse_scalar::<u32>(&ScriptValue::from(1.5), &site(), "SizeInBytes").is_err());
    assert!(parse_scalar::<u32>(&ScriptValue::from(5_000_000_000i64), &site(), "SizeInBytes").is_err());
}

#[test]
fn test_parse_u32_rejects_text() {
    let err = parse_scalar::<u32>(&ScriptValue::from("256"), &site(), "SizeInBytes").unwrap_err();
    assert!(err.message().contains("Invalid value \"256\" (string)"));
}

#[test]
fn test_other_scalars() {
    assert_eq!(parse_scalar::<i32>(&ScriptValue::from(-7), &site(), "f").unwrap(), -7);
    assert_eq!(parse_scalar::<f32>(&ScriptValue::from(3), &site(), "f").unwrap(), 3.0);
    assert!(parse_scalar::<bool>(&ScriptValue::from(true), &site(), "f").unwrap());
    assert!(parse_scalar::<bool>(&ScriptValue::from(1), &site(), "f").is_err());
    assert_eq!(parse_scalar::<String>(&ScriptValue::from("vb"), &site(), "f").unwrap(), "vb");
}

#[test]
fn test_scalar_to_script() {
    assert_eq!(42u32.to_script().as_integer(), Some(42));
    assert_eq!(1.5f32.to_script().as_number(), Some(1.5));
    assert_eq!("n".to_string().to_script().as_text(), Some("n"));
}

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Mode {
    A,
    B,
}

fn mode_map() -> SymbolMap<Mode> {
    SymbolMap::new("MODE")
        .define("MODE_A", Mode::A).unwrap()
        .define("MODE_B", Mode::B).unwrap()
}

#[test]
fn test_parse_enum() {
    let map = mode_map();
    assert_eq!(parse_enum(&ScriptValue::from("MODE_B"), &map, &site(), "Mode").unwrap(), Mode::B);
}

#[test]
fn test_parse_enum_requires_text() {
    let map = mode_map();
    let err = parse_enum(&ScriptValue::from(1), &map, &site(), "Mode").unwrap_err();
    assert!(err.message().contains("Mode must be a string naming a MODE value, integer provided"));
}

#[test]
fn test_enum_to_script() {
    let map = mode_map();
    assert_eq!(enum_to_script(Mode::A, &map).as_text(), Some("MODE_A"));
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn test_parse_flags_single_name() {
    let map = bind_flag_map();
    let flags = parse_flags(&ScriptValue::from("BIND_UNIFORM_BUFFER"), &map, &site(), "BindFlags").unwrap();
    assert_eq!(flags, BindFlags::UNIFORM_BUFFER);
}

#[test]
fn test_parse_flags_list_is_or_combined() {
    let map = bind_flag_map();
    let value = ScriptValue::from(ScriptTable::sequence(["BIND_VERTEX_BUFFER", "BIND_INDEX_BUFFER"]));
    let flags = parse_flags(&value, &map, &site(), "BindFlags").unwrap();
    assert_eq!(flags, BindFlags::VERTEX_BUFFER | BindFlags::INDEX_BUFFER);
}

#[test]
fn test_parse_flags_empty_list() {
    let map = bind_flag_map();
    let value = ScriptValue::from(ScriptTable::new());
    assert!(parse_flags(&value, &map, &site(), "BindFlags").unwrap().is_empty());
}

#[test]
fn test_parse_flags_raw_integer() {
    let map = bind_flag_map();
    let flags = parse_flags(&ScriptValue::from(0x5), &map, &site(), "BindFlags").unwrap();
    assert_eq!(flags, BindFlags::VERTEX_BUFFER | BindFlags::UNIFORM_BUFFER);

    let err = parse_flags(&ScriptValue::from(0x20), &map, &site(), "BindFlags").unwrap_err();
    assert!(err.message().contains("Invalid BIND_FLAGS bits 32"));
    assert!(parse_flags(&ScriptValue::from(-1), &map, &site(), "BindFlags").is_err());
}

#[test]
fn test_parse_flags_unknown_name_in_list() {
    let map = bind_flag_map();
    let value = ScriptValue::from(ScriptTable::sequence(["BIND_VERTEX_BUFFER", "BIND_RENDER_TARGET"]));
    let err = parse_flags(&value, &map, &site(), "BindFlags").unwrap_err();
    assert!(err.message().contains("'BIND_RENDER_TARGET'"));
}

#[test]
fn test_parse_flags_list_with_non_text_entry() {
    let map = bind_flag_map();
    let mut table = ScriptTable::sequence(["BIND_VERTEX_BUFFER"]);
    table.push(4);
    let err = parse_flags(&ScriptValue::from(table), &map, &site(), "BindFlags").unwrap_err();
    assert!(err.message().contains("BindFlags[2] must be a string"));
}

#[test]
fn test_parse_flags_rejects_boolean() {
    let map = bind_flag_map();
    assert!(parse_flags(&ScriptValue::from(true), &map, &site(), "BindFlags").is_err());
}

#[test]
fn test_flags_to_script_lists_names_in_definition_order() {
    let map = bind_flag_map();
    let value = flags_to_script(BindFlags::UNIFORM_BUFFER | BindFlags::VERTEX_BUFFER, &map);
    let names: Vec<_> = value.as_table().unwrap().array().iter()
        .map(|name| name.as_text().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["BIND_VERTEX_BUFFER", "BIND_UNIFORM_BUFFER"]);
}

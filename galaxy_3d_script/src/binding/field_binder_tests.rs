use super::*;
use crate::device::CpuAccessFlags;
use crate::error::Error;
use crate::field_access;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
enum Filter {
    #[default]
    Point,
    Linear,
}

#[derive(Debug, Default)]
struct SamplerDesc {
    name: String,
    max_anisotropy: u32,
    filter: Filter,
    access: CpuAccessFlags,
}

fn filter_map() -> Arc<SymbolMap<Filter>> {
    Arc::new(SymbolMap::new("FILTER_TYPE")
        .define("FILTER_TYPE_POINT", Filter::Point).unwrap()
        .define("FILTER_TYPE_LINEAR", Filter::Linear).unwrap())
}

fn access_map() -> Arc<SymbolMap<CpuAccessFlags>> {
    Arc::new(SymbolMap::new("CPU_ACCESS_FLAGS")
        .define("CPU_ACCESS_READ", CpuAccessFlags::READ).unwrap()
        .define("CPU_ACCESS_WRITE", CpuAccessFlags::WRITE).unwrap())
}

fn registry() -> BinderRegistry<SamplerDesc> {
    let mut registry = BinderRegistry::new("SamplerDesc");
    registry
        .register_buffered_string("Name", 8, field_access!(SamplerDesc, name)).unwrap()
        .register_scalar("MaxAnisotropy", field_access!(SamplerDesc, max_anisotropy)).unwrap()
        .register_enum("Filter", field_access!(SamplerDesc, filter), filter_map()).unwrap()
        .register_flags("Access", field_access!(SamplerDesc, access), access_map()).unwrap();
    registry
}

fn site() -> CallSite {
    CallSite::new("binder.lua", 9, "Sampler.Create")
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_rules_keep_registration_order() {
    let registry = registry();
    let keys: Vec<_> = registry.rules().iter().map(BindingRule::key).collect();
    assert_eq!(keys, vec!["Name", "MaxAnisotropy", "Filter", "Access"]);
    assert_eq!(registry.len(), 4);
    assert!(registry.contains_key("Filter"));
    assert!(!registry.contains_key("filter"));
}

#[test]
fn test_rule_kinds() {
    let registry = registry();
    let kinds: Vec<_> = registry.rules().iter().map(BindingRule::kind).collect();
    assert_eq!(kinds, vec![
        RuleKind::BufferedString { max_len: 8 },
        RuleKind::Scalar,
        RuleKind::Enum,
        RuleKind::Flags,
    ]);
}

#[test]
fn test_duplicate_key_is_configuration_error() {
    let mut registry = registry();
    let result = registry.register_scalar("MaxAnisotropy", field_access!(SamplerDesc, max_anisotropy));
    assert!(matches!(result, Err(Error::ConfigurationError(_))));
    assert_eq!(registry.len(), 4);
}

// ============================================================================
// Rule application
// ============================================================================

#[test]
fn test_apply_each_kind() {
    let registry = registry();
    let mut desc = SamplerDesc::default();
    let values = [
        ScriptValue::from("linear"),
        ScriptValue::from(16),
        ScriptValue::from("FILTER_TYPE_LINEAR"),
        ScriptValue::from(ScriptTable::sequence(["CPU_ACCESS_READ", "CPU_ACCESS_WRITE"])),
    ];

    for (rule, value) in registry.rules().iter().zip(values.iter()) {
        rule.apply(&mut desc, value, &site()).unwrap();
    }

    assert_eq!(desc.name, "linear");
    assert_eq!(desc.max_anisotropy, 16);
    assert_eq!(desc.filter, Filter::Linear);
    assert_eq!(desc.access, CpuAccessFlags::READ | CpuAccessFlags::WRITE);
}

#[test]
fn test_buffered_string_capacity() {
    let registry = registry();
    let rule = &registry.rules()[0];
    let mut desc = SamplerDesc::default();

    rule.apply(&mut desc, &ScriptValue::from("12345678"), &site()).unwrap();
    assert_eq!(desc.name, "12345678");

    let err = rule.apply(&mut desc, &ScriptValue::from("123456789"), &site()).unwrap_err();
    assert!(err.message().contains("Name is too long (9 bytes)"));
    assert_eq!(desc.name, "12345678");
}

#[test]
fn test_buffered_string_requires_text() {
    let registry = registry();
    let mut desc = SamplerDesc::default();
    let err = registry.rules()[0].apply(&mut desc, &ScriptValue::from(3), &site()).unwrap_err();
    assert!(err.message().contains("Name must be a string, integer provided"));
}

// ============================================================================
// Read back
// ============================================================================

#[test]
fn test_write_table() {
    let registry = registry();
    let desc = SamplerDesc {
        name: "s0".to_string(),
        max_anisotropy: 4,
        filter: Filter::Linear,
        access: CpuAccessFlags::WRITE,
    };

    let table = registry.write_table(&desc);

    assert_eq!(table.get("Name").and_then(ScriptValue::as_text), Some("s0"));
    assert_eq!(table.get("MaxAnisotropy").and_then(ScriptValue::as_integer), Some(4));
    assert_eq!(table.get("Filter").and_then(ScriptValue::as_text), Some("FILTER_TYPE_LINEAR"));
    let access = table.get("Access").and_then(ScriptValue::as_table).unwrap();
    assert_eq!(access.array().len(), 1);
    assert_eq!(access.array()[0].as_text(), Some("CPU_ACCESS_WRITE"));
}

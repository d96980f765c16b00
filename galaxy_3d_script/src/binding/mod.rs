//! Binding module - generic table-to-descriptor machinery
//!
//! Symbol maps, field conversions and binder registries, independent of any
//! particular native resource type.

pub mod symbol_map;
pub mod convert;
pub mod field_binder;
pub mod table_parser;
pub mod array_loader;

pub use symbol_map::SymbolMap;
pub use convert::{
    EnumValue, FlagSet, ScalarField,
    parse_scalar, parse_enum, parse_flags,
    enum_to_script, flags_to_script,
};
pub use field_binder::{FieldAccess, BinderRegistry, BindingRule, RuleKind};
pub use table_parser::{parse_table, UnknownKeyPolicy};
pub use array_loader::{ValueType, load_array, value_type_map};

/// Table-to-descriptor parser
///
/// Walks a script table with a `BinderRegistry` and fills a native
/// descriptor field by field. Only per-field conversion happens here;
/// cross-field rules belong to the operation that consumes the descriptor.

use crate::binding::field_binder::BinderRegistry;
use crate::engine_debug;
use crate::error::Result;
use crate::script::diagnostic::{CallSite, vocabulary};
use crate::script::value::ScriptValue;
use crate::script_bail;

/// What to do with keys no rule recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownKeyPolicy {
    /// Skip them (forward compatible scripts)
    #[default]
    Ignore,
    /// Fail with a `ParseError`
    Reject,
}

/// Build a descriptor from a script table
///
/// Absent keys leave the field at its `Default` value. The first invalid
/// field aborts parsing; no partially filled descriptor escapes.
///
/// # Arguments
///
/// * `value` - Script value expected to be a table
/// * `registry` - Binding rules of the descriptor type
/// * `site` - Call site used in diagnostics
/// * `policy` - Handling of unrecognized keys
pub fn parse_table<D: Default + 'static>(
    value: &ScriptValue,
    registry: &BinderRegistry<D>,
    site: &CallSite,
    policy: UnknownKeyPolicy,
) -> Result<D> {
    let Some(table) = value.as_table() else {
        script_bail!(site, registry.type_name(), " must be described by a table, ",
            value.kind(), " provided");
    };

    let mut desc = D::default();
    for rule in registry.rules() {
        if let Some(field_value) = table.get(rule.key()) {
            rule.apply(&mut desc, field_value, site)?;
        }
    }

    let mut unknown: Vec<&str> = table.keys().filter(|key| !registry.contains_key(key)).collect();
    if !unknown.is_empty() {
        unknown.sort_unstable();
        match policy {
            UnknownKeyPolicy::Ignore => {
                engine_debug!("galaxy3d::script::TableParser",
                    "{}: ignoring unknown {} keys: {}", site, registry.type_name(), vocabulary(unknown));
            }
            UnknownKeyPolicy::Reject => {
                let known = vocabulary(registry.rules().iter().map(|rule| rule.key()));
                script_bail!(site, "Unknown ", registry.type_name(), " keys: ", vocabulary(unknown),
                    ". Recognized keys are: ", known);
            }
        }
    }

    Ok(desc)
}

#[cfg(test)]
#[path = "table_parser_tests.rs"]
mod tests;

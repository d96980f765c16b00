/// Field binder registry
///
/// Declarative mapping from a native descriptor's fields to script table
/// keys. Each rule knows how to convert a script value into its field and
/// how to read the field back. Rules are registered once, while the binding
/// is built, and the registry is shared read-only afterwards.
///
/// # Example
///
/// ```ignore
/// let mut registry = BinderRegistry::<BufferDesc>::new("BufferDesc");
/// registry
///     .register_scalar("SizeInBytes", field_access!(BufferDesc, size_in_bytes))?
///     .register_enum("Mode", field_access!(BufferDesc, mode), mode_map)?;
/// ```

use std::sync::Arc;
use rustc_hash::FxHashSet;
use crate::binding::convert::{
    self, EnumValue, FlagSet, ScalarField,
};
use crate::binding::symbol_map::SymbolMap;
use crate::config_bail;
use crate::error::Result;
use crate::script::diagnostic::CallSite;
use crate::script::value::{ScriptTable, ScriptValue};
use crate::script_bail;

// ===== FIELD ACCESS =====

/// Getter pair for one descriptor field
pub struct FieldAccess<D, T> {
    get: fn(&D) -> &T,
    get_mut: fn(&mut D) -> &mut T,
}

impl<D, T> FieldAccess<D, T> {
    pub fn new(get: fn(&D) -> &T, get_mut: fn(&mut D) -> &mut T) -> Self {
        Self { get, get_mut }
    }
}

impl<D, T> Clone for FieldAccess<D, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, T> Copy for FieldAccess<D, T> {}

/// Build a `FieldAccess` for `$desc.$field`
#[macro_export]
macro_rules! field_access {
    ($desc:ty, $field:ident) => {
        $crate::binding::FieldAccess::<$desc, _>::new(
            |desc: &$desc| &desc.$field,
            |desc: &mut $desc| &mut desc.$field,
        )
    };
}

// ===== RULES =====

/// Conversion kind of a binding rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Direct numeric/text/boolean coercion
    Scalar,
    /// Text copied into a bounded buffer
    BufferedString { max_len: usize },
    /// Single symbol from a symbol map
    Enum,
    /// Symbol, list of symbols or raw bits, OR-combined
    Flags,
}

type Setter<D> = Box<dyn Fn(&mut D, &ScriptValue, &CallSite, &str) -> Result<()> + Send + Sync>;
type Getter<D> = Box<dyn Fn(&D) -> ScriptValue + Send + Sync>;

/// One registered table key and its conversion
pub struct BindingRule<D> {
    key: &'static str,
    kind: RuleKind,
    setter: Setter<D>,
    getter: Getter<D>,
}

impl<D> BindingRule<D> {
    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Convert `value` and store it in the rule's field
    pub fn apply(&self, desc: &mut D, value: &ScriptValue, site: &CallSite) -> Result<()> {
        (self.setter)(desc, value, site, self.key)
    }

    /// Script value of the rule's field
    pub fn read(&self, desc: &D) -> ScriptValue {
        (self.getter)(desc)
    }
}

// ===== REGISTRY =====

/// Ordered, immutable-after-construction list of binding rules
pub struct BinderRegistry<D> {
    type_name: &'static str,
    rules: Vec<BindingRule<D>>,
    keys: FxHashSet<&'static str>,
}

impl<D: 'static> BinderRegistry<D> {
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            rules: Vec::new(),
            keys: FxHashSet::default(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn rules(&self) -> &[BindingRule<D>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    fn push(&mut self, key: &'static str, kind: RuleKind, setter: Setter<D>, getter: Getter<D>) -> Result<&mut Self> {
        if !self.keys.insert(key) {
            config_bail!("galaxy3d::script::BinderRegistry",
                "{}: key '{}' is registered twice", self.type_name, key);
        }
        self.rules.push(BindingRule { key, kind, setter, getter });
        Ok(self)
    }

    /// Bind a scalar field (integer, number, boolean or text)
    pub fn register_scalar<T: ScalarField>(&mut self, key: &'static str, access: FieldAccess<D, T>) -> Result<&mut Self> {
        self.push(
            key,
            RuleKind::Scalar,
            Box::new(move |desc: &mut D, value: &ScriptValue, site: &CallSite, field: &str| {
                *(access.get_mut)(desc) = convert::parse_scalar(value, site, field)?;
                Ok(())
            }),
            Box::new(move |desc: &D| (access.get)(desc).to_script()),
        )
    }

    /// Bind a text field with a bounded capacity (in bytes)
    pub fn register_buffered_string(
        &mut self,
        key: &'static str,
        max_len: usize,
        access: FieldAccess<D, String>,
    ) -> Result<&mut Self> {
        self.push(
            key,
            RuleKind::BufferedString { max_len },
            Box::new(move |desc: &mut D, value: &ScriptValue, site: &CallSite, field: &str| {
                let Some(text) = value.as_text() else {
                    script_bail!(site, field, " must be a string, ", value.kind(), " provided");
                };
                if text.len() > max_len {
                    script_bail!(site, field, " is too long (", text.len(),
                        " bytes). Maximum allowed length is ", max_len, " bytes");
                }
                let target = (access.get_mut)(desc);
                target.clear();
                target.push_str(text);
                Ok(())
            }),
            Box::new(move |desc: &D| ScriptValue::Text((access.get)(desc).clone())),
        )
    }

    /// Bind an enum field through its symbol map
    pub fn register_enum<E: EnumValue>(
        &mut self,
        key: &'static str,
        access: FieldAccess<D, E>,
        map: Arc<SymbolMap<E>>,
    ) -> Result<&mut Self> {
        let read_map = map.clone();
        self.push(
            key,
            RuleKind::Enum,
            Box::new(move |desc: &mut D, value: &ScriptValue, site: &CallSite, field: &str| {
                *(access.get_mut)(desc) = convert::parse_enum(value, &map, site, field)?;
                Ok(())
            }),
            Box::new(move |desc: &D| convert::enum_to_script(*(access.get)(desc), &read_map)),
        )
    }

    /// Bind a flag-set field through its symbol map
    pub fn register_flags<F: FlagSet>(
        &mut self,
        key: &'static str,
        access: FieldAccess<D, F>,
        map: Arc<SymbolMap<F>>,
    ) -> Result<&mut Self> {
        let read_map = map.clone();
        self.push(
            key,
            RuleKind::Flags,
            Box::new(move |desc: &mut D, value: &ScriptValue, site: &CallSite, field: &str| {
                *(access.get_mut)(desc) = convert::parse_flags(value, &map, site, field)?;
                Ok(())
            }),
            Box::new(move |desc: &D| convert::flags_to_script(*(access.get)(desc), &read_map)),
        )
    }

    /// Inverse of table parsing: every registered field as a keyed table
    pub fn write_table(&self, desc: &D) -> ScriptTable {
        let mut table = ScriptTable::new();
        for rule in &self.rules {
            table.set(rule.key, rule.read(desc));
        }
        table
    }
}

#[cfg(test)]
#[path = "field_binder_tests.rs"]
mod tests;

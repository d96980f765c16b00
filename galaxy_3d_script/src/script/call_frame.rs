/// Call argument frame and cursor
///
/// A frame is the ordered list of values passed to one bound function.
/// Variadic signatures are parsed with an `ArgCursor`: a position over the
/// frame plus named lookahead predicates, so each ambiguity rule reads as
/// one predicate call.

use crate::error::Result;
use crate::script::diagnostic::CallSite;
use crate::script::value::{ScriptValue, UserData};
use crate::script_bail;

/// Arguments of a single script call
#[derive(Debug, Clone)]
pub struct CallFrame {
    site: CallSite,
    args: Vec<ScriptValue>,
}

impl CallFrame {
    pub fn new(site: CallSite, args: Vec<ScriptValue>) -> Self {
        Self { site, args }
    }

    pub fn site(&self) -> &CallSite {
        &self.site
    }

    pub fn args(&self) -> &[ScriptValue] {
        &self.args
    }

    /// Number of arguments (the runtime's stack top)
    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// 1-based argument access, `None` past the end
    pub fn arg(&self, index: usize) -> Option<&ScriptValue> {
        index.checked_sub(1).and_then(|i| self.args.get(i))
    }

    pub fn cursor(&self) -> ArgCursor<'_> {
        ArgCursor { frame: self, next: 0 }
    }
}

/// Forward-only cursor over a call frame
#[derive(Debug, Clone)]
pub struct ArgCursor<'a> {
    frame: &'a CallFrame,
    next: usize,
}

impl<'a> ArgCursor<'a> {
    pub fn site(&self) -> &'a CallSite {
        &self.frame.site
    }

    /// 1-based index of the next argument (for messages)
    pub fn position(&self) -> usize {
        self.next + 1
    }

    pub fn remaining(&self) -> usize {
        self.frame.args.len().saturating_sub(self.next)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    pub fn peek(&self) -> Option<&'a ScriptValue> {
        self.frame.args.get(self.next)
    }

    // ===== LOOKAHEAD PREDICATES =====

    pub fn next_is_number(&self) -> bool {
        self.peek().is_some_and(ScriptValue::is_number)
    }

    /// An explicit nil that is still inside the frame
    pub fn next_is_nil(&self) -> bool {
        self.peek().is_some_and(ScriptValue::is_nil)
    }

    pub fn next_is_text(&self) -> bool {
        matches!(self.peek(), Some(ScriptValue::Text(_)))
    }

    pub fn next_is_table(&self) -> bool {
        matches!(self.peek(), Some(ScriptValue::Table(_)))
    }

    pub fn next_is_text_or_table(&self) -> bool {
        self.next_is_text() || self.next_is_table()
    }

    /// True when the next argument is the final one in the frame
    pub fn next_is_last(&self) -> bool {
        self.remaining() == 1
    }

    // ===== CONSUMERS =====

    /// Consume the next argument whatever its type
    pub fn take(&mut self) -> Option<&'a ScriptValue> {
        let value = self.frame.args.get(self.next)?;
        self.next += 1;
        Some(value)
    }

    pub fn skip(&mut self) {
        if self.next < self.frame.args.len() {
            self.next += 1;
        }
    }

    /// Consume an integer argument within `min..=max`
    pub fn take_integer_in(&mut self, what: &str, min: i64, max: i64) -> Result<i64> {
        let position = self.position();
        let site = self.site();
        let value = match self.take() {
            Some(value) => value,
            None => script_bail!(site, "Missing ", what, " (argument #", position, ")"),
        };
        let Some(integer) = value.as_integer() else {
            script_bail!(site, "Argument #", position, " (", what, ") must be an integer, ",
                value.kind(), " ", value, " provided");
        };
        if integer < min || integer > max {
            script_bail!(site, what, " (", integer, " provided) must be in range ", min, "..", max);
        }
        Ok(integer)
    }

    /// Consume a text argument
    pub fn take_text(&mut self, what: &str) -> Result<&'a str> {
        let position = self.position();
        let site = self.site();
        match self.take() {
            Some(ScriptValue::Text(text)) => Ok(text.as_str()),
            Some(other) => script_bail!(site, "Argument #", position, " (", what,
                ") must be a string, ", other.kind(), " provided"),
            None => script_bail!(site, "Missing ", what, " (argument #", position, ")"),
        }
    }

    /// Consume a userdata argument of the given native type
    pub fn take_user_data<T: std::any::Any>(&mut self, type_name: &str) -> Result<&'a T> {
        let position = self.position();
        let site = self.site();
        let value = match self.take() {
            Some(value) => value,
            None => script_bail!(site, "Missing ", type_name, " (argument #", position, ")"),
        };
        match value.as_user_data().and_then(|data: &'a UserData| data.downcast_ref::<T>(type_name)) {
            Some(object) => Ok(object),
            None => script_bail!(site, "Argument #", position, " must be a ", type_name,
                ", ", describe_arg(value), " provided"),
        }
    }
}

/// "userdata Texture" / "string \"x\"" style description of an argument
fn describe_arg(value: &ScriptValue) -> String {
    match value {
        ScriptValue::UserData(data) => format!("userdata {}", data.type_name()),
        ScriptValue::Table(_) | ScriptValue::Nil => value.kind().to_string(),
        other => format!("{} {}", other.kind(), other),
    }
}

#[cfg(test)]
#[path = "call_frame_tests.rs"]
mod tests;

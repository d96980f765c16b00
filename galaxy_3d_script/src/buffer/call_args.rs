/// Variadic call argument parsers for the context binding functions
///
/// `Context.SetVertexBuffers` takes a positionally ambiguous argument list:
///
/// ```text
/// SetVertexBuffers([startSlot,] buffer|nil [, offset], ... [, mode] [, flags])
/// ```
///
/// The parser walks the frame once with an `ArgCursor`; every branch below
/// is decided by a single lookahead predicate.

use std::sync::Arc;
use crate::binding::{parse_enum, parse_flags, SymbolMap};
use crate::device::{Buffer, ResourceStateTransitionMode, SetVertexBuffersFlags};
use crate::error::Result;
use crate::script::call_frame::{ArgCursor, CallFrame};
use crate::script::diagnostic::vocabulary;
use crate::script::value::ScriptValue;
use crate::script_bail;

/// Userdata type name of buffer handles
pub const BUFFER_TYPE_NAME: &str = "Buffer";

const MODE_FIELD: &str = "StateTransitionMode";
const FLAGS_FIELD: &str = "SetVBFlags";

// ===== SET VERTEX BUFFERS =====

/// Decoded `SetVertexBuffers` arguments
#[derive(Debug, Clone)]
pub struct VertexBufferArgs {
    pub start_slot: u32,
    /// One entry per slot, `None` unbinds the slot
    pub buffers: Vec<Option<Arc<dyn Buffer>>>,
    pub offsets: Vec<u64>,
    pub mode: ResourceStateTransitionMode,
    pub flags: SetVertexBuffersFlags,
}

impl VertexBufferArgs {
    /// Decode a `SetVertexBuffers` frame
    ///
    /// # Arguments
    ///
    /// * `frame` - Script call frame
    /// * `modes` - Transition mode symbols
    /// * `flag_names` - Vertex buffer flag symbols
    /// * `max_slots` - Number of vertex buffer slots of the context
    pub fn parse(
        frame: &CallFrame,
        modes: &SymbolMap<ResourceStateTransitionMode>,
        flag_names: &SymbolMap<SetVertexBuffersFlags>,
        max_slots: u32,
    ) -> Result<Self> {
        let mut cursor = frame.cursor();
        let site = cursor.site();
        let max_slots = i64::from(max_slots);

        // The slot window check below rejects any buffer past the last slot
        let start_slot = if cursor.next_is_number() {
            cursor.take_integer_in("Start slot", 0, max_slots)?
        } else {
            0
        };

        let mut buffers = Vec::new();
        let mut offsets = Vec::new();
        let mut mode = ResourceStateTransitionMode::None;
        let mut flags: Option<SetVertexBuffersFlags> = None;

        while !cursor.is_exhausted() {
            let count = buffers.len() as i64;
            if start_slot + count + 1 > max_slots {
                script_bail!(site, "Too many buffer slots (", start_slot, "..", start_slot + count,
                    ") are being set. Allowed slots are 0..", max_slots - 1);
            }

            if cursor.next_is_nil() {
                cursor.skip();
                buffers.push(None);
            } else {
                let buffer = cursor.take_user_data::<Arc<dyn Buffer>>(BUFFER_TYPE_NAME)?;
                buffers.push(Some(buffer.clone()));
            }

            let offset = if cursor.next_is_number() {
                cursor.take_integer_in("Offset", 0, i64::from(u32::MAX))?
            } else {
                0
            };
            offsets.push(offset as u64);

            if cursor.remaining() == 2 && cursor.next_is_text() {
                mode = take_mode(&mut cursor, modes)?;
                if !cursor.next_is_text_or_table() {
                    let last = cursor.peek().unwrap_or(&ScriptValue::Nil);
                    script_bail!(site, "Argument #", cursor.position(),
                        " must be vertex buffer flags (string or table) after the state transition mode, ",
                        last.kind(), " provided");
                }
                debug_assert!(flags.is_none(), "vertex buffer flags set twice");
                flags = Some(take_flags(&mut cursor, flag_names)?);
            } else if cursor.next_is_last() && cursor.next_is_text_or_table() {
                let name = cursor.peek().and_then(ScriptValue::as_text);
                match name {
                    Some(name) if modes.contains(name) => mode = take_mode(&mut cursor, modes)?,
                    Some(name) if !flag_names.contains(name) => {
                        script_bail!(site, "Unknown trailing argument '", name,
                            "'. Expected a state transition mode (", vocabulary(modes.names().iter().copied()),
                            ") or vertex buffer flags (", vocabulary(flag_names.names().iter().copied()), ")");
                    }
                    _ => {
                        debug_assert!(flags.is_none(), "vertex buffer flags set twice");
                        flags = Some(take_flags(&mut cursor, flag_names)?);
                    }
                }
            }
        }

        Ok(Self {
            start_slot: start_slot as u32,
            buffers,
            offsets,
            mode,
            flags: flags.unwrap_or_else(SetVertexBuffersFlags::empty),
        })
    }
}

fn take_mode(
    cursor: &mut ArgCursor<'_>,
    modes: &SymbolMap<ResourceStateTransitionMode>,
) -> Result<ResourceStateTransitionMode> {
    let site = cursor.site();
    let value = cursor.take().unwrap_or(&ScriptValue::Nil);
    parse_enum(value, modes, site, MODE_FIELD)
}

fn take_flags(
    cursor: &mut ArgCursor<'_>,
    flag_names: &SymbolMap<SetVertexBuffersFlags>,
) -> Result<SetVertexBuffersFlags> {
    let site = cursor.site();
    let value = cursor.take().unwrap_or(&ScriptValue::Nil);
    parse_flags(value, flag_names, site, FLAGS_FIELD)
}

// ===== SET INDEX BUFFER =====

/// Decoded `SetIndexBuffer(buffer [, offset] [, mode])` arguments
#[derive(Debug, Clone)]
pub struct IndexBufferArgs {
    pub buffer: Arc<dyn Buffer>,
    pub offset: u64,
    pub mode: ResourceStateTransitionMode,
}

impl IndexBufferArgs {
    const MAX_ARGS: usize = 3;

    pub fn parse(frame: &CallFrame, modes: &SymbolMap<ResourceStateTransitionMode>) -> Result<Self> {
        let site = frame.site();
        if frame.len() > Self::MAX_ARGS {
            script_bail!(site, "Too many arguments: SetIndexBuffer() expects offset and state transition ",
                "mode as optional 2nd and 3rd parameters. ", frame.len(), " arguments are provided.");
        }

        let mut cursor = frame.cursor();
        let buffer = cursor.take_user_data::<Arc<dyn Buffer>>(BUFFER_TYPE_NAME)?.clone();

        let offset = if cursor.next_is_number() {
            cursor.take_integer_in("Offset", 0, i64::from(u32::MAX))? as u64
        } else {
            0
        };

        let mode = if cursor.next_is_text() {
            take_mode(&mut cursor, modes)?
        } else {
            ResourceStateTransitionMode::None
        };

        if let Some(extra) = cursor.peek() {
            script_bail!(site, "Unexpected argument #", cursor.position(), " (", extra.kind(),
                "). SetIndexBuffer() expects (buffer [, offset] [, mode])");
        }

        Ok(Self { buffer, offset, mode })
    }
}

#[cfg(test)]
#[path = "call_args_tests.rs"]
mod tests;

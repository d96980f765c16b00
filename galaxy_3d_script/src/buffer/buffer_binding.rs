/// Buffer binding - the script face of engine buffers
///
/// Owns the `BufferDesc` binder registry and the buffer symbol maps, and
/// implements the bound functions:
///
/// - `Buffer.Create(desc [, valueType, values])`
/// - `Buffer.GetDesc(buffer)`
/// - `Context.SetVertexBuffers(...)`
/// - `Context.SetIndexBuffer(buffer [, offset] [, mode])`
///
/// Every argument is validated before the device or context is touched.

use std::sync::{Arc, Mutex, MutexGuard};
use crate::binding::{load_array, parse_enum, parse_table, BinderRegistry, UnknownKeyPolicy};
use crate::buffer::call_args::{IndexBufferArgs, VertexBufferArgs, BUFFER_TYPE_NAME};
use crate::buffer::symbols::BufferSymbols;
use crate::config::BindingConfig;
use crate::device::{Buffer, BufferDesc, DeviceContext, RenderDevice, BindFlags};
use crate::dispatch::ScriptLibrary;
use crate::error::Result;
use crate::field_access;
use crate::script::call_frame::CallFrame;
use crate::script::diagnostic::CallSite;
use crate::script::value::{ScriptValue, UserData};
use crate::{engine_debug, script_bail};

pub struct BufferBinding {
    registry: BinderRegistry<BufferDesc>,
    symbols: BufferSymbols,
    config: BindingConfig,
    device: Arc<Mutex<dyn RenderDevice>>,
    context: Arc<Mutex<dyn DeviceContext>>,
}

impl BufferBinding {
    /// Build the binding
    ///
    /// # Arguments
    ///
    /// * `device` - Device that creates buffers
    /// * `context` - Context that receives vertex/index buffer bindings
    /// * `config` - Binding limits and policies
    ///
    /// # Returns
    ///
    /// The binding, or a `ConfigurationError` if the registry or a symbol
    /// map does not match the native buffer types
    pub fn new(
        device: Arc<Mutex<dyn RenderDevice>>,
        context: Arc<Mutex<dyn DeviceContext>>,
        config: BindingConfig,
    ) -> Result<Self> {
        let symbols = BufferSymbols::new()?;

        let mut registry = BinderRegistry::new("BufferDesc");
        registry
            .register_buffered_string("Name", config.max_name_length, field_access!(BufferDesc, name))?
            .register_scalar("SizeInBytes", field_access!(BufferDesc, size_in_bytes))?
            .register_flags("BindFlags", field_access!(BufferDesc, bind_flags), symbols.bind_flags.clone())?
            .register_enum("Usage", field_access!(BufferDesc, usage), symbols.usage.clone())?
            .register_flags("CPUAccessFlags", field_access!(BufferDesc, cpu_access_flags), symbols.cpu_access.clone())?
            .register_enum("Mode", field_access!(BufferDesc, mode), symbols.mode.clone())?
            .register_scalar("ElementByteStride", field_access!(BufferDesc, element_byte_stride))?;

        Ok(Self {
            registry,
            symbols,
            config,
            device,
            context,
        })
    }

    pub fn registry(&self) -> &BinderRegistry<BufferDesc> {
        &self.registry
    }

    pub fn symbols(&self) -> &BufferSymbols {
        &self.symbols
    }

    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    /// Register the bound functions in a script library
    pub fn register(self: &Arc<Self>, library: &mut ScriptLibrary) -> Result<()> {
        let binding = Arc::clone(self);
        library.register("Buffer.Create", move |frame: &CallFrame| {
            Ok(vec![binding.create_buffer(frame)?])
        })?;

        let binding = Arc::clone(self);
        library.register("Buffer.GetDesc", move |frame: &CallFrame| {
            Ok(vec![binding.get_desc(frame)?])
        })?;

        let binding = Arc::clone(self);
        library.register("Context.SetVertexBuffers", move |frame: &CallFrame| {
            binding.set_vertex_buffers(frame)?;
            Ok(Vec::new())
        })?;

        let binding = Arc::clone(self);
        library.register("Context.SetIndexBuffer", move |frame: &CallFrame| {
            binding.set_index_buffer(frame)?;
            Ok(Vec::new())
        })?;

        Ok(())
    }

    // ===== BUFFER.CREATE =====

    /// `Buffer.Create(desc [, valueType, values])`
    ///
    /// # Returns
    ///
    /// A `Buffer` userdata handle. No handle exists on any failure path.
    pub fn create_buffer(&self, frame: &CallFrame) -> Result<ScriptValue> {
        let site = frame.site();
        let policy = if self.config.reject_unknown_keys {
            UnknownKeyPolicy::Reject
        } else {
            UnknownKeyPolicy::Ignore
        };
        let mut desc: BufferDesc = parse_table(
            frame.arg(1).unwrap_or(&ScriptValue::Nil),
            &self.registry,
            site,
            policy,
        )?;

        let data = self.load_initial_data(frame)?;
        if !data.is_empty() {
            let Ok(data_size) = u32::try_from(data.len()) else {
                script_bail!(site, "Initial buffer data is too large (", data.len(), " bytes)");
            };
            if desc.size_in_bytes == 0 {
                desc.size_in_bytes = data_size;
            }
            if data_size != desc.size_in_bytes {
                script_bail!(site, "Initial buffer data size (", data_size,
                    ") does not match the requested buffer size (", desc.size_in_bytes,
                    "). Leave SizeInBytes out to have the buffer size computed from the data.");
            }
        }

        validate_desc(&desc, site, self.config.uniform_buffer_alignment)?;

        let buffer = {
            let mut device = lock(&*self.device, site, "Render device")?;
            device.create_buffer(&desc, (!data.is_empty()).then_some(data.as_slice()))
        };
        let Some(buffer) = buffer else {
            return Err(site.device_failure(&[&"Failed to create buffer"]));
        };

        engine_debug!("galaxy3d::script::Buffer",
            "Created buffer '{}' ({} bytes, {:?}, {:?})",
            desc.name, desc.size_in_bytes, desc.bind_flags, desc.mode);

        Ok(ScriptValue::UserData(UserData::new(BUFFER_TYPE_NAME, buffer)))
    }

    /// Payload from the optional `(valueType, values)` arguments
    fn load_initial_data(&self, frame: &CallFrame) -> Result<Vec<u8>> {
        let site = frame.site();
        match frame.len() {
            0 | 1 => Ok(Vec::new()),
            3 => {
                let value_type = parse_enum(
                    frame.arg(2).unwrap_or(&ScriptValue::Nil),
                    &self.symbols.value_type,
                    site,
                    "ValueType",
                )?;
                load_array(value_type, frame.arg(3).unwrap_or(&ScriptValue::Nil), site)
            }
            count => script_bail!(site, "To initialize buffer with initial data, provide value type ",
                "and array of values as the 2nd and 3rd parameters. ", count, " arguments are provided."),
        }
    }

    // ===== BUFFER.GETDESC =====

    /// `Buffer.GetDesc(buffer)`: the descriptor as a table `Buffer.Create` accepts
    pub fn get_desc(&self, frame: &CallFrame) -> Result<ScriptValue> {
        let mut cursor = frame.cursor();
        let buffer = cursor.take_user_data::<Arc<dyn Buffer>>(BUFFER_TYPE_NAME)?;
        Ok(ScriptValue::Table(self.registry.write_table(buffer.desc())))
    }

    // ===== CONTEXT =====

    /// `Context.SetVertexBuffers([startSlot,] buffer|nil [, offset], ... [, mode] [, flags])`
    pub fn set_vertex_buffers(&self, frame: &CallFrame) -> Result<()> {
        let args = VertexBufferArgs::parse(
            frame,
            &self.symbols.transition_mode,
            &self.symbols.vertex_buffer_flags,
            self.config.max_vertex_buffer_slots,
        )?;

        let mut context = lock(&*self.context, frame.site(), "Device context")?;
        context.set_vertex_buffers(args.start_slot, &args.buffers, &args.offsets, args.mode, args.flags);
        Ok(())
    }

    /// `Context.SetIndexBuffer(buffer [, offset] [, mode])`
    pub fn set_index_buffer(&self, frame: &CallFrame) -> Result<()> {
        let args = IndexBufferArgs::parse(frame, &self.symbols.transition_mode)?;

        let mut context = lock(&*self.context, frame.site(), "Device context")?;
        context.set_index_buffer(&args.buffer, args.offset, args.mode);
        Ok(())
    }
}

/// Cross-field rules, checked once the size is final
fn validate_desc(desc: &BufferDesc, site: &CallSite, uniform_alignment: u32) -> Result<()> {
    if desc.mode.requires_stride() {
        if desc.element_byte_stride == 0 {
            script_bail!(site, "Element byte stride of a structured or formatted buffer cannot be zero");
        }
        if desc.size_in_bytes % desc.element_byte_stride != 0 {
            script_bail!(site, "Buffer size (", desc.size_in_bytes,
                ") is not a multiple of element byte stride (", desc.element_byte_stride, ").");
        }
    }

    if desc.bind_flags.contains(BindFlags::UNIFORM_BUFFER)
        && uniform_alignment > 0
        && desc.size_in_bytes % uniform_alignment != 0
    {
        script_bail!(site, "Uniform buffer size (", desc.size_in_bytes,
            ") is not a multiple of ", uniform_alignment, ".");
    }
    Ok(())
}

fn lock<'a, T: ?Sized>(mutex: &'a Mutex<T>, site: &CallSite, what: &str) -> Result<MutexGuard<'a, T>> {
    mutex.lock().map_err(|_| site.device_failure(&[&what, &" lock is poisoned"]))
}

#[cfg(test)]
#[path = "buffer_binding_tests.rs"]
mod tests;


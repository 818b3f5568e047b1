use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::plan::Plan;
use bytestruct_types::sizing::Layout;
use bytestruct_types::types::{Record, Schema, SchemaError};
use log::{debug, trace};

/// Decodes buffers laid out per one [`Schema`].
///
/// The schema is compiled into a [`Plan`] at construction. Decode calls share nothing
/// but that immutable plan, so a `Decoder` may be shared across threads freely.
///
/// ```text
/// let schema = "id: u16; name: [char; 5]".parse::<Schema>()?;
/// let decoder = Decoder::little_endian(schema)?;
/// let rec = decoder.decode(b"\x0c\x00Hello")?;
/// assert_eq!(rec.get("id"), Some(&Value::U16(12)));
/// ```
#[derive(Debug)]
pub struct Decoder {
    schema: Schema,
    config: DecoderConfig,
    layout: Layout,
    plan: Plan,
}

impl Decoder {
    /// Big-endian, strict text.
    pub fn new(schema: Schema) -> Result<Self, SchemaError> {
        Self::with_config(schema, DecoderConfig::default())
    }

    pub fn little_endian(schema: Schema) -> Result<Self, SchemaError> {
        Self::with_config(schema, DecoderConfig::little_endian())
    }

    pub fn with_config(schema: Schema, config: DecoderConfig) -> Result<Self, SchemaError> {
        let layout = schema.layout()?;
        let plan = Plan::compile(&schema, &config)?;

        debug!(
            "Compiled decoder. fields={} layout={:?} byte_order={:?} text_mode={:?} ops={}",
            schema.len(),
            layout,
            config.byte_order,
            config.text_mode,
            plan.ops().len(),
        );

        Ok(Self {
            schema,
            config,
            layout,
            plan,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// `None` iff the schema contains a null-terminated string.
    pub fn fixed_size(&self) -> Option<usize> {
        self.layout.fixed_size()
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }
}

impl Decoder {
    /// Decodes one record that spans the whole of `buf`.
    ///
    /// For a pure-fixed schema, `buf` must be exactly [`Decoder::fixed_size()`] long.
    /// For a schema with null-terminated strings, trailing bytes are not checked.
    pub fn decode(&self, buf: &[u8]) -> Result<Record, DecodeError> {
        check_buf_len(self.layout, buf)?;

        let (rec, r_len) = self.plan.run(buf)?;

        check_consumed(self.layout, r_len)?;

        trace!("Decoded record. buf_len={} r_len={}", buf.len(), r_len);
        Ok(rec)
    }

    /// Decodes one record from the head of `buf`, which may continue past it.
    ///
    /// Returns the record and the number of bytes it occupied.
    pub fn decode_prefix(&self, buf: &[u8]) -> Result<(Record, usize), DecodeError> {
        let (rec, r_len) = self.plan.run(buf)?;

        trace!(
            "Decoded record prefix. buf_len={} r_len={}",
            buf.len(),
            r_len
        );
        Ok((rec, r_len))
    }
}

pub(crate) fn check_buf_len(layout: Layout, buf: &[u8]) -> Result<(), DecodeError> {
    match layout {
        Layout::Fixed(size) if *size != buf.len() => Err(DecodeError::SizeMismatch {
            expected: *size,
            actual: buf.len(),
        }),
        _ => Ok(()),
    }
}

pub(crate) fn check_consumed(layout: Layout, r_len: usize) -> Result<(), DecodeError> {
    match layout {
        Layout::Fixed(size) if *size != r_len => Err(DecodeError::SizeMismatch {
            expected: *size,
            actual: r_len,
        }),
        _ => Ok(()),
    }
}

//! The reference interpreter.
//!
//! [`Interpreter`] walks the [`Schema`] on every call, dispatching on each descriptor as it goes.
//! It exists to cross-check [`Decoder`](crate::Decoder), which must produce the same records
//! and the same errors for the same input.

use crate::config::{ByteOrder, DecoderConfig};
use crate::engine;
use crate::error::{DecodeError, Located, ReadFault};
use crate::readers::{self, Cursor, Primitive};
use bytestruct_types::sizing::Layout;
use bytestruct_types::types::{Descriptor, Record, ScalarKind, Schema, SchemaError, Value};
use std::sync::Arc;

pub struct Interpreter {
    schema: Schema,
    config: DecoderConfig,
    layout: Layout,
}

impl Interpreter {
    pub fn new(schema: Schema, config: DecoderConfig) -> Result<Self, SchemaError> {
        let layout = schema.layout()?;
        Ok(Self {
            schema,
            config,
            layout,
        })
    }

    pub fn interpret(&self, buf: &[u8]) -> Result<Record, DecodeError> {
        engine::check_buf_len(self.layout, buf)?;

        let mut cursor = Cursor::default();
        let mut rec = Record::with_capacity(self.schema.len());
        for field in self.schema.fields() {
            let val = self
                .interpret_desc(&field.desc, buf, &mut cursor)
                .map_err(|loc| loc.into_error(&field.name))?;
            rec.push(Arc::clone(&field.name), val);
        }

        engine::check_consumed(self.layout, *cursor)?;
        Ok(rec)
    }

    fn interpret_desc(
        &self,
        desc: &Descriptor,
        buf: &[u8],
        cursor: &mut Cursor,
    ) -> Result<Value, Located> {
        let offset = **cursor;
        let order = self.config.byte_order;
        let mode = self.config.text_mode;
        let located = |f| Located::new(f, offset);

        let (val, r_len) = match desc {
            Descriptor::Scalar(kind) => {
                let ret = Self::interpret_scalar(*kind, buf, offset, order);
                ret.map_err(located)?
            }
            Descriptor::FixedChars(len) => {
                let ret = readers::read_fixed_chars(buf, offset, *len, mode);
                let (s, r_len) = ret.map_err(located)?;
                (Value::Text(s), r_len)
            }
            Descriptor::CString => {
                let (s, r_len) = readers::read_cstring(buf, offset, mode).map_err(located)?;
                (Value::Text(s), r_len)
            }
            Descriptor::FixedArray(elem, count) => {
                let mut elems = vec![];
                for i in 0..*count {
                    let val = self
                        .interpret_desc(elem, buf, cursor)
                        .map_err(|loc| loc.within(i))?;
                    elems.push(val);
                }
                return Ok(Value::Array(elems));
            }
        };
        cursor.advance(r_len);
        Ok(val)
    }

    fn interpret_scalar(
        kind: ScalarKind,
        buf: &[u8],
        offset: usize,
        order: ByteOrder,
    ) -> Result<(Value, usize), ReadFault> {
        fn read<T: Primitive>(
            buf: &[u8],
            offset: usize,
            order: ByteOrder,
        ) -> Result<(Value, usize), ReadFault> {
            let (t, r_len) = readers::read_primitive::<T>(buf, offset, order)?;
            Ok((t.into_value(), r_len))
        }
        match kind {
            ScalarKind::I8 => read::<i8>(buf, offset, order),
            ScalarKind::U8 => read::<u8>(buf, offset, order),
            ScalarKind::I16 => read::<i16>(buf, offset, order),
            ScalarKind::U16 => read::<u16>(buf, offset, order),
            ScalarKind::I32 => read::<i32>(buf, offset, order),
            ScalarKind::U32 => read::<u32>(buf, offset, order),
            ScalarKind::I64 => read::<i64>(buf, offset, order),
            ScalarKind::U64 => read::<u64>(buf, offset, order),
            ScalarKind::F32 => read::<f32>(buf, offset, order),
            ScalarKind::F64 => read::<f64>(buf, offset, order),
        }
    }
}

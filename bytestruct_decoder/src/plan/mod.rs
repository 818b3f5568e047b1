//! # Compiled plans
//!
//! A [`Plan`] is derived once from a [`Schema`]. Every descriptor is resolved into an
//! [`Op`], stored in an arena and addressed by [`OpIdx`]. A field is a [`Step`] binding
//! its name to the root op of its descriptor.
//!
//! ```text
//! schema  { id: u16, grid: [[i8; 3]; 2], note: cstr }
//!
//! ops     0: Scalar(read u16)
//!         1: Scalar(read i8)
//!         2: Array { elem: 1, count: 3 }
//!         3: Array { elem: 2, count: 2 }
//!         4: CStr
//!
//! steps   ("id", 0), ("grid", 3), ("note", 4)
//! ```
//!
//! Scalar ops are plain function pointers, monomorphized per kind and byte order,
//! so executing a plan never consults a [`ScalarKind`] or a [`ByteOrder`].
//!
//! A plan holds no mutable state. The cursor is created per [`Plan::run()`] call,
//! so one plan may be run from any number of threads at once.

use crate::config::{ByteOrder, DecoderConfig, TextMode};
use crate::error::{DecodeError, Located, ReadFault};
use crate::readers::{self, Cursor, Primitive};
use bytestruct_types::types::{Descriptor, Record, ScalarKind, Schema, SchemaError, Value};
use derive_more::Deref;
use std::sync::Arc;


/// Reads one scalar at an offset; returns the value and the bytes consumed.
pub type ScalarFn = fn(&[u8], usize) -> Result<(Value, usize), ReadFault>;

#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct OpIdx(usize);

#[derive(Clone, Copy, Debug)]
pub enum Op {
    Scalar(ScalarFn),
    Chars(usize),
    CStr,
    Array {
        elem: OpIdx,
        count: usize,
        elem_size: usize,
    },
}

#[derive(Debug)]
pub struct Step {
    pub name: Arc<str>,
    pub op: OpIdx,
}

#[derive(Debug)]
pub struct Plan {
    ops: Vec<Op>,
    steps: Vec<Step>,
    text_mode: TextMode,
}

/* Compilation. */
impl Plan {
    pub fn compile(schema: &Schema, config: &DecoderConfig) -> Result<Self, SchemaError> {
        let mut plan = Self {
            ops: vec![],
            steps: Vec::with_capacity(schema.len()),
            text_mode: config.text_mode,
        };
        for field in schema.fields() {
            field.desc.check_value_count(&field.name)?;
            let op = plan.compile_desc(&field.name, &field.desc, config.byte_order)?;
            plan.steps.push(Step {
                name: Arc::clone(&field.name),
                op,
            });
        }
        Ok(plan)
    }

    fn compile_desc(
        &mut self,
        name: &Arc<str>,
        desc: &Descriptor,
        order: ByteOrder,
    ) -> Result<OpIdx, SchemaError> {
        let op = match desc {
            Descriptor::Scalar(kind) => Op::Scalar(scalar_fn(*kind, order)),
            Descriptor::FixedChars(len) => Op::Chars(*len),
            Descriptor::CString => Op::CStr,
            Descriptor::FixedArray(elem_desc, count) => {
                if elem_desc.contains_cstring() {
                    return Err(SchemaError::CStringInArray {
                        field: Arc::clone(name),
                    });
                }
                let overflow = || SchemaError::SizeOverflow {
                    field: Arc::clone(name),
                };
                let elem_size = elem_desc.byte_size().ok_or_else(overflow)?;
                desc.byte_size().ok_or_else(overflow)?;

                let elem = self.compile_desc(name, elem_desc, order)?;
                Op::Array {
                    elem,
                    count: *count,
                    elem_size,
                }
            }
        };
        self.ops.push(op);
        Ok(OpIdx(self.ops.len() - 1))
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

fn scalar_fn(kind: ScalarKind, order: ByteOrder) -> ScalarFn {
    match order {
        ByteOrder::Little => scalar_fn_::<true>(kind),
        ByteOrder::Big => scalar_fn_::<false>(kind),
    }
}

fn scalar_fn_<const LITTLE: bool>(kind: ScalarKind) -> ScalarFn {
    match kind {
        ScalarKind::I8 => read_scalar::<i8, LITTLE>,
        ScalarKind::U8 => read_scalar::<u8, LITTLE>,
        ScalarKind::I16 => read_scalar::<i16, LITTLE>,
        ScalarKind::U16 => read_scalar::<u16, LITTLE>,
        ScalarKind::I32 => read_scalar::<i32, LITTLE>,
        ScalarKind::U32 => read_scalar::<u32, LITTLE>,
        ScalarKind::I64 => read_scalar::<i64, LITTLE>,
        ScalarKind::U64 => read_scalar::<u64, LITTLE>,
        ScalarKind::F32 => read_scalar::<f32, LITTLE>,
        ScalarKind::F64 => read_scalar::<f64, LITTLE>,
    }
}

fn read_scalar<T: Primitive, const LITTLE: bool>(
    buf: &[u8],
    offset: usize,
) -> Result<(Value, usize), ReadFault> {
    let order = if LITTLE {
        ByteOrder::Little
    } else {
        ByteOrder::Big
    };
    let (t, r_len) = readers::read_primitive::<T>(buf, offset, order)?;
    Ok((t.into_value(), r_len))
}

/* Execution. */
impl Plan {
    /// Runs every step against `buf`, starting at offset zero.
    ///
    /// Returns the record and the number of bytes consumed.
    /// Exactness against a fixed size is the caller's concern.
    pub fn run(&self, buf: &[u8]) -> Result<(Record, usize), DecodeError> {
        let mut cursor = Cursor::default();
        let mut rec = Record::with_capacity(self.steps.len());
        for step in self.steps.iter() {
            let val = self
                .exec(step.op, buf, &mut cursor)
                .map_err(|loc| loc.into_error(&step.name))?;
            rec.push(Arc::clone(&step.name), val);
        }
        Ok((rec, *cursor))
    }

    fn exec(&self, idx: OpIdx, buf: &[u8], cursor: &mut Cursor) -> Result<Value, Located> {
        let offset = **cursor;
        let (val, r_len) = match self.ops[*idx] {
            Op::Scalar(read) => read(buf, offset).map_err(|f| Located::new(f, offset))?,
            Op::Chars(len) => {
                let (s, r_len) = readers::read_fixed_chars(buf, offset, len, self.text_mode)
                    .map_err(|f| Located::new(f, offset))?;
                (Value::Text(s), r_len)
            }
            Op::CStr => {
                let (s, r_len) = readers::read_cstring(buf, offset, self.text_mode)
                    .map_err(|f| Located::new(f, offset))?;
                (Value::Text(s), r_len)
            }
            Op::Array {
                elem,
                count,
                elem_size,
            } => {
                let remaining = buf.len().saturating_sub(offset);
                let cap = match elem_size {
                    0 => 0,
                    _ => count.min(remaining / elem_size),
                };
                let mut elems = Vec::with_capacity(cap);
                for i in 0..count {
                    let val = self.exec(elem, buf, cursor).map_err(|loc| loc.within(i))?;
                    elems.push(val);
                }
                return Ok(Value::Array(elems));
            }
        };
        cursor.advance(r_len);
        Ok(val)
    }
}

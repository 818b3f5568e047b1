use super::bytes::PutBytes;
use bytestruct_decoder::config::ByteOrder;
use bytestruct_types::types::{Descriptor, Record, ScalarKind, Schema, Value};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::Arc;

pub fn gen_scalar_kind(rng: &mut impl Rng) -> ScalarKind {
    ScalarKind::ALL[rng.gen_range(0..ScalarKind::ALL.len())]
}

/// `depth` bounds array nesting. CStrings are generated only where admissible.
pub fn gen_desc(rng: &mut impl Rng, depth: usize, allow_cstr: bool) -> Descriptor {
    let choices = if depth > 0 { 4 } else { 3 };
    match rng.gen_range(0..choices) {
        0 => Descriptor::Scalar(gen_scalar_kind(rng)),
        1 => Descriptor::FixedChars(rng.gen_range(0..6)),
        2 if allow_cstr => Descriptor::CString,
        2 => Descriptor::Scalar(gen_scalar_kind(rng)),
        _ => {
            let elem = gen_desc(rng, depth - 1, false);
            Descriptor::array(elem, rng.gen_range(0..4))
        }
    }
}

pub fn gen_schema(rng: &mut impl Rng, max_fields: usize, allow_cstr: bool) -> Schema {
    let fields_ct = rng.gen_range(0..=max_fields);
    let mut schema = Schema::new();
    for field_i in 0..fields_ct {
        let desc = gen_desc(rng, 3, allow_cstr);
        // Names are unique and descriptors are admissible by construction.
        schema.push(format!("f{field_i}"), desc).unwrap();
    }
    schema
}

pub fn gen_text(rng: &mut impl Rng, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// Appends a well-formed encoding of `desc` to `buf`. Returns the value it decodes to.
pub fn gen_field(
    rng: &mut impl Rng,
    desc: &Descriptor,
    order: ByteOrder,
    buf: &mut Vec<u8>,
) -> Value {
    match desc {
        Descriptor::Scalar(kind) => gen_scalar(rng, *kind, order, buf),
        Descriptor::FixedChars(len) => {
            let s = gen_text(rng, *len);
            buf.extend_from_slice(s.as_bytes());
            Value::Text(s)
        }
        Descriptor::CString => {
            let len = rng.gen_range(0..8);
            let s = gen_text(rng, len);
            buf.extend_from_slice(s.as_bytes());
            buf.push(0);
            Value::Text(s)
        }
        Descriptor::FixedArray(elem, count) => {
            let elems = (0..*count)
                .map(|_| gen_field(rng, elem, order, buf))
                .collect();
            Value::Array(elems)
        }
    }
}

fn gen_scalar(rng: &mut impl Rng, kind: ScalarKind, order: ByteOrder, buf: &mut Vec<u8>) -> Value {
    fn put<T: PutBytes>(t: T, order: ByteOrder, buf: &mut Vec<u8>) -> T {
        t.put(order, buf);
        t
    }
    match kind {
        ScalarKind::I8 => Value::I8(put(rng.gen(), order, buf)),
        ScalarKind::U8 => Value::U8(put(rng.gen(), order, buf)),
        ScalarKind::I16 => Value::I16(put(rng.gen(), order, buf)),
        ScalarKind::U16 => Value::U16(put(rng.gen(), order, buf)),
        ScalarKind::I32 => Value::I32(put(rng.gen(), order, buf)),
        ScalarKind::U32 => Value::U32(put(rng.gen(), order, buf)),
        ScalarKind::I64 => Value::I64(put(rng.gen(), order, buf)),
        ScalarKind::U64 => Value::U64(put(rng.gen(), order, buf)),
        // Finite floats only, so that records compare equal.
        ScalarKind::F32 => Value::F32(put(rng.gen_range(-1.0e6..1.0e6), order, buf)),
        ScalarKind::F64 => Value::F64(put(rng.gen_range(-1.0e12..1.0e12), order, buf)),
    }
}

/// A buffer laid out per `schema`, and the record it decodes to.
pub fn gen_record(rng: &mut impl Rng, schema: &Schema, order: ByteOrder) -> (Vec<u8>, Record) {
    let mut buf = vec![];
    let mut rec = Record::with_capacity(schema.len());
    for field in schema.fields() {
        let val = gen_field(rng, &field.desc, order, &mut buf);
        rec.push(Arc::clone(&field.name), val);
    }
    (buf, rec)
}

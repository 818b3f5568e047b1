use super::super::helpers::bytes::BufBuilder;
use anyhow::Result;
use bytestruct_decoder::config::{ByteOrder, DecoderConfig};
use bytestruct_decoder::error::DecodeError;
use bytestruct_decoder::Decoder;
use bytestruct_types::types::{Descriptor, ScalarKind, Schema, Value};

fn decoder(schema: Schema, byte_order: ByteOrder) -> Result<Decoder> {
    let config = DecoderConfig {
        byte_order,
        ..DecoderConfig::default()
    };
    Ok(Decoder::with_config(schema, config)?)
}

pub fn chars_array(order: ByteOrder) -> Result<()> {
    let schema = Schema::new()
        .with("value", Descriptor::array(Descriptor::FixedChars(5), 2))?;
    let dec = decoder(schema, order)?;
    let rec = dec.decode(b"HelloWorld")?;
    assert_eq!(rec.get("value"), Some(&Value::from(vec!["Hello", "World"])));
    Ok(())
}

pub fn multi_dimensional(order: ByteOrder) -> Result<()> {
    let schema = "grid: [[[i16; 2]; 3]; 2]".parse::<Schema>()?;
    let dec = decoder(schema, order)?;
    assert_eq!(dec.fixed_size(), Some(24));

    let mut bb = BufBuilder::new(order);
    for i in 0..12i16 {
        bb = bb.num(i - 6);
    }
    let rec = dec.decode(&bb.build())?;

    let mut next = -6i16;
    let mut gen_row = || {
        let row = vec![Value::I16(next), Value::I16(next + 1)];
        next += 2;
        Value::Array(row)
    };
    let exp = Value::Array(vec![
        Value::Array(vec![gen_row(), gen_row(), gen_row()]),
        Value::Array(vec![gen_row(), gen_row(), gen_row()]),
    ]);
    assert_eq!(rec.get("grid"), Some(&exp));

    /* Prefix decoding ignores trailing bytes. Errors name the failing element. */
    let buf = BufBuilder::new(order).raw(&[0; 24]).raw(&[9]).build();
    let (rec, _) = dec.decode_prefix(&buf)?;
    assert_eq!(rec.len(), 1);
    assert_eq!(
        dec.decode_prefix(&[0; 21]),
        Err(DecodeError::Bounds {
            field: String::from("grid[1][2][0]"),
            offset: 20,
            needed: 2,
            available: 1,
        })
    );

    Ok(())
}

pub fn zero_sized(order: ByteOrder) -> Result<()> {
    let schema = Schema::new()
        .with("none", Descriptor::array(ScalarKind::F64.into(), 0))?
        .with("empty", Descriptor::FixedChars(0))?
        .with(
            "hollow",
            Descriptor::array(Descriptor::array(ScalarKind::U8.into(), 0), 3),
        )?;
    let dec = decoder(schema, order)?;
    assert_eq!(dec.fixed_size(), Some(0));

    let rec = dec.decode(&[])?;
    assert_eq!(rec.get("none"), Some(&Value::Array(vec![])));
    assert_eq!(rec.get("empty"), Some(&Value::from("")));
    assert_eq!(
        rec.get("hollow"),
        Some(&Value::Array(vec![
            Value::Array(vec![]),
            Value::Array(vec![]),
            Value::Array(vec![]),
        ]))
    );
    Ok(())
}

pub fn mixed_record(order: ByteOrder) -> Result<()> {
    let schema = "id: u32; name: [char; 6]; scores: [f32; 3]; flags: [u8; 2]; big: i64; note: cstr"
        .parse::<Schema>()?;
    let dec = decoder(schema, order)?;

    let buf = BufBuilder::new(order)
        .num(7u32)
        .chars("Widget")
        .num(0.5f32)
        .num(-1.0f32)
        .num(100.25f32)
        .raw(&[1, 0])
        .num(i64::MIN)
        .cstr("ok")
        .build();
    let rec = dec.decode(&buf)?;

    let names = rec.iter().map(|(name, _)| name).collect::<Vec<_>>();
    assert_eq!(names, vec!["id", "name", "scores", "flags", "big", "note"]);

    assert_eq!(rec.get("id").and_then(Value::as_u64), Some(7));
    assert_eq!(rec.get("name").and_then(Value::as_str), Some("Widget"));
    assert_eq!(
        rec.get("scores"),
        Some(&Value::Array(vec![
            Value::F32(0.5),
            Value::F32(-1.0),
            Value::F32(100.25),
        ]))
    );
    let scores = rec
        .get("scores")
        .and_then(Value::as_array)
        .unwrap_or_default();
    assert_eq!(scores.iter().filter_map(Value::as_f64).sum::<f64>(), 99.75);
    assert_eq!(
        rec.get("flags").and_then(Value::as_array),
        Some(&[Value::U8(1), Value::U8(0)][..])
    );
    assert_eq!(rec.get("big").and_then(Value::as_i64), Some(i64::MIN));
    assert_eq!(rec.get("note").and_then(Value::as_str), Some("ok"));

    Ok(())
}

use super::helpers::bytes::BufBuilder;
use anyhow::Result;
use bytestruct_decoder::config::ByteOrder;
use bytestruct_decoder::error::DecodeError;
use bytestruct_decoder::Decoder;
use bytestruct_types::types::{Schema, SchemaError};

pub fn test_exactness() -> Result<()> {
    pure_fixed_sizes()?;
    variable_sizes()?;
    invalid_schemas()?;
    Ok(())
}

fn pure_fixed_sizes() -> Result<()> {
    let schema = "a: u16; b: [char; 3]; c: [[u8; 2]; 2]".parse::<Schema>()?;
    let dec = Decoder::new(schema)?;
    assert_eq!(dec.fixed_size(), Some(9));

    let exact = BufBuilder::new(ByteOrder::Big)
        .num(1u16)
        .chars("abc")
        .raw(&[1, 2, 3, 4])
        .build();
    assert_eq!(dec.decode(&exact)?.len(), 3);

    let shorter = &exact[..8];
    assert_eq!(
        dec.decode(shorter),
        Err(DecodeError::SizeMismatch {
            expected: 9,
            actual: 8
        })
    );

    let longer = BufBuilder::new(ByteOrder::Big)
        .raw(&exact)
        .raw(&[0])
        .build();
    assert_eq!(
        dec.decode(&longer),
        Err(DecodeError::SizeMismatch {
            expected: 9,
            actual: 10
        })
    );

    assert_eq!(
        dec.decode(&[]),
        Err(DecodeError::SizeMismatch {
            expected: 9,
            actual: 0
        })
    );

    let (_, r_len) = dec.decode_prefix(&longer)?;
    assert_eq!(r_len, 9);

    /* The empty schema accepts only the empty buffer. */
    let dec = Decoder::new(Schema::new())?;
    assert_eq!(dec.decode(&[])?.len(), 0);
    assert!(dec.decode(&[0]).is_err());

    Ok(())
}

fn variable_sizes() -> Result<()> {
    let schema = "a: u8; s: cstr".parse::<Schema>()?;
    let dec = Decoder::new(schema)?;
    assert_eq!(dec.fixed_size(), None);

    // Trailing bytes are not checked when the size is not static.
    let rec = dec.decode(b"\x01hi\0\xff\xff")?;
    assert_eq!(rec.len(), 2);

    let (_, r_len) = dec.decode_prefix(b"\x01hi\0\xff\xff")?;
    assert_eq!(r_len, 4);

    assert_eq!(
        dec.decode(&[]),
        Err(DecodeError::Bounds {
            field: String::from("a"),
            offset: 0,
            needed: 1,
            available: 0,
        })
    );

    Ok(())
}

fn invalid_schemas() -> Result<()> {
    /* Rejected before any decoder, or buffer, exists. */
    assert_eq!(
        "a: u8; b: [cstr; 2]".parse::<Schema>(),
        Err(SchemaError::CStringInArray { field: "b".into() })
    );
    assert!(matches!(
        "a: u128".parse::<Schema>(),
        Err(SchemaError::UnknownTypeTag { .. })
    ));

    let schema = "a: [[u64; 2305843009213693951]; 2]".parse::<Schema>();
    match schema {
        // 64-bit targets parse the count; the decoder then rejects the size.
        Ok(schema) => assert_eq!(
            Decoder::new(schema).err(),
            Some(SchemaError::SizeOverflow { field: "a".into() })
        ),
        Err(e) => assert!(matches!(e, SchemaError::Syntax { .. })),
    }

    // Zero-width, so no buffer length bounds the element count.
    let schema = "a: [[u8; 0]; 1000000000000]".parse::<Schema>()?;
    assert!(matches!(
        Decoder::new(schema).err(),
        Some(SchemaError::TooManyValues { field, .. }) if &*field == "a"
    ));

    Ok(())
}

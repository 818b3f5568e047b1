use crate::config::ByteOrder;
use crate::error::ReadFault;
use crate::readers::take;
use bytestruct_types::types::Value;
use std::array::TryFromSliceError;
use std::mem;

/// A fixed-width number that can be read in either byte order.
pub trait Primitive: Sized + Copy {
    type Bytes: for<'a> TryFrom<&'a [u8], Error = TryFromSliceError>;

    fn from_le(bytes: Self::Bytes) -> Self;
    fn from_be(bytes: Self::Bytes) -> Self;

    fn into_value(self) -> Value;
}

macro_rules! impl_primitive {
    ($($typ:ty => $variant:ident),* $(,)?) => {$(
        impl Primitive for $typ {
            type Bytes = [u8; mem::size_of::<$typ>()];

            fn from_le(bytes: Self::Bytes) -> Self {
                <$typ>::from_le_bytes(bytes)
            }
            fn from_be(bytes: Self::Bytes) -> Self {
                <$typ>::from_be_bytes(bytes)
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }
        }
    )*};
}

impl_primitive! {
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

/// Returns the number and its width.
pub fn read_primitive<T: Primitive>(
    buf: &[u8],
    offset: usize,
    order: ByteOrder,
) -> Result<(T, usize), ReadFault> {
    let width = mem::size_of::<T>();
    let slice = take(buf, offset, width)?;
    let bytes = <T::Bytes as TryFrom<&[u8]>>::try_from(slice).map_err(|_| ReadFault::Short {
        needed: width,
        available: slice.len(),
    })?;
    let t = match order {
        ByteOrder::Little => T::from_le(bytes),
        ByteOrder::Big => T::from_be(bytes),
    };
    Ok((t, width))
}

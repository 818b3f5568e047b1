use crate::types::SchemaError;
use std::fmt;
use std::mem;
use std::str::FromStr;

/// The fixed-width numeric kinds a field may hold.
///
/// The width of each kind is implied by the kind itself; see [`ScalarKind::width()`].
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ScalarKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 10] = [
        Self::I8,
        Self::U8,
        Self::I16,
        Self::U16,
        Self::I32,
        Self::U32,
        Self::I64,
        Self::U64,
        Self::F32,
        Self::F64,
    ];

    pub fn width(self) -> usize {
        match self {
            Self::I8 => mem::size_of::<i8>(),
            Self::U8 => mem::size_of::<u8>(),
            Self::I16 => mem::size_of::<i16>(),
            Self::U16 => mem::size_of::<u16>(),
            Self::I32 => mem::size_of::<i32>(),
            Self::U32 => mem::size_of::<u32>(),
            Self::I64 => mem::size_of::<i64>(),
            Self::U64 => mem::size_of::<u64>(),
            Self::F32 => mem::size_of::<f32>(),
            Self::F64 => mem::size_of::<f64>(),
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl FromStr for ScalarKind {
    type Err = SchemaError;
    fn from_str(s: &str) -> Result<Self, SchemaError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| SchemaError::UnknownTypeTag { tag: s.into() })
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

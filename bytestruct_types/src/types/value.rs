use std::sync::Arc;

/// A decoded field.
///
/// Each scalar kind keeps its own exact-width variant,
/// so that 64-bit integers never pass through a floating point representation.
#[derive(PartialEq, Clone, Debug)]
pub enum Value {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
    Text(String),
    Array(Vec<Value>),
}

/* Typed accessors. */
impl Value {
    /// Any signed or unsigned integer that fits `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I8(i) => Some(i as i64),
            Self::U8(i) => Some(i as i64),
            Self::I16(i) => Some(i as i64),
            Self::U16(i) => Some(i as i64),
            Self::I32(i) => Some(i as i64),
            Self::U32(i) => Some(i as i64),
            Self::I64(i) => Some(i),
            Self::U64(i) => i64::try_from(i).ok(),
            _ => None,
        }
    }

    /// Any non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::U8(i) => Some(i as u64),
            Self::U16(i) => Some(i as u64),
            Self::U32(i) => Some(i as u64),
            Self::U64(i) => Some(i),
            _ => self.as_i64().and_then(|i| u64::try_from(i).ok()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::F32(f) => Some(f as f64),
            Self::F64(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(elems) => Some(elems),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(elems: Vec<T>) -> Self {
        Self::Array(elems.into_iter().map(Into::into).collect())
    }
}

/// One decoded buffer. Fields appear in schema order.
#[derive(PartialEq, Clone, Default, Debug)]
pub struct Record {
    fields: Vec<(Arc<str>, Value)>,
}

impl Record {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            fields: Vec::with_capacity(cap),
        }
    }

    pub fn push(&mut self, name: Arc<str>, val: Value) {
        self.fields.push((name, val));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(nm, _)| &**nm == name)
            .map(|(_, val)| val)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(nm, val)| (&**nm, val))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

use crate::types::{Descriptor, Schema, SchemaError};
use derive_more::{Deref, Display, From};
use std::sync::Arc;


/// The most values a zero-width field may decode into.
///
/// A zero-width field consumes no bytes, so the buffer length places no bound on it.
pub const MAX_ZERO_WIDTH_VALUES: usize = 1 << 20;

#[derive(From, Deref, Display, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct ByteLen(usize);

/// Whether a schema's total byte size is known statically.
///
/// The two modes are not mixed: a schema containing any `CString`, at any depth,
/// is [`Layout::Variable`] as a whole.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Layout {
    Fixed(ByteLen),
    Variable,
}
impl Layout {
    pub fn fixed_size(&self) -> Option<usize> {
        match self {
            Self::Fixed(len) => Some(**len),
            Self::Variable => None,
        }
    }
}

impl Descriptor {
    /// `None` if the size is not statically known, or if it overflows `usize`.
    pub fn byte_size(&self) -> Option<usize> {
        match self {
            Descriptor::Scalar(kind) => Some(kind.width()),
            Descriptor::FixedChars(len) => Some(*len),
            Descriptor::CString => None,
            Descriptor::FixedArray(elem, count) => elem.byte_size()?.checked_mul(*count),
        }
    }

    /// The number of values decoding yields, counting each array as well as its elements.
    /// `None` if it overflows `usize`.
    pub fn value_count(&self) -> Option<usize> {
        match self {
            Descriptor::FixedArray(_, 0) => Some(1),
            Descriptor::FixedArray(elem, count) => {
                elem.value_count()?.checked_mul(*count)?.checked_add(1)
            }
            _ => Some(1),
        }
    }

    /// Rejects a zero-width descriptor that would decode into more than
    /// [`MAX_ZERO_WIDTH_VALUES`] values.
    pub fn check_value_count(&self, field: &Arc<str>) -> Result<(), SchemaError> {
        if self.byte_size() != Some(0) {
            return Ok(());
        }
        match self.value_count() {
            Some(n) if n <= MAX_ZERO_WIDTH_VALUES => Ok(()),
            _ => Err(SchemaError::TooManyValues {
                field: Arc::clone(field),
                limit: MAX_ZERO_WIDTH_VALUES,
            }),
        }
    }
}

impl Schema {
    pub fn layout(&self) -> Result<Layout, SchemaError> {
        for field in self.fields() {
            field.desc.check_value_count(&field.name)?;
        }
        if self.contains_cstring() {
            return Ok(Layout::Variable);
        }

        let mut tot = 0usize;
        for field in self.fields() {
            let overflow = || SchemaError::SizeOverflow {
                field: Arc::clone(&field.name),
            };
            let field_size = field.desc.byte_size().ok_or_else(overflow)?;
            tot = tot.checked_add(field_size).ok_or_else(overflow)?;
        }
        Ok(Layout::Fixed(ByteLen(tot)))
    }
}

use crate::types::ScalarKind;

/// [`Descriptor`] describes the shape of one field within a record layout.
///
/// ```text
/// Scalar(kind)            kind.width() bytes, interpreted per byte order
/// FixedChars(len)         exactly len bytes, decoded as text
/// CString                 bytes up to the first zero byte, decoded as text;
///                         the zero byte is consumed too
/// FixedArray(elem, count) count consecutive elems
/// ```
///
/// A `FixedArray` may nest other `FixedArray`s, to any depth,
/// but may not nest a `CString` at any depth.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub enum Descriptor {
    Scalar(ScalarKind),
    FixedChars(usize),
    CString,
    FixedArray(Box<Descriptor>, usize),
}

/* Shorthand constructors. */
impl Descriptor {
    /// A single byte of text.
    pub fn char() -> Self {
        Self::FixedChars(1)
    }

    pub fn array(elem: Descriptor, count: usize) -> Self {
        Self::FixedArray(Box::new(elem), count)
    }
}
impl From<ScalarKind> for Descriptor {
    fn from(kind: ScalarKind) -> Self {
        Self::Scalar(kind)
    }
}

/* Introspection. */
impl Descriptor {
    pub fn contains_cstring(&self) -> bool {
        match self {
            Self::Scalar(_) | Self::FixedChars(_) => false,
            Self::CString => true,
            Self::FixedArray(elem, _) => elem.contains_cstring(),
        }
    }
}

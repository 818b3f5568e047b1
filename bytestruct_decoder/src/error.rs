use std::fmt::Write;
use std::str::Utf8Error;
use thiserror::Error;

/// A failed decode call. No partial record accompanies it.
///
/// `field` names the failing field; array elements are suffixed with their indexes,
/// e.g. `grid[1][0]`. `offset` is where the failing read started.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum DecodeError {
    #[error("{field} at offset {offset} needs {needed} bytes but {available} remain.")]
    Bounds {
        field: String,
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("{field} at offset {offset} has no zero terminator before the end of the buffer.")]
    MissingTerminator { field: String, offset: usize },

    #[error("{field} at offset {offset} is not valid UTF-8.")]
    InvalidText {
        field: String,
        offset: usize,
        #[source]
        source: Utf8Error,
    },

    #[error("Struct size {expected} differs from byte size {actual}.")]
    SizeMismatch { expected: usize, actual: usize },
}

/// A reader's failure, before the field it belongs to is known.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum ReadFault {
    #[error("Needs {needed} bytes but {available} remain.")]
    Short { needed: usize, available: usize },

    #[error("No zero terminator.")]
    NoTerminator,

    #[error("Invalid UTF-8.")]
    BadText(#[source] Utf8Error),
}

/// A [`ReadFault`] plus where it happened.
///
/// Array indexes are pushed while unwinding, hence innermost first.
#[derive(Debug)]
pub(crate) struct Located {
    fault: ReadFault,
    offset: usize,
    rev_idxs: Vec<usize>,
}

impl Located {
    pub fn new(fault: ReadFault, offset: usize) -> Self {
        Self {
            fault,
            offset,
            rev_idxs: vec![],
        }
    }

    pub fn within(mut self, idx: usize) -> Self {
        self.rev_idxs.push(idx);
        self
    }

    pub fn into_error(self, field_name: &str) -> DecodeError {
        let mut field = String::from(field_name);
        for idx in self.rev_idxs.iter().rev() {
            write!(field, "[{idx}]").ok();
        }
        let offset = self.offset;
        match self.fault {
            ReadFault::Short { needed, available } => DecodeError::Bounds {
                field,
                offset,
                needed,
                available,
            },
            ReadFault::NoTerminator => DecodeError::MissingTerminator { field, offset },
            ReadFault::BadText(source) => DecodeError::InvalidText {
                field,
                offset,
                source,
            },
        }
    }
}

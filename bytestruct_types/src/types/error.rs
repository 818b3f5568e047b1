use std::sync::Arc;
use thiserror::Error;

/// A schema that cannot be turned into a decoder.
///
/// All of these are raised before any buffer is touched.
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum SchemaError {
    #[error("Duplicate field name. {field}")]
    DuplicateField { field: Arc<str> },

    #[error("Empty field name.")]
    EmptyFieldName,

    #[error("Field names may contain only ASCII alphanumerics and underscores. {field:?}")]
    InvalidFieldName { field: Arc<str> },

    #[error("Null-terminated string nested under a fixed array. {field}")]
    CStringInArray { field: Arc<str> },

    #[error("Unknown type tag. {tag:?}")]
    UnknownTypeTag { tag: String },

    #[error("Byte size overflows usize. {field}")]
    SizeOverflow { field: Arc<str> },

    #[error("Zero-width field decodes into more than {limit} values. {field}")]
    TooManyValues { field: Arc<str>, limit: usize },

    #[error("Schema syntax error at byte {pos}. {msg}")]
    Syntax { pos: usize, msg: String },
}

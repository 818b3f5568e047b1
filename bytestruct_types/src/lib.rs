//! # Record layouts
//!
//! A [`Schema`](types::Schema) is an ordered list of named fields.
//! Each field's shape is a [`Descriptor`](types::Descriptor).
//! Fields are laid out back to back, in schema order, with no padding.
//!
//! ```text
//! struct Example {
//!     id:         u32,                // 4 bytes
//!     name:       [char; 12],         // 12 bytes
//!     grid:       [[i16; 3]; 2],      // 2 * 3 * 2 bytes
//!     note:       cstr,               // n bytes, then one zero byte
//! }
//! ```
//!
//! A schema without any `cstr` is "pure fixed": its total byte size is known
//! without looking at a buffer. See [`sizing`].

pub mod notation;
pub mod sizing;
pub mod types;

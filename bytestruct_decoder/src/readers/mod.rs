//! Readers interpret the bytes at an offset and report how many bytes they consumed.
//!
//! They never advance a cursor themselves; the caller owns the cursor.

mod primitives;
mod strings;

pub use primitives::*;
pub use strings::*;

use crate::error::ReadFault;
use derive_more::Deref;

/// Exactly `len` bytes starting at `offset`.
fn take(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], ReadFault> {
    buf.get(offset..)
        .and_then(|rest| rest.get(..len))
        .ok_or(ReadFault::Short {
            needed: len,
            available: buf.len().saturating_sub(offset),
        })
}

/// The running byte position of one decode call.
#[derive(Deref, Default, Debug)]
pub struct Cursor(usize);
impl Cursor {
    pub fn advance(&mut self, len: usize) {
        self.0 += len;
    }
}

use crate::config::TextMode;
use crate::error::ReadFault;
use crate::readers::take;
use std::str;

fn decode_text(bytes: &[u8], mode: TextMode) -> Result<String, ReadFault> {
    match mode {
        TextMode::Strict => str::from_utf8(bytes)
            .map(String::from)
            .map_err(ReadFault::BadText),
        TextMode::Lossy => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Returns the text and `len`.
pub fn read_fixed_chars(
    buf: &[u8],
    offset: usize,
    len: usize,
    mode: TextMode,
) -> Result<(String, usize), ReadFault> {
    let bytes = take(buf, offset, len)?;
    let s = decode_text(bytes, mode)?;
    Ok((s, len))
}

/// Returns the text preceding the first zero byte,
/// and the text's length plus one for the terminator.
pub fn read_cstring(
    buf: &[u8],
    offset: usize,
    mode: TextMode,
) -> Result<(String, usize), ReadFault> {
    let remaining = buf.get(offset..).unwrap_or_default();
    let text_len = remaining
        .iter()
        .position(|b| *b == 0)
        .ok_or(ReadFault::NoTerminator)?;
    let s = decode_text(&remaining[..text_len], mode)?;
    Ok((s, text_len + 1))
}

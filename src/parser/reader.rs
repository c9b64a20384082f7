use std::io::Read;

use super::{ParseError, ParseResult};

/// Reads at most `limit + 1` bytes from `reader`, failing once the extra byte
/// shows the input is over the limit.
pub(crate) fn read_bounded<R: Read>(reader: R, limit: usize) -> ParseResult<Vec<u8>> {
    let cap = limit.saturating_add(1);
    let mut buf = Vec::with_capacity(cap.min(8 * 1024));
    reader.take(cap as u64).read_to_end(&mut buf)?;

    if buf.len() > limit {
        tracing::debug!(limit, "redirects input exceeds size limit");
        return Err(ParseError::InputTooLarge { limit });
    }

    Ok(buf)
}

use crate::matcher::is_placeholder_name;
use crate::path::{PathError, PathResult};
use memchr::memchr_iter;

/// Checks a `from` path: leading slash, at most one splat and only as the
/// final character, placeholder names, then the generic path syntax.
#[tracing::instrument(level = "trace", fields(path_len = path.len() as u64))]
pub fn validate_from_path(path: &str) -> PathResult<()> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    if !path.starts_with('/') {
        return Err(PathError::MissingLeadingSlash {
            input: path.to_string(),
        });
    }

    let bytes = path.as_bytes();
    let mut splats = memchr_iter(b'*', bytes);
    if let Some(first) = splats.next() {
        let count = 1 + splats.count();
        if count > 1 {
            return Err(PathError::MultipleSplats {
                input: path.to_string(),
                count,
            });
        }
        if first != bytes.len() - 1 {
            return Err(PathError::SplatNotTerminal {
                input: path.to_string(),
                index: first,
            });
        }
    }

    let body = path.strip_suffix('*').unwrap_or(path);
    for segment in body.split('/') {
        if let Some(name) = segment.strip_prefix(':')
            && !is_placeholder_name(name)
        {
            return Err(PathError::InvalidPlaceholderName {
                input: path.to_string(),
                name: name.to_string(),
            });
        }
    }

    validate_path_syntax(path)
}

/// Rejects control bytes, whitespace and malformed `%XX` escapes.
///
/// Non-ASCII characters are accepted as-is; they are percent-encoded by the
/// client on the wire and compared verbatim here.
pub fn validate_path_syntax(path: &str) -> PathResult<()> {
    if path.is_empty() {
        return Err(PathError::Empty);
    }

    let bytes = path.as_bytes();
    let mut idx = 0usize;
    while idx < bytes.len() {
        let byte = bytes[idx];

        if byte <= 0x20 || byte == 0x7f {
            return Err(PathError::ControlOrWhitespace {
                input: path.to_string(),
                byte,
            });
        }

        if byte == b'%' {
            let valid = idx + 2 < bytes.len()
                && bytes[idx + 1].is_ascii_hexdigit()
                && bytes[idx + 2].is_ascii_hexdigit();
            if !valid {
                return Err(PathError::InvalidPercentEncoding {
                    input: path.to_string(),
                    index: idx,
                });
            }
            idx += 3;
            continue;
        }

        idx += 1;
    }

    Ok(())
}

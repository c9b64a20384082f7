use memchr::memchr_iter;

use super::Bindings;

/// Substitutes every `:name` token in `to` with its bound value.
///
/// A token is `:` followed by an ASCII letter or `_`, then letters, digits
/// or `_`. Substituted values are not rescanned. Returns `None` when a token
/// names a placeholder with no binding.
#[tracing::instrument(level = "trace", skip(bindings), fields(bound = bindings.len() as u64))]
pub fn expand_placeholders(to: &str, bindings: &Bindings<'_>) -> Option<String> {
    let bytes = to.as_bytes();
    let mut out = String::with_capacity(to.len());
    let mut cursor = 0usize;

    for colon in memchr_iter(b':', bytes) {
        let name_start = colon + 1;
        let name_len = placeholder_name_len(&bytes[name_start..]);
        if name_len == 0 {
            continue;
        }

        let name = &to[name_start..name_start + name_len];
        let Some(value) = bindings.get(name) else {
            tracing::trace!(placeholder = name, "unbound placeholder in destination");
            return None;
        };

        out.push_str(&to[cursor..colon]);
        out.push_str(value);
        cursor = name_start + name_len;
    }

    out.push_str(&to[cursor..]);
    Some(out)
}

/// Whether `name` can be referenced as `:name` in a destination.
pub(crate) fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && placeholder_name_len(name.as_bytes()) == name.len()
}

fn placeholder_name_len(bytes: &[u8]) -> usize {
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return 0,
    }

    bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count()
}

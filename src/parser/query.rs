use std::borrow::Cow;
use std::collections::BTreeSet;
use url::form_urlencoded;

use crate::matcher::is_placeholder_name;

use super::QueryFieldError;

/// Parses one `key=value` field into its decoded key and value.
///
/// The field must hold exactly one pair. Once decoded, the key and the value
/// (minus a single leading `:` marking a placeholder) may only contain
/// characters that need no escaping in a query string, and a placeholder
/// name must be an identifier so the destination can reference it.
pub(crate) fn parse_query_field(field: &str) -> Result<(String, String), QueryFieldError> {
    let pairs: Vec<(Cow<'_, str>, Cow<'_, str>)> =
        form_urlencoded::parse(field.as_bytes()).collect();

    let Some((key, value)) = pairs.first() else {
        return Err(QueryFieldError::NotSinglePair { count: 0 });
    };

    if pairs.len() > 1 {
        let keys: BTreeSet<&str> = pairs.iter().map(|(k, _)| k.as_ref()).collect();
        if keys.len() > 1 {
            return Err(QueryFieldError::NotSinglePair { count: keys.len() });
        }
        return Err(QueryFieldError::RepeatedKey {
            key: key.to_string(),
            count: pairs.len(),
        });
    }

    if key.is_empty() {
        return Err(QueryFieldError::EmptyKey);
    }

    if !is_url_safe(key) {
        return Err(QueryFieldError::UnsafeKey {
            key: key.to_string(),
        });
    }

    let bare = value.strip_prefix(':').unwrap_or(value.as_ref());
    if !is_url_safe(bare) {
        return Err(QueryFieldError::UnsafeValue {
            value: value.to_string(),
        });
    }

    if let Some(name) = value.strip_prefix(':')
        && !is_placeholder_name(name)
    {
        return Err(QueryFieldError::InvalidPlaceholderName {
            name: name.to_string(),
        });
    }

    Ok((key.to_string(), value.to_string()))
}

fn is_url_safe(s: &str) -> bool {
    s.bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~'))
}

use smallvec::SmallVec;
use std::collections::BTreeMap;

use crate::path::validate_from_path;
use crate::rule::{DEFAULT_STATUS, Rule};

use super::query::parse_query_field;
use super::status::{looks_like_status, parse_status};
use super::target::validate_to;
use super::{ParseError, ParseResult};

/// Parses one source line. Blank lines and `#` comments yield `None`.
///
/// Grammar: `from [key=value ...] to [status[!]]`. Whether the last field is
/// a status is decided by its shape alone, before any field is validated.
pub(crate) fn parse_line(number: usize, raw: &str) -> ParseResult<Option<Rule>> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: SmallVec<[&str; 8]> = line.split_whitespace().collect();
    let malformed = || ParseError::MalformedLine {
        line: number,
        content: line.to_string(),
    };

    if fields.len() < 2 {
        return Err(malformed());
    }

    let status_token = fields.last().copied().filter(|last| looks_like_status(last));
    let to_index = fields.len() - 1 - usize::from(status_token.is_some());
    if to_index < 1 {
        return Err(malformed());
    }

    let mut from_query: Option<BTreeMap<String, String>> = None;
    for field in &fields[1..to_index] {
        let (key, value) =
            parse_query_field(field).map_err(|source| ParseError::InvalidQueryField {
                line: number,
                field: field.to_string(),
                source,
            })?;

        let query = from_query.get_or_insert_with(BTreeMap::new);
        if let Some(previous) = query.insert(key, value) {
            tracing::debug!(
                line = number,
                field = *field,
                previous = %previous,
                "repeated fromQuery key; last value wins"
            );
        }
    }

    let to = fields[to_index];
    validate_to(to).map_err(|source| ParseError::InvalidToTarget {
        line: number,
        to: to.to_string(),
        source,
    })?;

    let from = fields[0];
    validate_from_path(from).map_err(|source| ParseError::InvalidFromPath {
        line: number,
        from: from.to_string(),
        source,
    })?;

    let status = match status_token {
        Some(token) => parse_status(number, token)?,
        None => DEFAULT_STATUS,
    };

    Ok(Some(Rule {
        from: from.to_string(),
        from_query,
        to: to.to_string(),
        status,
    }))
}

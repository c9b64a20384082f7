use std::collections::BTreeMap;

use crate::path::PathTemplate;
use crate::rule::Rule;

use super::{Bindings, QueryParams, expand_placeholders};

/// The first rule of a list that applied to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRule<'r> {
    pub index: usize,
    pub rule: &'r Rule,
    pub to: String,
}

/// Matches one rule against a request and returns its destination with all
/// placeholders resolved. The rule itself is left untouched.
#[tracing::instrument(level = "trace", skip(rule, query), fields(from = %rule.from))]
pub fn match_rule(rule: &Rule, path: &str, query: &QueryParams) -> Option<String> {
    let template = PathTemplate::new(&rule.from);
    let mut bindings = template.match_path(path)?;

    if let Some(constraints) = &rule.from_query {
        bind_query(constraints, query, &mut bindings)?;
    }

    expand_placeholders(&rule.to, &bindings)
}

/// Walks `rules` top to bottom; the first rule that matches wins.
pub fn first_match<'r>(
    rules: &'r [Rule],
    path: &str,
    query: &QueryParams,
) -> Option<ResolvedRule<'r>> {
    rules.iter().enumerate().find_map(|(index, rule)| {
        match_rule(rule, path, query).map(|to| ResolvedRule { index, rule, to })
    })
}

fn bind_query<'a>(
    constraints: &'a BTreeMap<String, String>,
    query: &'a QueryParams,
    bindings: &mut Bindings<'a>,
) -> Option<()> {
    for (key, constraint) in constraints {
        match constraint.strip_prefix(':') {
            Some(name) => {
                let value = query.first(key)?;
                bindings.bind(name, value);
            }
            None => {
                if !query.get_all(key).any(|value| value == constraint) {
                    return None;
                }
            }
        }
    }

    Some(())
}

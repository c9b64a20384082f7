use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

use crate::matcher::{QueryParams, match_rule};

pub const DEFAULT_STATUS: u16 = 301;
pub const REWRITE_STATUS: u16 = 200;
pub const SUPPORTED_STATUS_CODES: [u16; 9] = [200, 301, 302, 303, 307, 308, 404, 410, 451];

pub fn is_supported_status(status: u16) -> bool {
    SUPPORTED_STATUS_CODES.contains(&status)
}

/// A single redirect or rewrite rule.
///
/// `from_query` is `None` when the source line carried no query constraints;
/// it serializes as `null` rather than an empty object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rule {
    /// Path template the request path is matched against.
    pub from: String,

    /// Query parameter constraints. A value of `:name` accepts anything and
    /// binds it to `name`; any other value must match literally.
    #[serde(default)]
    pub from_query: Option<BTreeMap<String, String>>,

    /// Destination path, or absolute URL when proxying.
    pub to: String,

    /// - 3xx a redirect
    /// - 200 a rewrite
    /// - 404, 410, 451 serve `to` with that status
    pub status: u16,
}

impl Rule {
    pub fn new<F: Into<String>, T: Into<String>>(from: F, to: T) -> Self {
        Self {
            from: from.into(),
            from_query: None,
            to: to.into(),
            status: DEFAULT_STATUS,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn with_query<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.from_query
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn is_rewrite(&self) -> bool {
        self.status == REWRITE_STATUS
    }

    /// True when `to` names another host.
    pub fn is_proxy(&self) -> bool {
        let parsed = if self.to.starts_with("//") {
            Url::parse(&format!("http:{}", self.to))
        } else {
            Url::parse(&self.to)
        };

        parsed
            .ok()
            .and_then(|url| url.host_str().map(|host| !host.is_empty()))
            .unwrap_or(false)
    }

    /// Returns the destination for `path`/`query` with every placeholder
    /// resolved, or `None` when this rule does not apply.
    pub fn match_and_expand(&self, path: &str, query: &QueryParams) -> Option<String> {
        match_rule(self, path, query)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.from)?;
        if let Some(query) = &self.from_query {
            for (key, value) in query {
                write!(f, " {key}={value}")?;
            }
        }
        write!(f, " {} {}", self.to, self.status)
    }
}

mod bindings;
mod expand;
mod query;
pub mod resolver;

pub use bindings::{Binding, Bindings, SPLAT};
pub use expand::expand_placeholders;
pub(crate) use expand::is_placeholder_name;
pub use query::QueryParams;
pub use resolver::{ResolvedRule, first_match, match_rule};

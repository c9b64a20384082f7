mod error;
mod template;
mod validate;

pub use error::{PathError, PathResult};
pub use template::{PathTemplate, TemplateSegment};
pub use validate::{validate_from_path, validate_path_syntax};

use url::Url;

use crate::path::validate_path_syntax;

use super::TargetError;

pub const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "ipfs", "ipns"];

/// A destination is either an absolute path or a URL with an allowed scheme.
pub(crate) fn validate_to(to: &str) -> Result<(), TargetError> {
    if to.starts_with('/') {
        validate_path_syntax(to)?;
        return Ok(());
    }

    let url = Url::parse(to)?;
    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(TargetError::DisallowedScheme {
            scheme: url.scheme().to_string(),
        });
    }

    Ok(())
}

//! `${VAR}` references in `site.url` and `output.dir`.
//!
//! Lets one `weave.toml` serve several deployments, for example
//! `url = "https://${SITE_HOST:-example.com}"` for preview builds. Only braced
//! references are expanded. A bare `$` is common in URLs (query strings,
//! tracking parameters) and is always copied through.

use crate::ConfigError;

/// Expand every `${VAR}` / `${VAR:-default}` reference in `value`.
///
/// `field` names the config key in error messages. An unterminated `${` is
/// copied through unchanged.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}').map(|offset| start + offset) else {
            break;
        };
        expanded.push_str(&rest[..start]);
        expanded.push_str(&expand_reference(&rest[start..=end], field)?);
        rest = &rest[end + 1..];
    }
    expanded.push_str(rest);

    Ok(expanded)
}

/// Expand a single `${...}` reference.
fn expand_reference(reference: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(reference, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a referenced variable that is not set.
struct UnsetVar(String);

//! `${VAR}` and `${VAR:-default}` references in config values.
//!
//! Only the registry URL and homepage are expanded, since those are the values
//! that differ between local, staging and release builds.

use std::env::{self, VarError};

use crate::ConfigError;

/// Expand braced environment references in `value`.
///
/// An unset variable without a default is an error naming `field`. Bare
/// `$VAR` is left alone.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| env::var(var).map(Some))
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: match e.cause {
                VarError::NotPresent => format!("${{{}}} not set", e.var_name),
                VarError::NotUnicode(_) => format!("${{{}}} is not valid unicode", e.var_name),
            },
        })
}

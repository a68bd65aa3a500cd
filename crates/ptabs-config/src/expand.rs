//! Environment variable expansion for configuration strings.

use super::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Values without `${` are returned as is, so a bare `$VAR` stays literal.
/// `field` names the configuration key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that could not be read.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("Android", "tabs.default_platform").unwrap(), "Android");
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("PTABS_EXPAND_UNSET");
        }

        let value = expand_env("${PTABS_EXPAND_UNSET:-iOS}", "tabs.default_platform").unwrap();

        assert_eq!(value, "iOS");
    }

    #[test]
    fn test_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("PTABS_EXPAND_MISSING");
        }

        let err = expand_env("${PTABS_EXPAND_MISSING}", "tabs.default_platform").unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("tabs.default_platform"));
        assert!(msg.contains("PTABS_EXPAND_MISSING"));
    }

    #[test]
    fn test_bare_dollar_is_literal() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("Foo");
        }

        assert_eq!(expand_env("$Foo", "tabs.default_platform").unwrap(), "$Foo");
    }
}

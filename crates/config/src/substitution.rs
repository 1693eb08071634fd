use anyhow::Result;
use regex::{Captures, Regex};
use std::env;
use tracing::{debug, warn};

const ENV_VAR_PATTERN: &str = r"\$\{(\w+)\}|\$(\w+)";

/// Substitute environment variables in the format ${VAR_NAME} or $VAR_NAME
///
/// Unset variables keep their placeholder; the validator reports them.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let re = Regex::new(ENV_VAR_PATTERN)?;
    let mut missing_vars = Vec::new();

    let result = re.replace_all(content, |caps: &Captures| {
        let var_name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();

        match env::var(var_name) {
            Ok(value) => {
                debug!("Substituting environment variable: {} = \"{}\"", var_name, value);
                value
            }
            Err(_) => {
                warn!("Environment variable '{}' not set", var_name);
                missing_vars.push(var_name.to_string());
                caps[0].to_string()
            }
        }
    });

    if !missing_vars.is_empty() {
        debug!(
            "Environment variables not set (may use defaults or fail validation): {:?}",
            missing_vars
        );
    }

    Ok(result.into_owned())
}

/// Check if a string contains unresolved environment variable placeholders
pub fn has_unresolved_env_vars(content: &str) -> bool {
    Regex::new(ENV_VAR_PATTERN)
        .map(|re| re.is_match(content))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_set_variables() {
        env::set_var("TRADEAGG_TEST_SUBST_FORMAT", "json");

        let out = substitute_env_vars("format: ${TRADEAGG_TEST_SUBST_FORMAT}\nother: $TRADEAGG_TEST_SUBST_FORMAT").unwrap();

        assert_eq!(out, "format: json\nother: json");
    }

    #[test]
    fn test_keeps_unset_placeholders() {
        let out = substitute_env_vars("file: ${TRADEAGG_TEST_SUBST_UNSET_VAR}").unwrap();

        assert_eq!(out, "file: ${TRADEAGG_TEST_SUBST_UNSET_VAR}");
        assert!(has_unresolved_env_vars(&out));
    }

    #[test]
    fn test_no_placeholders() {
        assert!(!has_unresolved_env_vars("delimiter: \",\""));
        assert_eq!(substitute_env_vars("level: warn").unwrap(), "level: warn");
    }
}

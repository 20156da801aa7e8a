//! Credential resolution for the completion endpoint.
//!
//! A bearer token is resolved from two sources with explicit precedence: a
//! process-wide preset (the `HF_TOKEN` environment variable) wins over a
//! value supplied directly by the operator at call time. Neither source is
//! persisted here.

/// Environment variable holding the process-wide token preset.
pub const TOKEN_ENV_VAR: &str = "HF_TOKEN";

/// Resolve the credential, preferring the environment preset over
/// `operator_supplied`. Values are trimmed; blank counts as absent.
pub fn resolve(operator_supplied: Option<&str>) -> Option<String> {
    let preset = std::env::var(TOKEN_ENV_VAR).ok();
    resolve_from(preset.as_deref(), operator_supplied)
}

fn resolve_from(preset: Option<&str>, operator_supplied: Option<&str>) -> Option<String> {
    normalize(preset).or_else(|| normalize(operator_supplied))
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_wins_over_operator_value() {
        assert_eq!(
            resolve_from(Some("preset-token"), Some("typed-token")),
            Some("preset-token".to_string())
        );
    }

    #[test]
    fn operator_value_used_when_preset_absent() {
        assert_eq!(
            resolve_from(None, Some("typed-token")),
            Some("typed-token".to_string())
        );
    }

    #[test]
    fn blank_preset_counts_as_absent() {
        assert_eq!(
            resolve_from(Some("   "), Some("typed-token")),
            Some("typed-token".to_string())
        );
    }

    #[test]
    fn values_are_trimmed() {
        assert_eq!(
            resolve_from(Some("  hf_abc  "), None),
            Some("hf_abc".to_string())
        );
    }

    #[test]
    fn nothing_resolves_to_none() {
        assert_eq!(resolve_from(None, None), None);
        assert_eq!(resolve_from(Some(""), Some("  ")), None);
    }
}

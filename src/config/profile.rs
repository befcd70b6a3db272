//! Profile input configuration

use serde::Deserialize;

use crate::domain::profile::NumericInputPolicy;

/// How operator input for profile fields is interpreted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileConfig {
    /// `strict` rejects non-numeric input, `lenient` coerces it to 0 and clamps
    #[serde(default)]
    pub numeric_input: NumericInputPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_config_defaults_to_strict() {
        assert_eq!(ProfileConfig::default().numeric_input, NumericInputPolicy::Strict);
    }
}

//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling the acquisition modes
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Serve the step-by-step wizard endpoints
    #[serde(default = "enabled")]
    pub wizard_enabled: bool,

    /// Serve the conversational assistant endpoint
    #[serde(default = "enabled")]
    pub assistant_enabled: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            wizard_enabled: true,
            assistant_enabled: true,
            verbose_errors: false,
        }
    }
}

fn enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.wizard_enabled);
        assert!(flags.assistant_enabled);
        assert!(!flags.verbose_errors);
    }

    #[test]
    fn test_missing_flags_default_to_enabled() {
        let flags: FeatureFlags = serde_json::from_str(r#"{"verbose_errors": true}"#).unwrap();
        assert!(flags.wizard_enabled);
        assert!(flags.assistant_enabled);
        assert!(flags.verbose_errors);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let flags: FeatureFlags =
            serde_json::from_str(r#"{"wizard_enabled": false, "assistant_enabled": true}"#)
                .unwrap();
        assert!(!flags.wizard_enabled);
        assert!(flags.assistant_enabled);
    }
}

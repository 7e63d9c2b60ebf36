/// `RegistryConfig` selects which fallback stages `NameRegistry::resolve` may use
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct RegistryConfig {
    /// Match registered keys sharing the simple name of the requested name
    #[cfg_attr(feature = "serde", serde(default = "RegistryConfig::default_suffix_match"))]
    pub suffix_match: bool,
    /// Retry snake_case names as their capitalized class name
    #[cfg_attr(feature = "serde", serde(default = "RegistryConfig::default_denormalize"))]
    pub denormalize: bool,
}

impl RegistryConfig {
    pub fn new(suffix_match: bool, denormalize: bool) -> Self {
        Self {
            suffix_match,
            denormalize,
        }
    }

    /// Only resolve names registered verbatim
    pub fn exact_only() -> Self {
        Self::new(false, false)
    }

    /// Load a config from JSON, missing fields take their defaults
    #[cfg(feature = "json")]
    pub fn from_json(data: &[u8]) -> Result<Self, ConfigError> {
        serde_json::from_slice(data).map_err(|e| ConfigError(e.to_string()))
    }

    fn default_suffix_match() -> bool {
        true
    }

    fn default_denormalize() -> bool {
        true
    }
}

impl Default for RegistryConfig {
    /// Creates a `RegistryConfig` with every fallback stage enabled
    fn default() -> Self {
        Self {
            suffix_match: RegistryConfig::default_suffix_match(),
            denormalize: RegistryConfig::default_denormalize(),
        }
    }
}

/// Error returned when a `RegistryConfig` cannot be loaded
#[cfg(feature = "json")]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid registry config: {0}")]
pub struct ConfigError(pub String);

#[cfg(test)]
mod tests {
    use super::RegistryConfig;

    #[test]
    fn defaults_enable_all_stages() {
        let config = RegistryConfig::default();
        assert!(config.suffix_match);
        assert!(config.denormalize);
        assert_eq!(RegistryConfig::exact_only(), RegistryConfig::new(false, false));
    }

    #[cfg(feature = "json")]
    #[test]
    fn config_json() {
        assert_eq!(
            RegistryConfig::from_json(b"{}").unwrap(),
            RegistryConfig::default()
        );
        assert_eq!(
            RegistryConfig::from_json(br#"{"denormalize": false}"#).unwrap(),
            RegistryConfig::new(true, false)
        );
        assert!(RegistryConfig::from_json(br#"{"denormalize": "no"}"#).is_err());
    }
}

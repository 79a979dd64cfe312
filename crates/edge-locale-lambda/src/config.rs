use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Deployment-level negotiation settings. The defaults mirror a two
/// locale English/Spanish deployment writing `X-Accept-Language`.
#[derive(Debug, Clone, Deserialize)]
pub struct NegotiationConfig {
    pub supported_locales: Vec<String>,
    pub default_locale: String,
    pub cookie_name: String,
    pub custom_header: String,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            supported_locales: vec!["en".to_string(), "es".to_string()],
            default_locale: "en".to_string(),
            cookie_name: "locale".to_string(),
            custom_header: "X-Accept-Language".to_string(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<NegotiationConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> Result<NegotiationConfig, ConfigError> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(NegotiationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{NegotiationConfig, load_config_or_default};
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        path.push(format!("edge_locale_{name}_{nanos}.toml"));
        path
    }

    #[test]
    fn uses_default_when_missing() {
        let path = temp_path("missing");
        let config = load_config_or_default(&path).expect("config");
        assert_eq!(config.default_locale, "en");
        assert_eq!(config.custom_header, "X-Accept-Language");
    }

    #[test]
    fn loads_from_file() {
        let path = temp_path("config");
        let contents = r#"
supported_locales = ["en", "fr"]
default_locale = "fr"
cookie_name = "lang"
custom_header = "X-Selected-Language"
"#;
        fs::write(&path, contents).expect("write");
        let config = load_config_or_default(&path).expect("config");
        assert_eq!(config.default_locale, "fr");
        assert_eq!(config.cookie_name, "lang");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn default_values_are_stable() {
        let config = NegotiationConfig::default();
        assert_eq!(config.supported_locales, vec!["en", "es"]);
        assert_eq!(config.cookie_name, "locale");
    }
}

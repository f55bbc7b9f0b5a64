//! Node configuration for `tokd`
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0:5000"
//! admin_token = "change-me"
//!
//! [pricing]
//! file = "$HOME/tokrecharge/pricing.toml"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "$HOME/tokrecharge/tokd.toml";
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";
pub const ADMIN_TOKEN_ENV: &str = "TOKD_ADMIN_TOKEN";

#[derive(Debug, Default, Deserialize)]
pub struct NodeConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pricing: PricingSection,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    pub admin_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            admin_token: None,
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

#[derive(Debug, Default, Deserialize)]
pub struct PricingSection {
    /// Pricing tables; the built-in tables are used when unset
    pub file: Option<String>,
}

impl NodeConfig {
    /// Pricing file path with `$HOME` expanded
    pub fn pricing_path(&self) -> Option<PathBuf> {
        self.pricing.file.as_deref().map(|p| PathBuf::from(expand_path(p)))
    }

    /// Admin token, with the environment taking precedence over the file
    pub fn admin_token(&self, env_token: Option<String>) -> Option<String> {
        env_token
            .or_else(|| self.server.admin_token.clone())
            .filter(|t| !t.is_empty())
    }
}

pub fn load_config(path: &Path) -> Result<NodeConfig, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let config: NodeConfig = toml::from_str(&contents)?;
    Ok(config)
}

pub fn expand_path(path: &str) -> String {
    path.replace("$HOME", &std::env::var("HOME").unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_for_empty_file() {
        let config: NodeConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.bind, DEFAULT_BIND);
        assert!(config.server.admin_token.is_none());
        assert!(config.pricing_path().is_none());
    }

    #[test]
    fn test_load_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nbind = \"127.0.0.1:8080\"\nadmin_token = \"abc\"\n\n[pricing]\nfile = \"/etc/tok/pricing.toml\""
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert_eq!(config.admin_token(None), Some("abc".to_string()));
        assert_eq!(
            config.pricing_path(),
            Some(PathBuf::from("/etc/tok/pricing.toml"))
        );
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbind = 5000").unwrap();
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_env_token_overrides_file() {
        let config: NodeConfig = toml::from_str("[server]\nadmin_token = \"file\"").unwrap();
        assert_eq!(
            config.admin_token(Some("env".to_string())),
            Some("env".to_string())
        );
        assert_eq!(config.admin_token(Some(String::new())), None);
    }

    #[test]
    fn test_expand_path() {
        let home = std::env::var("HOME").unwrap_or_default();
        assert_eq!(expand_path("$HOME/tok.toml"), format!("{}/tok.toml", home));
        assert_eq!(expand_path("/abs/tok.toml"), "/abs/tok.toml");
    }
}

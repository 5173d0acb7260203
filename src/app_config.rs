use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::exchanges::EXCHANGES;

/// Settings for the `rest` logger. Unset fields fall back to the logging
/// defaults (`rest.log`, warn).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestLogConfig {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub key_id: Option<String>,
    #[serde(default)]
    pub key_secret: Option<String>,
    #[serde(default)]
    pub key_passphrase: Option<String>,
}

impl Credentials {
    pub fn is_complete(&self) -> bool {
        self.key_id.is_some() && self.key_secret.is_some()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Credentials")
            .field("key_id", &self.key_id)
            .field("key_secret", &redact(&self.key_secret))
            .field("key_passphrase", &redact(&self.key_passphrase))
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub restlog: Option<RestLogConfig>,

    // Exchange sections share the top level with everything else, so they
    // are collected raw and decoded once the file is parsed.
    #[serde(flatten)]
    sections: HashMap<String, serde_yaml::Value>,

    #[serde(skip)]
    credentials: HashMap<String, Credentials>,
}

impl Config {
    /// Credentials for an exchange, looked up by its registry name or its id
    /// (case-insensitive).
    pub fn credentials(&self, exchange: &str) -> Option<Credentials> {
        self.credentials.get(&exchange.to_lowercase()).cloned()
    }

    /// Decodes the sections named after a supported exchange. Names are
    /// matched case-insensitively, so two sections for the same exchange are
    /// rejected.
    fn decode_credentials(&mut self, path: &Path) -> Result<(), ConfigError> {
        for (section, value) in &self.sections {
            let name = section.to_lowercase();
            if !EXCHANGES.iter().any(|listing| listing.name == name) || value.is_null() {
                continue;
            }
            if self.credentials.contains_key(&name) {
                return Err(ConfigError::DuplicateSection {
                    path: path.to_path_buf(),
                    name,
                });
            }
            let creds = serde_yaml::from_value::<Credentials>(value.clone()).map_err(|source| {
                ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            self.credentials.insert(name, creds);
        }
        Ok(())
    }
}

/// Loads the YAML config at `path`; no path means the default config.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let path = Path::new(path);

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&contents, path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config, ConfigError> {
    // An empty file parses to a YAML null, which is still a valid (default) config.
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    let mut config: Config = serde_yaml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.decode_credentials(path)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
restlog:
  filename: custom-rest.log
  level: INFO
log:
  filename: feed.log
coinbase:
  key_id: abc
  key_secret: shh
  key_passphrase: pass
GEMINI:
  key_id: gem
"#;

    #[test]
    fn test_default_config_without_path() {
        let cfg = load_config(None).unwrap();
        assert!(cfg.restlog.is_none());
        assert!(cfg.credentials("coinbase").is_none());
    }

    #[test]
    fn test_parse_sections() {
        let cfg = parse_config(SAMPLE, Path::new("sample.yaml")).unwrap();
        let restlog = cfg.restlog.as_ref().unwrap();
        assert_eq!(restlog.filename.as_deref(), Some("custom-rest.log"));
        assert_eq!(restlog.level.as_deref(), Some("INFO"));

        let coinbase = cfg.credentials("COINBASE").unwrap();
        assert!(coinbase.is_complete());
        assert_eq!(coinbase.key_passphrase.as_deref(), Some("pass"));

        let gemini = cfg.credentials("gemini").unwrap();
        assert!(!gemini.is_complete());

        assert!(cfg.credentials("kraken").is_none());
    }

    #[test]
    fn test_empty_file_is_default() {
        let cfg = parse_config("  \n", Path::new("empty.yaml")).unwrap();
        assert!(cfg.restlog.is_none());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_config(Some("/definitely/not/here/config.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("crypto-rest-bad-{}.yaml", std::process::id()));
        fs::write(&path, "restlog: [unclosed").unwrap();
        let err = load_config(path.to_str()).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let cfg = parse_config(SAMPLE, Path::new("sample.yaml")).unwrap();
        let printed = format!("{:?}", cfg.credentials("coinbase").unwrap());
        assert!(printed.contains("abc"));
        assert!(!printed.contains("shh"));
        assert!(!printed.contains("\"pass\""));
    }

    #[test]
    fn test_undecodable_credentials_are_parse_error() {
        let err = parse_config(
            "coinbase:\n  key_id: 12345\n  key_secret: abc\n",
            Path::new("numeric.yaml"),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref path, .. } if path == Path::new("numeric.yaml")));

        // Sections that are not exchanges are never decoded as credentials
        let cfg = parse_config("log:\n  key_id: 12345\n", Path::new("other.yaml")).unwrap();
        assert!(cfg.credentials("log").is_none());
    }

    #[test]
    fn test_sections_differing_by_case_are_rejected() {
        let err = parse_config(
            "coinbase:\n  key_id: lower\nCOINBASE:\n  key_id: upper\n",
            Path::new("dup.yaml"),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateSection { ref name, .. } if name == "coinbase"));
    }

    #[test]
    fn test_empty_exchange_section_has_no_credentials() {
        let cfg = parse_config("kraken:\n", Path::new("bare.yaml")).unwrap();
        assert!(cfg.credentials("kraken").is_none());
    }
}

use crate::utils::error::{Result, ZoneError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub zone: ZoneSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZoneSection {
    pub domain: Option<String>,
    pub canister: Option<String>,
    pub output: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${CANISTER_ID})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ZoneError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_zone_section() {
        let toml_content = r#"
[zone]
domain = "hash.aman.run"
canister = "7xbei-4yaaa-aaaad-qg6dq-cai"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.zone.domain.as_deref(), Some("hash.aman.run"));
        assert_eq!(
            config.zone.canister.as_deref(),
            Some("7xbei-4yaaa-aaaad-qg6dq-cai")
        );
        assert!(config.zone.output.is_none());
    }

    #[test]
    fn test_empty_file_is_accepted() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.zone.domain.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ICP_ZONEFILE_TEST_CANISTER", "rrkah-fqaaa-aaaaa-aaaaq-cai");

        let toml_content = r#"
[zone]
domain = "example.org"
canister = "${ICP_ZONEFILE_TEST_CANISTER}"
output = "${ICP_ZONEFILE_TEST_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.zone.canister.as_deref(),
            Some("rrkah-fqaaa-aaaaa-aaaaq-cai")
        );
        assert_eq!(
            config.zone.output.as_deref(),
            Some("${ICP_ZONEFILE_TEST_UNSET}")
        );

        std::env::remove_var("ICP_ZONEFILE_TEST_CANISTER");
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[zone\ndomain = ").unwrap_err();
        assert!(matches!(err, ZoneError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[zone]\ndomain = \"file.example\"\noutput = \"out.zone\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.zone.domain.as_deref(), Some("file.example"));
        assert_eq!(config.zone.output.as_deref(), Some("out.zone"));
    }

    #[test]
    fn test_missing_file() {
        let err = TomlConfig::from_file("/nonexistent/icp-zonefile.toml").unwrap_err();
        assert!(matches!(err, ZoneError::IoError(_)));
    }
}

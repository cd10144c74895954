use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

pub const DEFAULT_EXPORT_FILE: &str = "mental_wellness_entries.xlsx";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory used when an export file name is relative
    pub export_dir: String,
    pub export_file: String,
    pub export_format: ExportFormat,
    /// Ask before `clear` wipes the session
    pub confirm_destructive: bool,
    pub separator_char: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: ".".to_string(),
            export_file: DEFAULT_EXPORT_FILE.to_string(),
            export_format: ExportFormat::Xlsx,
            confirm_destructive: false,
            separator_char: "-".to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wellness-logger")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.yml")
    }

    /// Resolve the config path, honouring a command-line override
    pub fn resolve_path(custom: Option<&Path>) -> PathBuf {
        custom
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the configuration, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Sanity checks that serde cannot express
    pub fn validate(&self) -> AppResult<()> {
        if self.export_file.trim().is_empty() {
            return Err(AppError::Config("export_file must not be empty".into()));
        }
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character, got '{}'",
                self.separator_char
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_to_contract_file_name() {
        let cfg = Config::default();
        assert_eq!(cfg.export_file, "mental_wellness_entries.xlsx");
        assert_eq!(cfg.export_format, ExportFormat::Xlsx);
        assert_eq!(cfg.export_dir, ".");
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let cfg = Config::from_yaml("confirm_destructive: true\nexport_format: csv\n").unwrap();
        assert!(cfg.confirm_destructive);
        assert_eq!(cfg.export_format, ExportFormat::Csv);
        assert_eq!(cfg.export_file, DEFAULT_EXPORT_FILE);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let err = Config::from_yaml("export_format: [not, a, format]").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }

    #[test]
    fn yaml_roundtrip_keeps_values() {
        let cfg = Config {
            export_dir: "/tmp/out".into(),
            confirm_destructive: true,
            ..Config::default()
        };
        let back = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn separator_must_be_one_char() {
        let cfg = Config {
            separator_char: "==".into(),
            ..Config::default()
        };
        assert!(matches!(cfg.validate(), Err(AppError::Config(_))));
        assert!(Config::default().validate().is_ok());
    }
}

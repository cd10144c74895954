//! Detect keys missing from an existing config file.

use crate::config::Config;
use crate::errors::AppResult;
use serde_yaml::Value;

/// Keys present in the default configuration but absent from `content`.
///
/// Missing keys fall back to their defaults when loading, this only reports them.
pub fn missing_fields(content: &str) -> AppResult<Vec<String>> {
    let defaults = serde_yaml::to_value(Config::default())?;
    let current: Value = if content.trim().is_empty() {
        Value::Mapping(Default::default())
    } else {
        serde_yaml::from_str(content)?
    };

    let mut missing = Vec::new();

    if let Value::Mapping(def_map) = defaults {
        for key in def_map.keys() {
            let present = match &current {
                Value::Mapping(m) => m.contains_key(key),
                _ => false,
            };
            if !present && let Some(k) = key.as_str() {
                missing.push(k.to_string());
            }
        }
    }

    Ok(missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_absent_keys() {
        let missing = missing_fields("export_dir: /tmp\nexport_file: a.xlsx\n").unwrap();
        assert_eq!(
            missing,
            vec!["export_format", "confirm_destructive", "separator_char"]
        );
    }

    #[test]
    fn complete_file_has_no_missing_keys() {
        let full = Config::default().to_yaml().unwrap();
        assert!(missing_fields(&full).unwrap().is_empty());
    }
}

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::constants::DEFAULT_SETTINGS_PATH;
use crate::error::{AutocompleteError, Result};
use crate::filter::FilterConfiguration;
use crate::normalize::NormalizationMode;

/// Static settings for one bound input.
///
/// ```toml
/// required = true
/// mode = "strict"
///
/// [filter]
/// placeTypes = "address"
/// countryCode = "us"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerSettings {
    /// Only a confirmed, geocoded selection counts as valid
    pub required: bool,
    pub mode: NormalizationMode,
    /// Filter the widget starts with
    pub filter: Option<FilterConfiguration>,
}

impl ControllerSettings {
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: NormalizationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_filter(mut self, filter: FilterConfiguration) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AutocompleteError::Config(format!(
                "Failed to read settings file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load `place_autocomplete.toml` from the working directory
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_SETTINGS_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::PlaceType;
    use std::io::Write;

    #[test]
    fn test_empty_settings_are_optional_and_strict() {
        let settings = ControllerSettings::from_toml_str("").unwrap();
        assert!(!settings.required);
        assert_eq!(settings.mode, NormalizationMode::Strict);
        assert_eq!(settings.filter, None);
    }

    #[test]
    fn test_full_settings() {
        let settings = ControllerSettings::from_toml_str(
            r#"
            required = true
            mode = "permissive"

            [filter]
            placeTypes = "address"
            countryCode = "us"
            bounds = { south = 1.0, west = 2.0, north = 3.0, east = 4.0 }
            "#,
        )
        .unwrap();

        assert!(settings.required);
        assert_eq!(settings.mode, NormalizationMode::Permissive);
        let filter = settings.filter.unwrap();
        assert_eq!(filter.place_types, Some(PlaceType::Address));
        assert_eq!(filter.country_code.as_deref(), Some("us"));
        assert_eq!(filter.bounds.map(|b| b.east), Some(4.0));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = ControllerSettings::from_toml_str("requird = true").unwrap_err();
        assert!(matches!(err, AutocompleteError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("autocomplete.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "required = true\n[filter]\ncountry = \"ca\"").unwrap();

        let settings = ControllerSettings::load_from(&path).unwrap();
        assert!(settings.required);
        assert_eq!(
            settings.filter.and_then(|f| f.country_code).as_deref(),
            Some("ca")
        );
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ControllerSettings::load_from(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, AutocompleteError::Config(_)));
    }
}

//! Caller-facing result filters and their mapping onto the widget's native options.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Restricts which kind of place the widget suggests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlaceType {
    Geocode,
    Address,
    Establishment,
    Regions,
    Cities,
    /// Passed through to the provider verbatim
    Other(String),
}

impl PlaceType {
    pub fn as_str(&self) -> &str {
        match self {
            PlaceType::Geocode => "geocode",
            PlaceType::Address => "address",
            PlaceType::Establishment => "establishment",
            PlaceType::Regions => "(regions)",
            PlaceType::Cities => "(cities)",
            PlaceType::Other(raw) => raw,
        }
    }
}

impl From<String> for PlaceType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "geocode" => PlaceType::Geocode,
            "address" => PlaceType::Address,
            "establishment" => PlaceType::Establishment,
            "(regions)" => PlaceType::Regions,
            "(cities)" => PlaceType::Cities,
            _ => PlaceType::Other(raw),
        }
    }
}

impl From<PlaceType> for String {
    fn from(place_type: PlaceType) -> Self {
        place_type.as_str().to_string()
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic rectangle, passed through to the widget unchanged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// Caller-supplied restrictions. Absent fields restrict nothing.
///
/// Accepts both `placeTypes`/`countryCode` and the shorter `types`/`country` keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfiguration {
    #[serde(default, alias = "types", skip_serializing_if = "Option::is_none")]
    pub place_types: Option<PlaceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    #[serde(default, alias = "country", skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

impl FilterConfiguration {
    pub fn with_place_types(mut self, place_types: PlaceType) -> Self {
        self.place_types = Some(place_types);
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_country(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRestrictions {
    pub country: String,
}

/// Options object handed to the widget factory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<[String; 1]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<Bounds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_restrictions: Option<ComponentRestrictions>,
}

impl AutocompleteOptions {
    /// Derive widget options; `None` maps to the unrestricted default.
    pub fn from_filter(filter: Option<&FilterConfiguration>) -> Self {
        let Some(filter) = filter else {
            return Self::default();
        };

        Self {
            types: filter.place_types.as_ref().map(|t| [t.as_str().to_string()]),
            bounds: filter.bounds,
            component_restrictions: filter
                .country_code
                .as_ref()
                .map(|country| ComponentRestrictions {
                    country: country.clone(),
                }),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.types.is_none() && self.bounds.is_none() && self.component_restrictions.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_filter_is_unrestricted() {
        assert!(AutocompleteOptions::from_filter(None).is_unrestricted());
        assert!(AutocompleteOptions::from_filter(Some(&FilterConfiguration::default()))
            .is_unrestricted());
    }

    #[test]
    fn test_full_filter_mapping() {
        let bounds = Bounds {
            south: 41.6,
            west: -87.9,
            north: 42.0,
            east: -87.5,
        };
        let filter = FilterConfiguration::default()
            .with_place_types(PlaceType::Cities)
            .with_bounds(bounds)
            .with_country("us");

        let options = AutocompleteOptions::from_filter(Some(&filter));
        assert_eq!(options.types, Some(["(cities)".to_string()]));
        assert_eq!(options.bounds, Some(bounds));
        assert_eq!(
            options.component_restrictions,
            Some(ComponentRestrictions {
                country: "us".to_string()
            })
        );

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "types": ["(cities)"],
                "bounds": { "south": 41.6, "west": -87.9, "north": 42.0, "east": -87.5 },
                "componentRestrictions": { "country": "us" }
            })
        );
    }

    #[test]
    fn test_country_only() {
        let options =
            AutocompleteOptions::from_filter(Some(&FilterConfiguration::default().with_country("ca")));
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "componentRestrictions": { "country": "ca" } })
        );
    }

    #[test]
    fn test_filter_accepts_short_keys() {
        let filter: FilterConfiguration =
            serde_json::from_value(json!({ "types": "establishment", "country": "gb" })).unwrap();
        assert_eq!(filter.place_types, Some(PlaceType::Establishment));
        assert_eq!(filter.country_code.as_deref(), Some("gb"));

        let filter: FilterConfiguration =
            serde_json::from_value(json!({ "placeTypes": "(regions)", "countryCode": "fr" }))
                .unwrap();
        assert_eq!(filter.place_types, Some(PlaceType::Regions));
        assert_eq!(filter.country_code.as_deref(), Some("fr"));
    }

    #[test]
    fn test_unknown_place_type_passes_through() {
        let place_type = PlaceType::from("airport".to_string());
        assert_eq!(place_type, PlaceType::Other("airport".to_string()));

        let options = AutocompleteOptions::from_filter(Some(
            &FilterConfiguration::default().with_place_types(place_type),
        ));
        assert_eq!(options.types, Some(["airport".to_string()]));
    }
}

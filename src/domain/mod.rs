use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One place as reported by the lookup provider.
///
/// Every field is optional on the wire: providers hand back a bare `{ "name": .. }`
/// object when the user presses Enter without picking a suggestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<PlaceGeometry>,
    #[serde(default)]
    pub name: Option<String>,
}

impl PlaceResult {
    /// Parse the JSON a provider hands back for one place
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Coordinates of the place, if the provider geocoded it
    pub fn location(&self) -> Option<LatLng> {
        self.geometry.as_ref().and_then(|g| g.location)
    }
}

/// One labeled fragment of a place (street number, city, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressComponent {
    #[serde(default)]
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    pub fn new(types: &[&str], long_name: &str, short_name: &str) -> Self {
        Self {
            long_name: long_name.to_string(),
            short_name: short_name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// The tag the provider lists first; the only one the normalizer looks at
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceGeometry {
    #[serde(default)]
    pub location: Option<LatLng>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Flattened address produced from a confirmed selection.
///
/// Serializes to the flat object the rest of the application binds to:
/// `{"searchedBy":"city","city":"Springfield","formattedAddress":"..","lat":1.0,"lng":2.0}`.
/// Coordinates live in a single `Option<LatLng>` so `lat` and `lng` can only
/// appear or disappear together.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searched_by: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
    pub formatted_address: String,
    #[serde(flatten)]
    pub location: Option<LatLng>,
}

impl AddressRecord {
    pub fn new(formatted_address: impl Into<String>, location: LatLng) -> Self {
        Self {
            searched_by: None,
            fields: BTreeMap::new(),
            formatted_address: formatted_address.into(),
            location: Some(location),
        }
    }

    /// Look up an address field by its record key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn has_coordinates(&self) -> bool {
        self.location.is_some()
    }

    pub fn lat(&self) -> Option<f64> {
        self.location.map(|l| l.lat)
    }

    pub fn lng(&self) -> Option<f64> {
        self.location.map(|l| l.lng)
    }

    /// Drop everything except `formatted_address`.
    ///
    /// Returns `false` when there was nothing left to remove.
    pub fn strip_to_formatted_address(&mut self) -> bool {
        let had_data =
            self.searched_by.is_some() || !self.fields.is_empty() || self.location.is_some();
        self.searched_by = None;
        self.fields.clear();
        self.location = None;
        had_data
    }
}

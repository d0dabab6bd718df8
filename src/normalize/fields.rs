use serde::{Deserialize, Serialize};

use crate::domain::AddressComponent;

/// Address fields recognized by the strict normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressField {
    StreetNumber,
    StreetName,
    City,
    State,
    PostalCode,
    Country,
}

/// Which of the component's two names a field takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameForm {
    Long,
    Short,
}

impl AddressField {
    pub const ALL: [AddressField; 6] = [
        AddressField::StreetNumber,
        AddressField::StreetName,
        AddressField::City,
        AddressField::State,
        AddressField::PostalCode,
        AddressField::Country,
    ];

    /// Map a provider type tag to the field it fills. Unknown tags yield `None`.
    pub fn from_provider_type(tag: &str) -> Option<Self> {
        match tag {
            "street_number" => Some(AddressField::StreetNumber),
            "route" => Some(AddressField::StreetName),
            "locality" => Some(AddressField::City),
            "administrative_area_level_1" => Some(AddressField::State),
            "postal_code" => Some(AddressField::PostalCode),
            "country" => Some(AddressField::Country),
            _ => None,
        }
    }

    /// Key used in the address record
    pub fn key(&self) -> &'static str {
        match self {
            AddressField::StreetNumber => "streetNumber",
            AddressField::StreetName => "streetName",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::PostalCode => "postalCode",
            AddressField::Country => "country",
        }
    }

    pub fn name_form(&self) -> NameForm {
        match self {
            // "CA", "NY"
            AddressField::State => NameForm::Short,
            _ => NameForm::Long,
        }
    }

    pub fn value_of<'a>(&self, component: &'a AddressComponent) -> &'a str {
        match self.name_form() {
            NameForm::Long => &component.long_name,
            NameForm::Short => &component.short_name,
        }
    }
}

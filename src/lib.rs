//! Binds a text input to a place-lookup widget and keeps the selected place,
//! a flattened address record and the form's validity flag in sync.

pub mod app;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod filter;
pub mod infra;
pub mod normalize;
pub mod observability;

pub use app::{
    parse_validity, AutocompleteWidget, FormControl, KeyCode, KeyDisposition,
    LifecycleController, LifecycleState, SelectionOutcome, WidgetFactory,
};
pub use config::ControllerSettings;
pub use domain::{AddressComponent, AddressRecord, LatLng, PlaceGeometry, PlaceResult};
pub use error::{AutocompleteError, Result};
pub use filter::{AutocompleteOptions, Bounds, ComponentRestrictions, FilterConfiguration, PlaceType};
pub use normalize::{normalize, AddressField, NormalizationMode};

//! Converts provider place results into flat [`AddressRecord`]s.

pub mod fields;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{AddressRecord, PlaceResult};
use crate::observability::metrics::{self, MetricName};

pub use fields::{AddressField, NameForm};

/// How address components are keyed in the record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Fixed field table; unmapped provider tags are dropped
    #[default]
    Strict,
    /// Every component is kept under its raw provider tag, long name
    Permissive,
}

/// Normalize one place result.
///
/// `None` in, or a place without a formatted address or coordinates, yields `None`.
/// Components without type tags are skipped. When two components target the
/// same key the later one wins.
pub fn normalize(place: Option<&PlaceResult>, mode: NormalizationMode) -> Option<AddressRecord> {
    let place = place?;

    let (Some(formatted_address), Some(location)) =
        (place.formatted_address.as_deref(), place.location())
    else {
        debug!(
            name = place.name.as_deref().unwrap_or_default(),
            "Place has no formatted address or geometry, treating as empty"
        );
        metrics::increment(MetricName::NormalizeEmptyPlace);
        return None;
    };

    let mut record = AddressRecord::new(formatted_address, location);

    for (index, component) in place.address_components.iter().enumerate() {
        let Some(tag) = component.primary_type() else {
            continue;
        };

        let entry = match mode {
            NormalizationMode::Strict => AddressField::from_provider_type(tag)
                .map(|field| (field.key().to_string(), field.value_of(component).to_string())),
            NormalizationMode::Permissive => {
                Some((tag.to_string(), component.long_name.clone()))
            }
        };

        if let Some((key, value)) = entry {
            if index == 0 {
                record.searched_by = Some(key.clone());
            }
            record.fields.insert(key, value);
        }
    }

    debug!(
        searched_by = record.searched_by.as_deref().unwrap_or_default(),
        fields = record.fields.len(),
        ?mode,
        "Normalized place"
    );
    metrics::increment(MetricName::NormalizeRecordsProduced);

    Some(record)
}

//! Counters for the autocomplete binding.
//!
//! Metrics go through the `metrics` facade. Nothing is recorded until the host
//! application installs a recorder, so the library never owns an exporter.

use std::fmt;
use std::sync::Once;

use tracing::debug;

/// Enum representing all metric names used by the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Normalize metrics
    NormalizeRecordsProduced,
    NormalizeEmptyPlace,

    // Widget lifecycle metrics
    WidgetBuilt,
    WidgetBuildError,

    // Selection / keystroke metrics
    SelectionConfirmed,
    SelectionEmpty,
    SelectionIgnored,
    KeystrokeInvalidations,
    EnterSuppressed,
    ValidationCallbackInvoked,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::NormalizeRecordsProduced => "place_autocomplete_normalize_records_total",
            MetricName::NormalizeEmptyPlace => "place_autocomplete_normalize_empty_total",
            MetricName::WidgetBuilt => "place_autocomplete_widget_built_total",
            MetricName::WidgetBuildError => "place_autocomplete_widget_build_error_total",
            MetricName::SelectionConfirmed => "place_autocomplete_selection_confirmed_total",
            MetricName::SelectionEmpty => "place_autocomplete_selection_empty_total",
            MetricName::SelectionIgnored => "place_autocomplete_selection_ignored_total",
            MetricName::KeystrokeInvalidations => "place_autocomplete_keystroke_invalidations_total",
            MetricName::EnterSuppressed => "place_autocomplete_enter_suppressed_total",
            MetricName::ValidationCallbackInvoked => {
                "place_autocomplete_validation_callback_total"
            }
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MetricName::NormalizeRecordsProduced => "Place results normalized into address records",
            MetricName::NormalizeEmptyPlace => "Place results without geometry or formatted address",
            MetricName::WidgetBuilt => "Autocomplete widget instances constructed",
            MetricName::WidgetBuildError => "Autocomplete widget constructions that failed",
            MetricName::SelectionConfirmed => "Selections that produced an address record",
            MetricName::SelectionEmpty => "Selections that produced no address record",
            MetricName::SelectionIgnored => "Place-changed events received with no active widget",
            MetricName::KeystrokeInvalidations => "Keystrokes that invalidated a confirmed address",
            MetricName::EnterSuppressed => "Enter keypresses prevented from submitting the form",
            MetricName::ValidationCallbackInvoked => "Caller validation callbacks run after a valid selection",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [
            NormalizeRecordsProduced,
            NormalizeEmptyPlace,
            WidgetBuilt,
            WidgetBuildError,
            SelectionConfirmed,
            SelectionEmpty,
            SelectionIgnored,
            KeystrokeInvalidations,
            EnterSuppressed,
            ValidationCallbackInvoked,
        ]
        .into_iter()
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static DESCRIBE: Once = Once::new();

/// Register descriptions with whatever recorder is installed. Idempotent.
pub fn describe_all() {
    DESCRIBE.call_once(|| {
        for name in MetricName::all_metrics() {
            ::metrics::describe_counter!(name.as_str(), name.description());
        }
        debug!("Registered autocomplete metric descriptions");
    });
}

pub fn increment(name: MetricName) {
    ::metrics::counter!(name.as_str()).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_metric_names_are_unique_and_prefixed() {
        let names: HashSet<&str> = MetricName::all_metrics().map(|m| m.as_str()).collect();
        assert_eq!(names.len(), MetricName::all_metrics().count());
        assert!(names.iter().all(|n| n.starts_with("place_autocomplete_")));
        assert!(names.iter().all(|n| n.ends_with("_total")));
    }

    #[test]
    fn test_increment_without_recorder_is_noop() {
        describe_all();
        increment(MetricName::WidgetBuilt);
        assert_eq!(
            MetricName::WidgetBuilt.to_string(),
            "place_autocomplete_widget_built_total"
        );
    }
}

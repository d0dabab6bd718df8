use tracing::{debug, info, warn};

use crate::app::keys::{KeyCode, KeyDisposition};
use crate::app::ports::{AutocompleteWidget, FormControl, WidgetFactory};
use crate::config::ControllerSettings;
use crate::constants::PARSE_VALIDATOR_KEY;
use crate::domain::AddressRecord;
use crate::error::Result;
use crate::filter::{AutocompleteOptions, FilterConfiguration};
use crate::normalize::normalize;
use crate::observability::metrics::{self, MetricName};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// No widget instance
    Idle,
    /// Widget attached and listening for selections
    Active,
    /// Old widget dropped, new one being built
    Rebuilding,
}

/// What a place-changed event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOutcome {
    /// The event reached an active widget
    pub handled: bool,
    /// A geocoded record was written
    pub confirmed: bool,
    /// Result of the synchronous re-validation
    pub valid: bool,
    /// The caller's validation callback ran
    pub callback_invoked: bool,
}

impl SelectionOutcome {
    fn ignored() -> Self {
        Self {
            handled: false,
            confirmed: false,
            valid: false,
            callback_invoked: false,
        }
    }
}

/// The `"parse"` validator.
///
/// A required field is valid only with a geocoded record. An optional field is
/// valid with a geocoded record, or with unconfirmed free text as long as the
/// input is not empty.
pub fn parse_validity(required: bool, record: Option<&AddressRecord>, raw_text: &str) -> bool {
    let geocoded = record.is_some_and(AddressRecord::has_coordinates);
    if required {
        geocoded
    } else {
        geocoded || !raw_text.is_empty()
    }
}

struct InstalledWidget<W> {
    widget: W,
    options: AutocompleteOptions,
    generation: u64,
}

/// Keeps one place-lookup widget, the address record and the form validity in step.
///
/// The host dispatches its events into the named handlers: [`configure`] when
/// the filter changes, [`place_changed`] when the widget reports a selection,
/// [`key_press`] and [`key_up`] for keyboard input, and [`validate`] whenever the
/// form asks for re-validation.
///
/// [`configure`]: LifecycleController::configure
/// [`place_changed`]: LifecycleController::place_changed
/// [`key_press`]: LifecycleController::key_press
/// [`key_up`]: LifecycleController::key_up
/// [`validate`]: LifecycleController::validate
pub struct LifecycleController<F: WidgetFactory, C: FormControl> {
    factory: F,
    control: C,
    settings: ControllerSettings,
    state: LifecycleState,
    widget: Option<InstalledWidget<F::Widget>>,
    generation: u64,
    filter: Option<FilterConfiguration>,
    record: Option<AddressRecord>,
    on_valid_selection: Option<Box<dyn FnMut()>>,
}

impl<F: WidgetFactory, C: FormControl> LifecycleController<F, C> {
    pub fn new(factory: F, control: C, settings: ControllerSettings) -> Self {
        Self {
            factory,
            control,
            settings,
            state: LifecycleState::Idle,
            widget: None,
            generation: 0,
            filter: None,
            record: None,
            on_valid_selection: None,
        }
    }

    /// Run `callback` after every selection that leaves the field valid
    pub fn with_validation_callback(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_valid_selection = Some(Box::new(callback));
        self
    }

    /// Build the first widget from the filter in the settings
    pub fn start(&mut self) -> Result<()> {
        let filter = self.settings.filter.clone();
        self.configure(filter)
    }

    /// Handle a new filter configuration.
    ///
    /// Always discards the current widget and builds a fresh one, even when the
    /// filter is unchanged, then clears the input text. If the factory fails the
    /// controller is left Idle.
    pub fn configure(&mut self, filter: Option<FilterConfiguration>) -> Result<()> {
        if self.state == LifecycleState::Active {
            self.state = LifecycleState::Rebuilding;
        }
        if let Some(old) = self.widget.take() {
            debug!(generation = old.generation, "Discarding autocomplete widget");
        }

        let options = AutocompleteOptions::from_filter(filter.as_ref());
        self.filter = filter;

        let widget = match self.factory.create(&options) {
            Ok(widget) => widget,
            Err(e) => {
                warn!(error = %e, ?options, "Failed to build autocomplete widget");
                metrics::increment(MetricName::WidgetBuildError);
                self.state = LifecycleState::Idle;
                return Err(e);
            }
        };

        self.generation += 1;
        info!(generation = self.generation, ?options, "Autocomplete widget built");
        metrics::increment(MetricName::WidgetBuilt);

        self.widget = Some(InstalledWidget {
            widget,
            options,
            generation: self.generation,
        });
        self.state = LifecycleState::Active;
        self.control.clear_raw_text();
        Ok(())
    }

    /// Handle the widget's place-changed event.
    ///
    /// The record is written first, then validity is recomputed, and the
    /// caller's callback runs only if that fresh result is valid.
    pub fn place_changed(&mut self) -> SelectionOutcome {
        let Some(installed) = self.widget.as_ref().filter(|_| self.state == LifecycleState::Active)
        else {
            debug!(state = ?self.state, "Place changed without an active widget");
            metrics::increment(MetricName::SelectionIgnored);
            return SelectionOutcome::ignored();
        };

        let place = installed.widget.place();
        self.record = normalize(place.as_ref(), self.settings.mode);

        let confirmed = self.record.as_ref().is_some_and(AddressRecord::has_coordinates);
        if confirmed {
            metrics::increment(MetricName::SelectionConfirmed);
        } else {
            metrics::increment(MetricName::SelectionEmpty);
        }

        let valid = self.validate();

        let callback_invoked = match self.on_valid_selection.as_mut() {
            Some(callback) if valid => {
                callback();
                metrics::increment(MetricName::ValidationCallbackInvoked);
                true
            }
            _ => false,
        };

        debug!(confirmed, valid, callback_invoked, "Place selection processed");
        SelectionOutcome {
            handled: true,
            confirmed,
            valid,
            callback_invoked,
        }
    }

    /// Handle a keypress. Enter is always prevented so the form is not submitted
    /// while the address is still being composed.
    pub fn key_press(&mut self, key: KeyCode) -> KeyDisposition {
        if key.is_enter() {
            metrics::increment(MetricName::EnterSuppressed);
            KeyDisposition::PreventDefault
        } else {
            KeyDisposition::Default
        }
    }

    /// Handle a keyup.
    ///
    /// An editing key after a selection strips the record down to its
    /// formatted address and marks the field invalid. Returns whether the
    /// validity flag was flipped.
    pub fn key_up(&mut self, key: KeyCode) -> bool {
        if !key.is_editing() || self.state != LifecycleState::Active {
            return false;
        }
        let Some(record) = self.record.as_mut() else {
            return false;
        };

        if record.strip_to_formatted_address() {
            debug!(key = key.0, "Typing invalidated the confirmed address");
        }

        if !self.control.is_valid() {
            return false;
        }
        self.control.set_validity(PARSE_VALIDATOR_KEY, false);
        metrics::increment(MetricName::KeystrokeInvalidations);
        true
    }

    /// Run the `"parse"` validator, publish the result, and return it
    pub fn validate(&mut self) -> bool {
        let valid = parse_validity(
            self.settings.required,
            self.record.as_ref(),
            self.control.raw_text(),
        );
        self.control.set_validity(PARSE_VALIDATOR_KEY, valid);
        valid
    }

    pub fn set_required(&mut self, required: bool) {
        self.settings.required = required;
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn record(&self) -> Option<&AddressRecord> {
        self.record.as_ref()
    }

    pub fn filter(&self) -> Option<&FilterConfiguration> {
        self.filter.as_ref()
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn widget(&self) -> Option<&F::Widget> {
        self.widget.as_ref().map(|w| &w.widget)
    }

    /// Options the live widget was built with
    pub fn options(&self) -> Option<&AutocompleteOptions> {
        self.widget.as_ref().map(|w| &w.options)
    }

    /// Number of widgets built so far; the live one carries this number
    pub fn widget_generation(&self) -> u64 {
        self.generation
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }
}

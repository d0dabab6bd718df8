pub mod controller;
pub mod keys;
pub mod ports;

pub use controller::{parse_validity, LifecycleController, LifecycleState, SelectionOutcome};
pub use keys::{KeyCode, KeyDisposition};
pub use ports::{AutocompleteWidget, FormControl, WidgetFactory};

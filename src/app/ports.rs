use crate::domain::PlaceResult;
use crate::error::Result;
use crate::filter::AutocompleteOptions;

/// A live place-lookup widget bound to the input.
///
/// The widget signals "place changed" without a payload; the controller pulls
/// the current place through this getter.
pub trait AutocompleteWidget {
    fn place(&self) -> Option<PlaceResult>;
}

/// Builds widget instances for the bound input. Stands in for the provider SDK.
pub trait WidgetFactory {
    type Widget: AutocompleteWidget;

    fn create(&mut self, options: &AutocompleteOptions) -> Result<Self::Widget>;
}

/// The host form control the input belongs to
pub trait FormControl {
    /// Raw text currently in the input
    fn raw_text(&self) -> &str;

    fn clear_raw_text(&mut self);

    /// Overall validity across every validator key
    fn is_valid(&self) -> bool;

    fn set_validity(&mut self, key: &str, valid: bool);
}

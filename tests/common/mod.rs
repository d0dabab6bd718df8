#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use place_autocomplete::{
    AddressComponent, AutocompleteOptions, AutocompleteWidget, LatLng, PlaceGeometry,
    PlaceResult, Result, WidgetFactory,
};

/// What the provider would currently return from its place getter
#[derive(Clone, Default)]
pub struct PlaceFeed(Rc<RefCell<Option<PlaceResult>>>);

impl PlaceFeed {
    pub fn select(&self, place: PlaceResult) {
        *self.0.borrow_mut() = Some(place);
    }

    pub fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

pub struct FakeWidget {
    pub id: usize,
    pub options: AutocompleteOptions,
    feed: PlaceFeed,
}

impl AutocompleteWidget for FakeWidget {
    fn place(&self) -> Option<PlaceResult> {
        self.feed.0.borrow().clone()
    }
}

#[derive(Default)]
pub struct FakeFactory {
    pub feed: PlaceFeed,
    pub built: Rc<RefCell<Vec<AutocompleteOptions>>>,
}

impl WidgetFactory for FakeFactory {
    type Widget = FakeWidget;

    fn create(&mut self, options: &AutocompleteOptions) -> Result<FakeWidget> {
        let mut built = self.built.borrow_mut();
        built.push(options.clone());
        Ok(FakeWidget {
            id: built.len(),
            options: options.clone(),
            feed: self.feed.clone(),
        })
    }
}

pub fn springfield() -> PlaceResult {
    PlaceResult {
        address_components: vec![AddressComponent::new(
            &["locality", "political"],
            "Springfield",
            "Springfield",
        )],
        formatted_address: Some("Springfield, USA".to_string()),
        geometry: Some(PlaceGeometry {
            location: Some(LatLng::new(1.0, 2.0)),
        }),
        name: Some("Springfield".to_string()),
    }
}

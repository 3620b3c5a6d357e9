//! Input → action table for the search widget.
//!
//! Events are described independently of how they were delivered (DOM
//! listener, HTTP request, terminal); [`map_event`] is the only place that
//! decides what each one does.

use crate::models::ProductId;

/// What was clicked inside the results container.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickTarget {
    TrackButton,
    Other,
}

#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    /// The search button was clicked; `input` is the field's raw text.
    SearchClicked { input: String },
    /// A key was pressed in the search field.
    KeyPressed { key: String, input: String },
    /// A click landed in the results container. `card_product_id` is the id
    /// attached to the enclosing product card, if any.
    ResultsClicked {
        target: ClickTarget,
        card_product_id: Option<ProductId>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Run a search with this raw input.
    Search(String),
    TrackPrice(ProductId),
    Nothing,
}

pub fn map_event(event: &UiEvent) -> Action {
    match event {
        UiEvent::SearchClicked { input } => Action::Search(input.clone()),
        UiEvent::KeyPressed { key, input } if key == "Enter" => Action::Search(input.clone()),
        UiEvent::KeyPressed { .. } => Action::Nothing,
        UiEvent::ResultsClicked {
            target: ClickTarget::TrackButton,
            card_product_id: Some(id),
        } => Action::TrackPrice(id.clone()),
        UiEvent::ResultsClicked { .. } => Action::Nothing,
    }
}

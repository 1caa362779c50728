//! Component state for the program picker.
//!
//! Wraps the platform-independent [`PickerState`] together with what only
//! exists in the browser: the `<select>` reference and the abort handles of
//! requests still in flight.

use std::collections::HashMap;

use common::model::program::ProgramOption;
use common::picker::{DeclinePolicy, LoadTicket, PickerState};
use web_sys::{AbortController, HtmlSelectElement};
use yew::prelude::*;

use super::props::ProgramPickerProps;

pub struct ProgramPickerComponent {
    /// Selection, text and pending-load bookkeeping.
    pub picker: PickerState,

    /// Abort handles keyed by the load they belong to.
    pub in_flight: HashMap<LoadTicket, AbortController>,

    /// Reference to the `<select>` DOM node.
    pub select_ref: NodeRef,

    /// Guard to avoid fetching the catalogue more than once.
    pub loaded: bool,
}

impl ProgramPickerComponent {
    pub fn new(props: &ProgramPickerProps) -> Self {
        let mut options = Vec::with_capacity(props.options.len() + 1);
        options.push(ProgramOption::user_supplied(props.user_supplied_label.as_str()));
        options.extend(props.options.iter().cloned());

        let policy = if props.revert_on_decline {
            DeclinePolicy::RevertSelection
        } else {
            DeclinePolicy::KeepSelection
        };

        Self {
            picker: PickerState::new(options)
                .with_selected_index(props.initial_index)
                .with_decline_policy(policy),
            in_flight: HashMap::new(),
            select_ref: NodeRef::default(),
            loaded: false,
        }
    }

    /// Makes the `<select>` show the selection held in `picker`.
    ///
    /// The `selected` attribute only sets the initial choice, so after the
    /// user has touched the dropdown it has to be moved through the property.
    pub fn sync_select(&self) {
        if let Some(select) = self.select_ref.cast::<HtmlSelectElement>() {
            let index = self.picker.selected_index() as i32;
            if select.selected_index() != index {
                select.set_selected_index(index);
            }
        }
    }
}

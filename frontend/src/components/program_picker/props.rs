//! Defines the properties for the `ProgramPickerComponent`.

use common::model::program::ProgramOption;
use yew::prelude::*;

/// Properties for the `ProgramPickerComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct ProgramPickerProps {
    /// Example programs to offer, in display order.
    ///
    /// The user-supplied slot is added in front of these. When the list is
    /// empty (the default) the catalogue is fetched from `catalog_url` on
    /// first render instead.
    #[prop_or_default]
    pub options: Vec<ProgramOption>,

    /// Where the example catalogue is served.
    #[prop_or(AttrValue::from("/api/examples"))]
    pub catalog_url: AttrValue,

    /// Label of the slot-0 entry.
    #[prop_or(AttrValue::from("Your own program"))]
    pub user_supplied_label: AttrValue,

    /// Option selected when the page loads.
    #[prop_or_default]
    pub initial_index: usize,

    /// Move the dropdown back to the user-supplied slot when the overwrite
    /// prompt is declined.
    #[prop_or_default]
    pub revert_on_decline: bool,
}

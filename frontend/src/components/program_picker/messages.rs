use common::picker::PickerMsg;

pub enum Msg {
    /// An event for the picker state machine.
    Picker(PickerMsg),
    /// Ask the backend for the example catalogue.
    FetchCatalog,
}

impl From<PickerMsg> for Msg {
    fn from(msg: PickerMsg) -> Self {
        Msg::Picker(msg)
    }
}

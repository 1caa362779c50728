use crate::model::program::ProgramOption;
use crate::requests::LoadError;

use super::state::LoadTicket;

/// Events fed into [`super::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerMsg {
    /// The dropdown now shows the option at this index.
    SelectionChanged(usize),
    /// Answer to a [`PickerCmd::ConfirmOverwrite`].
    OverwriteAnswered(bool),
    /// The user edited the text area; carries its full new value.
    TextInput(String),
    /// A [`PickerCmd::Fetch`] completed.
    LoadFinished {
        ticket: LoadTicket,
        result: Result<String, LoadError>,
    },
    /// The example catalogue arrived (or failed to).
    CatalogLoaded(Result<Vec<ProgramOption>, LoadError>),
}

/// Side effects requested by [`super::update`]; the caller runs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerCmd {
    None,
    /// Ask the user a yes/no question and answer with
    /// [`PickerMsg::OverwriteAnswered`].
    ConfirmOverwrite { prompt: &'static str },
    /// GET `path` and report back with [`PickerMsg::LoadFinished`].
    Fetch { ticket: LoadTicket, path: String },
    /// Abort the request started for this ticket.
    Cancel(LoadTicket),
    /// Write the error to the console.
    Log(LoadError),
    Batch(Vec<PickerCmd>),
}

impl PickerCmd {
    /// Builds a batch, collapsing it when it holds zero or one command.
    pub fn batch(cmds: Vec<PickerCmd>) -> PickerCmd {
        let mut cmds: Vec<PickerCmd> = cmds
            .into_iter()
            .filter(|cmd| *cmd != PickerCmd::None)
            .collect();
        match cmds.len() {
            0 => PickerCmd::None,
            1 => cmds.remove(0),
            _ => PickerCmd::Batch(cmds),
        }
    }
}

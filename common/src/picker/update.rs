//! Update function for the program picker.
//!
//! `update` receives the current [`PickerState`] and a [`PickerMsg`], mutates
//! the state, and returns the [`PickerCmd`] the caller has to execute. It does
//! no I/O, so every transition can be exercised without a browser.
//!
//! Key behaviors
//! - Picking the sentinel option loads nothing.
//! - Picking a preset over text the user typed asks first.
//! - Editing the text by hand moves the dropdown back to the user-supplied slot.
//! - A newer load cancels the older one; late results of a cancelled load are
//!   ignored.

use crate::model::program::{ProgramOption, USER_SUPPLIED_INDEX};
use crate::requests::LoadError;

use super::messages::{PickerCmd, PickerMsg};
use super::state::{DeclinePolicy, LoadTicket, OVERWRITE_PROMPT, PendingOverwrite, PickerState};

pub fn update(state: &mut PickerState, msg: PickerMsg) -> PickerCmd {
    match msg {
        PickerMsg::SelectionChanged(index) => selection_changed(state, index),
        PickerMsg::OverwriteAnswered(accepted) => overwrite_answered(state, accepted),
        PickerMsg::TextInput(text) => text_input(state, text),
        PickerMsg::LoadFinished { ticket, result } => load_finished(state, ticket, result),
        PickerMsg::CatalogLoaded(result) => catalog_loaded(state, result),
    }
}

fn selection_changed(state: &mut PickerState, index: usize) -> PickerCmd {
    let Some(option) = state.options.get(index) else {
        return PickerCmd::None;
    };
    let is_sentinel = option.is_sentinel();
    let path = option.value.clone();

    state.selected_index = index;
    state.awaiting_confirmation = None;

    let cmd = if is_sentinel {
        PickerCmd::None
    } else if !state.content.is_empty() && state.previous_selected_index == USER_SUPPLIED_INDEX {
        state.awaiting_confirmation = Some(PendingOverwrite { path });
        PickerCmd::ConfirmOverwrite {
            prompt: OVERWRITE_PROMPT,
        }
    } else {
        start_load(state, path)
    };

    // Advances on every branch, including a prompt that is later declined.
    state.previous_selected_index = index;
    cmd
}

fn overwrite_answered(state: &mut PickerState, accepted: bool) -> PickerCmd {
    let Some(PendingOverwrite { path }) = state.awaiting_confirmation.take() else {
        return PickerCmd::None;
    };

    if accepted {
        return start_load(state, path);
    }

    if state.decline_policy == DeclinePolicy::RevertSelection {
        state.selected_index = USER_SUPPLIED_INDEX;
        state.previous_selected_index = USER_SUPPLIED_INDEX;
    }
    PickerCmd::None
}

fn text_input(state: &mut PickerState, text: String) -> PickerCmd {
    state.content = text;

    if state.selected_index != USER_SUPPLIED_INDEX {
        state.selected_index = USER_SUPPLIED_INDEX;
        state.previous_selected_index = USER_SUPPLIED_INDEX;
    }

    // A load finishing now would overwrite what was just typed.
    match state.pending.take() {
        Some(ticket) => PickerCmd::Cancel(ticket),
        None => PickerCmd::None,
    }
}

fn load_finished(
    state: &mut PickerState,
    ticket: LoadTicket,
    result: Result<String, LoadError>,
) -> PickerCmd {
    if state.pending != Some(ticket) {
        return PickerCmd::None;
    }
    state.pending = None;

    match result {
        Ok(text) => {
            state.content = trim_program_text(&text).to_string();
            PickerCmd::None
        }
        Err(err) => PickerCmd::Log(err),
    }
}

fn catalog_loaded(
    state: &mut PickerState,
    result: Result<Vec<ProgramOption>, LoadError>,
) -> PickerCmd {
    let programs = match result {
        Ok(programs) => programs,
        Err(err) => return PickerCmd::Log(err),
    };

    let selected_value = state.selected_option().map(|o| o.value.clone());
    state.options.truncate(USER_SUPPLIED_INDEX + 1);
    state.options.extend(programs);

    let reselected = if state.selected_index == USER_SUPPLIED_INDEX {
        Some(USER_SUPPLIED_INDEX)
    } else {
        selected_value.and_then(|value| state.options.iter().position(|o| o.value == value))
    };

    match reselected {
        Some(index) => {
            if state.previous_selected_index == state.selected_index {
                state.previous_selected_index = index;
            }
            state.selected_index = index;
        }
        None => {
            state.selected_index = USER_SUPPLIED_INDEX;
            state.previous_selected_index = USER_SUPPLIED_INDEX;
        }
    }
    PickerCmd::None
}

fn start_load(state: &mut PickerState, path: String) -> PickerCmd {
    let superseded = state.pending.take();
    let ticket = state.issue_ticket();
    state.pending = Some(ticket);

    PickerCmd::batch(vec![
        superseded.map_or(PickerCmd::None, PickerCmd::Cancel),
        PickerCmd::Fetch { ticket, path },
    ])
}

/// Strips the same leading and trailing characters a browser's
/// `String.prototype.trim` does: Unicode white space except NEL (U+0085),
/// plus the byte order mark.
fn trim_program_text(text: &str) -> &str {
    text.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

//! Program picker: keeps a text buffer in step with a dropdown of example
//! programs.
//!
//! The picker is split the same way as the UI components that drive it:
//! `state` holds the data, `messages` the inputs and side effects, and
//! `update` the transitions between them.

mod messages;
mod state;
mod update;

pub use messages::{PickerCmd, PickerMsg};
pub use state::{DeclinePolicy, LoadTicket, OVERWRITE_PROMPT, PickerState};
pub use update::update;

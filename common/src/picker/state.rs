//! State held by one program picker for the lifetime of the page.
//!
//! The dropdown selection and the text area content are kept together in
//! [`PickerState`] so both event handlers work on the same explicit object.

use crate::model::program::{ProgramOption, USER_SUPPLIED_INDEX};

/// Question asked before a load would replace text the user typed.
pub const OVERWRITE_PROMPT: &str = "Delete existing user-supplied program?";

/// Identifies one in-flight load. A result carrying a ticket that is no
/// longer pending belongs to a superseded load and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

/// What happens to the dropdown when the overwrite prompt is declined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeclinePolicy {
    /// The dropdown keeps showing the option that was picked, and that
    /// option becomes the previous selection even though nothing was loaded.
    #[default]
    KeepSelection,
    /// The dropdown goes back to the user-supplied slot.
    RevertSelection,
}

/// A load that is waiting for the user to answer the overwrite prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct PendingOverwrite {
    pub(super) path: String,
}

#[derive(Debug, Clone)]
pub struct PickerState {
    pub(super) options: Vec<ProgramOption>,
    pub(super) selected_index: usize,
    pub(super) previous_selected_index: usize,
    pub(super) content: String,
    pub(super) pending: Option<LoadTicket>,
    pub(super) awaiting_confirmation: Option<PendingOverwrite>,
    pub(super) decline_policy: DeclinePolicy,
    next_ticket: u64,
}

impl PickerState {
    /// Creates a picker over `options`, where `options[0]` is the
    /// user-supplied slot. Starts with an empty text area and slot 0 selected.
    pub fn new(options: Vec<ProgramOption>) -> Self {
        Self {
            options,
            selected_index: USER_SUPPLIED_INDEX,
            previous_selected_index: USER_SUPPLIED_INDEX,
            content: String::new(),
            pending: None,
            awaiting_confirmation: None,
            decline_policy: DeclinePolicy::default(),
            next_ticket: 0,
        }
    }

    /// Starts with `index` selected, as when the markup preselects an option.
    /// Out-of-range indexes are ignored.
    pub fn with_selected_index(mut self, index: usize) -> Self {
        if index < self.options.len() {
            self.selected_index = index;
            self.previous_selected_index = index;
        }
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_decline_policy(mut self, policy: DeclinePolicy) -> Self {
        self.decline_policy = policy;
        self
    }

    pub fn options(&self) -> &[ProgramOption] {
        &self.options
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn previous_selected_index(&self) -> usize {
        self.previous_selected_index
    }

    pub fn selected_option(&self) -> Option<&ProgramOption> {
        self.options.get(self.selected_index)
    }

    /// Current text area content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Ticket of the load in flight, if any.
    pub fn pending(&self) -> Option<LoadTicket> {
        self.pending
    }

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.awaiting_confirmation.is_some()
    }

    pub(super) fn issue_ticket(&mut self) -> LoadTicket {
        self.next_ticket += 1;
        LoadTicket(self.next_ticket)
    }
}

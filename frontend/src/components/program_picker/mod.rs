//! Dropdown of example programs bound to an editable text area. This module
//! holds the Yew lifecycle; the decisions come from `common::picker`.
//!
//! On mount
//! - The component is built from its props; `update` and `view` do the rest.
//! - On first render, fetch the example catalogue when no options were passed in.
//! - After every render, move the `<select>` to the selection held in state.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ProgramPickerProps;
pub use state::ProgramPickerComponent;

impl Component for ProgramPickerComponent {
    type Message = Msg;
    type Properties = ProgramPickerProps;

    fn create(ctx: &Context<Self>) -> Self {
        ProgramPickerComponent::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            if ctx.props().options.is_empty() {
                ctx.link().send_message(Msg::FetchCatalog);
            }
        }
        self.sync_select();
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        for (_, controller) in self.in_flight.drain() {
            controller.abort();
        }
    }
}

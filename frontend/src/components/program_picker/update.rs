//! Update function for the program picker component.
//!
//! Feeds messages into [`common::picker::update`] and carries out the commands
//! it returns: the overwrite dialog, program fetches, aborts and console logs.

use common::picker::{self, LoadTicket, PickerCmd, PickerMsg};
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;

use super::helpers::{confirm, fetch_catalog, fetch_program_text, log_load_error};
use super::messages::Msg;
use super::state::ProgramPickerComponent;

/// Central update function for the component.
///
/// Returns `true` when the view has to re-render.
pub fn update(
    component: &mut ProgramPickerComponent,
    ctx: &Context<ProgramPickerComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Picker(msg) => {
            if let PickerMsg::LoadFinished { ticket, .. } = &msg {
                component.in_flight.remove(ticket);
            }
            dispatch(component, ctx, msg);
            true
        }
        Msg::FetchCatalog => {
            let url = ctx.props().catalog_url.to_string();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = fetch_catalog(&url).await.map(|catalog| catalog.programs);
                link.send_message(PickerMsg::CatalogLoaded(result));
            });
            false
        }
    }
}

fn dispatch(
    component: &mut ProgramPickerComponent,
    ctx: &Context<ProgramPickerComponent>,
    msg: PickerMsg,
) {
    let cmd = picker::update(&mut component.picker, msg);
    run(component, ctx, cmd);
}

fn run(component: &mut ProgramPickerComponent, ctx: &Context<ProgramPickerComponent>, cmd: PickerCmd) {
    match cmd {
        PickerCmd::None => {}
        PickerCmd::ConfirmOverwrite { prompt } => {
            // The dialog blocks, so the answer is handled in the same turn.
            let accepted = confirm(prompt);
            dispatch(component, ctx, PickerMsg::OverwriteAnswered(accepted));
        }
        PickerCmd::Fetch { ticket, path } => start_fetch(component, ctx, ticket, path),
        PickerCmd::Cancel(ticket) => {
            if let Some(controller) = component.in_flight.remove(&ticket) {
                controller.abort();
            }
        }
        PickerCmd::Log(err) => log_load_error(&err),
        PickerCmd::Batch(cmds) => {
            for cmd in cmds {
                run(component, ctx, cmd);
            }
        }
    }
}

fn start_fetch(
    component: &mut ProgramPickerComponent,
    ctx: &Context<ProgramPickerComponent>,
    ticket: LoadTicket,
    path: String,
) {
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(|c| c.signal());
    if let Some(controller) = controller {
        component.in_flight.insert(ticket, controller);
    }

    let link = ctx.link().clone();
    spawn_local(async move {
        let result = fetch_program_text(&path, signal.as_ref()).await;
        link.send_message(PickerMsg::LoadFinished { ticket, result });
    });
}

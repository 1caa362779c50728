//! View rendering for the program picker: one dropdown of example programs
//! above one editable text area.
//!
//! The element ids `example_lbl` and `program_area` are kept stable so page
//! styles and scripts can address them.

use common::picker::PickerMsg;
use wasm_bindgen::JsCast;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ProgramPickerComponent;

pub fn view(component: &ProgramPickerComponent, ctx: &Context<ProgramPickerComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="program-picker">
            { build_select(component, link) }
            { build_textarea(component, link) }
        </div>
    }
}

fn build_select(component: &ProgramPickerComponent, link: &Scope<ProgramPickerComponent>) -> Html {
    let selected = component.picker.selected_index();
    let options = component
        .picker
        .options()
        .iter()
        .enumerate()
        .map(|(index, option)| {
            html! {
                <option value={option.value.clone()} selected={index == selected}>
                    { option.label.clone() }
                </option>
            }
        })
        .collect::<Html>();

    html! {
        <label class="program-picker-label">
            {"Example: "}
            <select
                id="example_lbl"
                ref={component.select_ref.clone()}
                onchange={link.batch_callback(|e: Event| {
                    e.target()
                        .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
                        .and_then(|select| usize::try_from(select.selected_index()).ok())
                        .map(|index| Msg::from(PickerMsg::SelectionChanged(index)))
                })}
            >
                { options }
            </select>
        </label>
    }
}

fn build_textarea(component: &ProgramPickerComponent, link: &Scope<ProgramPickerComponent>) -> Html {
    html! {
        <textarea
            id="program_area"
            value={component.picker.content().to_string()}
            spellcheck="false"
            rows={20}
            cols={80}
            oninput={link.callback(|e: InputEvent| {
                let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
                Msg::from(PickerMsg::TextInput(value))
            })}
        />
    }
}

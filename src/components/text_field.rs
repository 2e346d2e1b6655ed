//! Form Field Components
//!
//! Labelled text and amount inputs bound to a draft field.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use catalog_draft::{amount, parse_amount};

/// Text input (or textarea) that reports every keystroke
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(optional)] multiline: bool,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                rows="2"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            {input}
        </label>
    }
}

/// Number input that commits on change; invalid input snaps back
#[component]
pub fn AmountField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<f64>,
    #[prop(into)] on_commit: Callback<f64>,
) -> impl IntoView {
    view! {
        <label class="field amount-field">
            <span class="field-label">{label}</span>
            <input
                type="number"
                step="0.01"
                min="0"
                prop:value=move || amount(value.get())
                on:change=move |ev| {
                    let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                        return;
                    };
                    match parse_amount(&input.value()) {
                        Some(v) => on_commit.run(v),
                        None => {
                            log::warn!("[FORM] ignoring invalid amount {:?}", input.value());
                            input.set_value(&amount(value.get_untracked()));
                        }
                    }
                }
            />
        </label>
    }
}

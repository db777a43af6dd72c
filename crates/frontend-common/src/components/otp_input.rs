//! Fixed-length single-digit OTP input row.
//!
//! Rendering and focus orchestration for the [`OtpCode`](crate::otp::OtpCode)
//! model: typing advances, backspace on an empty field moves back, paste
//! distributes digits, and a fully filled row fires `on_complete` without an
//! explicit button press.

use crate::otp::{Focus, OtpCode};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OtpInputProps {
    pub length: usize,
    /// Fired with the full code whenever every field holds a digit
    pub on_complete: Callback<String>,
    /// Fired with the (possibly partial) code after every edit
    #[prop_or_default]
    pub on_change: Callback<String>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(OtpInput)]
pub fn otp_input(props: &OtpInputProps) -> Html {
    let code = use_state(|| OtpCode::new(props.length));
    let refs = use_memo(props.length, |len| {
        (0..*len).map(|_| NodeRef::default()).collect::<Vec<NodeRef>>()
    });

    // Focus the first field on mount
    {
        let refs = refs.clone();
        use_effect_with((), move |_| {
            if let Some(input) = refs.first().and_then(|r| r.cast::<HtmlInputElement>()) {
                let _ = input.focus();
            }
            || ()
        });
    }

    let apply: Rc<dyn Fn(Focus, &OtpCode)> = {
        let refs = refs.clone();
        let on_complete = props.on_complete.clone();
        Rc::new(move |focus, code: &OtpCode| match focus {
            Focus::Field(idx) => {
                if let Some(input) = refs.get(idx).and_then(|r| r.cast::<HtmlInputElement>()) {
                    let _ = input.focus();
                }
            }
            Focus::Submit => on_complete.emit(code.code()),
            Focus::Stay => {}
        })
    };

    let fields = (0..props.length)
        .map(|idx| {
            let oninput = {
                let code = code.clone();
                let apply = apply.clone();
                let on_change = props.on_change.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let value = input.value();
                    let mut next = (*code).clone();
                    let focus = if value.is_empty() {
                        next.clear_digit(idx);
                        Focus::Stay
                    } else {
                        next.enter(idx, &value)
                    };
                    // keep the rendered value canonical: one digit or empty
                    input.set_value(&next.digit(idx).map(String::from).unwrap_or_default());
                    on_change.emit(next.code());
                    apply(focus, &next);
                    code.set(next);
                })
            };

            let onkeydown = {
                let code = code.clone();
                let apply = apply.clone();
                Callback::from(move |e: KeyboardEvent| {
                    if e.key() != "Backspace" {
                        return;
                    }
                    let input: HtmlInputElement = e.target_unchecked_into();
                    if !input.value().is_empty() {
                        // native erase fires oninput, handled there
                        return;
                    }
                    e.prevent_default();
                    let mut next = (*code).clone();
                    let focus = next.backspace(idx);
                    apply(focus, &next);
                    code.set(next);
                })
            };

            let onpaste = {
                let code = code.clone();
                let apply = apply.clone();
                let on_change = props.on_change.clone();
                Callback::from(move |e: Event| {
                    let Some(event) = e.dyn_ref::<ClipboardEvent>() else {
                        return;
                    };
                    let text = event
                        .clipboard_data()
                        .and_then(|data| data.get_data("text").ok())
                        .unwrap_or_default();
                    event.prevent_default();
                    let mut next = (*code).clone();
                    let focus = next.paste(idx, &text);
                    on_change.emit(next.code());
                    apply(focus, &next);
                    code.set(next);
                })
            };

            let value = code.digit(idx).map(String::from).unwrap_or_default();
            html! {
                <input
                    type="text"
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    class="w-12 h-14 text-center text-2xl font-semibold border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500"
                    {value}
                    ref={refs[idx].clone()}
                    disabled={props.disabled}
                    {oninput}
                    {onkeydown}
                    {onpaste}
                />
            }
        })
        .collect::<Html>();

    html! {
        <div class="flex gap-3 justify-center">
            {fields}
        </div>
    }
}

//! Modal overlay with guaranteed teardown.
//!
//! One instance per flow: the owning page mounts it conditionally, Escape and
//! backdrop clicks close it through `on_close`, and the document-level key
//! listener is released on unmount regardless of exit path (the listener
//! cancels itself when dropped).

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: String,
    pub on_close: Callback<()>,
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with((), move |_| {
            let document = gloo::utils::document();
            let listener = EventListener::new(&document, "keydown", move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    if event.key() == "Escape" {
                        on_close.emit(());
                    }
                }
            });
            move || drop(listener)
        });
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50"
            onclick={on_backdrop}
        >
            <div
                class="bg-white dark:bg-gray-800 rounded-lg p-6 max-w-md w-full mx-4 shadow-xl"
                onclick={keep_open}
            >
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-bold text-gray-900 dark:text-white">
                        {&props.title}
                    </h2>
                    <button
                        onclick={on_dismiss}
                        class="text-gray-400 hover:text-gray-600 dark:hover:text-gray-200 text-xl leading-none"
                        aria-label="Close"
                    >
                        {"\u{2715}"}
                    </button>
                </div>
                {props.children.clone()}
            </div>
        </div>
    }
}

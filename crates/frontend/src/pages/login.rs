//! Login page: credentials form plus the password-recovery overlay

use crate::app::{AuthQuery, Route};
use nimbus_frontend_common::hooks::{use_login, use_recover, LoginState, RecoverState};
use nimbus_frontend_common::{use_is_authenticated, Modal};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let login_flow = use_login();
    let recover_flow = use_recover();
    let navigator = use_navigator().expect("LoginPage rendered outside a router");
    let location = use_location();
    let is_authenticated = use_is_authenticated();

    let login_value = use_state(String::new);
    let password_value = use_state(String::new);
    let recover_email = use_state(String::new);
    let show_recovery = use_state(|| false);

    let next = location
        .and_then(|l| l.query::<AuthQuery>().ok())
        .and_then(|q| q.next);

    // Already signed in: straight to the cabinet
    {
        let navigator = navigator.clone();
        use_effect_with(is_authenticated, move |authenticated| {
            if *authenticated {
                navigator.push(&Route::Cabinet);
            }
        });
    }

    // Challenge issued: move to the confirmation step, keeping `next`
    {
        let navigator = navigator.clone();
        let next = next.clone();
        use_effect_with(login_flow.state().clone(), move |state| {
            if matches!(state, LoginState::ChallengeIssued) {
                let _ = navigator.push_with_query(&Route::Confirm, &AuthQuery { next });
            }
        });
    }

    let on_login_input = {
        let login_value = login_value.clone();
        let login_flow = login_flow.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            login_value.set(input.value());
            login_flow.clear_error();
        })
    };

    let on_password_input = {
        let password_value = password_value.clone();
        let login_flow = login_flow.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password_value.set(input.value());
            login_flow.clear_error();
        })
    };

    let on_submit = {
        let login_flow = login_flow.clone();
        let login_value = login_value.clone();
        let password_value = password_value.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            login_flow.submit((*login_value).clone(), (*password_value).clone());
        })
    };

    let open_recovery = {
        let show_recovery = show_recovery.clone();
        let recover_flow = recover_flow.clone();
        Callback::from(move |_: MouseEvent| {
            recover_flow.reset();
            show_recovery.set(true);
        })
    };

    let close_recovery = {
        let show_recovery = show_recovery.clone();
        let recover_flow = recover_flow.clone();
        Callback::from(move |()| {
            recover_flow.reset();
            show_recovery.set(false);
        })
    };

    let on_recover_input = {
        let recover_email = recover_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            recover_email.set(input.value());
        })
    };

    let on_recover_submit = {
        let recover_flow = recover_flow.clone();
        let recover_email = recover_email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            recover_flow.submit((*recover_email).clone());
        })
    };

    let submitting = login_flow.is_submitting();
    let error = match login_flow.state() {
        LoginState::Failed(message) => Some(message.clone()),
        _ => None,
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-900 dark:to-gray-800 flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <Link<Route> to={Route::Home} classes="text-3xl font-bold bg-gradient-to-r from-blue-600 to-cyan-500 bg-clip-text text-transparent">
                        {"Nimbus"}
                    </Link<Route>>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">{"Sign in to your cabinet"}</p>
                </div>

                <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8">
                    <form onsubmit={on_submit}>
                        <div class="mb-4">
                            <label for="login" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">{"Login"}</label>
                            <input
                                type="text"
                                id="login"
                                class="w-full px-3 py-2 border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500"
                                placeholder="username or e-mail"
                                value={(*login_value).clone()}
                                oninput={on_login_input}
                                disabled={submitting}
                            />
                        </div>

                        <div class="mb-6">
                            <label for="password" class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2">{"Password"}</label>
                            <input
                                type="password"
                                id="password"
                                class="w-full px-3 py-2 border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500"
                                value={(*password_value).clone()}
                                oninput={on_password_input}
                                disabled={submitting}
                            />
                        </div>

                        if let Some(error) = &error {
                            <div class="mb-4 p-3 bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded text-sm">
                                {error}
                            </div>
                        }

                        if matches!(login_flow.state(), LoginState::ChallengeIssued) {
                            <div class="mb-4 p-3 bg-green-50 dark:bg-green-900/30 text-green-700 dark:text-green-300 rounded text-sm">
                                {"a confirmation code was sent to your e-mail"}
                            </div>
                        }

                        <button
                            type="submit"
                            disabled={submitting}
                            class="w-full px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 text-white font-medium rounded-md transition-colors"
                        >
                            {if submitting { "Signing in..." } else { "Sign In" }}
                        </button>
                    </form>

                    <div class="mt-4 text-center">
                        <button
                            onclick={open_recovery}
                            class="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100"
                        >
                            {"Forgot your password?"}
                        </button>
                    </div>
                </div>
            </div>

            if *show_recovery {
                <Modal title={"Password recovery".to_string()} on_close={close_recovery}>
                    if matches!(recover_flow.state(), RecoverState::Sent) {
                        <div class="p-3 bg-green-50 dark:bg-green-900/30 text-green-700 dark:text-green-300 rounded text-sm">
                            {"check your inbox: a recovery link is on its way"}
                        </div>
                    } else {
                        <form onsubmit={on_recover_submit}>
                            <p class="text-sm text-gray-600 dark:text-gray-400 mb-4">
                                {"Enter the e-mail on your account and we will send a recovery link."}
                            </p>
                            <input
                                type="email"
                                class="w-full px-3 py-2 mb-4 border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-blue-500"
                                placeholder="you@example.com"
                                value={(*recover_email).clone()}
                                oninput={on_recover_input}
                                disabled={recover_flow.is_submitting()}
                            />
                            if let RecoverState::Failed(message) = recover_flow.state() {
                                <div class="mb-4 p-3 bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded text-sm">
                                    {message}
                                </div>
                            }
                            <button
                                type="submit"
                                disabled={recover_flow.is_submitting()}
                                class="w-full px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 text-white font-medium rounded-md transition-colors"
                            >
                                {if recover_flow.is_submitting() { "Sending..." } else { "Send recovery link" }}
                            </button>
                        </form>
                    }
                </Modal>
            }
        </div>
    }
}

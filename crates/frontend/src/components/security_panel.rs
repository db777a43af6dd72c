//! Security panel: password change and account deletion.
//!
//! Account deletion requires fresh credentials, not just the session token;
//! a 204 tears the local session down and returns to the landing page.

use crate::app::Route;
use nimbus_frontend_common::auth::AuthAction;
use nimbus_frontend_common::services::AccountApiService;
use nimbus_frontend_common::use_auth;
use nimbus_http::client::{user_message, EndpointKind};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SecurityPanel)]
pub fn security_panel() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("SecurityPanel rendered outside a router");
    let api = use_memo((), |_| AccountApiService::new());

    let current_password = use_state(String::new);
    let new_password = use_state(String::new);
    let changing = use_state(|| false);
    let change_error = use_state(|| Option::<String>::None);
    let change_notice = use_state(|| Option::<String>::None);

    let delete_login = use_state(String::new);
    let delete_password = use_state(String::new);
    let deleting = use_state(|| false);
    let delete_error = use_state(|| Option::<String>::None);

    let bind_input = |target: &UseStateHandle<String>| {
        let target = target.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            target.set(input.value());
        })
    };

    let on_current_input = bind_input(&current_password);
    let on_new_input = bind_input(&new_password);
    let on_delete_login_input = bind_input(&delete_login);
    let on_delete_password_input = bind_input(&delete_password);

    let on_change_password = {
        let api = api.clone();
        let current_password = current_password.clone();
        let new_password = new_password.clone();
        let changing = changing.clone();
        let change_error = change_error.clone();
        let change_notice = change_notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *changing {
                return;
            }
            let current = (*current_password).clone();
            let fresh = (*new_password).clone();
            if current.is_empty() {
                change_error.set(Some("enter your current password".to_string()));
                return;
            }
            if fresh.len() < 8 {
                change_error.set(Some(
                    "new password must be at least 8 characters".to_string(),
                ));
                return;
            }

            let api = api.clone();
            let current_password = current_password.clone();
            let new_password = new_password.clone();
            let changing = changing.clone();
            let change_error = change_error.clone();
            let change_notice = change_notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                changing.set(true);
                change_error.set(None);
                change_notice.set(None);
                match api.change_password(current, fresh).await {
                    Ok(response) if response.ok() => {
                        change_notice.set(Some("password changed".to_string()));
                        current_password.set(String::new());
                        new_password.set(String::new());
                    }
                    Ok(response) => change_error.set(Some(user_message(
                        EndpointKind::ChangePassword,
                        response.status,
                        response.data.as_ref(),
                    ))),
                    Err(message) => change_error.set(Some(message)),
                }
                changing.set(false);
            });
        })
    };

    let on_delete_account = {
        let api = api.clone();
        let auth = auth.clone();
        let navigator = navigator.clone();
        let delete_login = delete_login.clone();
        let delete_password = delete_password.clone();
        let deleting = deleting.clone();
        let delete_error = delete_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *deleting {
                return;
            }
            let login = (*delete_login).clone();
            let password = (*delete_password).clone();
            if login.is_empty() || password.is_empty() {
                delete_error.set(Some(
                    "enter your credentials to confirm deletion".to_string(),
                ));
                return;
            }

            let api = api.clone();
            let auth = auth.clone();
            let navigator = navigator.clone();
            let deleting = deleting.clone();
            let delete_error = delete_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                deleting.set(true);
                delete_error.set(None);
                match api.delete_account(login, password).await {
                    Ok(response) if response.ok() => {
                        auth.dispatch(AuthAction::Logout);
                        navigator.push(&Route::Home);
                    }
                    Ok(response) => delete_error.set(Some(user_message(
                        EndpointKind::DeleteAccount,
                        response.status,
                        response.data.as_ref(),
                    ))),
                    Err(message) => delete_error.set(Some(message)),
                }
                deleting.set(false);
            });
        })
    };

    html! {
        <div class="space-y-6">
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">{"Change password"}</h2>

                <form onsubmit={on_change_password} class="space-y-3 max-w-sm">
                    <input
                        type="password"
                        class="w-full px-3 py-2 border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        placeholder="current password"
                        value={(*current_password).clone()}
                        oninput={on_current_input}
                        disabled={*changing}
                    />
                    <input
                        type="password"
                        class="w-full px-3 py-2 border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                        placeholder="new password"
                        value={(*new_password).clone()}
                        oninput={on_new_input}
                        disabled={*changing}
                    />
                    if let Some(message) = &*change_error {
                        <div class="p-3 bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded text-sm">
                            {message}
                        </div>
                    }
                    if let Some(message) = &*change_notice {
                        <div class="p-3 bg-green-50 dark:bg-green-900/30 text-green-700 dark:text-green-300 rounded text-sm">
                            {message}
                        </div>
                    }
                    <button
                        type="submit"
                        disabled={*changing}
                        class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 text-white rounded-md text-sm transition-colors"
                    >
                        {if *changing { "Changing..." } else { "Change password" }}
                    </button>
                </form>
            </div>

            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6 border border-red-200 dark:border-red-900">
                <h2 class="text-lg font-semibold text-red-700 dark:text-red-400 mb-2">{"Delete account"}</h2>
                <p class="text-sm text-gray-500 dark:text-gray-400 mb-4">
                    {"This removes your account, devices and subscription permanently. Confirm with your credentials."}
                </p>

                <form onsubmit={on_delete_account} class="space-y-3 max-w-sm">
                    <input
                        type="text"
                        class="w-full px-3 py-2 border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-md focus:outline-none focus:ring-2 focus:ring-red-500"
                        placeholder="login"
                        value={(*delete_login).clone()}
                        oninput={on_delete_login_input}
                        disabled={*deleting}
                    />
                    <input
                        type="password"
                        class="w-full px-3 py-2 border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-md focus:outline-none focus:ring-2 focus:ring-red-500"
                        placeholder="password"
                        value={(*delete_password).clone()}
                        oninput={on_delete_password_input}
                        disabled={*deleting}
                    />
                    if let Some(message) = &*delete_error {
                        <div class="p-3 bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded text-sm">
                            {message}
                        </div>
                    }
                    <button
                        type="submit"
                        disabled={*deleting}
                        class="px-4 py-2 bg-red-600 hover:bg-red-700 disabled:bg-gray-400 text-white rounded-md text-sm transition-colors"
                    >
                        {if *deleting { "Deleting..." } else { "Delete my account" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

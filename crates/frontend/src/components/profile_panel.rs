//! Profile panel: account details plus the e-mail change sub-flow.
//!
//! Changing the e-mail mirrors the login challenge shape: the update call
//! answers with a challenge, a 6-digit code confirms it, with the same
//! resend cooldown discipline as the login confirmation.

use nimbus_frontend_common::auth::AuthAction;
use nimbus_frontend_common::hooks::{use_cooldown, use_otp, OtpFlowState, OtpPurpose};
use nimbus_frontend_common::services::AccountApiService;
use nimbus_frontend_common::session::{self, Challenge};
use nimbus_frontend_common::{use_auth, AuthConfig, OtpInput};
use nimbus_http::client::{user_message, EndpointKind};
use nimbus_http::types::{ChallengeResponse, Profile};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum EmailChangeStage {
    Closed,
    Editing,
    CodeEntry,
}

#[function_component(ProfilePanel)]
pub fn profile_panel() -> Html {
    let auth = use_auth();
    let api = use_memo((), |_| AccountApiService::new());
    let stage = use_state(|| EmailChangeStage::Closed);
    let new_email = use_state(String::new);
    let submitting = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let notice = use_state(|| Option::<String>::None);
    let otp = use_otp(OtpPurpose::ProfileChange);
    let cooldown = use_cooldown();

    // E-mail change confirmed: refresh the profile and close the sub-flow
    {
        let auth = auth.clone();
        let api = api.clone();
        let stage = stage.clone();
        let notice = notice.clone();
        use_effect_with(otp.state().clone(), move |state| {
            if matches!(state, OtpFlowState::Authenticated) {
                stage.set(EmailChangeStage::Closed);
                notice.set(Some("e-mail updated".to_string()));
                let auth = auth.clone();
                let api = api.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Ok(response) = api.me().await {
                        if response.ok() {
                            if let Some(profile) = response.json::<Profile>() {
                                auth.dispatch(AuthAction::ProfileLoaded(profile));
                            }
                        }
                    }
                });
            }
        });
    }

    let open_editing = {
        let stage = stage.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            error.set(None);
            notice.set(None);
            stage.set(EmailChangeStage::Editing);
        })
    };

    let cancel_editing = {
        let stage = stage.clone();
        Callback::from(move |_: MouseEvent| stage.set(EmailChangeStage::Closed))
    };

    let on_email_input = {
        let new_email = new_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_email.set(input.value());
        })
    };

    let on_submit_email = {
        let api = api.clone();
        let stage = stage.clone();
        let new_email = new_email.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let email = (*new_email).trim().to_string();
            if email.is_empty() || !email.contains('@') {
                error.set(Some("enter a valid e-mail address".to_string()));
                return;
            }

            let api = api.clone();
            let stage = stage.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                match api.update_profile(email).await {
                    Ok(response) if response.ok() => {
                        match response.json::<ChallengeResponse>() {
                            Some(challenge) => {
                                session::store_challenge(&Challenge {
                                    challenge_id: challenge.challenge_id,
                                    email: challenge.email,
                                    expires_in: challenge.expires_in,
                                    ts: session::now_ms(),
                                });
                                error.set(None);
                                stage.set(EmailChangeStage::CodeEntry);
                            }
                            None => error.set(Some(user_message(
                                EndpointKind::ProfileUpdate,
                                response.status,
                                None,
                            ))),
                        }
                    }
                    Ok(response) => error.set(Some(user_message(
                        EndpointKind::ProfileUpdate,
                        response.status,
                        response.data.as_ref(),
                    ))),
                    Err(message) => error.set(Some(message)),
                }
                submitting.set(false);
            });
        })
    };

    let on_code_complete = {
        let otp = otp.clone();
        Callback::from(move |code: String| otp.submit(code))
    };

    let on_code_change = {
        let otp = otp.clone();
        Callback::from(move |_: String| otp.acknowledge())
    };

    let on_resend = {
        let otp = otp.clone();
        let cooldown = cooldown.clone();
        Callback::from(move |_: MouseEvent| otp.resend(cooldown.clone()))
    };

    let Some(profile) = auth.profile.clone() else {
        return html! {};
    };

    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">{"Profile"}</h2>

            <dl class="space-y-3 mb-6">
                <div class="flex justify-between">
                    <dt class="text-sm text-gray-500 dark:text-gray-400">{"E-mail"}</dt>
                    <dd class="text-sm text-gray-900 dark:text-gray-100">{&profile.email}</dd>
                </div>
                <div class="flex justify-between">
                    <dt class="text-sm text-gray-500 dark:text-gray-400">{"Plan"}</dt>
                    <dd class="text-sm">
                        if profile.is_premium {
                            <span class="px-2 py-0.5 rounded-full bg-amber-100 text-amber-800 text-xs font-medium">{"Premium"}</span>
                        } else {
                            <span class="px-2 py-0.5 rounded-full bg-gray-100 dark:bg-gray-700 text-gray-600 dark:text-gray-300 text-xs font-medium">{"Free"}</span>
                        }
                    </dd>
                </div>
                if let Some(expires) = &profile.premium_expires_at {
                    <div class="flex justify-between">
                        <dt class="text-sm text-gray-500 dark:text-gray-400">{"Premium until"}</dt>
                        <dd class="text-sm text-gray-900 dark:text-gray-100">{expires}</dd>
                    </div>
                }
                if let Some(created) = &profile.created_at {
                    <div class="flex justify-between">
                        <dt class="text-sm text-gray-500 dark:text-gray-400">{"Member since"}</dt>
                        <dd class="text-sm text-gray-900 dark:text-gray-100">{created}</dd>
                    </div>
                }
            </dl>

            if let Some(message) = &*notice {
                <div class="mb-4 p-3 bg-green-50 dark:bg-green-900/30 text-green-700 dark:text-green-300 rounded text-sm">
                    {message}
                </div>
            }
            if let Some(message) = &*error {
                <div class="mb-4 p-3 bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded text-sm">
                    {message}
                </div>
            }

            {
                match *stage {
                    EmailChangeStage::Closed => html! {
                        <button
                            onclick={open_editing}
                            class="px-4 py-2 bg-gray-200 hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600 text-gray-700 dark:text-gray-300 rounded-md text-sm transition-colors"
                        >
                            {"Change e-mail"}
                        </button>
                    },
                    EmailChangeStage::Editing => html! {
                        <form onsubmit={on_submit_email} class="space-y-3">
                            <input
                                type="email"
                                class="w-full px-3 py-2 border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                                placeholder="new e-mail address"
                                value={(*new_email).clone()}
                                oninput={on_email_input}
                                disabled={*submitting}
                            />
                            <div class="flex gap-3">
                                <button
                                    type="submit"
                                    disabled={*submitting}
                                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 text-white rounded-md text-sm transition-colors"
                                >
                                    {if *submitting { "Sending code..." } else { "Send confirmation code" }}
                                </button>
                                <button
                                    type="button"
                                    onclick={cancel_editing}
                                    class="px-4 py-2 text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100 text-sm"
                                >
                                    {"Cancel"}
                                </button>
                            </div>
                        </form>
                    },
                    EmailChangeStage::CodeEntry => html! {
                        <div>
                            <p class="text-sm text-gray-600 dark:text-gray-400 mb-4">
                                {format!("Enter the {}-digit code sent to the new address", AuthConfig::PROFILE_OTP_LEN)}
                            </p>
                            <OtpInput
                                length={AuthConfig::PROFILE_OTP_LEN}
                                on_complete={on_code_complete}
                                on_change={on_code_change}
                                disabled={otp.is_verifying()}
                            />
                            if let OtpFlowState::Rejected(message) = otp.state() {
                                <div class="mt-4 p-3 bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded text-sm text-center">
                                    {message}
                                </div>
                            }
                            <div class="mt-4 text-center">
                                <button
                                    onclick={on_resend}
                                    disabled={cooldown.is_active() || otp.is_resending()}
                                    class="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100 disabled:text-gray-400 disabled:cursor-not-allowed"
                                >
                                    {
                                        if cooldown.is_active() {
                                            format!("resend available in {}", cooldown.label())
                                        } else {
                                            "resend code".to_string()
                                        }
                                    }
                                </button>
                                if let Some(message) = otp.resend_error() {
                                    <div class="mt-2 p-2 bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded text-xs">
                                        {message}
                                    </div>
                                }
                            </div>
                        </div>
                    },
                }
            }
        </div>
    }
}

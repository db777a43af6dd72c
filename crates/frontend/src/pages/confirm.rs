//! OTP confirmation page: complete the pending login challenge

use crate::app::{AuthQuery, Route};
use gloo::timers::callback::Interval;
use nimbus_frontend_common::cooldown::remaining_secs;
use nimbus_frontend_common::hooks::{use_cooldown, use_otp, OtpFlowState, OtpPurpose};
use nimbus_frontend_common::session;
use nimbus_frontend_common::{AuthConfig, OtpInput};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(ConfirmPage)]
pub fn confirm_page() -> Html {
    let challenge = session::load_challenge();
    let otp = use_otp(OtpPurpose::Login);
    let cooldown = use_cooldown();
    let location = use_location();
    let entered = use_state(String::new);

    let next = location
        .and_then(|l| l.query::<AuthQuery>().ok())
        .and_then(|q| q.next);

    // Challenge lifetime countdown; display only, the server enforces expiry
    let challenge_deadline = challenge
        .as_ref()
        .map(|c| c.ts + c.expires_in as f64 * 1000.0);
    let expiry_left = use_state(|| {
        challenge_deadline
            .map(|d| remaining_secs(session::now_ms(), d))
            .unwrap_or(0)
    });
    {
        let expiry_left = expiry_left.clone();
        use_effect_with(challenge_deadline, move |deadline| {
            let interval = (*deadline).map(|deadline| {
                Interval::new(1_000, move || {
                    expiry_left.set(remaining_secs(session::now_ms(), deadline));
                })
            });
            move || drop(interval)
        });
    }

    // Verified: leave for the `next` target (default: the cabinet)
    {
        let next = next.clone();
        use_effect_with(otp.state().clone(), move |state| {
            if matches!(state, OtpFlowState::Authenticated) {
                let target = next
                    .clone()
                    .unwrap_or_else(|| AuthConfig::DEFAULT_NEXT.to_string());
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&target);
                }
            }
        });
    }

    // No pending challenge, nothing to confirm
    let Some(challenge) = challenge else {
        return html! { <Redirect<Route> to={Route::Login} /> };
    };

    let on_change = {
        let entered = entered.clone();
        let otp = otp.clone();
        Callback::from(move |code: String| {
            entered.set(code);
            // fresh input dismisses a rejection; the digits stay as typed
            otp.acknowledge();
        })
    };

    let on_complete = {
        let otp = otp.clone();
        Callback::from(move |code: String| {
            otp.submit(code);
        })
    };

    let on_manual_submit = {
        let otp = otp.clone();
        let entered = entered.clone();
        Callback::from(move |_: MouseEvent| {
            otp.submit((*entered).clone());
        })
    };

    let on_resend = {
        let otp = otp.clone();
        let cooldown = cooldown.clone();
        Callback::from(move |_: MouseEvent| {
            otp.resend(cooldown.clone());
        })
    };

    let verifying = otp.is_verifying();
    let resend_blocked = cooldown.is_active() || otp.is_resending();
    let error = match otp.state() {
        OtpFlowState::Rejected(message) => Some(message.clone()),
        _ => None,
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-900 dark:to-gray-800 flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <Link<Route> to={Route::Home} classes="text-3xl font-bold bg-gradient-to-r from-blue-600 to-cyan-500 bg-clip-text text-transparent">
                        {"Nimbus"}
                    </Link<Route>>
                    <p class="mt-2 text-gray-600 dark:text-gray-400">{"Confirm your sign-in"}</p>
                </div>

                <div class="bg-white dark:bg-gray-800 rounded-lg shadow-lg p-8">
                    <p class="text-sm text-gray-600 dark:text-gray-400 mb-6 text-center">
                        {format!("We sent a {}-digit code to {}", AuthConfig::LOGIN_OTP_LEN, challenge.email)}
                    </p>

                    <OtpInput
                        length={AuthConfig::LOGIN_OTP_LEN}
                        on_complete={on_complete}
                        on_change={on_change}
                        disabled={verifying}
                    />

                    <p class="mt-4 text-xs text-gray-500 dark:text-gray-400 text-center">
                        {
                            if *expiry_left > 0 {
                                format!("code valid for {}", nimbus_frontend_common::cooldown::format_mmss(*expiry_left))
                            } else {
                                "the code may have expired; request a new one".to_string()
                            }
                        }
                    </p>

                    if let Some(error) = &error {
                        <div class="mt-4 p-3 bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded text-sm text-center">
                            {error}
                        </div>
                    }

                    <button
                        onclick={on_manual_submit}
                        disabled={verifying || entered.len() != AuthConfig::LOGIN_OTP_LEN}
                        class="mt-6 w-full px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 text-white font-medium rounded-md transition-colors"
                    >
                        {if verifying { "Verifying..." } else { "Confirm" }}
                    </button>

                    <div class="mt-4 text-center">
                        <button
                            onclick={on_resend}
                            disabled={resend_blocked}
                            class="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100 disabled:text-gray-400 disabled:cursor-not-allowed"
                        >
                            {
                                if cooldown.is_active() {
                                    format!("resend available in {}", cooldown.label())
                                } else if otp.is_resending() {
                                    "sending...".to_string()
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
            </div>
        </div>
    }
}

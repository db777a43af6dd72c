//! OTP confirmation flow hook.
//!
//! `AwaitingCode → Verifying → Authenticated | Rejected`; `Rejected` returns
//! to `AwaitingCode` and the entered digits are left as typed. The same flow
//! drives the login confirmation (4 digits) and the profile e-mail change
//! (6 digits); only the endpoints differ.

use crate::auth::{use_auth, AuthAction, AuthContext};
use crate::hooks::use_cooldown::UseCooldownHandle;
use crate::services::{AccountApiService, AuthApiService};
use crate::session::{self, AuthState, Token};
use nimbus_http::client::{user_message, EndpointKind};
use nimbus_http::types::VerifyResponse;
use yew::prelude::*;

/// Confirmation flow state
#[derive(Clone, Debug, PartialEq)]
pub enum OtpFlowState {
    AwaitingCode,
    Verifying,
    /// Login flow: token stored. Profile flow: e-mail change confirmed.
    Authenticated,
    /// Entered digits stay editable; no automatic clearing
    Rejected(String),
}

/// Which challenge this flow completes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OtpPurpose {
    Login,
    ProfileChange,
}

/// Confirmation flow handle
#[derive(Clone)]
pub struct UseOtpHandle {
    purpose: OtpPurpose,
    auth_api: AuthApiService,
    account_api: AccountApiService,
    auth: AuthContext,
    state: UseStateHandle<OtpFlowState>,
    resending: UseStateHandle<bool>,
    resend_error: UseStateHandle<Option<String>>,
}

impl UseOtpHandle {
    /// Get the current state
    pub fn state(&self) -> &OtpFlowState {
        &self.state
    }

    pub fn is_verifying(&self) -> bool {
        matches!(*self.state, OtpFlowState::Verifying)
    }

    pub fn is_resending(&self) -> bool {
        *self.resending
    }

    pub fn resend_error(&self) -> Option<String> {
        (*self.resend_error).clone()
    }

    /// Verify the entered code against the stored challenge
    pub fn submit(&self, code: String) {
        if self.is_verifying() {
            return;
        }
        let Some(challenge) = session::load_challenge() else {
            self.state.set(OtpFlowState::Rejected(
                "login session expired, start over".to_string(),
            ));
            return;
        };

        let purpose = self.purpose;
        let auth_api = self.auth_api.clone();
        let account_api = self.account_api.clone();
        let auth = self.auth.clone();
        let state = self.state.clone();

        wasm_bindgen_futures::spawn_local(async move {
            state.set(OtpFlowState::Verifying);

            let result = match purpose {
                OtpPurpose::Login => auth_api.verify(challenge.challenge_id, code).await,
                OtpPurpose::ProfileChange => {
                    account_api
                        .verify_profile(challenge.challenge_id, code)
                        .await
                }
            };

            match result {
                Ok(response) if response.ok() => match purpose {
                    OtpPurpose::Login => match response.json::<VerifyResponse>() {
                        Some(verified) => {
                            let now = session::now_ms();
                            let token = Token {
                                access_token: verified.access_token,
                                token_type: verified.token_type,
                                received_at: now,
                            };
                            let snapshot = AuthState {
                                is_premium: verified.is_premium,
                                premium_expires_at: verified.premium_expires_at,
                                ts: now,
                            };
                            // The reducer persists both records and deletes the challenge
                            auth.dispatch(AuthAction::Login(token, snapshot));
                            state.set(OtpFlowState::Authenticated);
                        }
                        None => state.set(OtpFlowState::Rejected(user_message(
                            EndpointKind::Verify,
                            response.status,
                            response.data.as_ref(),
                        ))),
                    },
                    OtpPurpose::ProfileChange => {
                        session::clear_challenge();
                        state.set(OtpFlowState::Authenticated);
                    }
                },
                Ok(response) => state.set(OtpFlowState::Rejected(user_message(
                    EndpointKind::Verify,
                    response.status,
                    response.data.as_ref(),
                ))),
                Err(message) => state.set(OtpFlowState::Rejected(message)),
            }
        });
    }

    /// `Rejected → AwaitingCode`; the digits themselves are left as entered
    pub fn acknowledge(&self) {
        if matches!(*self.state, OtpFlowState::Rejected(_)) {
            self.state.set(OtpFlowState::AwaitingCode);
        }
    }

    /// Re-deliver the code. A success restarts the full cooldown; a failure
    /// leaves the control enabled (cooldown not started) and shows the error.
    pub fn resend(&self, cooldown: UseCooldownHandle) {
        if *self.resending || cooldown.is_active() {
            return;
        }
        let Some(challenge) = session::load_challenge() else {
            self.resend_error.set(Some(
                "login session expired, start over".to_string(),
            ));
            return;
        };

        let purpose = self.purpose;
        let auth_api = self.auth_api.clone();
        let account_api = self.account_api.clone();
        let resending = self.resending.clone();
        let resend_error = self.resend_error.clone();

        wasm_bindgen_futures::spawn_local(async move {
            resending.set(true);
            resend_error.set(None);

            let result = match purpose {
                OtpPurpose::Login => auth_api.resend(challenge.challenge_id).await,
                OtpPurpose::ProfileChange => {
                    account_api.resend_profile(challenge.challenge_id).await
                }
            };

            match result {
                Ok(response) if response.ok() => cooldown.start(),
                Ok(response) => resend_error.set(Some(user_message(
                    EndpointKind::Resend,
                    response.status,
                    response.data.as_ref(),
                ))),
                Err(message) => resend_error.set(Some(message)),
            }
            resending.set(false);
        });
    }
}

/// Hook driving an OTP confirmation step
#[hook]
pub fn use_otp(purpose: OtpPurpose) -> UseOtpHandle {
    let auth_api = use_memo((), |_| AuthApiService::new());
    let account_api = use_memo((), |_| AccountApiService::new());
    let auth = use_auth();
    let state = use_state(|| OtpFlowState::AwaitingCode);
    let resending = use_state(|| false);
    let resend_error = use_state(|| None);

    UseOtpHandle {
        purpose,
        auth_api: (*auth_api).clone(),
        account_api: (*account_api).clone(),
        auth,
        state,
        resending,
        resend_error,
    }
}

//! Login challenge flow hook.
//!
//! `Idle → Submitting → ChallengeIssued` on success, `→ Failed` otherwise.
//! `ChallengeIssued` is one-way: the page navigates to the confirmation step
//! and only a fresh load returns here. `Failed` keeps the form editable.

use crate::services::AuthApiService;
use crate::session::{self, Challenge};
use nimbus_http::client::{user_message, EndpointKind};
use nimbus_http::types::ChallengeResponse;
use yew::prelude::*;

/// Login flow state
#[derive(Clone, Debug, PartialEq)]
pub enum LoginState {
    Idle,
    Submitting,
    /// Challenge persisted; navigation to the confirmation step may proceed
    ChallengeIssued,
    Failed(String),
}

/// Login flow handle
#[derive(Clone)]
pub struct UseLoginHandle {
    auth_api: AuthApiService,
    state: UseStateHandle<LoginState>,
}

impl UseLoginHandle {
    /// Get the current state
    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(*self.state, LoginState::Submitting)
    }

    /// Validate and submit credentials. Invalid input fails with field-level
    /// text before any network call is made.
    pub fn submit(&self, login: String, password: String) {
        if self.is_submitting() {
            return;
        }

        let login = login.trim().to_string();
        if login.is_empty() {
            self.state
                .set(LoginState::Failed("enter your login".to_string()));
            return;
        }
        if password.is_empty() {
            self.state
                .set(LoginState::Failed("enter your password".to_string()));
            return;
        }

        let auth_api = self.auth_api.clone();
        let state = self.state.clone();

        wasm_bindgen_futures::spawn_local(async move {
            state.set(LoginState::Submitting);

            match auth_api.login(login, password).await {
                Ok(response) if response.ok() => match response.json::<ChallengeResponse>() {
                    Some(challenge) => {
                        session::store_challenge(&Challenge {
                            challenge_id: challenge.challenge_id,
                            email: challenge.email,
                            expires_in: challenge.expires_in,
                            ts: session::now_ms(),
                        });
                        state.set(LoginState::ChallengeIssued);
                    }
                    None => state.set(LoginState::Failed(user_message(
                        EndpointKind::Login,
                        response.status,
                        response.data.as_ref(),
                    ))),
                },
                Ok(response) => state.set(LoginState::Failed(user_message(
                    EndpointKind::Login,
                    response.status,
                    response.data.as_ref(),
                ))),
                Err(message) => state.set(LoginState::Failed(message)),
            }
        });
    }

    /// Clear a failure back to the editable state
    pub fn clear_error(&self) {
        if matches!(*self.state, LoginState::Failed(_)) {
            self.state.set(LoginState::Idle);
        }
    }
}

/// Hook driving the login form
#[hook]
pub fn use_login() -> UseLoginHandle {
    let auth_api = use_memo((), |_| AuthApiService::new());
    let state = use_state(|| LoginState::Idle);

    UseLoginHandle {
        auth_api: (*auth_api).clone(),
        state,
    }
}

//! Password recovery flow hook.
//!
//! Same shape as the login flow, e-mail only. Presented as an overlay on the
//! login page but carries no state coupling to the login form itself.

use crate::services::AuthApiService;
use nimbus_http::client::{user_message, EndpointKind};
use yew::prelude::*;

/// Recovery flow state
#[derive(Clone, Debug, PartialEq)]
pub enum RecoverState {
    Idle,
    Submitting,
    /// Recovery mail accepted (2xx/204)
    Sent,
    Failed(String),
}

/// Recovery flow handle
#[derive(Clone)]
pub struct UseRecoverHandle {
    auth_api: AuthApiService,
    state: UseStateHandle<RecoverState>,
}

impl UseRecoverHandle {
    /// Get the current state
    pub fn state(&self) -> &RecoverState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(*self.state, RecoverState::Submitting)
    }

    /// Validate and submit the e-mail
    pub fn submit(&self, email: String) {
        if self.is_submitting() {
            return;
        }

        let email = email.trim().to_string();
        if email.is_empty() {
            self.state
                .set(RecoverState::Failed("enter your e-mail".to_string()));
            return;
        }
        if !email.contains('@') {
            self.state.set(RecoverState::Failed(
                "enter a valid e-mail address".to_string(),
            ));
            return;
        }

        let auth_api = self.auth_api.clone();
        let state = self.state.clone();

        wasm_bindgen_futures::spawn_local(async move {
            state.set(RecoverState::Submitting);

            match auth_api.recover(email).await {
                Ok(response) if response.ok() => state.set(RecoverState::Sent),
                Ok(response) => state.set(RecoverState::Failed(user_message(
                    EndpointKind::Recover,
                    response.status,
                    response.data.as_ref(),
                ))),
                Err(message) => state.set(RecoverState::Failed(message)),
            }
        });
    }

    /// Back to the editable state (dismissing an error or reopening the form)
    pub fn reset(&self) {
        self.state.set(RecoverState::Idle);
    }
}

/// Hook driving the recovery overlay
#[hook]
pub fn use_recover() -> UseRecoverHandle {
    let auth_api = use_memo((), |_| AuthApiService::new());
    let state = use_state(|| RecoverState::Idle);

    UseRecoverHandle {
        auth_api: (*auth_api).clone(),
        state,
    }
}

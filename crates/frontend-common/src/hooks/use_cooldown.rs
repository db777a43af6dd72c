//! Resend cooldown hook: persisted deadline plus a once-per-second tick.
//!
//! The deadline lives in session storage, so a reload mid-countdown resumes
//! with the remaining wait. When the countdown reaches zero the persisted
//! deadline is cleared and the control becomes available again.

use crate::config::AuthConfig;
use crate::cooldown;
use crate::session;
use gloo::timers::callback::Interval;
use yew::prelude::*;

/// Cooldown handle
#[derive(Clone)]
pub struct UseCooldownHandle {
    deadline: UseStateHandle<Option<f64>>,
    remaining: UseStateHandle<u32>,
}

impl UseCooldownHandle {
    /// Seconds until resend is allowed again; 0 means available
    pub fn remaining(&self) -> u32 {
        *self.remaining
    }

    pub fn is_active(&self) -> bool {
        *self.remaining > 0
    }

    /// `MM:SS` label for the live countdown
    pub fn label(&self) -> String {
        cooldown::format_mmss(*self.remaining)
    }

    /// Restart the full cooldown (after a successful resend)
    pub fn start(&self) {
        let deadline = cooldown::start(session::now_ms());
        self.remaining.set(AuthConfig::RESEND_COOLDOWN_SECS);
        self.deadline.set(Some(deadline));
    }
}

/// Hook owning the resend cooldown timer
#[hook]
pub fn use_cooldown() -> UseCooldownHandle {
    let deadline = use_state(|| cooldown::active_deadline(session::now_ms()));
    let remaining = use_state(|| {
        (*deadline)
            .map(|d| cooldown::remaining_secs(session::now_ms(), d))
            .unwrap_or(0)
    });

    {
        let deadline_handle = deadline.clone();
        let remaining = remaining.clone();
        use_effect_with(*deadline, move |deadline| {
            let interval = (*deadline).map(|deadline| {
                remaining.set(cooldown::remaining_secs(session::now_ms(), deadline));
                Interval::new(1_000, move || {
                    let left = cooldown::remaining_secs(session::now_ms(), deadline);
                    remaining.set(left);
                    if left == 0 {
                        cooldown::clear();
                        deadline_handle.set(None);
                    }
                })
            });
            // Dropping the interval cancels the tick
            move || drop(interval)
        });
    }

    UseCooldownHandle { deadline, remaining }
}

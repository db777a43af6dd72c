//! Global unauthorized handler.
//!
//! Lets the API service layer funnel a mid-session 401 into the provider's
//! logout-and-redirect path without every panel checking for it.

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static UNAUTHORIZED_CALLBACK: RefCell<Option<Rc<dyn Fn()>>> = const { RefCell::new(None) };
}

/// Set the global unauthorized callback
pub fn set_unauthorized_callback(callback: Rc<dyn Fn()>) {
    UNAUTHORIZED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Clear the unauthorized callback
pub fn clear_unauthorized_callback() {
    UNAUTHORIZED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Trigger the unauthorized callback
pub fn notify_unauthorized() {
    UNAUTHORIZED_CALLBACK.with(|cb| {
        if let Some(callback) = cb.borrow().as_ref() {
            callback();
        }
    });
}

//! Authentication guard for protected routes

use crate::app::{AuthQuery, Route};
use nimbus_frontend_common::{use_auth, Spinner};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireSessionProps {
    pub children: Children,
}

/// Renders its children only with a live session; otherwise redirects to the
/// login page carrying the protected path as `next` so the user returns here
/// after authenticating.
#[function_component(RequireSession)]
pub fn require_session(props: &RequireSessionProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("RequireSession rendered outside a router");
    let location = use_location();

    {
        let has_token = auth.token.is_some();
        let is_loading = auth.is_loading;
        let next = location
            .as_ref()
            .map(|l| l.path().to_string())
            .unwrap_or_else(|| "/".to_string());
        use_effect_with((has_token, is_loading), move |(has_token, is_loading)| {
            if !is_loading && !has_token {
                let _ = navigator.push_with_query(&Route::Login, &AuthQuery { next: Some(next) });
            }
        });
    }

    if auth.is_loading {
        return html! {
            <div class="min-h-screen flex items-center justify-center">
                <Spinner text={Some("Checking session...".to_string())} />
            </div>
        };
    }

    if auth.token.is_some() {
        return html! { <>{ props.children.clone() }</> };
    }

    // redirect effect is in flight
    html! {
        <div class="min-h-screen flex items-center justify-center">
            <Spinner />
        </div>
    }
}

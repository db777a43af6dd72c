//! Global session context and provider

use crate::client::set_auth_token;
use crate::session::{self, AuthState, Token};
use nimbus_http::types::Profile;
use std::rc::Rc;
use yew::prelude::*;

/// Session context data
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub token: Option<Token>,
    pub state: Option<AuthState>,
    pub profile: Option<Profile>,
    pub is_loading: bool,
}

/// Session context actions
pub enum AuthAction {
    /// Token plus snapshot issued by a successful verification; persists both
    /// and deletes the pending challenge
    Login(Token, AuthState),
    /// Token restored from session storage on page load; nothing re-persisted
    Restore(Token, Option<AuthState>),
    /// Profile fetched from `/auth/web/me`
    ProfileLoaded(Profile),
    Logout,
    SetLoading(bool),
}

/// Session context handle
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            token: None,
            state: None,
            profile: None,
            // Start loading until session storage has been checked
            is_loading: true,
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Login(token, state) => {
                let _ = set_auth_token(Some(&token.access_token));
                session::store_token(&token);
                session::store_auth_state(&state);
                session::clear_challenge();

                Rc::new(Self {
                    token: Some(token),
                    state: Some(state),
                    profile: None,
                    is_loading: false,
                })
            }
            AuthAction::Restore(token, state) => {
                let _ = set_auth_token(Some(&token.access_token));

                Rc::new(Self {
                    token: Some(token),
                    state,
                    profile: self.profile.clone(),
                    is_loading: false,
                })
            }
            AuthAction::ProfileLoaded(profile) => Rc::new(Self {
                profile: Some(profile),
                is_loading: false,
                ..(*self).clone()
            }),
            AuthAction::Logout => {
                let _ = set_auth_token(None);
                session::clear_session();

                Rc::new(Self {
                    token: None,
                    state: None,
                    profile: None,
                    is_loading: false,
                })
            }
            AuthAction::SetLoading(is_loading) => Rc::new(Self {
                is_loading,
                ..(*self).clone()
            }),
        }
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth_state = use_reducer(AuthContextData::default);

    // Funnel mid-session 401s from the service layer into a logout
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            let callback = auth_state.clone();
            super::error_handler::set_unauthorized_callback(Rc::new(move || {
                callback.dispatch(AuthAction::Logout);
            }));

            move || {
                super::error_handler::clear_unauthorized_callback();
            }
        });
    }

    // Restore the session from storage on mount
    {
        let auth_state = auth_state.clone();
        use_effect_with((), move |_| {
            match session::load_token() {
                Some(token) => {
                    let state = session::load_auth_state();
                    auth_state.dispatch(AuthAction::Restore(token, state));
                }
                None => auth_state.dispatch(AuthAction::SetLoading(false)),
            }
            || ()
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth_state}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use the auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to check if a token is present
#[hook]
pub fn use_is_authenticated() -> bool {
    let auth = use_auth();
    auth.token.is_some()
}

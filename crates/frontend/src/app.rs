//! Application shell and routes

use crate::pages::{CabinetPage, ConfirmPage, HomePage, LoginPage};
use nimbus_frontend_common::AuthProvider;
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

/// Top-level routes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/confirm")]
    Confirm,
    #[at("/cabinet")]
    Cabinet,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// `?next=` target carried through the login cycle
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Confirm => html! { <ConfirmPage /> },
        Route::Cabinet => html! { <CabinetPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex flex-col items-center justify-center bg-gray-50 dark:bg-gray-900">
                <h1 class="text-4xl font-bold text-gray-900 dark:text-white mb-4">{"404"}</h1>
                <p class="text-gray-600 dark:text-gray-400 mb-6">{"This page does not exist."}</p>
                <Link<Route> to={Route::Home} classes="text-blue-600 hover:text-blue-700">
                    {"Back to home"}
                </Link<Route>>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </AuthProvider>
    }
}

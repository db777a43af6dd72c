//! Account cabinet: protected sections behind the auth guard

use crate::app::Route;
use crate::auth_guard::RequireSession;
use crate::components::{
    DevicesPanel, PaymentsPanel, ProfilePanel, SecurityPanel, SubscriptionPanel,
};
use nimbus_frontend_common::auth::AuthAction;
use nimbus_frontend_common::services::AccountApiService;
use nimbus_frontend_common::{use_auth, Spinner};
use nimbus_http::types::Profile;
use yew::prelude::*;
use yew_router::prelude::*;

/// Cabinet sections, one render arm per variant
#[derive(Clone, Copy, PartialEq, Eq)]
enum CabinetSection {
    Profile,
    Subscription,
    Security,
    Devices,
    Payments,
}

impl CabinetSection {
    const ALL: [CabinetSection; 5] = [
        CabinetSection::Profile,
        CabinetSection::Subscription,
        CabinetSection::Security,
        CabinetSection::Devices,
        CabinetSection::Payments,
    ];

    fn title(self) -> &'static str {
        match self {
            CabinetSection::Profile => "Profile",
            CabinetSection::Subscription => "Subscription",
            CabinetSection::Security => "Security",
            CabinetSection::Devices => "Devices",
            CabinetSection::Payments => "Payments",
        }
    }
}

#[function_component(CabinetPage)]
pub fn cabinet_page() -> Html {
    html! {
        <RequireSession>
            <CabinetContent />
        </RequireSession>
    }
}

#[function_component(CabinetContent)]
fn cabinet_content() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("CabinetPage rendered outside a router");
    let section = use_state(|| CabinetSection::Profile);
    let bootstrap_error = use_state(|| Option::<String>::None);

    // Session bootstrap: validate the token by fetching the profile. A
    // 401/404 flows through the unauthorized funnel into the guard redirect.
    {
        let auth = auth.clone();
        let bootstrap_error = bootstrap_error.clone();
        use_effect_with((), move |_| {
            let api = AccountApiService::new();
            wasm_bindgen_futures::spawn_local(async move {
                match api.me().await {
                    Ok(response) if response.ok() => {
                        if let Some(profile) = response.json::<Profile>() {
                            auth.dispatch(AuthAction::ProfileLoaded(profile));
                        }
                    }
                    Ok(_) => {}
                    Err(message) => bootstrap_error.set(Some(message)),
                }
            });
            || ()
        });
    }

    let on_logout = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let auth = auth.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // best-effort revocation; local teardown happens regardless
                let _ = AccountApiService::new().logout().await;
                auth.dispatch(AuthAction::Logout);
                navigator.push(&Route::Home);
            });
        })
    };

    let sidebar = CabinetSection::ALL
        .iter()
        .map(|&item| {
            let active = *section == item;
            let onclick = {
                let section = section.clone();
                Callback::from(move |_: MouseEvent| section.set(item))
            };
            let classes = if active {
                "w-full text-left px-4 py-2 rounded-md bg-blue-600 text-white font-medium"
            } else {
                "w-full text-left px-4 py-2 rounded-md text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700"
            };
            html! {
                <button class={classes} {onclick}>
                    {item.title()}
                </button>
            }
        })
        .collect::<Html>();

    let panel = match *section {
        CabinetSection::Profile => html! { <ProfilePanel /> },
        CabinetSection::Subscription => html! { <SubscriptionPanel /> },
        CabinetSection::Security => html! { <SecurityPanel /> },
        CabinetSection::Devices => html! { <DevicesPanel /> },
        CabinetSection::Payments => html! { <PaymentsPanel /> },
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900">
            <nav class="bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
                <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between h-16 items-center">
                        <Link<Route> to={Route::Home} classes="text-2xl font-bold bg-gradient-to-r from-blue-600 to-cyan-500 bg-clip-text text-transparent">
                            {"Nimbus"}
                        </Link<Route>>
                        <div class="flex items-center gap-4">
                            if let Some(profile) = &auth.profile {
                                <span class="text-sm text-gray-600 dark:text-gray-400">
                                    {&profile.email}
                                </span>
                            }
                            <button
                                onclick={on_logout}
                                class="text-sm text-gray-600 dark:text-gray-400 hover:text-gray-900 dark:hover:text-gray-100"
                            >
                                {"Sign Out"}
                            </button>
                        </div>
                    </div>
                </div>
            </nav>

            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                if let Some(message) = &*bootstrap_error {
                    <div class="mb-6 p-3 bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded text-sm">
                        {message}
                    </div>
                }

                if auth.profile.is_none() && bootstrap_error.is_none() {
                    <Spinner text={Some("Loading your account...".to_string())} />
                } else {
                    <div class="flex flex-col md:flex-row gap-8">
                        <aside class="md:w-48 flex flex-col gap-1">
                            {sidebar}
                        </aside>
                        <main class="flex-1">
                            {panel}
                        </main>
                    </div>
                }
            </div>
        </div>
    }
}

//! Marketing landing page

use crate::app::Route;
use nimbus_frontend_common::use_is_authenticated;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let is_authenticated = use_is_authenticated();
    let navigator = use_navigator().expect("HomePage rendered outside a router");

    let on_cta = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if is_authenticated {
                navigator.push(&Route::Cabinet);
            } else {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-gray-50 to-gray-100 dark:from-gray-900 dark:to-gray-800">
            // Navigation
            <nav class="bg-white/80 dark:bg-gray-900/80 backdrop-blur-sm border-b border-gray-200 dark:border-gray-700">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex justify-between h-16 items-center">
                        <div class="flex items-center">
                            <h1 class="text-2xl font-bold bg-gradient-to-r from-blue-600 to-cyan-500 bg-clip-text text-transparent">
                                {"Nimbus"}
                            </h1>
                            <span class="ml-3 text-sm text-gray-500 dark:text-gray-400">{"Secure connectivity"}</span>
                        </div>
                        <div class="flex items-center gap-4">
                            if is_authenticated {
                                <Link<Route> to={Route::Cabinet} classes="px-4 py-2 text-sm font-medium text-white bg-gradient-to-r from-blue-600 to-cyan-500 hover:from-blue-700 hover:to-cyan-600 rounded-md transition-all">
                                    {"My account"}
                                </Link<Route>>
                            } else {
                                <Link<Route> to={Route::Login} classes="px-4 py-2 text-sm font-medium text-white bg-gradient-to-r from-blue-600 to-cyan-500 hover:from-blue-700 hover:to-cyan-600 rounded-md transition-all">
                                    {"Sign In"}
                                </Link<Route>>
                            }
                        </div>
                    </div>
                </div>
            </nav>

            // Hero Section
            <div class="relative overflow-hidden">
                <div class="max-w-7xl mx-auto">
                    <div class="relative z-10 pb-8 sm:pb-16 md:pb-20 lg:pb-28 xl:pb-32">
                        <main class="mt-10 mx-auto max-w-7xl px-4 sm:mt-12 sm:px-6 md:mt-16 lg:mt-20 lg:px-8 xl:mt-28">
                            <div class="text-center">
                                <h1 class="text-4xl tracking-tight font-extrabold text-gray-900 dark:text-white sm:text-5xl md:text-6xl">
                                    <span class="block">{"One subscription,"}</span>
                                    <span class="block text-transparent bg-clip-text bg-gradient-to-r from-blue-600 to-cyan-500 mt-2">
                                        {"all your devices"}
                                    </span>
                                </h1>
                                <p class="mt-3 max-w-md mx-auto text-base text-gray-500 dark:text-gray-400 sm:text-lg md:mt-5 md:text-xl md:max-w-3xl">
                                    {"Nimbus keeps your devices connected and protected. Manage your plan, devices and payments from one account cabinet."}
                                </p>
                                <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center md:mt-8">
                                    <div class="rounded-md shadow">
                                        <button
                                            onclick={on_cta.clone()}
                                            class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-white bg-gradient-to-r from-blue-600 to-cyan-500 hover:from-blue-700 hover:to-cyan-600 md:py-4 md:text-lg md:px-10 transition-all transform hover:scale-105"
                                        >
                                            {if is_authenticated { "Open my cabinet" } else { "Get started" }}
                                            <svg class="ml-2 -mr-1 w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 7l5 5m0 0l-5 5m5-5H6"></path>
                                            </svg>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </main>
                    </div>
                </div>
            </div>

            // Features Section
            <div class="py-12 bg-white dark:bg-gray-800">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="lg:text-center">
                        <h2 class="text-base text-blue-600 dark:text-blue-400 font-semibold tracking-wide uppercase">{"Why Nimbus"}</h2>
                        <p class="mt-2 text-3xl leading-8 font-extrabold tracking-tight text-gray-900 dark:text-white sm:text-4xl">
                            {"Everything in one cabinet"}
                        </p>
                    </div>

                    <div class="mt-10">
                        <div class="grid grid-cols-1 gap-10 sm:grid-cols-2 lg:grid-cols-3">
                            <div class="relative">
                                <div class="flex items-center justify-center h-12 w-12 rounded-md bg-gradient-to-r from-blue-500 to-blue-600 text-white">
                                    <svg class="h-6 w-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z"></path>
                                    </svg>
                                </div>
                                <div class="mt-5">
                                    <h3 class="text-lg leading-6 font-medium text-gray-900 dark:text-white">{"Passwordless sign-in"}</h3>
                                    <p class="mt-2 text-base text-gray-500 dark:text-gray-400">
                                        {"A one-time code to your e-mail confirms every sign-in. No app to install, nothing to remember."}
                                    </p>
                                </div>
                            </div>

                            <div class="relative">
                                <div class="flex items-center justify-center h-12 w-12 rounded-md bg-gradient-to-r from-cyan-500 to-cyan-600 text-white">
                                    <svg class="h-6 w-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9.75 17L9 20l-1 1h8l-1-1-.75-3M3 13h18M5 17h14a2 2 0 002-2V5a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"></path>
                                    </svg>
                                </div>
                                <div class="mt-5">
                                    <h3 class="text-lg leading-6 font-medium text-gray-900 dark:text-white">{"Device management"}</h3>
                                    <p class="mt-2 text-base text-gray-500 dark:text-gray-400">
                                        {"See every device on your account, move your premium slot between them, revoke the ones you no longer use."}
                                    </p>
                                </div>
                            </div>

                            <div class="relative">
                                <div class="flex items-center justify-center h-12 w-12 rounded-md bg-gradient-to-r from-green-500 to-green-600 text-white">
                                    <svg class="h-6 w-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M3 10h18M7 15h1m4 0h1m-7 4h12a3 3 0 003-3V8a3 3 0 00-3-3H6a3 3 0 00-3 3v8a3 3 0 003 3z"></path>
                                    </svg>
                                </div>
                                <div class="mt-5">
                                    <h3 class="text-lg leading-6 font-medium text-gray-900 dark:text-white">{"Transparent billing"}</h3>
                                    <p class="mt-2 text-base text-gray-500 dark:text-gray-400">
                                        {"Pick a plan, pay through our payment partner, and keep the full payment history at hand."}
                                    </p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            // CTA Section
            <div class="bg-gradient-to-r from-blue-600 to-cyan-500">
                <div class="max-w-2xl mx-auto text-center py-16 px-4 sm:py-20 sm:px-6 lg:px-8">
                    <h2 class="text-3xl font-extrabold text-white sm:text-4xl">
                        <span class="block">{"Ready to get started?"}</span>
                    </h2>
                    <p class="mt-4 text-lg leading-6 text-blue-100">
                        {"Sign in to your cabinet to manage your subscription, devices and payments."}
                    </p>
                    <button
                        onclick={on_cta}
                        class="mt-8 w-full inline-flex items-center justify-center px-5 py-3 border border-transparent text-base font-medium rounded-md text-blue-600 bg-white hover:bg-blue-50 sm:w-auto transition-all transform hover:scale-105"
                    >
                        {if is_authenticated { "Open my cabinet" } else { "Sign In" }}
                    </button>
                </div>
            </div>

            // Footer
            <footer class="bg-white dark:bg-gray-900">
                <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                    <p class="text-center text-base text-gray-400">
                        {"© 2026 Nimbus. All rights reserved."}
                    </p>
                </div>
            </footer>
        </div>
    }
}

//! Subscription panel: plans, order checkout and premium transfer.
//!
//! Plans and the device list load independently on mount, neither waiting on
//! the other. An order either redirects to a hosted payment page or hands
//! gateway parameters to the payment widget.

use nimbus_frontend_common::services::{AccountApiService, PaymentWidgetService};
use nimbus_frontend_common::use_auth;
use nimbus_http::client::generic_message;
use nimbus_http::types::{Device, OrderResponse, Plan};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[function_component(SubscriptionPanel)]
pub fn subscription_panel() -> Html {
    let auth = use_auth();
    let api = use_memo((), |_| AccountApiService::new());
    let widget = use_memo((), |_| PaymentWidgetService::new());
    let plans = use_state(|| Option::<Vec<Plan>>::None);
    let devices = use_state(|| Option::<Vec<Device>>::None);
    let error = use_state(|| Option::<String>::None);
    let notice = use_state(|| Option::<String>::None);
    let ordering = use_state(|| Option::<String>::None);
    let transfer_target = use_state(String::new);
    let transferring = use_state(|| false);

    // Plans and devices are independent fetches; fire both without waiting
    {
        let api = api.clone();
        let plans = plans.clone();
        let devices = devices.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            {
                let api = api.clone();
                let plans = plans.clone();
                let error = error.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match api.subscription_plans().await {
                        Ok(response) if response.ok() => {
                            plans.set(Some(response.json::<Vec<Plan>>().unwrap_or_default()));
                        }
                        Ok(response) => error.set(Some(generic_message(
                            response.status,
                            response.data.as_ref(),
                        ))),
                        Err(message) => error.set(Some(message)),
                    }
                });
            }
            {
                let api = api.clone();
                let devices = devices.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Ok(response) = api.devices().await {
                        if response.ok() {
                            devices.set(Some(response.json::<Vec<Device>>().unwrap_or_default()));
                        }
                    }
                });
            }
            || ()
        });
    }

    let on_buy = {
        let api = api.clone();
        let widget = widget.clone();
        let ordering = ordering.clone();
        let error = error.clone();
        Callback::from(move |plan_id: String| {
            if ordering.is_some() {
                return;
            }
            let api = api.clone();
            let widget = widget.clone();
            let ordering = ordering.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                ordering.set(Some(plan_id.clone()));
                error.set(None);
                match api.create_order(plan_id).await {
                    Ok(response) if response.ok() => {
                        let order = response.json::<OrderResponse>();
                        match order {
                            Some(OrderResponse {
                                payment_url: Some(url),
                                ..
                            }) => {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().set_href(&url);
                                }
                            }
                            Some(OrderResponse {
                                gateway_params: Some(params),
                                ..
                            }) => {
                                if let Err(e) = widget.open_payment(&params) {
                                    error.set(Some(e.to_string()));
                                }
                            }
                            _ => error.set(Some(
                                "payment gateway did not return checkout parameters".to_string(),
                            )),
                        }
                    }
                    Ok(response) => error.set(Some(generic_message(
                        response.status,
                        response.data.as_ref(),
                    ))),
                    Err(message) => error.set(Some(message)),
                }
                ordering.set(None);
            });
        })
    };

    let on_target_change = {
        let transfer_target = transfer_target.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            transfer_target.set(select.value());
        })
    };

    let on_transfer = {
        let api = api.clone();
        let devices = devices.clone();
        let transfer_target = transfer_target.clone();
        let transferring = transferring.clone();
        let error = error.clone();
        let notice = notice.clone();
        Callback::from(move |_: MouseEvent| {
            let device_id = (*transfer_target).clone();
            if device_id.is_empty() || *transferring {
                return;
            }
            let api = api.clone();
            let devices = devices.clone();
            let transferring = transferring.clone();
            let error = error.clone();
            let notice = notice.clone();
            wasm_bindgen_futures::spawn_local(async move {
                transferring.set(true);
                error.set(None);
                notice.set(None);
                match api.transfer_premium(device_id).await {
                    Ok(response) if response.ok() => {
                        notice.set(Some("premium moved to the selected device".to_string()));
                        if let Ok(refreshed) = api.devices().await {
                            if refreshed.ok() {
                                devices.set(Some(
                                    refreshed.json::<Vec<Device>>().unwrap_or_default(),
                                ));
                            }
                        }
                    }
                    Ok(response) => error.set(Some(generic_message(
                        response.status,
                        response.data.as_ref(),
                    ))),
                    Err(message) => error.set(Some(message)),
                }
                transferring.set(false);
            });
        })
    };

    let is_premium = auth
        .profile
        .as_ref()
        .map(|p| p.is_premium)
        .or_else(|| auth.state.as_ref().map(|s| s.is_premium))
        .unwrap_or(false);

    html! {
        <div class="space-y-6">
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">{"Subscription"}</h2>

                if let Some(message) = &*notice {
                    <div class="mb-4 p-3 bg-green-50 dark:bg-green-900/30 text-green-700 dark:text-green-300 rounded text-sm">
                        {message}
                    </div>
                }
                if let Some(message) = &*error {
                    <div class="mb-4 p-3 bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded text-sm">
                        {message}
                    </div>
                }

                {
                    match &*plans {
                        None => html! {
                            <p class="text-sm text-gray-500 dark:text-gray-400">{"Loading plans..."}</p>
                        },
                        Some(plans) if plans.is_empty() => html! {
                            <p class="text-sm text-gray-500 dark:text-gray-400">{"No plans are available right now."}</p>
                        },
                        Some(plans) => plans
                            .iter()
                            .map(|plan| {
                                let busy = ordering.as_deref() == Some(plan.id.as_str());
                                let onclick = {
                                    let on_buy = on_buy.clone();
                                    let plan_id = plan.id.clone();
                                    Callback::from(move |_: MouseEvent| on_buy.emit(plan_id.clone()))
                                };
                                html! {
                                    <div class="flex items-center justify-between border border-gray-200 dark:border-gray-700 rounded-md p-4 mb-3">
                                        <div>
                                            <p class="font-medium text-gray-900 dark:text-white">{&plan.name}</p>
                                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                                {format!("{} months, {:.2} {}", plan.months, plan.price, plan.currency)}
                                            </p>
                                        </div>
                                        <button
                                            {onclick}
                                            disabled={busy}
                                            class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 text-white rounded-md text-sm transition-colors"
                                        >
                                            {if busy { "Opening checkout..." } else { "Buy" }}
                                        </button>
                                    </div>
                                }
                            })
                            .collect::<Html>(),
                    }
                }
            </div>

            if is_premium {
                <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
                    <h3 class="text-base font-semibold text-gray-900 dark:text-white mb-2">{"Premium device"}</h3>
                    <p class="text-sm text-gray-500 dark:text-gray-400 mb-4">
                        {"Your subscription benefits one device at a time. Move it to another registered device here."}
                    </p>
                    {
                        match &*devices {
                            None => html! {
                                <p class="text-sm text-gray-500 dark:text-gray-400">{"Loading devices..."}</p>
                            },
                            Some(devices) if devices.is_empty() => html! {
                                <p class="text-sm text-gray-500 dark:text-gray-400">{"No registered devices yet."}</p>
                            },
                            Some(devices) => html! {
                                <div class="flex gap-3 items-center">
                                    <select
                                        onchange={on_target_change}
                                        class="flex-1 px-3 py-2 border border-gray-300 dark:border-gray-600 dark:bg-gray-700 dark:text-gray-200 rounded-md"
                                    >
                                        <option value="" selected={transfer_target.is_empty()}>{"select a device"}</option>
                                        {
                                            devices.iter().filter(|d| !d.is_premium).map(|device| {
                                                html! {
                                                    <option value={device.id.clone()} selected={*transfer_target == device.id}>
                                                        {&device.name}
                                                    </option>
                                                }
                                            }).collect::<Html>()
                                        }
                                    </select>
                                    <button
                                        onclick={on_transfer}
                                        disabled={*transferring || transfer_target.is_empty()}
                                        class="px-4 py-2 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 text-white rounded-md text-sm transition-colors"
                                    >
                                        {if *transferring { "Moving..." } else { "Move premium" }}
                                    </button>
                                </div>
                            },
                        }
                    }
                </div>
            }
        </div>
    }
}

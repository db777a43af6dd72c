//! Devices panel: list, soft revoke and hard delete.

use nimbus_frontend_common::services::AccountApiService;
use nimbus_http::client::generic_message;
use nimbus_http::types::Device;
use yew::prelude::*;

#[function_component(DevicesPanel)]
pub fn devices_panel() -> Html {
    let api = use_memo((), |_| AccountApiService::new());
    let devices = use_state(|| Option::<Vec<Device>>::None);
    let error = use_state(|| Option::<String>::None);
    // device id with an action in flight
    let busy = use_state(|| Option::<String>::None);

    let refresh = {
        let api = api.clone();
        let devices = devices.clone();
        let error = error.clone();
        Callback::from(move |()| {
            let api = api.clone();
            let devices = devices.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api.devices().await {
                    Ok(response) if response.ok() => {
                        devices.set(Some(response.json::<Vec<Device>>().unwrap_or_default()));
                    }
                    Ok(response) => error.set(Some(generic_message(
                        response.status,
                        response.data.as_ref(),
                    ))),
                    Err(message) => error.set(Some(message)),
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let run_action = {
        let api = api.clone();
        let busy = busy.clone();
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |(device_id, hard): (String, bool)| {
            if busy.is_some() {
                return;
            }
            let api = api.clone();
            let busy = busy.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                busy.set(Some(device_id.clone()));
                error.set(None);
                let result = if hard {
                    api.delete_device(device_id).await
                } else {
                    api.revoke_device(device_id).await
                };
                match result {
                    Ok(response) if response.ok() => refresh.emit(()),
                    Ok(response) => error.set(Some(generic_message(
                        response.status,
                        response.data.as_ref(),
                    ))),
                    Err(message) => error.set(Some(message)),
                }
                busy.set(None);
            });
        })
    };

    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">{"Devices"}</h2>

            if let Some(message) = &*error {
                <div class="mb-4 p-3 bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded text-sm">
                    {message}
                </div>
            }

            {
                match &*devices {
                    None => html! {
                        <p class="text-sm text-gray-500 dark:text-gray-400">{"Loading devices..."}</p>
                    },
                    Some(devices) if devices.is_empty() => html! {
                        <p class="text-sm text-gray-500 dark:text-gray-400">{"No devices are linked to this account."}</p>
                    },
                    Some(devices) => devices
                        .iter()
                        .map(|device| {
                            let in_flight = busy.as_deref() == Some(device.id.as_str());
                            let on_revoke = {
                                let run_action = run_action.clone();
                                let id = device.id.clone();
                                Callback::from(move |_: MouseEvent| run_action.emit((id.clone(), false)))
                            };
                            let on_delete = {
                                let run_action = run_action.clone();
                                let id = device.id.clone();
                                Callback::from(move |_: MouseEvent| run_action.emit((id.clone(), true)))
                            };
                            html! {
                                <div class="flex items-center justify-between border border-gray-200 dark:border-gray-700 rounded-md p-4 mb-3">
                                    <div>
                                        <p class="font-medium text-gray-900 dark:text-white flex items-center gap-2">
                                            {&device.name}
                                            if device.is_premium {
                                                <span class="px-2 py-0.5 rounded-full bg-amber-100 text-amber-800 text-xs font-medium">{"Premium"}</span>
                                            }
                                        </p>
                                        <p class="text-sm text-gray-500 dark:text-gray-400">
                                            {device.platform.clone().unwrap_or_else(|| "unknown platform".to_string())}
                                            if let Some(seen) = &device.last_seen_at {
                                                {format!(", last seen {seen}")}
                                            }
                                        </p>
                                    </div>
                                    <div class="flex gap-2">
                                        <button
                                            onclick={on_revoke}
                                            disabled={in_flight}
                                            class="px-3 py-1.5 bg-gray-200 hover:bg-gray-300 dark:bg-gray-700 dark:hover:bg-gray-600 text-gray-700 dark:text-gray-300 rounded-md text-sm transition-colors disabled:opacity-50"
                                        >
                                            {"Revoke"}
                                        </button>
                                        <button
                                            onclick={on_delete}
                                            disabled={in_flight}
                                            class="px-3 py-1.5 bg-red-600 hover:bg-red-700 text-white rounded-md text-sm transition-colors disabled:opacity-50"
                                        >
                                            {"Remove"}
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Html>(),
                }
            }
        </div>
    }
}

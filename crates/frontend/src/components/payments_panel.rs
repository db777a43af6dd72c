//! Payments panel: payment history list.

use nimbus_frontend_common::services::AccountApiService;
use nimbus_http::client::generic_message;
use nimbus_http::types::{Payment, PaymentsResponse};
use yew::prelude::*;

#[function_component(PaymentsPanel)]
pub fn payments_panel() -> Html {
    let api = use_memo((), |_| AccountApiService::new());
    let payments = use_state(|| Option::<Vec<Payment>>::None);
    let error = use_state(|| Option::<String>::None);

    {
        let api = api.clone();
        let payments = payments.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api.payments().await {
                    Ok(response) if response.ok() => {
                        // the API emits a bare array or `{payments: [...]}`
                        let list = response
                            .json::<PaymentsResponse>()
                            .map(PaymentsResponse::into_vec)
                            .unwrap_or_default();
                        payments.set(Some(list));
                    }
                    Ok(response) => error.set(Some(generic_message(
                        response.status,
                        response.data.as_ref(),
                    ))),
                    Err(message) => error.set(Some(message)),
                }
            });
            || ()
        });
    }

    html! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white mb-4">{"Payments"}</h2>

            if let Some(message) = &*error {
                <div class="mb-4 p-3 bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300 rounded text-sm">
                    {message}
                </div>
            }

            {
                match &*payments {
                    None => html! {
                        <p class="text-sm text-gray-500 dark:text-gray-400">{"Loading payment history..."}</p>
                    },
                    Some(payments) if payments.is_empty() => html! {
                        <p class="text-sm text-gray-500 dark:text-gray-400">{"No payments yet."}</p>
                    },
                    Some(payments) => html! {
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="text-left text-gray-500 dark:text-gray-400 border-b border-gray-200 dark:border-gray-700">
                                    <th class="py-2 pr-4">{"Date"}</th>
                                    <th class="py-2 pr-4">{"Amount"}</th>
                                    <th class="py-2">{"Status"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    payments.iter().map(|payment| {
                                        html! {
                                            <tr class="border-b border-gray-100 dark:border-gray-700/50">
                                                <td class="py-2 pr-4 text-gray-900 dark:text-gray-100">
                                                    {payment.created_at.clone().unwrap_or_else(|| "-".to_string())}
                                                </td>
                                                <td class="py-2 pr-4 text-gray-900 dark:text-gray-100">
                                                    {format!("{:.2} {}", payment.amount, payment.currency)}
                                                </td>
                                                <td class="py-2 text-gray-600 dark:text-gray-300">{&payment.status}</td>
                                            </tr>
                                        }
                                    }).collect::<Html>()
                                }
                            </tbody>
                        </table>
                    },
                }
            }
        </div>
    }
}

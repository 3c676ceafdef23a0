use payloads::{ViolationId, ViolationStatus};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ViolationCard;
use crate::contexts::toast::use_toast;
use crate::hooks::use_my_violations;
use crate::{Route, get_api_client};

#[function_component]
pub fn MyViolationsPage() -> Html {
    let toast = use_toast();
    let navigator = use_navigator().unwrap();
    let violations = use_my_violations();
    let paying = use_state(|| None::<ViolationId>);

    let start_payment = {
        let toast = toast.clone();
        let navigator = navigator.clone();
        let paying = paying.clone();

        move |violation_id: ViolationId| {
            let toast = toast.clone();
            let navigator = navigator.clone();
            let paying = paying.clone();

            paying.set(Some(violation_id));
            yew::platform::spawn_local(async move {
                let api_client = get_api_client();
                let details =
                    payloads::requests::CreateFinePayment { violation_id };
                match api_client.create_fine_payment(&details).await {
                    Ok(_) => {
                        toast.success("Payment created");
                        navigator.push(&Route::Payments);
                    }
                    Err(error) => toast.error(error.to_string()),
                }
                paying.set(None);
            });
        }
    };

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {"My violations"}
                </h1>
            </div>

            {violations.render("violations", |violations, is_refreshing, error| html! {
                <div class="space-y-4">
                    if let Some(error) = error {
                        <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 dark:text-red-400">
                                {format!("Refresh failed: {error}")}
                            </p>
                        </div>
                    }
                    if is_refreshing {
                        <p class="text-sm text-neutral-500">{"Refreshing..."}</p>
                    }
                    if violations.is_empty() {
                        <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                            {"No violations on record. Keep it that way!"}
                        </p>
                    }
                    {for violations.iter().map(|violation| {
                        let actions = (violation.status
                            == ViolationStatus::Approved)
                            .then(|| {
                                let violation_id = violation.id;
                                let busy = *paying == Some(violation_id);
                                let start_payment = start_payment.clone();
                                let onclick =
                                    Callback::from(move |_: MouseEvent| {
                                        start_payment(violation_id);
                                    });
                                html! {
                                    <button
                                        {onclick}
                                        disabled={busy}
                                        class="px-3 py-1.5 rounded-md bg-neutral-900 dark:bg-white text-white dark:text-neutral-900 text-sm font-medium disabled:opacity-50"
                                    >
                                        {"Pay fine"}
                                    </button>
                                }
                            });

                        html! {
                            <ViolationCard
                                key={violation.id.0}
                                violation={violation.clone()}
                                actions={actions}
                            />
                        }
                    })}
                </div>
            })}
        </div>
    }
}

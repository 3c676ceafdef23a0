use payloads::ViolationStatus;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::StatCard;
use crate::hooks::{use_my_violations, use_wallet_summary};
use crate::utils::format_vnd;

#[function_component]
pub fn CitizenDashboard() -> Html {
    let violations = use_my_violations();
    let wallet = use_wallet_summary();

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {"My overview"}
                </h1>
            </div>

            <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-4">
                {violations.render("violations", |violations, _, _| {
                    let unpaid = violations
                        .iter()
                        .filter(|v| v.status == ViolationStatus::Approved)
                        .count();
                    html! {
                        <>
                            <StatCard
                                label="My violations"
                                value={violations.len().to_string()}
                            />
                            <StatCard
                                label="Unpaid fines"
                                value={unpaid.to_string()}
                            />
                        </>
                    }
                })}
                {wallet.render("wallet", |wallet, _, _| html! {
                    <StatCard
                        label="Wallet balance"
                        value={format_vnd(&wallet.balance)}
                        hint={format!("{} pending fines", wallet.pending_fines)}
                    />
                })}
            </div>

            <div class="flex flex-wrap gap-4">
                <Link<Route>
                    to={Route::MyViolations}
                    classes="px-4 py-2 rounded-md bg-neutral-900 dark:bg-white text-white dark:text-neutral-900 text-sm font-medium"
                >
                    {"My violations"}
                </Link<Route>>
                <Link<Route>
                    to={Route::Payments}
                    classes="px-4 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 text-sm font-medium"
                >
                    {"Payments & wallet"}
                </Link<Route>>
                <Link<Route>
                    to={Route::Complaints}
                    classes="px-4 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 text-sm font-medium"
                >
                    {"Complaints"}
                </Link<Route>>
                <Link<Route>
                    to={Route::Denunciations}
                    classes="px-4 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 text-sm font-medium"
                >
                    {"Denunciations"}
                </Link<Route>>
            </div>
        </div>
    }
}

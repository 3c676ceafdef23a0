use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::StatCard;
use crate::hooks::{use_admin_dashboard, use_statistics};

#[function_component]
pub fn AuthorityDashboard() -> Html {
    let dashboard = use_admin_dashboard();
    let stats = use_statistics(30);

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {"Authority dashboard"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400 mt-1">
                    {"System overview for the last 30 days"}
                </p>
            </div>

            {dashboard.render("dashboard", |counts, _, _| html! {
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    <StatCard label="Total users" value={counts.total_users.to_string()} />
                    <StatCard label="Officers" value={counts.total_officers.to_string()} />
                    <StatCard label="Citizens" value={counts.total_citizens.to_string()} />
                    <StatCard label="System health" value={counts.system_health.clone()} />
                </div>
            })}

            {stats.render("statistics", |stats, _, _| html! {
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    <StatCard
                        label="Violations detected"
                        value={stats.overview.total_violations.to_string()}
                    />
                    <StatCard
                        label="Awaiting review"
                        value={stats.overview.pending_violations.to_string()}
                    />
                    <StatCard
                        label="Cameras online"
                        value={format!(
                            "{}/{}",
                            stats.overview.online_cameras,
                            stats.overview.total_cameras,
                        )}
                    />
                    <StatCard
                        label="Processing rate"
                        value={format!("{:.0}%", stats.efficiency.processing_rate)}
                        hint={format!(
                            "avg {:.1}h per violation",
                            stats.efficiency.avg_processing_hours,
                        )}
                    />
                </div>
            })}

            <div class="flex space-x-4">
                <Link<Route>
                    to={Route::Cameras}
                    classes="px-4 py-2 rounded-md bg-neutral-900 dark:bg-white text-white dark:text-neutral-900 text-sm font-medium"
                >
                    {"Manage cameras"}
                </Link<Route>>
                <Link<Route>
                    to={Route::Officers}
                    classes="px-4 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 text-sm font-medium"
                >
                    {"Manage officers"}
                </Link<Route>>
                <Link<Route>
                    to={Route::Statistics}
                    classes="px-4 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 text-sm font-medium"
                >
                    {"Full statistics"}
                </Link<Route>>
            </div>
        </div>
    }
}

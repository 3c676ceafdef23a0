use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::StatCard;
use crate::hooks::use_statistics;

/// Bar width as a percentage of the window maximum.
fn bar_width(count: u32, max: u32) -> String {
    if max == 0 {
        return "0%".to_string();
    }
    format!("{}%", (count as f64 / max as f64 * 100.0).round())
}

#[function_component]
pub fn StatisticsPage() -> Html {
    let days = use_state(|| 30u32);
    let stats = use_statistics(*days);

    let on_range = {
        let days = days.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            days.set(select.value().parse().unwrap_or(30));
        })
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {"Statistics"}
                </h1>
                <select
                    onchange={on_range}
                    class="px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                >
                    <option value="7" selected={*days == 7}>{"Last 7 days"}</option>
                    <option value="30" selected={*days == 30}>{"Last 30 days"}</option>
                    <option value="90" selected={*days == 90}>{"Last 90 days"}</option>
                </select>
            </div>

            {stats.render("statistics", |stats, is_refreshing, error| {
                let trend_max = stats
                    .trends
                    .iter()
                    .map(|point| point.count)
                    .max()
                    .unwrap_or(0);
                let type_max = stats
                    .types
                    .iter()
                    .map(|t| t.count)
                    .max()
                    .unwrap_or(0);

                html! {
                    <div class="space-y-8">
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

                        <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4">
                            <StatCard
                                label="Total violations"
                                value={stats.overview.total_violations.to_string()}
                            />
                            <StatCard
                                label="Pending"
                                value={stats.overview.pending_violations.to_string()}
                            />
                            <StatCard
                                label="Processed"
                                value={stats.overview.processed_violations.to_string()}
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

                        <section class="space-y-2">
                            <h2 class="text-lg font-semibold text-neutral-900 dark:text-white">
                                {"Daily trend"}
                            </h2>
                            <div class="space-y-1">
                                {for stats.trends.iter().map(|point| html! {
                                    <div key={point.date.clone()} class="flex items-center gap-2">
                                        <span class="w-24 text-xs text-neutral-500 font-mono">
                                            {point.date.clone()}
                                        </span>
                                        <div class="flex-1 bg-neutral-100 dark:bg-neutral-800 rounded h-4">
                                            <div
                                                class="bg-neutral-900 dark:bg-white h-4 rounded"
                                                style={format!("width: {}", bar_width(point.count, trend_max))}
                                            />
                                        </div>
                                        <span class="w-10 text-right text-xs text-neutral-600 dark:text-neutral-400">
                                            {point.count}
                                        </span>
                                    </div>
                                })}
                            </div>
                        </section>

                        <div class="grid lg:grid-cols-2 gap-8">
                            <section class="space-y-2">
                                <h2 class="text-lg font-semibold text-neutral-900 dark:text-white">
                                    {"By violation type"}
                                </h2>
                                {for stats.types.iter().map(|entry| html! {
                                    <div key={entry.violation_type.clone()} class="flex items-center gap-2">
                                        <span class="w-36 text-sm text-neutral-600 dark:text-neutral-400 truncate">
                                            {entry.violation_type.clone()}
                                        </span>
                                        <div class="flex-1 bg-neutral-100 dark:bg-neutral-800 rounded h-4">
                                            <div
                                                class="bg-neutral-900 dark:bg-white h-4 rounded"
                                                style={format!("width: {}", bar_width(entry.count, type_max))}
                                            />
                                        </div>
                                        <span class="w-10 text-right text-xs text-neutral-600 dark:text-neutral-400">
                                            {entry.count}
                                        </span>
                                    </div>
                                })}
                            </section>

                            <section class="space-y-2">
                                <h2 class="text-lg font-semibold text-neutral-900 dark:text-white">
                                    {"Top locations"}
                                </h2>
                                <ol class="space-y-1">
                                    {for stats.locations.iter().enumerate().map(|(i, entry)| html! {
                                        <li
                                            key={entry.location_name.clone()}
                                            class="flex justify-between text-sm"
                                        >
                                            <span class="text-neutral-600 dark:text-neutral-400">
                                                {format!("{}. {}", i + 1, entry.location_name)}
                                            </span>
                                            <span class="font-medium text-neutral-900 dark:text-white">
                                                {entry.count}
                                            </span>
                                        </li>
                                    })}
                                </ol>
                            </section>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

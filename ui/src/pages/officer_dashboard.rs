use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{StatCard, ViolationCard};
use crate::hooks::{
    ReviewQueueFilters, use_officer_stats, use_review_queue,
};

#[function_component]
pub fn OfficerDashboard() -> Html {
    let stats = use_officer_stats();
    // A small slice of the queue; the review page shows the rest.
    let (queue, _) = use_review_queue(ReviewQueueFilters {
        page: 1,
        page_size: 3,
        status: None,
    });

    html! {
        <div class="space-y-8">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {"Officer dashboard"}
                </h1>
                <p class="text-neutral-600 dark:text-neutral-400 mt-1">
                    {"Your personal statistics and pending reviews"}
                </p>
            </div>

            {stats.render("your statistics", |stats, _, _| html! {
                <div class="grid sm:grid-cols-2 lg:grid-cols-4 gap-4">
                    <StatCard
                        label="Pending reviews"
                        value={stats.pending_reviews.to_string()}
                    />
                    <StatCard
                        label="Approved today"
                        value={stats.approved_today.to_string()}
                    />
                    <StatCard
                        label="Efficiency"
                        value={format!("{:.0}%", stats.efficiency_rate)}
                        hint={"decided reviews upheld"}
                    />
                    <StatCard
                        label="Avg processing time"
                        value={format!("{:.1}h", stats.average_processing_time)}
                        hint={"detection to decision"}
                    />
                </div>
            })}

            {queue.render("review queue", |list, _, _| html! {
                <div class="space-y-4">
                    <h2 class="text-lg font-semibold text-neutral-900 dark:text-white">
                        {format!("Next up ({} waiting)", list.total)}
                    </h2>
                    {for list.violations.iter().map(|violation| html! {
                        <ViolationCard
                            key={violation.id.0}
                            violation={violation.clone()}
                        />
                    })}
                    <Link<Route>
                        to={Route::ReviewQueue}
                        classes="inline-block px-4 py-2 rounded-md bg-neutral-900 dark:bg-white text-white dark:text-neutral-900 text-sm font-medium"
                    >
                        {"Open review queue"}
                    </Link<Route>>
                </div>
            })}
        </div>
    }
}

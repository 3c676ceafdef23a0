use payloads::Role;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::hooks::use_logout;
use crate::{Route, State};

fn nav_link(to: Route, label: &str) -> Html {
    html! {
        <Link<Route>
            {to}
            classes="px-3 py-2 rounded-md text-sm font-medium text-neutral-600 dark:text-neutral-300 hover:text-neutral-900 dark:hover:text-white hover:bg-neutral-100 dark:hover:bg-neutral-800"
        >
            {label.to_string()}
        </Link<Route>>
    }
}

#[function_component]
pub fn Header() -> Html {
    let (state, _) = use_store::<State>();
    let logout = use_logout();

    // Navigation follows the role the backend reported; the backend still
    // enforces authorization on every call.
    let links = match state.role() {
        Some(Role::Admin) => html! {
            <>
                {nav_link(Route::Cameras, "Cameras")}
                {nav_link(Route::Officers, "Officers")}
                {nav_link(Route::Statistics, "Statistics")}
                {nav_link(Route::ReviewQueue, "Review")}
            </>
        },
        Some(Role::Officer) => html! {
            <>
                {nav_link(Route::ReviewQueue, "Review")}
                {nav_link(Route::Cameras, "Cameras")}
                {nav_link(Route::Statistics, "Statistics")}
            </>
        },
        Some(Role::Citizen) => html! {
            <>
                {nav_link(Route::MyViolations, "My violations")}
                {nav_link(Route::Complaints, "Complaints")}
                {nav_link(Route::Denunciations, "Denunciations")}
                {nav_link(Route::Payments, "Payments")}
            </>
        },
        None => html! { {nav_link(Route::ViolationLookup, "Plate lookup")} },
    };

    html! {
        <header class="border-b border-neutral-200 dark:border-neutral-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-6">
                        <Link<Route> to={Route::Home} classes="text-lg font-bold text-neutral-900 dark:text-white">
                            {"RoadWatch"}
                        </Link<Route>>
                        <nav class="hidden sm:flex items-center space-x-1">
                            {links}
                        </nav>
                    </div>
                    <div class="flex items-center space-x-4">
                        if let Some(profile) = state.profile() {
                            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                                {profile.full_name.clone()}
                            </span>
                            <button
                                onclick={logout}
                                class="px-3 py-2 rounded-md text-sm font-medium text-neutral-600 dark:text-neutral-300 hover:bg-neutral-100 dark:hover:bg-neutral-800"
                            >
                                {"Sign out"}
                            </button>
                        } else {
                            <Link<Route>
                                to={Route::Login}
                                classes="px-3 py-2 rounded-md text-sm font-medium text-neutral-600 dark:text-neutral-300 hover:bg-neutral-100 dark:hover:bg-neutral-800"
                            >
                                {"Sign in"}
                            </Link<Route>>
                        }
                    </div>
                </div>
            </div>
        </header>
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    /// 1-based.
    pub page: u32,
    pub page_size: u32,
    pub total: u32,
    pub on_page_change: Callback<u32>,
}

#[function_component]
pub fn Pagination(props: &PaginationProps) -> Html {
    let last_page = props.total.div_ceil(props.page_size).max(1);
    let page = props.page.clamp(1, last_page);

    let on_prev = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_page_change.emit(page.saturating_sub(1).max(1));
        })
    };
    let on_next = {
        let on_page_change = props.on_page_change.clone();
        Callback::from(move |_: MouseEvent| {
            on_page_change.emit((page + 1).min(last_page));
        })
    };

    if props.total == 0 {
        return html! {};
    }

    html! {
        <div class="flex items-center justify-between pt-4">
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!("Page {page} of {last_page} · {} total", props.total)}
            </p>
            <div class="space-x-2">
                <button
                    onclick={on_prev}
                    disabled={page == 1}
                    class="px-3 py-1.5 rounded-md border border-neutral-300 dark:border-neutral-700 text-sm disabled:opacity-50"
                >
                    {"Previous"}
                </button>
                <button
                    onclick={on_next}
                    disabled={page == last_page}
                    class="px-3 py-1.5 rounded-md border border-neutral-300 dark:border-neutral-700 text-sm disabled:opacity-50"
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}

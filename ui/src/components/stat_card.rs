use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub hint: Option<AttrValue>,
}

#[function_component]
pub fn StatCard(props: &StatCardProps) -> Html {
    html! {
        <div class="p-4 rounded-lg border border-neutral-200 dark:border-neutral-800 bg-white dark:bg-neutral-900">
            <p class="text-sm text-neutral-600 dark:text-neutral-400">
                {&props.label}
            </p>
            <p class="mt-1 text-2xl font-semibold text-neutral-900 dark:text-white">
                {&props.value}
            </p>
            if let Some(hint) = &props.hint {
                <p class="mt-1 text-xs text-neutral-500 dark:text-neutral-500">
                    {hint}
                </p>
            }
        </div>
    }
}

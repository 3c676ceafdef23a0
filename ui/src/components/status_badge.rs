use yew::prelude::*;

use crate::status::StatusDisplay;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    /// Obtained from the central status table (`status::AsStatusDisplay`).
    pub display: StatusDisplay,
}

#[function_component]
pub fn StatusBadge(props: &StatusBadgeProps) -> Html {
    html! {
        <span class={format!(
            "inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium {}",
            props.display.classes
        )}>
            {props.display.label}
        </span>
    }
}

use payloads::responses;
use yew::prelude::*;

use crate::components::StatusBadge;
use crate::status::AsStatusDisplay;
use crate::utils::{format_timestamp, format_vnd};

#[derive(Properties, PartialEq)]
pub struct ViolationCardProps {
    pub violation: responses::Violation,
    /// Extra content rendered below the details, e.g. review buttons or a
    /// pay action.
    #[prop_or_default]
    pub actions: Option<Html>,
}

#[function_component]
pub fn ViolationCard(props: &ViolationCardProps) -> Html {
    let violation = &props.violation;

    html! {
        <div class="p-4 rounded-lg border border-neutral-200 dark:border-neutral-800 bg-white dark:bg-neutral-900 space-y-2">
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <span class="font-mono font-semibold text-neutral-900 dark:text-white">
                        {violation.license_plate.clone()}
                    </span>
                    <StatusBadge display={violation.status.display()} />
                </div>
                if let Some(fine) = &violation.fine_amount {
                    <span class="text-sm font-semibold text-neutral-900 dark:text-white">
                        {format_vnd(fine)}
                    </span>
                }
            </div>
            <p class="text-sm text-neutral-900 dark:text-neutral-100">
                {violation.violation_type.clone()}
            </p>
            if let Some(description) = &violation.violation_description {
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {description.clone()}
                </p>
            }
            <p class="text-xs text-neutral-500 dark:text-neutral-500">
                {format_timestamp(violation.detected_at)}
                if let Some(location) = &violation.location_name {
                    {" · "}{location.clone()}
                }
                if let Some(confidence) = &violation.confidence_score {
                    {format!(" · AI confidence {confidence}")}
                }
            </p>
            if !violation.evidence_images.is_empty() {
                <div class="flex space-x-2 pt-1">
                    {for violation.evidence_images.iter().take(3).map(|url| html! {
                        <img
                            src={url.clone()}
                            alt="Evidence"
                            class="h-16 w-24 object-cover rounded border border-neutral-200 dark:border-neutral-800"
                        />
                    })}
                </div>
            }
            if let Some(actions) = &props.actions {
                <div class="pt-2">{actions.clone()}</div>
            }
        </div>
    }
}

use crate::shared::icons::icon;
use contracts::domain::a001_book_order::OrderProgress;
use leptos::prelude::*;

/// Horizontal stepper; steps before the active one are completed.
#[component]
pub fn OrderProgressStepper(progress: OrderProgress) -> impl IntoView {
    let steps = progress
        .steps
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let completed = progress.is_completed(index);
            let active = progress.is_active(index);
            view! {
                <li
                    class="stepper__step"
                    class:stepper__step--completed=completed
                    class:stepper__step--active=active
                    aria-current=active.then_some("step")
                >
                    <span class="stepper__marker">
                        {if completed { icon("check") } else { (index + 1).to_string().into_any() }}
                    </span>
                    <span class="stepper__label">{label.clone()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <ol class="stepper">{steps}</ol>
    }
}

//! Vertical timeline of dated milestones.

use leptos::prelude::*;

use crate::content::TimelineStep;

#[component]
pub fn Timeline(steps: &'static [TimelineStep]) -> impl IntoView {
    view! {
        <ol class="timeline">
            {steps
                .iter()
                .enumerate()
                .map(|(index, step)| {
                    view! {
                        <li class="timeline__step" class:timeline__step--alt=index % 2 == 1>
                            <span class="timeline__year">{step.year}</span>
                            <p class="timeline__event">{step.event}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Footer bar with the order actions.
#[component]
pub fn ActionButtons(
    on_quick_view: Callback<()>,
    on_print_label: Callback<()>,
    on_mark_ready: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="action-buttons">
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_quick_view.run(())>
                {icon("eye")}
                " QUICK VIEW"
            </Button>
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_print_label.run(())>
                {icon("printer")}
                " PRINT LABEL"
            </Button>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_mark_ready.run(())>
                "MARK READY TO SHIP"
            </Button>
        </div>
    }
}

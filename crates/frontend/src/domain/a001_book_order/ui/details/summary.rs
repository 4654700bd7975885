use crate::shared::components::StatCard;
use crate::shared::icons::icon;
use contracts::domain::a001_book_order::OrderSummary;
use contracts::shared::countdown::Countdown;
use contracts::shared::format::format_currency;
use leptos::prelude::*;

/// Heading, the three summary cards and the pay-by link line.
#[component]
pub fn OrderSummaryCards(
    #[prop(into)] summary: Signal<OrderSummary>,
    #[prop(into)] countdown: Signal<Countdown>,
    /// True for a moment after the link was copied
    #[prop(into)]
    qr_copied: Signal<bool>,
    #[prop(into)] currency: String,
    #[prop(into)] locale: String,
    on_copy_qr: Callback<()>,
    on_regenerate: Callback<()>,
) -> impl IntoView {
    let total = Signal::derive(move || {
        summary.with(|s| format_currency(s.total_amount as f64, &currency, &locale))
    });
    let status = Signal::derive(move || summary.with(|s| s.status.clone()));
    let coupon = Signal::derive(move || summary.with(|s| s.coupon_label().to_string()));
    let total_caption = summary.with_untracked(|s| format!("Total (Paid {})", s.payment_method));

    view! {
        <section class="order-summary">
            <h2 class="order-summary__heading">
                "Order Summary "
                <span class="order-summary__id">{move || format!("#{}", summary.with(|s| s.order_id.clone()))}</span>
            </h2>
            {move || summary.with(|s| s.description.clone()).map(|d| {
                view! { <p class="order-summary__description">{d}</p> }
            })}

            <div class="order-summary__cards">
                <div class="order-summary__card order-summary__card--primary">
                    <StatCard label=total_caption icon_name="credit-card" value=total />
                </div>
                <div class="order-summary__card">
                    <StatCard label="Status" icon_name="truck" value=status />
                </div>
                <div class="order-summary__card">
                    <StatCard label="Coupon Code" icon_name="tag" value=coupon />
                </div>
            </div>

            <div class="order-summary__pay-link">
                <span>
                    "GENERATED PAY BY URL • "
                    <span
                        class="order-summary__countdown"
                        class:order-summary__countdown--expired=move || countdown.get().is_expired()
                    >
                        {move || countdown.get().label()}
                    </span>
                </span>
                <div class="order-summary__pay-actions">
                    <button class="button button--text" on:click=move |_| on_copy_qr.run(())>
                        {move || if qr_copied.get() { icon("check") } else { icon("copy") }}
                        <span>{move || if qr_copied.get() { "COPIED" } else { "COPY QR" }}</span>
                    </button>
                    <button class="button button--text" on:click=move |_| on_regenerate.run(())>
                        {icon("refresh")}
                        <span>"REGENERATE"</span>
                    </button>
                </div>
            </div>
        </section>
    }
}

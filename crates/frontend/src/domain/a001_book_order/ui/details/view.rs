use super::action_buttons::ActionButtons;
use super::model::load_order;
use super::progress::OrderProgressStepper;
use super::quick_info::QuickInfoDialog;
use super::summary::OrderSummaryCards;
use super::tabs::{OrderTabs, ORDER_TABS};
use super::view_model::OrderDetailViewModel;
use crate::app::use_config;
use crate::layout::Shell;
use contracts::domain::a001_book_order::MockOrderSource;
use leptos::prelude::*;

#[component]
pub fn OrderDetailPage() -> impl IntoView {
    let config = use_config();
    let data = load_order(&MockOrderSource::new());
    let vm = OrderDetailViewModel::new(data, config.countdown.seconds, ORDER_TABS[0]);
    vm.start_countdown();

    let progress = vm.progress.get_untracked();

    view! {
        <Shell
            title="Dashboard > Sellers"
            user=vm.user.get_value()
            on_search=Callback::new(move |query| vm.search(query))
            on_date_range_change=Callback::new(move |range| vm.change_date_range(range))
        >
            <div class="order-detail">
                <div class="order-detail__content">
                    <OrderSummaryCards
                        summary=vm.summary
                        countdown=vm.countdown
                        qr_copied=Signal::derive(move || vm.qr_copied.get().is_visible())
                        currency=config.order.currency
                        locale=config.order.locale
                        on_copy_qr=Callback::new(move |_| vm.copy_qr())
                        on_regenerate=Callback::new(move |_| vm.regenerate())
                    />
                    <OrderProgressStepper progress=progress />
                    <OrderTabs selected=vm.selected_tab sellers=vm.sellers />
                </div>

                <ActionButtons
                    on_quick_view=Callback::new(move |_| vm.open_quick_info())
                    on_print_label=Callback::new(move |_| vm.print_label())
                    on_mark_ready=Callback::new(move |_| vm.mark_ready())
                />

                <QuickInfoDialog
                    open=vm.quick_info_open
                    data=vm.quick_info
                    on_close=Callback::new(move |_| vm.close_quick_info())
                />
            </div>
        </Shell>
    }
}

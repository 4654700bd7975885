use super::model::OrderData;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use contracts::domain::a001_book_order::{
    DateRange, OrderProgress, OrderSummary, QuickInfoData, Seller, UserProfile,
};
use contracts::shared::countdown::{ticker_step, Countdown, Flash, StopFlag};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long the "copied" confirmation stays on the COPY QR button.
const COPIED_FEEDBACK_MS: u32 = 2_000;

/// Page state of the order detail screen.
#[derive(Clone, Copy)]
pub struct OrderDetailViewModel {
    pub sellers: RwSignal<Vec<Seller>>,
    pub summary: RwSignal<OrderSummary>,
    pub progress: RwSignal<OrderProgress>,
    pub quick_info: RwSignal<QuickInfoData>,
    pub user: StoredValue<UserProfile>,

    pub quick_info_open: RwSignal<bool>,
    pub selected_tab: RwSignal<String>,
    pub countdown: RwSignal<Countdown>,
    pub qr_copied: RwSignal<Flash>,
    pub search_query: RwSignal<String>,
    pub date_range: RwSignal<DateRange>,
}

impl OrderDetailViewModel {
    pub fn new(data: OrderData, countdown_secs: u64, initial_tab: &str) -> Self {
        Self {
            sellers: RwSignal::new(data.sellers),
            summary: RwSignal::new(data.summary),
            progress: RwSignal::new(data.progress),
            quick_info: RwSignal::new(data.detail),
            user: StoredValue::new(data.user),
            quick_info_open: RwSignal::new(false),
            selected_tab: RwSignal::new(initial_tab.to_string()),
            countdown: RwSignal::new(Countdown::new(countdown_secs)),
            qr_copied: RwSignal::new(Flash::default()),
            search_query: RwSignal::new(String::new()),
            date_range: RwSignal::new(DateRange::default()),
        }
    }

    /// Tick the pay-link countdown once per second until the page's owner
    /// is cleaned up.
    pub fn start_countdown(&self) {
        let countdown = self.countdown;
        let stop = StopFlag::new();

        let owner_stop = stop.clone();
        on_cleanup(move || owner_stop.stop());

        spawn_local(async move {
            loop {
                TimeoutFuture::new(1_000).await;
                // try_update is None once the signal is disposed
                let step = ticker_step(&stop, || countdown.try_update(Countdown::tick).is_some());
                if step.is_break() {
                    break;
                }
            }
            log::debug!("pay link countdown stopped");
        });
    }

    pub fn open_quick_info(&self) {
        self.quick_info_open.set(true);
    }

    pub fn close_quick_info(&self) {
        self.quick_info_open.set(false);
    }

    pub fn copy_qr(&self) {
        let url = self.summary.with_untracked(OrderSummary::pay_url);
        log::info!("Copy QR clicked: {}", url);

        let qr_copied = self.qr_copied;
        copy_to_clipboard_with_callback(&url, move || {
            let Some(generation) = qr_copied.try_update(Flash::show) else {
                return;
            };
            spawn_local(async move {
                TimeoutFuture::new(COPIED_FEEDBACK_MS).await;
                let _ = qr_copied.try_update(|flash| flash.expire(generation));
            });
        });
    }

    /// Issue a new pay-by link: the countdown starts over.
    pub fn regenerate(&self) {
        log::info!("Regenerate clicked");
        self.countdown.update(Countdown::reset);
    }

    pub fn print_label(&self) {
        log::info!("Print label clicked");
    }

    pub fn mark_ready(&self) {
        log::info!("Mark ready clicked");
    }

    pub fn search(&self, query: String) {
        log::info!("Searching for: {}", query);
        self.search_query.set(query);
    }

    pub fn change_date_range(&self, range: DateRange) {
        if range.is_empty() {
            log::info!("Date range cleared");
            self.date_range.set(range);
            return;
        }
        match serde_json::to_string(&range) {
            Ok(json) => log::info!("Date range changed: {}", json),
            Err(_) => log::info!("Date range changed: {:?}", range),
        }
        self.date_range.set(range);
    }
}

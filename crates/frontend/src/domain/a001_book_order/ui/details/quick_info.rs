use crate::shared::icons::icon;
use contracts::domain::a001_book_order::QuickInfoData;
use leptos::prelude::*;
use thaw::*;

#[component]
fn FlagRow(label: &'static str, #[prop(into)] value: Signal<bool>) -> impl IntoView {
    view! {
        <div class="quick-info__row quick-info__flag">
            <span>{label}</span>
            <span
                class="quick-info__flag-icon"
                class:quick-info__flag-icon--yes=move || value.get()
                class:quick-info__flag-icon--no=move || !value.get()
            >
                {move || if value.get() { icon("check") } else { icon("x") }}
            </span>
        </div>
    }
}

/// Buyer details for the current order.
#[component]
pub fn QuickInfoDialog(
    /// Dialog visibility; the dialog also clears it when dismissed
    open: RwSignal<bool>,
    #[prop(into)] data: Signal<QuickInfoData>,
    on_close: Callback<()>,
) -> impl IntoView {
    let field = move |f: fn(&QuickInfoData) -> String| move || data.with(f);

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        <div class="quick-info__title">
                            <span>"Quick Info"</span>
                            <button class="top-header__icon-btn" aria-label="close" on:click=move |_| on_close.run(())>
                                {icon("x")}
                            </button>
                        </div>
                    </DialogTitle>
                    <DialogContent>
                        <div class="quick-info">
                            <div class="quick-info__row">
                                <div class="quick-info__caption">"Full Name"</div>
                                <div class="quick-info__value">{field(|d| d.full_name.clone())}</div>
                            </div>
                            <div class="quick-info__row">
                                <div class="quick-info__caption">"Contact Info"</div>
                                <div class="quick-info__value">{field(|d| d.contact_info.clone())}</div>
                            </div>
                            <FlagRow label="IsGift" value=Signal::derive(move || data.with(|d| d.is_gift)) />
                            <FlagRow label="IsBagPurchased" value=Signal::derive(move || data.with(|d| d.is_bag_purchased)) />
                            <FlagRow label="IsPriceHide" value=Signal::derive(move || data.with(|d| d.is_price_hide)) />
                            <div class="quick-info__row">
                                <div class="quick-info__caption">"Bookmarks"</div>
                                <div class="quick-info__bookmarks">
                                    <div class="quick-info__bookmark">
                                        <div class="quick-info__bookmark-count">
                                            {field(|d| d.bookmarks.still_reading.to_string())}
                                        </div>
                                        <div class="quick-info__bookmark-caption">"STILL READING!"</div>
                                    </div>
                                    <div class="quick-info__bookmark">
                                        <div class="quick-info__bookmark-count">
                                            {field(|d| d.bookmarks.other.to_string())}
                                        </div>
                                        <div class="quick-info__bookmark-caption">"पुरानो बुक मार्क नयाँ पुस्तक"</div>
                                    </div>
                                </div>
                            </div>
                            <div class="quick-info__row">
                                <div class="quick-info__caption">"OrderNotes"</div>
                                <div class="quick-info__notes">
                                    {field(|d| format!("\"{}\"", d.order_notes))}
                                </div>
                            </div>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| on_close.run(())>
                            "CLOSE"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

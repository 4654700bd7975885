mod book_table;

pub use book_table::BookTable;

use contracts::domain::a001_book_order::Seller;
use leptos::prelude::*;
use thaw::*;

pub const ORDER_TABS: [&str; 7] = [
    "INVOICE ITEM",
    "ORDER DETAILS",
    "SHIPPING",
    "INVOICES",
    "REFUNDS",
    "PAYMENTS",
    "LOGS",
];

/// Text of a tab without content yet: `"ORDER DETAILS"` -> `"Order details content"`.
pub fn tab_placeholder(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => format!("{}{} content", first, chars.as_str().to_lowercase()),
        None => "content".to_string(),
    }
}

/// Tab strip of the order. Panels stay mounted so table state survives tab switches.
#[component]
pub fn OrderTabs(
    selected: RwSignal<String>,
    #[prop(into)] sellers: Signal<Vec<Seller>>,
) -> impl IntoView {
    let is_hidden = move |label: &'static str| move || selected.get() != label;

    view! {
        <div class="order-tabs">
            <TabList selected_value=selected>
                {ORDER_TABS
                    .iter()
                    .map(|&label| view! { <Tab value=label>{label}</Tab> })
                    .collect_view()}
            </TabList>

            <div role="tabpanel" class="order-tabs__panel" prop:hidden=is_hidden(ORDER_TABS[0])>
                <For
                    each=move || sellers.get()
                    key=|seller| seller.id
                    children=move |seller| view! { <BookTable seller=seller /> }
                />
            </div>
            {ORDER_TABS[1..]
                .iter()
                .map(|&label| {
                    view! {
                        <div role="tabpanel" class="order-tabs__panel" prop:hidden=is_hidden(label)>
                            <p>{tab_placeholder(label)}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_placeholder() {
        assert_eq!(tab_placeholder("ORDER DETAILS"), "Order details content");
        assert_eq!(tab_placeholder("LOGS"), "Logs content");
    }

    #[test]
    fn test_first_tab_is_invoice_item() {
        assert_eq!(ORDER_TABS.len(), 7);
        assert_eq!(ORDER_TABS[0], "INVOICE ITEM");
    }
}

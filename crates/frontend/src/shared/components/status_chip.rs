use contracts::enums::OrderStatus;
use leptos::prelude::*;

/// Inline style for a status chip; colours come from [`OrderStatus::palette`].
pub fn status_chip_style(status: OrderStatus) -> String {
    let palette = status.palette();
    format!(
        "background-color: {}; color: {};",
        palette.background, palette.foreground
    )
}

#[component]
pub fn StatusChip(status: OrderStatus) -> impl IntoView {
    view! {
        <span class="status-chip" style=status_chip_style(status)>
            {status.display_name()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_style_uses_palette() {
        let style = status_chip_style(OrderStatus::Cancelled);
        let palette = OrderStatus::Cancelled.palette();
        assert!(style.contains(palette.background));
        assert!(style.contains(palette.foreground));
    }

    #[test]
    fn test_success_statuses_share_style() {
        assert_eq!(
            status_chip_style(OrderStatus::Shipped),
            status_chip_style(OrderStatus::Confirmed)
        );
        assert_ne!(
            status_chip_style(OrderStatus::Pending),
            status_chip_style(OrderStatus::Processing)
        );
    }
}

use contracts::domain::a001_book_order::{
    OrderDataSource, OrderProgress, OrderSummary, QuickInfoData, Seller, UserProfile,
};

/// Everything the order detail screen renders, loaded once on mount.
#[derive(Debug, Clone)]
pub struct OrderData {
    pub sellers: Vec<Seller>,
    pub detail: QuickInfoData,
    pub summary: OrderSummary,
    pub progress: OrderProgress,
    pub user: UserProfile,
}

pub fn load_order(source: &dyn OrderDataSource) -> OrderData {
    OrderData {
        sellers: source.load_order_sellers(),
        detail: source.load_order_detail(),
        summary: source.load_order_summary(),
        progress: source.load_order_progress(),
        user: source.load_current_user(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_book_order::MockOrderSource;

    #[test]
    fn test_load_order_from_mock() {
        let data = load_order(&MockOrderSource::seeded(7));
        let counts: Vec<usize> = data.sellers.iter().map(Seller::book_count).collect();
        assert_eq!(counts, vec![70, 30]);
        assert_eq!(data.summary.order_id, "ORD4567");
        assert_eq!(data.detail.full_name, "Niraj Pun");
        assert_eq!(data.progress.active_step, 1);
        assert_eq!(data.user.name, "John Doe");
    }
}

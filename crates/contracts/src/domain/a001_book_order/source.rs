use super::aggregate::{
    BookAccent, BookItem, Bookmarks, OrderProgress, OrderSummary, QuickInfoData, Seller,
    UserProfile,
};
use crate::enums::OrderStatus;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

const BOOK_TITLES: [&str; 10] = [
    "The Great Adventure",
    "Hidden Secrets",
    "Mountain Echoes",
    "Urban Tales",
    "Distant Horizons",
    "Whispers in the Wind",
    "Forgotten Realms",
    "Eternal Sunshine",
    "Midnight Chronicles",
    "Ocean Depths",
];

const AUTHORS: [&str; 10] = [
    "John Smith",
    "Emily Johnson",
    "Michael Brown",
    "Sarah Davis",
    "David Wilson",
    "Lisa Anderson",
    "Robert Taylor",
    "Jennifer Thomas",
    "William Martin",
    "Jessica White",
];

/// (id, name, avatar letter, number of books)
const SELLERS: [(u32, &str, &str, u32); 2] = [
    (1, "Booksmandala", "B", 70),
    (2, "HamroBooks", "H", 30),
];

/// Where the order detail screen gets its data from.
///
/// The screen only talks to this trait, so a real backend client can replace
/// [`MockOrderSource`] without touching any view.
pub trait OrderDataSource {
    /// Sellers with their purchased books, in display order.
    fn load_order_sellers(&self) -> Vec<Seller>;

    /// Buyer/order metadata for the quick info dialog.
    fn load_order_detail(&self) -> QuickInfoData;

    fn load_order_summary(&self) -> OrderSummary;

    fn load_order_progress(&self) -> OrderProgress {
        OrderProgress::default()
    }

    /// The administrator signed in to the back office.
    fn load_current_user(&self) -> UserProfile;
}

/// Randomised stand-in for the order API.
///
/// Every call to [`OrderDataSource::load_order_sellers`] draws fresh content;
/// the shape (two sellers, 70 + 30 books, ids 1..=100) never changes.
pub struct MockOrderSource {
    rng: RefCell<StdRng>,
}

impl MockOrderSource {
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Reproducible source for tests and demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for MockOrderSource {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderDataSource for MockOrderSource {
    fn load_order_sellers(&self) -> Vec<Seller> {
        let sellers = generate_sellers(&mut *self.rng.borrow_mut());
        log::debug!(
            "generated mock order: {} sellers, {} books",
            sellers.len(),
            sellers.iter().map(Seller::book_count).sum::<usize>()
        );
        sellers
    }

    fn load_order_detail(&self) -> QuickInfoData {
        QuickInfoData {
            full_name: "Niraj Pun".to_string(),
            contact_info: "9848260876".to_string(),
            is_gift: false,
            is_bag_purchased: false,
            is_price_hide: true,
            bookmarks: Bookmarks {
                still_reading: 3,
                other: 1,
            },
            order_notes: "Please write \"k chha khabar\" in sticky notes and deliver it".to_string(),
        }
    }

    fn load_order_summary(&self) -> OrderSummary {
        OrderSummary {
            order_id: "ORD4567".to_string(),
            description: Some("Additional description if required".to_string()),
            total_amount: 2758,
            payment_method: "Esewa".to_string(),
            status: "Waiting at Hub".to_string(),
            coupon_code: None,
        }
    }

    fn load_current_user(&self) -> UserProfile {
        UserProfile {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            avatar: String::new(),
            role: "Administrator".to_string(),
        }
    }
}

/// Builds both sellers; book ids run sequentially across them starting at 1.
pub fn generate_sellers<R: Rng + ?Sized>(rng: &mut R) -> Vec<Seller> {
    let mut next_id = 1;
    SELLERS
        .iter()
        .map(|&(id, name, avatar, count)| {
            let mut seller = Seller::new(id, name, avatar);
            seller.books = (next_id..next_id + count)
                .map(|book_id| random_book(rng, book_id))
                .collect();
            next_id += count;
            seller
        })
        .collect()
}

fn random_book<R: Rng + ?Sized>(rng: &mut R, id: u32) -> BookItem {
    let statuses = OrderStatus::all();
    let title_index = rng.gen_range(0..BOOK_TITLES.len());
    let author_index = rng.gen_range(0..AUTHORS.len());
    let status_index = rng.gen_range(0..statuses.len());

    BookItem {
        id,
        title: BOOK_TITLES[title_index].to_string(),
        author: AUTHORS[author_index].to_string(),
        quantity: rng.gen_range(1..=5),
        cost: rng.gen_range(100..=599),
        status: statuses[status_index],
        accent: if title_index % 3 == 0 {
            BookAccent::Primary
        } else {
            BookAccent::Default
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_shape_is_fixed() {
        let source = MockOrderSource::new();
        for _ in 0..5 {
            let sellers = source.load_order_sellers();
            assert_eq!(sellers.len(), 2);
            assert_eq!(sellers[0].books.len(), 70);
            assert_eq!(sellers[1].books.len(), 30);
            assert_eq!(sellers[0].name, "Booksmandala");
            assert_eq!(sellers[1].avatar, "H");
        }
    }

    #[test]
    fn test_ids_unique_and_sequential() {
        let sellers = MockOrderSource::seeded(7).load_order_sellers();
        let ids: Vec<u32> = sellers
            .iter()
            .flat_map(|s| s.books.iter().map(|b| b.id))
            .collect();
        assert_eq!(ids, (1..=100).collect::<Vec<_>>());
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 100);
    }

    #[test]
    fn test_field_ranges() {
        let sellers = MockOrderSource::seeded(42).load_order_sellers();
        for book in sellers.iter().flat_map(|s| &s.books) {
            assert!((1..=5).contains(&book.quantity));
            assert!((100..=599).contains(&book.cost));
            assert!(OrderStatus::all().contains(&book.status));
            assert!(BOOK_TITLES.contains(&book.title.as_str()));
            assert!(AUTHORS.contains(&book.author.as_str()));
        }
    }

    #[test]
    fn test_accent_follows_title_index() {
        let sellers = MockOrderSource::seeded(3).load_order_sellers();
        for book in sellers.iter().flat_map(|s| &s.books) {
            let index = BOOK_TITLES.iter().position(|t| *t == book.title).unwrap();
            let expected = if index % 3 == 0 {
                BookAccent::Primary
            } else {
                BookAccent::Default
            };
            assert_eq!(book.accent, expected);
        }
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let a = MockOrderSource::seeded(11).load_order_sellers();
        let b = MockOrderSource::seeded(11).load_order_sellers();
        assert_eq!(a, b);
    }

    #[test]
    fn test_static_records() {
        let source = MockOrderSource::seeded(0);
        let detail = source.load_order_detail();
        assert_eq!(detail.full_name, "Niraj Pun");
        assert!(detail.is_price_hide);
        assert_eq!(detail.bookmarks.still_reading, 3);

        let summary = source.load_order_summary();
        assert_eq!(summary.order_id, "ORD4567");
        assert_eq!(summary.total_amount, 2758);
        assert_eq!(summary.coupon_label(), "No Coupon");
        assert!(summary.pay_url().ends_with("/ORD4567"));
    }
}

use crate::enums::OrderStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Line items
// ============================================================================

/// Accent style of the square avatar shown next to a book title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookAccent {
    Primary,
    #[default]
    Default,
}

/// One purchased book within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookItem {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub quantity: u32,
    pub cost: u32,
    pub status: OrderStatus,
    pub accent: BookAccent,
}

impl BookItem {
    /// First letter of the title, used as avatar text.
    pub fn initial(&self) -> String {
        self.title.chars().next().map(String::from).unwrap_or_default()
    }
}

/// A seller and the books bought from them in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: u32,
    pub name: String,
    pub avatar: String,
    pub books: Vec<BookItem>,
}

impl Seller {
    pub fn new(id: u32, name: &str, avatar: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            avatar: avatar.to_string(),
            books: Vec::new(),
        }
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }
}

// ============================================================================
// Order header
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bookmarks {
    pub still_reading: u32,
    pub other: u32,
}

/// Buyer/order metadata shown in the quick info dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickInfoData {
    pub full_name: String,
    pub contact_info: String,
    pub is_gift: bool,
    pub is_bag_purchased: bool,
    pub is_price_hide: bool,
    pub bookmarks: Bookmarks,
    pub order_notes: String,
}

/// Figures shown in the summary cards above the progress stepper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: String,
    pub description: Option<String>,
    pub total_amount: u64,
    pub payment_method: String,
    pub status: String,
    pub coupon_code: Option<String>,
}

impl OrderSummary {
    pub fn coupon_label(&self) -> &str {
        self.coupon_code.as_deref().unwrap_or("No Coupon")
    }

    /// Pay-by link the QR code encodes.
    pub fn pay_url(&self) -> String {
        format!("https://pay.booksmandala.com/orders/{}", self.order_id)
    }
}

/// Shipment progress: ordered step labels and the zero-based current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderProgress {
    pub steps: Vec<String>,
    pub active_step: usize,
}

impl OrderProgress {
    pub fn is_completed(&self, index: usize) -> bool {
        index < self.active_step
    }

    pub fn is_active(&self, index: usize) -> bool {
        index == self.active_step
    }
}

impl Default for OrderProgress {
    fn default() -> Self {
        Self {
            steps: ["Confirmation", "Waiting at Hub", "Shipped", "Delivered"]
                .into_iter()
                .map(String::from)
                .collect(),
            active_step: 1,
        }
    }
}

// ============================================================================
// Header/navigation
// ============================================================================

/// Date filter chosen in the header calendar. Either end may be open.
///
/// No ordering between the two dates is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub role: String,
}

impl UserProfile {
    /// Upper-cased first letter of the name, shown when there is no avatar image.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Avatar image URL, if the profile has one.
    pub fn avatar_url(&self) -> Option<&str> {
        let url = self.avatar.trim();
        (!url.is_empty()).then_some(url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationItem {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

impl NavigationItem {
    /// Entries of the back-office sidebar; "Orders" is the current section.
    pub fn sidebar() -> Vec<NavigationItem> {
        vec![
            Self::item("dashboard", "Dashboard", "layout-dashboard", false),
            Self::item("orders", "Orders", "shopping-cart", true),
            Self::item("sellers", "All Sellers", "users", false),
            Self::item("payment", "Payment Settlement", "credit-card", false),
            Self::item("verification", "Digital Item Verification", "shield-check", false),
            Self::item("return", "Return/Refund", "package-x", false),
        ]
    }

    fn item(key: &'static str, label: &'static str, icon: &'static str, active: bool) -> Self {
        Self {
            key,
            label,
            icon,
            active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_markers() {
        let progress = OrderProgress::default();
        assert_eq!(progress.steps.len(), 4);
        assert!(progress.is_completed(0));
        assert!(progress.is_active(1));
        assert!(!progress.is_completed(1));
        assert!(!progress.is_completed(3));
    }

    #[test]
    fn test_date_range_empty() {
        let mut range = DateRange::default();
        assert!(range.is_empty());
        range.end_date = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_initials() {
        let user = UserProfile {
            id: "1".into(),
            name: "john Doe".into(),
            email: String::new(),
            avatar: String::new(),
            role: String::new(),
        };
        assert_eq!(user.initial(), "J");
        assert_eq!(user.avatar_url(), None);

        let with_photo = UserProfile {
            avatar: " https://cdn.example.com/john.png ".into(),
            ..user
        };
        assert_eq!(with_photo.avatar_url(), Some("https://cdn.example.com/john.png"));

        let book = BookItem {
            id: 1,
            title: "Ocean Depths".into(),
            author: "Jessica White".into(),
            quantity: 1,
            cost: 100,
            status: OrderStatus::Pending,
            accent: BookAccent::Default,
        };
        assert_eq!(book.initial(), "O");
    }

    #[test]
    fn test_sidebar_has_single_active_entry() {
        let items = NavigationItem::sidebar();
        assert_eq!(items.len(), 6);
        let active: Vec<_> = items.iter().filter(|i| i.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].key, "orders");
    }
}

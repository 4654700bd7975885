pub mod aggregate;
pub mod source;

pub use aggregate::{
    BookAccent, BookItem, Bookmarks, DateRange, NavigationItem, OrderProgress, OrderSummary,
    QuickInfoData, Seller, UserProfile,
};
pub use source::{MockOrderSource, OrderDataSource};

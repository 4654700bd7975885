pub mod pagination_controls;
pub mod stat_card;
pub mod status_chip;
pub mod table;

pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;
pub use status_chip::StatusChip;

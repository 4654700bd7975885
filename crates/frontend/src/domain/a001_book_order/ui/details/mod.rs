//! Order Detail screen
//!
//! MVVM layout:
//! - model.rs: loads everything the screen shows from an `OrderDataSource`
//! - view_model.rs: page state and commands
//! - view.rs: page composition
//! - the remaining files are presentational pieces driven by props

mod action_buttons;
mod model;
mod progress;
mod quick_info;
mod summary;
mod tabs;
mod view;
mod view_model;

pub use view::OrderDetailPage;
pub use view_model::OrderDetailViewModel;

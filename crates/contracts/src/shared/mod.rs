pub mod config;
pub mod countdown;
pub mod error;
pub mod format;
pub mod layout;
pub mod pagination;
pub mod storage;
pub mod theme;

//! Shared domain model and framework-free logic for the order detail screen.
//!
//! Everything here compiles for both the browser (wasm32) and the host, so the
//! view-state transitions can be tested without a DOM.

pub mod domain;
pub mod enums;
pub mod shared;

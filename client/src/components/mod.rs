//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and shared surfaces while reading/writing
//! state from Leptos context providers.

pub mod footer;
pub mod header;
pub mod notice_tray;
pub mod product_card;

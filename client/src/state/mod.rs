//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `notice`, `shop`) so individual
//! components can depend on small focused models. `App` wraps each in an
//! `RwSignal` and provides it as context.

pub mod notice;
pub mod session;
pub mod shop;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The auth pages keep their form logic in plain structs so
//! it can be exercised without a browser.

pub mod home;
pub mod login;
pub mod sign_up;

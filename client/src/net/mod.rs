//! Networking modules for the storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP client and its transport seam, and `types` defines the
//! wire schema shared with the backend.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

//! Browser helpers kept out of state and page code.
//!
//! `storage` is the only one so far: localStorage access that compiles to
//! no-ops for SSR and native tests.

pub mod storage;

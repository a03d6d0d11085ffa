//! Browser helpers kept apart from component logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here compiles to a no-op without the `csr` feature so the rest
//! of the crate can be tested natively.

pub mod dark_mode;

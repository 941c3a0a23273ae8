//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser concerns stay behind the capability traits in `theme`, so the
//! preference logic runs unchanged against `memory` fakes in tests.

pub mod browser;
#[cfg(test)]
pub mod memory;
pub mod theme;

//! Utility modules.

pub mod plural;

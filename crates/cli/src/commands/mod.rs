//! Command implementations.

pub mod lookup;

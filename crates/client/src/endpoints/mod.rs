//! REST API endpoint implementations.

mod lookup;

pub(crate) use lookup::lookup;

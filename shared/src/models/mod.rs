//! Domain models for the weather map

mod forecast;
mod snapshot;

pub use forecast::*;
pub use snapshot::*;

#[cfg(test)]
pub(crate) use forecast::test_support;

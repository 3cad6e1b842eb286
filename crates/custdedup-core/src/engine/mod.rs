//! Set engines over customer identifiers.
//!
//! Both engines are pure reductions over an already-materialized snapshot of
//! records. They hold no state, raise no errors and never mutate their input.

mod compare;
mod dedup;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use compare::{compare, SourcePartition};
pub use dedup::analyze;

//! Caller-side workflows against a running arbiter

pub mod round;

pub use round::{run_election, ElectionReport};

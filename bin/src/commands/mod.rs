//! CLI command implementations.

pub(crate) mod run;

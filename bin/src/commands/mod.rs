//! Command implementations for the fxharvest CLI.

pub(crate) mod fetch;
pub(crate) mod intervals;
pub(crate) mod pairs;
pub(crate) mod run;

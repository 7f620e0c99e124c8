//! Startup and shutdown steps shared by the execution modes

pub mod shutdown;
pub mod startup;

//! CLI library components for the portal console.

pub mod logging;

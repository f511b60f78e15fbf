//! # Infrastructure Layer
//!
//! Everything that touches the outside world: the carrier port and its
//! transport plumbing, configuration loading, and logging setup.

pub mod carriers;
pub mod config;
pub mod logging;

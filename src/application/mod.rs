//! # Application Layer
//!
//! Use-case orchestration over the domain and carrier infrastructure:
//! the composite aggregation services.

pub mod services;

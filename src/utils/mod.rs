//! Utility functions shared across layers.
//!
//! - [`ids`] - Record id parsing for path parameters
//! - [`validation`] - Flattening of validation errors into messages
//! - [`sample_data`] - Seed listings for the admin CLI

pub mod ids;
pub mod sample_data;
pub mod validation;

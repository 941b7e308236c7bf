//! Request handling plumbing shared by the web routes.
//!
//! # Modules
//!
//! - [`dto`] - Request bodies and their validation rules
//! - [`extract`] - JSON-or-form body extractor
//! - [`middleware`] - Method override, panic guard and tracing layers

pub mod dto;
pub mod extract;
pub mod middleware;

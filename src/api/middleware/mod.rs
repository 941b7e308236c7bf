//! HTTP middleware shared by all routes.
//!
//! - [`method_override`] - `_method` rewriting for HTML forms
//! - [`panic`] - panic to 500 conversion
//! - [`tracing`] - request/response logging

pub mod method_override;
pub mod panic;
pub mod tracing;

//! Server-rendered listings site.
//!
//! Pages are Askama templates under `templates/`; every mutation answers
//! with a redirect.
//!
//! # Modules
//!
//! - [`handlers`] - Page and form handlers
//! - [`routes`] - Route table

pub mod handlers;
pub mod routes;

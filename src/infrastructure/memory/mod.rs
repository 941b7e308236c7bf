//! In-process store for tests and local runs without PostgreSQL.
//!
//! Provides [`MemoryStore`], a single store implementing both
//! [`crate::domain::repositories::ListingRepository`] and
//! [`crate::domain::repositories::ReviewRepository`].

mod memory_store;

pub use memory_store::MemoryStore;

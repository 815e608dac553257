//! Page storage implementations.
//!
//! # Repositories
//!
//! - [`InMemoryPageRepository`] - ordered page store kept in process memory
//!
//! [`IdGenerator`] is the id source owned by the store.

pub mod id_generator;
pub mod memory_page_repository;

pub use id_generator::IdGenerator;
pub use memory_page_repository::{InMemoryPageRepository, demo_pages};

//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated via
//! `mockall` for service tests.
//!
//! See integration tests in `tests/repository_page.rs` for usage examples.

pub mod page_repository;

pub use page_repository::PageRepository;

#[cfg(test)]
pub use page_repository::MockPageRepository;

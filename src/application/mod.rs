//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::page_service::PageService`] - Page listing, lookup and mutation

pub mod services;

//! Business logic services for the application layer.

pub mod page_service;

pub use page_service::PageService;

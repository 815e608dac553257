//! Core domain entities.
//!
//! - [`Page`] - A stored page record
//! - [`NewPage`] - Input for creating a page

pub mod page;

pub use page::{NewPage, Page, UNKNOWN_URL};

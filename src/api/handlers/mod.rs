//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod pages;
pub mod testing;

pub use health::health_handler;
pub use pages::{
    create_page_handler, delete_page_handler, get_page_handler, list_pages_handler,
    update_page_handler,
};
pub use testing::reset_data_handler;

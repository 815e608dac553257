//! # Pages Service
//!
//! A small HTTP service that keeps a list of page records (`id`, `title`,
//! `url`) in process memory and exposes CRUD operations over JSON.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Page entity, title policy and repository trait
//! - **Application Layer** ([`application`]) - Page service
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store and id generator
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! | Route | Success | Failure |
//! |---|---|---|
//! | `GET /pages?title=` | 200 + array | |
//! | `GET /pages/{id}` | 200 + page | 404 |
//! | `POST /pages` | 201 + page | 400 |
//! | `PUT /pages/{id}` | 204 | 400, 404 |
//! | `DELETE /pages/{id}` | 204 | 404 |
//! | `DELETE /__test__/data` | 201 | |
//!
//! Errors carry no body; see [`error::AppError`].
//!
//! ## Quick Start
//!
//! ```bash
//! LISTEN=127.0.0.1:3000 SEED_PAGES=true cargo run
//! curl localhost:3000/pages?title=Shop
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::page::PageView;
    pub use crate::application::services::PageService;
    pub use crate::domain::entities::{NewPage, Page};
    pub use crate::domain::title::{Title, TitlePolicy};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryPageRepository;
    pub use crate::routes::{RouterOptions, app_router};
    pub use crate::state::AppState;
}

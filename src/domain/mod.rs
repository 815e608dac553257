//! Domain layer containing the page entity, title rules and repository contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`title`] - Title validation policy and the validated [`title::Title`] type
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP or storage layers.
//! Implementations of the repository traits live in [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
pub mod title;

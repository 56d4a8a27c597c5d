//! HTTP adapter - axum bindings for the workflow operations.

pub mod analysis;
pub mod error;
pub mod interview;
pub mod router;

pub use router::{app_router, AppState};

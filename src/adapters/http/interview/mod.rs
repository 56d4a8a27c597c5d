//! Interview HTTP resource.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::InterviewHandlers;
pub use routes::interview_routes;

//! In-memory store adapters.
//!
//! Useful for tests and development; no durability. The session store's
//! single write lock makes the check-and-append race-free per process.

mod report_store;
mod session_store;

pub use report_store::InMemoryReportStore;
pub use session_store::InMemorySessionStore;

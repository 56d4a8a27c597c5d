//! Command and query handlers.
//!
//! Each handler owns its port dependencies behind `Arc<dyn ...>` and exposes
//! a single `handle` method. Handlers surface every error to the caller;
//! none of them retries.

mod get_analysis;
mod get_session;
mod list_history;
mod next_question;
mod request_analysis;
mod start_interview;
mod submit_answer;

pub use get_analysis::{GetAnalysisHandler, GetAnalysisQuery};
pub use get_session::{GetSessionHandler, GetSessionQuery};
pub use list_history::{ListHistoryHandler, ListHistoryQuery};
pub use next_question::{NextQuestionHandler, NextQuestionQuery};
pub use request_analysis::{RequestAnalysisCommand, RequestAnalysisHandler, RequestAnalysisResult};
pub use start_interview::{StartInterviewCommand, StartInterviewHandler, StartInterviewResult};
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};

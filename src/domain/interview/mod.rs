//! Interview module - the five-question intake state machine.
//!
//! A [`Session`] collects answers to a fixed, ordered question catalog.
//! Interview state is never stored; it is always derived from how many
//! answers have been recorded.

mod answer;
mod questions;
mod session;
mod state;

pub use answer::Answer;
pub use questions::{question_for_index, Question, QuestionSlot, QUESTION_COUNT};
pub use session::Session;
pub use state::{InterviewStatus, InterviewStep};

//! Two-stage hotel QA pipeline.
//!
//! Stage one (`retrieve`) asks the chat model to extract
//! `{location, rating, hotel_name}` from the question and runs a filtered
//! similarity search; stage two (`generate`) summarizes the retrieved
//! documents, or returns a fixed Vietnamese apology when nothing matched.
//!
//! Public API: [`answer_question`] plus the stage functions for callers that
//! need the intermediate [`Retrieved`] value.

pub mod cfg;
pub mod compose;
pub mod embedding;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod question;

pub use cfg::PipelineConfig;
pub use error::PipelineError;
pub use extract::{ExtractError, HotelFilter};
pub use pipeline::{QaOutcome, Retrieved, answer_question, generate, retrieve};

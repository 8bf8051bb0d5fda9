// Answer generation: prompt building and the single completion call.
// All provider calls go through llm_client; this module only sees the trait.

pub mod generator;
pub mod handlers;
pub mod prompts;

pub use generator::AnswerGenerator;

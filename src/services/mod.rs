pub mod context;
pub mod gemini;
pub mod prompt;

pub mod gemini;
pub mod model;
pub mod quiz;

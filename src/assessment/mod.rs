pub mod assembler;
pub mod types;

pub use assembler::{assemble, AssessmentAssembler, DEFAULT_LANGUAGE};
pub use types::AssessmentError;

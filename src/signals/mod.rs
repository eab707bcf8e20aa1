pub mod extractor;
pub mod lexicon;
pub mod sanitize;
pub mod types;

pub use extractor::{extract, extract_with};
pub use types::{summarize, ExtractionSettings, SignalSummary};

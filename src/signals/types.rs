use serde::{Deserialize, Serialize};

use crate::models::{SignalKind, SignalTag};

/// Tunables for text extraction, carried by `EngineConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionSettings {
    /// Reports with fewer whitespace tokens than this are fragmented.
    pub fragmentation_token_threshold: usize,
    /// Confidence of the structural fragmentation tag.
    pub fragmentation_confidence: f64,
    /// Confidence of a lexical hit.
    pub lexical_confidence: f64,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            fragmentation_token_threshold: 4,
            fragmentation_confidence: 0.5,
            lexical_confidence: 1.0,
        }
    }
}

/// All tags of one kind folded together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSummary {
    pub kind: SignalKind,
    /// Highest confidence among the folded tags.
    pub confidence: f64,
    /// Number of tags folded (distinct lexicon hits, or one structural cue).
    pub hits: usize,
}

/// Deduplicate tags by kind, keeping first-seen order.
pub fn summarize(tags: &[SignalTag]) -> Vec<SignalSummary> {
    let mut summaries: Vec<SignalSummary> = Vec::new();
    for tag in tags {
        match summaries.iter_mut().find(|s| s.kind == tag.kind) {
            Some(existing) => {
                existing.confidence = existing.confidence.max(tag.confidence);
                existing.hits += 1;
            }
            None => summaries.push(SignalSummary {
                kind: tag.kind,
                confidence: tag.confidence,
                hits: 1,
            }),
        }
    }
    summaries
}

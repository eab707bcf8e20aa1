use crate::models::{SignalKind, SignalTag};

use super::lexicon::find_markers;
use super::sanitize::sanitize_report_text;
use super::types::ExtractionSettings;

/// Extract weak signals with the reference settings.
pub fn extract(text: &str) -> Vec<SignalTag> {
    extract_with(text, &ExtractionSettings::default())
}

/// Extract weak signals from report text.
///
/// Every lexicon hit emits one tag per kind it maps to, in lexicon order;
/// tags are not deduplicated here. A non-empty report shorter than the
/// token threshold additionally carries `cognitive_fragmentation`.
/// Deterministic: the same text always yields the same tags.
pub fn extract_with(text: &str, settings: &ExtractionSettings) -> Vec<SignalTag> {
    let sanitized = sanitize_report_text(text);
    let mut tags = Vec::new();

    for entry in find_markers(&sanitized.text) {
        for kind in entry.kinds {
            tags.push(SignalTag::lexical(
                *kind,
                settings.lexical_confidence,
                entry.marker,
            ));
        }
    }

    if is_fragmented(&sanitized.text, settings.fragmentation_token_threshold) {
        tags.push(SignalTag::structural(
            SignalKind::CognitiveFragmentation,
            settings.fragmentation_confidence,
        ));
    }

    tracing::debug!(
        tag_count = tags.len(),
        sanitized = sanitized.was_modified(),
        "Signal extraction complete"
    );

    tags
}

/// Short, clipped reports are themselves a weak signal. Empty text is not.
pub fn is_fragmented(text: &str, token_threshold: usize) -> bool {
    let tokens = text.split_whitespace().count();
    tokens > 0 && tokens < token_threshold
}

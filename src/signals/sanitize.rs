//! Text clean-up applied before marker matching.

/// Report text after clean-up, with a note of what changed.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedText {
    pub text: String,
    pub modifications: Vec<TextModification>,
}

impl SanitizedText {
    pub fn was_modified(&self) -> bool {
        !self.modifications.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextModification {
    InvisibleUnicodeRemoved,
    ControlCharacterRemoved,
}

/// Strip invisible and control characters. Length is never cut: a marker
/// anywhere in the report must still be found.
pub fn sanitize_report_text(raw: &str) -> SanitizedText {
    let mut modifications = Vec::new();

    let mut text = remove_invisible_unicode(raw);
    if text.len() != raw.len() {
        modifications.push(TextModification::InvisibleUnicodeRemoved);
    }

    if text.chars().any(is_stray_control) {
        text = replace_control_characters(&text);
        modifications.push(TextModification::ControlCharacterRemoved);
    }

    SanitizedText {
        text,
        modifications,
    }
}

/// Remove zero-width and invisible Unicode characters.
fn remove_invisible_unicode(text: &str) -> String {
    text.chars()
        .filter(|c| {
            !matches!(
                *c,
                '\u{200B}'..='\u{200F}'  // Zero-width chars
                | '\u{202A}'..='\u{202E}' // Directional formatting
                | '\u{2060}'..='\u{2064}' // Invisible operators
                | '\u{2066}'..='\u{2069}' // Directional isolates
                | '\u{FEFF}'              // BOM
                | '\u{00AD}'              // Soft hyphen
                | '\u{034F}'              // Combining grapheme joiner
            )
        })
        .collect()
}

fn is_stray_control(c: char) -> bool {
    c.is_control() && c != '\n' && c != '\t'
}

/// Control characters become spaces so they still separate tokens.
fn replace_control_characters(text: &str) -> String {
    text.chars()
        .map(|c| if is_stray_control(c) { ' ' } else { c })
        .collect()
}

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::SignalKind;
use crate::models::SignalKind::{
    HeavyMetalToxicity, RespiratoryStress, SleepDisturbance, StressMarker,
};

use self::Script::{Cyrillic, Latin};

/// Script a marker is written in. The collaborator UI submits either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    Latin,
    Cyrillic,
}

/// A weak-signal marker and the tags it raises.
#[derive(Debug)]
pub struct LexiconEntry {
    pub marker: &'static str,
    pub script: Script,
    pub kinds: &'static [SignalKind],
}

const fn entry(marker: &'static str, script: Script, kinds: &'static [SignalKind]) -> LexiconEntry {
    LexiconEntry {
        marker,
        script,
        kinds,
    }
}

const STRESS: &[SignalKind] = &[StressMarker];
const SLEEP: &[SignalKind] = &[StressMarker, SleepDisturbance];
const BREATH: &[SignalKind] = &[RespiratoryStress];
const METAL: &[SignalKind] = &[HeavyMetalToxicity];

/// Markers are matched as case-insensitive substrings, so stems such as
/// "nause" or "одышк" cover their inflected forms. Order is match order.
pub static LEXICON: &[LexiconEntry] = &[
    // Latin: stress
    entry("headache", Latin, STRESS),
    entry("head hurts", Latin, STRESS),
    entry("migraine", Latin, STRESS),
    entry("tired", Latin, STRESS),
    entry("fatigue", Latin, STRESS),
    entry("exhausted", Latin, STRESS),
    entry("nause", Latin, STRESS),
    entry("anxi", Latin, STRESS),
    entry("palpitation", Latin, STRESS),
    entry("heart racing", Latin, STRESS),
    entry("forgot", Latin, STRESS),
    entry("dizz", Latin, STRESS),
    // Latin: sleep
    entry("insomnia", Latin, SLEEP),
    entry("can't sleep", Latin, SLEEP),
    entry("cannot sleep", Latin, SLEEP),
    entry("sleepless", Latin, SLEEP),
    entry("nightmare", Latin, SLEEP),
    // Latin: respiratory
    entry("breath", Latin, BREATH),
    entry("wheez", Latin, BREATH),
    entry("cough", Latin, BREATH),
    entry("chest tight", Latin, BREATH),
    // Latin: metal taste
    entry("metal", Latin, METAL),
    // Cyrillic: stress
    entry("болит", Cyrillic, STRESS),
    entry("голова", Cyrillic, STRESS),
    entry("мигрен", Cyrillic, STRESS),
    entry("устал", Cyrillic, STRESS),
    entry("тошнит", Cyrillic, STRESS),
    entry("тошнот", Cyrillic, STRESS),
    entry("пульс", Cyrillic, STRESS),
    entry("забыл", Cyrillic, STRESS),
    entry("тревог", Cyrillic, STRESS),
    entry("головокруж", Cyrillic, STRESS),
    // Cyrillic: sleep
    entry("сон", Cyrillic, SLEEP),
    entry("бессонниц", Cyrillic, SLEEP),
    entry("не могу уснуть", Cyrillic, SLEEP),
    entry("кошмар", Cyrillic, SLEEP),
    // Cyrillic: respiratory
    entry("дыхани", Cyrillic, BREATH),
    entry("дышать", Cyrillic, BREATH),
    entry("одышк", Cyrillic, BREATH),
    entry("кашел", Cyrillic, BREATH),
    entry("кашля", Cyrillic, BREATH),
    entry("задыха", Cyrillic, BREATH),
    // Cyrillic: metal taste
    entry("вкус", Cyrillic, METAL),
    entry("металл", Cyrillic, METAL),
];

/// Lexicon indices, longest marker first. At any start position the
/// alternation then prefers the longest marker, so a stem inside a longer
/// marker ("сон" in "бессонниц") is not counted a second time.
static MATCH_ORDER: LazyLock<Vec<usize>> = LazyLock::new(|| {
    let mut order: Vec<usize> = (0..LEXICON.len()).collect();
    order.sort_by_key(|i| std::cmp::Reverse(LEXICON[*i].marker.chars().count()));
    order
});

/// One capture group per lexicon entry, in `MATCH_ORDER`.
static LEXICON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = MATCH_ORDER
        .iter()
        .map(|i| format!("({})", regex::escape(LEXICON[*i].marker)))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){alternation}")).expect("Invalid lexicon pattern")
});

/// Distinct lexicon entries found in `text`, in lexicon order.
///
/// Matches never overlap: one stretch of text counts for one marker only.
/// Single pass over the text.
pub fn find_markers(text: &str) -> Vec<&'static LexiconEntry> {
    let mut found = vec![false; LEXICON.len()];
    for caps in LEXICON_PATTERN.captures_iter(text) {
        if let Some(group) = (1..caps.len()).find(|g| caps.get(*g).is_some()) {
            found[MATCH_ORDER[group - 1]] = true;
        }
    }
    LEXICON
        .iter()
        .zip(found)
        .filter_map(|(entry, hit)| hit.then_some(entry))
        .collect()
}

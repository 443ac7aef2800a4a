//! Duration-based fallback segmentation

use tracing::debug;

use crate::types::Segment;

/// Full-width sentence terminators
const FULL_WIDTH_TERMINATORS: &[char] = &['。', '！', '？'];
/// Closing brackets that stay with the sentence they close
const CLOSING_BRACKETS: &[char] = &['」', '』', '）'];

/// Split text into sentence-like units.
///
/// A unit ends at `.`, `!` or `?` followed by whitespace and an uppercase
/// ASCII letter, or at a full-width `。！？` (plus any closing brackets
/// right after it). Units are trimmed; empty ones are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut units = Vec::new();
    let mut unit_start = 0;
    let mut i = 0;

    while i < chars.len() {
        let (pos, c) = chars[i];

        if matches!(c, '.' | '!' | '?') {
            let mut j = i + 1;
            while j < chars.len() && chars[j].1.is_whitespace() {
                j += 1;
            }
            if j > i + 1 && j < chars.len() && chars[j].1.is_ascii_uppercase() {
                units.push(&text[unit_start..pos + c.len_utf8()]);
                unit_start = chars[j].0;
                i = j;
                continue;
            }
        } else if FULL_WIDTH_TERMINATORS.contains(&c) {
            let mut j = i + 1;
            while j < chars.len() && CLOSING_BRACKETS.contains(&chars[j].1) {
                j += 1;
            }
            let end = chars.get(j).map_or(text.len(), |(p, _)| *p);
            units.push(&text[unit_start..end]);
            unit_start = end;
            i = j;
            continue;
        }

        i += 1;
    }
    units.push(&text[unit_start..]);

    units
        .into_iter()
        .map(str::trim)
        .filter(|unit| !unit.is_empty())
        .collect()
}

/// Spread `duration_ms` evenly over the sentences of `text`.
///
/// Segment `k` spans `[k * slice, (k + 1) * slice)` with
/// `slice = duration_ms / sentence_count`. Empty text or a zero duration
/// gives an empty list.
pub fn auto_segment(text: &str, duration_ms: u64) -> Vec<Segment> {
    if duration_ms == 0 {
        return Vec::new();
    }

    let units = split_sentences(text);
    if units.is_empty() {
        return Vec::new();
    }

    let slice = duration_ms / units.len() as u64;
    debug!(
        "Auto-segmenting {} sentences at {} ms each",
        units.len(),
        slice
    );

    units
        .into_iter()
        .enumerate()
        .map(|(k, unit)| {
            let k = k as u64;
            Segment::new(k * slice, (k + 1) * slice, unit)
        })
        .collect()
}

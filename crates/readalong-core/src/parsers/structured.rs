use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{parse_timestamp_value, TimingParser, DEFAULT_SEGMENT_MS};
use crate::error::TimingError;
use crate::types::Segment;

/// Start-time keys, highest priority first
const START_KEYS: &[&str] = &["start", "startTime", "start_time", "from"];
/// End-time keys, highest priority first
const END_KEYS: &[&str] = &["end", "endTime", "end_time", "to"];
/// Text keys, highest priority first
const TEXT_KEYS: &[&str] = &["text", "content", "transcript", "value"];

/// Parser for JSON timing documents.
///
/// Accepts a bare array of segment objects, `{"segments": [...]}`, or any
/// object with an array-valued property (the first one in document order
/// is used). Field names are resolved against the candidate key lists
/// above; segments missing a usable time or text are dropped.
#[derive(Debug, Clone)]
pub struct StructuredTimingParser {
    default_segment_ms: u64,
}

impl StructuredTimingParser {
    pub fn new(default_segment_ms: u64) -> Self {
        Self { default_segment_ms }
    }

    fn parse_items(&self, items: &[Value]) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(items.len());

        for (i, item) in items.iter().enumerate() {
            let Some(object) = item.as_object() else {
                warn!("Skipping non-object segment at index {}: {}", i, item);
                continue;
            };

            let start = first_present(object, START_KEYS).and_then(time_value_ms);

            let end = first_present(object, END_KEYS)
                .and_then(time_value_ms)
                .or_else(|| {
                    items
                        .get(i + 1)
                        .and_then(Value::as_object)
                        .and_then(|next| first_present(next, START_KEYS))
                        .and_then(time_value_ms)
                })
                .or_else(|| start.map(|s| s.saturating_add(self.default_segment_ms)));

            let text = segment_text(object);

            match (start, end, text) {
                (Some(start), Some(end), Some(text)) if !text.is_empty() => {
                    segments.push(Segment::new(start, end, text));
                }
                _ => warn!("Skipping segment missing required fields: {}", item),
            }
        }

        segments
    }
}

impl Default for StructuredTimingParser {
    fn default() -> Self {
        Self::new(DEFAULT_SEGMENT_MS)
    }
}

impl TimingParser for StructuredTimingParser {
    fn parse(&self, input: &str) -> Result<Vec<Segment>, TimingError> {
        let document: Value = serde_json::from_str(input)?;

        match segment_array(&document) {
            Some(items) => {
                debug!("Found segment array with {} entries", items.len());
                Ok(self.parse_items(items))
            }
            None => {
                warn!("No segment array found in timing document");
                Ok(Vec::new())
            }
        }
    }
}

/// Locate the array holding the segment objects.
fn segment_array(document: &Value) -> Option<&Vec<Value>> {
    match document {
        Value::Array(items) => Some(items),
        Value::Object(object) => object
            .get("segments")
            .and_then(Value::as_array)
            .or_else(|| object.values().find_map(Value::as_array)),
        _ => None,
    }
}

/// Value of the first key in `keys` present on the object.
fn first_present<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| object.get(*key))
}

/// Interpret a JSON time value as milliseconds.
///
/// Numbers are milliseconds already. Strings are tried as `MM:SS.cc`, then
/// as decimal seconds. Anything else (or a negative value) is unresolved.
fn time_value_ms(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|ms| ms.is_finite() && *ms >= 0.0)
                .map(|ms| ms as u64)
        }),
        Value::String(text) => {
            let text = text.trim();
            parse_timestamp_value(text).or_else(|| {
                text.parse::<f64>()
                    .ok()
                    .filter(|secs| secs.is_finite() && *secs >= 0.0)
                    .map(|secs| (secs * 1000.0) as u64)
            })
        }
        _ => None,
    }
}

/// Segment text from the known text keys, else the first string property.
fn segment_text(object: &Map<String, Value>) -> Option<String> {
    match first_present(object, TEXT_KEYS) {
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        Some(_) => None,
        None => object
            .values()
            .find_map(Value::as_str)
            .map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(input: &str) -> Vec<Segment> {
        StructuredTimingParser::default().parse(input).unwrap()
    }

    #[test]
    fn test_last_segment_gets_default_end() {
        let segments = parse(r#"[{"start":0,"end":3000,"text":"A"},{"start":3000,"text":"B"}]"#);
        assert_eq!(
            segments,
            vec![Segment::new(0, 3_000, "A"), Segment::new(3_000, 8_000, "B")]
        );
    }

    #[test]
    fn test_end_borrowed_from_next_start() {
        let segments = parse(r#"[{"start":0,"text":"A"},{"startTime":2500,"text":"B"}]"#);
        assert_eq!(segments[0], Segment::new(0, 2_500, "A"));
        assert_eq!(segments[1], Segment::new(2_500, 7_500, "B"));
    }

    #[test]
    fn test_trailing_malformed_segment_dropped() {
        let segments = parse(
            r#"[{"start":0,"end":1000,"text":"A"},{"start":1000,"end":2000,"text":"B"},{"start":2000,"end":3000}]"#,
        );
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1].text, "B");
    }

    #[test]
    fn test_segments_wrapper() {
        let segments = parse(r#"{"title":"x","segments":[{"from":"00:01.50","to":"2.75","content":"A"}]}"#);
        assert_eq!(segments, vec![Segment::new(1_500, 2_750, "A")]);
    }

    #[test]
    fn test_first_array_property_used() {
        let segments = parse(r#"{"meta":{"n":1},"lines":[{"start_time":10,"end_time":20,"transcript":"A"}],"other":[]}"#);
        assert_eq!(segments, vec![Segment::new(10, 20, "A")]);
    }

    #[test]
    fn test_no_array_yields_empty() {
        assert!(parse(r#"{"title":"no segments here"}"#).is_empty());
        assert!(parse("42").is_empty());
    }

    #[test]
    fn test_text_falls_back_to_first_string_property() {
        let segments = parse(r#"[{"start":0,"end":10,"speaker_line":"A","note":"n"}]"#);
        assert_eq!(segments[0].text, "A");
    }

    #[test]
    fn test_empty_text_dropped() {
        assert!(parse(r#"[{"start":0,"end":10,"text":""}]"#).is_empty());
        assert!(parse(r#"[{"start":0,"end":10,"text":null}]"#).is_empty());
    }

    #[test]
    fn test_unresolved_start_dropped() {
        let segments = parse(r#"[{"start":"soon","end":10,"text":"A"},{"start":5,"end":10,"text":"B"}]"#);
        assert_eq!(segments, vec![Segment::new(5, 10, "B")]);
    }

    #[test]
    fn test_non_object_entries_skipped() {
        let segments = parse(r#"[1, {"start":0,"end":10,"text":"A"}]"#);
        assert_eq!(segments, vec![Segment::new(0, 10, "A")]);
    }

    #[test]
    fn test_syntax_error_is_malformed_document() {
        let result = StructuredTimingParser::default().parse(r#"[{"start":0,"#);
        assert!(matches!(result, Err(TimingError::MalformedDocument(_))));
    }

    #[test]
    fn test_time_value_rule() {
        assert_eq!(time_value_ms(&json!(1500)), Some(1_500));
        assert_eq!(time_value_ms(&json!(1500.9)), Some(1_500));
        assert_eq!(time_value_ms(&json!(-1)), None);
        assert_eq!(time_value_ms(&json!("00:05.25")), Some(5_250));
        assert_eq!(time_value_ms(&json!("00:05.5")), Some(5_500));
        assert_eq!(time_value_ms(&json!("1.25")), Some(1_250));
        assert_eq!(time_value_ms(&json!("later")), None);
        assert_eq!(time_value_ms(&json!(true)), None);
    }

    #[test]
    fn test_key_priority() {
        let segments = parse(r#"[{"from":1,"start":2,"to":9,"end":8,"value":"v","text":"t"}]"#);
        assert_eq!(segments, vec![Segment::new(2, 8, "t")]);
    }
}

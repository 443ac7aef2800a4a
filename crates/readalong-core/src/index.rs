//! Playback position to segment lookup

use crate::types::Segment;

/// Index of the first segment whose `[start, end)` contains `position_ms`.
///
/// Segments are scanned in sequence order, so unsorted or overlapping
/// input still gives a deterministic answer.
pub fn find_active(segments: &[Segment], position_ms: u64) -> Option<usize> {
    segments
        .iter()
        .position(|segment| segment.contains(position_ms))
}

/// Follows playback for the reading view.
///
/// The highlighted segment only changes when the position lands inside
/// another segment; gaps keep the previous highlight.
#[derive(Debug, Clone, Default)]
pub struct ActiveSegmentTracker {
    current: Option<usize>,
    last_position_ms: u64,
}

impl ActiveSegmentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a playback position sample. Returns the new index when the
    /// highlighted segment changed.
    pub fn update(&mut self, segments: &[Segment], position_ms: u64) -> Option<usize> {
        self.last_position_ms = position_ms;

        let found = find_active(segments, position_ms)?;
        if self.current == Some(found) {
            return None;
        }
        self.current = Some(found);
        Some(found)
    }

    /// Currently highlighted segment
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Last sampled position, for saving reading progress
    pub fn last_position_ms(&self) -> u64 {
        self.last_position_ms
    }

    /// Forget the highlight, e.g. after the segment list was replaced
    pub fn reset(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_segments() -> Vec<Segment> {
        vec![
            Segment::new(0, 1_000, "a"),
            Segment::new(1_000, 2_000, "b"),
            Segment::new(3_000, 4_000, "c"),
        ]
    }

    #[test]
    fn test_find_active() {
        let segments = create_segments();
        assert_eq!(find_active(&segments, 0), Some(0));
        assert_eq!(find_active(&segments, 999), Some(0));
        assert_eq!(find_active(&segments, 3_500), Some(2));
    }

    #[test]
    fn test_end_belongs_to_next_segment() {
        let segments = create_segments();
        assert_eq!(find_active(&segments, 1_000), Some(1));
    }

    #[test]
    fn test_gap_and_past_end() {
        let segments = create_segments();
        assert_eq!(find_active(&segments, 2_500), None);
        assert_eq!(find_active(&segments, 4_000), None);
        assert_eq!(find_active(&[], 0), None);
    }

    #[test]
    fn test_overlap_returns_first_in_sequence() {
        let segments = vec![
            Segment::new(5_000, 9_000, "late"),
            Segment::new(0, 6_000, "early"),
        ];
        assert_eq!(find_active(&segments, 5_500), Some(0));
        assert_eq!(find_active(&segments, 1_000), Some(1));
    }

    #[test]
    fn test_tracker_reports_changes_only() {
        let segments = create_segments();
        let mut tracker = ActiveSegmentTracker::new();

        assert_eq!(tracker.update(&segments, 100), Some(0));
        assert_eq!(tracker.update(&segments, 200), None);
        assert_eq!(tracker.update(&segments, 1_000), Some(1));
        assert_eq!(tracker.update(&segments, 2_500), None);
        assert_eq!(tracker.current(), Some(1));
        assert_eq!(tracker.last_position_ms(), 2_500);
        assert_eq!(tracker.update(&segments, 3_000), Some(2));

        tracker.reset();
        assert_eq!(tracker.update(&segments, 3_100), Some(2));
    }
}

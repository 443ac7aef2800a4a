//! Timestamp capture and segment editing

use readalong_core::{time, Segment};
use tracing::{debug, info};

use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::playback::Playback;

/// Which boundary of a segment an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

/// Result of an edit that may be refused for bad input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The segment list changed
    Applied,
    /// Input was rejected; nothing changed
    Ignored,
}

/// What the play/pause button did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Playback started
    Playing,
    /// Playback paused, no capture in progress
    Paused,
    /// Playback paused and the capture for this segment completed
    Captured(usize),
}

/// Capture state machine position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Idle,
    Capturing(usize),
}

/// In-progress capture. Lives for exactly one capture cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureState {
    pub active: bool,
    pub segment_index: Option<usize>,
    pub pending_start: Option<u64>,
}

/// Edit session over a private copy of a segment list.
///
/// Start/end times are captured by playing a segment and pausing when it
/// ends. Recording an end time also moves the next segment's start to it,
/// keeping neighbours contiguous. Nothing reaches the caller's list until
/// [`CaptureEditor::commit`].
pub struct CaptureEditor {
    segments: Vec<Segment>,
    capture: CaptureState,
    config: EditorConfig,
    modified: bool,
}

impl CaptureEditor {
    /// Open a session on a copy of `source`
    pub fn open(source: &[Segment], config: EditorConfig) -> Self {
        Self {
            segments: source.to_vec(),
            capture: CaptureState::default(),
            config,
            modified: false,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn state(&self) -> EditorState {
        match (self.capture.active, self.capture.segment_index) {
            (true, Some(index)) => EditorState::Capturing(index),
            _ => EditorState::Idle,
        }
    }

    pub fn capture_state(&self) -> &CaptureState {
        &self.capture
    }

    /// True once any edit has been applied
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Hand the edited list back to the caller
    pub fn commit(self) -> Vec<Segment> {
        info!("Committing {} edited segments", self.segments.len());
        self.segments
    }

    /// Discard the session; the source list was never touched
    pub fn abandon(self) {
        debug!("Abandoning edit session (modified: {})", self.modified);
    }

    /// Start capturing segment `index`: seek to its start and play.
    ///
    /// If audio is already playing the pending start is taken right away,
    /// otherwise from the next position sample. Calling this while another
    /// capture is running restarts capture on the new segment.
    pub fn begin_capture<P: Playback>(
        &mut self,
        index: usize,
        player: &mut P,
    ) -> Result<(), EditorError> {
        let start = self.segment(index)?.start;

        player.seek(start);

        let pending_start = if player.is_playing() {
            Some(player.position_ms())
        } else {
            player.play();
            None
        };

        self.capture = CaptureState {
            active: true,
            segment_index: Some(index),
            pending_start,
        };
        info!("Capturing segment {} from {}", index, time::format(start));
        Ok(())
    }

    /// Feed a periodic playback position sample.
    pub fn on_position_sample(&mut self, position_ms: u64) {
        if self.capture.active && self.capture.pending_start.is_none() {
            debug!("Capture start recorded at {} ms", position_ms);
            self.capture.pending_start = Some(position_ms);
        }
    }

    /// Play/pause button. Pausing during a capture records the end time
    /// and completes the capture.
    pub fn toggle_playback<P: Playback>(
        &mut self,
        player: &mut P,
    ) -> Result<ToggleOutcome, EditorError> {
        if !player.is_playing() {
            player.play();
            if self.capture.active && self.capture.pending_start.is_none() {
                self.capture.pending_start = Some(player.position_ms());
            }
            return Ok(ToggleOutcome::Playing);
        }

        player.pause();

        let EditorState::Capturing(index) = self.state() else {
            return Ok(ToggleOutcome::Paused);
        };

        let end = player.position_ms();
        // Paused before any sample arrived: the seek target is the start
        let start = match self.capture.pending_start {
            Some(start) => start,
            None => self.segment(index)?.start,
        };
        self.complete_capture(index, start, end)?;
        Ok(ToggleOutcome::Captured(index))
    }

    /// Store captured times on segment `index` and carry `end` over to the
    /// next segment's start. Always leaves the editor idle.
    pub fn complete_capture(
        &mut self,
        index: usize,
        start: u64,
        end: u64,
    ) -> Result<(), EditorError> {
        self.capture = CaptureState::default();

        let segment = self.segment_mut(index)?;
        segment.start = start;
        segment.end = end;
        self.propagate_end(index, end);
        self.modified = true;

        info!(
            "Captured segment {}: {} - {}",
            index,
            time::format(start),
            time::format(end)
        );
        Ok(())
    }

    /// Drop an in-progress capture without touching any segment
    pub fn cancel_capture(&mut self) {
        self.capture = CaptureState::default();
    }

    /// Set segment `index`'s start to the current playback position
    pub fn set_start_now<P: Playback>(&mut self, index: usize, player: &P) -> Result<(), EditorError> {
        self.set_time(index, TimeField::Start, player.position_ms())
    }

    /// Set segment `index`'s end to the current playback position; the
    /// next segment starts there
    pub fn set_end_now<P: Playback>(&mut self, index: usize, player: &P) -> Result<(), EditorError> {
        self.set_time(index, TimeField::End, player.position_ms())
    }

    /// Apply a typed `M:SS` value. Unparseable text is ignored.
    pub fn manual_edit(
        &mut self,
        index: usize,
        field: TimeField,
        text: &str,
    ) -> Result<EditOutcome, EditorError> {
        self.segment(index)?;

        match time::parse(text) {
            Ok(ms) => {
                self.set_time(index, field, ms)?;
                Ok(EditOutcome::Applied)
            }
            Err(e) => {
                debug!("Ignoring edit of segment {}: {}", index, e);
                Ok(EditOutcome::Ignored)
            }
        }
    }

    /// Merge segment `index` into the one before it.
    ///
    /// Texts are joined with a space and the merged segment ends where the
    /// removed one ended. Index 0 has nothing before it and is ignored.
    /// A running capture is cancelled since indices shift.
    pub fn merge(&mut self, index: usize) -> Result<EditOutcome, EditorError> {
        self.segment(index)?;
        if index == 0 {
            return Ok(EditOutcome::Ignored);
        }

        if self.capture.active {
            debug!("Merge cancels capture of segment {:?}", self.capture.segment_index);
            self.cancel_capture();
        }

        let removed = self.segments.remove(index);
        let previous = &mut self.segments[index - 1];
        previous.text = format!("{} {}", previous.text, removed.text);
        previous.end = removed.end;
        self.modified = true;

        info!("Merged segment {} into {}", index, index - 1);
        Ok(EditOutcome::Applied)
    }

    /// Seek back by the configured skip, stopping at 0
    pub fn skip_backward<P: Playback>(&self, player: &mut P) {
        let target = player.position_ms().saturating_sub(self.config.skip_ms);
        player.seek(target);
    }

    /// Seek forward by the configured skip, stopping at the end
    pub fn skip_forward<P: Playback>(&self, player: &mut P) {
        let target = player
            .position_ms()
            .saturating_add(self.config.skip_ms)
            .min(player.duration_ms());
        player.seek(target);
    }

    fn set_time(&mut self, index: usize, field: TimeField, ms: u64) -> Result<(), EditorError> {
        let segment = self.segment_mut(index)?;
        match field {
            TimeField::Start => segment.start = ms,
            TimeField::End => segment.end = ms,
        }
        if field == TimeField::End {
            self.propagate_end(index, ms);
        }
        self.modified = true;
        Ok(())
    }

    fn propagate_end(&mut self, index: usize, end: u64) {
        if let Some(next) = self.segments.get_mut(index + 1) {
            next.start = end;
        }
    }

    fn segment(&self, index: usize) -> Result<&Segment, EditorError> {
        let len = self.segments.len();
        self.segments
            .get(index)
            .ok_or(EditorError::IndexOutOfBounds { index, len })
    }

    fn segment_mut(&mut self, index: usize) -> Result<&mut Segment, EditorError> {
        let len = self.segments.len();
        self.segments
            .get_mut(index)
            .ok_or(EditorError::IndexOutOfBounds { index, len })
    }
}

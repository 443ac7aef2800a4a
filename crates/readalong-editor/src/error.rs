//! Editor error types

use thiserror::Error;

/// Editing errors.
///
/// Bad user input (an unparseable time, merging the first segment) is not
/// an error; those edits come back as [`crate::EditOutcome::Ignored`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditorError {
    /// Caller passed an index past the end of the segment list
    #[error("Segment index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

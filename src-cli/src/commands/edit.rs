//! `edit` command

use std::path::Path;

use anyhow::{bail, Result};
use readalong_core::{ExportFormat, Segment};
use readalong_editor::{CaptureEditor, EditOutcome, EditorConfig, TimeField};
use tracing::warn;

use super::{emit, load_segment_file};
use crate::state::AppState;

/// Edits requested on the command line
pub struct EditPlan {
    pub set_start: Vec<(usize, String)>,
    pub set_end: Vec<(usize, String)>,
    pub merge: Vec<usize>,
}

pub async fn edit(
    state: &AppState,
    segments: &Path,
    plan: EditPlan,
    format: ExportFormat,
    out: Option<&Path>,
) -> Result<()> {
    let source = load_segment_file(state, segments).await?;
    if source.is_empty() {
        bail!("No segments found in {}", segments.display());
    }

    let edited = apply_plan(&source, plan, state.config.editor.clone())?;
    emit(&edited, format, out)
}

/// Time edits run first, in argument order, against the original indices.
/// Merges then run from the highest index down so earlier indices stay put.
fn apply_plan(source: &[Segment], plan: EditPlan, config: EditorConfig) -> Result<Vec<Segment>> {
    let mut editor = CaptureEditor::open(source, config);

    let time_edits = plan
        .set_start
        .into_iter()
        .map(|(index, text)| (index, TimeField::Start, text))
        .chain(
            plan.set_end
                .into_iter()
                .map(|(index, text)| (index, TimeField::End, text)),
        );

    for (index, field, text) in time_edits {
        if editor.manual_edit(index, field, &text)? == EditOutcome::Ignored {
            warn!("Ignored unparseable time {:?} for segment {}", text, index);
        }
    }

    let mut merges = plan.merge;
    merges.sort_unstable_by(|a, b| b.cmp(a));
    merges.dedup();
    for index in merges {
        if editor.merge(index)? == EditOutcome::Ignored {
            warn!("Segment {} has nothing before it to merge into", index);
        }
    }

    if !editor.is_modified() {
        warn!("No edits applied");
    }
    Ok(editor.commit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_segments() -> Vec<Segment> {
        vec![
            Segment::new(0, 3_000, "one"),
            Segment::new(3_000, 6_000, "two"),
            Segment::new(6_000, 9_000, "three"),
            Segment::new(9_000, 12_000, "four"),
        ]
    }

    fn plan() -> EditPlan {
        EditPlan {
            set_start: Vec::new(),
            set_end: Vec::new(),
            merge: Vec::new(),
        }
    }

    #[test]
    fn test_set_end_propagates() {
        let edited = apply_plan(
            &create_segments(),
            EditPlan {
                set_end: vec![(0, "0:02.5".to_string())],
                ..plan()
            },
            EditorConfig::default(),
        )
        .unwrap();

        assert_eq!(edited[0].end, 2_500);
        assert_eq!(edited[1].start, 2_500);
    }

    #[test]
    fn test_merges_apply_highest_first() {
        let edited = apply_plan(
            &create_segments(),
            EditPlan {
                merge: vec![1, 3, 0],
                ..plan()
            },
            EditorConfig::default(),
        )
        .unwrap();

        assert_eq!(
            edited,
            vec![
                Segment::new(0, 6_000, "one two"),
                Segment::new(6_000, 12_000, "three four"),
            ]
        );
    }

    #[test]
    fn test_bad_time_ignored_bad_index_fails() {
        let source = create_segments();
        let edited = apply_plan(
            &source,
            EditPlan {
                set_start: vec![(1, "later".to_string())],
                ..plan()
            },
            EditorConfig::default(),
        )
        .unwrap();
        assert_eq!(edited, source);

        let result = apply_plan(
            &source,
            EditPlan {
                merge: vec![9],
                ..plan()
            },
            EditorConfig::default(),
        );
        assert!(result.is_err());
    }
}
